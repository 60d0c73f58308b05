use crate::helpers::{spawn_widget, TestApp};
use claim::{assert_none, assert_some};
use theme_toggle::icons::{MOON, SUN};
use theme_toggle::{DefaultTheme, Position, Theme, ToggleOptions, BUTTON_ID};

fn with_default(default_theme: DefaultTheme) -> ToggleOptions {
    ToggleOptions {
        default_theme,
        ..ToggleOptions::default()
    }
}

#[test]
fn construction_attaches_one_button_and_marks_root() {
    let configs = [
        ToggleOptions::default(),
        with_default(DefaultTheme::Dark),
        ToggleOptions {
            position: Position::FixedCenter,
            size: 70.,
            use_filter: true,
            ..with_default(DefaultTheme::Dark)
        },
        ToggleOptions {
            exclude_selectors: vec!["pre".into()],
            ..ToggleOptions::default()
        },
    ];

    for options in configs {
        let app = spawn_widget(options);
        let expected = app.widget.theme().as_str().to_owned();

        assert_eq!(app.page.attached_buttons(), 1);
        assert_eq!(app.page.data_theme(), Some(expected));

        let button = app.button();
        assert_eq!(button.id, BUTTON_ID);
        assert_eq!(button.label, "Toggle theme");
    }
}

#[test]
fn toggling_from_light_goes_dark_everywhere() {
    let mut app = spawn_widget(with_default(DefaultTheme::Light));
    assert_eq!(app.widget.theme(), Theme::Light);
    assert_eq!(app.button().icon, MOON);

    assert_eq!(app.widget.toggle(), Theme::Dark);

    assert_eq!(app.page.data_theme().as_deref(), Some("dark"));
    assert_eq!(app.store.stored_theme().as_deref(), Some("dark"));
    assert_eq!(app.page.last_notification(), Some(Theme::Dark));
    assert_eq!(
        app.page.root_property("--bg-color").as_deref(),
        Some("#1a1a1a")
    );
    assert_eq!(
        app.page.root_property("--text-color").as_deref(),
        Some("#ffffff")
    );

    let button = app.button();
    assert_eq!(button.icon, SUN);
    assert_eq!(button.style("background"), Some("#f0f0f0"));
    assert_eq!(button.style("color"), Some("#2d2d2d"));
    assert_eq!(button.style("border"), Some("2px solid #2d2d2d"));
}

#[test]
fn toggling_twice_restores_the_original_palette() {
    let mut app = spawn_widget(ToggleOptions {
        dark_color: "#0d1117".into(),
        ..ToggleOptions::default()
    });
    let body_before = app.page.state().body_colors.clone();
    let bg_before = app.page.root_property("--bg-color");

    app.widget.toggle();
    assert_ne!(app.page.state().body_colors, body_before);
    app.widget.toggle();

    assert_eq!(app.widget.theme(), Theme::Light);
    assert_eq!(app.page.state().body_colors, body_before);
    assert_eq!(app.page.root_property("--bg-color"), bg_before);
    assert_eq!(app.button().icon, MOON);
}

#[test]
fn every_application_notifies() {
    let mut app = spawn_widget(ToggleOptions::default());
    app.widget.toggle();
    app.widget.toggle();

    assert_eq!(
        app.page.state().notifications,
        vec![Theme::Light, Theme::Dark, Theme::Light]
    );
}

#[test]
fn transitions_are_suppressed_only_for_the_first_paint() {
    let mut app = spawn_widget(ToggleOptions::default());
    assert_some!(app.page.style("no-transition"));
    assert_eq!(
        app.page.state().pending_removals,
        vec![("no-transition".to_owned(), theme_toggle::TRANSITION_SETTLE_MS)]
    );

    app.page.settle();
    assert_none!(app.page.style("no-transition"));

    app.widget.toggle();
    assert_none!(app.page.style("no-transition"));
    assert!(app.page.state().pending_removals.is_empty());
}

#[test]
fn destroy_is_idempotent() {
    let mut app = spawn_widget(ToggleOptions::default());

    app.widget.destroy();
    app.widget.destroy();

    assert!(app.widget.is_destroyed());
    assert_eq!(app.page.attached_buttons(), 0);
    assert_eq!(app.page.buttons_created(), 1);
}

#[test]
fn destroy_leaves_style_fragments_in_place() {
    let mut app = spawn_widget(ToggleOptions {
        exclude_selectors: vec!["video".into()],
        ..ToggleOptions::default()
    });

    app.widget.destroy();

    assert_some!(app.page.style("exclude-styles"));
}

#[test]
fn toggling_after_destroy_persists_without_a_button() {
    let mut app = spawn_widget(ToggleOptions::default());
    app.widget.destroy();

    app.widget.toggle();

    assert_eq!(app.widget.theme(), Theme::Dark);
    assert_eq!(app.store.stored_theme().as_deref(), Some("dark"));
    assert_none!(app.widget.button());
    assert_eq!(app.page.buttons_created(), 1);
    assert_eq!(app.page.attached_buttons(), 0);
}

#[test]
fn hover_scales_the_button() {
    let mut app = spawn_widget(ToggleOptions::default());

    app.widget.set_hovered(true);
    assert_eq!(app.button().style("transform"), Some("scale(1.1)"));

    app.widget.set_hovered(false);
    assert_eq!(app.button().style("transform"), Some("scale(1)"));
}

#[test]
fn button_reflects_size_and_stacking() {
    let app: TestApp = spawn_widget(ToggleOptions {
        size: 45.,
        z_index: 1000,
        transition: "0.5s linear".into(),
        ..ToggleOptions::default()
    });
    let button = app.button();

    assert_eq!(button.style("width"), Some("45px"));
    assert_eq!(button.style("height"), Some("45px"));
    assert_eq!(button.style("font-size"), Some("22.5px"));
    assert_eq!(button.style("z-index"), Some("1000"));
    assert_eq!(button.style("transition"), Some("all 0.5s linear"));
    assert_eq!(button.style("position"), Some("fixed"));
}

#[test]
fn fractional_size_is_kept() {
    let app = spawn_widget(ToggleOptions {
        size: 48.5,
        ..ToggleOptions::default()
    });
    let button = app.button();

    assert_eq!(button.style("width"), Some("48.5px"));
    assert_eq!(button.style("font-size"), Some("24.25px"));
}
