use crate::helpers::spawn_widget;
use theme_toggle::{Offset, Position, ToggleOptions};

#[test]
fn update_position_moves_the_same_button() {
    let mut app = spawn_widget(ToggleOptions::default());
    let before = *app.widget.button().expect("button");
    assert_eq!(app.button().style("bottom"), Some("20px"));

    app.widget
        .update_position(Position::TopLeft, Some(Offset { x: 5., y: 5. }));

    assert_eq!(app.widget.button(), Some(&before));
    assert_eq!(app.page.buttons_created(), 1);

    let button = app.button();
    assert_eq!(button.style("top"), Some("5px"));
    assert_eq!(button.style("left"), Some("5px"));
    assert_eq!(button.style("bottom"), None);
    assert_eq!(button.style("right"), None);
    assert_eq!(app.widget.options().position, Position::TopLeft);
}

#[test]
fn update_position_keeps_offset_when_none_given() {
    let mut app = spawn_widget(ToggleOptions {
        offset: Offset { x: 30., y: 80. },
        ..ToggleOptions::default()
    });

    app.widget.update_position(Position::TopRight, None);

    let button = app.button();
    assert_eq!(button.style("top"), Some("80px"));
    assert_eq!(button.style("right"), Some("30px"));
}

#[test]
fn centered_button_keeps_translate_on_hover() {
    let mut app = spawn_widget(ToggleOptions::default());

    app.widget.update_position(Position::FixedCenter, None);
    assert_eq!(
        app.button().style("transform"),
        Some("translate(-50%, -50%)")
    );

    app.widget.set_hovered(true);
    assert_eq!(
        app.button().style("transform"),
        Some("translate(-50%, -50%) scale(1.1)")
    );

    app.widget.update_position(Position::BottomLeft, None);
    assert_eq!(app.button().style("transform"), None);
    assert_eq!(app.button().style("top"), None);
}

#[test]
fn update_position_after_destroy_only_updates_options() {
    let mut app = spawn_widget(ToggleOptions::default());
    app.widget.destroy();

    app.widget.update_position(Position::TopLeft, None);

    assert_eq!(app.widget.options().position, Position::TopLeft);
    assert_eq!(app.page.attached_buttons(), 0);
}
