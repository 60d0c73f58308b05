pub const BUTTON_ID: &str = "theme-toggle-button";

/// How long transitions stay disabled after the initial paint.
pub const TRANSITION_SETTLE_MS: u32 = 50;

const BG_COLOR_VAR: &str = "--bg-color";
const TEXT_COLOR_VAR: &str = "--text-color";
const THEME_ATTRIBUTE: &str = "data-theme";

/// Floating button switching the page between light and dark.
///
/// Lifecycle: `new` paints the page and attaches the button, `toggle` may be
/// called any number of times, `destroy` detaches the button for good.
/// Toggling after `destroy` still repaints the page, notifies and persists,
/// only the button is gone.
#[derive(derivative::Derivative)]
#[derivative(Debug(bound = ""))]
pub struct ToggleWidget<P: Page, S: PreferenceStore> {
    options: ToggleOptions,
    theme: Theme,

    #[derivative(Debug = "ignore")]
    button: Option<P::Button>,
    #[derivative(Debug = "ignore")]
    page: P,
    #[derivative(Debug = "ignore")]
    store: S,
}

impl<P: Page, S: PreferenceStore> ToggleWidget<P, S> {
    pub fn new(options: ToggleOptions, page: P, store: S) -> Self {
        let theme = remembered(&store)
            .unwrap_or_else(|| options.default_theme.resolve(|| page.prefers_dark()));

        let mut widget = Self {
            options,
            theme,
            button: None,
            page,
            store,
        };

        widget.apply_theme(theme, true);
        widget.create_button();

        log::debug!(
            "theme toggle ready: {} at {}",
            widget.theme,
            widget.options.position.as_str()
        );
        widget
    }

    pub fn theme(&self) -> Theme {
        self.theme
    }

    pub fn options(&self) -> &ToggleOptions {
        &self.options
    }

    pub fn button(&self) -> Option<&P::Button> {
        self.button.as_ref()
    }

    pub fn is_destroyed(&self) -> bool {
        self.button.is_none()
    }

    pub fn toggle(&mut self) -> Theme {
        self.theme = self.theme.toggled();
        self.apply_theme(self.theme, false);
        self.remember();

        if let Some(button) = &self.button {
            Self::paint_button(&mut self.page, button, self.theme, &self.options);
        }

        log::debug!("theme toggled to {}", self.theme);
        self.theme
    }

    /// Moves the live button, `offset` defaults to the current one.
    pub fn update_position(&mut self, position: Position, offset: Option<Offset>) {
        self.options.position = position;
        if let Some(offset) = offset {
            self.options.offset = offset;
        }

        if let Some(button) = &self.button {
            for (property, value) in anchor_styles(position, self.options.offset) {
                self.page.set_button_style(button, property, &value);
            }
        }
    }

    pub fn set_hovered(&mut self, hovered: bool) {
        if let Some(button) = &self.button {
            let transform = hover_transform(self.options.position, hovered);
            self.page.set_button_style(button, "transform", &transform);
        }
    }

    /// Detaches the button. Injected style fragments stay in the page.
    pub fn destroy(&mut self) {
        if let Some(button) = self.button.take() {
            self.page.detach_button(&button);
            log::debug!("theme toggle destroyed");
        }
    }

    fn apply_theme(&mut self, theme: Theme, initial: bool) {
        if initial {
            self.replace_style(styles::NO_TRANSITION, Some(styles::no_transition()));
        }

        let palette = theme.palette(&self.options);
        self.page.set_root_property(BG_COLOR_VAR, &palette.background);
        self.page.set_root_property(TEXT_COLOR_VAR, &palette.foreground);
        self.page.set_root_attribute(THEME_ATTRIBUTE, theme.as_str());
        self.page
            .set_body_colors(&palette.background, &palette.foreground);

        if self.options.use_filter {
            self.replace_style(styles::EXCLUDE_STYLES, None);
            let filter = (theme == Theme::Dark).then(|| styles::filter(&self.options));
            self.replace_style(styles::FILTER_STYLE, filter);
        } else {
            self.replace_style(styles::FILTER_STYLE, None);
            let exclude = styles::exclude(&self.options);
            self.replace_style(styles::EXCLUDE_STYLES, exclude);
        }

        if initial {
            self.page
                .remove_style_later(styles::NO_TRANSITION, TRANSITION_SETTLE_MS);
        }

        self.page.notify_theme_change(theme);
    }

    fn replace_style(&mut self, id: &str, css: Option<String>) {
        self.page.remove_style(id);
        if let Some(css) = css {
            self.page.insert_style(id, &css);
        }
    }

    fn create_button(&mut self) {
        let button = self.page.create_button(BUTTON_ID, &self.options.aria_label);

        let size = self.options.size;
        let base = [
            ("position", "fixed".to_owned()),
            ("width", format!("{size}px")),
            ("height", format!("{size}px")),
            ("border-radius", "50%".to_owned()),
            ("cursor", "pointer".to_owned()),
            ("display", "flex".to_owned()),
            ("align-items", "center".to_owned()),
            ("justify-content", "center".to_owned()),
            ("padding", "0".to_owned()),
            ("font-size", format!("{}px", size * 0.5)),
            ("box-shadow", "0 4px 12px rgba(0, 0, 0, 0.15)".to_owned()),
            ("transition", format!("all {}", self.options.transition)),
            ("z-index", self.options.z_index.to_string()),
            ("outline", "none".to_owned()),
        ];

        for (property, value) in base
            .into_iter()
            .chain(anchor_styles(self.options.position, self.options.offset))
        {
            self.page.set_button_style(&button, property, &value);
        }

        Self::paint_button(&mut self.page, &button, self.theme, &self.options);
        self.button = Some(button);
    }

    fn paint_button(page: &mut P, button: &P::Button, theme: Theme, options: &ToggleOptions) {
        let palette = theme.button_palette(options);

        page.set_button_icon(button, icon(theme));
        page.set_button_style(button, "background", &palette.background);
        page.set_button_style(button, "color", &palette.foreground);
        page.set_button_style(
            button,
            "border",
            &format!("2px solid {}", palette.foreground),
        );
    }

    fn remember(&mut self) {
        if let Err(e) = self.store.save(Theme::STORAGE_KEY, self.theme.as_str()) {
            log::warn!("failed to save theme preference: {e}");
        }
    }
}

fn remembered(store: &impl PreferenceStore) -> Option<Theme> {
    match store.load(Theme::STORAGE_KEY) {
        Ok(Some(value)) => match Theme::try_from(value.as_str()) {
            Ok(theme) => Some(theme),
            Err(()) => {
                log::debug!("ignoring unknown stored theme {value:?}");
                None
            }
        },
        Ok(None) => None,
        Err(e) => {
            log::warn!("failed to read theme preference: {e}");
            None
        }
    }
}

use super::themes::Theme;
use crate::config::{Offset, Position, ToggleOptions};
use crate::icons::icon;
use crate::page::Page;
use crate::position::{anchor_styles, hover_transform};
use crate::storage::PreferenceStore;
use crate::styles;
