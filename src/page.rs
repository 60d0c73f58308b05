//! The document the widget paints on.
//!
//! [`ToggleWidget`](crate::theme::toggle::ToggleWidget) never touches a global
//! document directly, every effect goes through this trait. The browser
//! implementation is [`DomPage`](crate::dom::DomPage).

pub trait Page {
    /// Handle of a button element created by this page.
    type Button;

    /// CSS custom property on the root element, e.g. `--bg-color`.
    fn set_root_property(&mut self, name: &str, value: &str);
    fn set_root_attribute(&mut self, name: &str, value: &str);
    fn set_body_colors(&mut self, background: &str, foreground: &str);

    /// Appends a `<style>` element with the given id. The caller removes any
    /// previous fragment with that id first.
    fn insert_style(&mut self, id: &str, css: &str);
    /// Removing a missing fragment is a no-op.
    fn remove_style(&mut self, id: &str);
    /// Removes the fragment once `delay_ms` have passed and the page had a
    /// chance to render.
    fn remove_style_later(&mut self, id: &str, delay_ms: u32);

    /// Creates the button and attaches it to the body.
    fn create_button(&mut self, id: &str, label: &str) -> Self::Button;
    fn set_button_style(&mut self, button: &Self::Button, property: &str, value: &str);
    fn set_button_icon(&mut self, button: &Self::Button, markup: &str);
    /// Detaches the button if it is still attached.
    fn detach_button(&mut self, button: &Self::Button);

    fn notify_theme_change(&mut self, theme: Theme);

    /// Whether the environment asks for a dark color scheme.
    fn prefers_dark(&self) -> bool;
}

use crate::theme::Theme;
