//! `<style>` fragments the widget injects into the page, keyed by element id.

pub const NO_TRANSITION: &str = "no-transition";
pub const EXCLUDE_STYLES: &str = "exclude-styles";
pub const FILTER_STYLE: &str = "filter-style";

pub fn no_transition() -> String {
    "*, *::before, *::after { transition: none !important; }".to_owned()
}

/// Excluded elements stay in the light palette. `None` when there is nothing
/// to exclude.
pub fn exclude(options: &ToggleOptions) -> Option<String> {
    if options.exclude_selectors.is_empty() {
        return None;
    }

    Some(format!(
        "{selectors} {{ background-color: {light} !important; color: {dark} !important; }}",
        selectors = options.exclude_selectors.join(", "),
        light = options.light_color,
        dark = options.dark_color,
    ))
}

/// Inverts the whole page. The button and the exempt selectors get the same
/// filter again, which cancels the inversion for them.
pub fn filter(options: &ToggleOptions) -> String {
    let filter = &options.filter_value;

    let exempt = std::iter::once(format!("#{BUTTON_ID}"))
        .chain(options.filter_exclude_selectors.iter().cloned())
        .collect::<Vec<_>>()
        .join(", ");

    format!("html {{ filter: {filter}; }}\n{exempt} {{ filter: {filter}; }}")
}


use crate::config::ToggleOptions;
use crate::theme::toggle::BUTTON_ID;
