#[derive(Clone, Debug, PartialEq, Eq, Copy, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    Light,
    Dark,
}

impl Default for Theme {
    fn default() -> Self {
        Self::Light
    }
}

impl Theme {
    pub const STORAGE_KEY: &'static str = "theme-preference";

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    /// Colors written to the page for this theme.
    ///
    /// With an inverting filter active the dark case is painted with the
    /// light palette, the filter turns it dark.
    pub fn palette(self, options: &ToggleOptions) -> Palette {
        match self.painted_as(options) {
            Self::Dark => Palette {
                background: options.dark_color.clone(),
                foreground: options.light_color.clone(),
            },
            Self::Light => Palette {
                background: options.light_color.clone(),
                foreground: options.dark_color.clone(),
            },
        }
    }

    pub fn button_palette(self, options: &ToggleOptions) -> Palette {
        let (background, foreground) = match self.painted_as(options) {
            Self::Dark => ("#f0f0f0", "#2d2d2d"),
            Self::Light => ("#2d2d2d", "#f0f0f0"),
        };

        Palette {
            background: background.to_owned(),
            foreground: foreground.to_owned(),
        }
    }

    fn painted_as(self, options: &ToggleOptions) -> Self {
        match self {
            Self::Dark if options.use_filter => Self::Light,
            theme => theme,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Palette {
    pub background: String,
    pub foreground: String,
}

impl TryFrom<&str> for Theme {
    type Error = ();
    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let theme = match value {
            "light" => Self::Light,
            "dark" => Self::Dark,
            _ => return Err(()),
        };
        debug_assert_eq!(
            theme.as_str(),
            value,
            "resulting theme's storage value must match with the provided value"
        );
        Ok(theme)
    }
}

impl std::fmt::Display for Theme {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}


use crate::config::ToggleOptions;
use serde::{Deserialize, Serialize};
