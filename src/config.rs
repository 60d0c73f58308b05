//! Construction options of the toggle.
//!
//! Every field has a default, so a JavaScript caller may pass any subset of
//! keys (camelCase) and the rest is filled in field by field.

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ToggleOptions {
    pub position: Position,
    pub offset: Offset,
    /// Button side length in pixels, also scales the icon.
    pub size: f64,
    pub dark_color: String,
    pub light_color: String,
    /// CSS transition spec, applied as `all <transition>`.
    pub transition: String,
    pub z_index: i32,
    pub default_theme: DefaultTheme,
    /// Kept in the light palette when the filter mode is off.
    pub exclude_selectors: Vec<String>,
    pub use_filter: bool,
    pub filter_value: String,
    /// Receive the filter a second time so they render unchanged.
    pub filter_exclude_selectors: Vec<String>,
    pub aria_label: String,
}

impl Default for ToggleOptions {
    fn default() -> Self {
        Self {
            position: Position::default(),
            offset: Offset::default(),
            size: 50.,
            dark_color: "#1a1a1a".into(),
            light_color: "#ffffff".into(),
            transition: "0.3s ease".into(),
            z_index: 9999,
            default_theme: DefaultTheme::default(),
            exclude_selectors: vec![],
            use_filter: false,
            filter_value: "invert(1) hue-rotate(180deg)".into(),
            filter_exclude_selectors: ["img", "video", "picture", "canvas", "iframe"]
                .into_iter()
                .map(String::from)
                .collect(),
            aria_label: "Toggle theme".into(),
        }
    }
}

#[derive(thiserror::Error, Debug)]
pub enum OptionsError {
    #[error("options must be an object")]
    NotAnObject,

    #[error("invalid value for option `{key}`")]
    Field {
        key: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("invalid button offset")]
    Offset(#[source] serde_json::Error),
}

impl ToggleOptions {
    /// Overlays the caller's keys onto the defaults one at a time. A key whose
    /// value does not fit its field is rejected on its own, every other key
    /// still applies.
    pub fn from_partial(value: &Value) -> (Self, Vec<OptionsError>) {
        let supplied = match value {
            Value::Null => return (Self::default(), vec![]),
            Value::Object(supplied) => supplied,
            _ => return (Self::default(), vec![OptionsError::NotAnObject]),
        };

        let mut merged = match serde_json::to_value(Self::default()) {
            Ok(Value::Object(merged)) => merged,
            _ => Map::new(),
        };
        let mut options = Self::default();
        let mut rejected = vec![];

        for (key, field) in supplied {
            let mut candidate = merged.clone();
            candidate.insert(key.clone(), field.clone());

            match serde_json::from_value(Value::Object(candidate.clone())) {
                Ok(accepted) => {
                    options = accepted;
                    merged = candidate;
                }
                Err(source) => rejected.push(OptionsError::Field {
                    key: key.clone(),
                    source,
                }),
            }
        }

        (options, rejected)
    }
}

impl Offset {
    /// `null` means "keep the current offset".
    pub fn from_partial(value: &Value) -> Result<Option<Self>, OptionsError> {
        if value.is_null() {
            return Ok(None);
        }

        Self::deserialize(value)
            .map(Some)
            .map_err(OptionsError::Offset)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Position {
    TopLeft,
    TopRight,
    BottomLeft,
    #[default]
    BottomRight,
    FixedCenter,
}

impl Position {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::TopLeft => "top-left",
            Self::TopRight => "top-right",
            Self::BottomLeft => "bottom-left",
            Self::BottomRight => "bottom-right",
            Self::FixedCenter => "fixed-center",
        }
    }
}

// unknown names anchor to the default corner
impl From<&str> for Position {
    fn from(value: &str) -> Self {
        match value {
            "top-left" => Self::TopLeft,
            "top-right" => Self::TopRight,
            "bottom-left" => Self::BottomLeft,
            "bottom-right" => Self::BottomRight,
            "fixed-center" | "fixed" => Self::FixedCenter,
            _ => Self::default(),
        }
    }
}

impl From<String> for Position {
    fn from(value: String) -> Self {
        Self::from(value.as_str())
    }
}

impl From<Position> for String {
    fn from(value: Position) -> Self {
        value.as_str().to_owned()
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Offset {
    pub x: f64,
    pub y: f64,
}

impl Default for Offset {
    fn default() -> Self {
        Self { x: 20., y: 20. }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DefaultTheme {
    #[default]
    Light,
    Dark,
    System,
}

impl DefaultTheme {
    /// `prefers_dark` is only consulted for [`DefaultTheme::System`].
    pub fn resolve(self, prefers_dark: impl FnOnce() -> bool) -> Theme {
        match self {
            Self::Light => Theme::Light,
            Self::Dark => Theme::Dark,
            Self::System => {
                if prefers_dark() {
                    Theme::Dark
                } else {
                    Theme::Light
                }
            }
        }
    }
}


use crate::theme::Theme;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
