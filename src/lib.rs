//! Floating light / dark toggle for any web page.
//!
//! The widget itself, [`ToggleWidget`], paints through the [`Page`] trait and
//! persists through [`PreferenceStore`], so it runs against the browser
//! ([`DomPage`], [`LocalPreferenceStore`]) or against in-memory doubles.
//! JavaScript uses the [`ThemeToggle`] class exported by `wasm-bindgen`.

pub mod app;
pub mod config;
pub mod dom;
pub mod icons;
pub mod page;
pub mod position;
pub mod storage;
pub mod styles;
pub mod telemetry;
pub mod theme;

pub use app::ThemeToggle;
pub use config::{DefaultTheme, Offset, Position, ToggleOptions};
pub use dom::{DomPage, ThemeChange, THEME_CHANGED_EVENT};
pub use page::Page;
pub use storage::{LocalPreferenceStore, PreferenceStore, StorageError};
pub use theme::toggle::{ToggleWidget, BUTTON_ID, TRANSITION_SETTLE_MS};
pub use theme::Theme;
