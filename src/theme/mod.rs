pub mod themes;
pub mod toggle;

pub use themes::{Palette, Theme};

pub mod prelude {
    pub use super::themes::Theme;
    pub use super::toggle::ToggleWidget;
}
