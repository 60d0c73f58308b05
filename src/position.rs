const CENTERING: &str = "translate(-50%, -50%)";

/// Every property an anchor may touch. Properties a position does not use
/// map to an empty value, which clears what a previous anchor left behind.
pub const ANCHOR_PROPERTIES: [&str; 5] = ["top", "right", "bottom", "left", "transform"];

pub type StyleSet = Vec<(&'static str, String)>;

pub fn anchor_styles(position: Position, offset: Offset) -> StyleSet {
    let x = format!("{}px", offset.x);
    let y = format!("{}px", offset.y);

    let (top, right, bottom, left, transform) = match position {
        Position::TopLeft => (Some(y), None, None, Some(x), None),
        Position::TopRight => (Some(y), Some(x), None, None, None),
        Position::BottomLeft => (None, None, Some(y), Some(x), None),
        Position::BottomRight => (None, Some(x), Some(y), None, None),
        Position::FixedCenter => (
            Some("50%".to_owned()),
            None,
            None,
            Some("50%".to_owned()),
            Some(CENTERING.to_owned()),
        ),
    };

    ANCHOR_PROPERTIES
        .into_iter()
        .zip([top, right, bottom, left, transform])
        .map(|(property, value)| (property, value.unwrap_or_default()))
        .collect()
}

pub fn hover_transform(position: Position, hovered: bool) -> String {
    let scale = if hovered { "scale(1.1)" } else { "scale(1)" };
    match position {
        Position::FixedCenter => format!("{CENTERING} {scale}"),
        _ => scale.to_owned(),
    }
}


use crate::config::{Offset, Position};
