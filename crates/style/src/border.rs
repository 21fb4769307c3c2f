use bitflags::bitflags;
use serde::{Deserialize, Serialize};
use stave_types::Color;

bitflags! {
    /// Which edges of a component carry a border line.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
    pub struct BorderLines: u8 {
        const LEFT = 1 << 0;
        const RIGHT = 1 << 1;
        const TOP = 1 << 2;
        const BOTTOM = 1 << 3;
        const ALL = Self::LEFT.bits() | Self::RIGHT.bits() | Self::TOP.bits() | Self::BOTTOM.bits();
    }
}

impl Default for BorderLines {
    fn default() -> Self {
        BorderLines::empty()
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum LineStyle {
    #[default]
    Solid,
    Dash,
    Dot,
    DashDot,
    DashDotDot,
    Double,
}

/// Border of a report component. An owned value object: components clone it
/// on copy, two components never share one by reference.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Border {
    pub lines: BorderLines,
    pub color: Color,
    pub width: f32,
    pub style: LineStyle,
}

impl Default for Border {
    fn default() -> Self {
        Self {
            lines: BorderLines::empty(),
            color: Color::default(),
            width: 1.0,
            style: LineStyle::Solid,
        }
    }
}

impl Border {
    pub fn all(color: Color, width: f32) -> Self {
        Self {
            lines: BorderLines::ALL,
            color,
            width,
            style: LineStyle::Solid,
        }
    }
}
