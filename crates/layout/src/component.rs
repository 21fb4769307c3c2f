use bitflags::bitflags;
use serde::{Deserialize, Serialize};
use stave_types::{RectF, round2};

bitflags! {
    /// Edges of a child kept at a fixed offset from the matching container
    /// edge while the container resizes.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
    pub struct Anchor: u8 {
        const LEFT = 1 << 0;
        const TOP = 1 << 1;
        const RIGHT = 1 << 2;
        const BOTTOM = 1 << 3;
    }
}

impl Default for Anchor {
    fn default() -> Self {
        Anchor::LEFT | Anchor::TOP
    }
}

bitflags! {
    /// Designer-time edit restrictions carried by every component. Not
    /// consulted by the layout engines.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
    pub struct Restrictions: u8 {
        const DONT_MOVE = 1 << 0;
        const DONT_RESIZE = 1 << 1;
        const DONT_MODIFY = 1 << 2;
        const DONT_DELETE = 1 << 3;
    }
}

impl Default for Restrictions {
    fn default() -> Self {
        Restrictions::empty()
    }
}

/// Automatic edge-docking mode. Docked children consume a shrinking
/// remaining-bounds rectangle in z-order; see
/// [`resolve_layout`](crate::algorithms::anchors::resolve_layout).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Dock {
    #[default]
    None,
    Left,
    Top,
    Right,
    Bottom,
    Fill,
}

/// The base visual node: a named, positioned, sized component. Bounds are
/// rounded to 2 decimal places on every mutation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ComponentBase {
    pub name: String,
    left: f32,
    top: f32,
    width: f32,
    height: f32,
    pub anchor: Anchor,
    pub dock: Dock,
    pub visible: bool,
    pub group_index: i32,
    pub restrictions: Restrictions,
}

impl ComponentBase {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            left: 0.0,
            top: 0.0,
            width: 0.0,
            height: 0.0,
            anchor: Anchor::default(),
            dock: Dock::None,
            visible: true,
            group_index: 0,
            restrictions: Restrictions::empty(),
        }
    }

    pub fn left(&self) -> f32 {
        self.left
    }

    pub fn top(&self) -> f32 {
        self.top
    }

    pub fn width(&self) -> f32 {
        self.width
    }

    pub fn height(&self) -> f32 {
        self.height
    }

    pub fn right(&self) -> f32 {
        self.left + self.width
    }

    pub fn bottom(&self) -> f32 {
        self.top + self.height
    }

    pub fn set_left(&mut self, value: f32) {
        self.left = round2(value);
    }

    pub fn set_top(&mut self, value: f32) {
        self.top = round2(value);
    }

    pub fn set_width(&mut self, value: f32) {
        self.width = round2(value);
    }

    pub fn set_height(&mut self, value: f32) {
        self.height = round2(value);
    }

    pub fn bounds(&self) -> RectF {
        RectF::new(self.left, self.top, self.width, self.height)
    }

    pub fn set_bounds(&mut self, bounds: RectF) {
        self.set_left(bounds.left);
        self.set_top(bounds.top);
        self.set_width(bounds.width);
        self.set_height(bounds.height);
    }
}

/// A component name must be a plain identifier: a letter or underscore
/// followed by letters, digits or underscores.
pub fn is_valid_identifier(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bounds_round_to_two_decimals() {
        let mut c = ComponentBase::new("c1");
        c.set_left(10.123_4);
        c.set_height(33.335);
        assert_eq!(c.left(), 10.12);
        assert_eq!(c.height(), 33.34);
    }

    #[test]
    fn identifier_validation() {
        assert!(is_valid_identifier("Band1"));
        assert!(is_valid_identifier("_header"));
        assert!(!is_valid_identifier(""));
        assert!(!is_valid_identifier("1band"));
        assert!(!is_valid_identifier("band one"));
    }

    #[test]
    fn default_anchor_is_top_left() {
        let c = ComponentBase::new("c");
        assert_eq!(c.anchor, Anchor::LEFT | Anchor::TOP);
        assert_eq!(c.dock, Dock::None);
        assert!(c.visible);
    }
}
