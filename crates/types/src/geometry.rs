use serde::{Deserialize, Serialize};

/// General float-equality tolerance used by the layout engines.
pub const FLOAT_EPSILON: f32 = 0.001;

/// Tolerance for top/bottom adjacency and horizontal overlap tests during
/// shift propagation.
pub const EDGE_EPSILON: f32 = 1e-4;

/// Component bounds are kept at 2 decimal places; every mutation goes
/// through this.
pub fn round2(value: f32) -> f32 {
    (value * 100.0).round() / 100.0
}

pub fn fuzzy_eq(a: f32, b: f32) -> bool {
    (a - b).abs() < FLOAT_EPSILON
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct PointF {
    pub x: f32,
    pub y: f32,
}

impl PointF {
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct RectF {
    pub left: f32,
    pub top: f32,
    pub width: f32,
    pub height: f32,
}

impl RectF {
    pub fn new(left: f32, top: f32, width: f32, height: f32) -> Self {
        Self {
            left,
            top,
            width,
            height,
        }
    }

    pub fn right(&self) -> f32 {
        self.left + self.width
    }

    pub fn bottom(&self) -> f32 {
        self.top + self.height
    }

    /// True when the horizontal spans of `self` and `other` intersect within
    /// [`EDGE_EPSILON`].
    pub fn overlaps_horizontally(&self, other: &RectF) -> bool {
        self.left <= other.right() - EDGE_EPSILON && other.left <= self.right() - EDGE_EPSILON
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn round2_keeps_two_decimals() {
        assert_eq!(round2(1.004_9), 1.0);
        assert_eq!(round2(1.005_1), 1.01);
        assert_eq!(round2(-3.333_3), -3.33);
    }

    #[test]
    fn horizontal_overlap_respects_epsilon() {
        let a = RectF::new(0.0, 0.0, 50.0, 10.0);
        let b = RectF::new(50.0, 20.0, 50.0, 10.0);
        // Touching edges do not count as overlap.
        assert!(!a.overlaps_horizontally(&b));
        let c = RectF::new(49.0, 20.0, 50.0, 10.0);
        assert!(a.overlaps_horizontally(&c));
    }
}
