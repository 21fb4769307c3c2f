pub mod color;
pub mod geometry;

pub use color::Color;
pub use geometry::{EDGE_EPSILON, FLOAT_EPSILON, PointF, RectF, fuzzy_eq, round2};
