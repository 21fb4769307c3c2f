use serde::{Deserialize, Serialize};
use stave_types::Color;

/// Background fill of a report component. Owned and cloned on copy, like
/// [`Border`](crate::Border).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub enum Fill {
    #[default]
    Transparent,
    Solid(Color),
}

impl Fill {
    pub fn solid(color: Color) -> Self {
        Fill::Solid(color)
    }

    pub fn is_transparent(&self) -> bool {
        matches!(self, Fill::Transparent)
    }
}
