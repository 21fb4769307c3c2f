use stave_traits::CollaboratorError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum LayoutError {
    #[error("'{parent}' cannot contain a {child} child")]
    CannotContain { parent: String, child: &'static str },
    #[error("duplicate component name: {0}")]
    DuplicateName(String),
    #[error("invalid component name: {0}")]
    InvalidName(String),
    #[error(transparent)]
    Collaborator(#[from] CollaboratorError),
}

pub mod algorithms;
pub mod band;
pub mod component;
pub mod context;
pub mod objects;
pub mod page;
pub mod report;

pub use band::Band;
pub use component::{Anchor, ComponentBase, Dock, Restrictions};
pub use context::LayoutContext;
pub use objects::{LineObject, ObjectKind, PanelObject, PictureObject, ReportObject, TextObject};
pub use page::ReportPage;
pub use report::{PrintOn, ReportComponentBase, ShiftMode};

// Re-export geometry types used throughout to prevent type mismatches
pub use stave_types::{EDGE_EPSILON, FLOAT_EPSILON, PointF, RectF};
