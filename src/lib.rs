//! Band layout and pagination engine of a banded report designer.
//!
//! Reports are trees of visual components: pages hold bands, bands hold an
//! ordered set of report objects, and every band is re-entered once per
//! data row. This crate implements the part that decides geometry at print
//! time:
//!
//! * growth/shrink of components to their natural content height,
//! * shift propagation between stacked or overlapping siblings,
//! * anchor/dock re-layout when a container resizes,
//! * band splitting across page boundaries, including recursive breaking
//!   of nested breakable containers,
//! * the save/restore row lifecycle around each print pass.
//!
//! Expression evaluation, data binding, text metrics and drawing are
//! collaborator contracts (see [`stave_traits`]); the surrounding report
//! engine implements them and drives one band at a time through
//! [`run_row`].

pub mod runner;

pub use runner::{RowOutcome, run_row};

pub use stave_layout::{
    Anchor, Band, ComponentBase, Dock, LayoutContext, LayoutError, LineObject, ObjectKind,
    PanelObject, PictureObject, PrintOn, ReportComponentBase, ReportObject, ReportPage,
    Restrictions, ShiftMode, TextObject,
};
pub use stave_style::{Border, BorderLines, Fill, LineStyle, Style, StyleSheet};
pub use stave_traits::{
    CollaboratorError, DataSource, Evaluator, Event, EventKind, EventSink, InMemoryDataSource,
    LineMeasurer, NullEvaluator, Painter, RecordingSink, SilentSink, TextMeasurer, Value,
};
pub use stave_types::{Color, EDGE_EPSILON, FLOAT_EPSILON, PointF, RectF};
