pub mod collaborators;
pub mod events;

pub use collaborators::{
    CollaboratorError, DataSource, Evaluator, InMemoryDataSource, LineMeasurer, NullEvaluator,
    Painter, TextMeasurer, Value, value_to_string,
};
pub use events::{Event, EventKind, EventSink, FiredEvent, RecordingSink, SilentSink};
