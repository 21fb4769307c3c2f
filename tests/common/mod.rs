pub mod fixtures;

use stave::{
    InMemoryDataSource, LayoutContext, LineMeasurer, NullEvaluator, RecordingSink, StyleSheet,
};

pub type TestResult = Result<(), Box<dyn std::error::Error>>;

/// Collaborator bundle standing in for the surrounding report engine.
#[derive(Debug, Default)]
pub struct World {
    pub evaluator: NullEvaluator,
    pub data: InMemoryDataSource,
    pub measurer: LineMeasurer,
    pub events: RecordingSink,
    pub styles: StyleSheet,
}

impl World {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn ctx(&mut self) -> LayoutContext<'_> {
        LayoutContext {
            evaluator: &mut self.evaluator,
            data: &mut self.data,
            measurer: &self.measurer,
            events: &mut self.events,
            styles: &self.styles,
        }
    }
}
