use crate::LayoutError;
use stave_style::StyleSheet;
use stave_traits::{DataSource, Evaluator, Event, EventKind, EventSink, TextMeasurer};

/// Everything the layout and break engines need from the surrounding report
/// engine, passed explicitly into each entry point instead of living as a
/// back-pointer on every node.
pub struct LayoutContext<'a> {
    pub evaluator: &'a mut dyn Evaluator,
    pub data: &'a mut dyn DataSource,
    pub measurer: &'a dyn TextMeasurer,
    pub events: &'a mut dyn EventSink,
    pub styles: &'a StyleSheet,
}

impl<'a> LayoutContext<'a> {
    pub fn fire(
        &mut self,
        kind: EventKind,
        source: &str,
        script: &str,
    ) -> Result<(), LayoutError> {
        self.events.fire(Event {
            kind,
            source,
            script,
        })?;
        Ok(())
    }
}
