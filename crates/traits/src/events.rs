use crate::collaborators::CollaboratorError;
use std::fmt::Debug;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventKind {
    BeforeLayout,
    AfterLayout,
    BeforePrint,
    AfterPrint,
}

/// One hook firing. `source` is the component name, `script` the named
/// script handler attached to the hook (may be empty).
#[derive(Debug, Clone, Copy)]
pub struct Event<'a> {
    pub kind: EventKind,
    pub source: &'a str,
    pub script: &'a str,
}

/// Receives every hook the engine fires. Implementations run native
/// listeners first, then the named script handler.
pub trait EventSink: Debug {
    fn fire(&mut self, event: Event<'_>) -> Result<(), CollaboratorError>;
}

/// Sink that drops every event.
#[derive(Debug, Default)]
pub struct SilentSink;

impl EventSink for SilentSink {
    fn fire(&mut self, _event: Event<'_>) -> Result<(), CollaboratorError> {
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FiredEvent {
    pub kind: EventKind,
    pub source: String,
    pub script: String,
}

/// Records every firing in order, for assertions in tests.
#[derive(Debug, Default)]
pub struct RecordingSink {
    pub fired: Vec<FiredEvent>,
}

impl EventSink for RecordingSink {
    fn fire(&mut self, event: Event<'_>) -> Result<(), CollaboratorError> {
        self.fired.push(FiredEvent {
            kind: event.kind,
            source: event.source.to_owned(),
            script: event.script.to_owned(),
        });
        Ok(())
    }
}
