//! Contracts the layout core consumes but does not implement: expression
//! evaluation, data binding, text measurement and drawing all live in the
//! surrounding report engine.

use std::collections::HashMap;
use std::fmt::Debug;
use stave_types::RectF;
use thiserror::Error;

/// Dynamic value passed between the engine and its collaborators.
pub type Value = serde_json::Value;

/// Error type for collaborator calls. The layout core never swallows these;
/// they propagate to the caller untouched.
#[derive(Error, Debug, Clone)]
pub enum CollaboratorError {
    #[error("expression evaluation failed: {0}")]
    Script(String),

    #[error("data binding failed: {0}")]
    Data(String),

    #[error("event handler failed: {0}")]
    Event(String),
}

/// Evaluates a bound expression against the current row context. Used to
/// resolve outline text and bookmark values.
pub trait Evaluator: Debug {
    fn calc(&mut self, expression: &str) -> Result<Value, CollaboratorError>;
}

/// Evaluator that resolves every expression to `Value::Null`.
#[derive(Debug, Default)]
pub struct NullEvaluator;

impl Evaluator for NullEvaluator {
    fn calc(&mut self, _expression: &str) -> Result<Value, CollaboratorError> {
        Ok(Value::Null)
    }
}

/// Pulls bound column/parameter values into a component's runtime value.
/// Invoked once per object per row, before height calculation.
pub trait DataSource: Debug {
    fn fetch(&mut self, binding: &str) -> Result<Value, CollaboratorError>;
}

/// A pre-populated row of data, for tests and embedding.
#[derive(Debug, Default)]
pub struct InMemoryDataSource {
    values: HashMap<String, Value>,
}

impl InMemoryDataSource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, binding: impl Into<String>, value: Value) {
        self.values.insert(binding.into(), value);
    }
}

impl DataSource for InMemoryDataSource {
    fn fetch(&mut self, binding: &str) -> Result<Value, CollaboratorError> {
        self.values
            .get(binding)
            .cloned()
            .ok_or_else(|| CollaboratorError::Data(format!("no value bound for '{binding}'")))
    }
}

/// Stand-in for font metrics, which belong to the rendering backend. The
/// engine only needs a height for a piece of text at a given width.
pub trait TextMeasurer: Debug {
    fn text_height(&self, text: &str, width: f32, line_height: f32) -> f32;
}

/// Counts hard line breaks only; wrapping is a renderer concern.
#[derive(Debug, Default)]
pub struct LineMeasurer;

impl TextMeasurer for LineMeasurer {
    fn text_height(&self, text: &str, _width: f32, line_height: f32) -> f32 {
        if text.is_empty() {
            return 0.0;
        }
        text.lines().count() as f32 * line_height
    }
}

/// Rendering contract. The layout/break core never calls this; the page
/// render loop does, after layout completes.
pub trait Painter: Debug {
    fn draw(&mut self, kind: &str, name: &str, bounds: RectF);
}

/// Collapses a collaborator value to the string the engine stores in
/// bookmarks and outline entries.
pub fn value_to_string(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}
