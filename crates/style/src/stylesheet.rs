//! Named appearance styles shared across a report, looked up by the even-row
//! styling pass and by explicit style assignment.

use crate::border::Border;
use crate::fill::Fill;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Style {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub border: Option<Border>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fill: Option<Fill>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StyleSheet {
    styles: HashMap<String, Style>,
}

impl StyleSheet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, name: impl Into<String>, style: Style) {
        self.styles.insert(name.into(), style);
    }

    pub fn find(&self, name: &str) -> Option<&Style> {
        self.styles.get(name)
    }

    pub fn is_empty(&self) -> bool {
        self.styles.is_empty()
    }
}
