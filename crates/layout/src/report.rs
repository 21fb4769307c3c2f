use crate::component::ComponentBase;
use bitflags::bitflags;
use serde::{Deserialize, Serialize};
use stave_style::{Border, Fill, StyleSheet};
use stave_traits::{CollaboratorError, Evaluator, value_to_string};
use stave_types::RectF;

/// Governs whether a component moves when an earlier, vertically-stacked
/// sibling changes height.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum ShiftMode {
    Never,
    #[default]
    Always,
    WhenOverlapped,
}

bitflags! {
    /// Row positions a band is allowed to print on.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
    pub struct PrintOn: u8 {
        const FIRST_ROW = 1 << 0;
        const LAST_ROW = 1 << 1;
        const REPEATED_ROWS = 1 << 2;
    }
}

impl Default for PrintOn {
    fn default() -> Self {
        PrintOn::all()
    }
}

/// Per-print snapshot taken by `save_state` and put back by
/// `restore_state`, so every data row starts from template values.
#[derive(Debug, Clone)]
struct SavedState {
    bounds: RectF,
    visible: bool,
    bookmark: String,
    border: Border,
    fill: Fill,
}

/// Extends [`ComponentBase`] with appearance, grow/shrink behavior and the
/// print lifecycle shared by every report component.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportComponentBase {
    pub component: ComponentBase,
    pub border: Border,
    pub fill: Fill,
    pub can_grow: bool,
    pub can_shrink: bool,
    pub grow_to_bottom: bool,
    pub shift_mode: ShiftMode,
    pub print_on: PrintOn,
    pub style: String,
    pub bookmark_expression: String,
    pub before_print_script: String,
    pub after_print_script: String,
    #[serde(skip)]
    pub bookmark: String,
    #[serde(skip)]
    pub running: bool,
    #[serde(skip)]
    pub designing: bool,
    #[serde(skip)]
    saved: Option<Box<SavedState>>,
}

impl ReportComponentBase {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            component: ComponentBase::new(name),
            border: Border::default(),
            fill: Fill::default(),
            can_grow: false,
            can_shrink: false,
            grow_to_bottom: false,
            shift_mode: ShiftMode::default(),
            print_on: PrintOn::default(),
            style: String::new(),
            bookmark_expression: String::new(),
            before_print_script: String::new(),
            after_print_script: String::new(),
            bookmark: String::new(),
            running: false,
            designing: true,
            saved: None,
        }
    }

    pub fn save_state(&mut self) {
        self.saved = Some(Box::new(SavedState {
            bounds: self.component.bounds(),
            visible: self.component.visible,
            bookmark: self.bookmark.clone(),
            border: self.border.clone(),
            fill: self.fill.clone(),
        }));
    }

    pub fn restore_state(&mut self) {
        if let Some(saved) = self.saved.take() {
            self.component.set_bounds(saved.bounds);
            self.component.visible = saved.visible;
            self.bookmark = saved.bookmark;
            self.border = saved.border;
            self.fill = saved.fill;
        }
    }

    /// Copies border and fill from a named style. Unknown names are a no-op.
    pub fn apply_style(&mut self, styles: &StyleSheet, name: &str) {
        if let Some(style) = styles.find(name) {
            if let Some(border) = &style.border {
                self.border = border.clone();
            }
            if let Some(fill) = &style.fill {
                self.fill = fill.clone();
            }
        }
    }

    pub(crate) fn resolve_bookmark(
        &mut self,
        evaluator: &mut dyn Evaluator,
    ) -> Result<(), CollaboratorError> {
        if !self.bookmark_expression.is_empty() {
            let value = evaluator.calc(&self.bookmark_expression)?;
            self.bookmark = value_to_string(&value);
        }
        Ok(())
    }
}
