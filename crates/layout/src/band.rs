//! The band: a horizontal strip of a report page, re-entered once per data
//! row. Owns an ordered object collection and at most one child band
//! printed immediately after it, sharing the same row context.

use crate::LayoutError;
use crate::algorithms::anchors::resolve_layout;
use crate::algorithms::breaking::{find_break_line, relocate};
use crate::algorithms::height::calc_stack_height;
use crate::context::LayoutContext;
use crate::objects::{ReportObject, validate_child};
use crate::report::{PrintOn, ReportComponentBase};
use serde::{Deserialize, Serialize};
use stave_traits::{EventKind, value_to_string};
use stave_types::FLOAT_EPSILON;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Band {
    pub base: ReportComponentBase,
    objects: Vec<ReportObject>,
    pub child: Option<Box<Band>>,
    pub start_new_page: bool,
    pub first_row_starts_new_page: bool,
    pub print_on_bottom: bool,
    pub keep_child: bool,
    pub can_break: bool,
    repeat_band_n_times: u32,
    row_no: i32,
    abs_row_no: i32,
    pub is_first_row: bool,
    pub is_last_row: bool,
    repeated: bool,
    flag_check_free_space: bool,
    pub outline_expression: String,
    pub even_style: String,
    pub before_layout_script: String,
    pub after_layout_script: String,
    #[serde(skip)]
    pub outline_text: String,
    #[serde(skip)]
    updating_layout: bool,
    #[serde(skip)]
    saved_object_count: Option<usize>,
}

impl Band {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            base: ReportComponentBase::new(name),
            objects: Vec::new(),
            child: None,
            start_new_page: false,
            first_row_starts_new_page: false,
            print_on_bottom: false,
            keep_child: false,
            can_break: false,
            repeat_band_n_times: 1,
            row_no: 0,
            abs_row_no: 0,
            is_first_row: false,
            is_last_row: false,
            repeated: false,
            flag_check_free_space: false,
            outline_expression: String::new(),
            even_style: String::new(),
            before_layout_script: String::new(),
            after_layout_script: String::new(),
            outline_text: String::new(),
            updating_layout: false,
            saved_object_count: None,
        }
    }

    pub fn name(&self) -> &str {
        &self.base.component.name
    }

    pub fn objects(&self) -> &[ReportObject] {
        &self.objects
    }

    pub fn objects_mut(&mut self) -> std::slice::IterMut<'_, ReportObject> {
        self.objects.iter_mut()
    }

    pub(crate) fn objects_vec_mut(&mut self) -> &mut Vec<ReportObject> {
        &mut self.objects
    }

    pub fn add_object(&mut self, object: ReportObject) -> Result<(), LayoutError> {
        validate_child(&self.base.component.name, &self.objects, &object)?;
        self.objects.push(object);
        Ok(())
    }

    pub fn left(&self) -> f32 {
        self.base.component.left()
    }

    pub fn top(&self) -> f32 {
        self.base.component.top()
    }

    pub fn width(&self) -> f32 {
        self.base.component.width()
    }

    pub fn height(&self) -> f32 {
        self.base.component.height()
    }

    pub fn set_left(&mut self, value: f32) {
        self.base.component.set_left(value);
    }

    pub fn set_top(&mut self, value: f32) {
        self.base.component.set_top(value);
    }

    /// Resizing re-layouts children by the delta before the new size is
    /// committed.
    pub fn set_width(&mut self, value: f32) {
        let dx = value - self.base.component.width();
        self.update_layout(dx, 0.0);
        self.base.component.set_width(value);
    }

    pub fn set_height(&mut self, value: f32) {
        let dy = value - self.base.component.height();
        self.update_layout(0.0, dy);
        self.base.component.set_height(value);
    }

    pub fn update_layout(&mut self, dx: f32, dy: f32) {
        if self.updating_layout {
            return;
        }
        self.updating_layout = true;
        resolve_layout(
            &mut self.objects,
            self.base.component.width(),
            self.base.component.height(),
            dx,
            dy,
        );
        self.updating_layout = false;
    }

    // Row-context properties propagate down the child chain: setting one on
    // a band sets it, identically, on every child band transitively.

    pub fn row_no(&self) -> i32 {
        self.row_no
    }

    pub fn set_row_no(&mut self, value: i32) {
        self.row_no = value;
        if let Some(child) = &mut self.child {
            child.set_row_no(value);
        }
    }

    pub fn abs_row_no(&self) -> i32 {
        self.abs_row_no
    }

    pub fn set_abs_row_no(&mut self, value: i32) {
        self.abs_row_no = value;
        if let Some(child) = &mut self.child {
            child.set_abs_row_no(value);
        }
    }

    pub fn repeated(&self) -> bool {
        self.repeated
    }

    pub fn set_repeated(&mut self, value: bool) {
        self.repeated = value;
        if let Some(child) = &mut self.child {
            child.set_repeated(value);
        }
    }

    pub fn flag_check_free_space(&self) -> bool {
        self.flag_check_free_space
    }

    pub fn set_flag_check_free_space(&mut self, value: bool) {
        self.flag_check_free_space = value;
        if let Some(child) = &mut self.child {
            child.set_flag_check_free_space(value);
        }
    }

    pub fn repeat_band_n_times(&self) -> u32 {
        self.repeat_band_n_times
    }

    pub fn set_repeat_band_n_times(&mut self, value: u32) {
        self.repeat_band_n_times = value.max(1);
    }

    /// Whether the band prints on the current row, per its `print_on`
    /// flags.
    pub fn printable(&self) -> bool {
        if self.is_first_row && !self.base.print_on.contains(PrintOn::FIRST_ROW) {
            return false;
        }
        if self.is_last_row && !self.base.print_on.contains(PrintOn::LAST_ROW) {
            return false;
        }
        if self.repeated && !self.base.print_on.contains(PrintOn::REPEATED_ROWS) {
            return false;
        }
        true
    }

    /// Computes and commits the band's final height: candidate heights for
    /// every growable child, shift propagation between stacked siblings,
    /// then the atomic apply pass. Fires the before/after layout hooks
    /// around the computation.
    pub fn calc_height(&mut self, ctx: &mut LayoutContext) -> Result<f32, LayoutError> {
        ctx.fire(
            EventKind::BeforeLayout,
            &self.base.component.name,
            &self.before_layout_script,
        )?;
        let height = calc_stack_height(
            &mut self.objects,
            self.base.component.height(),
            self.base.can_grow,
            self.base.can_shrink,
            ctx,
        )?;
        self.set_height(height);
        ctx.fire(
            EventKind::AfterLayout,
            &self.base.component.name,
            &self.after_layout_script,
        )?;
        log::trace!("band '{}' height {:.2}", self.base.component.name, height);
        Ok(height)
    }

    /// Splits this band at a computed break line, relocating objects past
    /// the line into `dest`. The caller pre-sizes `dest` to the full
    /// content height; the continuation inherits only the leftover.
    /// Returns whether any objects remained here.
    pub fn break_to(&mut self, dest: &mut Band) -> bool {
        let height = self.base.component.height();
        if height < FLOAT_EPSILON {
            return false;
        }
        let break_line = find_break_line(&self.objects, height);
        log::debug!(
            "band '{}' breaks at {:.2} of {:.2}",
            self.base.component.name,
            break_line,
            height
        );
        let remained = relocate(&mut self.objects, break_line, dest.objects_vec_mut());
        self.set_height(break_line);
        dest.set_height(dest.base.component.height() - break_line);
        remained
    }

    /// Pushes only the overflow tail into a footer-like sibling: the cut
    /// line is the top of the last row of objects; straddlers split the
    /// same way a page break splits them, and moved content is normalized
    /// to start at the destination's natural top.
    pub fn add_last_to_footer(&mut self, footer: &mut Band) {
        if self.objects.is_empty() {
            return;
        }
        let cut = self.objects.iter().map(|o| o.top()).fold(f32::MIN, f32::max);
        let line = find_break_line(&self.objects, cut);
        relocate(&mut self.objects, line, footer.objects_vec_mut());
        let moved = (self.base.component.height() - line).max(0.0);
        self.set_height(line);
        footer.set_height(footer.base.component.height() + moved);
    }

    /// A same-template empty copy used as the destination of a break: all
    /// band properties, no objects, no child chain.
    pub fn continuation(&self) -> Band {
        let mut cont = self.clone();
        cont.objects.clear();
        cont.child = None;
        cont.saved_object_count = None;
        cont
    }

    /// Brackets a print pass: snapshot the object count and every owned
    /// object's mutable state, mark everything running, fire `BeforePrint`
    /// hooks, then apply the even-row style override when applicable.
    pub fn save_state(&mut self, ctx: &mut LayoutContext) -> Result<(), LayoutError> {
        self.base.save_state();
        self.saved_object_count = Some(self.objects.len());
        self.base.running = true;
        self.base.designing = false;
        for obj in &mut self.objects {
            obj.save_state();
            obj.base_mut().running = true;
            obj.base_mut().designing = false;
        }
        if !self.outline_expression.is_empty() {
            let value = ctx.evaluator.calc(&self.outline_expression)?;
            self.outline_text = value_to_string(&value);
        }
        ctx.fire(
            EventKind::BeforePrint,
            &self.base.component.name,
            &self.base.before_print_script,
        )?;
        for obj in &self.objects {
            ctx.fire(EventKind::BeforePrint, obj.name(), &obj.base().before_print_script)?;
        }
        if self.row_no % 2 == 0 && !self.even_style.is_empty() {
            self.base.apply_style(ctx.styles, &self.even_style);
            for obj in &mut self.objects {
                obj.base_mut().apply_style(ctx.styles, &self.even_style);
            }
        }
        Ok(())
    }

    /// Undoes a print pass: the band's own `AfterPrint` fires before the
    /// base restore; objects added during printing (break fragments) are
    /// disposed; every remaining object is restored and after-printed.
    pub fn restore_state(&mut self, ctx: &mut LayoutContext) -> Result<(), LayoutError> {
        ctx.fire(
            EventKind::AfterPrint,
            &self.base.component.name,
            &self.base.after_print_script,
        )?;
        self.base.restore_state();
        let saved = self.saved_object_count.take().unwrap_or(self.objects.len());
        self.objects.truncate(saved);
        self.base.running = false;
        for obj in &mut self.objects {
            obj.restore_state();
            obj.base_mut().running = false;
            ctx.fire(EventKind::AfterPrint, obj.name(), &obj.base().after_print_script)?;
        }
        Ok(())
    }
}
