//! The concrete report objects a band can hold. One tagged variant per
//! object type; the engines dispatch over [`ReportObject`] by match.

use crate::LayoutError;
use crate::algorithms::anchors::resolve_layout;
use crate::algorithms::breaking::{find_break_line, relocate};
use crate::algorithms::height::calc_stack_height;
use crate::band::Band;
use crate::component::is_valid_identifier;
use crate::context::LayoutContext;
use crate::report::ReportComponentBase;
use serde::{Deserialize, Serialize};
use stave_traits::{Value, value_to_string};
use stave_types::{EDGE_EPSILON, FLOAT_EPSILON, RectF};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ObjectKind {
    Text,
    Picture,
    Line,
    Panel,
    Band,
}

impl ObjectKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ObjectKind::Text => "Text",
            ObjectKind::Picture => "Picture",
            ObjectKind::Line => "Line",
            ObjectKind::Panel => "Panel",
            ObjectKind::Band => "Band",
        }
    }
}

/// A data-bound text area, the bread-and-butter report object. The runtime
/// `value` is what gets measured and broken; the template `text` survives
/// the row lifecycle untouched.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TextObject {
    pub base: ReportComponentBase,
    pub text: String,
    pub data_binding: String,
    pub line_height: f32,
    pub can_break: bool,
    #[serde(skip)]
    pub value: String,
    #[serde(skip)]
    saved_value: Option<String>,
}

impl TextObject {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            base: ReportComponentBase::new(name),
            text: String::new(),
            data_binding: String::new(),
            line_height: 12.0,
            can_break: true,
            value: String::new(),
            saved_value: None,
        }
    }

    /// The text currently displayed: the bound runtime value when present,
    /// the template text otherwise.
    pub fn display(&self) -> &str {
        if self.value.is_empty() {
            &self.text
        } else {
            &self.value
        }
    }

    fn break_off(&mut self, fragment: Option<&mut ReportObject>) -> bool {
        if !self.can_break || self.line_height <= 0.0 {
            return false;
        }
        let kept_lines =
            ((self.base.component.height() + EDGE_EPSILON) / self.line_height).floor() as usize;
        if kept_lines == 0 {
            return false;
        }
        if let Some(ReportObject::Text(rest)) = fragment {
            let lines: Vec<&str> = self.display().lines().collect();
            let (kept, moved) = if kept_lines < lines.len() {
                (lines[..kept_lines].join("\n"), lines[kept_lines..].join("\n"))
            } else {
                (lines.join("\n"), String::new())
            };
            rest.text = moved.clone();
            rest.value = moved;
            self.value = kept;
        }
        true
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PictureObject {
    pub base: ReportComponentBase,
    pub source: String,
    pub data_binding: String,
    #[serde(skip)]
    pub value: Value,
}

impl PictureObject {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            base: ReportComponentBase::new(name),
            source: String::new(),
            data_binding: String::new(),
            value: Value::Null,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LineObject {
    pub base: ReportComponentBase,
    pub diagonal: bool,
}

impl LineObject {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            base: ReportComponentBase::new(name),
            diagonal: false,
        }
    }
}

/// A nested container: holds its own ordered children and runs the same
/// height/shift and break machinery as a band, which is what makes
/// "breakable object inside a breakable object" work.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PanelObject {
    pub base: ReportComponentBase,
    pub objects: Vec<ReportObject>,
    pub can_break: bool,
    #[serde(skip)]
    updating_layout: bool,
}

impl PanelObject {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            base: ReportComponentBase::new(name),
            objects: Vec::new(),
            can_break: true,
            updating_layout: false,
        }
    }

    pub fn add_object(&mut self, object: ReportObject) -> Result<(), LayoutError> {
        validate_child(&self.base.component.name, &self.objects, &object)?;
        self.objects.push(object);
        Ok(())
    }

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

    fn calc_height(&mut self, ctx: &mut LayoutContext) -> Result<f32, LayoutError> {
        calc_stack_height(
            &mut self.objects,
            self.base.component.height(),
            self.base.can_grow,
            self.base.can_shrink,
            ctx,
        )
    }

    fn break_off(&mut self, fragment: Option<&mut ReportObject>) -> bool {
        if !self.can_break {
            return false;
        }
        let assigned = self.base.component.height();
        match fragment {
            None => find_break_line(&self.objects, assigned) > FLOAT_EPSILON,
            Some(ReportObject::Panel(dest)) => {
                // assign_all cloned the children; the moved originals
                // replace them
                dest.objects.clear();
                let line = find_break_line(&self.objects, assigned);
                let remained = relocate(&mut self.objects, line, &mut dest.objects);
                if line < assigned - FLOAT_EPSILON {
                    // a non-breakable child forced the line further up; the
                    // difference belongs to the continuation
                    let extra = assigned - line;
                    let dest_height = dest.base.component.height();
                    dest.base.component.set_height(dest_height + extra);
                    self.set_height(line);
                }
                remained
            }
            Some(_) => false,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum ReportObject {
    Text(TextObject),
    Picture(PictureObject),
    Line(LineObject),
    Panel(PanelObject),
    Band(Band),
}

impl ReportObject {
    pub fn kind(&self) -> ObjectKind {
        match self {
            ReportObject::Text(_) => ObjectKind::Text,
            ReportObject::Picture(_) => ObjectKind::Picture,
            ReportObject::Line(_) => ObjectKind::Line,
            ReportObject::Panel(_) => ObjectKind::Panel,
            ReportObject::Band(_) => ObjectKind::Band,
        }
    }

    pub fn base(&self) -> &ReportComponentBase {
        match self {
            ReportObject::Text(o) => &o.base,
            ReportObject::Picture(o) => &o.base,
            ReportObject::Line(o) => &o.base,
            ReportObject::Panel(o) => &o.base,
            ReportObject::Band(b) => &b.base,
        }
    }

    pub fn base_mut(&mut self) -> &mut ReportComponentBase {
        match self {
            ReportObject::Text(o) => &mut o.base,
            ReportObject::Picture(o) => &mut o.base,
            ReportObject::Line(o) => &mut o.base,
            ReportObject::Panel(o) => &mut o.base,
            ReportObject::Band(b) => &mut b.base,
        }
    }

    pub fn name(&self) -> &str {
        &self.base().component.name
    }

    pub fn left(&self) -> f32 {
        self.base().component.left()
    }

    pub fn top(&self) -> f32 {
        self.base().component.top()
    }

    pub fn width(&self) -> f32 {
        self.base().component.width()
    }

    pub fn height(&self) -> f32 {
        self.base().component.height()
    }

    pub fn right(&self) -> f32 {
        self.base().component.right()
    }

    pub fn bottom(&self) -> f32 {
        self.base().component.bottom()
    }

    pub fn bounds(&self) -> RectF {
        self.base().component.bounds()
    }

    pub fn set_left(&mut self, value: f32) {
        self.base_mut().component.set_left(value);
    }

    pub fn set_top(&mut self, value: f32) {
        self.base_mut().component.set_top(value);
    }

    /// Width changes on containers re-layout their children by the delta
    /// before the new size is committed.
    pub fn set_width(&mut self, value: f32) {
        match self {
            ReportObject::Panel(p) => p.set_width(value),
            ReportObject::Band(b) => b.set_width(value),
            other => other.base_mut().component.set_width(value),
        }
    }

    pub fn set_height(&mut self, value: f32) {
        match self {
            ReportObject::Panel(p) => p.set_height(value),
            ReportObject::Band(b) => b.set_height(value),
            other => other.base_mut().component.set_height(value),
        }
    }

    pub fn is_breakable(&self) -> bool {
        match self {
            ReportObject::Text(t) => t.can_break,
            ReportObject::Panel(p) => p.can_break,
            ReportObject::Band(b) => b.can_break,
            _ => false,
        }
    }

    /// A same-variant default instance, ready to receive `assign_all`. This
    /// is how break fragments of the right concrete type come into being.
    pub fn clone_empty(&self) -> ReportObject {
        match self {
            ReportObject::Text(_) => ReportObject::Text(TextObject::new("")),
            ReportObject::Picture(_) => ReportObject::Picture(PictureObject::new("")),
            ReportObject::Line(_) => ReportObject::Line(LineObject::new("")),
            ReportObject::Panel(_) => ReportObject::Panel(PanelObject::new("")),
            ReportObject::Band(_) => ReportObject::Band(Band::new("")),
        }
    }

    /// Copies every property of `source` onto `self`, children included.
    pub fn assign_all(&mut self, source: &ReportObject) {
        *self = source.clone();
    }

    /// Pulls bound values through the data collaborator and resolves the
    /// bookmark expression. Invoked once per object per row, before height
    /// calculation.
    pub fn get_data(&mut self, ctx: &mut LayoutContext) -> Result<(), LayoutError> {
        if !self.base().bookmark_expression.is_empty() {
            self.base_mut().resolve_bookmark(ctx.evaluator)?;
        }
        match self {
            ReportObject::Text(t) => {
                if !t.data_binding.is_empty() {
                    t.value = value_to_string(&ctx.data.fetch(&t.data_binding)?);
                }
            }
            ReportObject::Picture(p) => {
                if !p.data_binding.is_empty() {
                    p.value = ctx.data.fetch(&p.data_binding)?;
                }
            }
            ReportObject::Line(_) => {}
            ReportObject::Panel(p) => {
                for obj in &mut p.objects {
                    obj.get_data(ctx)?;
                }
            }
            ReportObject::Band(b) => {
                for obj in b.objects_mut() {
                    obj.get_data(ctx)?;
                }
            }
        }
        Ok(())
    }

    /// The natural height of this object's current content. Fixed-geometry
    /// leaves report their template height; containers cascade.
    pub fn calc_height(&mut self, ctx: &mut LayoutContext) -> Result<f32, LayoutError> {
        match self {
            ReportObject::Text(t) => Ok(ctx.measurer.text_height(
                t.display(),
                t.base.component.width(),
                t.line_height,
            )),
            ReportObject::Picture(p) => Ok(p.base.component.height()),
            ReportObject::Line(l) => Ok(l.base.component.height()),
            ReportObject::Panel(p) => p.calc_height(ctx),
            ReportObject::Band(b) => b.calc_height(ctx),
        }
    }

    /// Splits this object's content at its current height. With `None` this
    /// is a probe: report whether a split would succeed, change nothing
    /// observable. With a fragment, move the overflow into it.
    pub fn break_off(&mut self, fragment: Option<&mut ReportObject>) -> bool {
        match self {
            ReportObject::Text(t) => t.break_off(fragment),
            ReportObject::Panel(p) => p.break_off(fragment),
            ReportObject::Band(b) => match fragment {
                Some(ReportObject::Band(dest)) => b.break_to(dest),
                None => b.can_break && b.base.component.height() > FLOAT_EPSILON,
                Some(_) => false,
            },
            _ => false,
        }
    }

    pub fn save_state(&mut self) {
        self.base_mut().save_state();
        match self {
            ReportObject::Text(t) => t.saved_value = Some(t.value.clone()),
            ReportObject::Panel(p) => {
                for obj in &mut p.objects {
                    obj.save_state();
                }
            }
            _ => {}
        }
    }

    pub fn restore_state(&mut self) {
        self.base_mut().restore_state();
        match self {
            ReportObject::Text(t) => {
                if let Some(value) = t.saved_value.take() {
                    t.value = value;
                }
            }
            ReportObject::Panel(p) => {
                for obj in &mut p.objects {
                    obj.restore_state();
                }
            }
            _ => {}
        }
    }
}

/// Attach validation shared by every container: the child type must be
/// accepted, the name must be a valid identifier and unique among siblings.
pub(crate) fn validate_child(
    parent: &str,
    siblings: &[ReportObject],
    child: &ReportObject,
) -> Result<(), LayoutError> {
    if matches!(child, ReportObject::Band(_)) {
        return Err(LayoutError::CannotContain {
            parent: parent.to_owned(),
            child: child.kind().as_str(),
        });
    }
    if !is_valid_identifier(child.name()) {
        return Err(LayoutError::InvalidName(child.name().to_owned()));
    }
    if siblings.iter().any(|o| o.name() == child.name()) {
        return Err(LayoutError::DuplicateName(child.name().to_owned()));
    }
    Ok(())
}
