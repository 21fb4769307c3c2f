use stave::{Band, RectF, ReportObject, TextObject};

/// A band of the given height, named like a data band.
pub fn data_band(name: &str, height: f32) -> Band {
    let mut band = Band::new(name);
    band.set_height(height);
    band
}

/// A fixed text area (no grow, no break) with a 10pt line height.
pub fn fixed_text(name: &str, left: f32, top: f32, width: f32, height: f32) -> ReportObject {
    let mut text = TextObject::new(name);
    text.base.component.set_bounds(RectF::new(left, top, width, height));
    text.line_height = 10.0;
    text.can_break = false;
    ReportObject::Text(text)
}

/// A growable, breakable text area holding `lines` hard lines at 10pt.
pub fn grow_text(name: &str, left: f32, top: f32, width: f32, lines: usize) -> ReportObject {
    let mut text = TextObject::new(name);
    text.base.component
        .set_bounds(RectF::new(left, top, width, 10.0));
    text.base.can_grow = true;
    text.line_height = 10.0;
    text.text = template_lines(lines);
    ReportObject::Text(text)
}

/// A growable, breakable text area bound to a data column.
pub fn bound_text(name: &str, binding: &str, left: f32, top: f32, width: f32) -> ReportObject {
    let mut text = TextObject::new(name);
    text.base.component
        .set_bounds(RectF::new(left, top, width, 10.0));
    text.base.can_grow = true;
    text.line_height = 10.0;
    text.data_binding = binding.into();
    ReportObject::Text(text)
}

/// `lines` hard lines of sample text.
pub fn template_lines(lines: usize) -> String {
    (0..lines)
        .map(|i| format!("line {i}"))
        .collect::<Vec<_>>()
        .join("\n")
}
