mod common;

use common::fixtures::*;
use common::{TestResult, World};
use serde_json::json;
use stave::{
    Anchor, CollaboratorError, Event, EventKind, EventSink, LayoutError, ReportObject,
};

#[test]
fn test_bound_value_drives_growth() -> TestResult {
    let _ = env_logger::builder().is_test(true).try_init();

    let mut world = World::new();
    world
        .data
        .insert("customer.notes", json!("a\nb\nc\nd"));

    let mut band = data_band("data1", 30.0);
    band.base.can_grow = true;
    band.add_object(bound_text("notes", "customer.notes", 0.0, 0.0, 100.0))?;

    let mut ctx = world.ctx();
    for obj in band.objects_mut() {
        obj.get_data(&mut ctx)?;
    }
    let height = band.calc_height(&mut ctx)?;

    assert_eq!(band.objects()[0].height(), 40.0);
    assert_eq!(height, 40.0);
    Ok(())
}

#[test]
fn test_anchor_stretch_on_band_resize() -> TestResult {
    let mut band = data_band("data1", 40.0);
    band.set_width(200.0);
    let mut stretchy = fixed_text("stretchy", 10.0, 0.0, 100.0, 20.0);
    stretchy.base_mut().component.anchor = Anchor::LEFT | Anchor::TOP | Anchor::RIGHT;
    band.add_object(stretchy)?;

    band.set_width(250.0);

    assert_eq!(band.objects()[0].left(), 10.0);
    assert_eq!(band.objects()[0].width(), 150.0);
    Ok(())
}

#[test]
fn test_unanchored_child_floats_centered() -> TestResult {
    let mut band = data_band("data1", 40.0);
    band.set_width(200.0);
    let mut floating = fixed_text("floating", 50.0, 0.0, 40.0, 20.0);
    floating.base_mut().component.anchor = Anchor::TOP;
    band.add_object(floating)?;

    band.set_width(220.0);

    assert_eq!(band.objects()[0].left(), 60.0);
    Ok(())
}

#[test]
fn test_zero_delta_layout_changes_nothing() -> TestResult {
    let mut band = data_band("data1", 40.0);
    band.set_width(200.0);
    band.add_object(fixed_text("t1", 5.0, 5.0, 60.0, 20.0))?;
    let before = band.objects()[0].bounds();

    band.update_layout(0.0, 0.0);

    assert_eq!(band.objects()[0].bounds(), before);
    Ok(())
}

#[test]
fn test_missing_binding_propagates() -> TestResult {
    let mut world = World::new();
    let mut band = data_band("data1", 30.0);
    band.add_object(bound_text("orphan", "no.such.column", 0.0, 0.0, 100.0))?;

    let mut ctx = world.ctx();
    let err = band
        .objects_mut()
        .next()
        .unwrap()
        .get_data(&mut ctx)
        .unwrap_err();

    assert!(matches!(
        err,
        LayoutError::Collaborator(CollaboratorError::Data(_))
    ));
    Ok(())
}

/// Sink whose native listener fails on the first hook it sees.
#[derive(Debug)]
struct FailingSink;

impl EventSink for FailingSink {
    fn fire(&mut self, event: Event<'_>) -> Result<(), CollaboratorError> {
        Err(CollaboratorError::Event(format!(
            "listener for {:?} on '{}' exploded",
            event.kind, event.source
        )))
    }
}

#[test]
fn test_event_hook_failure_propagates_uncaught() -> TestResult {
    let mut world = World::new();
    let mut failing = FailingSink;
    let mut band = data_band("data1", 30.0);
    band.add_object(fixed_text("t1", 0.0, 0.0, 100.0, 10.0))?;

    let mut ctx = stave::LayoutContext {
        evaluator: &mut world.evaluator,
        data: &mut world.data,
        measurer: &world.measurer,
        events: &mut failing,
        styles: &world.styles,
    };
    let err = band.calc_height(&mut ctx).unwrap_err();

    assert!(matches!(
        err,
        LayoutError::Collaborator(CollaboratorError::Event(_))
    ));
    Ok(())
}

#[test]
fn test_layout_hooks_fire_in_order() -> TestResult {
    let mut world = World::new();
    let mut band = data_band("data1", 30.0);
    band.before_layout_script = "OnBeforeLayout".into();
    band.after_layout_script = "OnAfterLayout".into();

    band.calc_height(&mut world.ctx())?;

    let kinds: Vec<EventKind> = world.events.fired.iter().map(|e| e.kind).collect();
    assert_eq!(kinds, vec![EventKind::BeforeLayout, EventKind::AfterLayout]);
    assert_eq!(world.events.fired[1].script, "OnAfterLayout");
    Ok(())
}

#[test]
fn test_line_separator_shifts_under_grown_content() -> TestResult {
    let mut world = World::new();
    let mut band = data_band("data1", 60.0);
    band.base.can_grow = true;
    band.add_object(grow_text("body", 0.0, 0.0, 100.0, 4))?;
    let mut rule = stave::LineObject::new("rule1");
    rule.base.component.set_bounds(stave::RectF::new(0.0, 10.0, 100.0, 1.0));
    band.add_object(ReportObject::Line(rule))?;

    band.calc_height(&mut world.ctx())?;

    // the separator rides down under the grown body
    assert_eq!(band.objects()[1].top(), 40.0);
    Ok(())
}

#[test]
fn test_panel_children_follow_panel_resize() -> TestResult {
    let mut band = data_band("data1", 60.0);
    let mut panel = stave::PanelObject::new("panel1");
    panel.base.component.set_bounds(stave::RectF::new(0.0, 0.0, 100.0, 50.0));
    let mut pinned = fixed_text("pinned", 0.0, 40.0, 100.0, 10.0);
    pinned.base_mut().component.anchor = Anchor::LEFT | Anchor::BOTTOM;
    panel.add_object(pinned)?;
    band.add_object(ReportObject::Panel(panel))?;

    band.objects_mut().next().unwrap().set_height(70.0);

    let ReportObject::Panel(panel) = &band.objects()[0] else {
        panic!("expected panel");
    };
    assert_eq!(panel.objects[0].top(), 60.0);
    Ok(())
}
