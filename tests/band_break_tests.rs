mod common;

use common::fixtures::*;
use common::{TestResult, World};
use serde_json::json;
use stave::{ReportObject, run_row};

#[test]
fn test_row_fits_without_continuation() -> TestResult {
    let _ = env_logger::builder().is_test(true).try_init();

    let mut world = World::new();
    let mut band = data_band("data1", 30.0);
    band.base.can_grow = true;
    band.add_object(grow_text("body", 0.0, 0.0, 100.0, 3))?;

    let outcome = run_row(&mut band, &mut world.ctx(), 100.0)?;

    assert_eq!(outcome.height, 30.0);
    assert!(outcome.continuation.is_none());
    Ok(())
}

#[test]
fn test_row_overflow_produces_continuation() -> TestResult {
    let _ = env_logger::builder().is_test(true).try_init();

    let mut world = World::new();
    world.data.insert("row.body", json!(template_lines(8)));

    let mut band = data_band("data1", 30.0);
    band.base.can_grow = true;
    band.add_object(bound_text("body", "row.body", 0.0, 0.0, 100.0))?;

    let outcome = run_row(&mut band, &mut world.ctx(), 50.0)?;

    assert_eq!(outcome.height, 50.0);
    assert_eq!(band.objects()[0].height(), 50.0);

    let cont = outcome.continuation.expect("should overflow");
    assert_eq!(cont.height(), 30.0);
    let fragment = &cont.objects()[0];
    assert_eq!(fragment.top(), 0.0);
    assert_eq!(fragment.height(), 30.0);
    assert!(fragment.base().can_grow);
    assert!(!fragment.base().can_shrink);

    let ReportObject::Text(kept) = &band.objects()[0] else {
        panic!("expected text");
    };
    let ReportObject::Text(moved) = fragment else {
        panic!("expected text");
    };
    assert_eq!(kept.display().lines().count(), 5);
    assert_eq!(moved.display().lines().count(), 3);
    Ok(())
}

#[test]
fn test_break_conserves_every_object() -> TestResult {
    let mut world = World::new();
    let mut band = data_band("data1", 20.0);
    band.base.can_grow = true;
    band.add_object(fixed_text("header", 0.0, 0.0, 100.0, 20.0))?;
    band.add_object(grow_text("body", 0.0, 20.0, 100.0, 6))?;
    band.add_object(fixed_text("footer_rule", 0.0, 80.0, 100.0, 10.0))?;

    let outcome = run_row(&mut band, &mut world.ctx(), 50.0)?;
    let cont = outcome.continuation.expect("should overflow");

    // every template object shows up exactly once, split objects in both
    let names: Vec<&str> = band
        .objects()
        .iter()
        .chain(cont.objects())
        .map(|o| o.name())
        .collect();
    assert_eq!(names, vec!["header", "body", "body", "footer_rule"]);
    // grown body (60) shifted the rule to 130..140; nothing got lost
    assert_eq!(band.height() + cont.height(), 140.0);
    Ok(())
}

#[test]
fn test_non_breakable_object_moves_wholesale() -> TestResult {
    let mut world = World::new();
    let mut band = data_band("data1", 90.0);
    band.add_object(stave_picture("chart", 60.0, 30.0))?;

    let outcome = run_row(&mut band, &mut world.ctx(), 65.0)?;

    assert_eq!(outcome.height, 60.0);
    assert!(band.objects().is_empty());
    let cont = outcome.continuation.expect("should overflow");
    assert_eq!(cont.objects()[0].top(), 0.0);
    assert_eq!(cont.objects()[0].height(), 30.0);
    assert_eq!(cont.height(), 30.0);
    Ok(())
}

fn stave_picture(name: &str, top: f32, height: f32) -> ReportObject {
    let mut picture = stave::PictureObject::new(name);
    picture
        .base
        .component
        .set_bounds(stave::RectF::new(0.0, top, 50.0, height));
    ReportObject::Picture(picture)
}

#[test]
fn test_break_is_deterministic_across_identical_rows() -> TestResult {
    let run_once = || -> Result<(f32, Vec<String>), stave::LayoutError> {
        let mut world = World::new();
        world.data.insert("row.body", json!(template_lines(9)));
        let mut band = data_band("data1", 20.0);
        band.base.can_grow = true;
        band.add_object(bound_text("body", "row.body", 0.0, 0.0, 100.0))?;
        band.add_object(fixed_text("rule", 0.0, 20.0, 100.0, 10.0))?;

        let outcome = run_row(&mut band, &mut world.ctx(), 45.0)?;
        let cont = outcome.continuation.expect("should overflow");
        let moved = cont.objects().iter().map(|o| o.name().to_owned()).collect();
        Ok((outcome.height, moved))
    };

    let first = run_once()?;
    let second = run_once()?;
    assert_eq!(first, second);
    Ok(())
}
