//! Anchor/dock repositioning of children when a container resizes.

use crate::component::{Anchor, Dock};
use crate::objects::ReportObject;
use stave_types::RectF;

/// Repositions every direct child after its container grew or shrank by
/// (`dx`, `dy`): an anchor pass adjusting each child by the delta, then a
/// dock pass consuming a shrinking remaining-bounds rectangle in z-order.
/// Docking is never re-sorted by dock value; collection order decides
/// consumption order. A zero delta is a no-op.
pub(crate) fn resolve_layout(
    objects: &mut [ReportObject],
    width: f32,
    height: f32,
    dx: f32,
    dy: f32,
) {
    if dx == 0.0 && dy == 0.0 {
        return;
    }

    for obj in objects.iter_mut() {
        let anchor = obj.base().component.anchor;
        if anchor.contains(Anchor::RIGHT) {
            if anchor.contains(Anchor::LEFT) {
                let w = obj.width();
                obj.set_width(w + dx);
            } else {
                let l = obj.left();
                obj.set_left(l + dx);
            }
        } else if !anchor.contains(Anchor::LEFT) {
            let l = obj.left();
            obj.set_left(l + dx / 2.0);
        }
        if anchor.contains(Anchor::BOTTOM) {
            if anchor.contains(Anchor::TOP) {
                let h = obj.height();
                obj.set_height(h + dy);
            } else {
                let t = obj.top();
                obj.set_top(t + dy);
            }
        } else if !anchor.contains(Anchor::TOP) {
            let t = obj.top();
            obj.set_top(t + dy / 2.0);
        }
    }

    let mut remaining = RectF::new(0.0, 0.0, width, height);
    for obj in objects.iter_mut() {
        match obj.base().component.dock {
            Dock::None => {}
            Dock::Left => {
                obj.set_left(remaining.left);
                obj.set_top(remaining.top);
                obj.set_height(remaining.height);
                remaining.left += obj.width();
                remaining.width -= obj.width();
            }
            Dock::Top => {
                obj.set_left(remaining.left);
                obj.set_top(remaining.top);
                obj.set_width(remaining.width);
                remaining.top += obj.height();
                remaining.height -= obj.height();
            }
            Dock::Right => {
                obj.set_left(remaining.right() - obj.width());
                obj.set_top(remaining.top);
                obj.set_height(remaining.height);
                remaining.width -= obj.width();
            }
            Dock::Bottom => {
                obj.set_left(remaining.left);
                obj.set_top(remaining.bottom() - obj.height());
                obj.set_width(remaining.width);
                remaining.height -= obj.height();
            }
            Dock::Fill => {
                obj.set_left(remaining.left);
                obj.set_top(remaining.top);
                obj.set_width(remaining.width);
                obj.set_height(remaining.height);
                remaining = RectF::default();
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::objects::{ReportObject, TextObject};
    use stave_types::RectF;

    fn child(name: &str, bounds: RectF, anchor: Anchor) -> ReportObject {
        let mut text = TextObject::new(name);
        text.base.component.set_bounds(bounds);
        text.base.component.anchor = anchor;
        ReportObject::Text(text)
    }

    #[test]
    fn zero_delta_changes_nothing() {
        let mut objects = vec![child(
            "t1",
            RectF::new(10.0, 10.0, 30.0, 20.0),
            Anchor::LEFT | Anchor::RIGHT,
        )];
        resolve_layout(&mut objects, 100.0, 50.0, 0.0, 0.0);
        assert_eq!(objects[0].bounds(), RectF::new(10.0, 10.0, 30.0, 20.0));
    }

    #[test]
    fn left_right_anchor_stretches() {
        let mut objects = vec![child(
            "t1",
            RectF::new(10.0, 0.0, 30.0, 20.0),
            Anchor::LEFT | Anchor::TOP | Anchor::RIGHT,
        )];
        resolve_layout(&mut objects, 100.0, 50.0, 15.0, 0.0);
        assert_eq!(objects[0].left(), 10.0);
        assert_eq!(objects[0].width(), 45.0);
    }

    #[test]
    fn right_only_anchor_tracks_edge() {
        let mut objects = vec![child(
            "t1",
            RectF::new(60.0, 0.0, 30.0, 20.0),
            Anchor::TOP | Anchor::RIGHT,
        )];
        resolve_layout(&mut objects, 100.0, 50.0, 15.0, 0.0);
        assert_eq!(objects[0].left(), 75.0);
        assert_eq!(objects[0].width(), 30.0);
    }

    #[test]
    fn no_horizontal_anchor_floats_centered() {
        let mut objects = vec![child(
            "t1",
            RectF::new(40.0, 0.0, 20.0, 20.0),
            Anchor::TOP,
        )];
        resolve_layout(&mut objects, 100.0, 50.0, 10.0, 0.0);
        assert_eq!(objects[0].left(), 45.0);
    }

    #[test]
    fn bottom_anchor_tracks_height_change() {
        let mut objects = vec![child(
            "t1",
            RectF::new(0.0, 40.0, 20.0, 10.0),
            Anchor::LEFT | Anchor::BOTTOM,
        )];
        resolve_layout(&mut objects, 100.0, 50.0, 0.0, -20.0);
        assert_eq!(objects[0].top(), 20.0);
    }

    #[test]
    fn dock_consumes_remaining_bounds_in_z_order() {
        let mut first = TextObject::new("t1");
        first.base.component.set_bounds(RectF::new(0.0, 0.0, 30.0, 10.0));
        first.base.component.dock = Dock::Left;
        let mut second = TextObject::new("t2");
        second.base.component.set_bounds(RectF::new(0.0, 0.0, 25.0, 10.0));
        second.base.component.dock = Dock::Left;
        let mut fill = TextObject::new("t3");
        fill.base.component.dock = Dock::Fill;

        let mut objects = vec![
            ReportObject::Text(first),
            ReportObject::Text(second),
            ReportObject::Text(fill),
        ];
        resolve_layout(&mut objects, 100.0, 40.0, 1.0, 0.0);

        assert_eq!(objects[0].left(), 0.0);
        assert_eq!(objects[0].height(), 40.0);
        assert_eq!(objects[1].left(), 30.0);
        assert_eq!(objects[2].left(), 55.0);
        assert_eq!(objects[2].width(), 45.0);
        assert_eq!(objects[2].height(), 40.0);
    }
}
