//! Break-line search and object relocation, shared by band breaking,
//! nested panel breaking and the footer-tail move.

use crate::component::Anchor;
use crate::objects::ReportObject;

/// Fixed-point search for a stable break line, starting at `start`. A
/// straddling child that cannot break pulls the line up to its own top and
/// restarts the scan; each restart lands on some child's top, so the search
/// terminates after at most one restart per child.
pub(crate) fn find_break_line(objects: &[ReportObject], start: f32) -> f32 {
    let mut break_line = start;
    'scan: loop {
        for obj in objects {
            if obj.top() < break_line && obj.bottom() > break_line {
                let breaks = obj.is_breakable() && {
                    // probe with a throwaway clone; it is never attached
                    let mut probe = obj.clone_empty();
                    probe.assign_all(obj);
                    probe.set_height(break_line - obj.top());
                    probe.break_off(None)
                };
                if !breaks {
                    log::trace!(
                        "'{}' cannot break, lowering break line {:.2} -> {:.2}",
                        obj.name(),
                        break_line,
                        obj.top()
                    );
                    break_line = break_line.min(obj.top());
                    continue 'scan;
                }
            }
        }
        return break_line;
    }
}

/// Moves every object past `break_line` into `dest`. Straddlers split into
/// a same-type fragment (which keeps growing but never shrinks); objects
/// entirely below the line move wholesale, shifted up by the line unless
/// bottom-anchored — those are corrected by the layout resolver on the next
/// height assignment. Returns whether any objects remained in the source.
pub(crate) fn relocate(
    objects: &mut Vec<ReportObject>,
    break_line: f32,
    dest: &mut Vec<ReportObject>,
) -> bool {
    let mut i = 0;
    while i < objects.len() {
        if objects[i].bottom() > break_line {
            let top = objects[i].top();
            if top < break_line {
                let mut fragment = objects[i].clone_empty();
                fragment.assign_all(&objects[i]);
                {
                    let base = fragment.base_mut();
                    base.can_grow = true;
                    base.can_shrink = false;
                }
                let kept = break_line - top;
                fragment.set_height(objects[i].height() - kept);
                fragment.set_top(0.0);
                objects[i].set_height(kept);
                objects[i].break_off(Some(&mut fragment));
                dest.push(fragment);
                i += 1;
            } else {
                // the collection shrinks; the loop index stays put
                let mut moved = objects.remove(i);
                if !moved.base().component.anchor.contains(Anchor::BOTTOM) {
                    let t = moved.top();
                    moved.set_top(t - break_line);
                }
                dest.push(moved);
            }
        } else {
            i += 1;
        }
    }
    !objects.is_empty()
}
