//! The height & shift engine: candidate heights for every growable child,
//! pairwise shift propagation to later stacked siblings, one atomic apply
//! pass. Shared by bands and nested panels.

use crate::LayoutError;
use crate::component::Dock;
use crate::context::LayoutContext;
use crate::objects::ReportObject;
use crate::report::ShiftMode;
use itertools::Itertools;
use std::cmp::Ordering;
use stave_types::EDGE_EPSILON;

/// Computes the stack's final height. Children are read in ascending-top
/// order (collection order breaks ties) and only mutated in the apply pass,
/// so the shift computation is never perturbed by its own side effects.
/// The returned height is *not* committed to the owning container.
pub(crate) fn calc_stack_height(
    objects: &mut [ReportObject],
    current_height: f32,
    can_grow: bool,
    can_shrink: bool,
    ctx: &mut LayoutContext,
) -> Result<f32, LayoutError> {
    let order: Vec<usize> = (0..objects.len())
        .sorted_by(|&a, &b| {
            objects[a]
                .top()
                .partial_cmp(&objects[b].top())
                .unwrap_or(Ordering::Equal)
        })
        .collect();

    let mut new_heights = vec![0.0f32; order.len()];
    for (slot, &i) in order.iter().enumerate() {
        let obj = &mut objects[i];
        let mut height = obj.height();
        if obj.base().component.visible && (obj.base().can_grow || obj.base().can_shrink) {
            let candidate = obj.calc_height(ctx)?;
            if (obj.base().can_grow && candidate > height)
                || (obj.base().can_shrink && candidate < height)
            {
                height = candidate;
            }
        }
        new_heights[slot] = height;
    }

    // Shift propagation. Shifts compound additively through a chain of
    // movers but never cancel a larger existing shift in the opposite
    // direction; the first dominant mover wins per direction.
    let mut shifts = vec![0.0f32; order.len()];
    for (slot, &i) in order.iter().enumerate() {
        let shift = new_heights[slot] - objects[i].height();
        if shift == 0.0 {
            continue;
        }
        let source = objects[i].bounds();
        for (later_slot, &j) in order.iter().enumerate().skip(slot + 1) {
            let target = &objects[j];
            if target.base().shift_mode == ShiftMode::Never {
                continue;
            }
            if target.top() < source.bottom() - EDGE_EPSILON {
                continue;
            }
            if target.base().shift_mode == ShiftMode::WhenOverlapped
                && !source.overlaps_horizontally(&target.bounds())
            {
                continue;
            }
            shifts[later_slot] = if shift > 0.0 {
                (shift + shifts[later_slot]).max(shifts[later_slot])
            } else {
                (shift + shifts[later_slot]).min(shifts[later_slot])
            };
        }
    }

    // Apply pass: the only place geometry is written. Dock is parked so the
    // layout resolver cannot fight these explicit moves.
    let mut max_bottom = 0.0f32;
    for (slot, &i) in order.iter().enumerate() {
        let dock = objects[i].base().component.dock;
        objects[i].base_mut().component.dock = Dock::None;
        objects[i].set_height(new_heights[slot]);
        let top = objects[i].top();
        objects[i].set_top(top + shifts[slot]);
        if objects[i].base().component.visible {
            max_bottom = max_bottom.max(objects[i].bottom());
        }
        objects[i].base_mut().component.dock = dock;
    }

    let mut height = current_height;
    if (can_grow && max_bottom > height) || (can_shrink && max_bottom < height) {
        height = max_bottom;
    }

    for obj in objects.iter_mut() {
        if obj.base().grow_to_bottom {
            let top = obj.top();
            obj.set_height(height - top);
        }
    }

    Ok(height)
}
