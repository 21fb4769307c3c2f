//! Drives one band through one data row: pull bound data, lay out, and
//! split off a continuation when the result overflows the free space.

use stave_layout::{Band, LayoutContext, LayoutError};
use stave_types::FLOAT_EPSILON;

/// What a row pass produced: the band's final height on this page and,
/// when it overflowed, the continuation destined for the next page.
#[derive(Debug)]
pub struct RowOutcome {
    pub height: f32,
    pub continuation: Option<Band>,
}

/// One band, one row. Bound values are pulled once per object, then the
/// band is laid out; if its natural height exceeds `free_space` the band is
/// clamped to the free space and broken, and the continuation carries the
/// leftover height.
pub fn run_row(
    band: &mut Band,
    ctx: &mut LayoutContext,
    free_space: f32,
) -> Result<RowOutcome, LayoutError> {
    for obj in band.objects_mut() {
        obj.get_data(ctx)?;
    }
    let natural = band.calc_height(ctx)?;
    if natural <= free_space + FLOAT_EPSILON {
        return Ok(RowOutcome {
            height: natural,
            continuation: None,
        });
    }

    let mut continuation = band.continuation();
    continuation.set_height(natural);
    band.set_height(free_space.min(natural));
    let remained = band.break_to(&mut continuation);
    log::debug!(
        "band '{}': {:.2} into {:.2} of free space, remainder kept: {}",
        band.name(),
        natural,
        free_space,
        remained
    );
    Ok(RowOutcome {
        height: band.height(),
        continuation: Some(continuation),
    })
}
