//! Separator lines between adjacent top-level groups.
//!
//! The boundary scan walks `range.factors()` with a cursor that only moves
//! forward, so each group must occupy one contiguous run of factors, in the
//! order of `range.tops()`. Debug builds check this.

use super::{AxisBase, Coords, Dimension, PaintError};
use crate::range::FactorRange;
use crate::visuals::LineVisuals;

/// Separators start this many pixels outside the axis line.
const SEPARATOR_INSET: f64 = 3.0;
/// Separators stop this many pixels short of the outer label edge.
const SEPARATOR_TRIM: f64 = 6.0;

fn groups_are_contiguous(range: &FactorRange) -> bool {
    let mut runs: Vec<&str> = Vec::new();
    for factor in range.factors() {
        if runs.last() != Some(&factor.top()) {
            runs.push(factor.top());
        }
    }
    runs.iter().copied().eq(range.tops().iter().map(String::as_str))
}

/// Separator positions strictly inside `(start, end)`, each at the midpoint
/// between the last factor of one group and the first factor of the next.
///
/// A boundary with no matching factor transition is skipped.
pub fn group_separator_coords(range: &FactorRange, start: f64, end: f64, loc: f64, dim: Dimension) -> Coords {
    let mut coords: Coords = [Vec::new(), Vec::new()];
    let tops = range.tops();
    if tops.len() < 2 {
        return coords;
    }

    debug_assert!(
        groups_are_contiguous(range),
        "factor range groups are not contiguous runs in tops order"
    );

    let factors = range.factors();
    let mut cursor = 0;
    for next_top in &tops[1..] {
        let Some(j) = (cursor..factors.len()).find(|&j| factors[j].top() == next_top.as_str()) else {
            log::debug!("No factor transition found for group {:?}, skipping separator", next_top);
            continue;
        };
        cursor = j;

        let Some(prev) = j.checked_sub(1) else {
            log::debug!("Group {:?} has no preceding factor, skipping separator", next_top);
            continue;
        };
        let (Some(first), Some(last)) = (range.synthetic(&factors[prev]), range.synthetic(&factors[j])) else {
            continue;
        };

        let pt = (first + last) / 2.0;
        if pt > start && pt < end {
            coords[dim.index()].push(pt);
            coords[dim.other().index()].push(loc);
        }
    }

    coords
}

/// Draw separators for the base's visible span. Does nothing for fewer than
/// two groups or a hidden separator line. Returns the number of separators
/// drawn.
pub fn draw_group_separators<B: AxisBase + ?Sized>(
    base: &mut B,
    range: &FactorRange,
    visuals: &LineVisuals,
    tick_label_extent: f64,
) -> Result<usize, PaintError> {
    if range.tops().len() < 2 || !visuals.visible {
        return Ok(0);
    }

    let (start, end) = base.computed_bounds();
    let coords = group_separator_coords(range, start, end, base.loc(), base.dimension());
    let count = coords[0].len();
    if count == 0 {
        return Ok(0);
    }

    base.draw_ticks(&coords, -SEPARATOR_INSET, tick_label_extent - SEPARATOR_TRIM, visuals)?;
    Ok(count)
}
