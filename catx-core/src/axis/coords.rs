use super::{Coords, Dimension, TickCoords};
use crate::factor::Levels;
use crate::range::FactorRange;
use crate::ticker::{Tick, TickSet, Ticker};

fn tick_coords_for(ticks: &[Tick], loc: f64, dim: Dimension) -> Coords {
    let mut coords: Coords = [Vec::new(), Vec::new()];
    coords[dim.index()] = ticks.iter().map(|t| t.position).collect();
    coords[dim.other().index()] = vec![loc; ticks.len()];
    coords
}

/// Lay out an already computed tick decomposition. Mids are only placed for
/// three-level ranges and tops for nested ranges.
pub fn coords_from_ticks(ticks: &TickSet, levels: Levels, loc: f64, dim: Dimension) -> TickCoords {
    let mut coords = TickCoords {
        major: tick_coords_for(&ticks.major, loc, dim),
        ..TickCoords::default()
    };

    match levels {
        Levels::One => {}
        Levels::Two => {
            coords.tops = tick_coords_for(&ticks.tops, loc, dim);
        }
        Levels::Three => {
            coords.mids = tick_coords_for(&ticks.mids, loc, dim);
            coords.tops = tick_coords_for(&ticks.tops, loc, dim);
        }
    }

    coords
}

/// Tick coordinates of `range` within `[start, end]` for an axis at `loc`.
pub fn compute_tick_coords(
    range: &FactorRange,
    start: f64,
    end: f64,
    loc: f64,
    dim: Dimension,
    ticker: &dyn Ticker,
) -> TickCoords {
    let ticks = ticker.get_ticks(start, end, range, loc);
    coords_from_ticks(&ticks, range.levels(), loc, dim)
}
