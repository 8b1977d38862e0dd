//! Categorical ticking: which factors of a range fall inside a visible span.

use crate::factor::{Factor, Levels};
use crate::range::FactorRange;
use serde::Serialize;

/// A tick: the factor it labels and its synthetic axis position.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Tick {
    pub factor: Factor,
    pub position: f64,
}

/// Tick decomposition of a visible span, innermost to outermost.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct TickSet {
    /// Deepest-level factors in display order
    pub major: Vec<Tick>,
    /// (group, subgroup) pairs, three-level ranges only
    pub mids: Vec<Tick>,
    /// Top-level groups, nested ranges only
    pub tops: Vec<Tick>,
}

pub trait Ticker {
    fn get_ticks(&self, start: f64, end: f64, range: &FactorRange, loc: f64) -> TickSet;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct CategoricalTicker;

impl CategoricalTicker {
    pub fn new() -> Self {
        Self
    }

    fn collect<'a, I>(factors: I, range: &FactorRange, start: f64, end: f64) -> Vec<Tick>
    where
        I: IntoIterator<Item = &'a Factor>,
    {
        factors
            .into_iter()
            .filter_map(|factor| {
                let position = range.synthetic(factor)?;
                (position > start && position < end).then(|| Tick { factor: factor.clone(), position })
            })
            .collect()
    }
}

impl Ticker for CategoricalTicker {
    fn get_ticks(&self, start: f64, end: f64, range: &FactorRange, _loc: f64) -> TickSet {
        let major = Self::collect(range.factors(), range, start, end);

        let mids = match range.levels() {
            Levels::Three => Self::collect(range.mids(), range, start, end),
            Levels::One | Levels::Two => Vec::new(),
        };

        let tops = match range.levels() {
            Levels::One => Vec::new(),
            Levels::Two | Levels::Three => {
                let tops: Vec<Factor> = range.tops().iter().map(|t| Factor::L1(t.clone())).collect();
                Self::collect(&tops, range, start, end)
            }
        };

        TickSet { major, mids, tops }
    }
}
