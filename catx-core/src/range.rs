//! Factor range: ordered categorical factors mapped onto a continuous
//! synthetic coordinate space.
//!
//! Every leaf factor occupies one unit of the axis. Leaves inside the same
//! parent are separated by `factor_padding`, subgroups by `subgroup_padding`
//! and top-level groups by `group_padding`. A parent's position is the mean
//! of its leaves' positions.

use crate::factor::{Factor, Levels};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum RangeError {
    #[error("Factor range must contain at least one factor")]
    Empty,

    #[error("Mixed factor levels: expected {expected} level(s), found {found}")]
    MixedLevels { expected: usize, found: Factor },

    #[error("Duplicate factor or subfactor: {0}")]
    Duplicate(String),

    #[error("Factors of group {0:?} are not contiguous")]
    NonContiguous(String),

    #[error("Invalid padding: {0}")]
    InvalidPadding(String),
}

/// Spacing options for a factor range.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RangePadding {
    /// Space between adjacent leaves of the same parent
    #[serde(default)]
    pub factor_padding: f64,

    /// Space between adjacent subgroups (three levels only)
    #[serde(default = "default_subgroup_padding")]
    pub subgroup_padding: f64,

    /// Space between adjacent top-level groups
    #[serde(default = "default_group_padding")]
    pub group_padding: f64,

    /// Extra space at both ends, as a fraction of the full span
    #[serde(default)]
    pub range_padding: f64,
}

fn default_subgroup_padding() -> f64 { 0.8 }
fn default_group_padding() -> f64 { 1.4 }

impl Default for RangePadding {
    fn default() -> Self {
        Self {
            factor_padding: 0.0,
            subgroup_padding: default_subgroup_padding(),
            group_padding: default_group_padding(),
            range_padding: 0.0,
        }
    }
}

impl RangePadding {
    fn validate(&self) -> Result<(), RangeError> {
        let all = [
            ("factor_padding", self.factor_padding),
            ("subgroup_padding", self.subgroup_padding),
            ("group_padding", self.group_padding),
            ("range_padding", self.range_padding),
        ];
        for (name, value) in all {
            if !value.is_finite() || value < 0.0 {
                return Err(RangeError::InvalidPadding(format!("{} must be a finite non-negative number, got {}", name, value)));
            }
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
struct Slot {
    value: f64,
    children: HashMap<String, Slot>,
}

type Mapping = HashMap<String, Slot>;

#[derive(Debug, Clone, PartialEq)]
pub struct FactorRange {
    factors: Vec<Factor>,
    levels: Levels,
    tops: Vec<String>,
    mids: Vec<Factor>,
    mapping: Mapping,
    start: f64,
    end: f64,
}

impl FactorRange {
    pub fn new(factors: Vec<Factor>) -> Result<Self, RangeError> {
        Self::with_padding(factors, RangePadding::default())
    }

    pub fn with_padding(factors: Vec<Factor>, padding: RangePadding) -> Result<Self, RangeError> {
        padding.validate()?;
        let first = factors.first().ok_or(RangeError::Empty)?;
        let levels = first.depth();
        if let Some(bad) = factors.iter().find(|f| f.depth() != levels) {
            return Err(RangeError::MixedLevels { expected: levels.count(), found: bad.clone() });
        }

        let (mapping, tops, mids, inside_padding) = match levels {
            Levels::One => {
                let names: Vec<&str> = factors.iter().map(|f| f.leaf()).collect();
                let (mapping, inside) = map_one_level(&names, padding.factor_padding, 0.0)?;
                (mapping, Vec::new(), Vec::new(), inside)
            }
            Levels::Two => {
                let pairs: Vec<(&str, &str)> = factors.iter().map(|f| (f.top(), f.leaf())).collect();
                let (mapping, tops, inside) =
                    map_two_levels(&pairs, padding.group_padding, padding.factor_padding, 0.0)?;
                (mapping, tops, Vec::new(), inside)
            }
            Levels::Three => {
                let triples: Vec<(&str, &str, &str)> = factors
                    .iter()
                    .filter_map(|f| match f {
                        Factor::L3(a, b, c) => Some((a.as_str(), b.as_str(), c.as_str())),
                        _ => None,
                    })
                    .collect();
                map_three_levels(
                    &triples,
                    padding.group_padding,
                    padding.subgroup_padding,
                    padding.factor_padding,
                    0.0,
                )?
            }
        };

        let span = factors.len() as f64 + inside_padding;
        let half = span * padding.range_padding / 2.0;

        log::debug!(
            "Built factor range: {} factors, {} level(s), {} groups, span {:.3}",
            factors.len(),
            levels.count(),
            tops.len(),
            span
        );

        Ok(Self {
            factors,
            levels,
            tops,
            mids,
            mapping,
            start: -half,
            end: span + half,
        })
    }

    pub fn levels(&self) -> Levels {
        self.levels
    }

    pub fn factors(&self) -> &[Factor] {
        &self.factors
    }

    /// Distinct top-level groups in first-appearance order. Empty for one level.
    pub fn tops(&self) -> &[String] {
        &self.tops
    }

    /// (group, subgroup) pairs in display order. Empty unless three levels.
    pub fn mids(&self) -> &[Factor] {
        &self.mids
    }

    pub fn start(&self) -> f64 {
        self.start
    }

    pub fn end(&self) -> f64 {
        self.end
    }

    /// Continuous axis position of a factor.
    ///
    /// Factors shallower than the range resolve to their group: on a
    /// three-level range `"g"` is the group centre and `("g", "s")` the
    /// subgroup centre. Returns `None` for unknown factors.
    pub fn synthetic(&self, factor: &Factor) -> Option<f64> {
        let mut parts = factor.parts().into_iter();
        let mut slot = self.mapping.get(parts.next()?)?;
        for part in parts {
            slot = slot.children.get(part)?;
        }
        Some(slot.value)
    }
}

fn map_one_level(names: &[&str], padding: f64, offset: f64) -> Result<(Mapping, f64), RangeError> {
    let mut mapping = Mapping::with_capacity(names.len());
    for (i, name) in names.iter().enumerate() {
        let slot = Slot { value: 0.5 + i as f64 * (1.0 + padding) + offset, children: HashMap::new() };
        if mapping.insert(name.to_string(), slot).is_some() {
            return Err(RangeError::Duplicate(name.to_string()));
        }
    }
    let inside = names.len().saturating_sub(1) as f64 * padding;
    Ok((mapping, inside))
}

/// Split items into runs of equal key. A key may only form one run, so
/// display order and factor order agree.
fn group_by_first<'a, T: Copy>(items: &[(&'a str, T)]) -> Result<Vec<(&'a str, Vec<T>)>, RangeError> {
    let mut groups: Vec<(&'a str, Vec<T>)> = Vec::new();
    for &(key, item) in items {
        if let Some((last, run)) = groups.last_mut() {
            if *last == key {
                run.push(item);
                continue;
            }
        }
        if groups.iter().any(|(seen, _)| *seen == key) {
            return Err(RangeError::NonContiguous(key.to_string()));
        }
        groups.push((key, vec![item]));
    }
    Ok(groups)
}

fn mean_of(mapping: &Mapping, keys: &[&str]) -> f64 {
    let total: f64 = keys.iter().filter_map(|k| mapping.get(*k)).map(|s| s.value).sum();
    total / keys.len() as f64
}

fn map_two_levels(
    pairs: &[(&str, &str)],
    outer_padding: f64,
    factor_padding: f64,
    offset: f64,
) -> Result<(Mapping, Vec<String>, f64), RangeError> {
    let groups = group_by_first(pairs)?;
    let mut mapping = Mapping::with_capacity(groups.len());
    let mut tops = Vec::with_capacity(groups.len());
    let mut suboffset = offset;
    let mut total_subpad = 0.0;

    for (top, subs) in &groups {
        let (submap, subpad) = map_one_level(subs, factor_padding, suboffset)?;
        total_subpad += subpad;
        let value = mean_of(&submap, subs);
        mapping.insert(top.to_string(), Slot { value, children: submap });
        tops.push(top.to_string());
        suboffset += subs.len() as f64 + outer_padding + subpad;
    }

    let inside = groups.len().saturating_sub(1) as f64 * outer_padding + total_subpad;
    Ok((mapping, tops, inside))
}

fn map_three_levels(
    triples: &[(&str, &str, &str)],
    outer_padding: f64,
    inner_padding: f64,
    factor_padding: f64,
    offset: f64,
) -> Result<(Mapping, Vec<String>, Vec<Factor>, f64), RangeError> {
    let keyed: Vec<(&str, (&str, &str))> = triples.iter().map(|&(a, b, c)| (a, (b, c))).collect();
    let groups = group_by_first(&keyed)?;
    let mut mapping = Mapping::with_capacity(groups.len());
    let mut tops = Vec::with_capacity(groups.len());
    let mut mids = Vec::new();
    let mut suboffset = offset;
    let mut total_subpad = 0.0;

    for (top, pairs) in &groups {
        let (submap, subtops, subpad) = map_two_levels(pairs, inner_padding, factor_padding, suboffset)?;
        total_subpad += subpad;
        let middles: Vec<&str> = pairs.iter().map(|&(mid, _)| mid).collect();
        let value = mean_of(&submap, &middles);
        mids.extend(subtops.into_iter().map(|mid| Factor::L2(top.to_string(), mid)));
        mapping.insert(top.to_string(), Slot { value, children: submap });
        tops.push(top.to_string());
        suboffset += pairs.len() as f64 + outer_padding + subpad;
    }

    let inside = groups.len().saturating_sub(1) as f64 * outer_padding + total_subpad;
    Ok((mapping, tops, mids, inside))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn test_one_level_positions() {
        let range = FactorRange::new(vec!["a".into(), "b".into(), "c".into()]).unwrap();
        assert_eq!(range.levels(), Levels::One);
        assert!(range.tops().is_empty());
        assert_eq!(range.synthetic(&"a".into()), Some(0.5));
        assert_eq!(range.synthetic(&"c".into()), Some(2.5));
        assert_eq!(range.start(), 0.0);
        assert_eq!(range.end(), 3.0);
        assert_eq!(range.synthetic(&"zzz".into()), None);
    }

    #[test]
    fn test_two_level_positions() {
        let range = FactorRange::new(vec![
            ("g1", "a").into(),
            ("g1", "b").into(),
            ("g2", "c").into(),
        ])
        .unwrap();
        assert_eq!(range.tops(), &["g1".to_string(), "g2".to_string()]);
        assert_eq!(range.synthetic(&("g1", "a").into()), Some(0.5));
        assert_eq!(range.synthetic(&("g1", "b").into()), Some(1.5));
        // second group starts after 2 leaves plus group padding
        assert!(approx(range.synthetic(&("g2", "c").into()).unwrap(), 3.9));
        assert_eq!(range.synthetic(&"g1".into()), Some(1.0));
        assert!(approx(range.end(), 4.4));
    }

    #[test]
    fn test_three_level_positions_and_mids() {
        let range = FactorRange::new(vec![
            ("g1", "s1", "a").into(),
            ("g1", "s1", "b").into(),
            ("g1", "s2", "c").into(),
            ("g2", "s1", "d").into(),
        ])
        .unwrap();
        assert_eq!(range.levels(), Levels::Three);
        assert_eq!(range.mids().len(), 3);
        assert_eq!(range.mids()[1], Factor::from(("g1", "s2")));
        assert_eq!(range.synthetic(&("g1", "s1", "b").into()), Some(1.5));
        // s2 follows s1 after subgroup padding
        assert!(approx(range.synthetic(&("g1", "s2", "c").into()).unwrap(), 3.3));
        assert!(approx(range.synthetic(&("g1", "s2").into()).unwrap(), 3.3));
        // g2 starts after 3 leaves, 0.8 subgroup padding and 1.4 group padding
        assert!(approx(range.synthetic(&("g2", "s1", "d").into()).unwrap(), 5.7));
        assert!(approx(range.end(), 6.2));
    }

    #[test]
    fn test_split_subgroup_rejected() {
        let result = FactorRange::new(vec![
            ("g1", "s1", "a").into(),
            ("g1", "s2", "b").into(),
            ("g1", "s1", "c").into(),
        ]);
        assert_eq!(result, Err(RangeError::NonContiguous("s1".to_string())));

        // same subgroup name under different groups is fine
        let range = FactorRange::new(vec![
            ("g1", "s1", "a").into(),
            ("g2", "s1", "b").into(),
        ])
        .unwrap();
        assert_eq!(range.mids().len(), 2);
    }

    #[test]
    fn test_synthetic_order_follows_factor_order() {
        let range = FactorRange::new(vec![
            ("g1", "a").into(),
            ("g1", "b").into(),
            ("g2", "c").into(),
            ("g3", "d").into(),
        ])
        .unwrap();
        let positions: Vec<f64> = range.factors().iter().filter_map(|f| range.synthetic(f)).collect();
        assert!(positions.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn test_range_padding_widens_both_ends() {
        let padding = RangePadding { range_padding: 0.5, ..RangePadding::default() };
        let range = FactorRange::with_padding(vec!["a".into(), "b".into()], padding).unwrap();
        assert_eq!(range.start(), -0.5);
        assert_eq!(range.end(), 2.5);
    }

    #[test]
    fn test_validation_errors() {
        assert_eq!(FactorRange::new(vec![]), Err(RangeError::Empty));
        assert!(matches!(
            FactorRange::new(vec!["a".into(), ("g", "b").into()]),
            Err(RangeError::MixedLevels { expected: 1, .. })
        ));
        assert_eq!(
            FactorRange::new(vec![("g", "a").into(), ("g", "a").into()]),
            Err(RangeError::Duplicate("a".to_string()))
        );
        assert_eq!(
            FactorRange::new(vec![("g1", "a").into(), ("g2", "b").into(), ("g1", "c").into(), ("g3", "d").into()]),
            Err(RangeError::NonContiguous("g1".to_string()))
        );
        let padding = RangePadding { group_padding: -1.0, ..RangePadding::default() };
        assert!(matches!(
            FactorRange::with_padding(vec!["a".into()], padding),
            Err(RangeError::InvalidPadding(_))
        ));
    }
}
