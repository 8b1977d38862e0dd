//! Label row planning: one row per nesting level, innermost first, each row
//! stacked outward by the measured extent of the rows inside it.

use super::{AxisBase, Coords, Dimension, LabelOrientation, PaintError, Size, TickCoords};
use crate::config::AxisConfig;
use crate::factor::Levels;
use crate::formatter::TickFormatter;
use crate::range::FactorRange;
use crate::ticker::{Tick, TickSet, Ticker};
use crate::visuals::TextVisuals;
use serde::Serialize;

/// A measurable label box. `size` is set by formatters that lay out their
/// own content; plain text is measured by the axis base.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TextBox {
    pub text: String,
    pub size: Option<Size>,
}

impl TextBox {
    pub fn new<S: Into<String>>(text: S) -> Self {
        Self { text: text.into(), size: None }
    }

    pub fn sized<S: Into<String>>(text: S, size: Size) -> Self {
        Self { text: text.into(), size: Some(size) }
    }
}

/// Formatter output: raw text, or a box the formatter built itself.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum Label {
    Text(String),
    Prebuilt(TextBox),
}

impl Label {
    pub fn into_box(self) -> TextBox {
        match self {
            Label::Text(text) => TextBox::new(text),
            Label::Prebuilt(text_box) => text_box,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct GraphicsBoxes(Vec<TextBox>);

impl GraphicsBoxes {
    pub fn from_labels(labels: Vec<Label>) -> Self {
        Self(labels.into_iter().map(Label::into_box).collect())
    }

    /// Wrap group names; they are display strings and skip the formatter.
    pub fn from_names(ticks: &[Tick]) -> Self {
        Self(ticks.iter().map(|t| TextBox::new(t.factor.leaf())).collect())
    }

    pub fn iter(&self) -> std::slice::Iter<'_, TextBox> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn texts(&self) -> Vec<String> {
        self.0.iter().map(|b| b.text.clone()).collect()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum RowKind {
    Major,
    Subgroup,
    Group,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LabelRow {
    pub kind: RowKind,
    pub labels: GraphicsBoxes,
    pub coords: Coords,
    pub orientation: LabelOrientation,
    pub visuals: TextVisuals,
}

/// Build rows from a tick decomposition and its coordinates.
///
/// Major labels go through `formatter`; subgroup and group names are used
/// verbatim.
pub fn rows_from_ticks(
    levels: Levels,
    ticks: &TickSet,
    coords: &TickCoords,
    formatter: &dyn TickFormatter,
    config: &AxisConfig,
) -> Vec<LabelRow> {
    let leaves: Vec<String> = ticks.major.iter().map(|t| t.factor.leaf().to_string()).collect();
    let major = LabelRow {
        kind: RowKind::Major,
        labels: GraphicsBoxes::from_labels(formatter.format(&leaves)),
        coords: coords.major.clone(),
        orientation: config.major_label_orientation,
        visuals: config.major_label_text.clone(),
    };
    let group = || LabelRow {
        kind: RowKind::Group,
        labels: GraphicsBoxes::from_names(&ticks.tops),
        coords: coords.tops.clone(),
        orientation: config.group_label_orientation,
        visuals: config.group_text.clone(),
    };

    match levels {
        Levels::One => vec![major],
        Levels::Two => vec![major, group()],
        Levels::Three => {
            let subgroup = LabelRow {
                kind: RowKind::Subgroup,
                labels: GraphicsBoxes::from_names(&ticks.mids),
                coords: coords.mids.clone(),
                orientation: config.subgroup_label_orientation,
                visuals: config.subgroup_text.clone(),
            };
            vec![major, subgroup, group()]
        }
    }
}

/// Plan the label rows for the visible span `[start, end]`: exactly one row
/// per range level, ordered major, subgroup, group.
#[allow(clippy::too_many_arguments)]
pub fn plan_label_rows(
    range: &FactorRange,
    start: f64,
    end: f64,
    loc: f64,
    dim: Dimension,
    ticker: &dyn Ticker,
    formatter: &dyn TickFormatter,
    config: &AxisConfig,
) -> Vec<LabelRow> {
    let ticks = ticker.get_ticks(start, end, range, loc);
    let coords = super::coords_from_ticks(&ticks, range.levels(), loc, dim);
    rows_from_ticks(range.levels(), &ticks, &coords, formatter, config)
}

/// Perpendicular space taken by a row: the largest rotated label extent
/// plus `standoff`, or zero for an empty or hidden row.
fn oriented_labels_extent<B: AxisBase + ?Sized>(base: &B, row: &LabelRow, standoff: f64) -> Result<f64, PaintError> {
    if row.labels.is_empty() || !row.visuals.visible {
        return Ok(0.0);
    }

    let side = base.panel_side();
    let angle = row.orientation.angle(side);
    let hscale = angle.cos().abs();
    let vscale = angle.sin().abs();

    let mut extent = 0.0f64;
    for label in row.labels.iter() {
        let size = base.measure_label(label, &row.visuals)?;
        let value = if side.is_horizontal() {
            size.width * vscale + size.height * hscale
        } else {
            size.width * hscale + size.height * vscale
        };
        extent = extent.max(value);
    }

    Ok(if extent > 0.0 { extent + standoff } else { 0.0 })
}

/// One extent per row, in row order. A failed measurement aborts the whole
/// computation since every later row offset depends on it.
pub fn row_extents<B: AxisBase + ?Sized>(base: &B, rows: &[LabelRow], standoff: f64) -> Result<Vec<f64>, PaintError> {
    rows.iter().map(|row| oriented_labels_extent(base, row, standoff)).collect()
}

/// Offset of each row from the axis line: the first sits at
/// `tick_extent + standoff`, each later one adds the previous row's extent.
pub fn row_offsets(tick_extent: f64, standoff: f64, extents: &[f64]) -> Vec<f64> {
    let mut offset = tick_extent + standoff;
    extents
        .iter()
        .map(|extent| {
            let current = offset;
            offset += extent;
            current
        })
        .collect()
}
