//! Externally settable options of a categorical axis.

use crate::axis::orient::{LabelOrientation, TickLabelOrientation};
use crate::visuals::{FontStyle, LineVisuals, TextVisuals};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AxisConfig {
    /// Gap between tick marks and the first label row, also added to each
    /// row's measured extent
    #[serde(default = "default_major_label_standoff")]
    pub major_label_standoff: f64,

    #[serde(default = "default_major_label_orientation")]
    pub major_label_orientation: LabelOrientation,

    #[serde(default)]
    pub group_label_orientation: LabelOrientation,

    #[serde(default)]
    pub subgroup_label_orientation: LabelOrientation,

    /// Major tick length inside the plot frame
    #[serde(default = "default_major_tick_in")]
    pub major_tick_in: f64,

    /// Major tick length outside the plot frame
    #[serde(default = "default_major_tick_out")]
    pub major_tick_out: f64,

    #[serde(default)]
    pub major_label_text: TextVisuals,

    #[serde(default = "default_group_text")]
    pub group_text: TextVisuals,

    #[serde(default = "default_subgroup_text")]
    pub subgroup_text: TextVisuals,

    #[serde(default = "default_separator_line")]
    pub separator_line: LineVisuals,

    #[serde(default)]
    pub axis_line: LineVisuals,

    #[serde(default)]
    pub major_tick_line: LineVisuals,
}

fn default_major_label_standoff() -> f64 { 5.0 }
fn default_major_label_orientation() -> LabelOrientation { TickLabelOrientation::Horizontal.into() }
fn default_major_tick_in() -> f64 { 2.0 }
fn default_major_tick_out() -> f64 { 6.0 }
fn default_group_text() -> TextVisuals { TextVisuals::default().with_style(FontStyle::Bold).with_color("grey") }
fn default_subgroup_text() -> TextVisuals { TextVisuals::default().with_style(FontStyle::Bold) }
fn default_separator_line() -> LineVisuals { LineVisuals::default().with_color("lightgrey").with_width(2.0) }

impl Default for AxisConfig {
    fn default() -> Self {
        Self {
            major_label_standoff: default_major_label_standoff(),
            major_label_orientation: default_major_label_orientation(),
            group_label_orientation: LabelOrientation::default(),
            subgroup_label_orientation: LabelOrientation::default(),
            major_tick_in: default_major_tick_in(),
            major_tick_out: default_major_tick_out(),
            major_label_text: TextVisuals::default(),
            group_text: default_group_text(),
            subgroup_text: default_subgroup_text(),
            separator_line: default_separator_line(),
            axis_line: LineVisuals::default(),
            major_tick_line: LineVisuals::default(),
        }
    }
}
