//! Hierarchical categorical axis: tick coordinates, group separators and
//! multi-row label layout, painted through an injected [`AxisBase`].
//!
//! A paint cycle flows in one direction:
//! 1. [`coords`] resolves tick coordinates for the visible span
//! 2. [`labels`] plans one label row per nesting level and measures them
//! 3. [`separators`] places lines between adjacent top-level groups
//! 4. [`view`] draws separators, then rows outward from the axis line

pub mod coords;
pub mod labels;
pub mod orient;
pub mod separators;
pub mod view;

use crate::visuals::{LineVisuals, TextVisuals};
use serde::{Deserialize, Serialize};
use thiserror::Error;

pub use coords::{compute_tick_coords, coords_from_ticks};
pub use labels::{plan_label_rows, row_extents, row_offsets, GraphicsBoxes, Label, LabelRow, RowKind, TextBox};
pub use orient::{Dimension, LabelOrientation, Side, TextAlign, TextBaseline, TickLabelOrientation};
pub use separators::{draw_group_separators, group_separator_coords};
pub use view::{AxisLayout, CategoricalAxisView, Extents};

/// Positions indexed by dimension: `[0]` along x, `[1]` along y.
pub type Coords = [Vec<f64>; 2];

/// Tick coordinates per category, innermost to outermost.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct TickCoords {
    pub major: Coords,
    pub mids: Coords,
    pub tops: Coords,
    pub minor: Coords,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Size {
    pub width: f64,
    pub height: f64,
}

impl Size {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum PaintError {
    #[error("Failed to measure label {text:?}: {message}")]
    Measurement { text: String, message: String },

    #[error("Drawing surface error: {0}")]
    Surface(String),
}

impl PaintError {
    pub fn measurement<S: Into<String>>(text: S, message: S) -> Self {
        Self::Measurement { text: text.into(), message: message.into() }
    }

    pub fn surface<S: Into<String>>(message: S) -> Self {
        Self::Surface(message.into())
    }
}

/// Capabilities of the generic axis the categorical view draws through:
/// panel geometry, text measurement and the two drawing primitives.
///
/// Coordinates handed to the drawing methods are synthetic range positions;
/// mapping them to screen space belongs to the implementor.
pub trait AxisBase {
    /// Visible span of the range along the axis, `start < end`.
    fn computed_bounds(&self) -> (f64, f64);

    fn panel_side(&self) -> Side;

    /// Position of the axis line on the orthogonal dimension.
    fn loc(&self) -> f64;

    fn dimension(&self) -> Dimension {
        self.panel_side().dimension()
    }

    /// Size of a label box before rotation.
    fn measure_label(&self, label: &TextBox, visuals: &TextVisuals) -> Result<Size, PaintError>;

    fn draw_rule(&mut self, visuals: &LineVisuals) -> Result<(), PaintError>;

    /// Draw a mark at each coordinate spanning from `tin` pixels inside to
    /// `tout` pixels outside the axis line.
    fn draw_ticks(&mut self, coords: &Coords, tin: f64, tout: f64, visuals: &LineVisuals) -> Result<(), PaintError>;

    /// Draw `labels` at `coords`, pushed `standoff` pixels outward.
    fn draw_oriented_labels(
        &mut self,
        labels: &GraphicsBoxes,
        coords: &Coords,
        orientation: LabelOrientation,
        standoff: f64,
        visuals: &TextVisuals,
    ) -> Result<(), PaintError>;
}
