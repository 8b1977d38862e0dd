//! Panel sides, label orientations and the per-side text heuristics.

use serde::{Deserialize, Serialize};
use std::f64::consts::FRAC_PI_2;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Side {
    Above,
    #[default]
    Below,
    Left,
    Right,
}

/// Axis dimension: index 0 runs horizontally, index 1 vertically.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Dimension {
    X,
    Y,
}

impl Dimension {
    pub fn index(self) -> usize {
        match self {
            Dimension::X => 0,
            Dimension::Y => 1,
        }
    }

    pub fn other(self) -> Dimension {
        match self {
            Dimension::X => Dimension::Y,
            Dimension::Y => Dimension::X,
        }
    }
}

impl Side {
    pub fn dimension(self) -> Dimension {
        match self {
            Side::Above | Side::Below => Dimension::X,
            Side::Left | Side::Right => Dimension::Y,
        }
    }

    /// Outward unit normal in screen space (y grows downward).
    pub fn normal(self) -> (f64, f64) {
        match self {
            Side::Above => (0.0, -1.0),
            Side::Below => (0.0, 1.0),
            Side::Left => (-1.0, 0.0),
            Side::Right => (1.0, 0.0),
        }
    }

    pub fn is_horizontal(self) -> bool {
        matches!(self.dimension(), Dimension::X)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TickLabelOrientation {
    Parallel,
    Horizontal,
    Vertical,
    Normal,
}

/// Rotation of a label row: a named orientation relative to the axis, or an
/// explicit angle in radians.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum LabelOrientation {
    Named(TickLabelOrientation),
    Angle(f64),
}

impl Default for LabelOrientation {
    fn default() -> Self {
        LabelOrientation::Named(TickLabelOrientation::Parallel)
    }
}

impl From<TickLabelOrientation> for LabelOrientation {
    fn from(orient: TickLabelOrientation) -> Self {
        LabelOrientation::Named(orient)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TextAlign {
    Left,
    Center,
    Right,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TextBaseline {
    Middle,
    Alphabetic,
    Hanging,
}

impl LabelOrientation {
    /// Screen rotation in radians for labels drawn on `side`.
    pub fn angle(self, side: Side) -> f64 {
        use TickLabelOrientation::*;
        match self {
            LabelOrientation::Angle(radians) => -radians,
            LabelOrientation::Named(orient) => match (side, orient) {
                (Side::Above, Parallel | Horizontal) => 0.0,
                (Side::Above, Normal | Vertical) => -FRAC_PI_2,
                (Side::Below, Parallel | Horizontal) => 0.0,
                (Side::Below, Normal | Vertical) => FRAC_PI_2,
                (Side::Left, Parallel | Vertical) => -FRAC_PI_2,
                (Side::Left, Normal | Horizontal) => 0.0,
                (Side::Right, Parallel | Vertical) => FRAC_PI_2,
                (Side::Right, Normal | Horizontal) => 0.0,
            },
        }
    }

    pub fn align(self, side: Side) -> TextAlign {
        use TickLabelOrientation::*;
        match self {
            LabelOrientation::Angle(radians) => match (side, radians < 0.0) {
                (Side::Above, true) | (Side::Left, _) => TextAlign::Right,
                (Side::Below, true) | (Side::Right, _) | (Side::Above, false) => TextAlign::Left,
                (Side::Below, false) => TextAlign::Right,
            },
            LabelOrientation::Named(orient) => match (side, orient) {
                (_, Parallel) => TextAlign::Center,
                (Side::Above | Side::Below, Horizontal) => TextAlign::Center,
                (Side::Above | Side::Below, Normal | Vertical) => TextAlign::Left,
                (Side::Left, Normal | Horizontal) => TextAlign::Right,
                (Side::Right, Normal | Horizontal) => TextAlign::Left,
                (Side::Left | Side::Right, Vertical) => TextAlign::Center,
            },
        }
    }

    pub fn baseline(self, side: Side) -> TextBaseline {
        use TickLabelOrientation::*;
        match self {
            LabelOrientation::Angle(_) => TextBaseline::Middle,
            LabelOrientation::Named(orient) => match (side, orient) {
                (Side::Above, Parallel | Horizontal) => TextBaseline::Alphabetic,
                (Side::Below, Parallel | Horizontal) => TextBaseline::Hanging,
                (Side::Above | Side::Below, Normal | Vertical) => TextBaseline::Middle,
                (Side::Left | Side::Right, Parallel | Vertical) => TextBaseline::Alphabetic,
                (Side::Left | Side::Right, Normal | Horizontal) => TextBaseline::Middle,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_named_angles() {
        let parallel = LabelOrientation::Named(TickLabelOrientation::Parallel);
        assert_eq!(parallel.angle(Side::Below), 0.0);
        assert_eq!(parallel.angle(Side::Left), -FRAC_PI_2);
        let vertical = LabelOrientation::Named(TickLabelOrientation::Vertical);
        assert_eq!(vertical.angle(Side::Below), FRAC_PI_2);
        assert_eq!(vertical.angle(Side::Right), FRAC_PI_2);
    }

    #[test]
    fn test_explicit_angle_is_negated() {
        assert_eq!(LabelOrientation::Angle(0.5).angle(Side::Below), -0.5);
        assert_eq!(LabelOrientation::Angle(0.5).baseline(Side::Below), TextBaseline::Middle);
    }

    #[test]
    fn test_side_dimension_and_normal() {
        assert_eq!(Side::Below.dimension(), Dimension::X);
        assert_eq!(Side::Left.dimension().index(), 1);
        assert_eq!(Side::Left.normal(), (-1.0, 0.0));
        assert_eq!(Dimension::X.other(), Dimension::Y);
    }

    #[test]
    fn test_orientation_serde() {
        let named: LabelOrientation = serde_json::from_str(r#""vertical""#).unwrap();
        assert_eq!(named, LabelOrientation::Named(TickLabelOrientation::Vertical));
        let angle: LabelOrientation = serde_json::from_str("0.75").unwrap();
        assert_eq!(angle, LabelOrientation::Angle(0.75));
    }
}
