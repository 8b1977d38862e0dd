//! CatX Core Library
//!
//! Factor ranges, categorical ticking, and layout of hierarchical categorical
//! axes: tick coordinates, group separators and stacked label rows.

pub mod axis;
pub mod config;
pub mod factor;
pub mod formatter;
pub mod range;
pub mod ticker;
pub mod visuals;

// Re-export commonly used types and functions
pub use axis::{AxisBase, AxisLayout, CategoricalAxisView, Coords, Extents, LabelRow, PaintError, Side, TickCoords};
pub use config::AxisConfig;
pub use factor::{Factor, Levels};
pub use formatter::{CategoricalTickFormatter, TickFormatter};
pub use range::{FactorRange, RangeError, RangePadding};
pub use ticker::{CategoricalTicker, Tick, TickSet, Ticker};

/// Version information for the CatX core library
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version_is_set() {
        assert!(!VERSION.is_empty());
    }
}
