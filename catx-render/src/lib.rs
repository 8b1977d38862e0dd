/*!
# CatX Rendering

Vector output for categorical axes. The core view computes layout and issues
drawing primitives; this crate supplies the axis base that turns those
primitives into SVG elements, along with approximate text metrics.
*/

pub mod text;
pub mod vector_export;

pub use vector_export::{AxisExporter, ExportConfig, SvgAxis};
