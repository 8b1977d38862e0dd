//! Render command implementation - export the axis to SVG

use anyhow::Result;
use catx_core::Side;
use catx_render::{AxisExporter, ExportConfig};
use std::path::PathBuf;

use crate::config::Config;
use crate::error::CliError;

/// Command-line values that take precedence over the `[export]` table
#[derive(Debug, Default)]
pub struct Overrides {
    pub side: Option<Side>,
    pub width: Option<u32>,
    pub height: Option<u32>,
    pub start: Option<f64>,
    pub end: Option<f64>,
    pub title: Option<String>,
}

impl Overrides {
    pub fn apply(self, mut export: ExportConfig) -> ExportConfig {
        if let Some(side) = self.side {
            export.side = side;
        }
        if let Some(width) = self.width {
            export.width = width;
        }
        if let Some(height) = self.height {
            export.height = height;
        }
        if self.start.is_some() {
            export.start = self.start;
        }
        if self.end.is_some() {
            export.end = self.end;
        }
        if self.title.is_some() {
            export.title = self.title;
        }
        export
    }
}

pub fn execute(config: &Config, output: PathBuf, overrides: Overrides) -> Result<()> {
    log::info!("Starting axis rendering");
    log::info!("Output file: {}", output.display());

    let range = config.build_range()?;
    log::info!(
        "Factor range: {} factor(s), {:?} level(s), span [{}, {}]",
        range.factors().len(),
        range.levels(),
        range.start(),
        range.end()
    );

    let export = overrides.apply(config.export.clone());
    log::debug!("Export configuration: {:?}", export);

    let exporter = AxisExporter::new(export, config.axis.clone());
    let layout = exporter
        .export_svg(&output, &range)
        .map_err(|e| CliError::rendering(format!("{:#}", e)))?;

    log::info!(
        "Wrote {} ({} label row(s), tick label extent {:.1}px)",
        output.display(),
        layout.rows.len(),
        layout.extents.tick_label()
    );

    Ok(())
}
