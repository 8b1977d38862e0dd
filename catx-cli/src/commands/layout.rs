//! Layout command implementation - print the computed axis layout as JSON

use anyhow::{Context, Result};
use catx_core::{AxisLayout, Side};
use catx_render::AxisExporter;

use crate::config::Config;
use crate::error::CliError;

pub fn compute(config: &Config, side: Option<Side>) -> Result<AxisLayout> {
    let range = config.build_range()?;
    let mut export = config.export.clone();
    if let Some(side) = side {
        export.side = side;
    }
    log::debug!("Computing layout for side {:?}", export.side);

    AxisExporter::new(export, config.axis.clone())
        .layout(&range)
        .map_err(|e| CliError::rendering(format!("{:#}", e)).into())
}

pub fn execute(config: &Config, side: Option<Side>, pretty: bool) -> Result<()> {
    let layout = compute(config, side)?;
    let json = if pretty {
        serde_json::to_string_pretty(&layout)
    } else {
        serde_json::to_string(&layout)
    }
    .context("Failed to serialize axis layout")?;

    println!("{}", json);
    Ok(())
}
