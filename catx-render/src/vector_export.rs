/*!
# Vector Export System

Renders a categorical axis into an SVG document. [`SvgAxis`] is the axis
base the core view paints through: it owns the mapping from synthetic range
positions to pixels along the axis and accumulates SVG elements.
*/

use anyhow::{anyhow, Context, Result};
use catx_core::axis::{GraphicsBoxes, LabelOrientation, PaintError, Size, TextAlign, TextBaseline, TextBox};
use catx_core::visuals::{FontStyle, LineVisuals, TextVisuals};
use catx_core::{AxisBase, AxisConfig, AxisLayout, CategoricalAxisView, Coords, FactorRange, Side};
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::Write;
use std::path::Path;

use crate::text::{escape_xml, measure};

/// Export configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExportConfig {
    pub width: u32,
    pub height: u32,
    /// Distance between the document edge and the plot frame, in pixels
    pub margin: f64,
    pub side: Side,
    /// Visible span start; the range start when unset
    pub start: Option<f64>,
    /// Visible span end; the range end when unset
    pub end: Option<f64>,
    pub title: Option<String>,
    pub background_color: String,
    pub font_family: Option<String>,
    pub provenance_comment: Option<String>,
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            width: 800,
            height: 240,
            margin: 80.0,
            side: Side::Below,
            start: None,
            end: None,
            title: None,
            background_color: "#ffffff".to_string(),
            font_family: None,
            provenance_comment: None,
        }
    }
}

impl ExportConfig {
    /// Visible span for `range`, validated to be non-empty.
    pub fn bounds(&self, range: &FactorRange) -> Result<(f64, f64)> {
        let start = self.start.unwrap_or_else(|| range.start());
        let end = self.end.unwrap_or_else(|| range.end());
        if !(start.is_finite() && end.is_finite() && start < end) {
            return Err(anyhow!("Invalid visible span: start {} must be less than end {}", start, end));
        }
        Ok((start, end))
    }
}

/// Exports categorical axes to SVG
pub struct AxisExporter {
    config: ExportConfig,
    axis: AxisConfig,
}

impl AxisExporter {
    pub fn new(config: ExportConfig, axis: AxisConfig) -> Self {
        Self { config, axis }
    }

    fn surface(&self, range: &FactorRange) -> Result<SvgAxis> {
        let bounds = self.config.bounds(range)?;
        let mut svg = SvgAxis::new(&self.config, bounds);
        if let Some(font) = &self.config.font_family {
            svg.set_font_override(font);
        }
        Ok(svg)
    }

    /// Compute the axis layout without producing output.
    pub fn layout(&self, range: &FactorRange) -> Result<AxisLayout> {
        let svg = self.surface(range)?;
        let view = CategoricalAxisView::new(range, &self.axis);
        view.layout(&svg).context("Failed to lay out categorical axis")
    }

    /// Render the axis to an SVG document string.
    pub fn render_svg(&self, range: &FactorRange) -> Result<(String, AxisLayout)> {
        let mut svg = self.surface(range)?;
        svg.add_background();
        if let Some(comment) = &self.config.provenance_comment {
            svg.add_comment(comment);
        }
        if let Some(title) = &self.config.title {
            svg.add_title(title);
        }

        let view = CategoricalAxisView::new(range, &self.axis);
        let layout = view.render(&mut svg).context("Failed to paint categorical axis")?;
        log::info!(
            "Rendered {} label row(s), {} separator(s), {} SVG elements",
            layout.rows.len(),
            layout.separators[0].len().max(layout.separators[1].len()),
            svg.elements.len()
        );
        Ok((svg.to_svg_string(), layout))
    }

    /// Export to SVG format
    pub fn export_svg<P: AsRef<Path>>(&self, path: P, range: &FactorRange) -> Result<AxisLayout> {
        let path = path.as_ref();
        let (document, layout) = self.render_svg(range)?;
        let mut file = File::create(path).with_context(|| format!("Failed to create {}", path.display()))?;
        file.write_all(document.as_bytes())
            .with_context(|| format!("Failed to write {}", path.display()))?;
        Ok(layout)
    }
}

/// SVG axis base: maps synthetic positions along the axis onto the plot
/// frame edge for its side. Orthogonal coordinates are taken as pixels.
pub struct SvgAxis {
    width: f64,
    height: f64,
    margin: f64,
    side: Side,
    bounds: (f64, f64),
    background_color: String,
    font_override: Option<String>,
    elements: Vec<String>,
    top_comments: Vec<String>,
}

impl SvgAxis {
    pub fn new(config: &ExportConfig, bounds: (f64, f64)) -> Self {
        Self {
            width: config.width as f64,
            height: config.height as f64,
            margin: config.margin,
            side: config.side,
            bounds,
            background_color: config.background_color.clone(),
            font_override: None,
            elements: Vec::new(),
            top_comments: Vec::new(),
        }
    }

    pub fn set_font_override(&mut self, font: &str) {
        self.font_override = Some(font.to_string());
    }

    fn add_background(&mut self) {
        self.elements.push(format!(
            r#"<rect width="{}" height="{}" fill="{}"/>"#,
            self.width, self.height, self.background_color
        ));
    }

    fn add_comment(&mut self, text: &str) {
        self.top_comments.push(text.to_string());
    }

    fn add_title(&mut self, title: &str) {
        self.elements.push(format!(
            r#"<text x="{}" y="{}" font-size="15px" text-anchor="middle" font-weight="bold">{}</text>"#,
            self.width / 2.0,
            22.0,
            escape_xml(title)
        ));
    }

    /// Frame span along the axis, in pixels, for the range start and end.
    fn pixel_span(&self) -> (f64, f64) {
        match self.side {
            Side::Above | Side::Below => (self.margin, self.width - self.margin),
            // bottom-left origin: range start sits at the bottom
            Side::Left | Side::Right => (self.height - self.margin, self.margin),
        }
    }

    fn to_pixel(&self, value: f64) -> f64 {
        let (p0, p1) = self.pixel_span();
        let (start, end) = self.bounds;
        p0 + (value - start) / (end - start) * (p1 - p0)
    }

    fn to_screen(&self, coords: &Coords, i: usize) -> Option<(f64, f64)> {
        let (x, y) = (*coords[0].get(i)?, *coords[1].get(i)?);
        Some(match self.side {
            Side::Above | Side::Below => (self.to_pixel(x), y),
            Side::Left | Side::Right => (x, self.to_pixel(y)),
        })
    }

    fn font_attrs(&self, visuals: &TextVisuals) -> String {
        let family = self.font_override.as_deref().unwrap_or(&visuals.font);
        let mut attrs = format!(
            r#"font-family="{}" font-size="{}px" fill="{}""#,
            escape_xml(family),
            visuals.font_size,
            escape_xml(&visuals.color)
        );
        match visuals.font_style {
            FontStyle::Normal => {}
            FontStyle::Bold => attrs.push_str(r#" font-weight="bold""#),
            FontStyle::Italic => attrs.push_str(r#" font-style="italic""#),
            FontStyle::BoldItalic => attrs.push_str(r#" font-weight="bold" font-style="italic""#),
        }
        if visuals.alpha < 1.0 {
            attrs.push_str(&format!(r#" fill-opacity="{}""#, visuals.alpha));
        }
        attrs
    }

    fn line(&mut self, x0: f64, y0: f64, x1: f64, y1: f64, visuals: &LineVisuals) {
        let opacity = if visuals.alpha < 1.0 { format!(r#" stroke-opacity="{}""#, visuals.alpha) } else { String::new() };
        self.elements.push(format!(
            r#"<line x1="{:.2}" y1="{:.2}" x2="{:.2}" y2="{:.2}" stroke="{}" stroke-width="{}"{}/>"#,
            x0,
            y0,
            x1,
            y1,
            escape_xml(&visuals.color),
            visuals.width,
            opacity
        ));
    }

    pub fn to_svg_string(&self) -> String {
        let mut out = String::new();
        out.push_str("<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n");
        out.push_str(&format!(
            "<svg width=\"{}\" height=\"{}\" viewBox=\"0 0 {} {}\" xmlns=\"http://www.w3.org/2000/svg\">\n",
            self.width, self.height, self.width, self.height
        ));
        for c in &self.top_comments {
            for line in c.lines() {
                out.push_str(&format!("  <!-- {} -->\n", line.replace("--", "- -")));
            }
        }
        for element in &self.elements {
            out.push_str("  ");
            out.push_str(element);
            out.push('\n');
        }
        out.push_str("</svg>\n");
        out
    }
}

fn anchor(align: TextAlign) -> &'static str {
    match align {
        TextAlign::Left => "start",
        TextAlign::Center => "middle",
        TextAlign::Right => "end",
    }
}

fn dominant_baseline(baseline: TextBaseline) -> &'static str {
    match baseline {
        TextBaseline::Middle => "middle",
        TextBaseline::Alphabetic => "alphabetic",
        TextBaseline::Hanging => "hanging",
    }
}

impl AxisBase for SvgAxis {
    fn computed_bounds(&self) -> (f64, f64) {
        self.bounds
    }

    fn panel_side(&self) -> Side {
        self.side
    }

    fn loc(&self) -> f64 {
        match self.side {
            Side::Above | Side::Left => self.margin,
            Side::Below => self.height - self.margin,
            Side::Right => self.width - self.margin,
        }
    }

    fn measure_label(&self, label: &TextBox, visuals: &TextVisuals) -> Result<Size, PaintError> {
        measure(label, visuals)
    }

    fn draw_rule(&mut self, visuals: &LineVisuals) -> Result<(), PaintError> {
        let (p0, p1) = self.pixel_span();
        let loc = self.loc();
        match self.side {
            Side::Above | Side::Below => self.line(p0, loc, p1, loc, visuals),
            Side::Left | Side::Right => self.line(loc, p0, loc, p1, visuals),
        }
        Ok(())
    }

    fn draw_ticks(&mut self, coords: &Coords, tin: f64, tout: f64, visuals: &LineVisuals) -> Result<(), PaintError> {
        let (nx, ny) = self.side.normal();
        let count = coords[0].len().min(coords[1].len());
        for i in 0..count {
            let Some((sx, sy)) = self.to_screen(coords, i) else { continue };
            self.line(sx - nx * tin, sy - ny * tin, sx + nx * tout, sy + ny * tout, visuals);
        }
        Ok(())
    }

    fn draw_oriented_labels(
        &mut self,
        labels: &GraphicsBoxes,
        coords: &Coords,
        orientation: LabelOrientation,
        standoff: f64,
        visuals: &TextVisuals,
    ) -> Result<(), PaintError> {
        if !visuals.visible || labels.is_empty() {
            return Ok(());
        }
        if labels.len() != coords[0].len() {
            return Err(PaintError::surface(format!(
                "{} labels for {} coordinates",
                labels.len(),
                coords[0].len()
            )));
        }

        let (nx, ny) = self.side.normal();
        let degrees = orientation.angle(self.side).to_degrees();
        let text_anchor = anchor(orientation.align(self.side));
        let baseline = dominant_baseline(orientation.baseline(self.side));
        let font = self.font_attrs(visuals);

        for (i, label) in labels.iter().enumerate() {
            let Some((sx, sy)) = self.to_screen(coords, i) else { continue };
            let (x, y) = (sx + nx * standoff, sy + ny * standoff);
            let rotate = if degrees.abs() > f64::EPSILON {
                format!(r#" transform="rotate({:.2} {:.2} {:.2})""#, degrees, x, y)
            } else {
                String::new()
            };
            self.elements.push(format!(
                r#"<text x="{:.2}" y="{:.2}" {} text-anchor="{}" dominant-baseline="{}"{}>{}</text>"#,
                x,
                y,
                font,
                text_anchor,
                baseline,
                rotate,
                escape_xml(&label.text)
            ));
        }
        Ok(())
    }
}
