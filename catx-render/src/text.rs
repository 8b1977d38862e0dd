//! Approximate text metrics for vector output, where no font rasterizer is
//! available at layout time.

use catx_core::axis::{PaintError, Size, TextBox};
use catx_core::visuals::{FontStyle, TextVisuals};

/// Average glyph advance as a fraction of the font size.
const CHAR_WIDTH: f64 = 0.6;
/// Line box height as a fraction of the font size.
const LINE_HEIGHT: f64 = 1.2;
const BOLD_WIDEN: f64 = 1.1;

pub fn measure(label: &TextBox, visuals: &TextVisuals) -> Result<Size, PaintError> {
    if let Some(size) = label.size {
        return Ok(size);
    }
    if !visuals.font_size.is_finite() || visuals.font_size <= 0.0 {
        return Err(PaintError::measurement(
            label.text.clone(),
            format!("invalid font size {}", visuals.font_size),
        ));
    }

    let longest = label.text.lines().map(|l| l.chars().count()).max().unwrap_or(0);
    let lines = label.text.lines().count().max(1);
    let mut width = longest as f64 * visuals.font_size * CHAR_WIDTH;
    if matches!(visuals.font_style, FontStyle::Bold | FontStyle::BoldItalic) {
        width *= BOLD_WIDEN;
    }
    Ok(Size::new(width, lines as f64 * visuals.font_size * LINE_HEIGHT))
}

pub fn escape_xml(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_measure_plain_text() {
        let size = measure(&TextBox::new("abcd"), &TextVisuals::default()).unwrap();
        assert!((size.width - 4.0 * 11.0 * 0.6).abs() < 1e-9);
        assert!((size.height - 11.0 * 1.2).abs() < 1e-9);
    }

    #[test]
    fn test_bold_is_wider() {
        let plain = measure(&TextBox::new("ab"), &TextVisuals::default()).unwrap();
        let bold = measure(&TextBox::new("ab"), &TextVisuals::default().with_style(FontStyle::Bold)).unwrap();
        assert!(bold.width > plain.width);
    }

    #[test]
    fn test_prebuilt_size_wins() {
        let size = measure(&TextBox::sized("x", Size::new(40.0, 3.0)), &TextVisuals::default()).unwrap();
        assert_eq!(size, Size::new(40.0, 3.0));
    }

    #[test]
    fn test_invalid_font_size_fails() {
        let visuals = TextVisuals { font_size: 0.0, ..TextVisuals::default() };
        assert!(measure(&TextBox::new("x"), &visuals).is_err());
    }

    #[test]
    fn test_escape() {
        assert_eq!(escape_xml("a<b>&\"c\""), "a&lt;b&gt;&amp;&quot;c&quot;");
    }
}
