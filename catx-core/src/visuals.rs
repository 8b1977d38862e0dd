//! Visual attribute bundles. The axis core only reads `visible`; everything
//! else is passed through to the drawing surface.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FontStyle {
    #[default]
    Normal,
    Italic,
    Bold,
    BoldItalic,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TextVisuals {
    pub visible: bool,
    pub color: String,
    pub alpha: f64,
    pub font: String,
    /// Font size in pixels
    pub font_size: f64,
    pub font_style: FontStyle,
}

impl Default for TextVisuals {
    fn default() -> Self {
        Self {
            visible: true,
            color: "#444444".to_string(),
            alpha: 1.0,
            font: "helvetica".to_string(),
            font_size: 11.0,
            font_style: FontStyle::Normal,
        }
    }
}

impl TextVisuals {
    pub fn with_style(mut self, style: FontStyle) -> Self {
        self.font_style = style;
        self
    }

    pub fn with_color<S: Into<String>>(mut self, color: S) -> Self {
        self.color = color.into();
        self
    }

    pub fn hidden(mut self) -> Self {
        self.visible = false;
        self
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LineVisuals {
    pub visible: bool,
    pub color: String,
    pub alpha: f64,
    pub width: f64,
}

impl Default for LineVisuals {
    fn default() -> Self {
        Self {
            visible: true,
            color: "black".to_string(),
            alpha: 1.0,
            width: 1.0,
        }
    }
}

impl LineVisuals {
    pub fn with_color<S: Into<String>>(mut self, color: S) -> Self {
        self.color = color.into();
        self
    }

    pub fn with_width(mut self, width: f64) -> Self {
        self.width = width;
        self
    }

    pub fn hidden(mut self) -> Self {
        self.visible = false;
        self
    }
}
