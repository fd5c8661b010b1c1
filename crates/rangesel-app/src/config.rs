//! Application configuration and errors.

use peniko::Color;
use rangesel_core::{
    ConfigError, CoordinateMapper, MappingError, Range, SelectionConfig, SelectionStyle,
};
use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

/// Application errors.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Failed to read config: {0}")]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error("Invalid viewport: {0}")]
    Mapping(#[from] MappingError),
    #[error("Invalid color: {0}")]
    InvalidColor(String),
    #[error("Event loop error: {0}")]
    EventLoop(#[from] winit::error::EventLoopError),
    #[error("Window creation failed: {0}")]
    Window(#[from] winit::error::OsError),
    #[error("Surface error: {0}")]
    Surface(String),
    #[error("Renderer initialization failed: {0}")]
    Renderer(String),
}

/// Application configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub title: String,
    pub width: u32,
    pub height: u32,
    /// Lower bound of the reference range shown across the window.
    pub reference_min: f64,
    /// Upper bound of the reference range shown across the window.
    pub reference_max: f64,
    /// Background color as `#rrggbb`.
    pub background: String,
    /// Selection body fill as `#rrggbb` or `#rrggbbaa`.
    pub fill: String,
    /// Selection boundary line color.
    pub border: String,
    /// Handle glyph color.
    pub handle: String,
    /// Handle dimensions in logical pixels.
    pub selection: SelectionConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            title: "rangesel".to_string(),
            width: 1280,
            height: 200,
            reference_min: 0.0,
            reference_max: 1000.0,
            background: "#fafafa".to_string(),
            fill: "#cde4f880".to_string(),
            border: "#91c4ef".to_string(),
            handle: "#696868".to_string(),
            selection: SelectionConfig::default(),
        }
    }
}

impl AppConfig {
    /// Parse and validate a config from JSON. Missing fields take their defaults.
    pub fn from_json(json: &str) -> Result<Self, AppError> {
        let config: Self = serde_json::from_str(json).map_err(ConfigError::from)?;
        config.validate()?;
        Ok(config)
    }

    /// Read a config file.
    pub fn load(path: &Path) -> Result<Self, AppError> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    /// Check the viewport, handle dimensions and colors.
    pub fn validate(&self) -> Result<(), AppError> {
        // Bounds are taken as given so an inverted pair reads as empty.
        let mut reference = Range::empty();
        reference.set_min(self.reference_min);
        reference.set_max(self.reference_max);
        CoordinateMapper::try_new(reference, f64::from(self.width))?;

        self.selection.validate()?;
        self.background_color()?;
        self.style()?;
        Ok(())
    }

    /// The reference range spanning the window width.
    pub fn reference(&self) -> Range {
        Range::new(self.reference_min, self.reference_max)
    }

    /// Parsed background color.
    pub fn background_color(&self) -> Result<Color, AppError> {
        color_field(&self.background)
    }

    /// Selection palette built from the configured colors.
    pub fn style(&self) -> Result<SelectionStyle, AppError> {
        Ok(SelectionStyle {
            fill: color_field(&self.fill)?,
            border: color_field(&self.border)?,
            handle: color_field(&self.handle)?,
            ..SelectionStyle::default()
        })
    }
}

fn color_field(value: &str) -> Result<Color, AppError> {
    parse_color(value).ok_or_else(|| AppError::InvalidColor(value.to_string()))
}

/// Parse a hex color string like "#ff0000" or "#ff000080".
fn parse_color(s: &str) -> Option<Color> {
    let hex = s.trim().strip_prefix('#')?;
    if !matches!(hex.len(), 6 | 8) || !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
        return None;
    }
    let channel = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).ok();
    let a = if hex.len() == 8 { channel(6)? } else { 255 };
    Some(Color::from_rgba8(channel(0)?, channel(2)?, channel(4)?, a))
}
