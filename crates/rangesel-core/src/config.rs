//! Widget configuration.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Width of a handle grab band and glyph, in pixels.
pub const HANDLE_WIDTH: f64 = 5.0;
/// Height of a handle glyph, in pixels.
pub const HANDLE_HEIGHT: f64 = 40.0;

/// Configuration errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to parse config: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("Invalid config: {0}")]
    Invalid(String),
}

/// Handle dimensions used for hit-testing and drawing.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SelectionConfig {
    /// Width of each handle band in pixels.
    pub handle_width: f64,
    /// Height of each handle glyph in pixels.
    pub handle_height: f64,
}

impl Default for SelectionConfig {
    fn default() -> Self {
        Self {
            handle_width: HANDLE_WIDTH,
            handle_height: HANDLE_HEIGHT,
        }
    }
}

impl SelectionConfig {
    /// Parse a config from JSON. Missing fields take their defaults.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Handle dimensions multiplied by a display scale factor.
    ///
    /// Dimensions are given in logical pixels; hosts that feed the widget
    /// physical coordinates scale them once per scale factor change.
    pub fn scaled(self, scale_factor: f64) -> Self {
        Self {
            handle_width: self.handle_width * scale_factor,
            handle_height: self.handle_height * scale_factor,
        }
    }

    /// Check that handle dimensions are usable.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.handle_width.is_finite() && self.handle_width >= 0.0) {
            return Err(ConfigError::Invalid(format!(
                "handle_width must be a non-negative number, got {}",
                self.handle_width
            )));
        }
        if !(self.handle_height.is_finite() && self.handle_height >= 0.0) {
            return Err(ConfigError::Invalid(format!(
                "handle_height must be a non-negative number, got {}",
                self.handle_height
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = SelectionConfig::default();
        assert!((config.handle_width - 5.0).abs() < f64::EPSILON);
        assert!((config.handle_height - 40.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let config = SelectionConfig::from_json(r#"{ "handle_width": 8.0 }"#).unwrap();
        assert!((config.handle_width - 8.0).abs() < f64::EPSILON);
        assert!((config.handle_height - HANDLE_HEIGHT).abs() < f64::EPSILON);
    }

    #[test]
    fn test_malformed_json() {
        let err = SelectionConfig::from_json("{ handle_width").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_scaled() {
        let config = SelectionConfig::default().scaled(2.0);
        assert!((config.handle_width - 10.0).abs() < f64::EPSILON);
        assert!((config.handle_height - 80.0).abs() < f64::EPSILON);
        assert_eq!(SelectionConfig::default().scaled(1.0), SelectionConfig::default());
    }

    #[test]
    fn test_negative_width_rejected() {
        let err = SelectionConfig::from_json(r#"{ "handle_width": -1.0 }"#).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)));
    }
}
