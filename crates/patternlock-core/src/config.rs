//! Widget configuration.

use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

use crate::haptics::DEFAULT_VIBRATE_MS;
use crate::hit_test::DEFAULT_HIT_PADDING;
use crate::path::DEFAULT_FADE_DISTANCE;

/// Visual radius of a dot in logical units.
pub const DEFAULT_DOT_RADIUS: f64 = 2.5;
/// On-screen width the widget is laid out at by default, in device pixels.
pub const DEFAULT_CANVAS_WIDTH: f64 = 324.0;

/// Configuration errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Parse error: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("Invalid value for {field}: {value}")]
    Invalid { field: &'static str, value: f64 },
}

/// Result type for configuration operations.
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Tunables for hit-testing, feedback and path drawing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PatternLockConfig {
    /// Extra tolerance around each dot box, in device pixels.
    pub hit_padding: f64,
    /// Vibration length when a new dot is captured.
    pub vibrate_ms: u32,
    /// Cursor distance (logical units) at which the trailing line is fully opaque.
    pub fade_distance: f64,
    /// Visual dot radius in logical units.
    pub dot_radius: f64,
    /// Default on-screen canvas width in device pixels.
    pub canvas_width: f64,
}

impl Default for PatternLockConfig {
    fn default() -> Self {
        Self {
            hit_padding: DEFAULT_HIT_PADDING,
            vibrate_ms: DEFAULT_VIBRATE_MS,
            fade_distance: DEFAULT_FADE_DISTANCE,
            dot_radius: DEFAULT_DOT_RADIUS,
            canvas_width: DEFAULT_CANVAS_WIDTH,
        }
    }
}

impl PatternLockConfig {
    /// Parse a JSON document; missing fields take their defaults.
    pub fn from_json_str(json: &str) -> ConfigResult<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Load a JSON config file.
    pub fn load(path: impl AsRef<Path>) -> ConfigResult<Self> {
        let json = std::fs::read_to_string(path.as_ref())?;
        log::debug!("loaded config from {}", path.as_ref().display());
        Self::from_json_str(&json)
    }

    /// Check that every value is usable.
    pub fn validate(&self) -> ConfigResult<()> {
        let checks = [
            ("hit_padding", self.hit_padding, self.hit_padding >= 0.0),
            ("fade_distance", self.fade_distance, self.fade_distance > 0.0),
            ("dot_radius", self.dot_radius, self.dot_radius > 0.0),
            ("canvas_width", self.canvas_width, self.canvas_width > 0.0),
        ];
        for (field, value, ok) in checks {
            if !ok || !value.is_finite() {
                return Err(ConfigError::Invalid { field, value });
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_defaults() {
        let config = PatternLockConfig::default();
        assert!((config.hit_padding - 20.0).abs() < f64::EPSILON);
        assert_eq!(config.vibrate_ms, 5);
        assert!((config.fade_distance - 20.0).abs() < f64::EPSILON);
        assert!((config.dot_radius - 2.5).abs() < f64::EPSILON);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let config = PatternLockConfig::from_json_str(r#"{"hit_padding": 12.0, "vibrate_ms": 0}"#).unwrap();
        assert!((config.hit_padding - 12.0).abs() < f64::EPSILON);
        assert_eq!(config.vibrate_ms, 0);
        assert!((config.canvas_width - DEFAULT_CANVAS_WIDTH).abs() < f64::EPSILON);
    }

    #[test]
    fn test_invalid_values_rejected() {
        let err = PatternLockConfig::from_json_str(r#"{"fade_distance": 0.0}"#).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { field: "fade_distance", .. }));

        let err = PatternLockConfig::from_json_str(r#"{"hit_padding": -1.0}"#).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { field: "hit_padding", .. }));

        assert!(matches!(
            PatternLockConfig::from_json_str("not json"),
            Err(ConfigError::Parse(_))
        ));
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"dot_radius": 4.0}}"#).unwrap();

        let config = PatternLockConfig::load(file.path()).unwrap();
        assert!((config.dot_radius - 4.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let result = PatternLockConfig::load(dir.path().join("missing.json"));
        assert!(matches!(result, Err(ConfigError::Io(_))));
    }
}
