//! Viewer configuration: step sizes, named filter presets, and page
//! activation.
//!
//! Every field has a default matching the stock key bindings, so a partial
//! JSON object only needs the fields it changes:
//!
//! ```json
//! { "scale_step": 0.5, "activation_prefix": null }
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::state::FILTER_RANGE;

/// Digit keys 1 through 9 can each hold one preset.
pub const MAX_PRESETS: usize = 9;

/// Page prefix the stock configuration activates on.
pub const DEFAULT_ACTIVATION_PREFIX: &str = "https://platform.sotkaonline.ru/storage";

/// Error types for configuration loading and validation.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// A step size is zero, negative, NaN or infinite.
    #[error("Invalid {name} step: {value}")]
    InvalidStep { name: &'static str, value: f64 },

    /// More presets than there are digit keys.
    #[error("Too many presets: {0} (at most 9)")]
    TooManyPresets(usize),

    /// A preset value outside 0..=500.
    #[error("Preset {index} out of range: contrast {contrast}%, brightness {brightness}%")]
    PresetOutOfRange {
        index: usize,
        contrast: f64,
        brightness: f64,
    },

    /// The JSON document could not be parsed.
    #[error("Invalid config JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// A named grayscale filter bound to a digit key.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FilterPreset {
    /// Contrast percentage
    pub contrast: f64,
    /// Brightness percentage
    pub brightness: f64,
}

impl FilterPreset {
    pub const fn new(contrast: f64, brightness: f64) -> Self {
        Self {
            contrast,
            brightness,
        }
    }
}

/// Stock presets for Digit1..Digit5.
pub const DEFAULT_PRESETS: [FilterPreset; 5] = [
    FilterPreset::new(140.0, 110.0),
    FilterPreset::new(170.0, 120.0),
    FilterPreset::new(200.0, 130.0),
    FilterPreset::new(250.0, 130.0),
    FilterPreset::new(280.0, 140.0),
];

/// Tunable parameters for the keyboard bindings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ViewerConfig {
    /// Offset change per pan key, in percent of the image size
    pub translate_step: f64,
    /// Scale change per Shift+W / Shift+S
    pub scale_step: f64,
    /// Rotation per Q / E, in degrees
    pub rotate_step: f64,
    /// Rotation per Shift+Q / Shift+E, in degrees
    pub fine_rotate_step: f64,
    /// Contrast change per Z, in percent
    pub contrast_step: f64,
    /// Brightness change per X, in percent
    pub brightness_step: f64,
    /// Presets in digit order (first preset is Digit1)
    pub presets: Vec<FilterPreset>,
    /// Only activate on pages whose URL contains this; `None` activates
    /// everywhere
    pub activation_prefix: Option<String>,
}

impl Default for ViewerConfig {
    fn default() -> Self {
        Self {
            translate_step: 5.0,
            scale_step: 0.3,
            rotate_step: 90.0,
            fine_rotate_step: 5.0,
            contrast_step: 10.0,
            brightness_step: 10.0,
            presets: DEFAULT_PRESETS.to_vec(),
            activation_prefix: Some(DEFAULT_ACTIVATION_PREFIX.to_string()),
        }
    }
}

impl ViewerConfig {
    /// Create a configuration with the stock bindings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse and validate a JSON document.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: ViewerConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Serialize to a JSON document.
    pub fn to_json(&self) -> Result<String, ConfigError> {
        Ok(serde_json::to_string(self)?)
    }

    /// Check step sizes and presets.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let steps = [
            ("translate", self.translate_step),
            ("scale", self.scale_step),
            ("rotate", self.rotate_step),
            ("fine rotate", self.fine_rotate_step),
            ("contrast", self.contrast_step),
            ("brightness", self.brightness_step),
        ];
        for (name, value) in steps {
            if !value.is_finite() || value <= 0.0 {
                return Err(ConfigError::InvalidStep { name, value });
            }
        }

        if self.presets.len() > MAX_PRESETS {
            return Err(ConfigError::TooManyPresets(self.presets.len()));
        }

        for (index, preset) in self.presets.iter().enumerate() {
            if !FILTER_RANGE.contains(&preset.contrast)
                || !FILTER_RANGE.contains(&preset.brightness)
            {
                return Err(ConfigError::PresetOutOfRange {
                    index,
                    contrast: preset.contrast,
                    brightness: preset.brightness,
                });
            }
        }

        Ok(())
    }

    /// Preset bound to digit key `digit` (1-based).
    pub fn preset(&self, digit: usize) -> Option<FilterPreset> {
        digit
            .checked_sub(1)
            .and_then(|index| self.presets.get(index))
            .copied()
    }

    /// Whether the viewer should attach on the page at `href`.
    pub fn should_activate(&self, href: &str) -> bool {
        match &self.activation_prefix {
            Some(prefix) => href.contains(prefix.as_str()),
            None => true,
        }
    }
}
