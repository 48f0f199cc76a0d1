//! Keyboard dispatch.
//!
//! Maps a `KeyboardEvent.code` and the Shift modifier to one state mutation.
//! Codes are layout independent (`KeyW` is the physical W key on any layout).
//!
//! | Code        | Plain             | Shift             |
//! |-------------|-------------------|-------------------|
//! | KeyA / KeyD | pan left / right  | same              |
//! | KeyW / KeyS | pan up / down     | zoom in / out     |
//! | KeyQ / KeyE | rotate -90 / +90  | rotate -5 / +5    |
//! | KeyR        | reset filters     | same              |
//! | KeyZ        | contrast +10      | contrast -10      |
//! | KeyX        | brightness +10    | brightness -10    |
//! | KeyF        | toggle grayscale  | same              |
//! | Digit1..9   | named preset      | same              |
//!
//! Step sizes and presets come from [`ViewerConfig`].

use crate::config::{FilterPreset, ViewerConfig, MAX_PRESETS};
use crate::element::ImageElement;
use crate::state::ImageTransformState;

const DIGIT_PREFIX: &str = "Digit";

const FIXED_CODES: [&str; 10] = [
    "KeyA", "KeyD", "KeyW", "KeyS", "KeyQ", "KeyE", "KeyR", "KeyZ", "KeyX", "KeyF",
];

/// A single state mutation triggered by a key.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum KeyAction {
    Translate { dx: f64, dy: f64 },
    Scale(f64),
    Rotate(f64),
    Contrast(f64),
    Brightness(f64),
    ToggleGrayscale,
    Reset,
    NamedFilter(FilterPreset),
}

impl KeyAction {
    /// Resolve a key code. Returns `None` for unbound keys.
    pub fn from_key(code: &str, shift: bool, config: &ViewerConfig) -> Option<Self> {
        let pan = config.translate_step;
        let action = match code {
            "KeyA" => KeyAction::Translate { dx: pan, dy: 0.0 },
            "KeyD" => KeyAction::Translate { dx: -pan, dy: 0.0 },
            "KeyW" if shift => KeyAction::Scale(config.scale_step),
            "KeyW" => KeyAction::Translate { dx: 0.0, dy: pan },
            "KeyS" if shift => KeyAction::Scale(-config.scale_step),
            "KeyS" => KeyAction::Translate { dx: 0.0, dy: -pan },
            "KeyQ" if shift => KeyAction::Rotate(-config.fine_rotate_step),
            "KeyQ" => KeyAction::Rotate(-config.rotate_step),
            "KeyE" if shift => KeyAction::Rotate(config.fine_rotate_step),
            "KeyE" => KeyAction::Rotate(config.rotate_step),
            "KeyR" => KeyAction::Reset,
            "KeyZ" if shift => KeyAction::Contrast(-config.contrast_step),
            "KeyZ" => KeyAction::Contrast(config.contrast_step),
            "KeyX" if shift => KeyAction::Brightness(-config.brightness_step),
            "KeyX" => KeyAction::Brightness(config.brightness_step),
            "KeyF" => KeyAction::ToggleGrayscale,
            _ => return Self::preset_for(code, config),
        };
        Some(action)
    }

    fn preset_for(code: &str, config: &ViewerConfig) -> Option<Self> {
        let digit: usize = code.strip_prefix(DIGIT_PREFIX)?.parse().ok()?;
        config.preset(digit).map(KeyAction::NamedFilter)
    }

    /// Run the action. Returns whether the state accepted it.
    pub fn apply<E: ImageElement>(self, state: &mut ImageTransformState<E>) -> bool {
        match self {
            KeyAction::Translate { dx, dy } => state.translate_by(dx, dy),
            KeyAction::Scale(delta) => state.scale_by(delta),
            KeyAction::Rotate(degrees) => state.rotate_by(degrees),
            KeyAction::Contrast(delta) => state.adjust_contrast(delta),
            KeyAction::Brightness(delta) => state.adjust_brightness(delta),
            KeyAction::ToggleGrayscale => state.toggle_grayscale(),
            KeyAction::Reset => state.reset(),
            KeyAction::NamedFilter(preset) => {
                state.apply_named_filter(preset.contrast, preset.brightness)
            }
        }
    }
}

/// Resolve and apply a key in one step.
///
/// Returns `None` when the key is unbound, otherwise whether the state
/// accepted the action.
pub fn dispatch<E: ImageElement>(
    state: &mut ImageTransformState<E>,
    code: &str,
    shift: bool,
    config: &ViewerConfig,
) -> Option<bool> {
    KeyAction::from_key(code, shift, config).map(|action| action.apply(state))
}

/// Every key code bound under `config`, letters first then digits.
pub fn bound_codes(config: &ViewerConfig) -> Vec<String> {
    let digits = config.presets.len().min(MAX_PRESETS);
    FIXED_CODES
        .iter()
        .map(|code| code.to_string())
        .chain((1..=digits).map(|digit| format!("{DIGIT_PREFIX}{digit}")))
        .collect()
}
