//! Transform and filter state for a single displayed image.
//!
//! [`ImageTransformState`] tracks the geometric transform (scale, rotation,
//! offset) and three filter parameters (contrast, brightness, grayscale), and
//! republishes the derived CSS descriptors to its bound [`ImageElement`] after
//! every accepted change.
//!
//! # Ranges
//!
//! | Parameter  | Range         | Default |
//! |------------|---------------|---------|
//! | scale      | 0.3 to 8.0    | 1       |
//! | rotation   | unbounded     | 0       |
//! | offset x/y | unbounded     | 0       |
//! | contrast   | 0 to 500      | 100     |
//! | brightness | 0 to 500      | 100     |
//! | grayscale  | 0 or 100      | 0       |
//!
//! An update whose result would leave a bounded range is dropped and the value
//! stays where it was. Nothing is clamped.

use std::ops::RangeInclusive;

use serde::{Deserialize, Serialize};

use crate::css;
use crate::element::ImageElement;

/// Accepted scale factors.
pub const SCALE_RANGE: RangeInclusive<f64> = 0.3..=8.0;

/// Accepted contrast and brightness percentages.
pub const FILTER_RANGE: RangeInclusive<f64> = 0.0..=500.0;

/// Neutral contrast and brightness.
pub const NEUTRAL_PERCENT: f64 = 100.0;

/// Grayscale percentage when the toggle is on.
pub const GRAYSCALE_ON: f64 = 100.0;

/// Grayscale percentage when the toggle is off.
pub const GRAYSCALE_OFF: f64 = 0.0;

/// Point-in-time copy of the tracked values and the descriptors derived from
/// them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransformSnapshot {
    pub scale: f64,
    pub rotation: f64,
    pub offset_x: f64,
    pub offset_y: f64,
    pub contrast: f64,
    pub brightness: f64,
    pub grayscale: f64,
    /// `rotate(..deg) scale(..)`
    pub transform: String,
    /// `..% ..%`
    pub translate: String,
    /// Last filter computed from the tracked values. A named filter is not
    /// reflected here.
    pub filter: String,
}

/// Transform and filter state bound to one image element.
#[derive(Debug)]
pub struct ImageTransformState<E: ImageElement> {
    element: E,
    original_source: String,
    scale: f64,
    rotation: f64,
    offset_x: f64,
    offset_y: f64,
    contrast: f64,
    brightness: f64,
    grayscale: f64,
    filter: String,
}

impl<E: ImageElement> ImageTransformState<E> {
    /// Bind to `element`, capturing its current source for later resets.
    ///
    /// The neutral filter is published immediately. The transform and
    /// translate directives are left alone until the first geometric change.
    pub fn new(element: E) -> Self {
        let original_source = element.source();
        let mut state = Self {
            element,
            original_source,
            scale: 1.0,
            rotation: 0.0,
            offset_x: 0.0,
            offset_y: 0.0,
            contrast: NEUTRAL_PERCENT,
            brightness: NEUTRAL_PERCENT,
            grayscale: GRAYSCALE_OFF,
            filter: String::new(),
        };
        state.publish_filter();
        state
    }

    pub fn scale(&self) -> f64 {
        self.scale
    }

    pub fn rotation(&self) -> f64 {
        self.rotation
    }

    pub fn offset_x(&self) -> f64 {
        self.offset_x
    }

    pub fn offset_y(&self) -> f64 {
        self.offset_y
    }

    pub fn contrast(&self) -> f64 {
        self.contrast
    }

    pub fn brightness(&self) -> f64 {
        self.brightness
    }

    pub fn grayscale(&self) -> f64 {
        self.grayscale
    }

    /// Source captured at construction.
    pub fn original_source(&self) -> &str {
        &self.original_source
    }

    /// Current transform descriptor.
    pub fn transform(&self) -> String {
        css::transform(self.rotation, self.scale)
    }

    /// Current translate descriptor.
    pub fn translate(&self) -> String {
        css::translate(self.offset_x, self.offset_y)
    }

    /// Filter descriptor computed from the tracked values.
    pub fn filter(&self) -> &str {
        &self.filter
    }

    pub fn element(&self) -> &E {
        &self.element
    }

    pub fn element_mut(&mut self) -> &mut E {
        &mut self.element
    }

    pub fn into_element(self) -> E {
        self.element
    }

    pub fn snapshot(&self) -> TransformSnapshot {
        TransformSnapshot {
            scale: self.scale,
            rotation: self.rotation,
            offset_x: self.offset_x,
            offset_y: self.offset_y,
            contrast: self.contrast,
            brightness: self.brightness,
            grayscale: self.grayscale,
            transform: self.transform(),
            translate: self.translate(),
            filter: self.filter.clone(),
        }
    }

    /// Add `delta` to the scale if the result stays within [`SCALE_RANGE`].
    ///
    /// Returns `false` and leaves everything untouched otherwise.
    pub fn scale_by(&mut self, delta: f64) -> bool {
        let proposed = self.scale + delta;
        if !SCALE_RANGE.contains(&proposed) {
            return false;
        }
        self.scale = proposed;
        self.publish_transform();
        true
    }

    /// Add `degrees` to the rotation. Rotation accumulates without wrapping.
    pub fn rotate_by(&mut self, degrees: f64) -> bool {
        self.rotation += degrees;
        self.publish_transform();
        true
    }

    /// Shift the image by `dx`/`dy` percent of its own size.
    pub fn translate_by(&mut self, dx: f64, dy: f64) -> bool {
        self.offset_x += dx;
        self.offset_y += dy;
        let translate = self.translate();
        self.element.set_translate(&translate);
        true
    }

    /// Add `delta` to the contrast if the result stays within
    /// [`FILTER_RANGE`].
    pub fn adjust_contrast(&mut self, delta: f64) -> bool {
        match Self::propose_filter_value(self.contrast, delta) {
            Some(value) => {
                self.contrast = value;
                self.publish_filter();
                true
            }
            None => false,
        }
    }

    /// Add `delta` to the brightness if the result stays within
    /// [`FILTER_RANGE`].
    pub fn adjust_brightness(&mut self, delta: f64) -> bool {
        match Self::propose_filter_value(self.brightness, delta) {
            Some(value) => {
                self.brightness = value;
                self.publish_filter();
                true
            }
            None => false,
        }
    }

    /// Flip grayscale between 0% and 100%.
    pub fn toggle_grayscale(&mut self) -> bool {
        self.grayscale = if self.grayscale == GRAYSCALE_OFF {
            GRAYSCALE_ON
        } else {
            GRAYSCALE_OFF
        };
        self.publish_filter();
        true
    }

    /// Undo filter edits and restore the original source.
    ///
    /// Scale, rotation and offset are kept.
    pub fn reset(&mut self) -> bool {
        self.contrast = NEUTRAL_PERCENT;
        self.brightness = NEUTRAL_PERCENT;
        self.grayscale = GRAYSCALE_OFF;
        self.publish_filter();
        true
    }

    /// Reset, then show a fully grayscale filter with the given contrast and
    /// brightness.
    ///
    /// The named filter is written straight to the element. The tracked
    /// contrast and brightness stay at their reset values, so a following
    /// [`adjust_contrast`](Self::adjust_contrast) steps from 100, not from
    /// `contrast`.
    pub fn apply_named_filter(&mut self, contrast: f64, brightness: f64) -> bool {
        self.reset();
        let named = css::filter(contrast, brightness, GRAYSCALE_ON);
        self.element.set_filter(&named);
        true
    }

    fn propose_filter_value(current: f64, delta: f64) -> Option<f64> {
        let proposed = current + delta;
        FILTER_RANGE.contains(&proposed).then_some(proposed)
    }

    fn publish_transform(&mut self) {
        let transform = self.transform();
        self.element.set_transform(&transform);
    }

    // Every filter publish also puts the original source back.
    fn publish_filter(&mut self) {
        self.element.set_source(&self.original_source);
        self.filter = css::filter(self.contrast, self.brightness, self.grayscale);
        self.element.set_filter(&self.filter);
    }
}
