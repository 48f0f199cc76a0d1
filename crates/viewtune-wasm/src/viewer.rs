//! Image viewer WASM bindings.
//!
//! `ImageViewer` owns the transform state for one `<img>` element together
//! with the key configuration. The handle is cheap to clone: clones share the
//! same state, which is how the keyboard listener and the JavaScript caller
//! see the same image.

use std::cell::RefCell;
use std::rc::Rc;

use viewtune_core::{bound_codes, dispatch, ImageTransformState, ViewerConfig};
use wasm_bindgen::prelude::*;
use web_sys::HtmlImageElement;

use crate::dom::DomImage;

pub(crate) struct Viewer {
    state: ImageTransformState<DomImage>,
    config: ViewerConfig,
}

impl Viewer {
    /// Returns `None` for unbound keys.
    pub(crate) fn handle_key(&mut self, code: &str, shift: bool) -> Option<bool> {
        dispatch(&mut self.state, code, shift, &self.config)
    }
}

/// Parse a config object passed from JavaScript.
///
/// `undefined` and `null` give the stock configuration. Missing fields take
/// their defaults.
pub(crate) fn parse_config(value: JsValue) -> Result<ViewerConfig, JsValue> {
    if value.is_undefined() || value.is_null() {
        return Ok(ViewerConfig::default());
    }
    let config: ViewerConfig = serde_wasm_bindgen::from_value(value)
        .map_err(|e| JsValue::from_str(&format!("Invalid viewer config: {}", e)))?;
    config
        .validate()
        .map_err(|e| JsValue::from_str(&e.to_string()))?;
    Ok(config)
}

/// Keyboard-driven transform state for an `<img>` element.
///
/// # Example (TypeScript)
/// ```typescript
/// const img = document.querySelector('img') as HTMLImageElement;
/// const viewer = new ImageViewer(img, { scale_step: 0.5 });
///
/// viewer.rotate_by(90);
/// viewer.handle_key('KeyW', true); // zoom in
/// console.log(viewer.snapshot().transform);
/// ```
#[wasm_bindgen]
#[derive(Clone)]
pub struct ImageViewer {
    inner: Rc<RefCell<Viewer>>,
}

#[wasm_bindgen]
impl ImageViewer {
    /// Bind to `image`. `config` may be omitted for the stock bindings.
    ///
    /// # Errors
    /// Returns error if `config` cannot be deserialized or fails validation
    #[wasm_bindgen(constructor)]
    pub fn new(image: HtmlImageElement, config: JsValue) -> Result<ImageViewer, JsValue> {
        let config = parse_config(config)?;
        Ok(Self::from_parts(image, config))
    }

    /// Zoom by `delta`; ignored outside 0.3..=8.
    pub fn scale_by(&self, delta: f64) -> bool {
        self.inner.borrow_mut().state.scale_by(delta)
    }

    /// Rotate by `degrees`.
    pub fn rotate_by(&self, degrees: f64) -> bool {
        self.inner.borrow_mut().state.rotate_by(degrees)
    }

    /// Pan by `dx`/`dy` percent.
    pub fn translate_by(&self, dx: f64, dy: f64) -> bool {
        self.inner.borrow_mut().state.translate_by(dx, dy)
    }

    /// Change contrast by `delta` percent; ignored outside 0..=500.
    pub fn adjust_contrast(&self, delta: f64) -> bool {
        self.inner.borrow_mut().state.adjust_contrast(delta)
    }

    /// Change brightness by `delta` percent; ignored outside 0..=500.
    pub fn adjust_brightness(&self, delta: f64) -> bool {
        self.inner.borrow_mut().state.adjust_brightness(delta)
    }

    pub fn toggle_grayscale(&self) -> bool {
        self.inner.borrow_mut().state.toggle_grayscale()
    }

    /// Restore neutral filters and the original source.
    pub fn reset(&self) -> bool {
        self.inner.borrow_mut().state.reset()
    }

    /// Show a grayscale filter with the given contrast and brightness.
    pub fn apply_named_filter(&self, contrast: f64, brightness: f64) -> bool {
        self.inner
            .borrow_mut()
            .state
            .apply_named_filter(contrast, brightness)
    }

    /// Run the action bound to a `KeyboardEvent.code`.
    ///
    /// Returns `false` if the key is unbound.
    pub fn handle_key(&self, code: &str, shift: bool) -> bool {
        self.inner.borrow_mut().handle_key(code, shift).is_some()
    }

    #[wasm_bindgen(getter)]
    pub fn scale(&self) -> f64 {
        self.inner.borrow().state.scale()
    }

    #[wasm_bindgen(getter)]
    pub fn rotation(&self) -> f64 {
        self.inner.borrow().state.rotation()
    }

    #[wasm_bindgen(getter)]
    pub fn offset_x(&self) -> f64 {
        self.inner.borrow().state.offset_x()
    }

    #[wasm_bindgen(getter)]
    pub fn offset_y(&self) -> f64 {
        self.inner.borrow().state.offset_y()
    }

    #[wasm_bindgen(getter)]
    pub fn contrast(&self) -> f64 {
        self.inner.borrow().state.contrast()
    }

    #[wasm_bindgen(getter)]
    pub fn brightness(&self) -> f64 {
        self.inner.borrow().state.brightness()
    }

    #[wasm_bindgen(getter)]
    pub fn grayscale(&self) -> f64 {
        self.inner.borrow().state.grayscale()
    }

    /// Tracked values plus derived descriptors as a plain object.
    pub fn snapshot(&self) -> Result<JsValue, JsValue> {
        serde_wasm_bindgen::to_value(&self.inner.borrow().state.snapshot())
            .map_err(|e| JsValue::from_str(&e.to_string()))
    }

    /// Active configuration as a plain object.
    pub fn config(&self) -> Result<JsValue, JsValue> {
        serde_wasm_bindgen::to_value(&self.inner.borrow().config)
            .map_err(|e| JsValue::from_str(&e.to_string()))
    }

    /// Key codes this viewer responds to.
    pub fn bound_keys(&self) -> js_sys::Array {
        bound_codes(&self.inner.borrow().config)
            .into_iter()
            .map(JsValue::from)
            .collect()
    }
}

impl ImageViewer {
    pub(crate) fn from_parts(image: HtmlImageElement, config: ViewerConfig) -> Self {
        let state = ImageTransformState::new(DomImage::new(image));
        Self {
            inner: Rc::new(RefCell::new(Viewer { state, config })),
        }
    }

    pub(crate) fn shared(&self) -> Rc<RefCell<Viewer>> {
        Rc::clone(&self.inner)
    }
}

/// Browser tests; run with `wasm-pack test --headless --chrome`.
#[cfg(all(test, target_arch = "wasm32"))]
mod wasm_tests {
    use super::*;
    use serde::Deserialize;
    use wasm_bindgen::JsCast;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    const SRC: &str = "https://example.test/scan.jpg";

    #[derive(Deserialize)]
    struct Snapshot {
        contrast: f64,
        brightness: f64,
        transform: String,
        filter: String,
    }

    fn create_image() -> HtmlImageElement {
        let document = web_sys::window().unwrap().document().unwrap();
        let img = document
            .create_element("img")
            .unwrap()
            .dyn_into::<HtmlImageElement>()
            .unwrap();
        img.set_src(SRC);
        img
    }

    fn snapshot(viewer: &ImageViewer) -> Snapshot {
        serde_wasm_bindgen::from_value(viewer.snapshot().unwrap()).unwrap()
    }

    #[wasm_bindgen_test]
    fn test_default_config() {
        let viewer = ImageViewer::new(create_image(), JsValue::UNDEFINED).unwrap();
        assert_eq!(viewer.scale(), 1.0);
        assert_eq!(viewer.contrast(), 100.0);
        assert_eq!(viewer.bound_keys().length(), 15);
    }

    #[wasm_bindgen_test]
    fn test_invalid_config_rejected() {
        let config = js_sys::JSON::parse(r#"{"scale_step": -1}"#).unwrap();
        assert!(ImageViewer::new(create_image(), config).is_err());
    }

    #[wasm_bindgen_test]
    fn test_partial_config() {
        let config = js_sys::JSON::parse(r#"{"rotate_step": 45}"#).unwrap();
        let viewer = ImageViewer::new(create_image(), config).unwrap();
        assert!(viewer.handle_key("KeyE", false));
        assert_eq!(viewer.rotation(), 45.0);
    }

    #[wasm_bindgen_test]
    fn test_handle_key() {
        let viewer = ImageViewer::new(create_image(), JsValue::NULL).unwrap();
        assert!(viewer.handle_key("KeyW", true));
        assert!(viewer.handle_key("KeyA", false));
        assert!(!viewer.handle_key("KeyB", false));

        assert!((viewer.scale() - 1.3).abs() < 1e-9);
        assert_eq!(viewer.offset_x(), 5.0);
        assert_eq!(snapshot(&viewer).transform, "rotate(0deg) scale(1.3)");
    }

    #[wasm_bindgen_test]
    fn test_named_filter_keeps_tracked_values() {
        let viewer = ImageViewer::new(create_image(), JsValue::NULL).unwrap();
        viewer.adjust_contrast(50.0);
        viewer.apply_named_filter(140.0, 110.0);

        let snap = snapshot(&viewer);
        assert_eq!(snap.contrast, 100.0);
        assert_eq!(snap.brightness, 100.0);
        assert_eq!(snap.filter, "contrast(100%) brightness(100%) grayscale(0%)");
    }

    #[wasm_bindgen_test]
    fn test_reset_restores_source() {
        let img = create_image();
        let viewer = ImageViewer::new(img.clone(), JsValue::NULL).unwrap();
        img.set_src("https://example.test/other.jpg");

        viewer.reset();
        assert_eq!(img.src(), SRC);
    }

    #[wasm_bindgen_test]
    fn test_clones_share_state() {
        let viewer = ImageViewer::new(create_image(), JsValue::NULL).unwrap();
        let other = viewer.clone();
        other.rotate_by(90.0);
        assert_eq!(viewer.rotation(), 90.0);
    }
}
