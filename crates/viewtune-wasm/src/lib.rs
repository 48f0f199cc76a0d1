//! viewtune WASM - WebAssembly bindings for viewtune
//!
//! This crate binds the viewtune-core transform state to a real `<img>`
//! element and the page's keyboard.
//!
//! # Module Structure
//!
//! - `dom` - `ImageElement` implementation for `HtmlImageElement`
//! - `viewer` - `ImageViewer`, the JavaScript handle to the transform state
//! - `keyboard` - document `keydown` listener
//!
//! # Usage
//!
//! ```typescript
//! import init, { boot } from '@viewtune/wasm';
//!
//! await init();
//!
//! // Attach to the first <img> on matching pages, stock bindings
//! const listener = boot(undefined);
//! if (listener) {
//!   console.log(listener.viewer.snapshot());
//! }
//! ```

use viewtune_core::ViewerConfig;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::HtmlImageElement;

mod dom;
mod keyboard;
mod viewer;

pub use dom::DomImage;
pub use keyboard::KeyListener;
pub use viewer::ImageViewer;

/// Initialize the WASM module (called automatically on load)
#[wasm_bindgen(start)]
pub fn init() {}

/// Get the version of the WASM module
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

/// Attach to the page if it matches the configured activation prefix.
///
/// Binds the first `<img>` in the document and installs the keyboard
/// listener. Returns `undefined` when the page does not match or has no
/// image.
///
/// # Errors
/// Returns error if `config` is invalid or the window/document is unavailable
#[wasm_bindgen]
pub fn boot(config: JsValue) -> Result<Option<KeyListener>, JsValue> {
    let config = viewer::parse_config(config)?;
    let window = web_sys::window().ok_or_else(|| JsValue::from_str("No window available"))?;
    let href = window.location().href()?;

    if !config.should_activate(&href) {
        gloo::console::debug!("viewtune: inactive on", href);
        return Ok(None);
    }

    let document = window
        .document()
        .ok_or_else(|| JsValue::from_str("No document available"))?;
    let Some(image) = document.query_selector("img")? else {
        gloo::console::log!("viewtune: no image on page");
        return Ok(None);
    };
    let image = image
        .dyn_into::<HtmlImageElement>()
        .map_err(|_| JsValue::from_str("First <img> is not an HTMLImageElement"))?;

    Ok(Some(attach(&document, image, config)))
}

fn attach(
    document: &web_sys::Document,
    image: HtmlImageElement,
    config: ViewerConfig,
) -> KeyListener {
    gloo::console::log!("viewtune: attached to", image.src());
    let viewer = ImageViewer::from_parts(image, config);
    KeyListener::install_on(document, &viewer)
}
