//! Document-level keyboard listener.
//!
//! Listens for `keydown` on the document and routes each event's `code` and
//! Shift state to an `ImageViewer`. Auto-repeated keys are handled like fresh
//! presses so holding a key keeps panning or zooming.

use gloo::events::EventListener;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Event, EventTarget, KeyboardEvent};

use crate::viewer::ImageViewer;

/// An installed `keydown` listener.
///
/// The listener is removed when this handle is dropped, freed from
/// JavaScript, or [`detach`](KeyListener::detach)ed.
#[wasm_bindgen]
pub struct KeyListener {
    viewer: ImageViewer,
    listener: Option<EventListener>,
}

#[wasm_bindgen]
impl KeyListener {
    /// Listen on the current document.
    ///
    /// # Errors
    /// Returns error if there is no window or document
    pub fn install(viewer: &ImageViewer) -> Result<KeyListener, JsValue> {
        let document = web_sys::window()
            .and_then(|window| window.document())
            .ok_or_else(|| JsValue::from_str("No document available"))?;
        Ok(Self::install_on(&document, viewer))
    }

    /// The viewer this listener drives.
    #[wasm_bindgen(getter)]
    pub fn viewer(&self) -> ImageViewer {
        self.viewer.clone()
    }

    #[wasm_bindgen(getter)]
    pub fn attached(&self) -> bool {
        self.listener.is_some()
    }

    /// Stop listening. The viewer keeps its state.
    pub fn detach(&mut self) {
        self.listener.take();
    }
}

impl KeyListener {
    pub(crate) fn install_on(target: &EventTarget, viewer: &ImageViewer) -> Self {
        let shared = viewer.shared();
        let listener = EventListener::new(target, "keydown", move |event: &Event| {
            let Some(event) = event.dyn_ref::<KeyboardEvent>() else {
                return;
            };
            match shared.try_borrow_mut() {
                Ok(mut viewer) => {
                    viewer.handle_key(&event.code(), event.shift_key());
                }
                Err(_) => {
                    gloo::console::warn!("viewtune: viewer busy, dropped key", event.code());
                }
            }
        });

        Self {
            viewer: viewer.clone(),
            listener: Some(listener),
        }
    }
}

/// Browser tests; run with `wasm-pack test --headless --chrome`.
#[cfg(all(test, target_arch = "wasm32"))]
mod wasm_tests {
    use super::*;
    use web_sys::{HtmlImageElement, KeyboardEventInit};
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    fn document() -> web_sys::Document {
        web_sys::window().unwrap().document().unwrap()
    }

    fn create_viewer() -> ImageViewer {
        let img = document()
            .create_element("img")
            .unwrap()
            .dyn_into::<HtmlImageElement>()
            .unwrap();
        img.set_src("https://example.test/scan.jpg");
        ImageViewer::new(img, JsValue::NULL).unwrap()
    }

    // Dispatch on a detached element so tests don't see each other's keys.
    fn press(target: &EventTarget, code: &str, shift: bool) {
        let init = KeyboardEventInit::new();
        init.set_code(code);
        init.set_shift_key(shift);
        let event = KeyboardEvent::new_with_keyboard_event_init_dict("keydown", &init).unwrap();
        target.dispatch_event(&event).unwrap();
    }

    fn create_target() -> EventTarget {
        document().create_element("div").unwrap().into()
    }

    #[wasm_bindgen_test]
    fn test_keydown_drives_viewer() {
        let viewer = create_viewer();
        let target = create_target();
        let listener = KeyListener::install_on(&target, &viewer);
        assert!(listener.attached());

        press(&target, "KeyE", false);
        press(&target, "KeyE", true);
        press(&target, "KeyZ", false);

        assert_eq!(viewer.rotation(), 95.0);
        assert_eq!(viewer.contrast(), 110.0);
    }

    #[wasm_bindgen_test]
    fn test_unbound_key_ignored() {
        let viewer = create_viewer();
        let target = create_target();
        let _listener = KeyListener::install_on(&target, &viewer);

        press(&target, "Escape", false);
        assert_eq!(viewer.rotation(), 0.0);
        assert_eq!(viewer.scale(), 1.0);
    }

    #[wasm_bindgen_test]
    fn test_detach_stops_listening() {
        let viewer = create_viewer();
        let target = create_target();
        let mut listener = KeyListener::install_on(&target, &viewer);

        listener.detach();
        assert!(!listener.attached());
        press(&target, "KeyA", false);
        assert_eq!(viewer.offset_x(), 0.0);
    }

    #[wasm_bindgen_test]
    fn test_drop_stops_listening() {
        let viewer = create_viewer();
        let target = create_target();
        drop(KeyListener::install_on(&target, &viewer));

        press(&target, "KeyA", false);
        assert_eq!(viewer.offset_x(), 0.0);
    }
}
