//! `<img>` element binding.
//!
//! Implements the core `ImageElement` trait on top of `HtmlImageElement`,
//! writing the three style directives through the element's inline style.

use viewtune_core::ImageElement;
use web_sys::HtmlImageElement;

/// An `<img>` element driven by the transform state.
#[derive(Debug, Clone)]
pub struct DomImage {
    element: HtmlImageElement,
}

impl DomImage {
    pub fn new(element: HtmlImageElement) -> Self {
        Self { element }
    }

    /// The wrapped element.
    pub fn element(&self) -> &HtmlImageElement {
        &self.element
    }

    fn set_style(&self, property: &str, value: &str) {
        if let Err(err) = self.element.style().set_property(property, value) {
            gloo::console::warn!("viewtune: failed to set style", property, value, err);
        }
    }
}

impl ImageElement for DomImage {
    fn source(&self) -> String {
        self.element.src()
    }

    fn set_source(&mut self, source: &str) {
        self.element.set_src(source);
    }

    fn set_transform(&mut self, value: &str) {
        self.set_style("transform", value);
    }

    fn set_translate(&mut self, value: &str) {
        self.set_style("translate", value);
    }

    fn set_filter(&mut self, value: &str) {
        self.set_style("filter", value);
    }
}
