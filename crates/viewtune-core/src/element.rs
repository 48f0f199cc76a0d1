//! The image element the transform state publishes to.
//!
//! In the browser this is an `<img>` element (see `viewtune-wasm`); on the host
//! it is [`MemoryImage`], which simply records what was written.

/// A rendered image whose source and style the state can drive.
///
/// Writes are fire-and-forget: an implementation that can fail (a DOM style
/// declaration, for instance) reports the failure itself.
pub trait ImageElement {
    /// Current image source reference (URL).
    fn source(&self) -> String;

    /// Replace the image source reference.
    fn set_source(&mut self, source: &str);

    /// Write the `transform` style directive.
    fn set_transform(&mut self, value: &str);

    /// Write the `translate` style directive.
    fn set_translate(&mut self, value: &str);

    /// Write the `filter` style directive.
    fn set_filter(&mut self, value: &str);
}

impl<T: ImageElement + ?Sized> ImageElement for &mut T {
    fn source(&self) -> String {
        (**self).source()
    }

    fn set_source(&mut self, source: &str) {
        (**self).set_source(source)
    }

    fn set_transform(&mut self, value: &str) {
        (**self).set_transform(value)
    }

    fn set_translate(&mut self, value: &str) {
        (**self).set_translate(value)
    }

    fn set_filter(&mut self, value: &str) {
        (**self).set_filter(value)
    }
}

/// In-memory image element.
///
/// Holds the last value written for each directive (`None` until first
/// written) and counts source writes.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MemoryImage {
    pub source: String,
    pub transform: Option<String>,
    pub translate: Option<String>,
    pub filter: Option<String>,
    pub source_writes: usize,
}

impl MemoryImage {
    /// Create an element showing `source`, with no style applied yet.
    pub fn new(source: impl Into<String>) -> Self {
        Self {
            source: source.into(),
            ..Self::default()
        }
    }
}

impl ImageElement for MemoryImage {
    fn source(&self) -> String {
        self.source.clone()
    }

    fn set_source(&mut self, source: &str) {
        self.source = source.to_string();
        self.source_writes += 1;
    }

    fn set_transform(&mut self, value: &str) {
        self.transform = Some(value.to_string());
    }

    fn set_translate(&mut self, value: &str) {
        self.translate = Some(value.to_string());
    }

    fn set_filter(&mut self, value: &str) {
        self.filter = Some(value.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_image_starts_unstyled() {
        let img = MemoryImage::new("a.png");
        assert_eq!(img.source(), "a.png");
        assert!(img.transform.is_none());
        assert!(img.translate.is_none());
        assert!(img.filter.is_none());
        assert_eq!(img.source_writes, 0);
    }

    #[test]
    fn test_memory_image_records_writes() {
        let mut img = MemoryImage::new("a.png");
        img.set_source("b.png");
        img.set_filter("grayscale(100%)");
        img.set_transform("rotate(90deg) scale(1)");
        img.set_translate("5% 0%");

        assert_eq!(img.source, "b.png");
        assert_eq!(img.source_writes, 1);
        assert_eq!(img.filter.as_deref(), Some("grayscale(100%)"));
        assert_eq!(img.transform.as_deref(), Some("rotate(90deg) scale(1)"));
        assert_eq!(img.translate.as_deref(), Some("5% 0%"));
    }

    #[test]
    fn test_mut_ref_forwards() {
        fn write_filter<E: ImageElement>(mut element: E) -> String {
            element.set_filter("contrast(50%)");
            element.source()
        }

        let mut img = MemoryImage::new("a.png");
        assert_eq!(write_filter(&mut img), "a.png");
        assert_eq!(img.filter.as_deref(), Some("contrast(50%)"));
    }
}
