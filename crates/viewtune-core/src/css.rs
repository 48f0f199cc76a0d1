//! CSS descriptor formatting.
//!
//! The state never edits a descriptor in place: every change rebuilds the whole
//! string from the tracked values, so these helpers are pure functions of their
//! arguments.
//!
//! Numbers follow the formatting a browser uses when interpolating a number
//! into a string: shortest round-trip decimal, no trailing `.0`, and `-0`
//! printed as `0`.

/// Format a number for use inside a CSS value.
///
/// ```text
/// 100.0  -> "100"
/// 3.1    -> "3.1"
/// -90.0  -> "-90"
/// -0.0   -> "0"
/// ```
pub fn number(value: f64) -> String {
    if value == 0.0 {
        // Covers -0.0 as well
        return "0".to_string();
    }
    format!("{}", value)
}

/// Build the `transform` descriptor: `rotate(<rotation>deg) scale(<scale>)`.
pub fn transform(rotation: f64, scale: f64) -> String {
    format!("rotate({}deg) scale({})", number(rotation), number(scale))
}

/// Build the `translate` descriptor: `<x>% <y>%`.
pub fn translate(offset_x: f64, offset_y: f64) -> String {
    format!("{}% {}%", number(offset_x), number(offset_y))
}

/// Build the `filter` descriptor:
/// `contrast(<c>%) brightness(<b>%) grayscale(<g>%)`.
pub fn filter(contrast: f64, brightness: f64, grayscale: f64) -> String {
    format!(
        "contrast({}%) brightness({}%) grayscale({}%)",
        number(contrast),
        number(brightness),
        number(grayscale)
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_number_integral_has_no_fraction() {
        assert_eq!(number(100.0), "100");
        assert_eq!(number(-90.0), "-90");
        assert_eq!(number(1.0), "1");
    }

    #[test]
    fn test_number_fractional() {
        assert_eq!(number(3.5), "3.5");
        assert_eq!(number(0.3), "0.3");
    }

    #[test]
    fn test_number_negative_zero() {
        assert_eq!(number(-0.0), "0");
        assert_eq!(number(0.0), "0");
    }

    #[test]
    fn test_number_keeps_float_noise() {
        // Accumulated steps are shown exactly as stored
        let value = 0.1 + 0.2;
        assert_eq!(number(value), "0.30000000000000004");
    }

    #[test]
    fn test_transform() {
        assert_eq!(transform(0.0, 1.0), "rotate(0deg) scale(1)");
        assert_eq!(transform(-95.0, 2.5), "rotate(-95deg) scale(2.5)");
    }

    #[test]
    fn test_translate() {
        assert_eq!(translate(5.0, -10.0), "5% -10%");
        assert_eq!(translate(0.0, 0.0), "0% 0%");
    }

    #[test]
    fn test_filter() {
        assert_eq!(
            filter(100.0, 100.0, 0.0),
            "contrast(100%) brightness(100%) grayscale(0%)"
        );
        assert_eq!(
            filter(140.0, 110.0, 100.0),
            "contrast(140%) brightness(110%) grayscale(100%)"
        );
    }
}
