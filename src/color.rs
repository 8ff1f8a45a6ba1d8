//! Color parsing for fill and background colors.
//!
//! Accepts CSS/X11 color names (`"black"`, `"navy"`, `"yellow"`, ...) and hex values with or
//! without a leading `#`, in either the short (`#fa0`) or long (`#ffaa00`) form. No contrast
//! check is made between the two colors of a code.

use std::str::FromStr;

use image::Rgb;
use palette::Srgb;

use crate::error::{QrError, Result};

pub fn parse_color(spec: &str) -> Result<Rgb<u8>> {
    let spec = spec.trim();
    let lower = spec.to_ascii_lowercase();

    let srgb = palette::named::from_str(&lower)
        .or_else(|| Srgb::<u8>::from_str(&lower).ok())
        .ok_or_else(|| QrError::InvalidColor(spec.to_string()))?;

    let (r, g, b) = srgb.into_components();
    Ok(Rgb([r, g, b]))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_named_colors() {
        assert_eq!(parse_color("black").unwrap(), Rgb([0, 0, 0]));
        assert_eq!(parse_color("white").unwrap(), Rgb([255, 255, 255]));
        assert_eq!(parse_color("blue").unwrap(), Rgb([0, 0, 255]));
        assert_eq!(parse_color("Yellow").unwrap(), Rgb([255, 255, 0]));
    }

    #[test]
    fn test_hex_colors() {
        assert_eq!(parse_color("#ffa500").unwrap(), Rgb([255, 165, 0]));
        assert_eq!(parse_color("ffa500").unwrap(), Rgb([255, 165, 0]));
        assert_eq!(parse_color("#0F0").unwrap(), Rgb([0, 255, 0]));
    }

    #[test]
    fn test_unknown_color() {
        assert!(matches!(
            parse_color("not-a-color"),
            Err(QrError::InvalidColor(_))
        ));
        assert!(parse_color("#12345").is_err());
    }
}
