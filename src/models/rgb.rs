//! RGB color handling with hex and CSS `rgb(...)` parsing.

// Allow small types passed by reference for API consistency
#![allow(clippy::trivially_copy_pass_by_ref)]

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fmt;

/// RGB color value used for stimulus fills.
///
/// Represents a color using red, green, and blue channels (0-255 each).
/// Supports parsing from hex strings (#RRGGBB) and CSS functional notation
/// (`rgb(254, 0, 254)`), which is how stimulus palettes are usually written.
///
/// Serialized as its CSS string; deserializes from either CSS or hex.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct RgbColor {
    /// Red channel (0-255)
    pub r: u8,
    /// Green channel (0-255)
    pub g: u8,
    /// Blue channel (0-255)
    pub b: u8,
}

impl RgbColor {
    /// Creates a new `RgbColor` from individual channel values.
    #[must_use]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parses an `RgbColor` from a hex string.
    ///
    /// Supports formats: "#RRGGBB", "RRGGBB", "#rrggbb", "rrggbb"
    ///
    /// # Examples
    ///
    /// ```
    /// use acvs_display::models::RgbColor;
    ///
    /// let color = RgbColor::from_hex("#FE00FE").unwrap();
    /// assert_eq!(color, RgbColor::new(254, 0, 254));
    /// ```
    ///
    /// # Errors
    ///
    /// Returns an error if the string is not a valid hex color format.
    pub fn from_hex(hex: &str) -> Result<Self> {
        let hex = hex.trim();
        let hex = hex.strip_prefix('#').unwrap_or(hex);

        if hex.len() != 6 || !hex.is_ascii() {
            anyhow::bail!("Invalid hex color format '{hex}'. Expected 6 hex digits (RRGGBB)");
        }

        let r = u8::from_str_radix(&hex[0..2], 16)
            .context(format!("Invalid red channel in hex color '{hex}'"))?;
        let g = u8::from_str_radix(&hex[2..4], 16)
            .context(format!("Invalid green channel in hex color '{hex}'"))?;
        let b = u8::from_str_radix(&hex[4..6], 16)
            .context(format!("Invalid blue channel in hex color '{hex}'"))?;

        Ok(Self::new(r, g, b))
    }

    /// Parses an `RgbColor` from CSS functional notation.
    ///
    /// Accepts `rgb(R, G, B)` with decimal channels and arbitrary whitespace.
    ///
    /// # Examples
    ///
    /// ```
    /// use acvs_display::models::RgbColor;
    ///
    /// let gray = RgbColor::from_css("rgb(105, 105, 105)").unwrap();
    /// assert_eq!(gray, RgbColor::new(105, 105, 105));
    /// ```
    ///
    /// # Errors
    ///
    /// Returns an error if the string is not `rgb(R, G, B)` with channels 0-255.
    pub fn from_css(css: &str) -> Result<Self> {
        let css = css.trim();
        let inner = css
            .strip_prefix("rgb(")
            .and_then(|rest| rest.strip_suffix(')'))
            .context(format!("Invalid CSS color '{css}'. Expected rgb(R, G, B)"))?;

        let channels = inner
            .split(',')
            .map(|part| {
                part.trim()
                    .parse::<u8>()
                    .context(format!("Invalid channel '{}' in CSS color '{css}'", part.trim()))
            })
            .collect::<Result<Vec<u8>>>()?;

        match channels.as_slice() {
            [r, g, b] => Ok(Self::new(*r, *g, *b)),
            _ => anyhow::bail!(
                "Invalid CSS color '{css}'. Expected 3 channels, found {}",
                channels.len()
            ),
        }
    }

    /// Converts the color to a hex string in the format "#RRGGBB" (uppercase).
    #[must_use]
    pub fn to_hex(&self) -> String {
        format!("#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }

    /// Converts the color to CSS functional notation, e.g. `rgb(0, 150, 150)`.
    #[must_use]
    pub fn to_css(&self) -> String {
        format!("rgb({}, {}, {})", self.r, self.g, self.b)
    }

    /// Parses either CSS `rgb(...)` notation or a hex string.
    ///
    /// # Errors
    ///
    /// Returns an error if the string is in neither format.
    pub fn parse(text: &str) -> Result<Self> {
        if text.trim_start().starts_with("rgb(") {
            Self::from_css(text)
        } else {
            Self::from_hex(text)
        }
    }
}

impl TryFrom<String> for RgbColor {
    type Error = anyhow::Error;

    fn try_from(value: String) -> Result<Self> {
        Self::parse(&value)
    }
}

impl From<RgbColor> for String {
    fn from(color: RgbColor) -> Self {
        color.to_css()
    }
}

impl fmt::Display for RgbColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_css())
    }
}

impl Default for RgbColor {
    /// Default color is white (#FFFFFF).
    fn default() -> Self {
        Self::new(255, 255, 255)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_hex_valid() {
        let color = RgbColor::from_hex("#FF0000").unwrap();
        assert_eq!(color, RgbColor::new(255, 0, 0));

        let color = RgbColor::from_hex("009696").unwrap();
        assert_eq!(color, RgbColor::new(0, 150, 150));

        let color = RgbColor::from_hex("  #fe00fe  ").unwrap();
        assert_eq!(color, RgbColor::new(254, 0, 254));
    }

    #[test]
    fn test_from_hex_invalid() {
        assert!(RgbColor::from_hex("#FFF").is_err());
        assert!(RgbColor::from_hex("#FFFFFFF").is_err());
        assert!(RgbColor::from_hex("GGGGGG").is_err());
        assert!(RgbColor::from_hex("").is_err());
        assert!(RgbColor::from_hex("#").is_err());
    }

    #[test]
    fn test_from_css_valid() {
        assert_eq!(
            RgbColor::from_css("rgb(254, 0, 254)").unwrap(),
            RgbColor::new(254, 0, 254)
        );
        assert_eq!(
            RgbColor::from_css("rgb(0,150,150)").unwrap(),
            RgbColor::new(0, 150, 150)
        );
    }

    #[test]
    fn test_from_css_invalid() {
        assert!(RgbColor::from_css("rgba(1, 2, 3, 4)").is_err());
        assert!(RgbColor::from_css("rgb(1, 2)").is_err());
        assert!(RgbColor::from_css("rgb(256, 0, 0)").is_err());
        assert!(RgbColor::from_css("magenta").is_err());
    }

    #[test]
    fn test_to_css_matches_display() {
        let cyan = RgbColor::new(0, 150, 150);
        assert_eq!(cyan.to_css(), "rgb(0, 150, 150)");
        assert_eq!(cyan.to_string(), cyan.to_css());
        assert_eq!(RgbColor::from_css(&cyan.to_css()).unwrap(), cyan);
    }

    #[test]
    fn test_to_hex() {
        assert_eq!(RgbColor::new(254, 0, 254).to_hex(), "#FE00FE");
        assert_eq!(RgbColor::new(0, 0, 0).to_hex(), "#000000");
    }

    #[test]
    fn test_parse_accepts_css_and_hex() {
        assert_eq!(RgbColor::parse("rgb(0, 150, 150)").unwrap(), RgbColor::new(0, 150, 150));
        assert_eq!(RgbColor::parse("#696969").unwrap(), RgbColor::new(105, 105, 105));
        assert!(RgbColor::parse("gray").is_err());
    }

    #[test]
    fn test_serde_uses_css_string() {
        let json = serde_json::to_value(RgbColor::new(254, 0, 254)).unwrap();
        assert_eq!(json, serde_json::json!("rgb(254, 0, 254)"));

        let parsed: RgbColor = serde_json::from_value(serde_json::json!("#FE00FE")).unwrap();
        assert_eq!(parsed, RgbColor::new(254, 0, 254));

        assert!(serde_json::from_value::<RgbColor>(serde_json::json!("rgb(300, 0, 0)")).is_err());
    }

    #[test]
    fn test_default() {
        assert_eq!(RgbColor::default(), RgbColor::new(255, 255, 255));
    }
}
