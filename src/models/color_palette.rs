//! The three-color stimulus palette.
//!
//! Every square draws its fill from a palette of exactly three named colors.
//! The color encoding string indexes into this palette with the digits 0, 1 and 2.

use serde::{Deserialize, Serialize};

use super::RgbColor;

/// Number of entries in a stimulus palette.
pub const PALETTE_SIZE: usize = 3;

/// A single named palette entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaletteColor {
    /// Name of the color (e.g., "magenta"). Also used as the CSS class of rendered squares.
    pub name: String,
    /// Fill color.
    pub color: RgbColor,
}

impl PaletteColor {
    /// Creates a new named palette color.
    pub fn new(name: impl Into<String>, color: RgbColor) -> Self {
        Self {
            name: name.into(),
            color,
        }
    }
}

/// A palette of exactly three colors, indexed 0..=2.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ColorPalette {
    colors: [PaletteColor; PALETTE_SIZE],
}

impl ColorPalette {
    /// Creates a palette from three entries.
    #[must_use]
    pub const fn new(colors: [PaletteColor; PALETTE_SIZE]) -> Self {
        Self { colors }
    }

    /// Gets a color by palette index.
    #[must_use]
    pub fn color_at(&self, index: usize) -> Option<&PaletteColor> {
        self.colors.get(index)
    }

    /// All three entries, in index order.
    #[must_use]
    pub const fn colors(&self) -> &[PaletteColor; PALETTE_SIZE] {
        &self.colors
    }
}

impl Default for ColorPalette {
    /// Magenta, gray and cyan, in that index order.
    fn default() -> Self {
        Self::new([
            PaletteColor::new("magenta", RgbColor::new(254, 0, 254)),
            PaletteColor::new("gray", RgbColor::new(105, 105, 105)),
            PaletteColor::new("cyan", RgbColor::new(0, 150, 150)),
        ])
    }
}
