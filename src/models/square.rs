//! A single square stimulus and its target classification.

use serde::{Deserialize, Serialize};

use crate::geometry::{Point, Ring};

use super::PaletteColor;

/// Digits that make a square a search target.
pub const TARGET_DIGITS: [char; 4] = ['2', '3', '4', '5'];

/// Whether a square is something the participant searches for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Classification {
    /// Digit is 2, 3, 4 or 5
    Target,
    /// Any other digit
    NonTarget,
}

impl Classification {
    /// CSS class name used by renderers.
    #[must_use]
    pub const fn class_name(self) -> &'static str {
        match self {
            Classification::Target => "target",
            Classification::NonTarget => "nontarget",
        }
    }

    /// Returns true for [`Classification::Target`].
    #[must_use]
    pub const fn is_target(self) -> bool {
        matches!(self, Classification::Target)
    }
}

/// Classifies a digit character.
///
/// ```
/// use acvs_display::models::{classify, Classification};
///
/// assert_eq!(classify('3'), Classification::Target);
/// assert_eq!(classify('9'), Classification::NonTarget);
/// ```
#[must_use]
pub fn classify(digit: char) -> Classification {
    if TARGET_DIGITS.contains(&digit) {
        Classification::Target
    } else {
        Classification::NonTarget
    }
}

/// One square of the display.
///
/// Squares are only produced by layout assembly and are read-only afterwards.
/// `x`/`y` is the top-left corner of the square.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Square {
    position_label: String,
    ring: Ring,
    x: f64,
    y: f64,
    size: f64,
    color: PaletteColor,
    digit: char,
}

impl Square {
    pub(crate) fn new(
        index: usize,
        ring: Ring,
        origin: Point,
        size: f64,
        color: PaletteColor,
        digit: char,
    ) -> Self {
        Self {
            position_label: index.to_string(),
            ring,
            x: origin.x,
            y: origin.y,
            size,
            color,
            digit,
        }
    }

    /// Sequential position label, "0" to "53".
    #[must_use]
    pub fn position_label(&self) -> &str {
        &self.position_label
    }

    /// Ring this square sits on.
    #[must_use]
    pub const fn ring(&self) -> Ring {
        self.ring
    }

    /// Top-left x coordinate.
    #[must_use]
    pub const fn x(&self) -> f64 {
        self.x
    }

    /// Top-left y coordinate.
    #[must_use]
    pub const fn y(&self) -> f64 {
        self.y
    }

    /// Top-left corner as a point.
    #[must_use]
    pub const fn origin(&self) -> Point {
        Point::new(self.x, self.y)
    }

    /// Center of the square (top-left plus half the size on both axes).
    #[must_use]
    pub fn center(&self) -> Point {
        self.origin().offset(self.size / 2.0, self.size / 2.0)
    }

    /// Width and height.
    #[must_use]
    pub const fn size(&self) -> f64 {
        self.size
    }

    /// Palette entry used for the fill.
    #[must_use]
    pub const fn color(&self) -> &PaletteColor {
        &self.color
    }

    /// Digit drawn on the square.
    #[must_use]
    pub const fn digit(&self) -> char {
        self.digit
    }

    /// Target classification, always derived from the digit.
    #[must_use]
    pub fn classification(&self) -> Classification {
        classify(self.digit)
    }
}
