//! Layout error types using `thiserror`.

use std::fmt;

use serde::Serialize;
use thiserror::Error;

/// Which of the two encoding strings an error refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum EncodingKind {
    /// Palette index per square
    Color,
    /// Displayed digit per square
    Digit,
}

impl fmt::Display for EncodingKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EncodingKind::Color => f.write_str("color"),
            EncodingKind::Digit => f.write_str("digit"),
        }
    }
}

/// Failure to decode a layout from its two encodings.
///
/// Every variant is raised while decoding, before any layout is returned.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LayoutError {
    /// An encoding has fewer characters left than the current ring needs
    #[error("{encoding} encoding too short: need {required} more characters, {remaining} remaining")]
    EncodingTooShort {
        /// Encoding that ran out
        encoding: EncodingKind,
        /// Characters requested by the ring being decoded
        required: usize,
        /// Characters left in the encoding
        remaining: usize,
    },

    /// A color encoding character is not a palette index (0, 1 or 2)
    #[error("invalid color index {found:?} at position {position} of the color encoding")]
    InvalidColorIndex {
        /// Offending character
        found: char,
        /// Character offset from the start of the encoding
        position: usize,
    },

    /// A digit encoding character is not an ASCII decimal digit
    #[error("invalid digit {found:?} at position {position} of the digit encoding")]
    InvalidDigitCharacter {
        /// Offending character
        found: char,
        /// Character offset from the start of the encoding
        position: usize,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_too_short_message() {
        let err = LayoutError::EncodingTooShort {
            encoding: EncodingKind::Digit,
            required: 12,
            remaining: 11,
        };
        assert_eq!(
            err.to_string(),
            "digit encoding too short: need 12 more characters, 11 remaining"
        );
    }

    #[test]
    fn test_invalid_character_messages() {
        let err = LayoutError::InvalidColorIndex {
            found: '7',
            position: 3,
        };
        assert_eq!(
            err.to_string(),
            "invalid color index '7' at position 3 of the color encoding"
        );

        let err = LayoutError::InvalidDigitCharacter {
            found: 'x',
            position: 0,
        };
        assert!(err.to_string().contains("'x'"));
    }
}
