//! Tail-first decoding of the color and digit encodings.
//!
//! Both encodings are consumed from their end: the last character belongs to
//! square 0, the one before it to square 1, and so on across ring boundaries.
//! Each ring takes one contiguous block off the end of what is left, so the
//! remaining encoding is always a prefix of the original string.

use crate::models::{ColorPalette, PaletteColor};

use super::{EncodingKind, LayoutError};

/// A borrowed view of the not-yet-consumed part of one encoding string.
///
/// Taking characters never mutates the caller's string; it produces a new,
/// shorter view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EncodedSequence<'a> {
    kind: EncodingKind,
    remaining: &'a str,
}

impl<'a> EncodedSequence<'a> {
    /// Wraps a color-index encoding.
    #[must_use]
    pub const fn color(source: &'a str) -> Self {
        Self {
            kind: EncodingKind::Color,
            remaining: source,
        }
    }

    /// Wraps a digit encoding.
    #[must_use]
    pub const fn digit(source: &'a str) -> Self {
        Self {
            kind: EncodingKind::Digit,
            remaining: source,
        }
    }

    /// Which encoding this view reads from.
    #[must_use]
    pub const fn kind(&self) -> EncodingKind {
        self.kind
    }

    /// The characters not consumed yet.
    #[must_use]
    pub const fn remaining(&self) -> &'a str {
        self.remaining
    }

    /// Number of characters not consumed yet.
    #[must_use]
    pub fn remaining_len(&self) -> usize {
        self.remaining.chars().count()
    }

    /// Splits off the last `n` characters.
    ///
    /// Returns those characters in their original left-to-right order, and the
    /// view with them removed from its end.
    ///
    /// # Examples
    ///
    /// ```
    /// use acvs_display::encoding::EncodedSequence;
    ///
    /// let seq = EncodedSequence::digit("0123456789");
    /// let (tail, rest) = seq.take_from_end(3).unwrap();
    /// assert_eq!(tail, "789");
    /// assert_eq!(rest.remaining(), "0123456");
    /// ```
    ///
    /// # Errors
    ///
    /// Returns [`LayoutError::EncodingTooShort`] if fewer than `n` characters remain.
    pub fn take_from_end(self, n: usize) -> Result<(&'a str, Self), LayoutError> {
        let available = self.remaining_len();
        if n > available {
            return Err(LayoutError::EncodingTooShort {
                encoding: self.kind,
                required: n,
                remaining: available,
            });
        }

        let split = self
            .remaining
            .char_indices()
            .nth(available - n)
            .map_or(self.remaining.len(), |(offset, _)| offset);

        let (rest, tail) = self.remaining.split_at(split);
        Ok((
            tail,
            Self {
                kind: self.kind,
                remaining: rest,
            },
        ))
    }

    /// Takes the next `n` characters and yields them in consumption order.
    ///
    /// Consumption order is the reverse of string order: the first element is
    /// the character that was last in the view. Each element is paired with its
    /// character offset in the original encoding.
    fn take_in_consumption_order(
        self,
        n: usize,
    ) -> Result<(Vec<(usize, char)>, Self), LayoutError> {
        let (tail, rest) = self.take_from_end(n)?;
        let base = rest.remaining_len();
        let chars = (base..base + n).rev().zip(tail.chars().rev()).collect();
        Ok((chars, rest))
    }

    /// Decodes the next `n` squares' colors through the palette.
    ///
    /// # Errors
    ///
    /// Returns [`LayoutError::EncodingTooShort`] if fewer than `n` characters remain,
    /// or [`LayoutError::InvalidColorIndex`] for any character outside `0`, `1`, `2`.
    pub fn decode_colors(
        self,
        n: usize,
        palette: &ColorPalette,
    ) -> Result<(Vec<PaletteColor>, Self), LayoutError> {
        let (chars, rest) = self.take_in_consumption_order(n)?;
        let colors = chars
            .into_iter()
            .map(|(position, c)| {
                c.to_digit(10)
                    .and_then(|index| palette.color_at(index as usize))
                    .cloned()
                    .ok_or(LayoutError::InvalidColorIndex { found: c, position })
            })
            .collect::<Result<Vec<_>, _>>()?;
        Ok((colors, rest))
    }

    /// Decodes the next `n` squares' digits.
    ///
    /// # Errors
    ///
    /// Returns [`LayoutError::EncodingTooShort`] if fewer than `n` characters remain,
    /// or [`LayoutError::InvalidDigitCharacter`] for anything but `0`-`9`.
    pub fn decode_digits(self, n: usize) -> Result<(Vec<char>, Self), LayoutError> {
        let (chars, rest) = self.take_in_consumption_order(n)?;
        let digits = chars
            .into_iter()
            .map(|(position, c)| {
                if c.is_ascii_digit() {
                    Ok(c)
                } else {
                    Err(LayoutError::InvalidDigitCharacter { found: c, position })
                }
            })
            .collect::<Result<Vec<_>, _>>()?;
        Ok((digits, rest))
    }
}
