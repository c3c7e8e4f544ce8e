//! Layout assembly.
//!
//! Composes the decoder and ring placement across the fixed ring plan into a
//! finished [`StimulusLayout`]. Assembly is all-or-nothing: the first decoding
//! error is returned and no squares escape.

use crate::config::DisplayConfig;
use crate::encoding::{EncodedSequence, LayoutError};
use crate::geometry::{place_ring, Point, RING_PLAN, TOTAL_SQUARES};
use crate::models::{ColorPalette, Square, StimulusLayout};

/// Builds the 54-square layout from explicit parameters.
///
/// For each ring, outer to inner:
/// 1. Takes `count` colors and digits off the end of the remaining encodings
/// 2. Places `count` squares evenly around the ring
/// 3. Labels them with the running global index
///
/// The trailing characters of both encodings therefore belong to the outer
/// ring, and the very last character to square "0".
///
/// # Errors
///
/// Returns [`LayoutError`] if either encoding is too short or holds an
/// invalid character.
pub fn assemble(
    square_size: f64,
    outer_radius: f64,
    center: Point,
    palette: &ColorPalette,
    color_encoding: &str,
    digit_encoding: &str,
) -> Result<StimulusLayout, LayoutError> {
    let mut colors = EncodedSequence::color(color_encoding);
    let mut digits = EncodedSequence::digit(digit_encoding);
    let mut squares = Vec::with_capacity(TOTAL_SQUARES);

    for spec in RING_PLAN {
        let (ring_colors, rest) = colors.decode_colors(spec.count, palette)?;
        colors = rest;
        let (ring_digits, rest) = digits.decode_digits(spec.count)?;
        digits = rest;

        let points = place_ring(spec.radius(outer_radius), spec.count, center);

        let first_index = squares.len();
        squares.extend(
            points
                .into_iter()
                .zip(ring_colors)
                .zip(ring_digits)
                .enumerate()
                .map(|(i, ((origin, color), digit))| {
                    Square::new(first_index + i, spec.ring, origin, square_size, color, digit)
                }),
        );
    }

    Ok(StimulusLayout::from_squares(squares))
}

/// Builds the layout described by a display configuration.
///
/// # Examples
///
/// ```
/// use acvs_display::config::DisplayConfig;
/// use acvs_display::services::generate_layout;
///
/// let layout = generate_layout(&DisplayConfig::default()).unwrap();
/// assert_eq!(layout.len(), 54);
/// ```
///
/// # Errors
///
/// Returns [`LayoutError`] if either encoding cannot be decoded.
pub fn generate_layout(config: &DisplayConfig) -> Result<StimulusLayout, LayoutError> {
    assemble(
        config.square_size,
        config.outer_radius,
        config.center(),
        &config.palette,
        &config.color_encoding,
        &config.digit_encoding,
    )
}
