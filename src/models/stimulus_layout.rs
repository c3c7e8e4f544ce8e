//! The assembled, immutable 54-square display.

use serde::Serialize;

use crate::geometry::Ring;

use super::Square;

/// Ordered squares of one display, outer ring first.
///
/// Within a ring squares follow increasing angular index. A layout is built
/// once by [`crate::services::generate_layout`]; changing either encoding means
/// building a new one.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct StimulusLayout {
    squares: Vec<Square>,
}

impl StimulusLayout {
    pub(crate) fn from_squares(squares: Vec<Square>) -> Self {
        Self { squares }
    }

    /// Iterates squares in display order.
    pub fn iter(&self) -> std::slice::Iter<'_, Square> {
        self.squares.iter()
    }

    /// Number of squares.
    #[must_use]
    pub fn len(&self) -> usize {
        self.squares.len()
    }

    /// Returns true if the layout has no squares.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.squares.is_empty()
    }

    /// The contiguous run of squares on one ring.
    #[must_use]
    pub fn ring(&self, ring: Ring) -> &[Square] {
        self.squares.get(ring.index_range()).unwrap_or(&[])
    }

    /// Looks up a square by its position label.
    #[must_use]
    pub fn get(&self, position_label: &str) -> Option<&Square> {
        position_label
            .parse::<usize>()
            .ok()
            .and_then(|index| self.squares.get(index))
            .filter(|square| square.position_label() == position_label)
    }

    /// Number of target squares.
    #[must_use]
    pub fn target_count(&self) -> usize {
        self.squares
            .iter()
            .filter(|square| square.classification().is_target())
            .count()
    }
}

impl<'a> IntoIterator for &'a StimulusLayout {
    type Item = &'a Square;
    type IntoIter = std::slice::Iter<'a, Square>;

    fn into_iter(self) -> Self::IntoIter {
        self.squares.iter()
    }
}
