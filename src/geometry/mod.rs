//! Stimulus display geometry.
//!
//! Squares sit on three concentric rings around a shared center. This module
//! owns the fixed ring plan and the placement math; it knows nothing about
//! colors or digits.

pub mod ring;

pub use ring::{place_ring, Ring, RingSpec, RING_PLAN, TOTAL_SQUARES};

use serde::{Deserialize, Serialize};

/// A point in screen coordinates (+y points down).
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    /// Horizontal coordinate
    pub x: f64,
    /// Vertical coordinate
    pub y: f64,
}

impl Point {
    /// Creates a new point.
    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Euclidean distance to another point.
    #[must_use]
    pub fn distance_to(&self, other: Self) -> f64 {
        (self.x - other.x).hypot(self.y - other.y)
    }

    /// Returns the point shifted by `(dx, dy)`.
    #[must_use]
    pub fn offset(&self, dx: f64, dy: f64) -> Self {
        Self::new(self.x + dx, self.y + dy)
    }
}
