//! Ring plan and evenly spaced placement around a ring.
//!
//! # Angular convention
//!
//! Index `i` of a ring with `count` squares sits at angle
//! `2π / count * i + π / 2`. With screen coordinates (+y down) index 0 lands on
//! the vertical axis through the center and the sequence renders clockwise.
//!
//! Returned coordinates are used as each square's **top-left** corner, not
//! its center. Renderers wanting centered squares offset by half the size.

use std::f64::consts::{FRAC_PI_2, TAU};
use std::ops::Range;

use serde::{Deserialize, Serialize};

use super::Point;

/// One of the three concentric rings, outermost first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Ring {
    /// 24 squares at the full outer radius
    Outer,
    /// 18 squares at three quarters of the outer radius
    Middle,
    /// 12 squares at half the outer radius
    Inner,
}

impl Ring {
    /// The fixed plan entry for this ring.
    #[must_use]
    pub const fn spec(self) -> RingSpec {
        match self {
            Ring::Outer => RING_PLAN[0],
            Ring::Middle => RING_PLAN[1],
            Ring::Inner => RING_PLAN[2],
        }
    }

    /// Global square indices covered by this ring.
    ///
    /// ```
    /// use acvs_display::geometry::Ring;
    ///
    /// assert_eq!(Ring::Outer.index_range(), 0..24);
    /// assert_eq!(Ring::Middle.index_range(), 24..42);
    /// assert_eq!(Ring::Inner.index_range(), 42..54);
    /// ```
    #[must_use]
    pub fn index_range(self) -> Range<usize> {
        let start: usize = RING_PLAN
            .iter()
            .take_while(|spec| spec.ring != self)
            .map(|spec| spec.count)
            .sum();
        start..start + self.spec().count
    }

    /// Lowercase name used in reports.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Ring::Outer => "outer",
            Ring::Middle => "middle",
            Ring::Inner => "inner",
        }
    }
}

/// Radius scale and square count for one ring.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RingSpec {
    /// Which ring this entry describes
    pub ring: Ring,
    /// Radius as a fraction of the outer radius
    pub radius_scale: f64,
    /// Number of squares on the ring
    pub count: usize,
}

impl RingSpec {
    /// Absolute radius of this ring for a given outer radius.
    #[must_use]
    pub fn radius(&self, outer_radius: f64) -> f64 {
        outer_radius * self.radius_scale
    }
}

/// The fixed ring plan, outer to inner.
pub const RING_PLAN: [RingSpec; 3] = [
    RingSpec {
        ring: Ring::Outer,
        radius_scale: 1.0,
        count: 24,
    },
    RingSpec {
        ring: Ring::Middle,
        radius_scale: 0.75,
        count: 18,
    },
    RingSpec {
        ring: Ring::Inner,
        radius_scale: 0.5,
        count: 12,
    },
];

/// Total number of squares in a display.
pub const TOTAL_SQUARES: usize = 24 + 18 + 12;

/// Computes `count` evenly spaced coordinates around a ring.
///
/// Index 0 sits at angle π/2 and each following index advances by `2π / count`.
/// A `count` of zero yields an empty vector.
///
/// # Examples
///
/// ```
/// use acvs_display::geometry::{place_ring, Point};
///
/// let points = place_ring(10.0, 4, Point::new(0.0, 0.0));
/// assert_eq!(points.len(), 4);
/// assert!(points[0].x.abs() < 1e-9);
/// assert!((points[0].y - 10.0).abs() < 1e-9);
/// ```
#[must_use]
pub fn place_ring(radius: f64, count: usize, center: Point) -> Vec<Point> {
    if count == 0 {
        return Vec::new();
    }

    let alpha = TAU / count as f64;

    (0..count)
        .map(|i| {
            let theta = alpha * i as f64 + FRAC_PI_2;
            Point::new(
                theta.cos() * radius + center.x,
                theta.sin() * radius + center.y,
            )
        })
        .collect()
}
