//! Coordinate ranges that boxes and rays are drawn from.

use octfix_kernel_math::{random_in_range, Vec3};
use rand::Rng;

use crate::error::{Result, SampleError};

/// Per-axis closed interval `[min.axis, max.axis]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VecRange {
    /// Lower corner.
    pub min: Vec3,
    /// Upper corner.
    pub max: Vec3,
}

impl VecRange {
    /// Create a range from its corners.
    pub fn new(min: Vec3, max: Vec3) -> Self {
        Self { min, max }
    }

    /// The cube `[lo, hi]` on every axis.
    pub fn uniform(lo: f32, hi: f32) -> Self {
        Self::new(Vec3::new(lo, lo, lo), Vec3::new(hi, hi, hi))
    }

    /// Both corners scaled by `factor`.
    pub fn scaled(&self, factor: f32) -> Self {
        Self::new(self.min * factor, self.max * factor)
    }

    /// True when the only vector in the range is zero.
    pub fn is_zero(&self) -> bool {
        self.min == Vec3::zeros() && self.max == Vec3::zeros()
    }

    /// Draw a vector uniformly from the range.
    pub fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Vec3 {
        random_in_range(rng, &self.min, &self.max)
    }
}

/// Ranges for the two corners of a sampled box.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoxRange {
    /// Range of the box min corner.
    pub min_corner: VecRange,
    /// Range of the box max corner.
    pub max_corner: VecRange,
}

impl BoxRange {
    /// Create a box range from its corner ranges.
    pub fn new(min_corner: VecRange, max_corner: VecRange) -> Self {
        Self {
            min_corner,
            max_corner,
        }
    }

    /// Check that every box drawn from this range has `min <= max`.
    pub fn validate(&self) -> Result<()> {
        for axis in 0..3 {
            let min_hi = self.min_corner.min[axis].max(self.min_corner.max[axis]);
            let max_lo = self.max_corner.min[axis].min(self.max_corner.max[axis]);
            if min_hi > max_lo {
                return Err(SampleError::InvalidBoxRange {
                    axis,
                    min: min_hi,
                    max: max_lo,
                });
            }
        }
        Ok(())
    }
}

/// Ranges for the origin and raw direction of a sampled ray.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RayRange {
    /// Range of the ray origin.
    pub origin: VecRange,
    /// Range the direction is drawn from before normalization.
    pub direction: VecRange,
}

impl RayRange {
    /// Create a ray range.
    pub fn new(origin: VecRange, direction: VecRange) -> Self {
        Self { origin, direction }
    }
}
