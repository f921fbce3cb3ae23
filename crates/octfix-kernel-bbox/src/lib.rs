#![warn(missing_docs)]

//! Axis-aligned bounding boxes and their octant subdivision.
//!
//! Octants are addressed by a 3-bit index: bit 0 selects the upper X half,
//! bit 1 the upper Y half, bit 2 the upper Z half. Index 5 is therefore
//! upper-X, lower-Y, upper-Z.

use octfix_kernel_math::{length, Vec3};
use tracing::debug;

/// Number of children produced by one subdivision.
pub const OCTANT_COUNT: u8 = 8;

/// Octant bit for the upper X half.
pub const OCTANT_X: u8 = 0b001;
/// Octant bit for the upper Y half.
pub const OCTANT_Y: u8 = 0b010;
/// Octant bit for the upper Z half.
pub const OCTANT_Z: u8 = 0b100;

/// An axis-aligned bounding box.
///
/// Callers keep `min <= max` on every axis; nothing here enforces it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aabb3 {
    /// Minimum corner.
    pub min: Vec3,
    /// Maximum corner.
    pub max: Vec3,
}

impl Aabb3 {
    /// Create an AABB from min and max corners.
    pub fn new(min: Vec3, max: Vec3) -> Self {
        Self { min, max }
    }

    /// Size along each axis, `max - min`.
    pub fn extent(&self) -> Vec3 {
        self.max - self.min
    }

    /// Half the size along each axis.
    pub fn half_extent(&self) -> Vec3 {
        self.extent() / 2.0
    }

    /// Center point of the box.
    pub fn center(&self) -> Vec3 {
        self.min + self.half_extent()
    }

    /// Length of the main diagonal, `length(max - min)`.
    pub fn diagonal(&self) -> f32 {
        length(&self.extent())
    }

    /// True when `min <= max` holds on every axis.
    pub fn is_valid(&self) -> bool {
        self.min.x <= self.max.x && self.min.y <= self.max.y && self.min.z <= self.max.z
    }

    /// Test if a point lies inside the box (boundary included).
    pub fn contains_point(&self, p: &Vec3) -> bool {
        p.x >= self.min.x
            && p.x <= self.max.x
            && p.y >= self.min.y
            && p.y <= self.max.y
            && p.z >= self.min.z
            && p.z <= self.max.z
    }

    /// The child box occupying octant `index`.
    ///
    /// A clear bit keeps the child at `[min, max - half]` on that axis, a set
    /// bit at `[min + half, max]`. Indices outside `0..8` return the box
    /// itself.
    pub fn child(&self, index: u8) -> Aabb3 {
        if index >= OCTANT_COUNT {
            debug!(index, "octant index out of range, returning parent box");
            return *self;
        }

        let half = self.half_extent();
        let mut child = *self;
        for axis in 0..3 {
            if index & (1 << axis) == 0 {
                child.max[axis] = self.max[axis] - half[axis];
            } else {
                child.min[axis] = self.min[axis] + half[axis];
            }
        }
        child
    }

    /// All eight children in octant index order.
    pub fn children(&self) -> [Aabb3; OCTANT_COUNT as usize] {
        std::array::from_fn(|i| self.child(i as u8))
    }

    /// Octant index of the child containing `p`, measured from the box center.
    ///
    /// A coordinate equal to the center falls in the upper half.
    pub fn octant_of(&self, p: &Vec3) -> u8 {
        let center = self.center();
        let mut index = 0;
        for axis in 0..3 {
            if p[axis] >= center[axis] {
                index |= 1 << axis;
            }
        }
        index
    }
}
