//! Ray representation and the slab-method ray/box test.

use octfix_kernel_bbox::Aabb3;
use octfix_kernel_math::{normalize, Vec3};
use serde::{Deserialize, Serialize};

/// A coordinate axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Axis {
    /// The X axis.
    X,
    /// The Y axis.
    Y,
    /// The Z axis.
    Z,
}

impl Axis {
    /// Component index of this axis.
    #[inline]
    pub fn index(self) -> usize {
        match self {
            Axis::X => 0,
            Axis::Y => 1,
            Axis::Z => 2,
        }
    }
}

/// How the octant of a box entry point is determined.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ChildLookup {
    /// Compare each coordinate against the box half extent.
    ///
    /// This only lines up with the octant grid when the box min corner is
    /// at the origin. It is the default because existing fixture consumers
    /// were generated with it.
    #[default]
    HalfExtent,
    /// Compare each coordinate against the box center.
    Center,
}

impl ChildLookup {
    /// Octant index of `point` within `aabb` under this rule.
    pub fn octant(self, aabb: &Aabb3, point: &Vec3) -> u8 {
        match self {
            ChildLookup::HalfExtent => {
                let half = aabb.half_extent();
                let mut index = 0;
                for axis in 0..3 {
                    if point[axis] >= half[axis] {
                        index |= 1 << axis;
                    }
                }
                index
            }
            ChildLookup::Center => aabb.octant_of(point),
        }
    }
}

/// A ray in 3D space defined by origin and direction.
///
/// The direction is not required to be unit length; distances reported by
/// [`Ray::intersect_box`] are measured in multiples of it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ray {
    /// Origin point of the ray.
    pub origin: Vec3,
    /// Direction of the ray.
    pub direction: Vec3,
}

impl Ray {
    /// Create a ray, keeping `direction` exactly as given.
    pub fn new(origin: Vec3, direction: Vec3) -> Self {
        Self { origin, direction }
    }

    /// Create a ray with a unit direction. `None` for a zero direction.
    pub fn normalized(origin: Vec3, direction: Vec3) -> Option<Self> {
        normalize(&direction).map(|direction| Self { origin, direction })
    }

    /// Evaluate the ray at parameter `t`: `origin + direction * t`.
    #[inline]
    pub fn at(&self, t: f32) -> Vec3 {
        self.origin + self.direction * t
    }

    /// Mirror this ray off a face perpendicular to `axis`, starting at `point`.
    pub fn reflected(&self, axis: Axis, point: Vec3) -> Ray {
        let mut direction = self.direction;
        direction[axis.index()] = -direction[axis.index()];
        Ray::new(point, direction)
    }

    /// Parametric entry and exit of the slab between the box faces on `axis`.
    ///
    /// A zero direction component gives an infinite reciprocal, which yields
    /// `±inf` bounds and keeps the slab comparisons correct.
    #[inline]
    fn slab(&self, aabb: &Aabb3, axis: Axis) -> (f32, f32) {
        let i = axis.index();
        let inv = 1.0 / self.direction[i];
        let to_min = (aabb.min[i] - self.origin[i]) * inv;
        let to_max = (aabb.max[i] - self.origin[i]) * inv;
        if inv >= 0.0 {
            (to_min, to_max)
        } else {
            (to_max, to_min)
        }
    }

    /// Test ray/box intersection using the slab method.
    ///
    /// Equivalent to [`Ray::intersect_box_with`] using
    /// [`ChildLookup::HalfExtent`].
    #[inline]
    pub fn intersect_box(&self, aabb: &Aabb3) -> Option<BoxHit> {
        self.intersect_box_with(aabb, ChildLookup::default())
    }

    /// Test ray/box intersection using the slab method.
    ///
    /// Slabs are applied in X, Y, Z order. Returns `None` as soon as the
    /// running interval becomes empty. Otherwise the hit is reported even
    /// when the entry distance is not positive (origin inside the box, or
    /// the box lies behind the ray); see [`BoxHit::is_forward`].
    pub fn intersect_box_with(&self, aabb: &Aabb3, lookup: ChildLookup) -> Option<BoxHit> {
        let (mut t_min, mut t_max) = self.slab(aabb, Axis::X);
        let mut entry_axis = Axis::X;

        for axis in [Axis::Y, Axis::Z] {
            let (near, far) = self.slab(aabb, axis);
            if t_min > far || near > t_max {
                return None;
            }
            if near > t_min {
                t_min = near;
                entry_axis = axis;
            }
            if far < t_max {
                t_max = far;
            }
        }

        let point = self.at(t_min);
        Some(BoxHit {
            distance: t_min,
            exit_distance: t_max,
            point,
            entry_axis,
            reflected: self.reflected(entry_axis, point),
            child: lookup.octant(aabb, &point),
        })
    }
}

/// Result of a ray/box intersection.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoxHit {
    /// Parameter along the ray where it enters the box.
    pub distance: f32,
    /// Parameter along the ray where it leaves the box.
    pub exit_distance: f32,
    /// Entry point, `ray.at(distance)`.
    pub point: Vec3,
    /// Axis whose slab determined the entry point.
    pub entry_axis: Axis,
    /// Ray mirrored off the entry face, starting at the entry point.
    pub reflected: Ray,
    /// Octant index containing the entry point.
    pub child: u8,
}

impl BoxHit {
    /// True when the box is entered strictly ahead of the ray origin.
    #[inline]
    pub fn is_forward(&self) -> bool {
        self.distance > 0.0
    }
}

/// Entry distance of `ray` into `aabb`, or `0.0` when the ray misses.
///
/// Any result that is not strictly positive means "no hit"; a grazing hit at
/// exactly zero cannot be told apart from a miss.
pub fn hit_distance(ray: &Ray, aabb: &Aabb3) -> f32 {
    ray.intersect_box(aabb).map_or(0.0, |hit| hit.distance)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn unit_box() -> Aabb3 {
        Aabb3::new(Vec3::zeros(), Vec3::new(1.0, 1.0, 1.0))
    }

    #[test]
    fn test_ray_at() {
        let ray = Ray::new(Vec3::zeros(), Vec3::new(1.0, 0.0, 0.0));
        let p = ray.at(5.0);
        assert_eq!(p, Vec3::new(5.0, 0.0, 0.0));
    }

    #[test]
    fn test_ray_box_hit() {
        let ray = Ray::new(Vec3::new(-5.0, 0.5, 0.5), Vec3::new(1.0, 0.0, 0.0));
        let hit = ray.intersect_box(&unit_box()).unwrap();
        assert_relative_eq!(hit.distance, 5.0);
        assert_relative_eq!(hit.exit_distance, 6.0);
        assert_eq!(hit.point, Vec3::new(0.0, 0.5, 0.5));
        assert_eq!(hit.entry_axis, Axis::X);
        assert_eq!(hit.reflected.origin, hit.point);
        assert_eq!(hit.reflected.direction, Vec3::new(-1.0, 0.0, 0.0));
        assert!(hit.is_forward());
    }

    #[test]
    fn test_ray_box_hit_child() {
        let ray = Ray::new(Vec3::new(-5.0, 0.5, 0.5), Vec3::new(1.0, 0.0, 0.0));
        // Entry (0, 0.5, 0.5) sits on the half-extent threshold for Y and Z.
        assert_eq!(ray.intersect_box(&unit_box()).unwrap().child, 6);

        let ray = Ray::new(Vec3::new(-5.0, 0.25, 0.75), Vec3::new(1.0, 0.0, 0.0));
        assert_eq!(ray.intersect_box(&unit_box()).unwrap().child, 4);
    }

    #[test]
    fn test_ray_box_miss() {
        let ray = Ray::new(Vec3::new(-5.0, 5.0, 5.0), Vec3::new(1.0, 0.0, 0.0));
        assert!(ray.intersect_box(&unit_box()).is_none());
        assert_eq!(hit_distance(&ray, &unit_box()), 0.0);
    }

    #[test]
    fn test_ray_inside_box() {
        let ray = Ray::new(Vec3::new(0.5, 0.5, 0.5), Vec3::new(1.0, 0.0, 0.0));
        let hit = ray.intersect_box(&unit_box()).unwrap();
        assert!(!hit.is_forward());
        assert_relative_eq!(hit.distance, -0.5);
        assert_relative_eq!(hit.exit_distance, 0.5);
    }

    #[test]
    fn test_ray_box_behind() {
        let ray = Ray::new(Vec3::new(-5.0, 0.5, 0.5), Vec3::new(-1.0, 0.0, 0.0));
        let hit = ray.intersect_box(&unit_box()).unwrap();
        assert!(!hit.is_forward());
        assert!(hit_distance(&ray, &unit_box()) <= 0.0);
    }

    #[test]
    fn test_ray_box_entry_face_y() {
        let ray = Ray::new(Vec3::new(0.5, 3.0, 0.5), Vec3::new(0.0, -1.0, 0.0));
        let hit = ray.intersect_box(&unit_box()).unwrap();
        assert_relative_eq!(hit.distance, 2.0);
        assert_eq!(hit.entry_axis, Axis::Y);
        assert_eq!(hit.reflected.direction, Vec3::new(0.0, 1.0, 0.0));
    }

    #[test]
    fn test_ray_box_entry_face_z() {
        let dir = Vec3::new(0.1, 0.1, 1.0);
        let ray = Ray::new(Vec3::new(0.2, 0.2, -2.0), dir);
        let hit = ray.intersect_box(&unit_box()).unwrap();
        assert_relative_eq!(hit.distance, 2.0);
        assert_eq!(hit.entry_axis, Axis::Z);
        assert_eq!(hit.reflected.direction, Vec3::new(0.1, 0.1, -1.0));
        assert_relative_eq!(hit.point.z, 0.0);
    }

    #[test]
    fn test_ray_box_diagonal() {
        let ray = Ray::normalized(Vec3::new(-1.0, -1.0, -1.0), Vec3::new(1.0, 1.0, 1.0)).unwrap();
        let hit = ray.intersect_box(&unit_box()).unwrap();
        assert_relative_eq!(hit.distance, 3.0f32.sqrt(), epsilon = 1e-5);
    }

    #[test]
    fn test_negative_zero_direction_component() {
        let ray = Ray::new(Vec3::new(-5.0, 0.5, 0.5), Vec3::new(1.0, -0.0, 0.0));
        let hit = ray.intersect_box(&unit_box()).unwrap();
        assert_relative_eq!(hit.distance, 5.0);
    }

    #[test]
    fn test_axis_parallel_ray_outside_slab() {
        // Parallel to X and outside the Z slab.
        let ray = Ray::new(Vec3::new(-5.0, 0.5, 2.0), Vec3::new(1.0, 0.0, 0.0));
        assert!(ray.intersect_box(&unit_box()).is_none());
    }

    #[test]
    fn test_child_lookup_rules_differ_off_origin() {
        let aabb = Aabb3::new(Vec3::new(10.0, 10.0, 10.0), Vec3::new(12.0, 12.0, 12.0));
        let ray = Ray::new(Vec3::new(0.0, 10.5, 10.5), Vec3::new(1.0, 0.0, 0.0));
        let legacy = ray.intersect_box_with(&aabb, ChildLookup::HalfExtent).unwrap();
        let center = ray.intersect_box_with(&aabb, ChildLookup::Center).unwrap();
        // Every coordinate exceeds the half extent of 1.0.
        assert_eq!(legacy.child, 7);
        assert_eq!(center.child, 0);
    }

    #[test]
    fn test_reflected_negates_one_axis() {
        let ray = Ray::new(Vec3::zeros(), Vec3::new(0.3, -0.4, 0.5));
        let r = ray.reflected(Axis::Y, Vec3::new(1.0, 2.0, 3.0));
        assert_eq!(r.origin, Vec3::new(1.0, 2.0, 3.0));
        assert_eq!(r.direction, Vec3::new(0.3, 0.4, 0.5));
    }
}
