#![warn(missing_docs)]

//! Math types for the octfix kernel.
//!
//! Thin wrappers around nalgebra providing the single-precision vector
//! type used by boxes and rays, per-axis random sampling, and tolerance
//! constants for float comparisons.

use nalgebra::Vector3;
use rand::Rng;

/// A point or vector in 3D space.
pub type Vec3 = Vector3<f32>;

/// Euclidean length `sqrt(x² + y² + z²)`.
#[inline]
pub fn length(v: &Vec3) -> f32 {
    (v.x * v.x + v.y * v.y + v.z * v.z).sqrt()
}

/// Scale `v` to unit length.
///
/// Returns `None` for the zero vector, which has no direction.
pub fn normalize(v: &Vec3) -> Option<Vec3> {
    let len = length(v);
    if len == 0.0 {
        return None;
    }
    Some(Vec3::new(v.x / len, v.y / len, v.z / len))
}

/// Draw a scalar uniformly from the closed interval between `min` and `max`.
///
/// Computed as `min + u * (max - min)` with `u` in `[0, 1]`, so a collapsed
/// interval returns `min` and an inverted one still stays between the bounds.
/// The result is pinned to the interval to absorb rounding at `u == 1`.
#[inline]
pub fn random_scalar<R: Rng + ?Sized>(rng: &mut R, min: f32, max: f32) -> f32 {
    let u: f32 = rng.random_range(0.0..=1.0);
    let value = min + u * (max - min);
    value.max(min.min(max)).min(min.max(max))
}

/// Draw a vector whose coordinates are independently uniform in
/// `[min.axis, max.axis]`.
pub fn random_in_range<R: Rng + ?Sized>(rng: &mut R, min: &Vec3, max: &Vec3) -> Vec3 {
    Vec3::new(
        random_scalar(rng, min.x, max.x),
        random_scalar(rng, min.y, max.y),
        random_scalar(rng, min.z, max.z),
    )
}

/// Tolerance constants for float comparisons.
#[derive(Debug, Clone, Copy)]
pub struct Tolerance {
    /// Absolute linear tolerance.
    pub linear: f32,
}

impl Tolerance {
    /// Default single-precision tolerance (1e-4).
    pub const DEFAULT: Self = Self { linear: 1e-4 };

    /// Tolerance scaled to the magnitude of the values being compared.
    pub fn relative_to(magnitude: f32) -> Self {
        Self {
            linear: Self::DEFAULT.linear * magnitude.abs().max(1.0),
        }
    }

    /// Check if a scalar is effectively zero.
    pub fn is_zero(&self, d: f32) -> bool {
        d.abs() < self.linear
    }

    /// Check if two scalars are effectively equal.
    pub fn scalars_equal(&self, a: f32, b: f32) -> bool {
        (a - b).abs() < self.linear
    }

    /// Check if two points are coincident within tolerance.
    pub fn points_equal(&self, a: &Vec3, b: &Vec3) -> bool {
        length(&(a - b)) < self.linear
    }
}

impl Default for Tolerance {
    fn default() -> Self {
        Self::DEFAULT
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_length() {
        assert_relative_eq!(length(&Vec3::new(3.0, 4.0, 0.0)), 5.0);
        assert_relative_eq!(length(&Vec3::new(2.0, 2.0, 2.0)), 12.0f32.sqrt());
        assert_eq!(length(&Vec3::zeros()), 0.0);
    }

    #[test]
    fn test_normalize() {
        let n = normalize(&Vec3::new(0.0, 3.0, 4.0)).unwrap();
        assert_relative_eq!(n.y, 0.6);
        assert_relative_eq!(n.z, 0.8);
        assert_relative_eq!(length(&n), 1.0, epsilon = 1e-6);
    }

    #[test]
    fn test_normalize_zero() {
        assert!(normalize(&Vec3::zeros()).is_none());
    }

    #[test]
    fn test_normalize_keeps_zero_components() {
        let n = normalize(&Vec3::new(-2.0, 0.0, 0.0)).unwrap();
        assert_eq!(n, Vec3::new(-1.0, 0.0, 0.0));
    }

    #[test]
    fn test_random_in_range_bounds() {
        let mut rng = StdRng::seed_from_u64(7);
        let min = Vec3::new(-10.0, 0.0, 5.0);
        let max = Vec3::new(-5.0, 1.0, 50.0);
        for _ in 0..1000 {
            let v = random_in_range(&mut rng, &min, &max);
            assert!(v.x >= min.x && v.x <= max.x);
            assert!(v.y >= min.y && v.y <= max.y);
            assert!(v.z >= min.z && v.z <= max.z);
        }
    }

    #[test]
    fn test_random_collapsed_range() {
        let mut rng = StdRng::seed_from_u64(1);
        let p = Vec3::new(1.5, -2.5, 0.0);
        assert_eq!(random_in_range(&mut rng, &p, &p), p);
    }

    #[test]
    fn test_random_is_reproducible() {
        let min = Vec3::new(-1.0, -1.0, -1.0);
        let max = Vec3::new(1.0, 1.0, 1.0);
        let mut a = StdRng::seed_from_u64(42);
        let mut b = StdRng::seed_from_u64(42);
        for _ in 0..16 {
            assert_eq!(
                random_in_range(&mut a, &min, &max),
                random_in_range(&mut b, &min, &max)
            );
        }
    }

    #[test]
    fn test_tolerance() {
        let tol = Tolerance::DEFAULT;
        let a = Vec3::new(1.0, 2.0, 3.0);
        let b = Vec3::new(1.0 + 1e-6, 2.0, 3.0);
        assert!(tol.points_equal(&a, &b));
        assert!(!tol.points_equal(&a, &Vec3::new(1.01, 2.0, 3.0)));
        assert!(tol.is_zero(-5e-5));
        assert!(Tolerance::relative_to(1000.0).scalars_equal(1000.0, 1000.05));
    }
}
