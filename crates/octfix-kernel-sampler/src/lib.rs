#![warn(missing_docs)]

//! Random boxes and rays for the octfix kernel.
//!
//! A [`Sampler`] owns its random generator, so two samplers seeded alike
//! produce identical streams. Every rejection loop is capped by
//! [`Sampler::max_attempts`] and reports [`SampleError::AttemptsExhausted`]
//! instead of spinning forever on a degenerate range.
//!
//! # Example
//!
//! ```
//! use octfix_kernel_sampler::{BoxRange, RayRange, Sampler, VecRange};
//!
//! let mut sampler = Sampler::seeded(7);
//! let boxes = BoxRange::new(VecRange::uniform(-10.0, -5.0), VecRange::uniform(5.0, 10.0));
//! let rays = RayRange::new(VecRange::uniform(-100.0, 100.0), VecRange::uniform(-1.0, 1.0));
//!
//! let aabb = sampler.sample_box(&boxes).unwrap();
//! let miss = sampler.sample_miss_ray(&aabb, &rays).unwrap();
//! let (hit_ray, hit) = sampler.sample_hit_ray(&aabb, &rays, Default::default()).unwrap();
//! assert!(hit.distance > 0.0);
//! # let _ = (miss, hit_ray);
//! ```

pub mod error;
pub mod range;

pub use error::{Result, SampleError, SampleKind};
pub use range::{BoxRange, RayRange, VecRange};

use octfix_kernel_bbox::Aabb3;
use octfix_kernel_math::{normalize, Vec3};
use octfix_kernel_raytrace::{BoxHit, ChildLookup, Ray};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::{debug, trace};

/// Draws boxes and rays from coordinate ranges.
#[derive(Debug, Clone)]
pub struct Sampler<R> {
    rng: R,
    max_attempts: usize,
}

impl Sampler<StdRng> {
    /// Sampler backed by a `StdRng` seeded with `seed`.
    pub fn seeded(seed: u64) -> Self {
        Self::new(StdRng::seed_from_u64(seed))
    }
}

impl<R: Rng> Sampler<R> {
    /// Default cap on draws per rejection loop.
    pub const DEFAULT_MAX_ATTEMPTS: usize = 1_000_000;

    /// Create a sampler around `rng` with the default attempt cap.
    pub fn new(rng: R) -> Self {
        Self {
            rng,
            max_attempts: Self::DEFAULT_MAX_ATTEMPTS,
        }
    }

    /// Replace the attempt cap. A cap of zero is raised to one.
    pub fn with_max_attempts(mut self, max_attempts: usize) -> Self {
        self.max_attempts = max_attempts.max(1);
        self
    }

    /// Cap on draws per rejection loop.
    pub fn max_attempts(&self) -> usize {
        self.max_attempts
    }

    /// Mutable access to the underlying generator.
    pub fn rng_mut(&mut self) -> &mut R {
        &mut self.rng
    }

    /// Draw a box with min and max corners taken from their own ranges.
    pub fn sample_box(&mut self, range: &BoxRange) -> Result<Aabb3> {
        range.validate()?;
        let min = range.min_corner.sample(&mut self.rng);
        let max = range.max_corner.sample(&mut self.rng);
        Ok(Aabb3::new(min, max))
    }

    /// Draw a unit direction, rejecting zero-length draws.
    pub fn sample_direction(&mut self, range: &VecRange) -> Result<Vec3> {
        if range.is_zero() {
            return Err(SampleError::ZeroDirectionRange);
        }
        self.reject_until(SampleKind::Direction, |s| {
            Ok(normalize(&range.sample(&mut s.rng)))
        })
    }

    /// Draw a ray with a unit direction.
    pub fn sample_ray(&mut self, range: &RayRange) -> Result<Ray> {
        let direction = self.sample_direction(&range.direction)?;
        let origin = range.origin.sample(&mut self.rng);
        Ok(Ray::new(origin, direction))
    }

    /// Draw rays until one does not enter `aabb` ahead of its origin.
    pub fn sample_miss_ray(&mut self, aabb: &Aabb3, range: &RayRange) -> Result<Ray> {
        self.reject_until(SampleKind::MissRay, |s| {
            let ray = s.sample_ray(range)?;
            let forward = ray.intersect_box(aabb).is_some_and(|hit| hit.is_forward());
            Ok((!forward).then_some(ray))
        })
    }

    /// Draw rays until one enters `aabb` ahead of its origin.
    ///
    /// Returns the ray together with its intersection, classified by `lookup`.
    pub fn sample_hit_ray(
        &mut self,
        aabb: &Aabb3,
        range: &RayRange,
        lookup: ChildLookup,
    ) -> Result<(Ray, BoxHit)> {
        self.reject_until(SampleKind::HitRay, |s| {
            let ray = s.sample_ray(range)?;
            Ok(ray
                .intersect_box_with(aabb, lookup)
                .filter(BoxHit::is_forward)
                .map(|hit| (ray, hit)))
        })
    }

    /// Run `draw` until it yields a value or the attempt cap is reached.
    fn reject_until<T>(
        &mut self,
        kind: SampleKind,
        mut draw: impl FnMut(&mut Self) -> Result<Option<T>>,
    ) -> Result<T> {
        for attempt in 1..=self.max_attempts {
            if let Some(value) = draw(self)? {
                trace!(%kind, attempt, "sample accepted");
                return Ok(value);
            }
        }
        debug!(%kind, attempts = self.max_attempts, "rejection sampling exhausted");
        Err(SampleError::AttemptsExhausted {
            kind,
            attempts: self.max_attempts,
        })
    }
}
