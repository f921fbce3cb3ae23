//! One fixture block and the generator producing a sequence of them.

use std::time::{SystemTime, UNIX_EPOCH};

use octfix_kernel_bbox::{Aabb3, OCTANT_COUNT};
use octfix_kernel_raytrace::{ChildLookup, Ray};
use octfix_kernel_sampler::Sampler;
use rand::rngs::StdRng;
use rand::Rng;
use tracing::{debug, info, instrument};

use crate::error::Result;
use crate::settings::{FixtureSettings, IterationRanges};

/// A sampled box with its subdivision and a guaranteed miss and hit ray.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Fixture {
    /// The sampled box.
    pub aabb: Aabb3,
    /// Its eight octant children in index order.
    pub children: [Aabb3; OCTANT_COUNT as usize],
    /// Length of the box diagonal.
    pub diagonal: f32,
    /// A ray that does not enter the box ahead of its origin.
    pub miss_ray: Ray,
    /// A ray that enters the box ahead of its origin.
    pub hit_ray: Ray,
    /// `hit_ray` mirrored off the face it entered through.
    pub reflected_ray: Ray,
    /// Octant index of the entry point of `hit_ray`.
    pub child: u8,
    /// Entry distance of `hit_ray`.
    pub distance: f32,
}

impl Fixture {
    /// Sample one fixture from `ranges`.
    pub fn generate<R: Rng>(
        sampler: &mut Sampler<R>,
        ranges: &IterationRanges,
        lookup: ChildLookup,
    ) -> Result<Self> {
        let aabb = sampler.sample_box(&ranges.boxes)?;
        let miss_ray = sampler.sample_miss_ray(&aabb, &ranges.rays)?;
        let (hit_ray, hit) = sampler.sample_hit_ray(&aabb, &ranges.rays, lookup)?;

        Ok(Self {
            aabb,
            children: aabb.children(),
            diagonal: aabb.diagonal(),
            miss_ray,
            hit_ray,
            reflected_ray: hit.reflected,
            child: hit.child,
            distance: hit.distance,
        })
    }
}

/// Seed from wall-clock time, for runs without an explicit seed.
pub fn clock_seed() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos() as u64)
        .unwrap_or_default()
}

/// Iterator over the fixtures described by a [`FixtureSettings`].
#[derive(Debug)]
pub struct FixtureGenerator<R> {
    sampler: Sampler<R>,
    settings: FixtureSettings,
    seed: Option<u64>,
    next: usize,
}

impl FixtureGenerator<StdRng> {
    /// Validate `settings` and seed a generator from them.
    ///
    /// Uses [`clock_seed`] when the settings carry no seed.
    pub fn new(settings: FixtureSettings) -> Result<Self> {
        settings.validate()?;
        let seed = settings.seed.unwrap_or_else(clock_seed);
        info!(seed, iterations = settings.iterations, "seeding fixture generator");
        let sampler = Sampler::seeded(seed).with_max_attempts(settings.max_attempts);
        let mut generator = Self::with_sampler(settings, sampler)?;
        generator.seed = Some(seed);
        Ok(generator)
    }
}

impl<R: Rng> FixtureGenerator<R> {
    /// Generator drawing from an existing sampler.
    pub fn with_sampler(settings: FixtureSettings, sampler: Sampler<R>) -> Result<Self> {
        settings.validate()?;
        Ok(Self {
            sampler,
            settings,
            seed: None,
            next: 0,
        })
    }

    /// Seed in use, when this generator seeded its own sampler.
    pub fn seed(&self) -> Option<u64> {
        self.seed
    }

    /// Settings the generator was built from.
    pub fn settings(&self) -> &FixtureSettings {
        &self.settings
    }

    #[instrument(skip(self))]
    fn generate_iteration(&mut self, iteration: usize) -> Result<Fixture> {
        let ranges = IterationRanges::for_iteration(&self.settings, iteration);
        let fixture = Fixture::generate(&mut self.sampler, &ranges, self.settings.child_lookup)?;
        debug!(
            diagonal = fixture.diagonal,
            distance = fixture.distance,
            child = fixture.child,
            "fixture generated"
        );
        Ok(fixture)
    }
}

impl<R: Rng> Iterator for FixtureGenerator<R> {
    type Item = Result<Fixture>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.next >= self.settings.iterations {
            return None;
        }
        let iteration = self.next;
        self.next += 1;
        Some(self.generate_iteration(iteration))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.settings.iterations.saturating_sub(self.next);
        (remaining, Some(remaining))
    }
}
