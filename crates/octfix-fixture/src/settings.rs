//! Generation settings and the per-iteration sampling ranges.

use std::path::Path;

use octfix_kernel_raytrace::ChildLookup;
use octfix_kernel_sampler::{BoxRange, RayRange, VecRange};
use serde::{Deserialize, Serialize};

use crate::error::{FixtureError, Result};

/// Fixture generation parameters.
///
/// Ranges are `[lo, hi]` pairs applied to every axis. Positional ranges are
/// widened by `iteration + 1` for each fixture; the direction range is not.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FixtureSettings {
    /// Number of fixture blocks to emit.
    pub iterations: usize,
    /// Random seed. Wall-clock time is used when absent.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
    /// Cap on draws per rejection loop.
    pub max_attempts: usize,
    /// Octant classification of the hit point.
    pub child_lookup: ChildLookup,
    /// Base range of the box min corner.
    pub box_min_corner: [f32; 2],
    /// Base range of the box max corner.
    pub box_max_corner: [f32; 2],
    /// Base range of the ray origin.
    pub ray_origin: [f32; 2],
    /// Range of the raw ray direction before normalization.
    pub ray_direction: [f32; 2],
}

impl Default for FixtureSettings {
    fn default() -> Self {
        Self {
            iterations: 10,
            seed: None,
            max_attempts: 1_000_000,
            child_lookup: ChildLookup::HalfExtent,
            box_min_corner: [-10.0, -5.0],
            box_max_corner: [5.0, 10.0],
            ray_origin: [-100.0, 100.0],
            ray_direction: [-1.0, 1.0],
        }
    }
}

impl FixtureSettings {
    /// Parse settings from TOML. Missing keys take their defaults.
    pub fn from_toml_str(s: &str) -> Result<Self> {
        let settings: Self = toml::from_str(s)?;
        settings.validate()?;
        Ok(settings)
    }

    /// Read settings from a TOML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        Self::from_toml_str(&std::fs::read_to_string(path)?)
    }

    /// Render the settings as TOML.
    pub fn to_toml_string(&self) -> Result<String> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// Reject ranges that would produce inverted boxes or hang the sampler.
    pub fn validate(&self) -> Result<()> {
        let ranges = [
            ("box_min_corner", self.box_min_corner),
            ("box_max_corner", self.box_max_corner),
            ("ray_origin", self.ray_origin),
            ("ray_direction", self.ray_direction),
        ];
        for (name, [lo, hi]) in ranges {
            if !lo.is_finite() || !hi.is_finite() {
                return Err(invalid(format!("{name} must be finite, got [{lo}, {hi}]")));
            }
            if lo > hi {
                return Err(invalid(format!("{name} is inverted: [{lo}, {hi}]")));
            }
        }
        // Scaling by a positive factor keeps this ordering for every iteration.
        if self.box_min_corner[1] > self.box_max_corner[0] {
            return Err(invalid(format!(
                "box_min_corner upper bound {} exceeds box_max_corner lower bound {}",
                self.box_min_corner[1], self.box_max_corner[0]
            )));
        }
        if self.ray_direction == [0.0, 0.0] {
            return Err(invalid("ray_direction collapses to the zero vector".into()));
        }
        if self.max_attempts == 0 {
            return Err(invalid("max_attempts must be at least 1".into()));
        }
        Ok(())
    }
}

fn invalid(msg: String) -> FixtureError {
    FixtureError::InvalidSettings(msg)
}

/// Box and ray ranges for one fixture.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IterationRanges {
    /// Where the box corners are drawn from.
    pub boxes: BoxRange,
    /// Where the miss and hit rays are drawn from.
    pub rays: RayRange,
}

impl IterationRanges {
    /// Ranges for the zero-based `iteration`, widened by `iteration + 1`.
    pub fn for_iteration(settings: &FixtureSettings, iteration: usize) -> Self {
        let scale = (iteration + 1) as f32;
        let uniform = |[lo, hi]: [f32; 2]| VecRange::uniform(lo, hi);
        Self {
            boxes: BoxRange::new(
                uniform(settings.box_min_corner).scaled(scale),
                uniform(settings.box_max_corner).scaled(scale),
            ),
            rays: RayRange::new(
                uniform(settings.ray_origin).scaled(scale),
                uniform(settings.ray_direction),
            ),
        }
    }
}
