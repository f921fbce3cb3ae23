//! Error types for the sampler.

use std::fmt;

use thiserror::Error;

/// What a rejection loop was trying to produce.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SampleKind {
    /// A non-zero ray direction.
    Direction,
    /// A ray that misses the target box.
    MissRay,
    /// A ray that enters the target box ahead of its origin.
    HitRay,
}

impl fmt::Display for SampleKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            SampleKind::Direction => "non-zero direction",
            SampleKind::MissRay => "miss ray",
            SampleKind::HitRay => "hit ray",
        })
    }
}

/// Errors that can occur while sampling.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SampleError {
    /// The box range can produce a box with `min > max`.
    #[error("box range can produce an inverted box on axis {axis}: min corner reaches {min}, max corner starts at {max}")]
    InvalidBoxRange {
        /// Offending axis index.
        axis: usize,
        /// Upper bound of the min corner range on that axis.
        min: f32,
        /// Lower bound of the max corner range on that axis.
        max: f32,
    },

    /// The direction range only contains the zero vector.
    #[error("direction range collapses to the zero vector")]
    ZeroDirectionRange,

    /// A rejection loop hit its attempt cap.
    #[error("no {kind} found after {attempts} attempts")]
    AttemptsExhausted {
        /// What was being sampled.
        kind: SampleKind,
        /// Number of draws made.
        attempts: usize,
    },
}

/// Result type for sampler operations.
pub type Result<T> = std::result::Result<T, SampleError>;
