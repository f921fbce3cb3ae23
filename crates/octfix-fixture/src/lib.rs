#![warn(missing_docs)]

//! Randomized, self-validating ray/box intersection fixtures.
//!
//! Each fixture is a sampled box, its eight octant children, its diagonal,
//! one ray guaranteed to miss it and one guaranteed to hit it, plus the
//! hit's reflected ray, entered octant and entry distance. Fixtures render
//! as brace-initializer text for direct inclusion in a test suite.
//!
//! # Example
//!
//! ```
//! use octfix_fixture::{write_fixtures, FixtureGenerator, FixtureSettings};
//!
//! let settings = FixtureSettings {
//!     iterations: 2,
//!     seed: Some(1),
//!     ..Default::default()
//! };
//! let fixtures = FixtureGenerator::new(settings)?.collect::<Result<Vec<_>, _>>()?;
//!
//! let mut out = Vec::new();
//! write_fixtures(&mut out, &fixtures)?;
//! assert!(String::from_utf8(out).unwrap().ends_with("},\n"));
//! # Ok::<(), octfix_fixture::FixtureError>(())
//! ```

pub mod error;
pub mod fixture;
pub mod settings;
pub mod text;

pub use error::{FixtureError, Result};
pub use fixture::{clock_seed, Fixture, FixtureGenerator};
pub use settings::{FixtureSettings, IterationRanges};
pub use text::{write_fixture, write_fixtures, BoxText, RayText, VecText};

pub use octfix_kernel_raytrace::ChildLookup;
