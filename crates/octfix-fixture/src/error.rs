//! Error types for fixture generation.

use octfix_kernel_sampler::SampleError;
use thiserror::Error;

/// Errors that can occur while generating or writing fixtures.
#[derive(Error, Debug)]
pub enum FixtureError {
    /// Writing the fixture text failed.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// A box or ray could not be sampled.
    #[error("sampling failed: {0}")]
    Sample(#[from] SampleError),

    /// Settings describe ranges that cannot produce valid fixtures.
    #[error("invalid settings: {0}")]
    InvalidSettings(String),

    /// The settings file is not valid TOML for [`crate::FixtureSettings`].
    #[error("config parse error: {0}")]
    Config(#[from] toml::de::Error),

    /// Settings could not be rendered as TOML.
    #[error("config write error: {0}")]
    ConfigWrite(#[from] toml::ser::Error),
}

/// Result type for fixture operations.
pub type Result<T> = std::result::Result<T, FixtureError>;
