//! Error types for the progression engine.

use thiserror::Error;

/// A [`crate::ProgressionConfig`] could not be built from the supplied parameters.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConfigError {
    #[error("level table is empty")]
    EmptyLevels,

    #[error("level 0 must have threshold 0, found {0}")]
    BaseThreshold(f64),

    #[error("level {index} threshold {threshold} does not exceed the previous level")]
    ThresholdOrder { index: usize, threshold: f64 },

    #[error("level {index} has a negative or non-finite value")]
    InvalidLevelValue { index: usize },

    #[error("invalid curve parameter `{0}`")]
    InvalidCurve(&'static str),

    #[error("economy settings row is missing")]
    MissingSettings,
}

/// The caller-supplied identity payload was rejected before storage was touched.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum InputError {
    #[error("missing external id")]
    MissingExternalId,

    #[error("display name exceeds {max} characters")]
    DisplayNameTooLong { max: usize },

    #[error("display name contains control characters")]
    DisplayNameControlChars,
}

/// The record store refused or failed a read or a commit.
///
/// Any of these aborts the whole reconciliation; no record is left partially updated.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    #[error("player `{0}` was modified concurrently")]
    Conflict(String),

    #[error("player `{0}` already exists")]
    Duplicate(String),

    #[error("player `{0}` does not exist")]
    NotFound(String),

    #[error("referrer `{0}` does not exist")]
    MissingReferrer(String),

    #[error("store unavailable: {0}")]
    Unavailable(String),
}

/// Umbrella error for a single reconciliation call.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SyncError {
    #[error("invalid input: {0}")]
    Input(#[from] InputError),

    #[error("invalid config: {0}")]
    Config(#[from] ConfigError),

    #[error("store error: {0}")]
    Store(#[from] StoreError),
}
