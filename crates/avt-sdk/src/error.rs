//! Error types for the tracker facade.

use thiserror::Error;

use avt_model::ModelError;

/// Errors surfaced by the tracker facade.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SdkError {
    /// The package index is outside the working set.
    #[error("package index {index} out of range (working set has {len})")]
    PackageOutOfRange { index: usize, len: usize },

    /// No asset with this key exists in the addressed package.
    #[error("no asset {key:?} in package {package}")]
    UnknownAsset { package: usize, key: String },

    /// A model-level validation or lookup failure.
    #[error("model error: {0}")]
    Model(#[from] ModelError),
}

/// Convenience alias for facade results.
pub type SdkResult<T> = Result<T, SdkError>;
