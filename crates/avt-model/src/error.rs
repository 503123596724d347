//! Error types for the model crate.

use thiserror::Error;

use crate::version::VersionId;

/// Errors that can occur while constructing or mutating model values.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ModelError {
    /// A binding site was supplied without a current version.
    #[error("binding site {site:?} supplied without a current version; both must be given together")]
    BindingWithoutVersion { site: String },

    /// A current version was supplied without a binding site.
    #[error("current version {version} supplied without a binding site; both must be given together")]
    VersionWithoutBinding { version: VersionId },

    /// The requested desired version is not one of the published versions.
    #[error("version {version} is not available (available: {available:?})")]
    VersionNotAvailable {
        version: VersionId,
        available: Vec<VersionId>,
    },

    /// The package's root key does not name any of its assets.
    #[error("root asset key not found in package: {key:?}")]
    RootNotFound { key: String },
}

/// Convenience alias for model results.
pub type ModelResult<T> = Result<T, ModelError>;
