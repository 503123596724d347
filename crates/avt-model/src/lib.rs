//! Core model for the Asset Version Tracker (AVT).
//!
//! Tracks the version state of production assets grouped into packages: one
//! root asset plus associated child assets, each with a list of published
//! versions, an optional current binding in the scene, and a mutable desired
//! version. Everything is an in-memory value; the only mutable slot is the
//! desired version, changed through a checked setter.
//!
//! # Key Types
//!
//! - [`VersionId`] -- Opaque version identifier, ordered lexicographically
//! - [`VersionedAsset`] -- One asset's available/current/desired version state
//! - [`ChangeKind`] -- The operation needed to reach the desired state
//! - [`AssetPackage`] -- A root asset plus its children, keyed by asset type
//! - [`ModelError`] -- Validation and lookup failures

pub mod asset;
pub mod change;
pub mod error;
pub mod package;
pub mod version;

pub use asset::VersionedAsset;
pub use change::ChangeKind;
pub use error::{ModelError, ModelResult};
pub use package::AssetPackage;
pub use version::VersionId;
