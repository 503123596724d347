//! State promotion for the Asset Version Tracker.
//!
//! Turns accepted desired state into the next current-state generation:
//! desired versions are promoted to current, removal requests detach assets,
//! and a root lifecycle change resets the root's children.
//!
//! # Key Types
//!
//! - [`AppliedAsset`] -- Whether an asset was carried forward or rebuilt
//! - [`apply_asset`] / [`apply_package`] / [`apply_packages`] -- Promotion entry points

pub mod promotion;

pub use promotion::{apply_asset, apply_package, apply_packages, AppliedAsset};
