//! Diff engine for the Asset Version Tracker.
//!
//! Computes the declarative diff between a package's current and desired
//! version state, rendered as human-readable command descriptors for a
//! preview. Diffing is pure: it never touches the packages it reads.
//!
//! # Key Types
//!
//! - [`PackageDiff`] -- One package's diff: clean, a root change, or child changes
//! - [`ChildChange`] -- A changed child with its asset-type key
//! - [`diff_package`] / [`diff_packages`] -- The diff entry points

pub mod package_diff;

pub use package_diff::{diff_package, diff_packages, ChildChange, PackageDiff};
