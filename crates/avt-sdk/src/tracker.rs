//! The tracker facade: owns the working set and the diff/apply cycle.

use avt_apply::apply_packages;
use avt_diff::{diff_packages, PackageDiff};
use avt_model::{AssetPackage, VersionId};
use tracing::debug;

use crate::error::{SdkError, SdkResult};

/// Owns the current generation of packages and drives the
/// select -> preview -> apply cycle for a presentation layer.
///
/// The caller records desired versions with [`Tracker::set_desired`] as the
/// user makes choices, previews the resulting commands with
/// [`Tracker::preview`], and on acceptance promotes them with
/// [`Tracker::apply`], which replaces the working set with the next
/// generation. Previews after an apply run against the new generation.
#[derive(Clone, Debug, Default)]
pub struct Tracker {
    packages: Vec<AssetPackage>,
}

impl Tracker {
    /// Create a tracker over an initial working set.
    pub fn new(packages: Vec<AssetPackage>) -> Self {
        Self { packages }
    }

    /// The current generation of packages, in working-set order.
    pub fn packages(&self) -> &[AssetPackage] {
        &self.packages
    }

    /// One package by index.
    pub fn package(&self, index: usize) -> Option<&AssetPackage> {
        self.packages.get(index)
    }

    /// One package by index, mutably.
    pub fn package_mut(&mut self, index: usize) -> Option<&mut AssetPackage> {
        self.packages.get_mut(index)
    }

    /// Number of packages in the working set.
    pub fn len(&self) -> usize {
        self.packages.len()
    }

    /// Returns `true` if the working set is empty.
    pub fn is_empty(&self) -> bool {
        self.packages.is_empty()
    }

    /// Record the desired version for one asset.
    ///
    /// `None` requests removal. Called once per user selection event; a
    /// version the asset does not publish is rejected and the asset's
    /// previous request stays in place.
    pub fn set_desired(
        &mut self,
        package: usize,
        key: &str,
        version: Option<VersionId>,
    ) -> SdkResult<()> {
        let len = self.packages.len();
        let pkg = self
            .packages
            .get_mut(package)
            .ok_or(SdkError::PackageOutOfRange {
                index: package,
                len,
            })?;
        let asset = pkg.get_mut(key).ok_or_else(|| SdkError::UnknownAsset {
            package,
            key: key.to_owned(),
        })?;
        asset.set_desired(version)?;
        Ok(())
    }

    /// Render the pending diff for every package, in working-set order.
    pub fn preview(&self) -> SdkResult<Vec<PackageDiff>> {
        Ok(diff_packages(&self.packages)?)
    }

    /// Promote the pending desired state into the next generation.
    ///
    /// The previous generation is consumed and replaced; the returned slice
    /// is the new working set that subsequent previews run against.
    pub fn apply(&mut self) -> SdkResult<&[AssetPackage]> {
        // Surface dangling root keys before consuming the current generation.
        for package in &self.packages {
            package.root_asset()?;
        }

        let current = std::mem::take(&mut self.packages);
        let count = current.len();
        self.packages = apply_packages(current)?;
        debug!(packages = count, "applied working set");
        Ok(&self.packages)
    }
}
