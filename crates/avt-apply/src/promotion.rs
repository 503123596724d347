//! Promotion of desired state into the next current-state generation.
//!
//! All entry points consume their input: a superseded generation must not be
//! retained by the caller, and taking ownership enforces that. Values with
//! nothing to do are moved into the next generation rather than rebuilt.

use avt_model::{AssetPackage, ChangeKind, ModelResult, VersionId, VersionedAsset};
use tracing::debug;

/// The result of applying one asset: carried forward or rebuilt.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AppliedAsset {
    /// The asset had nothing to do and is carried forward untouched.
    Reused(VersionedAsset),
    /// The asset was rebuilt with promoted or cleared state.
    Replaced(VersionedAsset),
}

impl AppliedAsset {
    /// Returns `true` if the asset was carried forward untouched.
    pub fn is_reused(&self) -> bool {
        matches!(self, AppliedAsset::Reused(_))
    }

    /// The asset to put in the next generation.
    pub fn into_inner(self) -> VersionedAsset {
        match self {
            AppliedAsset::Reused(asset) | AppliedAsset::Replaced(asset) => asset,
        }
    }
}

/// Compute the next generation of a single asset.
///
/// The type hint names the asset's slot in its package and seeds the binding
/// site synthesized for created assets.
///
/// Every rebuilt asset starts its next cycle with its desired version equal
/// to its new current version, so re-diffing an applied asset reports
/// nothing to do.
pub fn apply_asset(asset: VersionedAsset, type_hint: &str) -> AppliedAsset {
    match asset.classify() {
        ChangeKind::Unchanged => AppliedAsset::Reused(asset),
        ChangeKind::Remove { .. } => AppliedAsset::Replaced(VersionedAsset::detached(
            asset.into_available_versions(),
        )),
        ChangeKind::Create { version } => {
            let site = synthesize_site(type_hint, &version);
            AppliedAsset::Replaced(VersionedAsset::bound(
                asset.into_available_versions(),
                version,
                site,
            ))
        }
        ChangeKind::Update { site, to, .. } => AppliedAsset::Replaced(VersionedAsset::bound(
            asset.into_available_versions(),
            to,
            site,
        )),
    }
}

/// Binding site for a newly created asset, derived from its package slot and
/// the version being created.
fn synthesize_site(type_hint: &str, version: &VersionId) -> String {
    if type_hint.is_empty() {
        format!("{version}_node")
    } else {
        format!("{type_hint}_{version}_node")
    }
}

/// Compute the next generation of a package.
///
/// A package with nothing to do comes back as the same value. A root
/// lifecycle change rebuilds the package around the applied root and resets
/// every child to a fresh detached asset, whatever the children themselves
/// asked for: children cannot outlive a removed root, and a recreated root
/// starts with none of them bound. With a stable root, each child is applied
/// independently.
pub fn apply_package(package: AssetPackage) -> ModelResult<AssetPackage> {
    let root_change = package.root_asset()?.classify();
    let children_quiet = package
        .child_assets()
        .all(|(_, child)| child.classify().is_unchanged());

    if root_change.is_unchanged() && children_quiet {
        return Ok(package);
    }

    let root_key = package.root_key().to_owned();
    debug!(root = %root_key, change = %root_change, "applying package");

    let next: Vec<(String, VersionedAsset)> = if root_change.is_unchanged() {
        // Stable root: each child promotes on its own.
        package
            .into_assets()
            .into_iter()
            .map(|(key, asset)| {
                let asset = if key == root_key {
                    asset
                } else {
                    apply_asset(asset, &key).into_inner()
                };
                (key, asset)
            })
            .collect()
    } else {
        // Root lifecycle change: children go back to "not yet created".
        package
            .into_assets()
            .into_iter()
            .map(|(key, asset)| {
                let asset = if key == root_key {
                    apply_asset(asset, &root_key).into_inner()
                } else {
                    VersionedAsset::detached(asset.into_available_versions())
                };
                (key, asset)
            })
            .collect()
    };

    Ok(AssetPackage::new(root_key, next))
}

/// Apply every package, producing the next working set in input order.
pub fn apply_packages(packages: Vec<AssetPackage>) -> ModelResult<Vec<AssetPackage>> {
    packages.into_iter().map(apply_package).collect()
}
