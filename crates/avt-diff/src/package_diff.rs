//! Package-level diff: which assets change, rendered per package.
//!
//! A root-level change supersedes all child reporting, and a root-level
//! change during apply resets the children (`avt-apply`). Those are two
//! independent policies that happen to agree; each lives in its own branch
//! here and there so they stay separately testable.

use serde::{Deserialize, Serialize};

use avt_model::{AssetPackage, ChangeKind, ModelResult};

/// One package's rendered diff.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum PackageDiff {
    /// No visible change for this package.
    Clean,
    /// The root asset itself changes. Children are not inspected: whatever
    /// they asked for is superseded by the root's lifecycle change.
    Root {
        /// The root's binding site before the change, if it was bound.
        binding: Option<String>,
        /// The root's operation.
        change: ChangeKind,
    },
    /// The root is stable and these children change.
    Children {
        /// The root's binding site, if bound.
        binding: Option<String>,
        /// Changed children in package order. Never empty: a package whose
        /// children are all quiet reports [`PackageDiff::Clean`] instead.
        changes: Vec<ChildChange>,
    },
}

/// A changed child asset, addressed by its asset-type key.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChildChange {
    /// Asset-type key of the changed child.
    pub key: String,
    /// The child's operation.
    pub change: ChangeKind,
}

impl PackageDiff {
    /// Returns `true` if the package has nothing to report.
    pub fn is_clean(&self) -> bool {
        matches!(self, PackageDiff::Clean)
    }

    /// Number of reported changes.
    pub fn change_count(&self) -> usize {
        match self {
            PackageDiff::Clean => 0,
            PackageDiff::Root { .. } => 1,
            PackageDiff::Children { changes, .. } => changes.len(),
        }
    }

    /// The root's binding site the diff was computed under, if any.
    pub fn binding(&self) -> Option<&str> {
        match self {
            PackageDiff::Clean => None,
            PackageDiff::Root { binding, .. } | PackageDiff::Children { binding, .. } => {
                binding.as_deref()
            }
        }
    }
}

/// Compute the rendered diff for one package.
///
/// A changed root is reported alone. With a stable root, changed children
/// are listed in package order; quiet children are omitted, and a package
/// with nothing to report is [`PackageDiff::Clean`].
pub fn diff_package(package: &AssetPackage) -> ModelResult<PackageDiff> {
    let root = package.root_asset()?;
    let binding = root.binding_name().map(str::to_owned);

    let root_change = root.classify();
    if !root_change.is_unchanged() {
        return Ok(PackageDiff::Root {
            binding,
            change: root_change,
        });
    }

    let changes: Vec<ChildChange> = package
        .child_assets()
        .filter_map(|(key, child)| {
            let change = child.classify();
            (!change.is_unchanged()).then(|| ChildChange {
                key: key.to_owned(),
                change,
            })
        })
        .collect();

    if changes.is_empty() {
        Ok(PackageDiff::Clean)
    } else {
        Ok(PackageDiff::Children { binding, changes })
    }
}

/// Compute diffs for a list of packages, one result per package, in input
/// order.
pub fn diff_packages(packages: &[AssetPackage]) -> ModelResult<Vec<PackageDiff>> {
    packages.iter().map(diff_package).collect()
}
