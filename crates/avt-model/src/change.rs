//! Change classification for a tracked asset.
//!
//! A [`ChangeKind`] is the operation needed to take an asset from its current
//! to its desired version. Its `Display` form is the human-readable command
//! text shown to the user in a diff preview.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::version::VersionId;

/// The operation needed to reach an asset's desired state.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum ChangeKind {
    /// Current and desired agree; nothing to do.
    Unchanged,
    /// The asset does not exist in the scene yet and should be created at
    /// this version.
    Create {
        /// The version to create.
        version: VersionId,
    },
    /// The asset is bound and should be removed from its site.
    Remove {
        /// The binding site to remove.
        site: String,
    },
    /// The asset should move to another version at its existing site.
    Update {
        /// The binding site the asset occupies.
        site: String,
        /// The version currently bound.
        from: VersionId,
        /// The version to promote to.
        to: VersionId,
    },
}

impl ChangeKind {
    /// Returns `true` if no operation is needed.
    pub fn is_unchanged(&self) -> bool {
        matches!(self, ChangeKind::Unchanged)
    }
}

impl fmt::Display for ChangeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ChangeKind::Unchanged => write!(f, "still"),
            ChangeKind::Create { version } => write!(f, "create {version}"),
            ChangeKind::Remove { site } => write!(f, "remove {site}"),
            ChangeKind::Update { site, from, to } => {
                write!(f, "update {site} from {from} to {to}")
            }
        }
    }
}
