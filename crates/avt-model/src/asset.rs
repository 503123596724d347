//! The atomic trackable entity: one asset's version state.

use std::fmt;

use serde::Serialize;

use crate::change::ChangeKind;
use crate::error::{ModelError, ModelResult};
use crate::version::VersionId;

/// The bound half of an asset's state: the version actually in the scene and
/// the site it occupies there. The two exist together or not at all.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
struct Binding {
    version: VersionId,
    site: String,
}

/// An individual tracked asset: its published versions, what is currently
/// bound in the scene, and the version a caller wants next.
///
/// Apart from the desired version, a `VersionedAsset` is an immutable value.
/// The current version and binding site reflect what is actually in the
/// scene and are fixed at construction; a new value with different current
/// state is produced by the apply step in `avt-apply`, never by mutation.
///
/// `Deserialize` is deliberately not derived: the paired current/binding
/// check in [`VersionedAsset::new`] must hold for every constructed value.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct VersionedAsset {
    /// Published versions, newest first. Fixed at construction.
    available_versions: Vec<VersionId>,
    /// Current scene state, if the asset exists there.
    binding: Option<Binding>,
    /// The version to promote to on the next apply; `None` requests removal.
    desired_version: Option<VersionId>,
}

impl VersionedAsset {
    /// Create an asset from optional current state.
    ///
    /// The current version and binding site must be supplied together: an
    /// asset either already exists in the scene (both present) or has not
    /// been created yet (both absent). Supplying exactly one fails without
    /// constructing anything. The desired version starts at the current
    /// version.
    ///
    /// The current version is ground truth from the scene and is not
    /// required to appear in `available_versions`; only desired versions
    /// set later are checked for membership.
    pub fn new<I, V>(
        available_versions: I,
        current_version: Option<VersionId>,
        binding_name: Option<String>,
    ) -> ModelResult<Self>
    where
        I: IntoIterator<Item = V>,
        V: Into<VersionId>,
    {
        match (current_version, binding_name) {
            (Some(version), Some(site)) => Ok(Self::bound(available_versions, version, site)),
            (None, None) => Ok(Self::detached(available_versions)),
            (Some(version), None) => Err(ModelError::VersionWithoutBinding { version }),
            (None, Some(site)) => Err(ModelError::BindingWithoutVersion { site }),
        }
    }

    /// An asset already bound in the scene at `site` with `current_version`.
    pub fn bound<I, V>(
        available_versions: I,
        current_version: impl Into<VersionId>,
        site: impl Into<String>,
    ) -> Self
    where
        I: IntoIterator<Item = V>,
        V: Into<VersionId>,
    {
        let version = current_version.into();
        Self {
            available_versions: sort_newest_first(available_versions),
            desired_version: Some(version.clone()),
            binding: Some(Binding {
                version,
                site: site.into(),
            }),
        }
    }

    /// An asset not yet created in the scene.
    pub fn detached<I, V>(available_versions: I) -> Self
    where
        I: IntoIterator<Item = V>,
        V: Into<VersionId>,
    {
        Self {
            available_versions: sort_newest_first(available_versions),
            binding: None,
            desired_version: None,
        }
    }

    /// Published versions, newest first.
    pub fn available_versions(&self) -> &[VersionId] {
        &self.available_versions
    }

    /// Consume the asset, yielding its published versions.
    pub fn into_available_versions(self) -> Vec<VersionId> {
        self.available_versions
    }

    /// The version currently bound in the scene, if any.
    pub fn current_version(&self) -> Option<&VersionId> {
        self.binding.as_ref().map(|b| &b.version)
    }

    /// The site this asset occupies in the scene, if bound.
    pub fn binding_name(&self) -> Option<&str> {
        self.binding.as_ref().map(|b| b.site.as_str())
    }

    /// The version requested for the next apply cycle.
    pub fn desired_version(&self) -> Option<&VersionId> {
        self.desired_version.as_ref()
    }

    /// Request a version for the next apply cycle.
    ///
    /// `None` always succeeds and clears the request, asking for removal.
    /// A concrete version must be one of the published versions; otherwise
    /// the call fails and the previous request stays in place.
    pub fn set_desired(&mut self, version: Option<VersionId>) -> ModelResult<()> {
        let Some(version) = version else {
            self.desired_version = None;
            return Ok(());
        };
        if !self.available_versions.contains(&version) {
            return Err(ModelError::VersionNotAvailable {
                version,
                available: self.available_versions.clone(),
            });
        }
        self.desired_version = Some(version);
        Ok(())
    }

    /// Classify the operation needed to reach the desired state.
    ///
    /// # Examples
    ///
    /// ```
    /// use avt_model::VersionedAsset;
    ///
    /// let mut asset = VersionedAsset::bound(["1", "2"], "1", "hub_a");
    /// asset.set_desired(Some("2".into())).unwrap();
    /// assert_eq!(asset.classify().to_string(), "update hub_a from 1 to 2");
    /// ```
    pub fn classify(&self) -> ChangeKind {
        match (&self.binding, &self.desired_version) {
            (None, None) => ChangeKind::Unchanged,
            (Some(b), Some(desired)) if b.version == *desired => ChangeKind::Unchanged,
            (None, Some(desired)) => ChangeKind::Create {
                version: desired.clone(),
            },
            (Some(b), None) => ChangeKind::Remove {
                site: b.site.clone(),
            },
            (Some(b), Some(desired)) => ChangeKind::Update {
                site: b.site.clone(),
                from: b.version.clone(),
                to: desired.clone(),
            },
        }
    }
}

impl fmt::Display for VersionedAsset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let current = self.current_version().map_or("-", VersionId::as_str);
        let desired = self.desired_version().map_or("-", VersionId::as_str);
        match self.binding_name() {
            Some(site) => write!(f, "{current} -> {desired} @ {site}"),
            None => write!(f, "{current} -> {desired}"),
        }
    }
}

fn sort_newest_first<I, V>(versions: I) -> Vec<VersionId>
where
    I: IntoIterator<Item = V>,
    V: Into<VersionId>,
{
    let mut versions: Vec<VersionId> = versions.into_iter().map(Into::into).collect();
    versions.sort_by(|a, b| b.cmp(a));
    versions
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;

    fn bound_asset() -> VersionedAsset {
        VersionedAsset::bound(["1", "2", "3", "4"], "1", "h")
    }

    #[test]
    fn construction_requires_paired_current_state() {
        let err = VersionedAsset::new(["1", "2"], Some("1".into()), None).unwrap_err();
        assert_eq!(
            err,
            ModelError::VersionWithoutBinding { version: "1".into() }
        );

        let err = VersionedAsset::new(["1", "2"], None, Some("h".into())).unwrap_err();
        assert_eq!(err, ModelError::BindingWithoutVersion { site: "h".into() });

        assert!(VersionedAsset::new(["1", "2"], None, None).is_ok());
        assert!(VersionedAsset::new(["1", "2"], Some("1".into()), Some("h".into())).is_ok());
    }

    #[test]
    fn available_versions_stored_newest_first() {
        let asset = VersionedAsset::detached(["1", "3", "2", "4"]);
        let stored: Vec<&str> = asset.available_versions().iter().map(VersionId::as_str).collect();
        assert_eq!(stored, ["4", "3", "2", "1"]);
    }

    #[test]
    fn desired_starts_at_current() {
        let asset = bound_asset();
        assert_eq!(asset.desired_version(), Some(&"1".into()));
        let asset = VersionedAsset::detached(["1"]);
        assert_eq!(asset.desired_version(), None);
    }

    #[test]
    fn clearing_desired_always_succeeds() {
        let mut asset = bound_asset();
        asset.set_desired(None).unwrap();
        assert_eq!(asset.desired_version(), None);

        let mut asset = VersionedAsset::detached(["1"]);
        asset.set_desired(None).unwrap();
        assert_eq!(asset.desired_version(), None);
    }

    #[test]
    fn unknown_desired_version_is_rejected_without_mutation() {
        let mut asset = bound_asset();
        let err = asset.set_desired(Some("5".into())).unwrap_err();
        assert!(matches!(err, ModelError::VersionNotAvailable { .. }));
        assert_eq!(asset.desired_version(), Some(&"1".into()));
    }

    #[test]
    fn classification_covers_all_transitions() {
        let mut asset = bound_asset();
        assert_eq!(asset.classify().to_string(), "still");

        asset.set_desired(Some("2".into())).unwrap();
        assert_eq!(asset.classify().to_string(), "update h from 1 to 2");

        asset.set_desired(None).unwrap();
        assert_eq!(asset.classify().to_string(), "remove h");

        let mut asset = VersionedAsset::detached(["1", "2", "3", "4"]);
        assert_eq!(asset.classify().to_string(), "still");
        asset.set_desired(Some("1".into())).unwrap();
        assert_eq!(asset.classify().to_string(), "create 1");
    }

    #[test]
    fn equality_is_structural() {
        assert_eq!(bound_asset(), bound_asset());

        let mut retargeted = bound_asset();
        retargeted.set_desired(Some("2".into())).unwrap();
        assert_ne!(bound_asset(), retargeted);
    }

    #[test]
    fn current_version_may_predate_available_list() {
        let asset = VersionedAsset::bound(["2", "3"], "1", "h");
        assert_eq!(asset.current_version(), Some(&"1".into()));
        assert_eq!(asset.classify().to_string(), "still");
    }

    #[test]
    fn display_summarizes_state() {
        let mut asset = bound_asset();
        asset.set_desired(Some("2".into())).unwrap();
        assert_eq!(asset.to_string(), "1 -> 2 @ h");
        assert_eq!(VersionedAsset::detached(["1"]).to_string(), "- -> -");
    }

    proptest! {
        #[test]
        fn stored_versions_are_always_descending(
            versions in proptest::collection::vec("[a-z0-9]{1,8}", 0..16),
        ) {
            let asset = VersionedAsset::detached(versions.clone());
            prop_assert_eq!(asset.available_versions().len(), versions.len());
            for pair in asset.available_versions().windows(2) {
                prop_assert!(pair[0] >= pair[1]);
            }
        }

        #[test]
        fn rejected_set_desired_leaves_whole_value_unchanged(
            versions in proptest::collection::vec("[a-z0-9]{1,8}", 1..8),
            outsider in "[A-Z]{9}",
        ) {
            // Available tokens are lowercase, so the outsider never collides.
            let mut asset =
                VersionedAsset::bound(versions.clone(), versions[0].clone(), "site_a");
            let before = asset.clone();
            prop_assert!(asset.set_desired(Some(outsider.into())).is_err());
            prop_assert_eq!(asset, before);
        }
    }
}
