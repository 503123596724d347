//! Asset packages: a root asset plus its child assets.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::asset::VersionedAsset;
use crate::error::{ModelError, ModelResult};

/// An ordered grouping of tracked assets with one designated root.
///
/// Entries are keyed by asset type ("camera_asset", "rig_puppet") and held in
/// key order, which is the package order every listing and diff follows. The
/// root asset's lifecycle gates its children: recreating or removing the root
/// invalidates every child (see `avt-apply`).
///
/// Construction does not check that `root_key` names an entry; a dangling
/// root key surfaces as [`ModelError::RootNotFound`] when the root is
/// accessed.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct AssetPackage {
    root_key: String,
    assets: BTreeMap<String, VersionedAsset>,
}

impl AssetPackage {
    /// Create a package from a root key and its assets.
    pub fn new<I, K>(root_key: impl Into<String>, assets: I) -> Self
    where
        I: IntoIterator<Item = (K, VersionedAsset)>,
        K: Into<String>,
    {
        Self {
            root_key: root_key.into(),
            assets: assets
                .into_iter()
                .map(|(key, asset)| (key.into(), asset))
                .collect(),
        }
    }

    /// The key naming the root asset.
    pub fn root_key(&self) -> &str {
        &self.root_key
    }

    /// The root asset.
    pub fn root_asset(&self) -> ModelResult<&VersionedAsset> {
        self.assets
            .get(&self.root_key)
            .ok_or_else(|| ModelError::RootNotFound {
                key: self.root_key.clone(),
            })
    }

    /// The root asset, mutably.
    pub fn root_asset_mut(&mut self) -> ModelResult<&mut VersionedAsset> {
        self.assets
            .get_mut(&self.root_key)
            .ok_or_else(|| ModelError::RootNotFound {
                key: self.root_key.clone(),
            })
    }

    /// Every entry except the root, in package order.
    pub fn child_assets(&self) -> impl Iterator<Item = (&str, &VersionedAsset)> + '_ {
        self.assets
            .iter()
            .filter(|(key, _)| **key != self.root_key)
            .map(|(key, asset)| (key.as_str(), asset))
    }

    /// Every entry except the root, mutably, in package order.
    pub fn child_assets_mut(&mut self) -> impl Iterator<Item = (&str, &mut VersionedAsset)> + '_ {
        let root_key = self.root_key.clone();
        self.assets
            .iter_mut()
            .filter(move |(key, _)| **key != root_key)
            .map(|(key, asset)| (key.as_str(), asset))
    }

    /// Get an asset by its type key.
    pub fn get(&self, key: &str) -> Option<&VersionedAsset> {
        self.assets.get(key)
    }

    /// Get an asset by its type key, mutably.
    pub fn get_mut(&mut self, key: &str) -> Option<&mut VersionedAsset> {
        self.assets.get_mut(key)
    }

    /// Insert or replace an asset, returning the previous entry if any.
    pub fn insert(
        &mut self,
        key: impl Into<String>,
        asset: VersionedAsset,
    ) -> Option<VersionedAsset> {
        self.assets.insert(key.into(), asset)
    }

    /// Number of assets, root included.
    pub fn len(&self) -> usize {
        self.assets.len()
    }

    /// Returns `true` if the package holds no assets.
    pub fn is_empty(&self) -> bool {
        self.assets.is_empty()
    }

    /// All entries in package order, root included.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &VersionedAsset)> + '_ {
        self.assets.iter().map(|(key, asset)| (key.as_str(), asset))
    }

    /// Asset-type keys in package order.
    pub fn keys(&self) -> impl Iterator<Item = &str> + '_ {
        self.assets.keys().map(String::as_str)
    }

    /// Consume the package, yielding its entries in package order.
    pub fn into_assets(self) -> BTreeMap<String, VersionedAsset> {
        self.assets
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn camera_package() -> AssetPackage {
        AssetPackage::new(
            "camera_asset",
            [
                ("camera_asset", VersionedAsset::bound(["v1"], "v1", "hub_camera")),
                ("camera_rig", VersionedAsset::detached(["rig_v1", "rig_v2"])),
                ("animation_curves", VersionedAsset::detached(["anim_v1"])),
            ],
        )
    }

    #[test]
    fn root_asset_is_looked_up_by_key() {
        let package = camera_package();
        assert_eq!(package.root_key(), "camera_asset");
        assert_eq!(
            package.root_asset().unwrap().binding_name(),
            Some("hub_camera")
        );
    }

    #[test]
    fn dangling_root_key_fails_on_access_not_construction() {
        let package = AssetPackage::new(
            "missing",
            [("camera_rig", VersionedAsset::detached(["rig_v1"]))],
        );
        assert_eq!(package.len(), 1);
        assert_eq!(
            package.root_asset().unwrap_err(),
            ModelError::RootNotFound {
                key: "missing".into()
            }
        );
    }

    #[test]
    fn children_are_all_entries_except_the_root() {
        let package = camera_package();
        let child_keys: Vec<&str> = package.child_assets().map(|(key, _)| key).collect();
        assert_eq!(child_keys, ["animation_curves", "camera_rig"]);
    }

    #[test]
    fn children_can_be_retargeted_in_place() {
        let mut package = camera_package();
        for (_, child) in package.child_assets_mut() {
            child.set_desired(None).unwrap();
        }
        assert!(package
            .child_assets()
            .all(|(_, child)| child.desired_version().is_none()));
        // The root is untouched.
        assert_eq!(
            package.root_asset().unwrap().desired_version(),
            Some(&"v1".into())
        );
    }

    #[test]
    fn package_order_is_key_order() {
        let package = camera_package();
        let keys: Vec<&str> = package.keys().collect();
        assert_eq!(keys, ["animation_curves", "camera_asset", "camera_rig"]);
        assert_eq!(package.iter().count(), 3);
    }
}
