//! High-level facade for the Asset Version Tracker.
//!
//! Provides the unified entry point for presentation layers driving the
//! select -> preview -> apply cycle: record desired versions per asset,
//! preview the resulting commands, and on acceptance promote them into the
//! next working set.
//!
//! # Key Types
//!
//! - [`Tracker`] -- Owns the working set and the diff/apply cycle
//! - [`SdkError`] -- Facade-level lookup failures plus wrapped model errors
//!
//! # Example
//!
//! ```
//! use avt_sdk::{AssetPackage, Tracker, VersionedAsset};
//!
//! let camera = AssetPackage::new(
//!     "camera_asset",
//!     [
//!         ("camera_asset", VersionedAsset::bound(["v1", "v2"], "v1", "hub_camera")),
//!         ("camera_rig", VersionedAsset::detached(["rig_v1", "rig_v2"])),
//!     ],
//! );
//!
//! let mut tracker = Tracker::new(vec![camera]);
//! tracker.set_desired(0, "camera_asset", Some("v2".into())).unwrap();
//!
//! let preview = tracker.preview().unwrap();
//! assert_eq!(preview[0].change_count(), 1);
//!
//! tracker.apply().unwrap();
//! assert!(tracker.preview().unwrap()[0].is_clean());
//! ```

pub mod error;
pub mod tracker;

pub use error::{SdkError, SdkResult};
pub use tracker::Tracker;

// Re-export key types
pub use avt_apply::{apply_asset, apply_package, apply_packages, AppliedAsset};
pub use avt_diff::{diff_package, diff_packages, ChildChange, PackageDiff};
pub use avt_model::{AssetPackage, ChangeKind, ModelError, VersionId, VersionedAsset};
