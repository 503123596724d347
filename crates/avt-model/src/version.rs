//! Version identifiers.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Identifier for one published version of an asset.
///
/// Version identifiers are opaque tokens handed in by the publishing side
/// ("v3", "anim_v12", a URI). The tracker never parses them; ordering is
/// lexicographic, which is what the available-version listing sorts by.
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct VersionId(String);

impl VersionId {
    /// Create a version identifier from any string-like token.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// The identifier as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for VersionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "VersionId({})", self.0)
    }
}

impl fmt::Display for VersionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for VersionId {
    fn from(id: &str) -> Self {
        Self(id.to_owned())
    }
}

impl From<String> for VersionId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ordering_is_lexicographic() {
        assert!(VersionId::from("v2") > VersionId::from("v1"));
        assert!(VersionId::from("v10") < VersionId::from("v2"));
        assert!(VersionId::from("a") < VersionId::from("b"));
    }

    #[test]
    fn display_is_the_raw_token() {
        assert_eq!(VersionId::from("anim_v12").to_string(), "anim_v12");
    }

    #[test]
    fn equal_tokens_are_equal() {
        assert_eq!(VersionId::new("v1"), VersionId::from("v1".to_string()));
    }
}
