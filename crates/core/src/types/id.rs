//! Newtype ID for type-safe item references.
//!
//! The remote catalog identifies items by opaque record strings (e.g.
//! `"rec1JZlfCIBOPdcT2"`), so the wrapper is string-backed rather than
//! numeric. Uniqueness of ids within a cart is an invariant maintained by
//! the store, not by this type.

use serde::{Deserialize, Serialize};

/// A type-safe item identifier.
///
/// Wraps the opaque id string returned by the remote catalog. Compared
/// byte-for-byte; never parsed or interpreted.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ItemId(String);

impl ItemId {
    /// Create a new item ID.
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Get the underlying id string.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for ItemId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for ItemId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl From<&str> for ItemId {
    fn from(id: &str) -> Self {
        Self(id.to_owned())
    }
}

impl From<ItemId> for String {
    fn from(id: ItemId) -> Self {
        id.0
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_item_id_display() {
        let id = ItemId::new("rec1JZlfCIBOPdcT2");
        assert_eq!(id.to_string(), "rec1JZlfCIBOPdcT2");
        assert_eq!(id.as_str(), "rec1JZlfCIBOPdcT2");
    }

    #[test]
    fn test_item_id_serde_transparent() {
        let id = ItemId::from("abc");
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, "\"abc\"");

        let back: ItemId = serde_json::from_str(&json).unwrap();
        assert_eq!(back, id);
    }
}
