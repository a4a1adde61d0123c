use serde::{Deserialize, Serialize};
use std::fmt;

use super::product::Product;

/// Stable category identifier from the catalog document
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CategoryId(String);

impl CategoryId {
    /// Create a new CategoryId from a string
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Get the id as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CategoryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for CategoryId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&str> for CategoryId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl AsRef<str> for CategoryId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Canonical grouping key for categories, independent of display spelling.
///
/// Brands spell conceptually identical categories inconsistently
/// ("Lifting AMR" vs "lifting amr"). Cross-brand merging keys on this
/// normalized form rather than exact display-string equality, so the
/// merged view and the merged counts stay stable across such variants.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CategoryKey(String);

impl CategoryKey {
    /// Derive the key from a display name: trim, collapse internal
    /// whitespace, lowercase.
    pub fn from_name(name: &str) -> Self {
        let folded = name
            .split_whitespace()
            .collect::<Vec<_>>()
            .join(" ")
            .to_lowercase();
        Self(folded)
    }

    /// Get the key as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CategoryKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl AsRef<str> for CategoryKey {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Named grouping of products, owned by exactly one brand
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Category {
    pub id: CategoryId,
    pub name: String,
    pub products: Vec<Product>,
}

impl Category {
    /// Grouping key for cross-brand merging
    pub fn key(&self) -> CategoryKey {
        CategoryKey::from_name(&self.name)
    }
}
