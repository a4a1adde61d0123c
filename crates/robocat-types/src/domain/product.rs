use serde::{Deserialize, Serialize};
use std::fmt;

/// Stable product identifier; the navigation route `/product/{id}` keys on this
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProductId(String);

impl ProductId {
    /// Create a new ProductId from a string
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Get the id as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ProductId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for ProductId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&str> for ProductId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl AsRef<str> for ProductId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Two-line blurb shown on product cards
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductDescription {
    pub line1: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub line2: Option<String>,
}

/// A single spec row in a detail tab (e.g. "Payload", "600", "kg")
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpecEntry {
    pub name: String,
    pub value: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub unit: Option<String>,
}

/// Detail-view tab carrying a spec table; opaque to the filtering core
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductMainCategory {
    pub id: String,
    pub name: String,
    pub icon: String,
    #[serde(default)]
    pub specs: Vec<SpecEntry>,
}

/// A catalog entry; belongs to exactly one category within one brand
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    pub image: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<ProductDescription>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub detail: Option<String>,
    #[serde(default, rename = "mainCategories")]
    pub main_categories: Vec<ProductMainCategory>,
}
