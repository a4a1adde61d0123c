use serde::{Deserialize, Serialize};

use crate::domain::Brand;
use crate::error::Result;

/// Root of the static catalog document: Brand -> Category -> Product.
///
/// Loaded once per session and never mutated afterwards. There are no
/// create/update/delete operations anywhere in the system.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Catalog {
    #[serde(default)]
    pub brands: Vec<Brand>,
}

impl Catalog {
    /// Parse a catalog from its JSON document
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Total product count across the whole hierarchy
    pub fn product_count(&self) -> usize {
        self.brands.iter().map(|b| b.product_count()).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_document_is_empty_catalog() {
        let catalog = Catalog::from_json("{}").unwrap();
        assert!(catalog.brands.is_empty());
        assert_eq!(catalog.product_count(), 0);
    }

    #[test]
    fn test_hierarchy_round_trip() {
        let json = r#"{
            "brands": [
                {
                    "id": "irayple",
                    "name": "Irayple",
                    "categories": [
                        {
                            "id": "lifting-amr",
                            "name": "Lifting AMR",
                            "products": [
                                { "id": "rta-c060-lq", "name": "RTA-C060-LQ", "image": "a.png" },
                                { "id": "rta-c100-lq", "name": "RTA-C100-LQ", "image": "b.png" }
                            ]
                        }
                    ]
                }
            ]
        }"#;

        let catalog = Catalog::from_json(json).unwrap();
        assert_eq!(catalog.brands.len(), 1);
        assert_eq!(catalog.product_count(), 2);

        let reencoded = serde_json::to_string(&catalog).unwrap();
        let reparsed = Catalog::from_json(&reencoded).unwrap();
        assert_eq!(catalog, reparsed);
    }

    #[test]
    fn test_malformed_document_is_a_parse_error() {
        let err = Catalog::from_json("{ brands: nope").unwrap_err();
        assert!(err.to_string().contains("parse"));
    }
}
