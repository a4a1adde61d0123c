use serde::{Deserialize, Serialize};

use crate::domain::{BrandId, CategoryId, CategoryKey};

/// Current brand/category filter scope for the catalog view.
///
/// Modeled as a single tagged variant rather than two independently
/// nullable fields, so the four-way query decision table is exhaustive
/// by construction and a category filter can never be paired with a
/// contradictory brand filter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "scope", rename_all = "snake_case")]
pub enum Selection {
    /// All brands, all categories (the initial view)
    All,
    /// One brand, all of its categories
    Brand { brand: BrandId },
    /// No brand filter; the cross-brand merged category for this key
    CategoryAcross { key: CategoryKey },
    /// An exact category. The brand is display context only: the query
    /// always uses the category's own product list.
    Category { brand: BrandId, category: CategoryId },
}

impl Selection {
    /// The active brand filter, if any
    pub fn brand_id(&self) -> Option<&BrandId> {
        match self {
            Selection::All | Selection::CategoryAcross { .. } => None,
            Selection::Brand { brand } | Selection::Category { brand, .. } => Some(brand),
        }
    }

    /// Whether a category filter (exact or merged) is active
    pub fn has_category(&self) -> bool {
        matches!(
            self,
            Selection::CategoryAcross { .. } | Selection::Category { .. }
        )
    }
}

impl Default for Selection {
    fn default() -> Self {
        Selection::All
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_all() {
        assert_eq!(Selection::default(), Selection::All);
        assert!(Selection::default().brand_id().is_none());
        assert!(!Selection::default().has_category());
    }

    #[test]
    fn test_brand_id_accessor() {
        let sel = Selection::Category {
            brand: BrandId::new("irayple"),
            category: CategoryId::new("lifting-amr"),
        };
        assert_eq!(sel.brand_id().unwrap().as_str(), "irayple");
        assert!(sel.has_category());

        let sel = Selection::CategoryAcross {
            key: CategoryKey::from_name("Lifting AMR"),
        };
        assert!(sel.brand_id().is_none());
        assert!(sel.has_category());
    }

    #[test]
    fn test_serializes_with_scope_tag() {
        let sel = Selection::Brand {
            brand: BrandId::new("irayple"),
        };
        let json = serde_json::to_value(&sel).unwrap();
        assert_eq!(json["scope"], "brand");
        assert_eq!(json["brand"], "irayple");
    }
}
