//! Read-only access to the static catalog hierarchy.

use once_cell::sync::Lazy;
use std::path::Path;

use robocat_types::{Brand, BrandId, Catalog, Category, CategoryId, Product, ProductId};

use crate::error::Result;

/// Catalog dataset shipped with the binary
const BUNDLED_CATALOG: &str = include_str!("../data/catalog.json");

static BUNDLED_STORE: Lazy<CatalogStore> = Lazy::new(|| {
    // The bundled document is part of the crate; a parse failure is a
    // packaging bug, not a runtime condition.
    match Catalog::from_json(BUNDLED_CATALOG) {
        Ok(catalog) => CatalogStore::new(catalog),
        Err(err) => panic!("bundled catalog is invalid: {}", err),
    }
});

/// A product located in the hierarchy, with its owning brand and category
#[derive(Debug, Clone, Copy)]
pub struct ProductHit<'a> {
    pub product: &'a Product,
    pub brand: &'a Brand,
    pub category: &'a Category,
}

/// A category located in the hierarchy, with its owning brand
#[derive(Debug, Clone, Copy)]
pub struct CategoryHit<'a> {
    pub category: &'a Category,
    pub brand: &'a Brand,
}

/// Owns the immutable Brand -> Category -> Product hierarchy for one
/// session and exposes read-only accessors. Loaded once, never mutated.
#[derive(Debug, Clone, Default)]
pub struct CatalogStore {
    catalog: Catalog,
}

impl CatalogStore {
    pub fn new(catalog: Catalog) -> Self {
        Self { catalog }
    }

    /// Parse a store from a catalog JSON document
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(Self::new(Catalog::from_json(json)?))
    }

    /// Load a store from a catalog JSON file
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_json(&content)
    }

    /// The catalog dataset compiled into the binary, parsed once
    pub fn bundled() -> &'static CatalogStore {
        &BUNDLED_STORE
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Brands in store order
    pub fn brands(&self) -> &[Brand] {
        &self.catalog.brands
    }

    /// Every product, flattened in brand-then-category-then-product
    /// order. Deterministic concatenation, no dedup.
    pub fn all_products(&self) -> Vec<&Product> {
        self.catalog
            .brands
            .iter()
            .flat_map(|brand| brand.categories.iter())
            .flat_map(|category| category.products.iter())
            .collect()
    }

    pub fn find_brand(&self, id: &BrandId) -> Option<&Brand> {
        self.catalog.brands.iter().find(|b| &b.id == id)
    }

    /// Locate a category by id anywhere in the hierarchy. When a brand
    /// hint is given, that brand is searched first; a stale hint falls
    /// back to the full scan so the category's own product list still
    /// wins.
    pub fn find_category(
        &self,
        id: &CategoryId,
        brand_hint: Option<&BrandId>,
    ) -> Option<CategoryHit<'_>> {
        if let Some(hint) = brand_hint
            && let Some(brand) = self.find_brand(hint)
            && let Some(category) = brand.categories.iter().find(|c| &c.id == id)
        {
            return Some(CategoryHit { category, brand });
        }

        for brand in &self.catalog.brands {
            if let Some(category) = brand.categories.iter().find(|c| &c.id == id) {
                return Some(CategoryHit { category, brand });
            }
        }
        None
    }

    /// Resolve a product route by re-scanning the hierarchy for the id.
    /// First hit in store order wins.
    pub fn find_product(&self, id: &ProductId) -> Option<ProductHit<'_>> {
        for brand in &self.catalog.brands {
            for category in &brand.categories {
                if let Some(product) = category.products.iter().find(|p| &p.id == id) {
                    return Some(ProductHit {
                        product,
                        brand,
                        category,
                    });
                }
            }
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> CatalogStore {
        CatalogStore::from_json(
            r#"{
                "brands": [
                    {
                        "id": "a",
                        "name": "Brand A",
                        "categories": [
                            {
                                "id": "a-one",
                                "name": "One",
                                "products": [
                                    { "id": "p1", "name": "P1", "image": "p1.png" },
                                    { "id": "p2", "name": "P2", "image": "p2.png" }
                                ]
                            }
                        ]
                    },
                    {
                        "id": "b",
                        "name": "Brand B",
                        "categories": [
                            {
                                "id": "b-one",
                                "name": "One",
                                "products": [
                                    { "id": "p3", "name": "P3", "image": "p3.png" }
                                ]
                            }
                        ]
                    }
                ]
            }"#,
        )
        .unwrap()
    }

    #[test]
    fn test_all_products_flattens_in_store_order() {
        let store = sample();
        let ids: Vec<&str> = store.all_products().iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, vec!["p1", "p2", "p3"]);
    }

    #[test]
    fn test_empty_store_is_empty_sequence() {
        let store = CatalogStore::default();
        assert!(store.brands().is_empty());
        assert!(store.all_products().is_empty());
    }

    #[test]
    fn test_find_product_reports_owning_brand_and_category() {
        let store = sample();
        let hit = store.find_product(&"p3".into()).unwrap();
        assert_eq!(hit.brand.id.as_str(), "b");
        assert_eq!(hit.category.id.as_str(), "b-one");
        assert!(store.find_product(&"missing".into()).is_none());
    }

    #[test]
    fn test_find_category_prefers_brand_hint_then_falls_back() {
        let store = sample();

        let hit = store.find_category(&"b-one".into(), Some(&"b".into())).unwrap();
        assert_eq!(hit.brand.id.as_str(), "b");

        // Stale hint: category lives under brand a, hint says b
        let hit = store.find_category(&"a-one".into(), Some(&"b".into())).unwrap();
        assert_eq!(hit.brand.id.as_str(), "a");
    }

    #[test]
    fn test_bundled_store_parses_and_is_nonempty() {
        let store = CatalogStore::bundled();
        assert!(!store.brands().is_empty());
        assert!(store.all_products().len() >= 14);
    }
}
