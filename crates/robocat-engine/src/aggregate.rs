//! Cross-brand category aggregation.
//!
//! When no brand filter is active the sidebar shows one entry per
//! category key, merging same-keyed categories from every brand into a
//! single record with the combined product list.

use serde::Serialize;
use std::collections::HashMap;

use robocat_types::{Brand, BrandId, Catalog, CategoryKey, Product};

/// A derived, cross-brand merged category. Recomputed on demand, never
/// persisted.
#[derive(Debug, Clone, Serialize)]
pub struct AggregatedCategory {
    pub key: CategoryKey,
    /// Display spelling adopted from the first-seen source category
    pub name: String,
    /// Concatenation across brands in arrival order; no re-sort at merge
    /// time
    pub products: Vec<Product>,
    /// Contributing brands in first-seen order
    pub brands: Vec<BrandId>,
}

/// Merge every brand's categories by key, in first-insertion order.
///
/// Brands iterate in store order and categories in brand order. The
/// first sighting of a key creates the record with a copy of that
/// category's products; later sightings append their products, so the
/// merged count is the sum across all brands sharing the key.
pub fn aggregate_categories(catalog: &Catalog) -> Vec<AggregatedCategory> {
    let mut merged: Vec<AggregatedCategory> = Vec::new();
    let mut index: HashMap<CategoryKey, usize> = HashMap::new();

    for brand in &catalog.brands {
        for category in &brand.categories {
            let key = category.key();
            match index.get(&key) {
                Some(&slot) => {
                    let record = &mut merged[slot];
                    record.products.extend(category.products.iter().cloned());
                    if !record.brands.contains(&brand.id) {
                        record.brands.push(brand.id.clone());
                    }
                }
                None => {
                    index.insert(key.clone(), merged.len());
                    merged.push(AggregatedCategory {
                        key,
                        name: category.name.clone(),
                        products: category.products.clone(),
                        brands: vec![brand.id.clone()],
                    });
                }
            }
        }
    }

    merged
}

/// Single-brand category list with per-category counts, in the brand's
/// own category order
pub fn brand_categories(brand: &Brand) -> Vec<AggregatedCategory> {
    brand
        .categories
        .iter()
        .map(|category| AggregatedCategory {
            key: category.key(),
            name: category.name.clone(),
            products: category.products.clone(),
            brands: vec![brand.id.clone()],
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use robocat_types::Catalog;

    fn catalog() -> Catalog {
        Catalog::from_json(
            r#"{
                "brands": [
                    {
                        "id": "irayple",
                        "name": "Irayple",
                        "categories": [
                            {
                                "id": "ir-lift",
                                "name": "Lifting AMR",
                                "products": [
                                    { "id": "p1", "name": "P1", "image": "p1.png" },
                                    { "id": "p2", "name": "P2", "image": "p2.png" }
                                ]
                            },
                            {
                                "id": "ir-charge",
                                "name": "Charging Station",
                                "products": [
                                    { "id": "p3", "name": "P3", "image": "p3.png" }
                                ]
                            }
                        ]
                    },
                    {
                        "id": "visionnav",
                        "name": "VisionNav",
                        "categories": [
                            {
                                "id": "vn-lift",
                                "name": "lifting amr",
                                "products": [
                                    { "id": "p4", "name": "P4", "image": "p4.png" }
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
    fn test_same_key_categories_merge_across_brands() {
        let merged = aggregate_categories(&catalog());
        assert_eq!(merged.len(), 2);

        let lifting = &merged[0];
        assert_eq!(lifting.name, "Lifting AMR");
        assert_eq!(lifting.products.len(), 3);
        let ids: Vec<&str> = lifting.products.iter().map(|p| p.id.as_str()).collect();
        // Arrival order: Irayple's products first, then VisionNav's
        assert_eq!(ids, vec!["p1", "p2", "p4"]);
        assert_eq!(lifting.brands.len(), 2);
    }

    #[test]
    fn test_first_insertion_order_and_first_seen_spelling() {
        let merged = aggregate_categories(&catalog());
        let names: Vec<&str> = merged.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, vec!["Lifting AMR", "Charging Station"]);
    }

    #[test]
    fn test_merged_counts_sum_across_brands() {
        let merged = aggregate_categories(&catalog());
        let total: usize = merged.iter().map(|c| c.products.len()).sum();
        assert_eq!(total, catalog().product_count());
    }

    #[test]
    fn test_brand_categories_keep_brand_order() {
        let cat = catalog();
        let lists = brand_categories(&cat.brands[0]);
        assert_eq!(lists.len(), 2);
        assert_eq!(lists[0].name, "Lifting AMR");
        assert_eq!(lists[0].products.len(), 2);
        assert_eq!(lists[1].name, "Charging Station");
    }

    #[test]
    fn test_empty_catalog_aggregates_to_nothing() {
        assert!(aggregate_categories(&Catalog::default()).is_empty());
    }
}
