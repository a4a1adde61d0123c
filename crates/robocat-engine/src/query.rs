//! The product query engine: a pure function from store + selection to
//! the ordered list of visible products.

use robocat_types::{Catalog, Product, Selection};

use crate::natsort::natural_cmp;
use crate::store::CatalogStore;

/// Compute the visible product list for a selection.
///
/// Which products are included follows the four-way scope table below;
/// display order is always the final natural-order name sort, never
/// catalog insertion order. Deterministic for a given store and
/// selection; an empty result is valid output, not a failure.
///
/// | Selection        | Included                                        |
/// |------------------|-------------------------------------------------|
/// | All              | every product                                   |
/// | Brand            | all categories of that brand                    |
/// | CategoryAcross   | every category with the key, across all brands  |
/// | Category         | exactly that category's own product list        |
pub fn visible_products(store: &CatalogStore, selection: &Selection) -> Vec<Product> {
    let catalog = store.catalog();

    let mut products: Vec<Product> = match selection {
        Selection::All => store.all_products().into_iter().cloned().collect(),

        Selection::Brand { brand } => store
            .find_brand(brand)
            .map(collect_brand)
            .unwrap_or_default(),

        Selection::CategoryAcross { key } => collect_across(catalog, key),

        // The category's own list is authoritative; the brand component
        // is context only and never filters here.
        Selection::Category { brand, category } => store
            .find_category(category, Some(brand))
            .map(|hit| hit.category.products.clone())
            .unwrap_or_default(),
    };

    products.sort_by(|a, b| natural_cmp(&a.name, &b.name));
    products
}

fn collect_brand(brand: &robocat_types::Brand) -> Vec<Product> {
    brand
        .categories
        .iter()
        .flat_map(|category| category.products.iter().cloned())
        .collect()
}

fn collect_across(catalog: &Catalog, key: &robocat_types::CategoryKey) -> Vec<Product> {
    catalog
        .brands
        .iter()
        .flat_map(|brand| brand.categories.iter())
        .filter(|category| &category.key() == key)
        .flat_map(|category| category.products.iter().cloned())
        .collect()
}
