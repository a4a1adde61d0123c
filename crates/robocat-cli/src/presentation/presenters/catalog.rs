//! Pure data transformation: engine results in, view models out.
//!
//! Presenters never print and never touch I/O, so every one of them is
//! unit-testable without capturing stdout.

use robocat_engine::{AggregatedCategory, CatalogStore, ProductHit};
use robocat_types::{Brand, Product};

use crate::presentation::formatters::route;
use crate::presentation::view_models::catalog::summarize_description;
use crate::presentation::view_models::{
    BrandEntry, BrandListViewModel, CategoryEntry, CategoryListViewModel, FilterSummary,
    ProductDetailViewModel, ProductEntry, ProductListViewModel, SpecRow, SpecTab,
};

pub fn present_brand_list(store: &CatalogStore) -> BrandListViewModel {
    let brands = store
        .brands()
        .iter()
        .map(|brand| BrandEntry {
            id: brand.id.to_string(),
            name: brand.name.clone(),
            category_count: brand.categories.len(),
            product_count: brand.product_count(),
        })
        .collect();

    BrandListViewModel {
        brands,
        total_products: store.catalog().product_count(),
    }
}

pub fn present_category_list(
    store: &CatalogStore,
    categories: &[AggregatedCategory],
    brand_scope: Option<&Brand>,
) -> CategoryListViewModel {
    let entries = categories
        .iter()
        .map(|category| CategoryEntry {
            key: category.key.to_string(),
            name: category.name.clone(),
            product_count: category.products.len(),
            brands: category
                .brands
                .iter()
                .map(|id| {
                    store
                        .find_brand(id)
                        .map(|brand| brand.name.clone())
                        .unwrap_or_else(|| id.to_string())
                })
                .collect(),
        })
        .collect();

    CategoryListViewModel {
        brand_scope: brand_scope.map(|brand| brand.name.clone()),
        categories: entries,
    }
}

pub fn present_product_list(
    store: &CatalogStore,
    products: &[Product],
    brand_filter: Option<String>,
    category_filter: Option<String>,
) -> ProductListViewModel {
    let entries = products
        .iter()
        .map(|product| {
            // A product from the query engine came out of the store, so the
            // hit lookup only misses on duplicate-id shadowing; fall back to
            // blank context rather than failing the whole listing.
            let hit = store.find_product(&product.id);
            ProductEntry {
                id: product.id.to_string(),
                name: product.name.clone(),
                route: route::product_route(&product.id),
                brand: hit.map(|h| h.brand.name.clone()).unwrap_or_default(),
                category: hit.map(|h| h.category.name.clone()).unwrap_or_default(),
                summary: product
                    .description
                    .as_ref()
                    .map(|d| summarize_description(&d.line1)),
            }
        })
        .collect::<Vec<_>>();

    ProductListViewModel {
        total_count: entries.len(),
        products: entries,
        applied_filters: FilterSummary {
            brand_filter,
            category_filter,
        },
    }
}

pub fn present_product_detail(hit: &ProductHit) -> ProductDetailViewModel {
    let product = hit.product;

    let mut description_lines = Vec::new();
    if let Some(description) = &product.description {
        description_lines.push(description.line1.clone());
        if let Some(line2) = &description.line2 {
            description_lines.push(line2.clone());
        }
    }

    let tabs = product
        .main_categories
        .iter()
        .map(|tab| SpecTab {
            name: tab.name.clone(),
            specs: tab
                .specs
                .iter()
                .map(|spec| SpecRow {
                    name: spec.name.clone(),
                    value: spec.value.clone(),
                    unit: spec.unit.clone(),
                })
                .collect(),
        })
        .collect();

    ProductDetailViewModel {
        id: product.id.to_string(),
        name: product.name.clone(),
        route: route::product_route(&product.id),
        brand: hit.brand.name.clone(),
        category: hit.category.name.clone(),
        image: product.image.clone(),
        description_lines,
        detail: product.detail.clone(),
        tabs,
    }
}
