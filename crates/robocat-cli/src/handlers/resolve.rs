//! Shared filter-argument resolution for the read commands.
//!
//! Users pass brands by id or display name and categories by display
//! name; these helpers map that input onto the catalog and produce a
//! [`Selection`], failing with the valid choices listed when nothing
//! matches. The query engine itself never errors on unknown scopes, so
//! validation lives here at the command boundary.

use anyhow::{Result, bail};
use robocat_engine::{CatalogStore, aggregate_categories};
use robocat_types::{Brand, Category, CategoryKey, Selection};

/// Accepts a brand id ("irayple") or display name ("Irayple"),
/// case-insensitively.
pub fn resolve_brand<'a>(store: &'a CatalogStore, raw: &str) -> Result<&'a Brand> {
    let needle = raw.to_lowercase();
    let hit = store.brands().iter().find(|brand| {
        brand.id.as_str().to_lowercase() == needle || brand.name.to_lowercase() == needle
    });

    match hit {
        Some(brand) => Ok(brand),
        None => {
            let known = store
                .brands()
                .iter()
                .map(|brand| brand.id.as_str())
                .collect::<Vec<_>>()
                .join(", ");
            bail!("Unknown brand '{}'. Known brands: {}", raw, known);
        }
    }
}

/// Finds a category of one brand by display name, compared through the
/// same key normalization the aggregator uses.
pub fn resolve_brand_category<'a>(brand: &'a Brand, raw: &str) -> Result<&'a Category> {
    let key = CategoryKey::from_name(raw);
    let hit = brand
        .categories
        .iter()
        .find(|category| category.key() == key);

    match hit {
        Some(category) => Ok(category),
        None => {
            let known = brand
                .categories
                .iter()
                .map(|category| category.name.as_str())
                .collect::<Vec<_>>()
                .join(", ");
            bail!(
                "Brand '{}' has no category '{}'. Its categories: {}",
                brand.name,
                raw,
                known
            );
        }
    }
}

/// Checks a cross-brand category name against the merged category set.
pub fn resolve_merged_category(store: &CatalogStore, raw: &str) -> Result<CategoryKey> {
    let key = CategoryKey::from_name(raw);
    let merged = aggregate_categories(store.catalog());

    if merged.iter().any(|category| category.key == key) {
        Ok(key)
    } else {
        let known = merged
            .iter()
            .map(|category| category.name.as_str())
            .collect::<Vec<_>>()
            .join(", ");
        bail!("Unknown category '{}'. Known categories: {}", raw, known);
    }
}

/// Turns optional --brand / --category filters into a selection plus the
/// resolved display names for the filter echo in listings.
pub fn resolve_selection(
    store: &CatalogStore,
    brand: Option<&str>,
    category: Option<&str>,
) -> Result<(Selection, Option<String>, Option<String>)> {
    match (brand, category) {
        (None, None) => Ok((Selection::All, None, None)),

        (Some(raw), None) => {
            let brand = resolve_brand(store, raw)?;
            Ok((
                Selection::Brand {
                    brand: brand.id.clone(),
                },
                Some(brand.name.clone()),
                None,
            ))
        }

        (None, Some(raw)) => {
            let key = resolve_merged_category(store, raw)?;
            Ok((
                Selection::CategoryAcross { key },
                None,
                Some(raw.to_string()),
            ))
        }

        (Some(raw_brand), Some(raw_category)) => {
            let brand = resolve_brand(store, raw_brand)?;
            let category = resolve_brand_category(brand, raw_category)?;
            Ok((
                Selection::Category {
                    brand: brand.id.clone(),
                    category: category.id.clone(),
                },
                Some(brand.name.clone()),
                Some(category.name.clone()),
            ))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn store() -> CatalogStore {
        CatalogStore::bundled().clone()
    }

    // Given a brand display name in mixed case
    // When resolving it
    // Then the matching brand comes back
    #[test]
    fn brand_resolves_by_name_case_insensitively() {
        let store = store();
        let brand = resolve_brand(&store, "IRAYPLE").unwrap();
        assert_eq!(brand.id.as_str(), "irayple");
    }

    #[test]
    fn unknown_brand_lists_choices() {
        let store = store();
        let err = resolve_brand(&store, "nope").unwrap_err();
        assert!(err.to_string().contains("Known brands"));
    }

    // Category names fold through key normalization, so spacing and case
    // differences still match
    #[test]
    fn merged_category_matches_by_key() {
        let store = store();
        let key = resolve_merged_category(&store, "  LIFTING   amr ").unwrap();
        assert_eq!(key.as_str(), "lifting amr");
    }

    #[test]
    fn brand_plus_category_builds_pair_selection() {
        let store = store();
        let (selection, brand, category) =
            resolve_selection(&store, Some("visionnav"), Some("Forklift AGV")).unwrap();
        assert!(matches!(selection, Selection::Category { .. }));
        assert_eq!(brand.as_deref(), Some("VisionNav"));
        assert_eq!(category.as_deref(), Some("Forklift AGV"));
    }
}
