//! Selection state machine for the catalog view.
//!
//! A flat two-dimensional scope (brand x category) with `All` as the
//! initial state; every configuration is reachable from every other in
//! one step. The one invariant: changing brand always resets the
//! category component, because a category chosen under one brand context
//! is not meaningful under another.
//!
//! The state is a plain owned value passed to whoever renders the view;
//! there is no process-wide singleton.

use robocat_types::{BrandId, Category, CategoryKey, Selection};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectionState {
    current: Selection,
}

impl SelectionState {
    /// Start at "all brands, all categories"
    pub fn new() -> Self {
        Self::default()
    }

    pub fn selection(&self) -> &Selection {
        &self.current
    }

    /// Select a brand, or `None` for all brands. Unconditionally drops
    /// any category component, even if the new brand has a category with
    /// the same name or id; the user must re-select explicitly.
    pub fn select_brand(&mut self, brand: Option<BrandId>) {
        self.current = match brand {
            Some(brand) => Selection::Brand { brand },
            None => Selection::All,
        };
    }

    /// Select a category within the current brand scope, or `None` to
    /// clear the category filter. Never alters the brand component.
    ///
    /// With a brand active this pins the exact category; with no brand
    /// it selects the cross-brand merged view keyed by the category's
    /// name.
    pub fn select_category(&mut self, category: Option<&Category>) {
        self.current = match (self.current.brand_id().cloned(), category) {
            (Some(brand), Some(category)) => Selection::Category {
                brand,
                category: category.id.clone(),
            },
            (None, Some(category)) => Selection::CategoryAcross {
                key: category.key(),
            },
            (Some(brand), None) => Selection::Brand { brand },
            (None, None) => Selection::All,
        };
    }

    /// Select a cross-brand merged category by key. Only offered when no
    /// brand filter is active; with a brand active this is a no-op on
    /// the brand component and clears nothing.
    pub fn select_category_key(&mut self, key: Option<CategoryKey>) {
        if self.current.brand_id().is_some() {
            return;
        }
        self.current = match key {
            Some(key) => Selection::CategoryAcross { key },
            None => Selection::All,
        };
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use robocat_types::CategoryId;

    fn category(id: &str, name: &str) -> Category {
        Category {
            id: CategoryId::new(id),
            name: name.to_string(),
            products: Vec::new(),
        }
    }

    #[test]
    fn test_initial_state_is_all() {
        assert_eq!(*SelectionState::new().selection(), Selection::All);
    }

    #[test]
    fn test_brand_change_resets_category() {
        let mut state = SelectionState::new();
        state.select_brand(Some(BrandId::new("a")));
        state.select_category(Some(&category("a-lift", "Lifting AMR")));
        assert!(state.selection().has_category());

        state.select_brand(Some(BrandId::new("b")));
        assert_eq!(
            *state.selection(),
            Selection::Brand {
                brand: BrandId::new("b")
            }
        );
        assert!(!state.selection().has_category());
    }

    #[test]
    fn test_brand_reselect_also_resets_category() {
        // Even re-selecting the same brand drops the category
        let mut state = SelectionState::new();
        state.select_brand(Some(BrandId::new("a")));
        state.select_category(Some(&category("a-lift", "Lifting AMR")));
        state.select_brand(Some(BrandId::new("a")));
        assert!(!state.selection().has_category());
    }

    #[test]
    fn test_clearing_brand_returns_to_all() {
        let mut state = SelectionState::new();
        state.select_brand(Some(BrandId::new("a")));
        state.select_category(Some(&category("a-lift", "Lifting AMR")));
        state.select_brand(None);
        assert_eq!(*state.selection(), Selection::All);
    }

    #[test]
    fn test_category_under_brand_pins_exact_category() {
        let mut state = SelectionState::new();
        state.select_brand(Some(BrandId::new("a")));
        state.select_category(Some(&category("a-lift", "Lifting AMR")));
        assert_eq!(
            *state.selection(),
            Selection::Category {
                brand: BrandId::new("a"),
                category: CategoryId::new("a-lift"),
            }
        );
    }

    #[test]
    fn test_category_without_brand_selects_merged_view() {
        let mut state = SelectionState::new();
        state.select_category(Some(&category("a-lift", "Lifting AMR")));
        assert_eq!(
            *state.selection(),
            Selection::CategoryAcross {
                key: CategoryKey::from_name("lifting amr"),
            }
        );
    }

    #[test]
    fn test_clearing_category_keeps_brand() {
        let mut state = SelectionState::new();
        state.select_brand(Some(BrandId::new("a")));
        state.select_category(Some(&category("a-lift", "Lifting AMR")));
        state.select_category(None);
        assert_eq!(
            *state.selection(),
            Selection::Brand {
                brand: BrandId::new("a")
            }
        );
    }

    #[test]
    fn test_category_key_selection_requires_all_brands_scope() {
        let mut state = SelectionState::new();
        state.select_category_key(Some(CategoryKey::from_name("Lifting AMR")));
        assert!(state.selection().has_category());

        let mut state = SelectionState::new();
        state.select_brand(Some(BrandId::new("a")));
        state.select_category_key(Some(CategoryKey::from_name("Lifting AMR")));
        assert_eq!(
            *state.selection(),
            Selection::Brand {
                brand: BrandId::new("a")
            }
        );
    }
}
