use anyhow::Result;
use robocat_engine::{CatalogStore, aggregate_categories, brand_categories};

use super::resolve;
use crate::presentation::presenters::present_category_list;
use crate::presentation::view_models::{CommandResultViewModel, Guidance};
use crate::presentation::{ConsoleRenderer, Renderer};
use crate::types::OutputFormat;

pub fn handle(store: &CatalogStore, brand: Option<&str>, format: OutputFormat) -> Result<()> {
    let model = match brand {
        Some(raw) => {
            let brand = resolve::resolve_brand(store, raw)?;
            let categories = brand_categories(brand);
            present_category_list(store, &categories, Some(brand))
        }
        None => {
            // No brand scope: merge same-named categories across brands
            let categories = aggregate_categories(store.catalog());
            present_category_list(store, &categories, None)
        }
    };

    let result = CommandResultViewModel::new(model).with_suggestion(
        Guidance::new("Filter products by category:")
            .with_command("robocat products --category <NAME>"),
    );

    ConsoleRenderer::new(format).render(result)
}
