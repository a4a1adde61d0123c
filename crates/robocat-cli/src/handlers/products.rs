use anyhow::Result;
use robocat_engine::{CatalogStore, visible_products};

use super::resolve;
use crate::presentation::presenters::present_product_list;
use crate::presentation::view_models::{CommandResultViewModel, Guidance};
use crate::presentation::{ConsoleRenderer, Renderer};
use crate::types::OutputFormat;

pub fn handle(
    store: &CatalogStore,
    brand: Option<&str>,
    category: Option<&str>,
    format: OutputFormat,
) -> Result<()> {
    let (selection, brand_name, category_name) =
        resolve::resolve_selection(store, brand, category)?;

    let products = visible_products(store, &selection);
    let model = present_product_list(store, &products, brand_name, category_name);

    let result = CommandResultViewModel::new(model).with_suggestion(
        Guidance::new("Show a product's detail page:").with_command("robocat show <PRODUCT-ID>"),
    );

    ConsoleRenderer::new(format).render(result)
}
