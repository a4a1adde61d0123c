use anyhow::{Result, bail};
use robocat_engine::CatalogStore;
use robocat_types::ProductId;

use crate::presentation::presenters::present_product_detail;
use crate::presentation::view_models::{CommandResultViewModel, Guidance};
use crate::presentation::{ConsoleRenderer, Renderer};
use crate::types::OutputFormat;

pub fn handle(store: &CatalogStore, product_id: &str, format: OutputFormat) -> Result<()> {
    let id = ProductId::from(product_id);

    let Some(hit) = store.find_product(&id) else {
        bail!(
            "No product with id '{}'. Try 'robocat products' to list ids.",
            product_id
        );
    };

    let model = present_product_detail(&hit);

    let result = CommandResultViewModel::new(model).with_suggestion(
        Guidance::new("See the rest of this category:")
            .with_command(format!("robocat products --category \"{}\"", hit.category.name)),
    );

    ConsoleRenderer::new(format).render(result)
}
