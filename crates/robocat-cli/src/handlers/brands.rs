use anyhow::Result;
use robocat_engine::CatalogStore;

use crate::presentation::presenters::present_brand_list;
use crate::presentation::view_models::{CommandResultViewModel, Guidance};
use crate::presentation::{ConsoleRenderer, Renderer};
use crate::types::OutputFormat;

pub fn handle(store: &CatalogStore, format: OutputFormat) -> Result<()> {
    let model = present_brand_list(store);

    let result = CommandResultViewModel::new(model).with_suggestion(
        Guidance::new("List a brand's products:").with_command("robocat products --brand <BRAND>"),
    );

    ConsoleRenderer::new(format).render(result)
}
