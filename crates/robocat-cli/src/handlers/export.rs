use anyhow::{Context, Result};
use robocat_engine::{CatalogStore, visible_products};
use std::fs::File;
use std::path::Path;

use super::resolve;
use crate::presentation::presenters::present_product_list;
use crate::presentation::view_models::ProductListViewModel;
use crate::types::ExportFormat;

pub fn handle(
    store: &CatalogStore,
    brand: Option<&str>,
    category: Option<&str>,
    output: &Path,
    export_format: ExportFormat,
) -> Result<()> {
    let (selection, brand_name, category_name) =
        resolve::resolve_selection(store, brand, category)?;

    let products = visible_products(store, &selection);
    let model = present_product_list(store, &products, brand_name, category_name);

    match export_format {
        ExportFormat::Csv => write_csv(output, &model)?,
        ExportFormat::Json => write_json(output, &model)?,
    }

    println!(
        "Exported {} product(s) to {} ({})",
        model.total_count,
        output.display(),
        export_format
    );
    Ok(())
}

fn write_csv(path: &Path, model: &ProductListViewModel) -> Result<()> {
    let mut writer = csv::Writer::from_path(path)
        .with_context(|| format!("Failed to create {}", path.display()))?;

    writer.write_record(["id", "name", "brand", "category", "route", "summary"])?;
    for product in &model.products {
        writer.write_record([
            product.id.as_str(),
            product.name.as_str(),
            product.brand.as_str(),
            product.category.as_str(),
            product.route.as_str(),
            product.summary.as_deref().unwrap_or(""),
        ])?;
    }
    writer.flush()?;
    Ok(())
}

fn write_json(path: &Path, model: &ProductListViewModel) -> Result<()> {
    let file =
        File::create(path).with_context(|| format!("Failed to create {}", path.display()))?;
    serde_json::to_writer_pretty(file, model)?;
    Ok(())
}
