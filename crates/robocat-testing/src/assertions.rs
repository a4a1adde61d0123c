//! Readable checks against `--format json` command output.

use anyhow::{Context, Result};
use robocat_engine::natural_cmp;
use serde_json::Value;

fn products(json: &Value) -> Result<&Vec<Value>> {
    json["content"]["products"]
        .as_array()
        .context("Expected 'content.products' array in JSON")
}

pub fn assert_product_count(json: &Value, expected: usize) -> Result<()> {
    let products = products(json)?;
    if products.len() != expected {
        anyhow::bail!("Expected {} products, got {}", expected, products.len());
    }
    Ok(())
}

/// The engine's locale-tolerant natural order, applied to the rendered
/// name column.
pub fn assert_products_sorted_by_name(json: &Value) -> Result<()> {
    let products = products(json)?;
    let names: Vec<&str> = products
        .iter()
        .enumerate()
        .map(|(i, p)| {
            p["name"]
                .as_str()
                .with_context(|| format!("Product {} missing name", i))
        })
        .collect::<Result<_>>()?;

    for pair in names.windows(2) {
        if natural_cmp(pair[0], pair[1]) == std::cmp::Ordering::Greater {
            anyhow::bail!("Products out of order: '{}' before '{}'", pair[0], pair[1]);
        }
    }
    Ok(())
}

pub fn assert_all_in_category(json: &Value, category: &str) -> Result<()> {
    for (i, product) in products(json)?.iter().enumerate() {
        let got = product["category"]
            .as_str()
            .with_context(|| format!("Product {} missing category", i))?;
        if !got.eq_ignore_ascii_case(category) {
            anyhow::bail!(
                "Product {} is in category '{}', expected '{}'",
                i,
                got,
                category
            );
        }
    }
    Ok(())
}

pub fn assert_all_in_brand(json: &Value, brand: &str) -> Result<()> {
    for (i, product) in products(json)?.iter().enumerate() {
        let got = product["brand"]
            .as_str()
            .with_context(|| format!("Product {} missing brand", i))?;
        if got != brand {
            anyhow::bail!("Product {} belongs to '{}', expected '{}'", i, got, brand);
        }
    }
    Ok(())
}
