use anyhow::Result;
use robocat_engine::CatalogStore;

use super::resolve;
use crate::tui;

pub fn handle(store: &CatalogStore, brand: Option<&str>) -> Result<()> {
    let initial = brand
        .map(|raw| resolve::resolve_brand(store, raw))
        .transpose()?;

    tui::run(store, initial)
}
