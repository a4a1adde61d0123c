use super::args::{Cli, Commands};
use super::handlers;
use crate::config;
use anyhow::Result;

pub fn run(cli: Cli) -> Result<()> {
    let store = config::resolve_store(cli.data.as_deref())?;

    let Some(command) = cli.command else {
        handlers::guidance::handle(&store);
        return Ok(());
    };

    match command {
        Commands::Brands => handlers::brands::handle(&store, cli.format),

        Commands::Categories { brand } => {
            handlers::categories::handle(&store, brand.as_deref(), cli.format)
        }

        Commands::Products { brand, category } => {
            handlers::products::handle(&store, brand.as_deref(), category.as_deref(), cli.format)
        }

        Commands::Show { product_id } => handlers::show::handle(&store, &product_id, cli.format),

        Commands::Export {
            brand,
            category,
            output,
            export_format,
        } => handlers::export::handle(
            &store,
            brand.as_deref(),
            category.as_deref(),
            &output,
            export_format,
        ),

        Commands::Browse { brand } => handlers::browse::handle(&store, brand.as_deref()),
    }
}
