use crate::types::{ExportFormat, OutputFormat};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "robocat")]
#[command(about = "Browse, filter and export a robotics vendor product catalog", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Catalog JSON file to use instead of the bundled dataset
    #[arg(long, global = true)]
    pub data: Option<PathBuf>,

    #[arg(long, default_value = "plain", global = true)]
    pub format: OutputFormat,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List brands with their category and product counts
    Brands,

    /// List categories (cross-brand merged, or one brand's own)
    Categories {
        /// Restrict to a single brand (id or name)
        #[arg(long)]
        brand: Option<String>,
    },

    /// List visible products for a brand/category selection
    Products {
        /// Filter by brand (id or name)
        #[arg(long)]
        brand: Option<String>,

        /// Filter by category name
        #[arg(long)]
        category: Option<String>,
    },

    /// Show one product's detail page by its stable id
    Show {
        /// Product id, as printed in the products list route column
        product_id: String,
    },

    /// Export a filtered product list to CSV or JSON
    Export {
        /// Filter by brand (id or name)
        #[arg(long)]
        brand: Option<String>,

        /// Filter by category name
        #[arg(long)]
        category: Option<String>,

        /// Destination file
        #[arg(long, short)]
        output: PathBuf,

        #[arg(long, default_value = "csv")]
        export_format: ExportFormat,
    },

    /// Browse the catalog interactively
    Browse {
        /// Start with this brand selected (id or name)
        #[arg(long)]
        brand: Option<String>,
    },
}
