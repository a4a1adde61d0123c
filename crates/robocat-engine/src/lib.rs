// Engine module - catalog store, aggregation and query logic
// This layer sits between the schema types and the CLI presentation

pub mod aggregate;
pub mod error;
pub mod natsort;
pub mod query;
pub mod state;
pub mod store;

pub use aggregate::{AggregatedCategory, aggregate_categories, brand_categories};
pub use error::{Error, Result};
pub use natsort::natural_cmp;
pub use query::visible_products;
pub use state::SelectionState;
pub use store::{CatalogStore, CategoryHit, ProductHit};
