// NOTE: robocat Architecture Rationale
//
// Why a static bundled dataset (not a database)?
// - The catalog is replaced wholesale on each release; there is nothing
//   to migrate and nothing to index incrementally
// - Every query completes synchronously over the in-memory hierarchy,
//   so there is no cache to invalidate and no staleness to reason about
// - An explicit --data file (or config entry) swaps the whole catalog
//   for testing and for customer-specific line-ups
//
// Why route-by-id navigation (not row indexes)?
// - The visible list is re-filtered and re-sorted on every selection
//   change; a row index is stale the moment the selection moves
// - Capturing the ProductId at interaction time makes `show` and the
//   browser's detail screen resolve the same product the user picked,
//   regardless of what occupies that row afterwards

mod args;
mod commands;
pub mod config;
mod handlers;
pub mod presentation;
mod tui;
pub mod types;

pub use args::{Cli, Commands};
pub use commands::run;
