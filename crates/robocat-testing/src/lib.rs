//! Testing infrastructure for robocat integration tests.
//!
//! - `TestWorld`: isolated environment with a throwaway catalog file and
//!   CLI invocation helpers
//! - `fixtures`: canned catalog JSON and a small catalog builder
//! - `assertions`: readable checks on `--format json` command output

pub mod assertions;
pub mod fixtures;
pub mod world;

pub use world::TestWorld;
