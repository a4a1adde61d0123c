pub mod catalog;
pub mod domain;
pub mod error;
pub mod selection;

pub use catalog::Catalog;
pub use domain::*;
pub use error::{Error, Result};
pub use selection::Selection;
