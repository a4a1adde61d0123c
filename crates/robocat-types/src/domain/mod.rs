mod brand;
mod category;
mod product;

pub use brand::{Brand, BrandId};
pub use category::{Category, CategoryId, CategoryKey};
pub use product::{Product, ProductDescription, ProductId, ProductMainCategory, SpecEntry};
