pub mod catalog;
pub mod common;
pub mod result;

pub use catalog::{
    BrandEntry, BrandListViewModel, CategoryEntry, CategoryListViewModel, FilterSummary,
    ProductDetailViewModel, ProductEntry, ProductListViewModel, SpecRow, SpecTab,
};
pub use common::Guidance;
pub use result::CommandResultViewModel;
