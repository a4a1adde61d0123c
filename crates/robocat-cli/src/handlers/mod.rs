pub mod brands;
pub mod browse;
pub mod categories;
pub mod export;
pub mod guidance;
pub mod products;
pub mod resolve;
pub mod show;
