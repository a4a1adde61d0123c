//! Pure formatting helpers shared by view model `Display` impls.

pub mod route;
pub mod text;
