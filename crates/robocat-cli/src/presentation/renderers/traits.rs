use crate::presentation::view_models::CommandResultViewModel;
use anyhow::Result;
use serde::Serialize;
use std::fmt::Display;

/// Output boundary for command results.
///
/// Handlers build a [`CommandResultViewModel`] and hand it to a renderer;
/// the renderer alone decides how the result reaches the user. Plain text
/// goes through the view model's `Display` impl, JSON serializes the whole
/// result including suggestions.
pub trait Renderer {
    fn render<T: Serialize + Display + Send + Sync>(
        &self,
        result: CommandResultViewModel<T>,
    ) -> Result<()>;
}
