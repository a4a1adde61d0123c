//! # Presentation Layer
//!
//! Output logic for the CLI, kept strictly separate from the query
//! engine. The data flow is unidirectional:
//!
//! ```text
//! [ Handler ] --> [ Presenter ] --> [ ViewModel ] --> [ Renderer ] --> [ Output ]
//!    (Controller)      (Converter)       (Contract)       (View)        (Console/JSON)
//! ```
//!
//! Rules of the house:
//! - `view_models/`: Serialize-able data contracts. Raw data, not
//!   formatted strings; `--format json` dumps them as-is, so they are an
//!   API. Their `Display` impls own the plain-text layout.
//! - `presenters/`: pure functions converting engine output into view
//!   models. All counting, joining and summarizing happens here.
//! - `renderers/`: the output strategy (plain text vs JSON). JSON always
//!   dumps the complete view model and ignores text layout.
//! - `formatters/`: small shared string utilities.

pub mod formatters;
pub mod presenters;
pub mod renderers;
pub mod view_models;

pub use renderers::{ConsoleRenderer, Renderer};
pub use view_models::{CommandResultViewModel, Guidance};
