//! Page composition for folio reports.
//!
//! Two compositors turn input into drawn pages on any `DocumentBackend`:
//! - `FlowingCompositor` flows Markdown-flavoured text over fixed-size pages
//! - `TabularCompositor` lays out grouped payment records on one tall page
//!
//! Both return a `Document`, which keeps the backend and the ordered page
//! handles so footers can be stamped once the final page count is known.

use thiserror::Error;

/// Configuration problems caught before any page is drawn.
#[derive(Error, Debug)]
pub enum LayoutError {
    #[error("Invalid page geometry: {0}")]
    InvalidGeometry(String),
}

pub mod algorithms;
pub mod config;
pub mod document;
pub mod format;
pub mod narrative;
pub mod style;
pub mod tabular;
pub mod text;

pub use self::config::{NarrativeConfig, TabularConfig};
pub use self::document::{Document, FontSet};
pub use self::narrative::{BlockKind, ContentBlock, FlowingCompositor, classify};
pub use self::style::TextStyle;
pub use self::tabular::{Group, SubItem, TabularCompositor};

#[cfg(test)]
mod test_utils;
