//! Core rendering abstractions for paginated document composition.
//!
//! This crate provides the vocabulary shared by the compositors and the backends:
//! - `DocumentBackend`, the capability a compositor draws through
//! - Draw operations, page/font handles and the standard font set
//! - `RecordingBackend`, an in-memory backend with fixed-advance metrics
//! - Error types for rendering operations

mod error;
pub mod recording;
mod traits;
mod types;
pub mod utils;

pub use error::RenderError;
pub use recording::{RecordedPage, RecordingBackend};
pub use traits::DocumentBackend;
pub use types::{DrawOp, FontId, FontWeight, LineSegment, PageId, StandardFont, TextRun};
