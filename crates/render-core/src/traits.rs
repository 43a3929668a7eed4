use crate::error::RenderError;
use crate::types::{FontId, LineSegment, PageId, StandardFont, TextRun};
use folio_types::Size;

/// A trait for document backends, abstracting the page-description primitives.
///
/// Coordinates are PDF user space: points, origin at the bottom-left of the page.
/// Pages are append-only display lists; nothing drawn can be removed.
pub trait DocumentBackend {
    fn embed_font(&mut self, font: StandardFont) -> Result<FontId, RenderError>;

    fn add_page(&mut self, size: Size) -> Result<PageId, RenderError>;

    /// Number of pages added so far.
    fn page_count(&self) -> usize;

    /// Advance width of `text` in points when set in `font` at `size`.
    fn measure_text(&self, font: FontId, text: &str, size: f32) -> Result<f32, RenderError>;

    fn draw_text(&mut self, page: PageId, run: TextRun) -> Result<(), RenderError>;

    fn draw_line(&mut self, page: PageId, line: LineSegment) -> Result<(), RenderError>;

    /// Serializes every page, in creation order, into the finished byte buffer.
    fn finish(self: Box<Self>) -> Result<Vec<u8>, RenderError>;
}
