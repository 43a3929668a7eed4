//! An in-memory backend that keeps every draw operation for inspection.
//!
//! Text is measured with a fixed advance per character (`size * advance_ratio`),
//! which makes wrapping and pagination arithmetic easy to predict in tests and
//! dry runs. `finish` produces a plain-text transcript of the display lists.

use crate::error::RenderError;
use crate::traits::DocumentBackend;
use crate::types::{DrawOp, FontId, LineSegment, PageId, StandardFont, TextRun};
use folio_types::Size;
use std::fmt::Write as _;

#[derive(Debug, Clone, PartialEq)]
pub struct RecordedPage {
    pub size: Size,
    pub ops: Vec<DrawOp>,
}

impl RecordedPage {
    pub fn text_runs(&self) -> impl Iterator<Item = &TextRun> {
        self.ops.iter().filter_map(DrawOp::as_text)
    }

    pub fn lines(&self) -> impl Iterator<Item = &LineSegment> {
        self.ops.iter().filter_map(|op| match op {
            DrawOp::Line(line) => Some(line),
            DrawOp::Text(_) => None,
        })
    }
}

#[derive(Debug, Clone)]
pub struct RecordingBackend {
    fonts: Vec<StandardFont>,
    pages: Vec<RecordedPage>,
    advance_ratio: f32,
    fail_on_finish: bool,
}

impl Default for RecordingBackend {
    fn default() -> Self {
        Self::new()
    }
}

impl RecordingBackend {
    pub fn new() -> Self {
        Self {
            fonts: Vec::new(),
            pages: Vec::new(),
            advance_ratio: 0.5,
            fail_on_finish: false,
        }
    }

    /// Makes `finish` fail, for exercising the backend-failure path.
    pub fn failing_on_finish(mut self) -> Self {
        self.fail_on_finish = true;
        self
    }

    pub fn pages(&self) -> &[RecordedPage] {
        &self.pages
    }

    pub fn font(&self, id: FontId) -> Option<StandardFont> {
        self.fonts.get(id.0).copied()
    }

    /// All text drawn on every page, in drawing order.
    pub fn all_text(&self) -> Vec<&str> {
        self.pages
            .iter()
            .flat_map(|p| p.text_runs())
            .map(|run| run.text.as_str())
            .collect()
    }

    fn page_mut(&mut self, page: PageId) -> Result<&mut RecordedPage, RenderError> {
        self.pages.get_mut(page.0).ok_or(RenderError::UnknownPage(page))
    }
}

impl DocumentBackend for RecordingBackend {
    fn embed_font(&mut self, font: StandardFont) -> Result<FontId, RenderError> {
        if let Some(idx) = self.fonts.iter().position(|f| *f == font) {
            return Ok(FontId(idx));
        }
        self.fonts.push(font);
        Ok(FontId(self.fonts.len() - 1))
    }

    fn add_page(&mut self, size: Size) -> Result<PageId, RenderError> {
        self.pages.push(RecordedPage {
            size,
            ops: Vec::new(),
        });
        Ok(PageId(self.pages.len() - 1))
    }

    fn page_count(&self) -> usize {
        self.pages.len()
    }

    fn measure_text(&self, font: FontId, text: &str, size: f32) -> Result<f32, RenderError> {
        if font.0 >= self.fonts.len() {
            return Err(RenderError::UnknownFont(font));
        }
        Ok(text.chars().count() as f32 * size * self.advance_ratio)
    }

    fn draw_text(&mut self, page: PageId, run: TextRun) -> Result<(), RenderError> {
        if run.font.0 >= self.fonts.len() {
            return Err(RenderError::UnknownFont(run.font));
        }
        self.page_mut(page)?.ops.push(DrawOp::Text(run));
        Ok(())
    }

    fn draw_line(&mut self, page: PageId, line: LineSegment) -> Result<(), RenderError> {
        self.page_mut(page)?.ops.push(DrawOp::Line(line));
        Ok(())
    }

    fn finish(self: Box<Self>) -> Result<Vec<u8>, RenderError> {
        if self.fail_on_finish {
            return Err(RenderError::Other("recording backend configured to fail".into()));
        }
        let mut out = String::new();
        for (idx, page) in self.pages.iter().enumerate() {
            let _ = writeln!(out, "page {} {}x{}", idx + 1, page.size.width, page.size.height);
            for op in &page.ops {
                match op {
                    DrawOp::Text(run) => {
                        let _ = writeln!(
                            out,
                            "  text {:.2} {:.2} {} {:?}",
                            run.origin.x, run.origin.y, run.size, run.text
                        );
                    }
                    DrawOp::Line(line) => {
                        let _ = writeln!(
                            out,
                            "  line {:.2} {:.2} {:.2} {:.2}",
                            line.from.x, line.from.y, line.to.x, line.to.y
                        );
                    }
                }
            }
        }
        Ok(out.into_bytes())
    }
}
