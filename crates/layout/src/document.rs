use crate::style::TextStyle;
use folio_render_core::{
    DocumentBackend, FontId, FontWeight, LineSegment, PageId, RenderError, StandardFont, TextRun,
};
use folio_types::{Color, Point, Size};

/// The two faces every folio document draws with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FontSet {
    pub regular: FontId,
    pub bold: FontId,
}

impl FontSet {
    pub fn for_weight(&self, weight: FontWeight) -> FontId {
        match weight {
            FontWeight::Regular => self.regular,
            FontWeight::Bold => self.bold,
        }
    }
}

/// A document under construction: the backend it draws into plus its pages
/// in creation order.
///
/// Pages are only ever appended, so `pages()[i]` is page `i + 1` of the output.
pub struct Document<B: DocumentBackend> {
    backend: B,
    pages: Vec<PageId>,
    fonts: FontSet,
}

impl<B: DocumentBackend> Document<B> {
    /// Wraps a backend and embeds the regular and bold faces.
    pub fn new(mut backend: B) -> Result<Self, RenderError> {
        let fonts = FontSet {
            regular: backend.embed_font(StandardFont::Helvetica)?,
            bold: backend.embed_font(StandardFont::HelveticaBold)?,
        };
        Ok(Self {
            backend,
            pages: Vec::new(),
            fonts,
        })
    }

    pub fn add_page(&mut self, size: Size) -> Result<PageId, RenderError> {
        let page = self.backend.add_page(size)?;
        self.pages.push(page);
        log::debug!("Added page {} ({}x{})", self.pages.len(), size.width, size.height);
        Ok(page)
    }

    pub fn pages(&self) -> &[PageId] {
        &self.pages
    }

    /// Pages the backend holds, which are exactly the pages in `pages()`.
    pub fn page_count(&self) -> usize {
        self.backend.page_count()
    }

    pub fn fonts(&self) -> FontSet {
        self.fonts
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    pub fn measure(&self, style: &TextStyle, text: &str) -> Result<f32, RenderError> {
        self.backend
            .measure_text(self.fonts.for_weight(style.weight), text, style.size)
    }

    pub fn draw_text(
        &mut self,
        page: PageId,
        text: &str,
        origin: Point,
        style: &TextStyle,
    ) -> Result<(), RenderError> {
        let run = TextRun {
            text: text.to_string(),
            origin,
            font: self.fonts.for_weight(style.weight),
            size: style.size,
            color: style.color,
        };
        self.backend.draw_text(page, run)
    }

    pub fn draw_rule(
        &mut self,
        page: PageId,
        from: Point,
        to: Point,
        thickness: f32,
        color: Color,
    ) -> Result<(), RenderError> {
        self.backend.draw_line(
            page,
            LineSegment {
                from,
                to,
                thickness,
                color,
            },
        )
    }

    pub fn into_backend(self) -> B {
        self.backend
    }

    /// Serializes the document through its backend.
    pub fn finish(self) -> Result<Vec<u8>, RenderError> {
        Box::new(self.backend).finish()
    }
}
