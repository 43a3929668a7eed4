use crate::helpers;
use crate::metrics;
use folio_render_core::{
    DocumentBackend, DrawOp, FontId, LineSegment, PageId, RenderError, StandardFont, TextRun,
};
use folio_types::Size;
use lopdf::{dictionary, Dictionary, Document, Object, Stream};

struct PageBuffer {
    size: Size,
    ops: Vec<DrawOp>,
}

/// A `DocumentBackend` that produces PDF bytes through `lopdf` objects.
///
/// Every call works on in-memory display lists; the object graph is only
/// built and saved by `finish`, so a failed run never leaves partial output behind.
#[derive(Default)]
pub struct LopdfBackend {
    fonts: Vec<StandardFont>,
    pages: Vec<PageBuffer>,
}

impl LopdfBackend {
    pub fn new() -> Self {
        Self::default()
    }

    fn font(&self, id: FontId) -> Result<StandardFont, RenderError> {
        self.fonts.get(id.0).copied().ok_or(RenderError::UnknownFont(id))
    }

    fn page_mut(&mut self, page: PageId) -> Result<&mut PageBuffer, RenderError> {
        self.pages.get_mut(page.0).ok_or(RenderError::UnknownPage(page))
    }

    fn resource_names(&self) -> Vec<String> {
        (1..=self.fonts.len()).map(|i| format!("F{}", i)).collect()
    }

    fn font_dictionary(&self, names: &[String]) -> Dictionary {
        let mut font_dict = Dictionary::new();
        for (font, name) in self.fonts.iter().zip(names) {
            let single_font_dict = dictionary! {
                "Type" => "Font", "Subtype" => "Type1", "BaseFont" => font.postscript_name(), "Encoding" => "WinAnsiEncoding",
            };
            font_dict.set(name.as_bytes(), Object::Dictionary(single_font_dict));
        }
        font_dict
    }
}

impl DocumentBackend for LopdfBackend {
    fn embed_font(&mut self, font: StandardFont) -> Result<FontId, RenderError> {
        if let Some(idx) = self.fonts.iter().position(|f| *f == font) {
            return Ok(FontId(idx));
        }
        self.fonts.push(font);
        log::debug!("Embedded standard font {}", font.postscript_name());
        Ok(FontId(self.fonts.len() - 1))
    }

    fn add_page(&mut self, size: Size) -> Result<PageId, RenderError> {
        if !(size.width > 0.0 && size.height > 0.0) {
            return Err(RenderError::Other(format!(
                "Page size must be positive, got {}x{}",
                size.width, size.height
            )));
        }
        self.pages.push(PageBuffer {
            size,
            ops: Vec::new(),
        });
        Ok(PageId(self.pages.len() - 1))
    }

    fn page_count(&self) -> usize {
        self.pages.len()
    }

    fn measure_text(&self, font: FontId, text: &str, size: f32) -> Result<f32, RenderError> {
        Ok(metrics::text_width(self.font(font)?, text, size))
    }

    fn draw_text(&mut self, page: PageId, run: TextRun) -> Result<(), RenderError> {
        self.font(run.font)?;
        self.page_mut(page)?.ops.push(DrawOp::Text(run));
        Ok(())
    }

    fn draw_line(&mut self, page: PageId, line: LineSegment) -> Result<(), RenderError> {
        self.page_mut(page)?.ops.push(DrawOp::Line(line));
        Ok(())
    }

    fn finish(self: Box<Self>) -> Result<Vec<u8>, RenderError> {
        let names = self.resource_names();
        let mut document = Document::with_version("1.7");
        let pages_id = document.new_object_id();
        let resources_id = document.add_object(dictionary! { "Font" => self.font_dictionary(&names) });

        let mut kids = Vec::with_capacity(self.pages.len());
        for page in &self.pages {
            let content = helpers::render_ops_to_content(&page.ops, &names)?;
            let content_id = document.add_object(Stream::new(dictionary! {}, content.encode()?));
            let page_dict = dictionary! {
                "Type" => "Page",
                "Parent" => pages_id,
                "MediaBox" => vec![0.into(), 0.into(), page.size.width.into(), page.size.height.into()],
                "Contents" => content_id,
                "Resources" => resources_id,
            };
            kids.push(Object::from(document.add_object(page_dict)));
        }

        let pages_dict = dictionary! {
            "Type" => "Pages",
            "Kids" => kids,
            "Count" => self.pages.len() as i64,
        };
        document.objects.insert(pages_id, Object::Dictionary(pages_dict));
        let catalog_id = document.add_object(dictionary! { "Type" => "Catalog", "Pages" => pages_id });
        document.trailer.set("Root", catalog_id);

        let mut bytes = Vec::new();
        document.save_to(&mut bytes)?;
        log::debug!("Serialized {} pages into {} bytes", self.pages.len(), bytes.len());
        Ok(bytes)
    }
}
