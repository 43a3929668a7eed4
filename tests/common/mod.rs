#![allow(dead_code)]

use folio::{PdfArtifact, PipelineBuilder, PipelineError, ReportPipeline};
use folio_render_core::utils::to_win_ansi;
use lopdf::Document as LopdfDocument;

pub type TestResult = Result<(), Box<dyn std::error::Error>>;

/// Wrapper around a generated PDF with helper methods
pub struct GeneratedPdf {
    pub doc: LopdfDocument,
}

impl GeneratedPdf {
    pub fn from_bytes(bytes: Vec<u8>) -> Result<Self, Box<dyn std::error::Error>> {
        let doc = LopdfDocument::load_mem(&bytes)?;
        Ok(Self { doc })
    }

    pub fn from_artifact(artifact: &PdfArtifact) -> Result<Self, Box<dyn std::error::Error>> {
        Self::from_bytes(artifact.bytes().to_vec())
    }

    pub fn page_count(&self) -> usize {
        self.doc.get_pages().len()
    }

    /// MediaBox width and height of page `page` (1-based).
    pub fn page_size(&self, page: u32) -> Result<(f32, f32), Box<dyn std::error::Error>> {
        let page_id = *self.doc.get_pages().get(&page).ok_or("no such page")?;
        let media_box = self
            .doc
            .get_object(page_id)?
            .as_dict()?
            .get(b"MediaBox")?
            .as_array()?;
        Ok((media_box[2].as_float()?, media_box[3].as_float()?))
    }

    /// Raw content stream of page `page` (1-based).
    pub fn page_content(&self, page: u32) -> Result<Vec<u8>, Box<dyn std::error::Error>> {
        let page_id = *self.doc.get_pages().get(&page).ok_or("no such page")?;
        Ok(self.doc.get_page_content(page_id)?)
    }

    /// Whether page `page` shows `text` in a single `Tj` operation.
    pub fn shows(&self, page: u32, text: &str) -> bool {
        let mut needle = b"(".to_vec();
        needle.extend(to_win_ansi(text));
        needle.extend_from_slice(b") Tj");
        self.page_content(page)
            .map(|content| content.windows(needle.len()).any(|w| w == needle.as_slice()))
            .unwrap_or(false)
    }
}

pub fn default_pipeline() -> Result<ReportPipeline, PipelineError> {
    let _ = env_logger::builder().is_test(true).try_init();
    PipelineBuilder::new().build()
}

/// Extract all text content from a PDF document
pub fn extract_text(doc: &LopdfDocument) -> String {
    let mut text = String::new();
    let pages = doc.get_pages();
    for page_num in 1..=pages.len() {
        if let Ok(page_text) = doc.extract_text(&[page_num as u32]) {
            text.push_str(&page_text);
            text.push('\n');
        }
    }
    text
}

#[macro_export]
macro_rules! assert_pdf_page_count {
    ($pdf:expr, $count:expr) => {
        assert_eq!(
            $pdf.page_count(),
            $count,
            "Expected {} pages, got {}",
            $count,
            $pdf.page_count()
        );
    };
}

#[macro_export]
macro_rules! assert_page_shows {
    ($pdf:expr, $page:expr, $text:expr) => {
        assert!(
            $pdf.shows($page, $text),
            "Page {} should show '{}', content was:\n{}",
            $page,
            $text,
            String::from_utf8_lossy(&$pdf.page_content($page).unwrap_or_default())
        );
    };
}
