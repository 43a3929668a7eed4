//! Flowing composition of Markdown-flavoured text over fixed-size pages.

mod block;

pub use self::block::{BlockKind, ContentBlock, classify};

use crate::algorithms::pagination::Cursor;
use crate::config::NarrativeConfig;
use crate::document::Document;
use crate::style::TextStyle;
use crate::text::{sanitize, wrap_words};
use folio_render_core::{DocumentBackend, RenderError};
use folio_types::Point;

/// Places classified lines top to bottom, opening pages as the cursor
/// reaches the bottom margin.
#[derive(Debug, Clone, Default)]
pub struct FlowingCompositor {
    config: NarrativeConfig,
}

impl FlowingCompositor {
    pub fn new(config: NarrativeConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &NarrativeConfig {
        &self.config
    }

    /// Composes every line into a new document on `backend`.
    ///
    /// The result always has at least one page. Only backend failures are errors.
    pub fn compose<B, I, S>(&self, backend: B, lines: I) -> Result<Document<B>, RenderError>
    where
        B: DocumentBackend,
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut doc = Document::new(backend)?;
        let first = doc.add_page(self.config.page_size())?;
        let mut cursor = Cursor::new(first, self.config.top(), self.config.margin);

        let mut blocks = 0usize;
        for line in lines {
            let block = classify(line.as_ref());
            self.place_block(&mut doc, &mut cursor, &block)?;
            blocks += 1;
        }

        log::debug!(
            "Composed {} source lines into {} pages",
            blocks,
            doc.page_count()
        );
        Ok(doc)
    }

    fn place_block<B: DocumentBackend>(
        &self,
        doc: &mut Document<B>,
        cursor: &mut Cursor,
        block: &ContentBlock,
    ) -> Result<(), RenderError> {
        match block.kind {
            BlockKind::Blank => cursor.advance(self.config.blank_gap),
            BlockKind::Rule => cursor.advance(self.config.rule_gap),
            kind => {
                let text = sanitize(&block.display_text());
                if text.is_empty() {
                    return Ok(());
                }
                let style = kind.style();
                let x = self.config.margin + kind.indent();
                let max_width = self.config.printable_width() - kind.indent();

                cursor.advance(kind.gap_before());
                let lines = wrap_words(&text, max_width, |s| doc.measure(&style, s))?;
                for line in &lines {
                    self.draw_line(doc, cursor, line, x, &style)?;
                }
                cursor.advance(kind.gap_after());
            }
        }
        Ok(())
    }

    fn draw_line<B: DocumentBackend>(
        &self,
        doc: &mut Document<B>,
        cursor: &mut Cursor,
        line: &str,
        x: f32,
        style: &TextStyle,
    ) -> Result<(), RenderError> {
        if cursor.needs_break() {
            let page = doc.add_page(self.config.page_size())?;
            cursor.reset(page);
        }
        doc.draw_text(cursor.page, line, Point::new(x, cursor.y), style)?;
        cursor.advance(self.config.line_height);
        Ok(())
    }
}
