//! Final pass over a composed document: page footers, then serialization.

use crate::config::FooterConfig;
use folio_layout::Document;
use folio_layout::TextStyle;
use folio_layout::text::sanitize;
use folio_render_core::{DocumentBackend, RenderError};
use folio_types::Point;

/// `"<label> | Página {n} de {total}"`, with `n` counted from 1.
pub fn footer_text(label: &str, index: usize, total: usize) -> String {
    format!("{} | Página {} de {}", label, index + 1, total)
}

/// Draws the footer on every page in creation order.
pub fn stamp_footers<B: DocumentBackend>(
    doc: &mut Document<B>,
    footer: &FooterConfig,
) -> Result<(), RenderError> {
    let style = TextStyle::regular(footer.font_size, footer.color);
    let label = sanitize(&footer.label);
    let pages = doc.pages().to_vec();
    let total = pages.len();
    for (index, page) in pages.into_iter().enumerate() {
        let text = footer_text(&label, index, total);
        doc.draw_text(page, &text, Point::new(footer.x, footer.y), &style)?;
    }
    Ok(())
}

/// Stamps footers and serializes. Either all bytes come back or an error does.
pub fn assemble<B: DocumentBackend>(
    mut doc: Document<B>,
    footer: &FooterConfig,
) -> Result<Vec<u8>, RenderError> {
    stamp_footers(&mut doc, footer)?;
    let pages = doc.page_count();
    let bytes = doc.finish()?;
    log::debug!("Assembled {} pages ({} bytes)", pages, bytes.len());
    Ok(bytes)
}
