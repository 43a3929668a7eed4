use crate::style::{ACCENT, NEUTRAL_DARK, TEXT, TextStyle};
use crate::text::strip_inline_markers;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlockKind {
    H1,
    H2,
    H3,
    Bold,
    ListItem,
    TableRow,
    Plain,
    /// Whitespace-only source line. Advances the cursor, draws nothing.
    Blank,
    /// Horizontal rule (`---`, `***`, `___`). Advances the cursor, draws nothing.
    Rule,
}

impl BlockKind {
    pub fn style(&self) -> TextStyle {
        match self {
            BlockKind::H1 => TextStyle::bold(20.0, ACCENT),
            BlockKind::H2 => TextStyle::bold(16.0, ACCENT),
            BlockKind::H3 => TextStyle::bold(14.0, NEUTRAL_DARK),
            BlockKind::Bold => TextStyle::bold(11.0, TEXT),
            BlockKind::ListItem => TextStyle::regular(10.0, TEXT),
            BlockKind::TableRow => TextStyle::regular(9.0, NEUTRAL_DARK),
            BlockKind::Plain | BlockKind::Blank | BlockKind::Rule => TextStyle::regular(10.0, TEXT),
        }
    }

    pub fn indent(&self) -> f32 {
        match self {
            BlockKind::ListItem => 12.0,
            _ => 0.0,
        }
    }

    pub fn gap_before(&self) -> f32 {
        match self {
            BlockKind::H2 => 4.0,
            _ => 0.0,
        }
    }

    pub fn gap_after(&self) -> f32 {
        match self {
            BlockKind::H1 => 8.0,
            BlockKind::H2 => 6.0,
            BlockKind::H3 => 4.0,
            _ => 0.0,
        }
    }
}

/// One classified source line, with its markers already removed.
#[derive(Debug, Clone, PartialEq)]
pub struct ContentBlock {
    pub kind: BlockKind,
    pub text: String,
}

impl ContentBlock {
    fn new(kind: BlockKind, text: impl Into<String>) -> Self {
        Self {
            kind,
            text: text.into(),
        }
    }

    /// The text as it is drawn. List items get their bullet here.
    pub fn display_text(&self) -> String {
        match self.kind {
            BlockKind::ListItem => format!("- {}", self.text),
            _ => self.text.clone(),
        }
    }
}

const CHECK_MARKERS: [(&str, bool); 8] = [
    ("- [ ] ", false),
    ("- [x] ", true),
    ("- [X] ", true),
    ("☐ ", false),
    ("☑ ", true),
    ("✅ ", true),
    ("✓ ", true),
    ("✔ ", true),
];

const BULLET_MARKERS: [&str; 4] = ["- ", "* ", "+ ", "• "];

const CELL_SEPARATOR: &str = "  |  ";

/// Classifies one raw source line. Total over any input.
pub fn classify(line: &str) -> ContentBlock {
    let trimmed = line.trim();
    if trimmed.is_empty() {
        return ContentBlock::new(BlockKind::Blank, "");
    }
    if is_rule(trimmed) {
        return ContentBlock::new(BlockKind::Rule, "");
    }
    if let Some(block) = heading(trimmed) {
        return block;
    }
    if let Some(block) = list_item(trimmed) {
        return block;
    }
    if trimmed.starts_with('|') {
        return table_row(trimmed);
    }
    if trimmed.contains("**") || trimmed.contains("__") {
        return ContentBlock::new(BlockKind::Bold, strip_inline_markers(trimmed).trim());
    }
    ContentBlock::new(BlockKind::Plain, strip_inline_markers(trimmed).trim())
}

fn is_rule(trimmed: &str) -> bool {
    trimmed.chars().count() >= 3
        && ['-', '*', '_']
            .iter()
            .any(|marker| trimmed.chars().all(|c| c == *marker))
}

fn heading(trimmed: &str) -> Option<ContentBlock> {
    let level = trimmed.chars().take_while(|c| *c == '#').count();
    if level == 0 {
        return None;
    }
    let rest = trimmed[level..].strip_prefix(' ')?;
    let kind = match level {
        1 => BlockKind::H1,
        2 => BlockKind::H2,
        _ => BlockKind::H3,
    };
    Some(ContentBlock::new(kind, strip_inline_markers(rest).trim()))
}

fn list_item(trimmed: &str) -> Option<ContentBlock> {
    for (marker, checked) in CHECK_MARKERS {
        if let Some(rest) = trimmed.strip_prefix(marker) {
            let state = if checked { "[x]" } else { "[ ]" };
            let text = format!("{} {}", state, strip_inline_markers(rest).trim());
            return Some(ContentBlock::new(BlockKind::ListItem, text));
        }
    }
    BULLET_MARKERS.iter().find_map(|marker| {
        trimmed
            .strip_prefix(marker)
            .map(|rest| ContentBlock::new(BlockKind::ListItem, strip_inline_markers(rest).trim()))
    })
}

fn table_row(trimmed: &str) -> ContentBlock {
    let inner = trimmed.trim_start_matches('|').trim_end_matches('|');
    let cells: Vec<&str> = inner.split('|').map(str::trim).collect();
    if is_alignment_row(&cells) {
        return ContentBlock::new(BlockKind::TableRow, "");
    }
    ContentBlock::new(
        BlockKind::TableRow,
        strip_inline_markers(&cells.join(CELL_SEPARATOR)),
    )
}

/// `|---|:--:|` style separators between a Markdown table header and its body.
fn is_alignment_row(cells: &[&str]) -> bool {
    cells.iter().any(|cell| cell.contains('-'))
        && cells
            .iter()
            .all(|cell| cell.chars().all(|c| matches!(c, '-' | ':' | ' ')))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kind_and_text(line: &str) -> (BlockKind, String) {
        let block = classify(line);
        (block.kind, block.display_text())
    }

    #[test]
    fn headings_by_level() {
        assert_eq!(kind_and_text("# Resumen"), (BlockKind::H1, "Resumen".into()));
        assert_eq!(kind_and_text("## Ventas"), (BlockKind::H2, "Ventas".into()));
        assert_eq!(kind_and_text("### Detalle"), (BlockKind::H3, "Detalle".into()));
        assert_eq!(kind_and_text("#### Nota"), (BlockKind::H3, "Nota".into()));
        assert_eq!(kind_and_text("#hashtag").0, BlockKind::Plain);
    }

    #[test]
    fn list_and_check_items() {
        assert_eq!(kind_and_text("- Pagar"), (BlockKind::ListItem, "- Pagar".into()));
        assert_eq!(kind_and_text("• Cobrar"), (BlockKind::ListItem, "- Cobrar".into()));
        assert_eq!(kind_and_text("- [ ] Revisar"), (BlockKind::ListItem, "- [ ] Revisar".into()));
        assert_eq!(kind_and_text("- [x] Hecho"), (BlockKind::ListItem, "- [x] Hecho".into()));
        assert_eq!(kind_and_text("✅ Enviado"), (BlockKind::ListItem, "- [x] Enviado".into()));
        assert_eq!(kind_and_text("☐ Pendiente"), (BlockKind::ListItem, "- [ ] Pendiente".into()));
    }

    #[test]
    fn table_rows_join_cells() {
        assert_eq!(
            kind_and_text("| Mes | Importe |"),
            (BlockKind::TableRow, "Mes  |  Importe".into())
        );
        assert_eq!(kind_and_text("|---|:--:|"), (BlockKind::TableRow, String::new()));
        assert_eq!(kind_and_text("| --- | --- |"), (BlockKind::TableRow, String::new()));
    }

    #[test]
    fn bold_and_plain() {
        assert_eq!(kind_and_text("Total **1.200 €**"), (BlockKind::Bold, "Total 1.200 €".into()));
        assert_eq!(kind_and_text("__Aviso__"), (BlockKind::Bold, "Aviso".into()));
        assert_eq!(kind_and_text("Usa `cargo` *ya*"), (BlockKind::Plain, "Usa cargo ya".into()));
    }

    #[test]
    fn blanks_and_rules() {
        assert_eq!(classify("   ").kind, BlockKind::Blank);
        assert_eq!(classify("---").kind, BlockKind::Rule);
        assert_eq!(classify("*****").kind, BlockKind::Rule);
        assert_eq!(classify("___").kind, BlockKind::Rule);
        assert_eq!(classify("--").kind, BlockKind::Plain);
        assert_eq!(classify("-*-").kind, BlockKind::Plain);
    }

    #[test]
    fn styles_follow_kind() {
        assert_eq!(BlockKind::H1.style(), TextStyle::bold(20.0, ACCENT));
        assert_eq!(BlockKind::TableRow.style().size, 9.0);
        assert_eq!(BlockKind::ListItem.indent(), 12.0);
        assert_eq!(BlockKind::H2.gap_before() + BlockKind::H2.gap_after(), 10.0);
    }
}
