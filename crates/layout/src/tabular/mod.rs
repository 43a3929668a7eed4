//! Single-page tabular report over grouped payment records.

mod model;

pub use self::model::{Group, SubItem, total_lines};

use crate::config::TabularConfig;
use crate::document::Document;
use crate::format::{format_currency, format_date};
use crate::style::{ACCENT, NEUTRAL_DARK, RULE_LIGHT, TEXT, TextStyle};
use crate::text::{sanitize, truncate_to_width};
use folio_render_core::{DocumentBackend, PageId, RenderError};
use folio_types::{Point, Size};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ColumnSpec {
    pub label: &'static str,
    pub width: f32,
    pub align_right: bool,
}

const fn column(label: &'static str, width: f32) -> ColumnSpec {
    ColumnSpec {
        label,
        width,
        align_right: false,
    }
}

pub const COLUMNS: [ColumnSpec; 6] = [
    column("Evento", 150.0),
    column("Cliente", 130.0),
    column("Fecha", 80.0),
    ColumnSpec {
        label: "Importe",
        width: 90.0,
        align_right: true,
    },
    column("Personal", 150.0),
    column("Referencia", 150.0),
];

/// Horizontal space kept free at the right edge of every cell.
const CELL_PADDING: f32 = 6.0;
/// Baseline offset from the top of a row.
const ROW_BASELINE: f32 = 12.0;

const TITLE: TextStyle = TextStyle::bold(16.0, ACCENT);
const CAPTION: TextStyle = TextStyle::regular(10.0, TEXT);
const TOTAL: TextStyle = TextStyle::bold(10.0, TEXT);
const COLUMN_HEADER: TextStyle = TextStyle::bold(9.0, NEUTRAL_DARK);
const CELL: TextStyle = TextStyle::regular(9.0, TEXT);

/// Cell texts of physical row `index` of `group`.
///
/// The group's own fields appear on row 0 only; every row carries the
/// matching sub-item, or blanks when the group has none.
pub fn row_cells(group: &Group, index: usize) -> [String; 6] {
    let (staff, reference) = group
        .sub_items
        .get(index)
        .map(|item| (sanitize(&item.name), sanitize(&item.identifier)))
        .unwrap_or_default();
    if index == 0 {
        [
            sanitize(&group.name),
            sanitize(&group.counterpart),
            format_date(group.date),
            format_currency(group.amount),
            staff,
            reference,
        ]
    } else {
        [String::new(), String::new(), String::new(), String::new(), staff, reference]
    }
}

/// Draws all groups on one page tall enough to hold every row.
#[derive(Debug, Clone, Default)]
pub struct TabularCompositor {
    config: TabularConfig,
}

impl TabularCompositor {
    pub fn new(config: TabularConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &TabularConfig {
        &self.config
    }

    /// Returns `Ok(None)` for an empty slice without touching the backend.
    pub fn compose<B: DocumentBackend>(
        &self,
        backend: B,
        groups: &[Group],
    ) -> Result<Option<Document<B>>, RenderError> {
        let (Some(first), Some(last)) = (groups.first(), groups.last()) else {
            log::info!("No groups to report, skipping document generation");
            return Ok(None);
        };

        let rows = total_lines(groups);
        let height = self.config.page_height(rows);
        let mut doc = Document::new(backend)?;
        let page = doc.add_page(Size::new(self.config.page_width, height))?;

        let mut y = height - self.config.margin;
        self.draw_header(&mut doc, page, y, first, last, groups)?;
        y -= self.config.header_height;

        self.draw_column_header(&mut doc, page, y)?;
        y -= self.config.row_height;

        for group in groups {
            for index in 0..group.row_count() {
                self.draw_row(&mut doc, page, y, &row_cells(group, index))?;
                self.draw_separator(&mut doc, page, y - self.config.row_height, 0.5, RULE_LIGHT)?;
                y -= self.config.row_height;
            }
        }

        log::debug!("Composed {} groups into {} rows ({}pt tall)", groups.len(), rows, height);
        Ok(Some(doc))
    }

    fn draw_header<B: DocumentBackend>(
        &self,
        doc: &mut Document<B>,
        page: PageId,
        top: f32,
        first: &Group,
        last: &Group,
        groups: &[Group],
    ) -> Result<(), RenderError> {
        let x = self.config.margin;
        let title = sanitize(&self.config.title);
        doc.draw_text(page, &title, Point::new(x, top - 16.0), &TITLE)?;

        let period = format!(
            "Periodo: {} - {}",
            format_date(first.date),
            format_date(last.date)
        );
        doc.draw_text(page, &period, Point::new(x, top - 34.0), &CAPTION)?;

        let total: f64 = groups.iter().map(|g| g.amount).sum();
        let total = format!("Total: {}", format_currency(total));
        doc.draw_text(page, &total, Point::new(x, top - 50.0), &TOTAL)
    }

    fn draw_column_header<B: DocumentBackend>(
        &self,
        doc: &mut Document<B>,
        page: PageId,
        y: f32,
    ) -> Result<(), RenderError> {
        let labels = COLUMNS.map(|c| c.label.to_string());
        self.draw_cells(doc, page, y, &labels, &COLUMN_HEADER)?;
        self.draw_separator(doc, page, y - self.config.row_height, 0.8, NEUTRAL_DARK)
    }

    fn draw_row<B: DocumentBackend>(
        &self,
        doc: &mut Document<B>,
        page: PageId,
        y: f32,
        cells: &[String; 6],
    ) -> Result<(), RenderError> {
        self.draw_cells(doc, page, y, cells, &CELL)
    }

    fn draw_cells<B: DocumentBackend>(
        &self,
        doc: &mut Document<B>,
        page: PageId,
        y: f32,
        cells: &[String; 6],
        style: &TextStyle,
    ) -> Result<(), RenderError> {
        let mut x = self.config.margin;
        for (col, text) in COLUMNS.iter().zip(cells) {
            if !text.is_empty() {
                let max_width = col.width - CELL_PADDING;
                let fitted = truncate_to_width(text, max_width, |s| doc.measure(style, s))?;
                let offset = if col.align_right {
                    max_width - doc.measure(style, &fitted)?
                } else {
                    0.0
                };
                doc.draw_text(page, &fitted, Point::new(x + offset, y - ROW_BASELINE), style)?;
            }
            x += col.width;
        }
        Ok(())
    }

    fn draw_separator<B: DocumentBackend>(
        &self,
        doc: &mut Document<B>,
        page: PageId,
        y: f32,
        thickness: f32,
        color: folio_types::Color,
    ) -> Result<(), RenderError> {
        let left = self.config.margin;
        let right = self.config.page_width - self.config.margin;
        doc.draw_rule(page, Point::new(left, y), Point::new(right, y), thickness, color)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{compose_report, group, runs_on};
    use proptest::prelude::*;

    fn sample() -> Vec<Group> {
        vec![
            group("Boda", 2, 1200.0, &[("Ana", "ES01"), ("Luis", "ES02"), ("Eva", "ES03")]),
            group("Cena", 9, 34.56, &[]),
        ]
    }

    #[test]
    fn empty_input_renders_nothing() {
        assert!(compose_report(&[]).is_none());
    }

    #[test]
    fn page_height_covers_every_row() {
        let backend = compose_report(&sample()).unwrap();
        assert_eq!(backend.pages().len(), 1);
        // 4 physical rows: 40 + 60 + (4 + 5) * 18 + 40
        assert_eq!(backend.pages()[0].size, Size::new(842.0, 302.0));
    }

    #[test]
    fn header_shows_period_and_total() {
        let backend = compose_report(&sample()).unwrap();
        let text = backend.all_text();
        assert_eq!(text[0], "Informe de pagos");
        assert_eq!(text[1], "Periodo: 02/03/2024 - 09/03/2024");
        assert_eq!(text[2], "Total: 1.234,56 €");
        assert_eq!(&text[3..9], &["Evento", "Cliente", "Fecha", "Importe", "Personal", "Referencia"]);
    }

    #[test]
    fn group_scalars_only_on_first_row() {
        let groups = sample();
        assert_eq!(row_cells(&groups[0], 0)[0], "Boda");
        assert_eq!(row_cells(&groups[0], 0)[3], "1.200,00 €");
        assert_eq!(
            row_cells(&groups[0], 2),
            ["", "", "", "", "Eva", "ES03"].map(String::from)
        );
        assert_eq!(row_cells(&groups[1], 0)[4], "");
    }

    #[test]
    fn one_light_separator_per_row() {
        let backend = compose_report(&sample()).unwrap();
        let lines: Vec<_> = backend.pages()[0].lines().collect();
        // column header rule plus one per physical row
        assert_eq!(lines.len(), 5);
        assert!(lines[1..].iter().all(|l| l.color == RULE_LIGHT && l.thickness == 0.5));
        assert_eq!(lines[4].from.y, 302.0 - 40.0 - 60.0 - 5.0 * 18.0);
    }

    #[test]
    fn wide_cells_are_truncated() {
        let long = "Congreso internacional de tesoreria y medios de pago";
        let backend = compose_report(&[group(long, 1, 1.0, &[])]).unwrap();
        let runs = runs_on(&backend, 0);
        let event = runs.iter().find(|r| r.text.starts_with("Congreso")).unwrap();
        assert!(event.text.ends_with("..."));
        // 9pt at 0.5 advance is 4.5pt per char against 144pt of room.
        assert!(event.text.chars().count() as f32 * 4.5 <= 144.0);
    }

    #[test]
    fn amounts_are_right_aligned() {
        let backend = compose_report(&[group("A", 1, 5.0, &[])]).unwrap();
        let runs = runs_on(&backend, 0);
        let amount = runs.iter().find(|r| r.text == "5,00 €").unwrap();
        // Importe starts at 40 + 150 + 130 + 80 = 400 and has 84pt of room.
        assert_eq!(amount.origin.x + 6.0 * 4.5, 484.0);
    }

    proptest! {
        #[test]
        fn rows_match_group_sizes(sizes in prop::collection::vec(0usize..5, 1..8)) {
            let groups: Vec<Group> = sizes
                .iter()
                .enumerate()
                .map(|(i, n)| {
                    let staff: Vec<(String, String)> =
                        (0..*n).map(|k| (format!("P{k}"), format!("ID{k}"))).collect();
                    let refs: Vec<(&str, &str)> =
                        staff.iter().map(|(a, b)| (a.as_str(), b.as_str())).collect();
                    group(&format!("G{i}"), 1, 1.0, &refs)
                })
                .collect();
            let expected: usize = sizes.iter().map(|n| (*n).max(1)).sum();
            prop_assert_eq!(total_lines(&groups), expected);

            let backend = compose_report(&groups).unwrap();
            let page = &backend.pages()[0];
            prop_assert_eq!(page.lines().count(), expected + 1);
            prop_assert_eq!(page.size.height, TabularConfig::default().page_height(expected));
        }
    }
}
