use crate::LayoutError;
use folio_types::Size;
use serde::{Deserialize, Serialize};

/// Page geometry for flowing text. All values are in points.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct NarrativeConfig {
    pub page_width: f32,
    pub page_height: f32,
    /// Applied on all four sides. The bottom margin is also the page-break threshold.
    pub margin: f32,
    /// Vertical advance after every drawn line.
    pub line_height: f32,
    /// Vertical advance for an empty source line.
    pub blank_gap: f32,
    /// Vertical advance for a horizontal-rule source line.
    pub rule_gap: f32,
}

impl Default for NarrativeConfig {
    fn default() -> Self {
        Self {
            page_width: 612.0,
            page_height: 842.0,
            margin: 50.0,
            line_height: 14.0,
            blank_gap: 6.0,
            rule_gap: 10.0,
        }
    }
}

impl NarrativeConfig {
    pub fn page_size(&self) -> Size {
        Size::new(self.page_width, self.page_height)
    }

    /// Width available to a line that starts at the left margin.
    pub fn printable_width(&self) -> f32 {
        self.page_width - 2.0 * self.margin
    }

    /// Baseline of the first line on a fresh page.
    pub fn top(&self) -> f32 {
        self.page_height - self.margin
    }

    pub fn validate(&self) -> Result<(), LayoutError> {
        if !(self.page_width > 0.0 && self.page_height > 0.0) {
            return Err(LayoutError::InvalidGeometry(format!(
                "page size must be positive, got {}x{}",
                self.page_width, self.page_height
            )));
        }
        if self.margin < 0.0 || 2.0 * self.margin >= self.page_width.min(self.page_height) {
            return Err(LayoutError::InvalidGeometry(format!(
                "margin {} leaves no printable area",
                self.margin
            )));
        }
        if self.line_height <= 0.0 {
            return Err(LayoutError::InvalidGeometry(format!(
                "line height must be positive, got {}",
                self.line_height
            )));
        }
        Ok(())
    }
}

/// Geometry of the single-page payment report. All values are in points.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct TabularConfig {
    pub page_width: f32,
    pub margin: f32,
    /// Space reserved for the title, period and total captions.
    pub header_height: f32,
    pub row_height: f32,
    /// Space kept free at the bottom for the page footer.
    pub footer_allowance: f32,
    pub title: String,
}

impl Default for TabularConfig {
    fn default() -> Self {
        Self {
            page_width: 842.0,
            margin: 40.0,
            header_height: 60.0,
            row_height: 18.0,
            footer_allowance: 40.0,
            title: "Informe de pagos".to_string(),
        }
    }
}

impl TabularConfig {
    /// Rows reserved beyond the data rows: the column header plus slack.
    pub const EXTRA_ROWS: usize = 5;

    /// Height of the one page that holds `total_lines` physical rows.
    pub fn page_height(&self, total_lines: usize) -> f32 {
        self.margin
            + self.header_height
            + (total_lines + Self::EXTRA_ROWS) as f32 * self.row_height
            + self.footer_allowance
    }

    pub fn validate(&self) -> Result<(), LayoutError> {
        if self.row_height <= 0.0 || self.header_height < 0.0 || self.footer_allowance < 0.0 {
            return Err(LayoutError::InvalidGeometry(
                "row height must be positive and allowances non-negative".to_string(),
            ));
        }
        if self.margin < 0.0 || 2.0 * self.margin >= self.page_width {
            return Err(LayoutError::InvalidGeometry(format!(
                "margin {} leaves no printable width on a {}pt page",
                self.margin, self.page_width
            )));
        }
        Ok(())
    }
}
