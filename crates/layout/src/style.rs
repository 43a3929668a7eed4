use folio_render_core::FontWeight;
use folio_types::Color;

/// Headings H1/H2.
pub const ACCENT: Color = Color::rgb(0x1F, 0x4E, 0x79);
/// H3 and table rows.
pub const NEUTRAL_DARK: Color = Color::gray(0x33);
/// Body text.
pub const TEXT: Color = Color::gray(0x1A);
/// Footers.
pub const MUTED: Color = Color::gray(0x80);
/// Row separators in the tabular report.
pub const RULE_LIGHT: Color = Color::gray(0xDD);

/// The resolved look of one run of text.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TextStyle {
    pub size: f32,
    pub weight: FontWeight,
    pub color: Color,
}

impl TextStyle {
    pub const fn regular(size: f32, color: Color) -> Self {
        Self {
            size,
            weight: FontWeight::Regular,
            color,
        }
    }

    pub const fn bold(size: f32, color: Color) -> Self {
        Self {
            size,
            weight: FontWeight::Bold,
            color,
        }
    }
}
