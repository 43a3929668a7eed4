use crate::utils::get_styled_font_name;
use folio_types::{Color, Point};

/// Handle to a page created by a backend. Indices are assigned in creation order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PageId(pub usize);

/// Handle to a font embedded in a backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FontId(pub usize);

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum FontWeight {
    #[default]
    Regular,
    Bold,
}

/// The fonts every backend can embed without shipping font programs.
///
/// Both use WinAnsi encoding, which is why narrative text is filtered to
/// Latin-1 before it reaches a backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StandardFont {
    Helvetica,
    HelveticaBold,
}

impl StandardFont {
    pub fn weight(&self) -> FontWeight {
        match self {
            StandardFont::Helvetica => FontWeight::Regular,
            StandardFont::HelveticaBold => FontWeight::Bold,
        }
    }

    pub fn postscript_name(&self) -> String {
        get_styled_font_name("Helvetica", self.weight())
    }
}

/// A single line of text drawn with its baseline starting at `origin`.
#[derive(Debug, Clone, PartialEq)]
pub struct TextRun {
    pub text: String,
    pub origin: Point,
    pub font: FontId,
    pub size: f32,
    pub color: Color,
}

#[derive(Debug, Clone, PartialEq)]
pub struct LineSegment {
    pub from: Point,
    pub to: Point,
    pub thickness: f32,
    pub color: Color,
}

/// One entry of a page's append-only display list.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawOp {
    Text(TextRun),
    Line(LineSegment),
}

impl DrawOp {
    pub fn as_text(&self) -> Option<&TextRun> {
        match self {
            DrawOp::Text(run) => Some(run),
            DrawOp::Line(_) => None,
        }
    }
}
