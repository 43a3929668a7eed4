//! Translation of a page display list into PDF content-stream operators.

use folio_render_core::utils::to_win_ansi;
use folio_render_core::{DrawOp, LineSegment, RenderError, TextRun};
use folio_types::Color;
use lopdf::content::{Content, Operation};
use lopdf::{Object, StringFormat};

/// Encodes a page's draw operations. `font_names` maps a `FontId` index to its
/// resource name (`F1`, `F2`, ...).
pub fn render_ops_to_content(ops: &[DrawOp], font_names: &[String]) -> Result<Content, RenderError> {
    let mut page_ctx = PageContext::new(font_names);
    for op in ops {
        page_ctx.draw(op)?;
    }
    Ok(page_ctx.finish())
}

struct PageContext<'a> {
    content: Content,
    state: LopdfPageRenderState,
    font_names: &'a [String],
}

/// Text state persists across `BT`/`ET`, so font and colors are only emitted on change.
#[derive(Default, Clone, PartialEq)]
struct LopdfPageRenderState {
    font_name: String,
    font_size: f32,
    fill_color: Option<Color>,
    stroke_color: Option<Color>,
    line_width: Option<f32>,
}

impl<'a> PageContext<'a> {
    fn new(font_names: &'a [String]) -> Self {
        Self {
            content: Content { operations: vec![] },
            state: Default::default(),
            font_names,
        }
    }

    fn finish(self) -> Content {
        self.content
    }

    fn push(&mut self, operator: &str, operands: Vec<Object>) {
        self.content.operations.push(Operation::new(operator, operands));
    }

    fn draw(&mut self, op: &DrawOp) -> Result<(), RenderError> {
        match op {
            DrawOp::Text(run) => self.draw_text(run),
            DrawOp::Line(line) => {
                self.draw_line(line);
                Ok(())
            }
        }
    }

    fn set_font(&mut self, run: &TextRun) -> Result<(), RenderError> {
        let name = self
            .font_names
            .get(run.font.0)
            .ok_or(RenderError::UnknownFont(run.font))?;
        if self.state.font_name != *name || self.state.font_size != run.size {
            self.content.operations.push(Operation::new(
                "Tf",
                vec![Object::Name(name.as_bytes().to_vec()), run.size.into()],
            ));
            self.state.font_name = name.clone();
            self.state.font_size = run.size;
        }
        Ok(())
    }

    fn set_fill_color(&mut self, color: &Color) {
        if self.state.fill_color.as_ref() != Some(color) {
            let [r, g, b] = color.to_unit_rgb();
            self.push("rg", vec![r.into(), g.into(), b.into()]);
            self.state.fill_color = Some(*color);
        }
    }

    fn set_stroke(&mut self, color: &Color, width: f32) {
        if self.state.stroke_color.as_ref() != Some(color) {
            let [r, g, b] = color.to_unit_rgb();
            self.push("RG", vec![r.into(), g.into(), b.into()]);
            self.state.stroke_color = Some(*color);
        }
        if self.state.line_width != Some(width) {
            self.push("w", vec![width.into()]);
            self.state.line_width = Some(width);
        }
    }

    fn draw_text(&mut self, run: &TextRun) -> Result<(), RenderError> {
        if run.text.trim().is_empty() {
            return Ok(());
        }
        self.push("BT", vec![]);
        self.set_font(run)?;
        self.set_fill_color(&run.color);
        self.push("Td", vec![run.origin.x.into(), run.origin.y.into()]);
        self.push(
            "Tj",
            vec![Object::String(to_win_ansi(&run.text), StringFormat::Literal)],
        );
        self.push("ET", vec![]);
        Ok(())
    }

    fn draw_line(&mut self, line: &LineSegment) {
        self.set_stroke(&line.color, line.thickness);
        self.push("m", vec![line.from.x.into(), line.from.y.into()]);
        self.push("l", vec![line.to.x.into(), line.to.y.into()]);
        self.push("S", vec![]);
    }
}
