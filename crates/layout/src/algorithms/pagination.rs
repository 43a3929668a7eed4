use folio_render_core::PageId;

/// Vertical write position on the active page, in PDF user space.
///
/// `y` is the baseline of the next line and decreases as content is placed.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Cursor {
    pub y: f32,
    pub page: PageId,
    top: f32,
    bottom: f32,
}

impl Cursor {
    /// A cursor at the top of `page`. `top` is the first baseline and
    /// `bottom` the threshold at or below which nothing more is drawn.
    pub fn new(page: PageId, top: f32, bottom: f32) -> Self {
        Self {
            y: top,
            page,
            top,
            bottom,
        }
    }

    /// Whether the next line must go on a new page.
    pub fn needs_break(&self) -> bool {
        self.y <= self.bottom
    }

    pub fn advance(&mut self, dy: f32) {
        self.y -= dy;
    }

    /// Moves to the top of a freshly added page.
    pub fn reset(&mut self, page: PageId) {
        self.page = page;
        self.y = self.top;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn breaks_at_the_bottom_margin_inclusive() {
        let mut cursor = Cursor::new(PageId(0), 78.0, 50.0);
        assert!(!cursor.needs_break());
        cursor.advance(14.0);
        assert!(!cursor.needs_break());
        cursor.advance(14.0);
        assert_eq!(cursor.y, 50.0);
        assert!(cursor.needs_break());

        cursor.reset(PageId(1));
        assert_eq!(cursor.page, PageId(1));
        assert_eq!(cursor.y, 78.0);
    }
}
