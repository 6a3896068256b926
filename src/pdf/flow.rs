use pdf_writer::{Content, Name, Str};

use crate::fonts::{FontEntry, to_winansi_bytes};

// Page geometry in millimetres (A4 portrait). Converted to PDF points only
// when drawing operators are emitted.
pub(crate) const PAGE_WIDTH: f32 = 210.0;
pub(crate) const PAGE_HEIGHT: f32 = 297.0;
pub(crate) const MARGIN: f32 = 20.0;
/// Vertical space reserved at the page bottom for the footer line. Larger
/// than the content margin; the footer pass writes below the layout area.
pub(crate) const BOTTOM_MARGIN: f32 = 25.0;
pub(crate) const CONTENT_WIDTH: f32 = PAGE_WIDTH - 2.0 * MARGIN;

pub(crate) const MM_TO_PT: f32 = 72.0 / 25.4;

pub(crate) const ACCENT: [u8; 3] = [21, 101, 192];
pub(crate) const MUTED: [u8; 3] = [100, 100, 100];
pub(crate) const BLACK: [u8; 3] = [0, 0, 0];
pub(crate) const FOOTER_GRAY: [u8; 3] = [128, 128, 128];
pub(crate) const ERROR_RED: [u8; 3] = [200, 0, 0];

#[derive(Clone, Copy, PartialEq)]
pub(crate) enum Align {
    Left,
    /// Center the text around the given x coordinate.
    Center,
}

/// The write cursor for one generation call: current vertical position
/// (millimetres from the page top) and the accumulated page contents.
///
/// Constructed fresh per invocation and never shared; `y` only grows within
/// a page and resets to the top margin exactly when [`PageFlow::reserve`]
/// breaks to a new page.
pub(crate) struct PageFlow {
    finished: Vec<Content>,
    current: Content,
    pub(crate) y: f32,
}

impl PageFlow {
    pub(crate) fn new() -> Self {
        PageFlow {
            finished: Vec::new(),
            current: Content::new(),
            y: MARGIN,
        }
    }

    /// The only page-break decision point. If `needed` does not fit above
    /// the footer zone, start a new page, reset the cursor to the top margin
    /// and return true; otherwise leave the cursor untouched and return false.
    pub(crate) fn reserve(&mut self, needed: f32) -> bool {
        if self.y + needed > PAGE_HEIGHT - BOTTOM_MARGIN {
            let full = std::mem::replace(&mut self.current, Content::new());
            self.finished.push(full);
            self.y = MARGIN;
            true
        } else {
            false
        }
    }

    pub(crate) fn advance(&mut self, dy: f32) {
        self.y += dy;
    }

    pub(crate) fn page_count(&self) -> usize {
        self.finished.len() + 1
    }

    pub(crate) fn content(&mut self) -> &mut Content {
        &mut self.current
    }

    pub(crate) fn into_pages(self) -> Vec<Content> {
        let mut pages = self.finished;
        pages.push(self.current);
        pages
    }

    /// Draw a line of text with its baseline at the current cursor position.
    /// Does not advance the cursor; vertical movement is always explicit.
    pub(crate) fn text(
        &mut self,
        font: &FontEntry,
        size: f32,
        color: [u8; 3],
        x: f32,
        align: Align,
        text: &str,
    ) {
        let y = self.y;
        draw_text(self.content(), font, size, color, x, y, align, text);
    }

    /// Horizontal rule at the current cursor position.
    pub(crate) fn rule(&mut self, x1: f32, x2: f32, color: [u8; 3]) {
        let y = self.y;
        let content = self.content();
        content.save_state();
        content.set_line_width(0.5);
        content.set_stroke_rgb(
            color[0] as f32 / 255.0,
            color[1] as f32 / 255.0,
            color[2] as f32 / 255.0,
        );
        content.move_to(x1 * MM_TO_PT, (PAGE_HEIGHT - y) * MM_TO_PT);
        content.line_to(x2 * MM_TO_PT, (PAGE_HEIGHT - y) * MM_TO_PT);
        content.stroke();
        content.restore_state();
    }
}

/// Draw one line of text on an arbitrary page content stream. Coordinates
/// are millimetres from the top-left corner; `y` is the text baseline.
pub(crate) fn draw_text(
    content: &mut Content,
    font: &FontEntry,
    size: f32,
    color: [u8; 3],
    x: f32,
    y: f32,
    align: Align,
    text: &str,
) {
    let start_x = match align {
        Align::Left => x,
        Align::Center => x - font.text_width(text, size) / MM_TO_PT / 2.0,
    };
    content.begin_text();
    content.set_font(Name(font.pdf_name.as_bytes()), size);
    content.set_fill_rgb(
        color[0] as f32 / 255.0,
        color[1] as f32 / 255.0,
        color[2] as f32 / 255.0,
    );
    content.next_line(start_x * MM_TO_PT, (PAGE_HEIGHT - y) * MM_TO_PT);
    content.show(Str(&to_winansi_bytes(text)));
    content.end_text();
}

/// Place an image XObject with its top edge at `y_top`, scaled to the given
/// display size in millimetres.
pub(crate) fn draw_image(
    content: &mut Content,
    pdf_name: &str,
    x: f32,
    y_top: f32,
    width: f32,
    height: f32,
) {
    let y_bottom_pt = (PAGE_HEIGHT - y_top - height) * MM_TO_PT;
    content.save_state();
    content.transform([
        width * MM_TO_PT,
        0.0,
        0.0,
        height * MM_TO_PT,
        x * MM_TO_PT,
        y_bottom_pt,
    ]);
    content.x_object(Name(pdf_name.as_bytes()));
    content.restore_state();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reserve_leaves_cursor_unchanged_when_content_fits() {
        let mut flow = PageFlow::new();
        assert!(!flow.reserve(30.0));
        assert_eq!(flow.y, MARGIN);
        assert_eq!(flow.page_count(), 1);
    }

    #[test]
    fn reserve_breaks_exactly_when_remaining_space_is_insufficient() {
        let limit = PAGE_HEIGHT - BOTTOM_MARGIN;

        // Exactly fitting content does not break.
        let mut flow = PageFlow::new();
        flow.advance(limit - MARGIN - 10.0);
        assert!(!flow.reserve(10.0));
        assert_eq!(flow.page_count(), 1);

        // One step past the limit breaks and resets to the top margin.
        let mut flow = PageFlow::new();
        flow.advance(limit - MARGIN - 10.0);
        assert!(flow.reserve(10.5));
        assert_eq!(flow.y, MARGIN);
        assert_eq!(flow.page_count(), 2);
    }

    #[test]
    fn cursor_is_monotonic_within_a_page() {
        let mut flow = PageFlow::new();
        let mut prev = flow.y;
        for _ in 0..12 {
            flow.advance(7.0);
            if flow.reserve(40.0) {
                assert_eq!(flow.y, MARGIN);
                prev = flow.y;
            }
            assert!(flow.y >= prev);
            prev = flow.y;
        }
    }
}
