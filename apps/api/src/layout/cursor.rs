//! Flow cursor: which page we are writing on and where the next baseline goes.
//!
//! Space is checked per drawn line, not per logical block, so a long paragraph or
//! bullet can continue on the next page mid-sentence.

use tracing::debug;

use crate::render::document::{Document, PageIndex};

// A4 portrait, in points.
pub const PAGE_WIDTH: f32 = 595.28;
pub const PAGE_HEIGHT: f32 = 841.89;
pub const MARGIN: f32 = 40.0;
pub const CONTENT_WIDTH: f32 = PAGE_WIDTH - MARGIN * 2.0;

/// Baseline position at the top of a fresh page.
pub const TOP_Y: f32 = PAGE_HEIGHT - MARGIN;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FlowCursor {
    page: PageIndex,
    y: f32,
}

impl FlowCursor {
    /// Allocates the first page of `document` and parks the cursor at its top margin.
    pub fn start(document: &mut Document) -> Self {
        FlowCursor {
            page: document.add_page(),
            y: TOP_Y,
        }
    }

    pub fn page(&self) -> PageIndex {
        self.page
    }

    pub fn y(&self) -> f32 {
        self.y
    }

    /// Starts a new page when `height` would cross the bottom margin.
    ///
    /// Returns `true` if a page was allocated.
    pub fn ensure_space(&mut self, document: &mut Document, height: f32) -> bool {
        if self.y - height < MARGIN {
            self.page = document.add_page();
            self.y = TOP_Y;
            debug!(page = self.page, height, "page break");
            true
        } else {
            false
        }
    }

    /// Moves down past a drawn line plus any extra gap.
    pub fn advance(&mut self, line_height: f32, extra_gap: f32) {
        self.y -= line_height + extra_gap;
    }

    /// Raw vertical move for fixed paddings that are not tied to a line.
    pub fn skip(&mut self, dy: f32) {
        self.y -= dy;
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────
