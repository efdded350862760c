//! Primitive renderers: single lines, centered lines, wrapped paragraphs, two-column
//! rows, section headers, bulleted paragraphs and labeled hanging-indent rows.
//!
//! All of them go through `LayoutFrame`, which owns the document being built and the
//! flow cursor. The frame is passed explicitly by `&mut`; there is no ambient state.

use crate::layout::cursor::{FlowCursor, CONTENT_WIDTH, MARGIN, PAGE_WIDTH};
use crate::layout::font_metrics::{FontVariant, TextMetrics};
use crate::layout::wrap::wrap_text;
use crate::render::document::{
    Document, DrawOp, Rect, Rgb, RuleLine, TextRun, INK, RULE, SUBTLE,
};
use crate::render::RenderError;

/// Line height for single lines and two-column rows, as a multiple of font size.
pub const LINE_LEADING: f32 = 1.3;
/// Line height for wrapped paragraph lines.
pub const PARAGRAPH_LEADING: f32 = 1.35;

pub const SECTION_TITLE_SIZE: f32 = 10.5;
const SECTION_PAD_BEFORE: f32 = 8.0;
const SECTION_RESERVE: f32 = 18.0;
const SECTION_TITLE_TO_RULE: f32 = 4.0;
const SECTION_PAD_AFTER: f32 = 15.0;
const SECTION_RULE_THICKNESS: f32 = 0.6;

pub const BULLET_GLYPH: &str = "\u{2022}";
pub const BULLET_INDENT: f32 = 14.0;
pub const BULLET_MARKER_COLUMN: f32 = 2.0;

pub struct LayoutFrame<'m> {
    document: Document,
    cursor: FlowCursor,
    metrics: &'m dyn TextMetrics,
}

impl<'m> LayoutFrame<'m> {
    pub fn new(metrics: &'m dyn TextMetrics) -> Self {
        let mut document = Document::new();
        let cursor = FlowCursor::start(&mut document);
        LayoutFrame {
            document,
            cursor,
            metrics,
        }
    }

    pub fn cursor(&self) -> &FlowCursor {
        &self.cursor
    }

    #[cfg(test)]
    pub fn document(&self) -> &Document {
        &self.document
    }

    pub fn into_document(self) -> Document {
        self.document
    }

    pub fn width_of(&self, text: &str, font: FontVariant, size: f32) -> f32 {
        self.metrics.width_of_text_at_size(text, font, size)
    }

    pub fn wrap(&self, text: &str, font: FontVariant, size: f32, max_width: f32) -> Vec<String> {
        wrap_text(text, font, size, max_width, self.metrics)
    }

    pub fn ensure_space(&mut self, height: f32) -> bool {
        self.cursor.ensure_space(&mut self.document, height)
    }

    pub fn advance(&mut self, line_height: f32, extra_gap: f32) {
        self.cursor.advance(line_height, extra_gap);
    }

    pub fn skip(&mut self, dy: f32) {
        self.cursor.skip(dy);
    }

    /// Draws a text run on the current page with its baseline at the cursor.
    pub fn draw_text(
        &mut self,
        text: &str,
        font: FontVariant,
        size: f32,
        x: f32,
        color: Rgb,
    ) -> Result<(), RenderError> {
        let run = TextRun {
            text: text.to_string(),
            font,
            size,
            x,
            y: self.cursor.y(),
            color,
        };
        self.document.draw(self.cursor.page(), DrawOp::Text(run))
    }

    pub fn draw_rule(
        &mut self,
        from: (f32, f32),
        to: (f32, f32),
        thickness: f32,
        color: Rgb,
    ) -> Result<(), RenderError> {
        let rule = RuleLine {
            from,
            to,
            thickness,
            color,
        };
        self.document.draw(self.cursor.page(), DrawOp::Rule(rule))
    }

    /// Registers a clickable region on the page the cursor is currently on.
    pub fn register_link(&mut self, rect: Rect, target: &str) -> Result<(), RenderError> {
        self.document
            .register_link(self.cursor.page(), rect, target)
    }

    // ── Renderers ───────────────────────────────────────────────────────────

    /// One line of text at `x`, then `gap` extra points below it.
    pub fn line(
        &mut self,
        text: &str,
        font: FontVariant,
        size: f32,
        x: f32,
        color: Rgb,
        gap: f32,
    ) -> Result<(), RenderError> {
        let lh = size * LINE_LEADING;
        self.ensure_space(lh);
        self.draw_text(text, font, size, x, color)?;
        self.advance(lh, gap);
        Ok(())
    }

    /// One line horizontally centered on the page.
    pub fn centered(
        &mut self,
        text: &str,
        font: FontVariant,
        size: f32,
        gap: f32,
    ) -> Result<(), RenderError> {
        let x = (PAGE_WIDTH - self.width_of(text, font, size)) / 2.0;
        self.line(text, font, size, x, INK, gap)
    }

    /// Greedy-wrapped paragraph starting `indent` points right of the margin.
    /// `gap` is applied once, after the last line.
    pub fn wrapped(
        &mut self,
        text: &str,
        font: FontVariant,
        size: f32,
        indent: f32,
        gap: f32,
    ) -> Result<(), RenderError> {
        let lh = size * PARAGRAPH_LEADING;
        for line in self.wrap(text, font, size, CONTENT_WIDTH - indent) {
            self.ensure_space(lh);
            self.draw_text(&line, font, size, MARGIN + indent, INK)?;
            self.advance(lh, 0.0);
        }
        self.skip(gap);
        Ok(())
    }

    /// Left text at the margin and right text flush right, on one baseline.
    ///
    /// The two runs are not checked for overlap.
    pub fn two_column(
        &mut self,
        left: &str,
        left_font: FontVariant,
        right: &str,
        right_font: FontVariant,
        size: f32,
        gap: f32,
    ) -> Result<(), RenderError> {
        let lh = size * LINE_LEADING;
        self.ensure_space(lh);
        let right_x = PAGE_WIDTH - MARGIN - self.width_of(right, right_font, size);
        self.draw_text(left, left_font, size, MARGIN, INK)?;
        self.draw_text(right, right_font, size, right_x, SUBTLE)?;
        self.advance(lh, gap);
        Ok(())
    }

    /// Upper-cased bold title with a hairline rule under it.
    pub fn section_header(&mut self, title: &str) -> Result<(), RenderError> {
        self.skip(SECTION_PAD_BEFORE);
        self.ensure_space(SECTION_RESERVE);
        self.draw_text(
            &title.to_uppercase(),
            FontVariant::Bold,
            SECTION_TITLE_SIZE,
            MARGIN,
            INK,
        )?;
        self.skip(SECTION_TITLE_TO_RULE);
        let y = self.cursor.y();
        self.draw_rule(
            (MARGIN, y),
            (PAGE_WIDTH - MARGIN, y),
            SECTION_RULE_THICKNESS,
            RULE,
        )?;
        self.skip(SECTION_PAD_AFTER);
        Ok(())
    }

    /// Bullet point with the marker only on the first wrapped line. Each line is placed
    /// independently, so a bullet may continue on the next page.
    pub fn bulleted_paragraph(
        &mut self,
        text: &str,
        font: FontVariant,
        size: f32,
        indent: f32,
        marker_column: f32,
    ) -> Result<(), RenderError> {
        let lh = size * PARAGRAPH_LEADING;
        let lines = self.wrap(text, font, size, CONTENT_WIDTH - indent);
        for (i, line) in lines.iter().enumerate() {
            self.ensure_space(lh);
            if i == 0 {
                self.draw_text(BULLET_GLYPH, FontVariant::Regular, size, MARGIN + marker_column, INK)?;
            }
            self.draw_text(line, font, size, MARGIN + indent, INK)?;
            self.advance(lh, 0.0);
        }
        Ok(())
    }

    /// `label` followed by `body` wrapped with a hanging indent equal to the label's
    /// width. The first body line shares the label's baseline.
    pub fn labeled_list(
        &mut self,
        label: &str,
        label_font: FontVariant,
        body: &str,
        body_font: FontVariant,
        size: f32,
    ) -> Result<(), RenderError> {
        let lh = size * PARAGRAPH_LEADING;
        let label_width = self.width_of(label, label_font, size);
        let body_x = MARGIN + label_width;
        let mut lines = self
            .wrap(body, body_font, size, CONTENT_WIDTH - label_width)
            .into_iter();

        self.ensure_space(lh);
        self.draw_text(label, label_font, size, MARGIN, INK)?;
        if let Some(first) = lines.next() {
            self.draw_text(&first, body_font, size, body_x, INK)?;
        }
        self.advance(lh, 0.0);

        for line in lines {
            self.ensure_space(lh);
            self.draw_text(&line, body_font, size, body_x, INK)?;
            self.advance(lh, 0.0);
        }
        Ok(())
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────
