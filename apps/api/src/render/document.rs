//! In-memory page model produced by the layout pass and consumed by the PDF writer.
//!
//! Coordinates are PDF user space: points, origin at the bottom-left of the page.
//! Pages are only ever appended; draw operations and link annotations are only ever
//! pushed onto the page they were created for.

use crate::layout::font_metrics::FontVariant;
use crate::render::RenderError;

pub type PageIndex = usize;

// ────────────────────────────────────────────────────────────────────────────
// Drawing primitives
// ────────────────────────────────────────────────────────────────────────────

/// Device RGB color, each channel in 0.0 – 1.0.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rgb {
    pub r: f32,
    pub g: f32,
    pub b: f32,
}

impl Rgb {
    pub const fn new(r: f32, g: f32, b: f32) -> Self {
        Rgb { r, g, b }
    }
}

/// Body text.
pub const INK: Rgb = Rgb::new(0.05, 0.05, 0.05);
/// Dates, locations and other secondary text.
pub const SUBTLE: Rgb = Rgb::new(0.38, 0.38, 0.38);
/// Section header rules.
pub const RULE: Rgb = Rgb::new(0.55, 0.55, 0.55);
/// Clickable contact labels and their underlines.
pub const LINK: Rgb = Rgb::new(0.15, 0.15, 0.55);

/// Axis-aligned rectangle `(x0, y0)`–`(x1, y1)`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub x0: f32,
    pub y0: f32,
    pub x1: f32,
    pub y1: f32,
}

impl Rect {
    pub fn from_origin(x: f32, y: f32, width: f32, height: f32) -> Self {
        Rect {
            x0: x,
            y0: y,
            x1: x + width,
            y1: y + height,
        }
    }

    #[cfg(test)]
    pub fn width(&self) -> f32 {
        self.x1 - self.x0
    }

    #[cfg(test)]
    pub fn height(&self) -> f32 {
        self.y1 - self.y0
    }
}

/// A single run of text drawn with its baseline at `y`.
#[derive(Debug, Clone, PartialEq)]
pub struct TextRun {
    pub text: String,
    pub font: FontVariant,
    pub size: f32,
    pub x: f32,
    pub y: f32,
    pub color: Rgb,
}

/// A stroked straight line segment.
#[derive(Debug, Clone, PartialEq)]
pub struct RuleLine {
    pub from: (f32, f32),
    pub to: (f32, f32),
    pub thickness: f32,
    pub color: Rgb,
}

#[derive(Debug, Clone, PartialEq)]
pub enum DrawOp {
    Text(TextRun),
    Rule(RuleLine),
}

/// A clickable region that opens `target` (a URL or `mailto:` address).
#[derive(Debug, Clone, PartialEq)]
pub struct LinkAnnotation {
    pub page: PageIndex,
    pub rect: Rect,
    pub target: String,
}

// ────────────────────────────────────────────────────────────────────────────
// Pages and document
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Default)]
pub struct Page {
    ops: Vec<DrawOp>,
    annotations: Vec<LinkAnnotation>,
}

impl Page {
    pub fn ops(&self) -> &[DrawOp] {
        &self.ops
    }

    pub fn annotations(&self) -> &[LinkAnnotation] {
        &self.annotations
    }

    /// Text runs in draw order.
    #[cfg(test)]
    pub fn text_runs(&self) -> impl Iterator<Item = &TextRun> {
        self.ops.iter().filter_map(|op| match op {
            DrawOp::Text(run) => Some(run),
            DrawOp::Rule(_) => None,
        })
    }
}

#[derive(Debug, Clone, Default)]
pub struct Document {
    pages: Vec<Page>,
}

impl Document {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a blank page and returns its index.
    pub fn add_page(&mut self) -> PageIndex {
        self.pages.push(Page::default());
        self.pages.len() - 1
    }

    pub fn pages(&self) -> &[Page] {
        &self.pages
    }

    pub fn page_count(&self) -> usize {
        self.pages.len()
    }

    pub fn draw(&mut self, page: PageIndex, op: DrawOp) -> Result<(), RenderError> {
        self.page_mut(page)?.ops.push(op);
        Ok(())
    }

    /// Attaches a link annotation to `page`. Never deduplicates.
    pub fn register_link(
        &mut self,
        page: PageIndex,
        rect: Rect,
        target: impl Into<String>,
    ) -> Result<(), RenderError> {
        let annotation = LinkAnnotation {
            page,
            rect,
            target: target.into(),
        };
        self.page_mut(page)?.annotations.push(annotation);
        Ok(())
    }

    pub fn annotation_count(&self) -> usize {
        self.pages.iter().map(|p| p.annotations.len()).sum()
    }

    fn page_mut(&mut self, page: PageIndex) -> Result<&mut Page, RenderError> {
        let count = self.pages.len();
        self.pages
            .get_mut(page)
            .ok_or(RenderError::NoSuchPage { page, count })
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────
