//! Contact bar: a centered row of contact labels separated by pipes, with clickable
//! link regions under each linked label.

use crate::layout::cursor::PAGE_WIDTH;
use crate::layout::font_metrics::FontVariant;
use crate::layout::primitives::{LayoutFrame, LINE_LEADING};
use crate::models::resume::Contact;
use crate::render::document::{Rect, INK, LINK};
use crate::render::RenderError;

pub const CONTACT_FONT_SIZE: f32 = 9.0;
pub const CONTACT_SEPARATOR: &str = "   |   ";
/// Extra space below the bar, on top of its line height.
const CONTACT_BAR_GAP: f32 = 12.0;
const UNDERLINE_OFFSET: f32 = 1.0;
const UNDERLINE_THICKNESS: f32 = 0.4;
/// The hit region starts slightly below the baseline and is `size + 4` tall.
const LINK_RECT_DROP: f32 = 2.0;
const LINK_RECT_EXTRA_HEIGHT: f32 = 4.0;

#[derive(Debug, Clone, PartialEq)]
pub struct ContactItem {
    pub label: String,
    pub target: String,
    pub is_link: bool,
}

/// Ordered builder that only appends entries whose value resolved to something.
#[derive(Debug, Default)]
pub struct ContactItems {
    items: Vec<ContactItem>,
}

impl ContactItems {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push_if_present(
        mut self,
        value: Option<&str>,
        to_item: impl FnOnce(&str) -> ContactItem,
    ) -> Self {
        if let Some(value) = value {
            self.items.push(to_item(value));
        }
        self
    }

    pub fn build(self) -> Vec<ContactItem> {
        self.items
    }
}

/// Contact items in display order: email, website, LinkedIn, GitHub.
pub fn contact_items(contact: &Contact) -> Vec<ContactItem> {
    ContactItems::new()
        .push_if_present(contact.email.as_deref(), |email| ContactItem {
            label: email.to_string(),
            target: format!("mailto:{email}"),
            is_link: true,
        })
        .push_if_present(contact.website.as_deref(), |url| link("Personal site", url))
        .push_if_present(contact.linkedin.as_deref(), |url| link("LinkedIn", url))
        .push_if_present(contact.github.as_deref(), |url| link("GitHub", url))
        .build()
}

fn link(label: &str, url: &str) -> ContactItem {
    ContactItem {
        label: label.to_string(),
        target: url.to_string(),
        is_link: true,
    }
}

/// Horizontal geometry of a contact bar.
#[derive(Debug, Clone, PartialEq)]
pub struct ContactBarGeometry {
    pub item_widths: Vec<f32>,
    pub separator_width: f32,
    pub total_width: f32,
    pub start_x: f32,
}

impl LayoutFrame<'_> {
    pub fn measure_contact_bar(&self, items: &[ContactItem]) -> ContactBarGeometry {
        let font = FontVariant::Regular;
        let item_widths: Vec<f32> = items
            .iter()
            .map(|item| self.width_of(&item.label, font, CONTACT_FONT_SIZE))
            .collect();
        let separator_width = self.width_of(CONTACT_SEPARATOR, font, CONTACT_FONT_SIZE);
        let separators = items.len().saturating_sub(1) as f32;
        let total_width = item_widths.iter().sum::<f32>() + separator_width * separators;

        ContactBarGeometry {
            item_widths,
            separator_width,
            total_width,
            start_x: (PAGE_WIDTH - total_width) / 2.0,
        }
    }

    /// Draws the bar as one line. Linked items get an underline and a link annotation.
    /// An empty list draws nothing and takes no space.
    pub fn contact_bar(&mut self, items: &[ContactItem]) -> Result<(), RenderError> {
        if items.is_empty() {
            return Ok(());
        }

        let geometry = self.measure_contact_bar(items);
        let lh = CONTACT_FONT_SIZE * LINE_LEADING;
        self.ensure_space(lh);
        let y = self.cursor().y();
        let mut x = geometry.start_x;

        for (i, (item, &width)) in items.iter().zip(&geometry.item_widths).enumerate() {
            let color = if item.is_link { LINK } else { INK };
            self.draw_text(&item.label, FontVariant::Regular, CONTACT_FONT_SIZE, x, color)?;

            if item.is_link {
                let underline_y = y - UNDERLINE_OFFSET;
                self.draw_rule((x, underline_y), (x + width, underline_y), UNDERLINE_THICKNESS, LINK)?;
                let rect = Rect::from_origin(
                    x,
                    y - LINK_RECT_DROP,
                    width,
                    CONTACT_FONT_SIZE + LINK_RECT_EXTRA_HEIGHT,
                );
                self.register_link(rect, &item.target)?;
            }

            x += width;
            if i + 1 < items.len() {
                self.draw_text(CONTACT_SEPARATOR, FontVariant::Regular, CONTACT_FONT_SIZE, x, INK)?;
                x += geometry.separator_width;
            }
        }

        self.advance(lh, CONTACT_BAR_GAP);
        Ok(())
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────
