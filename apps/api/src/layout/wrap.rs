//! Greedy word wrap against real font metrics.
//!
//! Tokens are whitespace-separated words joined back with single spaces. A word that
//! is wider than the line on its own still gets a line to itself: there is no
//! character-level splitting or hyphenation.

use crate::layout::font_metrics::{FontVariant, TextMetrics};

/// Splits `text` into lines no wider than `max_width` points.
///
/// Every line is measured as a whole string, so inter-word spaces are counted with the
/// same table as the glyphs. Empty or whitespace-only input returns an empty vector.
pub fn wrap_text(
    text: &str,
    font: FontVariant,
    size: f32,
    max_width: f32,
    metrics: &dyn TextMetrics,
) -> Vec<String> {
    let mut lines = Vec::new();
    let mut current = String::new();

    for word in text.split_whitespace() {
        let candidate = if current.is_empty() {
            word.to_string()
        } else {
            format!("{current} {word}")
        };

        if metrics.width_of_text_at_size(&candidate, font, size) <= max_width {
            current = candidate;
        } else {
            if !current.is_empty() {
                lines.push(std::mem::take(&mut current));
            }
            current = word.to_string();
        }
    }

    if !current.is_empty() {
        lines.push(current);
    }
    lines
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────
