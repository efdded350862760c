// Document model, PDF serialization and the résumé assembler.
// Layout and serialization are synchronous; handlers run them inside spawn_blocking.

pub mod assembler;
pub mod document;
pub mod encoding;
pub mod pdf;

use thiserror::Error;

use crate::render::document::PageIndex;

pub use assembler::render_resume;

#[derive(Debug, Error)]
pub enum RenderError {
    #[error("page {page} does not exist (document has {count} pages)")]
    NoSuchPage { page: PageIndex, count: usize },

    #[error("character {ch:?} in {text:?} cannot be encoded with WinAnsiEncoding")]
    Unencodable { ch: char, text: String },

    #[error("PDF serialization failed: {0}")]
    Serialize(String),
}
