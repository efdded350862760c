// Content collections: where résumé records come from and how they are normalized
// before layout.

pub mod placeholders;
pub mod store;

use thiserror::Error;
use tracing::{debug, warn};

use crate::models::resume::ResumeRecord;

pub use placeholders::{Placeholder, PlaceholderValues};
pub use store::{ContentStore, FsContentStore, S3ContentStore};

/// Collection holding résumé records.
pub const RESUME_COLLECTION: &str = "resume";

#[derive(Debug, Error)]
pub enum ContentError {
    #[error("content I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("S3 error: {0}")]
    S3(String),

    #[error("entry '{id}' is not a valid résumé record: {source}")]
    Malformed {
        id: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("unknown placeholder {0}")]
    UnknownPlaceholder(String),
}

/// Fetches, parses and normalizes the résumé entry `id`.
///
/// Returns `Ok(None)` when the entry does not exist.
pub async fn load_resume(
    store: &dyn ContentStore,
    id: &str,
    placeholders: &PlaceholderValues,
) -> Result<Option<ResumeRecord>, ContentError> {
    let Some(raw) = store.get_entry(RESUME_COLLECTION, id).await? else {
        warn!(collection = RESUME_COLLECTION, id, "résumé entry not found");
        return Ok(None);
    };

    let record: ResumeRecord = serde_json::from_slice(&raw).map_err(|source| {
        ContentError::Malformed {
            id: id.to_string(),
            source,
        }
    })?;
    let record = placeholders::normalize(record, placeholders)?;
    debug!(
        id,
        jobs = record.experience.len(),
        education = record.education.len(),
        "loaded résumé record"
    );
    Ok(Some(record))
}
