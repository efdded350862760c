use std::sync::Arc;

use crate::content::{ContentStore, PlaceholderValues};
use crate::models::resume::DocumentIdentity;

/// What the résumé endpoint serves and how it is personalised.
#[derive(Debug, Clone)]
pub struct ResumeSettings {
    pub entry_id: String,
    pub identity: DocumentIdentity,
    pub placeholders: PlaceholderValues,
}

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// Pluggable content backend: filesystem or S3.
    pub store: Arc<dyn ContentStore>,
    pub resume: Arc<ResumeSettings>,
}
