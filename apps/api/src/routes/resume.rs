use axum::{
    extract::State,
    http::header,
    response::{IntoResponse, Response},
};
use bytes::Bytes;
use tracing::info;

use crate::content::load_resume;
use crate::errors::AppError;
use crate::render::render_resume;
use crate::state::AppState;

const PDF_FILENAME: &str = "resume.pdf";
const CACHE_CONTROL: &str = "public, max-age=31536000, immutable";

/// GET /resume.pdf
pub async fn handle_resume_pdf(State(state): State<AppState>) -> Result<Response, AppError> {
    let settings = state.resume.clone();
    let record = load_resume(state.store.as_ref(), &settings.entry_id, &settings.placeholders)
        .await?
        .ok_or_else(|| AppError::NotFound("Resume not found".to_string()))?;

    // Layout and serialization are CPU-bound; keep them off the async executor.
    let pdf = tokio::task::spawn_blocking(move || render_resume(&record, &settings.identity))
        .await
        .map_err(|e| AppError::Internal(anyhow::anyhow!("spawn_blocking failed in render: {e}")))??;

    info!(entry = %state.resume.entry_id, bytes = pdf.len(), "Served résumé PDF");
    Ok((
        [
            (header::CONTENT_TYPE, "application/pdf".to_string()),
            (
                header::CONTENT_DISPOSITION,
                format!("attachment; filename=\"{PDF_FILENAME}\""),
            ),
            (header::CACHE_CONTROL, CACHE_CONTROL.to_string()),
        ],
        Bytes::from(pdf),
    )
        .into_response())
}
