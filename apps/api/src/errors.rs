use axum::{
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::content::ContentError;
use crate::render::RenderError;

/// Application-level error type.
/// Implements `IntoResponse` so Axum handlers can return `Result<T, AppError>`.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Content error: {0}")]
    Content(#[from] ContentError),

    #[error("Render error: {0}")]
    Render(#[from] RenderError),

    #[error("Internal server error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (code, message) = match &self {
            AppError::NotFound(msg) => {
                return (
                    StatusCode::NOT_FOUND,
                    [(header::CONTENT_TYPE, "text/plain; charset=utf-8")],
                    msg.clone(),
                )
                    .into_response();
            }
            AppError::Content(e) => {
                tracing::error!("Content error: {e}");
                ("CONTENT_ERROR", "The stored content could not be loaded")
            }
            AppError::Render(e) => {
                tracing::error!("Render error: {e}");
                ("RENDER_ERROR", "The document could not be rendered")
            }
            AppError::Internal(e) => {
                tracing::error!("Internal error: {e:?}");
                ("INTERNAL_ERROR", "An internal server error occurred")
            }
        };

        let body = Json(json!({
            "error": {
                "code": code,
                "message": message
            }
        }));

        (StatusCode::INTERNAL_SERVER_ERROR, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_is_plain_text_404() {
        let response = AppError::NotFound("Resume not found".to_string()).into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert_eq!(
            response.headers()[header::CONTENT_TYPE],
            "text/plain; charset=utf-8"
        );
    }

    #[test]
    fn test_domain_errors_are_500() {
        let errors = [
            AppError::from(ContentError::UnknownPlaceholder("{{X}}".to_string())),
            AppError::from(RenderError::Serialize("boom".to_string())),
            AppError::from(anyhow::anyhow!("join failed")),
        ];
        for error in errors {
            assert_eq!(error.into_response().status(), StatusCode::INTERNAL_SERVER_ERROR);
        }
    }
}
