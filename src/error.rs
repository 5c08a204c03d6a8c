use axum::response::{IntoResponse, Response};
use http::StatusCode;

/// Failures a single request can run into.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// No note is stored under `id`. `action` names what the caller tried to do.
    #[error("Could not find the resource to {action}.")]
    NotFound { id: String, action: &'static str },

    #[error("failed to render view: {0}")]
    Render(String),
}

impl AppError {
    pub fn not_found(id: impl Into<String>, action: &'static str) -> Self {
        Self::NotFound { id: id.into(), action }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            // kept as 400 for compatibility with existing links and clients
            Self::NotFound { .. } => StatusCode::BAD_REQUEST,
            Self::Render(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match &self {
            Self::NotFound { id, action } => tracing::warn!(%id, action, "note not found"),
            Self::Render(reason) => tracing::error!(%reason, "render failed"),
        }
        (self.status(), self.to_string()).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_maps_to_bad_request() {
        let err = AppError::not_found("7", "edit");
        assert_eq!(err.status(), StatusCode::BAD_REQUEST);
        assert_eq!(err.to_string(), "Could not find the resource to edit.");
    }

    #[test]
    fn render_maps_to_internal_error() {
        let resp = AppError::Render("boom".into()).into_response();
        assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
