use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use catalog::CatalogError;
use engine::RecommendError;
use serde_json::json;
use tracing::error;

/// Error surface of every handler, rendered as `{"error": "..."}`.
#[derive(Debug)]
pub struct ApiError {
    status: StatusCode,
    message: String,
}

impl ApiError {
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self {
            status: StatusCode::BAD_REQUEST,
            message: message.into(),
        }
    }

    fn internal(message: String) -> Self {
        Self {
            status: StatusCode::INTERNAL_SERVER_ERROR,
            message,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        if self.status.is_server_error() {
            error!("{}", self.message);
        }
        (self.status, Json(json!({ "error": self.message }))).into_response()
    }
}

impl From<CatalogError> for ApiError {
    fn from(err: CatalogError) -> Self {
        let status = match &err {
            CatalogError::WorkoutNotFound { .. }
            | CatalogError::HistoryEntryNotFound(_)
            | CatalogError::PlanSlotNotFound(_)
            | CatalogError::PlaylistNotFound(_) => StatusCode::NOT_FOUND,
            CatalogError::DuplicateVideo { .. }
            | CatalogError::AlreadyListed { .. }
            | CatalogError::PlaylistExists { .. } => StatusCode::CONFLICT,
            CatalogError::NotListed { .. }
            | CatalogError::CompanionNotFound { .. }
            | CatalogError::InvalidValue { .. }
            | CatalogError::EmptyUpdate => StatusCode::BAD_REQUEST,
            CatalogError::Database(_) | CatalogError::Migration(_) => {
                return Self::internal(err.to_string());
            }
        };
        Self {
            status,
            message: err.to_string(),
        }
    }
}

impl From<RecommendError> for ApiError {
    fn from(err: RecommendError) -> Self {
        match err {
            RecommendError::NoCandidates { .. } => Self {
                status: StatusCode::NOT_FOUND,
                message: err.to_string(),
            },
            RecommendError::Store(inner) => inner.into(),
        }
    }
}

impl From<importer::ImportError> for ApiError {
    fn from(err: importer::ImportError) -> Self {
        match err {
            importer::ImportError::Io(_) | importer::ImportError::Csv(_) => {
                Self::bad_request(err.to_string())
            }
            importer::ImportError::Catalog(inner) => inner.into(),
        }
    }
}
