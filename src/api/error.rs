use crate::domain::models::DomainError;
use axum::{Json, http::StatusCode, response::IntoResponse};
use serde::Serialize;
use utoipa::ToSchema;

#[cfg(test)]
mod tests;

/// The constant wire shape for every failure.
#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorBody {
    /// caller-facing category label, e.g. "Not Found"
    pub error: String,
    /// human-readable detail, never empty
    pub message: String,
}

/// The single chokepoint that turns an internal failure into a wire
/// response. Domain services never decide transport status codes;
/// every handler funnels its failures through here.
#[derive(Debug)]
pub enum ApiError {
    Domain(DomainError),
    /// a malformed request body rejected at the boundary before any
    /// domain service runs
    Validation(String),
}

impl From<DomainError> for ApiError {
    fn from(err: DomainError) -> Self {
        ApiError::Domain(err)
    }
}

impl ApiError {
    fn status_and_category(&self) -> (StatusCode, &'static str) {
        match self {
            ApiError::Domain(DomainError::NotFound(_)) => (StatusCode::NOT_FOUND, "Not Found"),
            ApiError::Domain(DomainError::Conflict(_)) => (StatusCode::CONFLICT, "Conflict"),
            ApiError::Domain(DomainError::Unauthorized(_)) => {
                (StatusCode::UNAUTHORIZED, "Unauthorized")
            }
            // a write that failed after validation keeps the conflict
            // category but is a server-side failure
            ApiError::Domain(DomainError::Persistence(_)) => {
                (StatusCode::INTERNAL_SERVER_ERROR, "Conflict")
            }
            ApiError::Domain(DomainError::Unexpected(_)) => {
                (StatusCode::INTERNAL_SERVER_ERROR, "Internal Server Error")
            }
            ApiError::Validation(_) => (StatusCode::BAD_REQUEST, "Bad Request"),
        }
    }

    fn message(&self) -> String {
        match self {
            ApiError::Domain(err) => err.to_string(),
            ApiError::Validation(message) => message.clone(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> axum::response::Response {
        let (status, category) = self.status_and_category();

        if status.is_server_error() {
            if let ApiError::Domain(err) = &self {
                tracing::error!(error = ?err, "request failed");
            }
        }

        (
            status,
            Json(ErrorBody {
                error: category.to_string(),
                message: self.message(),
            }),
        )
            .into_response()
    }
}
