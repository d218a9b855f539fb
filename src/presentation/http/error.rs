use axum::Json;
use axum::extract::rejection::{JsonRejection, PathRejection};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;
use utoipa::ToSchema;

use crate::application::errors::ServiceError;
use crate::presentation::http::auth::AuthError;

/// Stable, machine-readable codes. Clients match on these, never on the
/// message text.
pub mod error_code {
    pub const VALIDATION_FAILED: &str = "VALIDATION_FAILED";
    pub const SELF_FOLLOW: &str = "SELF_FOLLOW";
    pub const AUTH_FAILED: &str = "AUTH_FAILED";
    pub const MISSING_TOKEN: &str = "MISSING_TOKEN";
    pub const TOKEN_EXPIRED: &str = "TOKEN_EXPIRED";
    pub const TOKEN_INVALID: &str = "TOKEN_INVALID";
    pub const DUPLICATE_USERNAME: &str = "DUPLICATE_USERNAME";
    pub const DUPLICATE_EDGE: &str = "DUPLICATE_EDGE";
    pub const NOT_FOUND: &str = "NOT_FOUND";
    pub const EDGE_NOT_FOUND: &str = "EDGE_NOT_FOUND";
    pub const INTERNAL: &str = "INTERNAL";
}

#[derive(Debug, Serialize, ToSchema)]
pub struct FieldErrorBody {
    pub field: String,
    pub message: String,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorBody {
    pub code: String,
    pub message: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub errors: Vec<FieldErrorBody>,
}

#[derive(thiserror::Error, Debug)]
pub enum ApiError {
    #[error(transparent)]
    Service(#[from] ServiceError),
    #[error(transparent)]
    Auth(#[from] AuthError),
    #[error("malformed request: {0}")]
    BadBody(String),
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::BadBody(rejection.body_text())
    }
}

impl From<PathRejection> for ApiError {
    fn from(rejection: PathRejection) -> Self {
        ApiError::BadBody(rejection.body_text())
    }
}

impl ApiError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::Service(e) => match e {
                ServiceError::Validation(_) | ServiceError::SelfFollow => StatusCode::BAD_REQUEST,
                ServiceError::AuthFailed => StatusCode::UNAUTHORIZED,
                ServiceError::DuplicateUsername | ServiceError::DuplicateEdge => {
                    StatusCode::CONFLICT
                }
                ServiceError::NotFound(_) | ServiceError::EdgeNotFound => StatusCode::NOT_FOUND,
                ServiceError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
            },
            ApiError::Auth(e) => match e {
                AuthError::MissingToken | AuthError::TokenExpired => StatusCode::UNAUTHORIZED,
                AuthError::TokenInvalid => StatusCode::FORBIDDEN,
            },
            ApiError::BadBody(_) => StatusCode::BAD_REQUEST,
        }
    }

    pub fn error_code(&self) -> &'static str {
        match self {
            ApiError::Service(e) => match e {
                ServiceError::Validation(_) => error_code::VALIDATION_FAILED,
                ServiceError::SelfFollow => error_code::SELF_FOLLOW,
                ServiceError::AuthFailed => error_code::AUTH_FAILED,
                ServiceError::DuplicateUsername => error_code::DUPLICATE_USERNAME,
                ServiceError::DuplicateEdge => error_code::DUPLICATE_EDGE,
                ServiceError::NotFound(_) => error_code::NOT_FOUND,
                ServiceError::EdgeNotFound => error_code::EDGE_NOT_FOUND,
                ServiceError::Internal(_) => error_code::INTERNAL,
            },
            ApiError::Auth(e) => match e {
                AuthError::MissingToken => error_code::MISSING_TOKEN,
                AuthError::TokenExpired => error_code::TOKEN_EXPIRED,
                AuthError::TokenInvalid => error_code::TOKEN_INVALID,
            },
            ApiError::BadBody(_) => error_code::VALIDATION_FAILED,
        }
    }

    fn body(&self) -> ErrorBody {
        let (message, errors) = match self {
            ApiError::Service(ServiceError::Validation(v)) => (
                "validation failed".to_string(),
                v.0.iter()
                    .map(|e| FieldErrorBody {
                        field: e.field.to_string(),
                        message: e.message.to_string(),
                    })
                    .collect(),
            ),
            // Internal detail stays in the logs.
            ApiError::Service(ServiceError::Internal(_)) => {
                ("internal server error".to_string(), Vec::new())
            }
            other => (other.to_string(), Vec::new()),
        };
        ErrorBody {
            code: self.error_code().to_string(),
            message,
            errors,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        if let ApiError::Service(ServiceError::Internal(e)) = &self {
            tracing::error!(error = ?e, "request_failed");
        }
        (self.status_code(), Json(self.body())).into_response()
    }
}
