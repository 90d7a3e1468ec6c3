use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError};
use sea_orm::{DbErr, SqlErr};
use serde::Serialize;
use thiserror::Error;

/// A single field-level validation failure, serialized as `{field, message}`.
///
/// The order of entries in a `Validation` error follows the order the
/// fields were checked, so clients can render inline errors deterministically.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldError {
    pub field: String,
    pub message: String,
}

/// The API-wide error taxonomy.
///
/// Handlers return `Result<HttpResponse, ApiError>`; anything not explicitly
/// classified collapses to `Internal` with the detail logged server-side only.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("{0}")]
    Unauthenticated(String),
    #[error("{0}")]
    Forbidden(String),
    #[error("{0}")]
    NotFound(String),
    #[error("Validation error")]
    Validation(Vec<FieldError>),
    #[error("{0}")]
    Conflict(String),
    #[error("Payment provider error")]
    Upstream,
    #[error("Internal server error")]
    Internal,
}

impl From<DbErr> for ApiError {
    fn from(err: DbErr) -> Self {
        // Unique-key races (duplicate review, duplicate username/email,
        // duplicate conversation pair) surface as conflicts, not 500s.
        if let Some(SqlErr::UniqueConstraintViolation(detail)) = err.sql_err() {
            tracing::warn!(%detail, "unique constraint violation");
            return ApiError::Conflict("Duplicate value for a unique field".to_string());
        }
        tracing::error!(error = %err, "database error");
        ApiError::Internal
    }
}

impl From<bcrypt::BcryptError> for ApiError {
    fn from(err: bcrypt::BcryptError) -> Self {
        tracing::error!(error = %err, "password hashing error");
        ApiError::Internal
    }
}

impl From<jsonwebtoken::errors::Error> for ApiError {
    fn from(err: jsonwebtoken::errors::Error) -> Self {
        tracing::error!(error = %err, "token signing error");
        ApiError::Internal
    }
}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        match self {
            ApiError::Unauthenticated(_) => StatusCode::UNAUTHORIZED,
            ApiError::Forbidden(_) => StatusCode::FORBIDDEN,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::Validation(_) => StatusCode::BAD_REQUEST,
            ApiError::Conflict(_) => StatusCode::CONFLICT,
            ApiError::Upstream => StatusCode::BAD_GATEWAY,
            ApiError::Internal => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        match self {
            ApiError::Validation(errors) => {
                HttpResponse::build(self.status_code()).json(serde_json::json!({
                    "error": "Validation error",
                    "errors": errors,
                }))
            }
            other => HttpResponse::build(self.status_code()).json(serde_json::json!({
                "error": other.to_string(),
            })),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_codes_match_taxonomy() {
        assert_eq!(
            ApiError::Unauthenticated("x".into()).status_code(),
            StatusCode::UNAUTHORIZED
        );
        assert_eq!(
            ApiError::Forbidden("x".into()).status_code(),
            StatusCode::FORBIDDEN
        );
        assert_eq!(
            ApiError::NotFound("x".into()).status_code(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            ApiError::Validation(vec![]).status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            ApiError::Conflict("x".into()).status_code(),
            StatusCode::CONFLICT
        );
        assert_eq!(ApiError::Upstream.status_code(), StatusCode::BAD_GATEWAY);
        assert_eq!(
            ApiError::Internal.status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn internal_error_body_leaks_no_detail() {
        assert_eq!(ApiError::Internal.to_string(), "Internal server error");
    }

    #[test]
    fn validation_error_serializes_field_list_in_order() {
        let errors = vec![
            FieldError {
                field: "title".to_string(),
                message: "Title must be at least 10 characters".to_string(),
            },
            FieldError {
                field: "price".to_string(),
                message: "Price must be at least $5".to_string(),
            },
        ];
        let body = serde_json::to_value(&errors).unwrap();
        assert_eq!(body[0]["field"], "title");
        assert_eq!(body[1]["field"], "price");
    }
}
