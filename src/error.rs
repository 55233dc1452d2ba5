/*
 * Responsibility
 * - アプリ共通の AppError 定義
 * - IntoResponse 実装 (HTTP status / JSON error body)
 * - RepoError / JsonRejection / AuthError を統一的に変換
 */
use axum::{
    Json,
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use thiserror::Error;

use crate::repos::error::RepoError;
use crate::services::auth::AuthError;

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: ErrorBody,
}

#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub code: &'static str,
    pub message: String,
}

#[derive(Debug, Error)]
pub enum AppError {
    #[error("{code}: {message}")]
    BadRequest { code: &'static str, message: String },
    #[error("payload too large: {message}")]
    PayloadTooLarge { message: String },
    #[error("unauthenticated")]
    Unauthenticated,
    #[error("unauthorized")]
    Unauthorized,
    #[error("forbidden: {resource}")]
    Forbidden { resource: &'static str },
    #[error("not found: {resource} {id}")]
    NotFound { resource: &'static str, id: String },
    #[error("no route: {method} {path}")]
    RouteNotFound { method: String, path: String },
    #[error("internal server error")]
    Internal,
}

impl AppError {
    pub fn bad_request(code: &'static str, message: impl Into<String>) -> Self {
        Self::BadRequest {
            code,
            message: message.into(),
        }
    }

    pub fn not_found(resource: &'static str, id: impl Into<String>) -> Self {
        Self::NotFound {
            resource,
            id: id.into(),
        }
    }

    pub fn forbidden(resource: &'static str) -> Self {
        Self::Forbidden { resource }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = match self {
            AppError::BadRequest { code, message } => (StatusCode::BAD_REQUEST, code, message),
            AppError::PayloadTooLarge { message } => {
                (StatusCode::PAYLOAD_TOO_LARGE, "PAYLOAD_TOO_LARGE", message)
            }
            AppError::Unauthenticated => (
                StatusCode::UNAUTHORIZED,
                "UNAUTHENTICATED",
                "missing, invalid or expired credential".into(),
            ),
            AppError::Unauthorized => (
                StatusCode::UNAUTHORIZED,
                "UNAUTHORIZED",
                "No organization context".into(),
            ),
            AppError::Forbidden { resource } => (
                StatusCode::FORBIDDEN,
                "FORBIDDEN",
                format!("You do not have access to this {resource}"),
            ),
            AppError::NotFound { resource, id } => (
                StatusCode::NOT_FOUND,
                "NOT_FOUND",
                format!("{} with ID {id} not found", capitalize(resource)),
            ),
            AppError::RouteNotFound { method, path } => (
                StatusCode::NOT_FOUND,
                "NOT_FOUND",
                format!("Route {method} {path} not found"),
            ),
            AppError::Internal => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "INTERNAL_SERVER_ERROR",
                "internal server error".into(),
            ),
        };

        let body = ErrorResponse {
            error: ErrorBody { code, message },
        };

        (status, Json(body)).into_response()
    }
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

impl From<RepoError> for AppError {
    fn from(e: RepoError) -> Self {
        // Detail stays in the server log; the client only sees a generic 500.
        tracing::error!(error = ?e, "storage operation failed");
        AppError::Internal
    }
}

impl From<JsonRejection> for AppError {
    fn from(e: JsonRejection) -> Self {
        // Buffering can fail on the body size limit; that status is kept.
        if let JsonRejection::BytesRejection(_) = &e
            && e.status() == StatusCode::PAYLOAD_TOO_LARGE
        {
            return AppError::PayloadTooLarge {
                message: e.body_text(),
            };
        }

        AppError::bad_request("INVALID_BODY", e.body_text())
    }
}

impl From<AuthError> for AppError {
    fn from(e: AuthError) -> Self {
        tracing::warn!(error = %e, "identity resolution failed");
        AppError::Unauthenticated
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn statuses_follow_the_error_taxonomy() {
        let cases = [
            (AppError::bad_request("MISSING_FIELDS", "x"), StatusCode::BAD_REQUEST),
            (
                AppError::PayloadTooLarge { message: "x".into() },
                StatusCode::PAYLOAD_TOO_LARGE,
            ),
            (AppError::Unauthenticated, StatusCode::UNAUTHORIZED),
            (AppError::Unauthorized, StatusCode::UNAUTHORIZED),
            (AppError::forbidden("horse"), StatusCode::FORBIDDEN),
            (AppError::not_found("horse", "h-1"), StatusCode::NOT_FOUND),
            (AppError::Internal, StatusCode::INTERNAL_SERVER_ERROR),
        ];

        for (err, status) in cases {
            assert_eq!(err.into_response().status(), status);
        }
    }

    #[test]
    fn not_found_message_names_the_resource() {
        assert_eq!(capitalize("horse"), "Horse");
        assert_eq!(capitalize(""), "");
    }
}
