/*
 * Responsibility
 * - GET /health (疎通用、認証なし)
 * - GET / (サービス情報: 選択された store / resolver を含む)
 * - 未定義ルートの fallback (JSON 404)
 */
use axum::{
    Json,
    extract::State,
    http::{Method, StatusCode, Uri},
    response::IntoResponse,
};
use chrono::Utc;
use serde_json::json;

use crate::{error::AppError, state::AppState};

pub async fn health() -> impl IntoResponse {
    (
        StatusCode::OK,
        Json(json!({"status": "ok", "timestamp": Utc::now()})),
    )
}

pub async fn index(State(state): State<AppState>) -> impl IntoResponse {
    Json(json!({
        "name": "Stable Management API",
        "version": env!("CARGO_PKG_VERSION"),
        "status": "running",
        "storage": state.backend,
        "identity": state.identity.name(),
        "endpoints": {
            "health": "GET /health",
            "horses": "GET /api/horses",
            "createHorse": "POST /api/horses",
            "horse": "GET|PUT|PATCH|DELETE /api/horses/{id}",
            "healthRecords": "GET|POST /api/horses/{id}/health",
            "documents": "GET|POST /api/horses/{id}/documents",
            "whoami": "GET /api/auth/me",
        }
    }))
}

pub async fn fallback(method: Method, uri: Uri) -> AppError {
    AppError::RouteNotFound {
        method: method.to_string(),
        path: uri.path().to_string(),
    }
}
