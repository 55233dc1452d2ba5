#![allow(dead_code)]

use std::sync::Arc;

use axum::Router;
use axum::body::Body;
use axum::http::{Request, Response};
use http_body_util::BodyExt;
use serde_json::Value;
use stable_api::app::build_router;
use stable_api::config::Config;
use stable_api::repos::{BackendKind, MemoryRepo};
use stable_api::services::auth::JwtIdentityResolver;
use stable_api::state::AppState;
use tower::ServiceExt;

pub const JWT_SECRET: &str = "integration-secret";

/// Router over a fresh in-memory store with mock header identity.
pub fn app() -> Router {
    let config = Config::from_vars(|_| None).unwrap();
    build_router(AppState::in_memory(), &config)
}

/// Router over a fresh in-memory store with HS256 bearer identity.
pub fn jwt_app() -> Router {
    let config = Config::from_vars(|_| None).unwrap();
    let state = AppState::new(
        Arc::new(MemoryRepo::new()),
        Arc::new(JwtIdentityResolver::new(JWT_SECRET, None, None, 0)),
        BackendKind::Volatile,
    );
    build_router(state, &config)
}

pub async fn send(app: &Router, req: Request<Body>) -> Response<Body> {
    app.clone().oneshot(req).await.unwrap()
}

pub fn request(method: &str, uri: &str, org: Option<&str>, body: Option<Value>) -> Request<Body> {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(org) = org {
        builder = builder.header("x-org-id", org);
    }
    match body {
        Some(body) => builder
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    }
}

pub async fn json_body(res: Response<Body>) -> Value {
    let bytes = res.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

/// Create a horse as `org` and return its `data` object.
pub async fn create_horse(app: &Router, org: &str, body: Value) -> Value {
    let res = send(app, request("POST", "/api/horses", Some(org), Some(body))).await;
    assert_eq!(res.status().as_u16(), 201);
    json_body(res).await["data"].clone()
}
