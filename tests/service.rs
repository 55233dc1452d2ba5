mod common;

use axum::body::Body;
use axum::http::Request;
use common::{JWT_SECRET, app, json_body, jwt_app, request, send};
use jsonwebtoken::{Algorithm, EncodingKey, Header};
use serde_json::{Value, json};

fn token(claims: Value) -> String {
    jsonwebtoken::encode(
        &Header::new(Algorithm::HS256),
        &claims,
        &EncodingKey::from_secret(JWT_SECRET.as_bytes()),
    )
    .unwrap()
}

fn exp() -> i64 {
    chrono::Utc::now().timestamp() + 300
}

#[tokio::test]
async fn health_ok_without_identity() {
    let res = send(&jwt_app(), request("GET", "/health", None, None)).await;

    assert_eq!(res.status().as_u16(), 200);
    assert_eq!(json_body(res).await["status"], "ok");
}

#[tokio::test]
async fn index_describes_storage_and_identity() {
    let res = send(&app(), request("GET", "/", None, None)).await;

    assert_eq!(res.status().as_u16(), 200);
    let body = json_body(res).await;
    assert_eq!(body["storage"], "volatile");
    assert_eq!(body["identity"], "mock-headers");
    assert_eq!(body["status"], "running");
}

#[tokio::test]
async fn responses_carry_request_id_and_security_headers() {
    let res = send(&app(), request("GET", "/api/horses", Some("org-456"), None)).await;

    assert!(res.headers().get("x-request-id").is_some());
    assert_eq!(res.headers()["x-content-type-options"], "nosniff");
    assert_eq!(res.headers()["cache-control"], "no-store");
}

#[tokio::test]
async fn incoming_request_id_is_propagated() {
    let req = Request::builder()
        .uri("/health")
        .header("x-request-id", "req-abc")
        .body(Body::empty())
        .unwrap();

    let res = send(&app(), req).await;
    assert_eq!(res.headers()["x-request-id"], "req-abc");
}

#[tokio::test]
async fn unknown_route_is_json_not_found() {
    let res = send(&app(), request("GET", "/api/stables", Some("org-456"), None)).await;

    assert_eq!(res.status().as_u16(), 404);
    let body = json_body(res).await;
    assert_eq!(body["error"]["code"], "NOT_FOUND");
    assert_eq!(body["error"]["message"], "Route GET /api/stables not found");
}

#[tokio::test]
async fn whoami_reflects_mock_headers() {
    let req = Request::builder()
        .uri("/api/auth/me")
        .header("x-user-id", "user-7")
        .header("x-org-id", "org-456")
        .header("x-role", "admin")
        .body(Body::empty())
        .unwrap();

    let res = send(&app(), req).await;
    assert_eq!(res.status().as_u16(), 200);
    assert_eq!(
        json_body(res).await["data"],
        json!({"userId": "user-7", "orgId": "org-456", "role": "admin"})
    );
}

#[tokio::test]
async fn jwt_mode_without_token_is_unauthenticated() {
    let res = send(&jwt_app(), request("GET", "/api/horses", Some("org-456"), None)).await;

    assert_eq!(res.status().as_u16(), 401);
    assert_eq!(json_body(res).await["error"]["code"], "UNAUTHENTICATED");
}

#[tokio::test]
async fn jwt_without_org_claim_is_unauthorized() {
    let req = Request::builder()
        .uri("/api/horses")
        .header("authorization", format!("Bearer {}", token(json!({"sub": "user-1", "exp": exp()}))))
        .body(Body::empty())
        .unwrap();

    let res = send(&jwt_app(), req).await;
    assert_eq!(res.status().as_u16(), 401);
    let body = json_body(res).await;
    assert_eq!(body["error"]["code"], "UNAUTHORIZED");
    assert_eq!(body["error"]["message"], "No organization context");
}

#[tokio::test]
async fn jwt_org_claim_scopes_created_horse() {
    let app = jwt_app();
    let bearer = format!(
        "Bearer {}",
        token(json!({"sub": "user-1", "org_id": "org-jwt", "exp": exp()}))
    );

    let req = Request::builder()
        .method("POST")
        .uri("/api/horses")
        .header("authorization", &bearer)
        // Identity headers are ignored when bearer auth is configured.
        .header("x-org-id", "org-456")
        .header("content-type", "application/json")
        .body(Body::from(json!({"name": "Storm", "breed": "Mustang", "age": 4}).to_string()))
        .unwrap();

    let res = send(&app, req).await;
    assert_eq!(res.status().as_u16(), 201);
    assert_eq!(json_body(res).await["data"]["orgId"], "org-jwt");
}
