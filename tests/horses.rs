mod common;

use common::{app, create_horse, json_body, request, send};
use serde_json::json;

#[tokio::test]
async fn create_assigns_caller_org_and_server_fields() {
    let app = app();

    let res = send(
        &app,
        request(
            "POST",
            "/api/horses",
            Some("org-456"),
            Some(json!({"name": "Thunder", "breed": "Arabian", "age": 5})),
        ),
    )
    .await;

    assert_eq!(res.status().as_u16(), 201);
    let body = json_body(res).await;
    assert_eq!(body["message"], "Horse created successfully");

    let horse = &body["data"];
    assert_eq!(horse["orgId"], "org-456");
    assert_eq!(horse["name"], "Thunder");
    assert_eq!(horse["age"], 5);
    assert_eq!(horse["color"], json!(null));
    assert!(horse["id"].as_str().is_some_and(|id| !id.is_empty()));
    assert_eq!(horse["createdAt"], horse["updatedAt"]);
}

#[tokio::test]
async fn create_ignores_org_id_in_body() {
    let app = app();

    let horse = create_horse(
        &app,
        "org-456",
        json!({"name": "Thunder", "breed": "Arabian", "age": 5, "orgId": "org-999"}),
    )
    .await;

    assert_eq!(horse["orgId"], "org-456");
}

#[tokio::test]
async fn create_rejects_missing_fields_and_string_age() {
    let app = app();

    let res = send(
        &app,
        request("POST", "/api/horses", Some("org-456"), Some(json!({"name": "Thunder"}))),
    )
    .await;
    assert_eq!(res.status().as_u16(), 400);
    let body = json_body(res).await;
    assert_eq!(body["error"]["code"], "MISSING_FIELDS");

    let res = send(
        &app,
        request(
            "POST",
            "/api/horses",
            Some("org-456"),
            Some(json!({"name": "Thunder", "breed": "Arabian", "age": "5"})),
        ),
    )
    .await;
    assert_eq!(res.status().as_u16(), 400);
    assert_eq!(json_body(res).await["error"]["code"], "INVALID_BODY");

    // Nothing was stored by either attempt.
    let res = send(&app, request("GET", "/api/horses", Some("org-456"), None)).await;
    assert_eq!(json_body(res).await["count"], 0);
}

#[tokio::test]
async fn list_is_scoped_to_the_caller_org() {
    let app = app();

    create_horse(&app, "org-a", json!({"name": "A1", "breed": "Arabian", "age": 3})).await;
    create_horse(&app, "org-b", json!({"name": "B1", "breed": "Friesian", "age": 4})).await;
    create_horse(&app, "org-a", json!({"name": "A2", "breed": "Mustang", "age": 6})).await;

    let res = send(&app, request("GET", "/api/horses", Some("org-a"), None)).await;
    assert_eq!(res.status().as_u16(), 200);

    let body = json_body(res).await;
    assert_eq!(body["count"], 2);
    let names: Vec<&str> = body["data"]
        .as_array()
        .unwrap()
        .iter()
        .map(|h| h["name"].as_str().unwrap())
        .collect();
    assert_eq!(names, ["A1", "A2"]);

    let res = send(&app, request("GET", "/api/horses", Some("org-empty"), None)).await;
    let body = json_body(res).await;
    assert_eq!(body["count"], 0);
    assert_eq!(body["data"], json!([]));
}

#[tokio::test]
async fn other_org_gets_forbidden_on_every_operation() {
    let app = app();
    let horse = create_horse(&app, "org-456", json!({"name": "Thunder", "breed": "Arabian", "age": 5})).await;
    let uri = format!("/api/horses/{}", horse["id"].as_str().unwrap());

    for (method, body) in [
        ("GET", None),
        ("PUT", Some(json!({"age": 9}))),
        ("PATCH", Some(json!({"age": 9}))),
        ("DELETE", None),
    ] {
        let res = send(&app, request(method, &uri, Some("org-999"), body)).await;
        assert_eq!(res.status().as_u16(), 403, "{method}");
        let body = json_body(res).await;
        assert_eq!(body["error"]["message"], "You do not have access to this horse");
    }

    // The owner still sees it unchanged.
    let res = send(&app, request("GET", &uri, Some("org-456"), None)).await;
    assert_eq!(res.status().as_u16(), 200);
    assert_eq!(json_body(res).await["data"]["age"], 5);
}

#[tokio::test]
async fn unknown_and_malformed_ids_are_not_found() {
    let app = app();

    let missing = uuid::Uuid::new_v4();
    let res = send(
        &app,
        request("DELETE", &format!("/api/horses/{missing}"), Some("org-456"), None),
    )
    .await;
    assert_eq!(res.status().as_u16(), 404);
    let body = json_body(res).await;
    assert_eq!(body["error"]["message"], format!("Horse with ID {missing} not found"));

    let res = send(&app, request("GET", "/api/horses/not-a-uuid", Some("org-456"), None)).await;
    assert_eq!(res.status().as_u16(), 404);
}

#[tokio::test]
async fn update_merges_fields_and_refreshes_updated_at() {
    let app = app();
    let horse = create_horse(
        &app,
        "org-456",
        json!({"name": "Thunder", "breed": "Arabian", "age": 5, "color": "bay"}),
    )
    .await;
    let uri = format!("/api/horses/{}", horse["id"].as_str().unwrap());

    tokio::time::sleep(std::time::Duration::from_millis(5)).await;

    let res = send(&app, request("PUT", &uri, Some("org-456"), Some(json!({})))).await;
    assert_eq!(res.status().as_u16(), 200);
    let body = json_body(res).await;
    assert_eq!(body["message"], "Horse updated successfully");
    let updated = &body["data"];
    assert_eq!(updated["name"], "Thunder");
    assert_eq!(updated["color"], "bay");
    assert_eq!(updated["createdAt"], horse["createdAt"]);
    assert_ne!(updated["updatedAt"], horse["updatedAt"]);

    let res = send(
        &app,
        request("PATCH", &uri, Some("org-456"), Some(json!({"age": 6, "color": null, "orgId": "org-999"}))),
    )
    .await;
    assert_eq!(res.status().as_u16(), 200);
    let updated = json_body(res).await["data"].clone();
    assert_eq!(updated["age"], 6);
    assert_eq!(updated["color"], json!(null));
    assert_eq!(updated["orgId"], "org-456");
    assert_eq!(updated["id"], horse["id"]);
}

#[tokio::test]
async fn delete_then_get_is_not_found() {
    let app = app();
    let horse = create_horse(&app, "org-456", json!({"name": "Thunder", "breed": "Arabian", "age": 5})).await;
    let uri = format!("/api/horses/{}", horse["id"].as_str().unwrap());

    let res = send(&app, request("DELETE", &uri, Some("org-456"), None)).await;
    assert_eq!(res.status().as_u16(), 200);
    let body = json_body(res).await;
    assert_eq!(body, json!({"message": "Horse deleted successfully"}));

    let res = send(&app, request("GET", &uri, Some("org-456"), None)).await;
    assert_eq!(res.status().as_u16(), 404);

    let res = send(&app, request("DELETE", &uri, Some("org-456"), None)).await;
    assert_eq!(res.status().as_u16(), 404);
}

#[tokio::test]
async fn missing_org_header_falls_back_to_mock_org() {
    let app = app();

    let res = send(
        &app,
        request(
            "POST",
            "/api/horses",
            None,
            Some(json!({"name": "Thunder", "breed": "Arabian", "age": 5})),
        ),
    )
    .await;
    assert_eq!(res.status().as_u16(), 201);
    assert_eq!(json_body(res).await["data"]["orgId"], "mock-org-456");
}

#[tokio::test]
async fn non_ascii_org_header_is_its_own_tenant() {
    let app = app();
    create_horse(&app, "mock-org-456", json!({"name": "Secret", "breed": "Arabian", "age": 5})).await;

    let req = axum::http::Request::builder()
        .uri("/api/horses")
        .header(
            "x-org-id",
            axum::http::HeaderValue::from_bytes("écurie-nord".as_bytes()).unwrap(),
        )
        .body(axum::body::Body::empty())
        .unwrap();
    let res = send(&app, req).await;
    assert_eq!(res.status().as_u16(), 200);
    let body = json_body(res).await;
    assert_eq!(body["count"], 0);

    let req = axum::http::Request::builder()
        .uri("/api/horses")
        .header("x-org-id", axum::http::HeaderValue::from_bytes(&[0x6f, 0xff]).unwrap())
        .body(axum::body::Body::empty())
        .unwrap();
    let res = send(&app, req).await;
    assert_eq!(res.status().as_u16(), 401);
    assert_eq!(json_body(res).await["error"]["code"], "UNAUTHENTICATED");
}

#[tokio::test]
async fn oversized_body_is_payload_too_large() {
    let app = app();

    // No content-length header, so the limit trips while buffering the body.
    let name = "x".repeat(1_200_000);
    let res = send(
        &app,
        request(
            "POST",
            "/api/horses",
            Some("org-456"),
            Some(json!({"name": name, "breed": "Arabian", "age": 5})),
        ),
    )
    .await;

    assert_eq!(res.status().as_u16(), 413);
    assert_eq!(json_body(res).await["error"]["code"], "PAYLOAD_TOO_LARGE");

    let res = send(&app, request("GET", "/api/horses", Some("org-456"), None)).await;
    assert_eq!(json_body(res).await["count"], 0);
}
