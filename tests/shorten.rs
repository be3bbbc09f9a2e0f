#[macro_use]
mod common;

use actix_web::{cookie::Cookie, http::StatusCode, test};
use common::{API_PREFIX, config_for};
use serde_json::{Value, json};
use shortlink_frontend::{handlers::preferences::TERMS_COOKIE, models::shorten::ShortenResponse};
use wiremock::{
    Mock, MockServer, ResponseTemplate,
    matchers::{body_json, method, path},
};

fn shorten_path() -> String {
    format!("{API_PREFIX}/shorten")
}

fn accepted() -> Cookie<'static> {
    Cookie::new(TERMS_COOKIE, "true")
}

async fn forbid_shorten(server: &MockServer) {
    Mock::given(method("POST"))
        .and(path(shorten_path()))
        .respond_with(ResponseTemplate::new(500))
        .expect(0)
        .mount(server)
        .await;
}

#[actix_web::test]
async fn relays_backend_response() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(shorten_path()))
        .and(body_json(json!({ "url": "https://example.com/a/very/long/path" })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "success": true,
            "code": "00",
            "message": "Success",
            "shortUrl": "https://short.example/Ab3dE",
            "expiresAt": "2025-05-21T10:00:00"
        })))
        .expect(1)
        .mount(&server)
        .await;
    let app = init_app!(config_for(&server.uri()));

    let req = test::TestRequest::post()
        .uri("/api/shorten")
        .cookie(accepted())
        .set_json(json!({ "url": "https://example.com/a/very/long/path" }))
        .to_request();
    let body: ShortenResponse = test::call_and_read_body_json(&app, req).await;

    assert!(body.success);
    assert_eq!(body.short_url.as_deref(), Some("https://short.example/Ab3dE"));
    assert_eq!(body.expires_at.as_deref(), Some("2025-05-21T10:00:00"));
}

#[actix_web::test]
async fn relays_backend_failure_body() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(shorten_path()))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({ "success": false, "error": "URL already exists" })),
        )
        .mount(&server)
        .await;
    let app = init_app!(config_for(&server.uri()));

    let req = test::TestRequest::post()
        .uri("/api/shorten")
        .cookie(accepted())
        .set_json(json!({ "url": "https://example.com" }))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::OK);
    let body: ShortenResponse = test::read_body_json(resp).await;
    assert!(!body.success);
    assert_eq!(body.error.as_deref(), Some("URL already exists"));
}

#[actix_web::test]
async fn requires_terms_acceptance() {
    let server = MockServer::start().await;
    forbid_shorten(&server).await;
    let app = init_app!(config_for(&server.uri()));

    let req = test::TestRequest::post()
        .uri("/api/shorten")
        .set_json(json!({ "url": "https://example.com" }))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::FORBIDDEN);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body, json!({ "success": false, "error": "terms_not_accepted" }));
}

#[actix_web::test]
async fn rejects_missing_and_invalid_urls() {
    let server = MockServer::start().await;
    forbid_shorten(&server).await;
    let app = init_app!(config_for(&server.uri()));

    for (payload, expected) in [
        (json!({}), "url_required"),
        (json!({ "url": "" }), "url_required"),
        (json!({ "url": "not a url" }), "invalid_url"),
    ] {
        let req = test::TestRequest::post()
            .uri("/api/shorten")
            .cookie(accepted())
            .set_json(payload)
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        let body: ShortenResponse = test::read_body_json(resp).await;
        assert_eq!(body.error.as_deref(), Some(expected));
    }
}

#[actix_web::test]
async fn backend_error_status_becomes_bad_gateway() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(shorten_path()))
        .respond_with(ResponseTemplate::new(500).set_body_string("boom"))
        .mount(&server)
        .await;
    let app = init_app!(config_for(&server.uri()));

    let req = test::TestRequest::post()
        .uri("/api/shorten")
        .cookie(accepted())
        .set_json(json!({ "url": "https://example.com" }))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::BAD_GATEWAY);
    let body: ShortenResponse = test::read_body_json(resp).await;
    assert_eq!(body.error.as_deref(), Some("API error: 500 - boom"));
}

#[actix_web::test]
async fn empty_error_body_uses_status_reason() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(shorten_path()))
        .respond_with(ResponseTemplate::new(503))
        .mount(&server)
        .await;
    let app = init_app!(config_for(&server.uri()));

    let req = test::TestRequest::post()
        .uri("/api/shorten")
        .cookie(accepted())
        .set_json(json!({ "url": "https://example.com" }))
        .to_request();
    let body: ShortenResponse = test::call_and_read_body_json(&app, req).await;

    assert_eq!(
        body.error.as_deref(),
        Some("API error: 503 - Service Unavailable")
    );
}

#[actix_web::test]
async fn unknown_api_route_is_json_404() {
    let server = MockServer::start().await;
    let app = init_app!(config_for(&server.uri()));

    let resp =
        test::call_service(&app, test::TestRequest::get().uri("/api/missing").to_request()).await;

    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}
