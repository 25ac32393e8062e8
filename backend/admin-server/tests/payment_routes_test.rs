#![allow(clippy::expect_used, clippy::unwrap_used, clippy::indexing_slicing)]

use admin_server::{app, configs, routes::AppState};
use axum::{
    body::{to_bytes, Body},
    http::{header, Request, StatusCode},
    Router,
};
use common_utils::consts::X_REQUEST_ID;
use serde_json::Value;
use tower::ServiceExt;

mod common;
use common::{FactoryBuilder, UnavailableCountryService};

fn router_with(factory_builder: FactoryBuilder) -> Router {
    let config = configs::Config::new().expect("Failed while parsing config");
    app::router(AppState::with_factory(&config, factory_builder.build()))
}

fn post(uri: &str, body: &str) -> Request<Body> {
    Request::post(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_owned()))
        .expect("Failed to build request")
}

async fn send(router: Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = router.oneshot(request).await.expect("Request failed");
    let status = response.status();
    let body = to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("Failed to read body");

    (status, serde_json::from_slice(&body).expect("Body is not JSON"))
}

#[tokio::test]
async fn missing_model_is_a_bad_request() {
    for uri in [
        "/admin/payment/methods",
        "/admin/payment/methods/search",
        "/admin/payment/methods/list",
        "/admin/payment/methods/restrictions",
    ] {
        let (status, body) = send(router_with(FactoryBuilder::default()), post(uri, "")).await;

        assert_eq!(status, StatusCode::BAD_REQUEST, "{uri}");
        assert_eq!(body["error"]["code"], "IR_00", "{uri}");
    }
}

#[tokio::test]
async fn null_model_is_a_bad_request() {
    let (status, body) = send(
        router_with(FactoryBuilder::default()),
        post("/admin/payment/methods/list", "null"),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"]["code"], "IR_00");
}

#[tokio::test]
async fn malformed_model_is_a_bad_request() {
    let (status, body) = send(
        router_with(FactoryBuilder::default()),
        post("/admin/payment/methods/list", "{\"page_size\":"),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"]["code"], "IR_01");
}

#[tokio::test]
async fn search_model_gets_grid_defaults() {
    let (status, body) = send(
        router_with(FactoryBuilder::default()),
        post("/admin/payment/methods/search", r#"{"page_index": 4}"#),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["page_index"], 0);
    assert_eq!(body["page_size"], 15);
    assert_eq!(
        body["available_page_sizes"],
        serde_json::json!([10, 15, 20, 50, 100])
    );
}

#[tokio::test]
async fn list_is_paged_and_localized() {
    let request = Request::post("/admin/payment/methods/list")
        .header(header::ACCEPT_LANGUAGE, "de-DE,en;q=0.5")
        .body(Body::from(r#"{"page_index": 0, "page_size": 2}"#))
        .expect("Failed to build request");

    let (status, body) = send(router_with(FactoryBuilder::default()), request).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["total_count"], 3);
    assert_eq!(body["items"].as_array().map(Vec::len), Some(2));
    assert_eq!(body["items"][0]["system_name"], "Payments.A");
    assert_eq!(body["items"][1]["recurring_payment_type"], "Manuell");
    assert_eq!(body["items"][1]["is_active"], false);
}

#[tokio::test]
async fn unknown_language_falls_back_to_the_default() {
    let request = Request::post("/admin/payment/methods/list")
        .header(header::ACCEPT_LANGUAGE, "fr-FR")
        .body(Body::from("{}"))
        .expect("Failed to build request");

    let (status, body) = send(router_with(FactoryBuilder::default()), request).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["items"][2]["recurring_payment_type"], "Automatic");
}

#[tokio::test]
async fn restrictions_are_returned_as_a_nested_map() {
    let (status, body) = send(
        router_with(FactoryBuilder::default()),
        post("/admin/payment/methods/restrictions", "{}"),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["available_countries"].as_array().map(Vec::len), Some(5));
    assert_eq!(body["restricted"]["Payments.A"]["4"], true);
    assert_eq!(body["restricted"]["Payments.B"]["4"], false);
}

#[tokio::test]
async fn provider_failure_is_an_internal_error() {
    let (status, body) = send(
        router_with(FactoryBuilder::default().country_service(UnavailableCountryService)),
        post("/admin/payment/methods", "{}"),
    )
    .await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["error"]["code"], "HE_00");
}

#[tokio::test]
async fn request_id_is_propagated() {
    let request = Request::get("/health")
        .header(X_REQUEST_ID, "req-1234")
        .body(Body::empty())
        .expect("Failed to build request");

    let response = router_with(FactoryBuilder::default())
        .oneshot(request)
        .await
        .expect("Request failed");

    assert_eq!(
        response
            .headers()
            .get(X_REQUEST_ID)
            .and_then(|value| value.to_str().ok()),
        Some("req-1234")
    );
}

#[tokio::test]
async fn request_id_is_generated_when_absent() {
    let response = router_with(FactoryBuilder::default())
        .oneshot(
            Request::get("/health")
                .body(Body::empty())
                .expect("Failed to build request"),
        )
        .await
        .expect("Request failed");

    assert!(response.headers().contains_key(X_REQUEST_ID));
}
