use std::sync::Arc;

use axum::body::{to_bytes, Body};
use axum::http::{header, Request, StatusCode};
use axum::Router;
use chat_gateway::{
    router, ReqwestPredictionService, UpstreamSettings, FAILURE_MESSAGE, GREETING_MESSAGE,
};
use pretty_assertions::assert_eq;
use serde_json::{json, Value};
use tower::ServiceExt;
use wiremock::matchers::{body_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn app_for(endpoint: String) -> Router {
    let settings = UpstreamSettings {
        endpoint,
        ..UpstreamSettings::default()
    };
    let service = ReqwestPredictionService::new(settings).expect("upstream client");
    router(Arc::new(service))
}

fn app_with_upstream(server: &MockServer) -> Router {
    app_for(format!("{}/prediction", server.uri()))
}

fn post_prompt(body: Value) -> Request<Body> {
    Request::post("/")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .expect("request")
}

async fn body_json_of(response: axum::response::Response) -> Value {
    let bytes = to_bytes(response.into_body(), usize::MAX).await.expect("body");
    serde_json::from_slice(&bytes).expect("json body")
}

async fn body_text_of(response: axum::response::Response) -> String {
    let bytes = to_bytes(response.into_body(), usize::MAX).await.expect("body");
    String::from_utf8(bytes.to_vec()).expect("utf8 body")
}

#[tokio::test]
async fn greeting_route_returns_static_message() {
    let app = app_for("http://127.0.0.1:1/prediction".to_string());

    let response = app
        .oneshot(Request::get("/").body(Body::empty()).expect("request"))
        .await
        .expect("response");

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        body_json_of(response).await,
        json!({ "message": GREETING_MESSAGE })
    );
}

#[tokio::test]
async fn relay_passes_upstream_body_through() {
    let server = MockServer::start().await;
    let upstream_body = json!({
        "result": "USF is a public university.",
        "source": ["https://usf.edu"],
        "title": ["USF Home"],
    });
    Mock::given(method("POST"))
        .and(path("/prediction"))
        .and(body_json(json!({ "input": "What is USF?" })))
        .respond_with(ResponseTemplate::new(200).set_body_json(upstream_body.clone()))
        .mount(&server)
        .await;

    let response = app_with_upstream(&server)
        .oneshot(post_prompt(json!({ "prompt": "What is USF?" })))
        .await
        .expect("response");

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json_of(response).await, json!({ "bot": upstream_body }));
}

#[tokio::test]
async fn relay_hides_upstream_failure_detail() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/prediction"))
        .respond_with(ResponseTemplate::new(500).set_body_string("pinecone index exploded"))
        .mount(&server)
        .await;

    let response = app_with_upstream(&server)
        .oneshot(post_prompt(json!({ "prompt": "hello" })))
        .await
        .expect("response");

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let body = body_text_of(response).await;
    assert_eq!(body, FAILURE_MESSAGE);
    assert!(!body.contains("pinecone"));
}

#[tokio::test]
async fn relay_reports_unreachable_upstream_as_failure() {
    // Nothing listens on port 1; the connect fails immediately.
    let app = app_for("http://127.0.0.1:1/prediction".to_string());

    let response = app
        .oneshot(post_prompt(json!({ "prompt": "hello" })))
        .await
        .expect("response");

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body_text_of(response).await, FAILURE_MESSAGE);
}

#[tokio::test]
async fn relay_forwards_missing_prompt_as_absent() {
    let server = MockServer::start().await;
    // The upstream must see an empty object, not an explicit null.
    Mock::given(method("POST"))
        .and(path("/prediction"))
        .and(body_json(json!({})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "result": "ok" })))
        .mount(&server)
        .await;

    let app = app_with_upstream(&server);

    let response = app
        .clone()
        .oneshot(post_prompt(json!({})))
        .await
        .expect("response");
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        body_json_of(response).await,
        json!({ "bot": { "result": "ok" } })
    );

    // A body that is not JSON at all takes the same path.
    let response = app
        .oneshot(
            Request::post("/")
                .body(Body::from("not json"))
                .expect("request"),
        )
        .await
        .expect("response");
    assert_eq!(response.status(), StatusCode::OK);
}
