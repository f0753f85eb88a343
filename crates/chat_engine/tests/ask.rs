use std::time::Duration;

use chat_engine::{
    EngineEvent, EngineHandle, FailureKind, GatewayClient, GatewaySettings, ReqwestGatewayClient,
};
use pretty_assertions::assert_eq;
use serde_json::json;
use wiremock::matchers::{body_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn settings_for(server: &MockServer) -> GatewaySettings {
    GatewaySettings {
        base_url: server.uri(),
        ..GatewaySettings::default()
    }
}

fn usf_body() -> serde_json::Value {
    json!({
        "bot": {
            "result": "USF is a public university.",
            "source": ["https://usf.edu"],
            "title": ["USF Home"],
        }
    })
}

#[tokio::test]
async fn ask_parses_reply_envelope() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/"))
        .and(body_json(json!({ "prompt": "What is USF?" })))
        .respond_with(ResponseTemplate::new(200).set_body_json(usf_body()))
        .mount(&server)
        .await;

    let client = ReqwestGatewayClient::new(settings_for(&server)).expect("client");
    let reply = client.ask("What is USF?").await.expect("ask ok");

    assert_eq!(reply.result, "USF is a public university.");
    assert_eq!(reply.source, vec!["https://usf.edu".to_string()]);
    assert_eq!(reply.title, vec!["USF Home".to_string()]);
}

#[tokio::test]
async fn ask_fails_on_http_status() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/"))
        .respond_with(ResponseTemplate::new(500).set_body_string("Something went wrong!"))
        .mount(&server)
        .await;

    let client = ReqwestGatewayClient::new(settings_for(&server)).expect("client");
    let err = client.ask("hello").await.unwrap_err();

    assert_eq!(err.kind, FailureKind::HttpStatus(500));
}

#[tokio::test]
async fn ask_fails_on_malformed_body() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/"))
        .respond_with(ResponseTemplate::new(200).set_body_string("not json at all"))
        .mount(&server)
        .await;

    let client = ReqwestGatewayClient::new(settings_for(&server)).expect("client");
    let err = client.ask("hello").await.unwrap_err();

    assert_eq!(err.kind, FailureKind::MalformedBody);
}

#[tokio::test]
async fn ask_fails_on_missing_result_field() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({ "bot": { "source": [] } })),
        )
        .mount(&server)
        .await;

    let client = ReqwestGatewayClient::new(settings_for(&server)).expect("client");
    let err = client.ask("hello").await.unwrap_err();

    assert_eq!(err.kind, FailureKind::MalformedBody);
}

#[tokio::test]
async fn ask_times_out_on_slow_gateway() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_delay(Duration::from_millis(250))
                .set_body_json(usf_body()),
        )
        .mount(&server)
        .await;

    let settings = GatewaySettings {
        request_timeout: Duration::from_millis(50),
        ..settings_for(&server)
    };
    let client = ReqwestGatewayClient::new(settings).expect("client");
    let err = client.ask("hello").await.unwrap_err();

    assert_eq!(err.kind, FailureKind::Timeout);
}

#[tokio::test]
async fn engine_handle_delivers_events() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(usf_body()))
        .mount(&server)
        .await;

    let engine = EngineHandle::new(settings_for(&server)).expect("engine");
    engine.ask("id-1".to_string(), "What is USF?");

    for _ in 0..100 {
        if let Some(event) = engine.try_recv() {
            match event {
                EngineEvent::Replied { id, reply } => {
                    assert_eq!(id, "id-1");
                    assert_eq!(reply.result, "USF is a public university.");
                    return;
                }
                EngineEvent::Failed { error, .. } => panic!("unexpected failure: {error}"),
            }
        }
        tokio::time::sleep(Duration::from_millis(20)).await;
    }
    panic!("no engine event within deadline");
}
