mod harness;

use harness::config::ConfigBuilder;
use harness::server::TestServer;
use serde_json::{Value, json};

async fn start() -> TestServer {
    TestServer::start(ConfigBuilder::new().build()).await.unwrap()
}

#[tokio::test]
async fn project_round_trip() {
    let server = start().await;

    let created: Value = server
        .client()
        .post(server.url("/api/projects"))
        .json(&json!({"name": "observability"}))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(created["name"], "observability");

    let id = created["id"].as_str().unwrap();
    let fetched: Value = server
        .client()
        .get(server.url(&format!("/api/projects/{id}")))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(fetched["id"], created["id"]);

    let listed: Value = server
        .client()
        .get(server.url("/api/projects"))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(listed.as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn unknown_project_is_not_found() {
    let server = start().await;

    let resp = server
        .client()
        .get(server.url("/api/projects/missing-id"))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 404);

    let body: Value = resp.json().await.unwrap();
    assert_eq!(body["error"]["type"], "not_found");
}

#[tokio::test]
async fn sink_round_trip() {
    let server = start().await;

    let created: Value = server
        .client()
        .post(server.url("/api/sinks"))
        .json(&json!({
            "name": "events",
            "type": "kafka",
            "config": {"brokers": ["k1:9092"], "topic": "telemetry"}
        }))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(created["type"], "kafka");
    assert_eq!(created["config"]["topic"], "telemetry");

    let id = created["id"].as_str().unwrap();
    let fetched: Value = server
        .client()
        .get(server.url(&format!("/api/sinks/{id}")))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(fetched["id"], created["id"]);
}

#[tokio::test]
async fn sink_with_unknown_type_is_rejected() {
    let server = start().await;

    let resp = server
        .client()
        .post(server.url("/api/sinks"))
        .json(&json!({"type": "statsd", "config": {}}))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 422);
}

#[tokio::test]
async fn agent_with_unknown_mode_is_rejected() {
    let server = start().await;

    let resp = server
        .client()
        .post(server.url("/api/agents"))
        .json(&json!({"name": "edge", "mode": "sidecar"}))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 422);
}

#[tokio::test]
async fn agent_with_unknown_sink_ids_is_rejected() {
    let server = start().await;

    let resp = server
        .client()
        .post(server.url("/api/agents"))
        .json(&json!({"name": "edge", "mode": "agent", "sink_ids": ["ghost"]}))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 400);

    let body: Value = resp.json().await.unwrap();
    assert_eq!(body["error"]["type"], "validation_error");
}

#[tokio::test]
async fn agent_token_is_issued_and_rotates() {
    let server = start().await;

    let created: Value = server
        .client()
        .post(server.url("/api/agents"))
        .json(&json!({"name": "edge", "mode": "agentless"}))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    let token = created["token"].as_str().unwrap();
    assert!(token.starts_with("aet_"));

    let id = created["id"].as_str().unwrap();
    let rotated: Value = server
        .client()
        .post(server.url(&format!("/api/agents/{id}/rotate-token")))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(rotated["id"], created["id"]);
    assert_ne!(rotated["token"], created["token"]);
}
