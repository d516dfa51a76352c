// Shared harness for the end to end suites: a fresh seeded app per test and
// small request helpers. Each helper clones the router so state persists
// across requests within one test.

#![allow(dead_code)]

use std::sync::Arc;

use axum::{
    Router,
    body::{Body, Bytes},
    http::{HeaderMap, Method, Request, StatusCode},
};
use http_body_util::BodyExt;
use tower::ServiceExt;

use mergington_activities::modules::activities::adapters::outbound::roster_in_memory::InMemoryRoster;
use mergington_activities::modules::activities::core::seed::default_roster;
use mergington_activities::shell::http::router;
use mergington_activities::shell::state::AppState;

pub struct TestResponse {
    pub status: StatusCode,
    pub headers: HeaderMap,
    pub body: Bytes,
}

impl TestResponse {
    pub fn json(&self) -> serde_json::Value {
        serde_json::from_slice(&self.body).expect("response body is not JSON")
    }
}

pub fn app() -> Router {
    let state = AppState::new(Arc::new(InMemoryRoster::new(
        default_roster().expect("default seed must be valid"),
    )));
    router(state, "static")
}

pub async fn send(app: &Router, method: Method, uri: &str) -> TestResponse {
    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .method(method)
                .uri(uri)
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    let status = response.status();
    let headers = response.headers().clone();
    let body = response.into_body().collect().await.unwrap().to_bytes();
    TestResponse {
        status,
        headers,
        body,
    }
}

/// Percent-encodes a path segment or query value.
pub fn encode(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for byte in raw.bytes() {
        match byte {
            b'A'..=b'Z' | b'a'..=b'z' | b'0'..=b'9' | b'-' | b'.' | b'_' | b'~' | b'@' => {
                out.push(byte as char)
            }
            _ => out.push_str(&format!("%{byte:02X}")),
        }
    }
    out
}

pub async fn activities(app: &Router) -> serde_json::Value {
    let response = send(app, Method::GET, "/activities").await;
    assert_eq!(response.status, StatusCode::OK);
    response.json()
}

pub async fn participants(app: &Router, activity_name: &str) -> Vec<String> {
    let json = activities(app).await;
    json[activity_name]["participants"]
        .as_array()
        .unwrap_or_else(|| panic!("no activity named {activity_name}"))
        .iter()
        .map(|p| p.as_str().unwrap().to_string())
        .collect()
}

pub async fn sign_up(app: &Router, activity_name: &str, email: &str) -> TestResponse {
    let uri = format!(
        "/activities/{}/signup?email={}",
        encode(activity_name),
        encode(email)
    );
    send(app, Method::POST, &uri).await
}

pub async fn unregister(app: &Router, activity_name: &str, email: &str) -> TestResponse {
    let uri = format!(
        "/activities/{}/unregister?email={}",
        encode(activity_name),
        encode(email)
    );
    send(app, Method::DELETE, &uri).await
}
