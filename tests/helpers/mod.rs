//! Shared helpers for driving the router in integration tests

#![allow(dead_code)]

use axum::{
    Router,
    body::{Body, Bytes},
    http::{HeaderMap, Request, StatusCode, header},
};
use http_body_util::BodyExt;
use quoterelay::{
    AppState,
    config::{Config, ContactConfig, LoggingConfig, MailConfig, ServerConfig},
    routes,
};
use tower::ServiceExt;

pub fn test_config() -> Config {
    Config {
        server: ServerConfig {
            host: "127.0.0.1".to_string(),
            port: 5050,
        },
        mail: MailConfig::default(),
        contact: ContactConfig::default(),
        logging: LoggingConfig::default(),
    }
}

pub fn lenient_config() -> Config {
    let mut config = test_config();
    config.contact.strict = false;
    config
}

/// Complete mail section pointing at a loopback port nothing listens on,
/// so a send attempt fails fast with a connection error.
pub fn unreachable_mail() -> MailConfig {
    MailConfig {
        smtp_host: "127.0.0.1".to_string(),
        smtp_port: 1,
        smtp_username: "relay@example.com".to_string(),
        smtp_password: "secret".to_string(),
        recipient: "sales@example.com".to_string(),
    }
}

pub fn app(config: Config) -> Router {
    routes::router(AppState { config })
}

pub async fn post_contact(
    app: Router,
    payload: serde_json::Value,
) -> (StatusCode, serde_json::Value) {
    let response = app
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/api/contact")
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(payload.to_string()))
                .unwrap(),
        )
        .await
        .unwrap();

    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let body = serde_json::from_slice(&bytes).unwrap();

    (status, body)
}

pub async fn get(app: Router, uri: &str) -> (StatusCode, HeaderMap, Bytes) {
    let response = app
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();

    let status = response.status();
    let headers = response.headers().clone();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();

    (status, headers, bytes)
}
