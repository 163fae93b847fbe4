//! Root-level site documents served from the embedded public/ folder

use axum::{
    body::Body,
    http::{StatusCode, header},
    response::{IntoResponse, Response},
};

use crate::assets::Public;

pub async fn index() -> impl IntoResponse {
    embedded("/index.html", "text/html; charset=utf-8")
}

pub async fn robots() -> impl IntoResponse {
    embedded("/robots.txt", "text/plain")
}

pub async fn sitemap() -> impl IntoResponse {
    embedded("/sitemap.xml", "application/xml")
}

fn embedded(path: &str, content_type: &'static str) -> Response {
    match Public::get(path) {
        Some(content) => Response::builder()
            .header(header::CONTENT_TYPE, content_type)
            .body(Body::from(content.data))
            .unwrap(),
        _ => (StatusCode::NOT_FOUND, "404 Not Found").into_response(),
    }
}
