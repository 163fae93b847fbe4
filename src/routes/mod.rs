use axum::{
    Router,
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
};

mod contact;
mod health;
mod site;

#[derive(Clone)]
pub struct AppState {
    pub config: crate::config::Config,
}

pub async fn fallback() -> impl IntoResponse {
    (StatusCode::NOT_FOUND, "404 Not Found")
}

pub fn router(app_state: AppState) -> Router {
    Router::new()
        .route("/", get(site::index))
        .route("/robots.txt", get(site::robots))
        .route("/sitemap.xml", get(site::sitemap))
        .route("/healthz", get(health::healthz))
        .route("/api/contact", post(contact::action))
        .fallback(fallback)
        .nest_service("/static", crate::assets::AssetsService::new())
        .with_state(app_state)
}
