use axum::response::IntoResponse;

/// GET /healthz - Liveness probe
/// Returns 200 OK if the process is alive
pub async fn healthz() -> impl IntoResponse {
    "ok"
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::StatusCode;

    #[tokio::test]
    async fn test_healthz_endpoint() {
        let response = healthz().await.into_response();
        assert_eq!(response.status(), StatusCode::OK);
    }
}
