//! Liveness endpoint for the dashboard server

use axum::{routing::get, Json, Router};
use serde::Serialize;

/// Body of `GET /health`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct HealthResponse {
    pub service: &'static str,
    pub status: &'static str,
    pub version: &'static str,
}

impl HealthResponse {
    /// The page is rendered at startup, so a running server is always healthy
    pub const fn current() -> Self {
        Self {
            service: "ironctl",
            status: "ok",
            version: env!("CARGO_PKG_VERSION"),
        }
    }
}

async fn health() -> Json<HealthResponse> {
    Json(HealthResponse::current())
}

pub fn router<S>() -> Router<S>
where
    S: Clone + Send + Sync + 'static,
{
    Router::new().route("/health", get(health))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn reports_service_and_version() {
        let Json(body) = health().await;
        assert_eq!(body, HealthResponse::current());
        assert_eq!(body.service, "ironctl");
        assert_eq!(body.status, "ok");
        assert_eq!(body.version, env!("CARGO_PKG_VERSION"));
    }

    #[test]
    fn serializes_flat_object() {
        let value = serde_json::to_value(HealthResponse::current()).unwrap();
        assert_eq!(value["service"], "ironctl");
        assert_eq!(value["status"], "ok");
        assert_eq!(value.as_object().unwrap().len(), 3);
    }
}
