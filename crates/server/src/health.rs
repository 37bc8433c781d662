use axum::{extract::State, http::StatusCode, routing::get, Json, Router};
use chrono::Utc;
use serde::Serialize;

#[derive(Clone)]
pub struct HealthState {
    mode: &'static str,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    /// `generative` when a provider client is configured, `fallback-only`
    /// when every request is answered from the curated bank, `misconfigured`
    /// when the strict credential policy is unsatisfied.
    pub mode: &'static str,
    pub checked_at: String,
}

pub fn router(mode: &'static str) -> Router {
    Router::new().route("/health", get(health)).with_state(HealthState { mode })
}

pub async fn health(State(state): State<HealthState>) -> (StatusCode, Json<HealthResponse>) {
    let ready = state.mode != "misconfigured";
    let payload = HealthResponse {
        status: if ready { "ready" } else { "degraded" },
        mode: state.mode,
        checked_at: Utc::now().to_rfc3339(),
    };

    let status_code = if ready { StatusCode::OK } else { StatusCode::SERVICE_UNAVAILABLE };
    (status_code, Json(payload))
}

#[cfg(test)]
mod tests {
    use axum::{extract::State, http::StatusCode, Json};

    use crate::health::{health, HealthState};

    #[tokio::test]
    async fn health_reports_generative_mode_as_ready() {
        let (status, Json(payload)) = health(State(HealthState { mode: "generative" })).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(payload.status, "ready");
        assert_eq!(payload.mode, "generative");
    }

    #[tokio::test]
    async fn health_reports_fallback_only_mode_as_ready() {
        let (status, Json(payload)) = health(State(HealthState { mode: "fallback-only" })).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(payload.mode, "fallback-only");
    }

    #[tokio::test]
    async fn health_reports_misconfigured_mode_as_degraded() {
        let (status, Json(payload)) = health(State(HealthState { mode: "misconfigured" })).await;

        assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
        assert_eq!(payload.status, "degraded");
    }
}
