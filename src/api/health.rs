//! Health check endpoints

use axum::{extract::State, http::StatusCode, response::IntoResponse};
use serde::Serialize;

use crate::api::types::Json;
use crate::domain::LoadStatus;

use super::state::AppState;

#[derive(Serialize)]
pub struct HealthResponse {
    pub status: HealthStatus,
    pub version: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub directory: Option<LoadStatus>,
}

#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum HealthStatus {
    Healthy,
    Degraded,
    Unhealthy,
}

impl From<&LoadStatus> for HealthStatus {
    fn from(status: &LoadStatus) -> Self {
        match status {
            LoadStatus::Ready { .. } => Self::Healthy,
            LoadStatus::Idle | LoadStatus::Loading => Self::Degraded,
            LoadStatus::LoadFailed { .. } => Self::Unhealthy,
        }
    }
}

/// Returns 200 if the process is running
pub async fn health_check() -> impl IntoResponse {
    let response = HealthResponse {
        status: HealthStatus::Healthy,
        version: env!("CARGO_PKG_VERSION").to_string(),
        directory: None,
    };

    (StatusCode::OK, Json(response))
}

/// Readiness reflects the directory load
pub async fn ready_check(State(state): State<AppState>) -> impl IntoResponse {
    let load_status = state.directory.status().await;
    let status = HealthStatus::from(&load_status);

    let status_code = match status {
        HealthStatus::Healthy | HealthStatus::Degraded => StatusCode::OK,
        HealthStatus::Unhealthy => StatusCode::SERVICE_UNAVAILABLE,
    };

    let response = HealthResponse {
        status,
        version: env!("CARGO_PKG_VERSION").to_string(),
        directory: Some(load_status),
    };

    (status_code, Json(response))
}

pub async fn live_check() -> impl IntoResponse {
    StatusCode::OK
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_health_status_from_load_status() {
        assert_eq!(HealthStatus::from(&LoadStatus::Idle), HealthStatus::Degraded);
        assert_eq!(HealthStatus::from(&LoadStatus::Loading), HealthStatus::Degraded);
        assert_eq!(
            HealthStatus::from(&LoadStatus::LoadFailed {
                reason: "offline".to_string()
            }),
            HealthStatus::Unhealthy
        );
    }

    #[test]
    fn test_health_response_serialization() {
        let response = HealthResponse {
            status: HealthStatus::Healthy,
            version: "1.0.0".to_string(),
            directory: None,
        };

        let json = serde_json::to_string(&response).unwrap();
        assert!(json.contains("\"status\":\"healthy\""));
        assert!(json.contains("\"version\":\"1.0.0\""));
        assert!(!json.contains("directory"));
    }
}
