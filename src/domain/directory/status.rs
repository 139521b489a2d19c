//! Load status of the directory

use chrono::{DateTime, Utc};
use serde::Serialize;

/// Where the bulk load stands
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum LoadStatus {
    /// No load has been requested yet
    #[default]
    Idle,
    /// A fetch is outstanding
    Loading,
    /// The last load succeeded
    Ready {
        count: usize,
        loaded_at: DateTime<Utc>,
    },
    /// The last load failed; a retry is possible
    LoadFailed { reason: String },
}

impl LoadStatus {
    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }

    pub fn is_ready(&self) -> bool {
        matches!(self, Self::Ready { .. })
    }

    pub fn is_failed(&self) -> bool {
        matches!(self, Self::LoadFailed { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_serialization() {
        assert_eq!(
            serde_json::to_value(LoadStatus::Loading).unwrap(),
            serde_json::json!({"state": "loading"})
        );

        let failed = LoadStatus::LoadFailed {
            reason: "HTTP 503".to_string(),
        };
        assert_eq!(
            serde_json::to_value(&failed).unwrap(),
            serde_json::json!({"state": "load_failed", "reason": "HTTP 503"})
        );
    }

    #[test]
    fn test_ready_serialization_includes_count() {
        let ready = LoadStatus::Ready {
            count: 10,
            loaded_at: Utc::now(),
        };

        let json = serde_json::to_value(&ready).unwrap();
        assert_eq!(json["state"], "ready");
        assert_eq!(json["count"], 10);
        assert!(json["loaded_at"].is_string());
    }

    #[test]
    fn test_predicates() {
        assert!(LoadStatus::Loading.is_loading());
        assert!(!LoadStatus::Idle.is_ready());
        assert!(
            LoadStatus::LoadFailed {
                reason: String::new()
            }
            .is_failed()
        );
    }
}
