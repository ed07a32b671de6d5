use serde::Serialize;
use utoipa::ToSchema;

/// Outcome of the database probe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum HealthStatus {
    /// The database file opened and answered a query.
    Ok,
    /// The database could not be opened or queried.
    Degraded,
}

/// Body of the `/healthcheck` route.
#[derive(Debug, Serialize, ToSchema)]
pub struct HealthResponse {
    pub status: HealthStatus,
}

impl From<HealthStatus> for HealthResponse {
    fn from(status: HealthStatus) -> Self {
        Self { status }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn statuses_serialize_in_lowercase() {
        let ok = serde_json::to_value(HealthResponse::from(HealthStatus::Ok)).unwrap();
        assert_eq!(ok, serde_json::json!({"status": "ok"}));

        let degraded = serde_json::to_value(HealthResponse::from(HealthStatus::Degraded)).unwrap();
        assert_eq!(degraded, serde_json::json!({"status": "degraded"}));
    }
}
