use tracing::warn;

use crate::{
    dto::health::{HealthResponse, HealthStatus},
    state::SharedState,
};

/// Report whether the database file can be opened and queried.
pub async fn health_status(state: &SharedState) -> HealthResponse {
    let status = match state.game_store().health_check().await {
        Ok(()) => HealthStatus::Ok,
        Err(err) => {
            warn!(error = %err, "storage health check failed");
            HealthStatus::Degraded
        }
    };
    status.into()
}
