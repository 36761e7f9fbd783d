use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;

use crate::dto::HealthResponse;
use crate::state::AppState;

mod checks;

use checks::check_postgres;

pub async fn health_handler(State(state): State<AppState>) -> (StatusCode, Json<HealthResponse>) {
    let postgres = check_postgres(state.postgres_pool.clone()).await;

    let ready = postgres.status != "error";
    let status = if ready { "ok" } else { "degraded" };
    let http_status = if ready {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    (
        http_status,
        Json(HealthResponse {
            status,
            ready,
            postgres,
        }),
    )
}

#[cfg(test)]
mod tests {
    use axum::extract::State;
    use axum::http::StatusCode;

    use super::health_handler;
    use crate::test_support::in_memory_state;

    #[tokio::test]
    async fn in_memory_backend_reports_postgres_disabled() {
        let (state, _clock) = in_memory_state();

        let (status, body) = health_handler(State(state)).await;

        assert_eq!(status, StatusCode::OK);
        assert!(body.ready);
        assert_eq!(body.postgres.status, "disabled");
    }
}
