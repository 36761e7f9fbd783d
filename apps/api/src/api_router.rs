use axum::Router;
use axum::routing::{get, patch, post};
use tower_http::trace::TraceLayer;
use vagasplus_core::AppError;

use crate::handlers;
use crate::state::AppState;

mod cors;

pub fn build_router(app_state: AppState, frontend_url: &str) -> Result<Router, AppError> {
    let cors_layer = cors::build_cors_layer(frontend_url)?;

    Ok(Router::new()
        .route("/", get(handlers::root::root_handler))
        .route("/health", get(handlers::health::health_handler))
        .route(
            "/vagas",
            get(handlers::vagas::list_vagas_handler).post(handlers::vagas::create_vaga_handler),
        )
        .route(
            "/vagas/{vaga_id}",
            get(handlers::vagas::get_vaga_handler).delete(handlers::vagas::delete_vaga_handler),
        )
        .route(
            "/vagas/{vaga_id}/status",
            post(handlers::status_reports::submit_status_report_handler),
        )
        .route(
            "/vagas/{vaga_id}/status/latest",
            get(handlers::status_reports::latest_status_report_handler),
        )
        .route(
            "/denuncias",
            get(handlers::denuncias::list_denuncias_handler)
                .post(handlers::denuncias::create_denuncia_handler),
        )
        .route(
            "/denuncias/{denuncia_id}",
            get(handlers::denuncias::get_denuncia_handler)
                .delete(handlers::denuncias::delete_denuncia_handler),
        )
        .route(
            "/denuncias/{denuncia_id}/status",
            patch(handlers::denuncias::update_denuncia_status_handler),
        )
        .layer(TraceLayer::new_for_http())
        .layer(cors_layer)
        .with_state(app_state))
}

#[cfg(test)]
mod tests {
    use super::build_router;
    use crate::test_support::in_memory_state;

    #[test]
    fn router_builds_with_any_origin_and_explicit_origin() {
        let (state, _clock) = in_memory_state();

        assert!(build_router(state.clone(), "*").is_ok());
        assert!(build_router(state, "http://localhost:5173").is_ok());
    }

    #[test]
    fn invalid_frontend_url_is_rejected() {
        let (state, _clock) = in_memory_state();

        assert!(build_router(state, "http://bad\norigin").is_err());
    }
}
