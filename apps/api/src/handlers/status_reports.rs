use std::net::SocketAddr;

use axum::Json;
use axum::extract::{ConnectInfo, Path, State};
use tracing::{info, warn};
use vagasplus_application::SubmitStatusReportInput;
use vagasplus_core::AppError;

use crate::dto::{
    LatestStatusReportResponse, StatusReportCreatedResponse, SubmitStatusReportRequest,
};
use crate::error::ApiResult;
use crate::state::AppState;

/// Accepts an occupancy report, rate limited per space and client address.
///
/// The address is the peer of the TCP connection. Forwarding headers are not
/// consulted.
pub async fn submit_status_report_handler(
    State(state): State<AppState>,
    ConnectInfo(peer): ConnectInfo<SocketAddr>,
    Path(vaga_id): Path<String>,
    Json(payload): Json<SubmitStatusReportRequest>,
) -> ApiResult<Json<StatusReportCreatedResponse>> {
    let report = state
        .status_report_service
        .submit(SubmitStatusReportInput {
            vaga_id: vaga_id.clone(),
            ip_address: peer.ip().to_string(),
            vagas_disponiveis: payload.vagas_disponiveis,
            total_vagas: payload.total_vagas,
            observacoes: payload.observacoes,
        })
        .await
        .inspect_err(|error| {
            if matches!(error, AppError::RateLimited { .. }) {
                warn!(vaga_id = %vaga_id, "status report rejected by rate limit");
            }
        })?;

    info!(
        vaga_id = %report.vaga_id(),
        report_id = %report.id(),
        vagas_disponiveis = report.occupancy().vagas_disponiveis(),
        "status report accepted"
    );

    Ok(Json(StatusReportCreatedResponse::from(report)))
}

pub async fn latest_status_report_handler(
    State(state): State<AppState>,
    Path(vaga_id): Path<String>,
) -> ApiResult<Json<Option<LatestStatusReportResponse>>> {
    let latest = state
        .status_report_service
        .latest_valid(vaga_id.as_str())
        .await?;

    Ok(Json(latest.map(LatestStatusReportResponse::from)))
}
