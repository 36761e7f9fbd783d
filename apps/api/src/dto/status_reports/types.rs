use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Incoming payload for an occupancy report.
///
/// The space comes from the path and the client address from the connection,
/// neither is accepted in the body.
#[derive(Debug, Deserialize, TS)]
#[ts(
    export,
    export_to = "../../../packages/api-types/src/generated/submit-status-report-request.ts"
)]
pub struct SubmitStatusReportRequest {
    pub vagas_disponiveis: i32,
    pub total_vagas: i32,
    pub observacoes: Option<String>,
}

/// Acknowledgement of an accepted occupancy report.
#[derive(Debug, Serialize, TS)]
#[ts(
    export,
    export_to = "../../../packages/api-types/src/generated/status-report-created-response.ts"
)]
pub struct StatusReportCreatedResponse {
    pub id: String,
    pub message: String,
    pub vaga_id: String,
    pub vagas_disponiveis: i32,
}

/// Current known occupancy of a space.
#[derive(Debug, Serialize, TS)]
#[ts(
    export,
    export_to = "../../../packages/api-types/src/generated/latest-status-report-response.ts"
)]
pub struct LatestStatusReportResponse {
    pub id: String,
    pub vaga_id: String,
    pub vagas_disponiveis: i32,
    pub total_vagas: i32,
    pub timestamp: String,
    pub observacoes: Option<String>,
    #[ts(type = "number")]
    pub minutes_ago: i64,
}
