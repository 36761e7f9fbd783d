use vagasplus_application::LatestStatusReport;
use vagasplus_domain::StatusReport;

use super::types::{LatestStatusReportResponse, StatusReportCreatedResponse};
use crate::dto::format_timestamp;

impl From<StatusReport> for StatusReportCreatedResponse {
    fn from(report: StatusReport) -> Self {
        Self {
            id: report.id().to_string(),
            message: "status report created".to_owned(),
            vaga_id: report.vaga_id().to_owned(),
            vagas_disponiveis: report.occupancy().vagas_disponiveis(),
        }
    }
}

impl From<LatestStatusReport> for LatestStatusReportResponse {
    fn from(latest: LatestStatusReport) -> Self {
        let LatestStatusReport {
            report,
            minutes_ago,
        } = latest;
        let occupancy = report.occupancy();

        Self {
            id: report.id().to_string(),
            vaga_id: report.vaga_id().to_owned(),
            vagas_disponiveis: occupancy.vagas_disponiveis(),
            total_vagas: occupancy.total_vagas(),
            timestamp: format_timestamp(report.reported_at()),
            observacoes: report.observacoes().map(ToOwned::to_owned),
            minutes_ago,
        }
    }
}
