mod common;
mod denuncias;
mod status_reports;
mod vagas;

pub use common::{
    CreatedIdResponse, GenericMessageResponse, HealthDependencyStatus, HealthResponse,
    RootResponse,
};
pub use denuncias::{CreateDenunciaRequest, DenunciaResponse, DenunciaStatusUpdatedResponse};
pub use status_reports::{
    LatestStatusReportResponse, StatusReportCreatedResponse, SubmitStatusReportRequest,
};
pub use vagas::{CreateVagaRequest, VagaResponse};

use chrono::{DateTime, SecondsFormat, Utc};

fn format_timestamp(value: DateTime<Utc>) -> String {
    value.to_rfc3339_opts(SecondsFormat::Millis, true)
}
