//! Domain entities and invariants.

#![forbid(unsafe_code)]

mod denuncia;
mod ids;
mod occupancy;
mod status_report;
mod vaga;

pub use denuncia::{
    Denuncia, DenunciaStatus, DenunciaSubmission, DenunciaSubmissionInput, SpotType,
    ViolationType,
};
pub use ids::{DenunciaId, StatusReportId, VagaId};
pub use occupancy::Occupancy;
pub use status_report::{
    NewStatusReport, STATUS_REPORT_FRESHNESS_MINUTES, STATUS_REPORT_RATE_LIMIT_MINUTES,
    StatusReport, status_report_freshness_window, status_report_rate_limit_window,
};
pub use vaga::{Coordinates, Vaga, VagaDefinition, VagaDefinitionInput};
