//! Application services and ports.

#![forbid(unsafe_code)]

mod clock;
mod denuncia_service;
mod status_report_ports;
mod status_report_service;
mod vaga_service;

pub use clock::{Clock, SystemClock};
pub use denuncia_service::{
    DENUNCIA_LIST_DEFAULT_LIMIT, DENUNCIA_LIST_MAX_LIMIT, DenunciaListQuery, DenunciaRepository,
    DenunciaService,
};
pub use status_report_ports::StatusReportRepository;
pub use status_report_service::{
    LatestStatusReport, StatusReportService, SubmitStatusReportInput,
};
pub use vaga_service::{VagaRepository, VagaService};
