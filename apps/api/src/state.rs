use sqlx::PgPool;
use vagasplus_application::{DenunciaService, StatusReportService, VagaService};

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub status_report_service: StatusReportService,
    pub vaga_service: VagaService,
    pub denuncia_service: DenunciaService,
    pub postgres_pool: Option<PgPool>,
}
