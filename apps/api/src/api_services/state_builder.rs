use std::sync::Arc;

use sqlx::PgPool;
use vagasplus_application::{
    Clock, DenunciaRepository, DenunciaService, StatusReportRepository, StatusReportService,
    SystemClock, VagaRepository, VagaService,
};
use vagasplus_infrastructure::{
    InMemoryDenunciaRepository, InMemoryStatusReportRepository, InMemoryVagaRepository,
    PostgresDenunciaRepository, PostgresStatusReportRepository, PostgresVagaRepository,
};

use crate::state::AppState;

struct RepositorySet {
    status_report_repository: Arc<dyn StatusReportRepository>,
    vaga_repository: Arc<dyn VagaRepository>,
    denuncia_repository: Arc<dyn DenunciaRepository>,
}

pub fn build_app_state(pool: PgPool) -> AppState {
    let repositories = RepositorySet {
        status_report_repository: Arc::new(PostgresStatusReportRepository::new(pool.clone())),
        vaga_repository: Arc::new(PostgresVagaRepository::new(pool.clone())),
        denuncia_repository: Arc::new(PostgresDenunciaRepository::new(pool.clone())),
    };

    assemble(repositories, Arc::new(SystemClock), Some(pool))
}

pub fn build_in_memory_app_state(clock: Arc<dyn Clock>) -> AppState {
    let repositories = RepositorySet {
        status_report_repository: Arc::new(InMemoryStatusReportRepository::new()),
        vaga_repository: Arc::new(InMemoryVagaRepository::new()),
        denuncia_repository: Arc::new(InMemoryDenunciaRepository::new()),
    };

    assemble(repositories, clock, None)
}

fn assemble(
    repositories: RepositorySet,
    clock: Arc<dyn Clock>,
    postgres_pool: Option<PgPool>,
) -> AppState {
    AppState {
        status_report_service: StatusReportService::new(
            repositories.status_report_repository,
            clock.clone(),
        ),
        vaga_service: VagaService::new(repositories.vaga_repository),
        denuncia_service: DenunciaService::new(repositories.denuncia_repository, clock),
        postgres_pool,
    }
}
