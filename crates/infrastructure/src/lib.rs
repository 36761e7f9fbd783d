//! Infrastructure adapters for application ports.

#![forbid(unsafe_code)]

mod in_memory_denuncia_repository;
mod in_memory_status_report_repository;
mod in_memory_vaga_repository;
mod postgres_denuncia_repository;
mod postgres_status_report_repository;
mod postgres_vaga_repository;

pub use in_memory_denuncia_repository::InMemoryDenunciaRepository;
pub use in_memory_status_report_repository::InMemoryStatusReportRepository;
pub use in_memory_vaga_repository::InMemoryVagaRepository;
pub use postgres_denuncia_repository::PostgresDenunciaRepository;
pub use postgres_status_report_repository::PostgresStatusReportRepository;
pub use postgres_vaga_repository::PostgresVagaRepository;
