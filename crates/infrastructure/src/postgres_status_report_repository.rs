//! PostgreSQL-backed status report repository using the `status_reports` table.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use tracing::debug;
use uuid::Uuid;

use vagasplus_application::StatusReportRepository;
use vagasplus_core::{AppError, AppResult};
use vagasplus_domain::{NewStatusReport, Occupancy, StatusReport, StatusReportId};

const RECENT_REPORT_EXISTS: &str = r#"
    SELECT EXISTS (
        SELECT 1
        FROM status_reports
        WHERE vaga_id = $1
          AND ip_address = $2
          AND reported_at >= $3
    )
"#;

/// PostgreSQL implementation of the status report repository port.
#[derive(Clone)]
pub struct PostgresStatusReportRepository {
    pool: PgPool,
}

impl PostgresStatusReportRepository {
    /// Creates a repository with the provided connection pool.
    #[must_use]
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl StatusReportRepository for PostgresStatusReportRepository {
    async fn has_report_since(
        &self,
        vaga_id: &str,
        ip_address: &str,
        since: DateTime<Utc>,
    ) -> AppResult<bool> {
        sqlx::query_scalar::<_, bool>(RECENT_REPORT_EXISTS)
            .bind(vaga_id)
            .bind(ip_address)
            .bind(since)
            .fetch_one(&self.pool)
            .await
            .map_err(|error| {
                AppError::StorageUnavailable(format!(
                    "failed to check recent status reports: {error}"
                ))
            })
    }

    async fn insert_unless_reported_since(
        &self,
        report: NewStatusReport,
        since: DateTime<Utc>,
    ) -> AppResult<Option<StatusReport>> {
        let mut transaction = self.pool.begin().await.map_err(|error| {
            AppError::StorageUnavailable(format!("failed to begin transaction: {error}"))
        })?;

        // Serializes concurrent submissions for the same pair until commit.
        sqlx::query("SELECT pg_advisory_xact_lock(hashtextextended($1, 0))")
            .bind(advisory_lock_key(report.vaga_id(), report.ip_address()))
            .execute(&mut *transaction)
            .await
            .map_err(|error| {
                AppError::StorageUnavailable(format!(
                    "failed to lock status report submission: {error}"
                ))
            })?;

        let competing = sqlx::query_scalar::<_, bool>(RECENT_REPORT_EXISTS)
            .bind(report.vaga_id())
            .bind(report.ip_address())
            .bind(since)
            .fetch_one(&mut *transaction)
            .await
            .map_err(|error| {
                AppError::StorageUnavailable(format!(
                    "failed to check recent status reports: {error}"
                ))
            })?;

        if competing {
            debug!(
                vaga_id = %report.vaga_id(),
                "concurrent status report won the submission window"
            );
            return Ok(None);
        }

        let id = sqlx::query_scalar::<_, Uuid>(
            r#"
            INSERT INTO status_reports (
                vaga_id,
                vagas_disponiveis,
                total_vagas,
                reported_at,
                ip_address,
                observacoes
            )
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING id
            "#,
        )
        .bind(report.vaga_id())
        .bind(report.occupancy().vagas_disponiveis())
        .bind(report.occupancy().total_vagas())
        .bind(report.reported_at())
        .bind(report.ip_address())
        .bind(report.observacoes())
        .fetch_one(&mut *transaction)
        .await
        .map_err(|error| {
            AppError::StorageUnavailable(format!("failed to insert status report: {error}"))
        })?;

        transaction.commit().await.map_err(|error| {
            AppError::StorageUnavailable(format!("failed to commit status report: {error}"))
        })?;

        Ok(Some(report.into_report(StatusReportId::from_uuid(id))))
    }

    async fn find_latest_since(
        &self,
        vaga_id: &str,
        since: DateTime<Utc>,
    ) -> AppResult<Option<StatusReport>> {
        let row = sqlx::query_as::<_, StatusReportRow>(
            r#"
            SELECT id, vaga_id, vagas_disponiveis, total_vagas, reported_at, ip_address, observacoes
            FROM status_reports
            WHERE vaga_id = $1
              AND reported_at >= $2
            ORDER BY reported_at DESC, id DESC
            LIMIT 1
            "#,
        )
        .bind(vaga_id)
        .bind(since)
        .fetch_optional(&self.pool)
        .await
        .map_err(|error| {
            AppError::StorageUnavailable(format!("failed to load latest status report: {error}"))
        })?;

        row.map(StatusReportRow::into_report).transpose()
    }
}

fn advisory_lock_key(vaga_id: &str, ip_address: &str) -> String {
    format!("status_report:{vaga_id}\u{1f}{ip_address}")
}

#[derive(Debug, sqlx::FromRow)]
struct StatusReportRow {
    id: Uuid,
    vaga_id: String,
    vagas_disponiveis: i32,
    total_vagas: i32,
    reported_at: DateTime<Utc>,
    ip_address: String,
    observacoes: Option<String>,
}

impl StatusReportRow {
    fn into_report(self) -> AppResult<StatusReport> {
        let occupancy = Occupancy::new(self.vagas_disponiveis, self.total_vagas)?;
        let report = NewStatusReport::new(
            self.vaga_id,
            occupancy,
            self.reported_at,
            self.ip_address,
            self.observacoes,
        )?;

        Ok(report.into_report(StatusReportId::from_uuid(self.id)))
    }
}
