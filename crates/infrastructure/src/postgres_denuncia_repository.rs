use std::str::FromStr;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use uuid::Uuid;

use vagasplus_application::{DenunciaListQuery, DenunciaRepository};
use vagasplus_core::{AppError, AppResult};
use vagasplus_domain::{
    Denuncia, DenunciaId, DenunciaStatus, DenunciaSubmission, DenunciaSubmissionInput, SpotType,
    ViolationType,
};

/// PostgreSQL-backed complaint repository.
#[derive(Clone)]
pub struct PostgresDenunciaRepository {
    pool: PgPool,
}

impl PostgresDenunciaRepository {
    /// Creates a repository with the provided connection pool.
    #[must_use]
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl DenunciaRepository for PostgresDenunciaRepository {
    async fn insert_denuncia(
        &self,
        submission: DenunciaSubmission,
        data_criacao: DateTime<Utc>,
    ) -> AppResult<Denuncia> {
        let coordinates = submission.coordinates();

        let id = sqlx::query_scalar::<_, Uuid>(
            r#"
            INSERT INTO denuncias (
                endereco,
                latitude,
                longitude,
                tipo_vaga,
                tipo_infracao,
                descricao,
                midias,
                data_criacao,
                status
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
            RETURNING id
            "#,
        )
        .bind(submission.endereco())
        .bind(coordinates.map(|value| value.latitude()))
        .bind(coordinates.map(|value| value.longitude()))
        .bind(submission.tipo_vaga().as_str())
        .bind(submission.tipo_infracao().as_str())
        .bind(submission.descricao())
        .bind(submission.midias())
        .bind(data_criacao)
        .bind(DenunciaStatus::Pendente.as_str())
        .fetch_one(&self.pool)
        .await
        .map_err(|error| {
            AppError::StorageUnavailable(format!("failed to insert denuncia: {error}"))
        })?;

        Ok(Denuncia::new(
            DenunciaId::from_uuid(id),
            submission,
            data_criacao,
            DenunciaStatus::Pendente,
        ))
    }

    async fn list_denuncias(&self, query: DenunciaListQuery) -> AppResult<Vec<Denuncia>> {
        let limit = i64::try_from(query.limit)
            .map_err(|error| AppError::Validation(format!("invalid list limit: {error}")))?;

        let rows = sqlx::query_as::<_, DenunciaRow>(
            r#"
            SELECT
                id,
                endereco,
                latitude,
                longitude,
                tipo_vaga,
                tipo_infracao,
                descricao,
                midias,
                data_criacao,
                status
            FROM denuncias
            WHERE ($1::text IS NULL OR status = $1)
            ORDER BY data_criacao DESC, id DESC
            LIMIT $2
            "#,
        )
        .bind(query.status.map(|status| status.as_str()))
        .bind(limit)
        .fetch_all(&self.pool)
        .await
        .map_err(|error| {
            AppError::StorageUnavailable(format!("failed to list denuncias: {error}"))
        })?;

        rows.into_iter().map(DenunciaRow::into_denuncia).collect()
    }

    async fn find_denuncia(&self, denuncia_id: DenunciaId) -> AppResult<Option<Denuncia>> {
        let row = sqlx::query_as::<_, DenunciaRow>(
            r#"
            SELECT
                id,
                endereco,
                latitude,
                longitude,
                tipo_vaga,
                tipo_infracao,
                descricao,
                midias,
                data_criacao,
                status
            FROM denuncias
            WHERE id = $1
            "#,
        )
        .bind(denuncia_id.as_uuid())
        .fetch_optional(&self.pool)
        .await
        .map_err(|error| {
            AppError::StorageUnavailable(format!("failed to find denuncia: {error}"))
        })?;

        row.map(DenunciaRow::into_denuncia).transpose()
    }

    async fn update_denuncia_status(
        &self,
        denuncia_id: DenunciaId,
        status: DenunciaStatus,
    ) -> AppResult<bool> {
        let result = sqlx::query(
            r#"
            UPDATE denuncias
            SET status = $2
            WHERE id = $1
            "#,
        )
        .bind(denuncia_id.as_uuid())
        .bind(status.as_str())
        .execute(&self.pool)
        .await
        .map_err(|error| {
            AppError::StorageUnavailable(format!("failed to update denuncia status: {error}"))
        })?;

        Ok(result.rows_affected() > 0)
    }

    async fn delete_denuncia(&self, denuncia_id: DenunciaId) -> AppResult<bool> {
        let result = sqlx::query("DELETE FROM denuncias WHERE id = $1")
            .bind(denuncia_id.as_uuid())
            .execute(&self.pool)
            .await
            .map_err(|error| {
                AppError::StorageUnavailable(format!("failed to delete denuncia: {error}"))
            })?;

        Ok(result.rows_affected() > 0)
    }
}

#[derive(Debug, sqlx::FromRow)]
struct DenunciaRow {
    id: Uuid,
    endereco: String,
    latitude: Option<f64>,
    longitude: Option<f64>,
    tipo_vaga: String,
    tipo_infracao: String,
    descricao: String,
    midias: Vec<String>,
    data_criacao: DateTime<Utc>,
    status: String,
}

impl DenunciaRow {
    fn into_denuncia(self) -> AppResult<Denuncia> {
        let submission = DenunciaSubmission::new(DenunciaSubmissionInput {
            endereco: self.endereco,
            latitude: self.latitude,
            longitude: self.longitude,
            tipo_vaga: SpotType::from_str(self.tipo_vaga.as_str())?,
            tipo_infracao: ViolationType::from_str(self.tipo_infracao.as_str())?,
            descricao: self.descricao,
            midias: self.midias,
        })?;

        Ok(Denuncia::new(
            DenunciaId::from_uuid(self.id),
            submission,
            self.data_criacao,
            DenunciaStatus::from_str(self.status.as_str())?,
        ))
    }
}
