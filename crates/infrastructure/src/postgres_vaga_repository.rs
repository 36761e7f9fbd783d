use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use vagasplus_application::VagaRepository;
use vagasplus_core::{AppError, AppResult};
use vagasplus_domain::{Vaga, VagaDefinition, VagaDefinitionInput, VagaId};

/// PostgreSQL-backed parking space repository.
#[derive(Clone)]
pub struct PostgresVagaRepository {
    pool: PgPool,
}

impl PostgresVagaRepository {
    /// Creates a repository with the provided connection pool.
    #[must_use]
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl VagaRepository for PostgresVagaRepository {
    async fn list_vagas(&self) -> AppResult<Vec<Vaga>> {
        let rows = sqlx::query_as::<_, VagaRow>(
            r#"
            SELECT
                id,
                nome,
                latitude,
                longitude,
                endereco,
                acessivel,
                total_vagas,
                vagas_disponiveis,
                vaga_gestante,
                vaga_idoso,
                vaga_pcd
            FROM vagas
            ORDER BY nome, id
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|error| AppError::StorageUnavailable(format!("failed to list vagas: {error}")))?;

        rows.into_iter().map(VagaRow::into_vaga).collect()
    }

    async fn insert_vaga(&self, definition: VagaDefinition) -> AppResult<Vaga> {
        let coordinates = definition.coordinates();
        let occupancy = definition.occupancy();

        let id = sqlx::query_scalar::<_, Uuid>(
            r#"
            INSERT INTO vagas (
                nome,
                latitude,
                longitude,
                endereco,
                acessivel,
                total_vagas,
                vagas_disponiveis,
                vaga_gestante,
                vaga_idoso,
                vaga_pcd
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10)
            RETURNING id
            "#,
        )
        .bind(definition.nome())
        .bind(coordinates.latitude())
        .bind(coordinates.longitude())
        .bind(definition.endereco())
        .bind(definition.acessivel())
        .bind(occupancy.total_vagas())
        .bind(occupancy.vagas_disponiveis())
        .bind(definition.vaga_gestante())
        .bind(definition.vaga_idoso())
        .bind(definition.vaga_pcd())
        .fetch_one(&self.pool)
        .await
        .map_err(|error| AppError::StorageUnavailable(format!("failed to insert vaga: {error}")))?;

        Ok(definition.into_vaga(VagaId::from_uuid(id)))
    }

    async fn find_vaga(&self, vaga_id: VagaId) -> AppResult<Option<Vaga>> {
        let row = sqlx::query_as::<_, VagaRow>(
            r#"
            SELECT
                id,
                nome,
                latitude,
                longitude,
                endereco,
                acessivel,
                total_vagas,
                vagas_disponiveis,
                vaga_gestante,
                vaga_idoso,
                vaga_pcd
            FROM vagas
            WHERE id = $1
            "#,
        )
        .bind(vaga_id.as_uuid())
        .fetch_optional(&self.pool)
        .await
        .map_err(|error| AppError::StorageUnavailable(format!("failed to find vaga: {error}")))?;

        row.map(VagaRow::into_vaga).transpose()
    }

    async fn delete_vaga(&self, vaga_id: VagaId) -> AppResult<bool> {
        let result = sqlx::query("DELETE FROM vagas WHERE id = $1")
            .bind(vaga_id.as_uuid())
            .execute(&self.pool)
            .await
            .map_err(|error| {
                AppError::StorageUnavailable(format!("failed to delete vaga: {error}"))
            })?;

        Ok(result.rows_affected() > 0)
    }
}

#[derive(Debug, sqlx::FromRow)]
struct VagaRow {
    id: Uuid,
    nome: String,
    latitude: f64,
    longitude: f64,
    endereco: String,
    acessivel: bool,
    total_vagas: i32,
    vagas_disponiveis: i32,
    vaga_gestante: bool,
    vaga_idoso: bool,
    vaga_pcd: bool,
}

impl VagaRow {
    fn into_vaga(self) -> AppResult<Vaga> {
        let definition = VagaDefinition::new(VagaDefinitionInput {
            nome: self.nome,
            latitude: self.latitude,
            longitude: self.longitude,
            endereco: self.endereco,
            acessivel: self.acessivel,
            total_vagas: self.total_vagas,
            vagas_disponiveis: self.vagas_disponiveis,
            vaga_gestante: self.vaga_gestante,
            vaga_idoso: self.vaga_idoso,
            vaga_pcd: self.vaga_pcd,
        })?;

        Ok(definition.into_vaga(VagaId::from_uuid(self.id)))
    }
}
