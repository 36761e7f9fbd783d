use std::collections::HashMap;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use tokio::sync::RwLock;

use vagasplus_application::{DenunciaListQuery, DenunciaRepository};
use vagasplus_core::AppResult;
use vagasplus_domain::{Denuncia, DenunciaId, DenunciaStatus, DenunciaSubmission};

/// In-memory complaint repository implementation.
#[derive(Debug, Default)]
pub struct InMemoryDenunciaRepository {
    denuncias: RwLock<HashMap<DenunciaId, Denuncia>>,
}

impl InMemoryDenunciaRepository {
    /// Creates an empty in-memory repository.
    #[must_use]
    pub fn new() -> Self {
        Self {
            denuncias: RwLock::new(HashMap::new()),
        }
    }
}

#[async_trait]
impl DenunciaRepository for InMemoryDenunciaRepository {
    async fn insert_denuncia(
        &self,
        submission: DenunciaSubmission,
        data_criacao: DateTime<Utc>,
    ) -> AppResult<Denuncia> {
        let denuncia = Denuncia::new(
            DenunciaId::new(),
            submission,
            data_criacao,
            DenunciaStatus::Pendente,
        );
        self.denuncias
            .write()
            .await
            .insert(denuncia.id(), denuncia.clone());
        Ok(denuncia)
    }

    async fn list_denuncias(&self, query: DenunciaListQuery) -> AppResult<Vec<Denuncia>> {
        let denuncias = self.denuncias.read().await;

        let mut values: Vec<Denuncia> = denuncias
            .values()
            .filter(|denuncia| query.status.is_none_or(|status| denuncia.status() == status))
            .cloned()
            .collect();
        values.sort_by(|left, right| {
            right
                .data_criacao()
                .cmp(&left.data_criacao())
                .then_with(|| right.id().cmp(&left.id()))
        });
        values.truncate(query.limit);

        Ok(values)
    }

    async fn find_denuncia(&self, denuncia_id: DenunciaId) -> AppResult<Option<Denuncia>> {
        Ok(self.denuncias.read().await.get(&denuncia_id).cloned())
    }

    async fn update_denuncia_status(
        &self,
        denuncia_id: DenunciaId,
        status: DenunciaStatus,
    ) -> AppResult<bool> {
        let mut denuncias = self.denuncias.write().await;
        let Some(current) = denuncias.get(&denuncia_id) else {
            return Ok(false);
        };

        let updated = Denuncia::new(
            current.id(),
            current.submission().clone(),
            current.data_criacao(),
            status,
        );
        denuncias.insert(denuncia_id, updated);
        Ok(true)
    }

    async fn delete_denuncia(&self, denuncia_id: DenunciaId) -> AppResult<bool> {
        Ok(self.denuncias.write().await.remove(&denuncia_id).is_some())
    }
}
