use std::sync::Arc;

use async_trait::async_trait;

use vagasplus_core::{AppError, AppResult};
use vagasplus_domain::{Vaga, VagaDefinition, VagaDefinitionInput, VagaId};

/// Repository port for parking space persistence.
#[async_trait]
pub trait VagaRepository: Send + Sync {
    /// Lists every parking space ordered by name.
    async fn list_vagas(&self) -> AppResult<Vec<Vaga>>;

    /// Persists a parking space and returns it with its assigned identifier.
    async fn insert_vaga(&self, definition: VagaDefinition) -> AppResult<Vaga>;

    /// Finds one parking space by identifier.
    async fn find_vaga(&self, vaga_id: VagaId) -> AppResult<Option<Vaga>>;

    /// Deletes a parking space, returning whether it existed.
    async fn delete_vaga(&self, vaga_id: VagaId) -> AppResult<bool>;
}

/// Application service for the parking space catalogue.
#[derive(Clone)]
pub struct VagaService {
    repository: Arc<dyn VagaRepository>,
}

impl VagaService {
    /// Creates a service from a repository implementation.
    #[must_use]
    pub fn new(repository: Arc<dyn VagaRepository>) -> Self {
        Self { repository }
    }

    /// Lists all parking spaces.
    pub async fn list_vagas(&self) -> AppResult<Vec<Vaga>> {
        self.repository.list_vagas().await
    }

    /// Validates and stores a new parking space.
    pub async fn create_vaga(&self, input: VagaDefinitionInput) -> AppResult<Vaga> {
        let definition = VagaDefinition::new(input)?;
        self.repository.insert_vaga(definition).await
    }

    /// Returns one parking space.
    pub async fn get_vaga(&self, vaga_id: VagaId) -> AppResult<Vaga> {
        self.repository
            .find_vaga(vaga_id)
            .await?
            .ok_or_else(|| not_found(vaga_id))
    }

    /// Removes one parking space.
    ///
    /// Status reports referencing the space are left untouched.
    pub async fn delete_vaga(&self, vaga_id: VagaId) -> AppResult<()> {
        if self.repository.delete_vaga(vaga_id).await? {
            Ok(())
        } else {
            Err(not_found(vaga_id))
        }
    }
}

fn not_found(vaga_id: VagaId) -> AppError {
    AppError::NotFound(format!("vaga '{vaga_id}' does not exist"))
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeMap;
    use std::sync::{Arc, Mutex};

    use async_trait::async_trait;
    use vagasplus_core::{AppError, AppResult};
    use vagasplus_domain::{Vaga, VagaDefinition, VagaDefinitionInput, VagaId};

    use super::{VagaRepository, VagaService};

    #[derive(Default)]
    struct TestVagaRepo {
        vagas: Mutex<BTreeMap<VagaId, Vaga>>,
    }

    impl TestVagaRepo {
        fn lock(&self) -> AppResult<std::sync::MutexGuard<'_, BTreeMap<VagaId, Vaga>>> {
            self.vagas
                .lock()
                .map_err(|error| AppError::Internal(format!("failed to lock repo state: {error}")))
        }
    }

    #[async_trait]
    impl VagaRepository for TestVagaRepo {
        async fn list_vagas(&self) -> AppResult<Vec<Vaga>> {
            Ok(self.lock()?.values().cloned().collect())
        }

        async fn insert_vaga(&self, definition: VagaDefinition) -> AppResult<Vaga> {
            let vaga = definition.into_vaga(VagaId::new());
            self.lock()?.insert(vaga.id(), vaga.clone());
            Ok(vaga)
        }

        async fn find_vaga(&self, vaga_id: VagaId) -> AppResult<Option<Vaga>> {
            Ok(self.lock()?.get(&vaga_id).cloned())
        }

        async fn delete_vaga(&self, vaga_id: VagaId) -> AppResult<bool> {
            Ok(self.lock()?.remove(&vaga_id).is_some())
        }
    }

    fn input(total_vagas: i32, vagas_disponiveis: i32) -> VagaDefinitionInput {
        VagaDefinitionInput {
            nome: "Hospital das Clínicas".to_owned(),
            latitude: -23.5572,
            longitude: -46.6691,
            endereco: "Av. Dr. Enéas Carvalho de Aguiar, 255".to_owned(),
            acessivel: true,
            total_vagas,
            vagas_disponiveis,
            vaga_gestante: false,
            vaga_idoso: true,
            vaga_pcd: true,
        }
    }

    #[tokio::test]
    async fn created_vaga_can_be_fetched_and_deleted() {
        let service = VagaService::new(Arc::new(TestVagaRepo::default()));

        let Ok(created) = service.create_vaga(input(8, 2)).await else {
            panic!("valid vaga should be created");
        };

        let fetched = service.get_vaga(created.id()).await;
        assert!(matches!(fetched, Ok(ref vaga) if vaga == &created));

        assert!(service.delete_vaga(created.id()).await.is_ok());
        assert!(matches!(
            service.get_vaga(created.id()).await,
            Err(AppError::NotFound(_))
        ));
    }

    #[tokio::test]
    async fn invalid_vaga_is_not_stored() {
        let repository = Arc::new(TestVagaRepo::default());
        let service = VagaService::new(repository.clone());

        let result = service.create_vaga(input(2, 5)).await;
        assert!(matches!(result, Err(AppError::Validation(_))));
        assert!(matches!(service.list_vagas().await, Ok(vagas) if vagas.is_empty()));
    }

    #[tokio::test]
    async fn deleting_unknown_vaga_is_not_found() {
        let service = VagaService::new(Arc::new(TestVagaRepo::default()));
        let result = service.delete_vaga(VagaId::new()).await;
        assert!(matches!(result, Err(AppError::NotFound(_))));
    }
}
