use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use vagasplus_application::VagaRepository;
use vagasplus_core::AppResult;
use vagasplus_domain::{Vaga, VagaDefinition, VagaId};

/// In-memory parking space repository implementation.
#[derive(Debug, Default)]
pub struct InMemoryVagaRepository {
    vagas: RwLock<HashMap<VagaId, Vaga>>,
}

impl InMemoryVagaRepository {
    /// Creates an empty in-memory repository.
    #[must_use]
    pub fn new() -> Self {
        Self {
            vagas: RwLock::new(HashMap::new()),
        }
    }
}

#[async_trait]
impl VagaRepository for InMemoryVagaRepository {
    async fn list_vagas(&self) -> AppResult<Vec<Vaga>> {
        let vagas = self.vagas.read().await;

        let mut values: Vec<Vaga> = vagas.values().cloned().collect();
        values.sort_by(|left, right| {
            left.definition()
                .nome()
                .cmp(right.definition().nome())
                .then_with(|| left.id().cmp(&right.id()))
        });

        Ok(values)
    }

    async fn insert_vaga(&self, definition: VagaDefinition) -> AppResult<Vaga> {
        let vaga = definition.into_vaga(VagaId::new());
        self.vagas.write().await.insert(vaga.id(), vaga.clone());
        Ok(vaga)
    }

    async fn find_vaga(&self, vaga_id: VagaId) -> AppResult<Option<Vaga>> {
        Ok(self.vagas.read().await.get(&vaga_id).cloned())
    }

    async fn delete_vaga(&self, vaga_id: VagaId) -> AppResult<bool> {
        Ok(self.vagas.write().await.remove(&vaga_id).is_some())
    }
}

#[cfg(test)]
mod tests {
    use vagasplus_application::VagaRepository;
    use vagasplus_domain::{VagaDefinition, VagaDefinitionInput};

    use super::InMemoryVagaRepository;

    fn definition(nome: &str) -> VagaDefinition {
        VagaDefinition::new(VagaDefinitionInput {
            nome: nome.to_owned(),
            latitude: -23.5505,
            longitude: -46.6333,
            endereco: "Praça da Sé".to_owned(),
            acessivel: true,
            total_vagas: 4,
            vagas_disponiveis: 2,
            vaga_gestante: false,
            vaga_idoso: true,
            vaga_pcd: true,
        })
        .unwrap_or_else(|_| unreachable!())
    }

    #[tokio::test]
    async fn list_is_sorted_by_name() {
        let repository = InMemoryVagaRepository::new();
        for nome in ["Shopping Norte", "Hospital Central", "Mercado Municipal"] {
            assert!(repository.insert_vaga(definition(nome)).await.is_ok());
        }

        let listed = repository.list_vagas().await.unwrap_or_default();
        let names: Vec<&str> = listed.iter().map(|vaga| vaga.definition().nome()).collect();
        assert_eq!(
            names,
            vec!["Hospital Central", "Mercado Municipal", "Shopping Norte"]
        );
    }

    #[tokio::test]
    async fn delete_reports_whether_vaga_existed() {
        let repository = InMemoryVagaRepository::new();
        let Ok(vaga) = repository.insert_vaga(definition("Hospital Central")).await else {
            panic!("insert should succeed");
        };

        assert!(matches!(repository.find_vaga(vaga.id()).await, Ok(Some(_))));
        assert!(matches!(repository.delete_vaga(vaga.id()).await, Ok(true)));
        assert!(matches!(repository.delete_vaga(vaga.id()).await, Ok(false)));
        assert!(matches!(repository.find_vaga(vaga.id()).await, Ok(None)));
    }
}
