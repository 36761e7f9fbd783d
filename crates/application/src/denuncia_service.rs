use std::sync::Arc;

use async_trait::async_trait;
use chrono::{DateTime, Utc};

use vagasplus_core::{AppError, AppResult};
use vagasplus_domain::{
    Denuncia, DenunciaId, DenunciaStatus, DenunciaSubmission, DenunciaSubmissionInput,
};

use crate::clock::Clock;

/// Default page size when listing complaints.
pub const DENUNCIA_LIST_DEFAULT_LIMIT: usize = 100;

/// Largest accepted page size when listing complaints.
pub const DENUNCIA_LIST_MAX_LIMIT: usize = 500;

/// Filter applied when listing complaints.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DenunciaListQuery {
    /// Only complaints in this state, when set.
    pub status: Option<DenunciaStatus>,
    /// Maximum number of complaints returned.
    pub limit: usize,
}

/// Repository port for complaint persistence.
#[async_trait]
pub trait DenunciaRepository: Send + Sync {
    /// Persists a complaint in the `pendente` state.
    async fn insert_denuncia(
        &self,
        submission: DenunciaSubmission,
        data_criacao: DateTime<Utc>,
    ) -> AppResult<Denuncia>;

    /// Lists complaints newest first.
    async fn list_denuncias(&self, query: DenunciaListQuery) -> AppResult<Vec<Denuncia>>;

    /// Finds one complaint by identifier.
    async fn find_denuncia(&self, denuncia_id: DenunciaId) -> AppResult<Option<Denuncia>>;

    /// Sets the review state, returning whether the complaint existed.
    async fn update_denuncia_status(
        &self,
        denuncia_id: DenunciaId,
        status: DenunciaStatus,
    ) -> AppResult<bool>;

    /// Deletes a complaint, returning whether it existed.
    async fn delete_denuncia(&self, denuncia_id: DenunciaId) -> AppResult<bool>;
}

/// Application service for abuse complaints.
#[derive(Clone)]
pub struct DenunciaService {
    repository: Arc<dyn DenunciaRepository>,
    clock: Arc<dyn Clock>,
}

impl DenunciaService {
    /// Creates a service from a repository implementation.
    #[must_use]
    pub fn new(repository: Arc<dyn DenunciaRepository>, clock: Arc<dyn Clock>) -> Self {
        Self { repository, clock }
    }

    /// Validates and files a new complaint.
    pub async fn create_denuncia(&self, input: DenunciaSubmissionInput) -> AppResult<Denuncia> {
        let submission = DenunciaSubmission::new(input)?;
        self.repository
            .insert_denuncia(submission, self.clock.now())
            .await
    }

    /// Lists complaints, optionally filtered by state.
    pub async fn list_denuncias(
        &self,
        status: Option<DenunciaStatus>,
        limit: Option<usize>,
    ) -> AppResult<Vec<Denuncia>> {
        let limit = limit.unwrap_or(DENUNCIA_LIST_DEFAULT_LIMIT);
        if limit == 0 || limit > DENUNCIA_LIST_MAX_LIMIT {
            return Err(AppError::Validation(format!(
                "limit must be between 1 and {DENUNCIA_LIST_MAX_LIMIT}"
            )));
        }

        self.repository
            .list_denuncias(DenunciaListQuery { status, limit })
            .await
    }

    /// Returns one complaint.
    pub async fn get_denuncia(&self, denuncia_id: DenunciaId) -> AppResult<Denuncia> {
        self.repository
            .find_denuncia(denuncia_id)
            .await?
            .ok_or_else(|| not_found(denuncia_id))
    }

    /// Moves a complaint to another review state.
    pub async fn update_status(
        &self,
        denuncia_id: DenunciaId,
        status: DenunciaStatus,
    ) -> AppResult<DenunciaStatus> {
        if self
            .repository
            .update_denuncia_status(denuncia_id, status)
            .await?
        {
            Ok(status)
        } else {
            Err(not_found(denuncia_id))
        }
    }

    /// Removes one complaint.
    pub async fn delete_denuncia(&self, denuncia_id: DenunciaId) -> AppResult<()> {
        if self.repository.delete_denuncia(denuncia_id).await? {
            Ok(())
        } else {
            Err(not_found(denuncia_id))
        }
    }
}

fn not_found(denuncia_id: DenunciaId) -> AppError {
    AppError::NotFound(format!("denuncia '{denuncia_id}' does not exist"))
}

#[cfg(test)]
mod tests {
    use std::sync::{Arc, Mutex};

    use async_trait::async_trait;
    use chrono::{DateTime, Duration, TimeZone, Utc};
    use vagasplus_core::{AppError, AppResult};
    use vagasplus_domain::{
        Denuncia, DenunciaId, DenunciaStatus, DenunciaSubmission, DenunciaSubmissionInput,
        SpotType, ViolationType,
    };

    use super::{DenunciaListQuery, DenunciaRepository, DenunciaService};
    use crate::clock::Clock;

    struct StepClock {
        now: Mutex<DateTime<Utc>>,
    }

    impl Clock for StepClock {
        fn now(&self) -> DateTime<Utc> {
            let Ok(mut now) = self.now.lock() else {
                return Utc::now();
            };
            let current = *now;
            *now += Duration::minutes(1);
            current
        }
    }

    #[derive(Default)]
    struct TestDenunciaRepo {
        denuncias: Mutex<Vec<Denuncia>>,
        last_query: Mutex<Option<DenunciaListQuery>>,
    }

    impl TestDenunciaRepo {
        fn lock(&self) -> AppResult<std::sync::MutexGuard<'_, Vec<Denuncia>>> {
            self.denuncias
                .lock()
                .map_err(|error| AppError::Internal(format!("failed to lock repo state: {error}")))
        }
    }

    #[async_trait]
    impl DenunciaRepository for TestDenunciaRepo {
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
            self.lock()?.push(denuncia.clone());
            Ok(denuncia)
        }

        async fn list_denuncias(&self, query: DenunciaListQuery) -> AppResult<Vec<Denuncia>> {
            if let Ok(mut last_query) = self.last_query.lock() {
                *last_query = Some(query);
            }

            let mut values: Vec<Denuncia> = self
                .lock()?
                .iter()
                .filter(|denuncia| query.status.is_none_or(|status| denuncia.status() == status))
                .cloned()
                .collect();
            values.sort_by(|left, right| right.data_criacao().cmp(&left.data_criacao()));
            values.truncate(query.limit);
            Ok(values)
        }

        async fn find_denuncia(&self, denuncia_id: DenunciaId) -> AppResult<Option<Denuncia>> {
            Ok(self
                .lock()?
                .iter()
                .find(|denuncia| denuncia.id() == denuncia_id)
                .cloned())
        }

        async fn update_denuncia_status(
            &self,
            denuncia_id: DenunciaId,
            status: DenunciaStatus,
        ) -> AppResult<bool> {
            let mut denuncias = self.lock()?;
            let Some(position) = denuncias
                .iter()
                .position(|denuncia| denuncia.id() == denuncia_id)
            else {
                return Ok(false);
            };

            let current = denuncias[position].clone();
            denuncias[position] = Denuncia::new(
                current.id(),
                current.submission().clone(),
                current.data_criacao(),
                status,
            );
            Ok(true)
        }

        async fn delete_denuncia(&self, denuncia_id: DenunciaId) -> AppResult<bool> {
            let mut denuncias = self.lock()?;
            let before = denuncias.len();
            denuncias.retain(|denuncia| denuncia.id() != denuncia_id);
            Ok(denuncias.len() != before)
        }
    }

    fn fixture() -> (DenunciaService, Arc<TestDenunciaRepo>) {
        let repository = Arc::new(TestDenunciaRepo::default());
        let start = Utc
            .with_ymd_and_hms(2025, 5, 10, 8, 0, 0)
            .single()
            .unwrap_or_else(Utc::now);
        let clock = Arc::new(StepClock {
            now: Mutex::new(start),
        });
        (DenunciaService::new(repository.clone(), clock), repository)
    }

    fn input(descricao: &str) -> DenunciaSubmissionInput {
        DenunciaSubmissionInput {
            endereco: "Rua Augusta, 900".to_owned(),
            latitude: None,
            longitude: None,
            tipo_vaga: SpotType::Elderly,
            tipo_infracao: ViolationType::BlockingAccess,
            descricao: descricao.to_owned(),
            midias: vec!["https://example.com/foto.jpg".to_owned()],
        }
    }

    #[tokio::test]
    async fn new_denuncia_starts_pending_with_server_timestamp() {
        let (service, _repository) = fixture();

        let Ok(created) = service.create_denuncia(input("Carro bloqueando rampa")).await else {
            panic!("valid denuncia should be created");
        };

        assert_eq!(created.status(), DenunciaStatus::Pendente);
        assert_eq!(created.submission().midias().len(), 1);
    }

    #[tokio::test]
    async fn list_filters_by_status_newest_first() {
        let (service, _repository) = fixture();
        let mut ids = Vec::new();
        for descricao in ["primeira", "segunda", "terceira"] {
            let Ok(created) = service.create_denuncia(input(descricao)).await else {
                panic!("valid denuncia should be created");
            };
            ids.push(created.id());
        }

        assert!(
            service
                .update_status(ids[1], DenunciaStatus::Resolvida)
                .await
                .is_ok()
        );

        let Ok(pending) = service
            .list_denuncias(Some(DenunciaStatus::Pendente), None)
            .await
        else {
            panic!("listing should succeed");
        };
        let descriptions: Vec<&str> = pending
            .iter()
            .map(|denuncia| denuncia.submission().descricao())
            .collect();
        assert_eq!(descriptions, vec!["terceira", "primeira"]);
    }

    #[tokio::test]
    async fn list_applies_default_limit_and_rejects_out_of_range() {
        let (service, repository) = fixture();

        assert!(service.list_denuncias(None, None).await.is_ok());
        let recorded = repository
            .last_query
            .lock()
            .ok()
            .and_then(|query| *query)
            .map(|query| query.limit);
        assert_eq!(recorded, Some(100));

        assert!(matches!(
            service.list_denuncias(None, Some(0)).await,
            Err(AppError::Validation(_))
        ));
        assert!(matches!(
            service.list_denuncias(None, Some(501)).await,
            Err(AppError::Validation(_))
        ));
    }

    #[tokio::test]
    async fn unknown_denuncia_operations_are_not_found() {
        let (service, _repository) = fixture();
        let missing = DenunciaId::new();

        assert!(matches!(
            service.get_denuncia(missing).await,
            Err(AppError::NotFound(_))
        ));
        assert!(matches!(
            service
                .update_status(missing, DenunciaStatus::Arquivada)
                .await,
            Err(AppError::NotFound(_))
        ));
        assert!(matches!(
            service.delete_denuncia(missing).await,
            Err(AppError::NotFound(_))
        ));
    }
}
