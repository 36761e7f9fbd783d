use async_trait::async_trait;
use chrono::{DateTime, Utc};
use tokio::sync::RwLock;

use vagasplus_application::StatusReportRepository;
use vagasplus_core::AppResult;
use vagasplus_domain::{NewStatusReport, StatusReport, StatusReportId};

/// In-memory status report repository implementation.
#[derive(Debug, Default)]
pub struct InMemoryStatusReportRepository {
    reports: RwLock<Vec<StatusReport>>,
}

impl InMemoryStatusReportRepository {
    /// Creates an empty in-memory repository.
    #[must_use]
    pub fn new() -> Self {
        Self {
            reports: RwLock::new(Vec::new()),
        }
    }
}

fn reported_by_since(
    reports: &[StatusReport],
    vaga_id: &str,
    ip_address: &str,
    since: DateTime<Utc>,
) -> bool {
    reports.iter().any(|report| {
        report.vaga_id() == vaga_id
            && report.ip_address() == ip_address
            && report.reported_at() >= since
    })
}

#[async_trait]
impl StatusReportRepository for InMemoryStatusReportRepository {
    async fn has_report_since(
        &self,
        vaga_id: &str,
        ip_address: &str,
        since: DateTime<Utc>,
    ) -> AppResult<bool> {
        let reports = self.reports.read().await;
        Ok(reported_by_since(&reports, vaga_id, ip_address, since))
    }

    async fn insert_unless_reported_since(
        &self,
        report: NewStatusReport,
        since: DateTime<Utc>,
    ) -> AppResult<Option<StatusReport>> {
        let mut reports = self.reports.write().await;
        if reported_by_since(&reports, report.vaga_id(), report.ip_address(), since) {
            return Ok(None);
        }

        let stored = report.into_report(StatusReportId::new());
        reports.push(stored.clone());
        Ok(Some(stored))
    }

    async fn find_latest_since(
        &self,
        vaga_id: &str,
        since: DateTime<Utc>,
    ) -> AppResult<Option<StatusReport>> {
        let reports = self.reports.read().await;

        Ok(reports
            .iter()
            .filter(|report| report.vaga_id() == vaga_id && report.reported_at() >= since)
            .max_by(|left, right| {
                left.reported_at()
                    .cmp(&right.reported_at())
                    .then_with(|| left.id().cmp(&right.id()))
            })
            .cloned())
    }
}
