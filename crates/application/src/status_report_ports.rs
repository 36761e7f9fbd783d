use async_trait::async_trait;
use chrono::{DateTime, Utc};

use vagasplus_core::AppResult;
use vagasplus_domain::{NewStatusReport, StatusReport};

/// Repository port for occupancy status reports.
///
/// Implementations never read the clock: every cutoff is supplied by the caller.
#[async_trait]
pub trait StatusReportRepository: Send + Sync {
    /// Returns whether the `(vaga_id, ip_address)` pair has a report at or after `since`.
    async fn has_report_since(
        &self,
        vaga_id: &str,
        ip_address: &str,
        since: DateTime<Utc>,
    ) -> AppResult<bool>;

    /// Persists the report and returns it with its assigned identifier.
    ///
    /// Re-checks the same filter as [`Self::has_report_since`] for the report's
    /// own `(vaga_id, ip_address)` pair and inserts in one serialized unit.
    /// Returns `None` without writing when a competing report is found.
    async fn insert_unless_reported_since(
        &self,
        report: NewStatusReport,
        since: DateTime<Utc>,
    ) -> AppResult<Option<StatusReport>>;

    /// Returns the newest report for the space at or after `since`.
    ///
    /// Equal timestamps are ordered by descending report identifier.
    async fn find_latest_since(
        &self,
        vaga_id: &str,
        since: DateTime<Utc>,
    ) -> AppResult<Option<StatusReport>>;
}
