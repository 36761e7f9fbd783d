//! Occupancy status reports: anti-spam submission and freshness lookup.
//!
//! A `(vaga, ip)` pair may submit one report per rate-limit window. The window
//! slides: it is evaluated against stored timestamps on every call, with no
//! counters and no background expiry. The current occupancy of a space is the
//! newest report still inside the freshness window.

use std::sync::Arc;

use vagasplus_core::{AppError, AppResult};
use vagasplus_domain::{
    NewStatusReport, Occupancy, STATUS_REPORT_RATE_LIMIT_MINUTES, StatusReport,
    status_report_freshness_window, status_report_rate_limit_window,
};

use crate::clock::Clock;
use crate::status_report_ports::StatusReportRepository;

/// Input for a status report submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmitStatusReportInput {
    /// Reported parking space identifier.
    pub vaga_id: String,
    /// Client address taken from the transport connection.
    pub ip_address: String,
    /// Free slots observed by the reporter.
    pub vagas_disponiveis: i32,
    /// Total slots observed by the reporter.
    pub total_vagas: i32,
    /// Optional note.
    pub observacoes: Option<String>,
}

/// The current known occupancy of a space.
#[derive(Debug, Clone, PartialEq)]
pub struct LatestStatusReport {
    /// Newest fresh report.
    pub report: StatusReport,
    /// Whole minutes since the report was submitted, computed at query time.
    pub minutes_ago: i64,
}

/// Application service for status report submission and lookup.
#[derive(Clone)]
pub struct StatusReportService {
    repository: Arc<dyn StatusReportRepository>,
    clock: Arc<dyn Clock>,
}

impl StatusReportService {
    /// Creates a new status report service.
    #[must_use]
    pub fn new(repository: Arc<dyn StatusReportRepository>, clock: Arc<dyn Clock>) -> Self {
        Self { repository, clock }
    }

    /// Accepts a status report unless the pair is rate limited or the numbers are inconsistent.
    ///
    /// The rate-limit check runs before validation, so a too-soon resubmission
    /// is reported as rate limited even when its numbers are also invalid.
    pub async fn submit(&self, input: SubmitStatusReportInput) -> AppResult<StatusReport> {
        let SubmitStatusReportInput {
            vaga_id,
            ip_address,
            vagas_disponiveis,
            total_vagas,
            observacoes,
        } = input;

        let now = self.clock.now();
        let cutoff = now - status_report_rate_limit_window();

        if self
            .repository
            .has_report_since(vaga_id.as_str(), ip_address.as_str(), cutoff)
            .await?
        {
            return Err(rate_limited());
        }

        let occupancy = Occupancy::new(vagas_disponiveis, total_vagas)?;
        let report = NewStatusReport::new(vaga_id, occupancy, now, ip_address, observacoes)?;

        self.repository
            .insert_unless_reported_since(report, cutoff)
            .await?
            .ok_or_else(rate_limited)
    }

    /// Returns the newest report for the space inside the freshness window.
    ///
    /// `None` means the occupancy is unknown, not that the space was never reported.
    pub async fn latest_valid(&self, vaga_id: &str) -> AppResult<Option<LatestStatusReport>> {
        let now = self.clock.now();
        let cutoff = now - status_report_freshness_window();

        let latest = self.repository.find_latest_since(vaga_id, cutoff).await?;

        Ok(latest.map(|report| LatestStatusReport {
            minutes_ago: report.minutes_ago(now),
            report,
        }))
    }
}

fn rate_limited() -> AppError {
    AppError::RateLimited {
        message: format!(
            "this space was already reported from your address recently, try again in {STATUS_REPORT_RATE_LIMIT_MINUTES} minutes"
        ),
        retry_after_seconds: rate_limit_window_seconds(),
    }
}

fn rate_limit_window_seconds() -> u64 {
    u64::try_from(status_report_rate_limit_window().num_seconds()).unwrap_or_default()
}
