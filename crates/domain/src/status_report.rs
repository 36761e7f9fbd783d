//! Occupancy status reports submitted by people at a parking space.
//!
//! Reports are immutable. Whether a report is still authoritative is derived
//! from its age at query time; nothing about expiry is ever stored.

use chrono::{DateTime, Duration, Utc};
use vagasplus_core::{AppResult, NonEmptyString};

use crate::{Occupancy, StatusReportId};

/// Minutes during which one `(vaga, ip)` pair may submit at most one report.
pub const STATUS_REPORT_RATE_LIMIT_MINUTES: i64 = 15;

/// Minutes after which a report no longer describes the current occupancy.
pub const STATUS_REPORT_FRESHNESS_MINUTES: i64 = 2 * 60;

/// Returns the rate-limit window as a duration.
#[must_use]
pub fn status_report_rate_limit_window() -> Duration {
    Duration::minutes(STATUS_REPORT_RATE_LIMIT_MINUTES)
}

/// Returns the freshness window as a duration.
#[must_use]
pub fn status_report_freshness_window() -> Duration {
    Duration::minutes(STATUS_REPORT_FRESHNESS_MINUTES)
}

/// A validated report that has not been persisted yet.
#[derive(Debug, Clone, PartialEq)]
pub struct NewStatusReport {
    vaga_id: NonEmptyString,
    occupancy: Occupancy,
    reported_at: DateTime<Utc>,
    ip_address: NonEmptyString,
    observacoes: Option<String>,
}

impl NewStatusReport {
    /// Creates a validated report.
    ///
    /// `reported_at` comes from the server clock and `ip_address` from the
    /// transport connection; neither is ever taken from the request body.
    pub fn new(
        vaga_id: impl Into<String>,
        occupancy: Occupancy,
        reported_at: DateTime<Utc>,
        ip_address: impl Into<String>,
        observacoes: Option<String>,
    ) -> AppResult<Self> {
        Ok(Self {
            vaga_id: NonEmptyString::for_field("vaga_id", vaga_id)?,
            occupancy,
            reported_at,
            ip_address: NonEmptyString::for_field("ip_address", ip_address)?,
            observacoes: normalize_note(observacoes),
        })
    }

    /// Returns the reported parking space identifier.
    #[must_use]
    pub fn vaga_id(&self) -> &str {
        self.vaga_id.as_str()
    }

    /// Returns the reported occupancy.
    #[must_use]
    pub fn occupancy(&self) -> Occupancy {
        self.occupancy
    }

    /// Returns the server-assigned submission instant.
    #[must_use]
    pub fn reported_at(&self) -> DateTime<Utc> {
        self.reported_at
    }

    /// Returns the submitting client's address.
    #[must_use]
    pub fn ip_address(&self) -> &str {
        self.ip_address.as_str()
    }

    /// Returns the optional free-text note.
    #[must_use]
    pub fn observacoes(&self) -> Option<&str> {
        self.observacoes.as_deref()
    }

    /// Attaches the identifier assigned by the persistence layer.
    #[must_use]
    pub fn into_report(self, id: StatusReportId) -> StatusReport {
        StatusReport { id, data: self }
    }
}

/// A persisted occupancy report.
#[derive(Debug, Clone, PartialEq)]
pub struct StatusReport {
    id: StatusReportId,
    data: NewStatusReport,
}

impl StatusReport {
    /// Returns the persisted identifier.
    #[must_use]
    pub fn id(&self) -> StatusReportId {
        self.id
    }

    /// Returns the reported parking space identifier.
    #[must_use]
    pub fn vaga_id(&self) -> &str {
        self.data.vaga_id()
    }

    /// Returns the reported occupancy.
    #[must_use]
    pub fn occupancy(&self) -> Occupancy {
        self.data.occupancy()
    }

    /// Returns the server-assigned submission instant.
    #[must_use]
    pub fn reported_at(&self) -> DateTime<Utc> {
        self.data.reported_at()
    }

    /// Returns the submitting client's address.
    #[must_use]
    pub fn ip_address(&self) -> &str {
        self.data.ip_address()
    }

    /// Returns the optional free-text note.
    #[must_use]
    pub fn observacoes(&self) -> Option<&str> {
        self.data.observacoes()
    }

    /// Whole minutes elapsed between submission and `now`, never negative.
    #[must_use]
    pub fn minutes_ago(&self, now: DateTime<Utc>) -> i64 {
        (now - self.reported_at()).num_seconds().div_euclid(60).max(0)
    }

    /// Returns whether the report is still inside the freshness window at `now`.
    #[must_use]
    pub fn is_fresh_at(&self, now: DateTime<Utc>) -> bool {
        self.reported_at() >= now - status_report_freshness_window()
    }
}

fn normalize_note(value: Option<String>) -> Option<String> {
    value.and_then(|note| {
        let trimmed = note.trim().to_owned();
        (!trimmed.is_empty()).then_some(trimmed)
    })
}
