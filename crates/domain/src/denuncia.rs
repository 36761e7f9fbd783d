//! Abuse complaints filed against misused accessible parking spaces.

use std::fmt::{Display, Formatter};
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use vagasplus_core::{AppError, AppResult, NonEmptyString};

use crate::{Coordinates, DenunciaId};

/// Kind of reserved space the complaint is about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SpotType {
    /// Space reserved for pregnant people.
    Pregnant,
    /// Space reserved for elderly people.
    Elderly,
    /// Space reserved for people with disabilities.
    Disabled,
}

impl SpotType {
    /// Returns a stable storage value for this spot type.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pregnant => "pregnant",
            Self::Elderly => "elderly",
            Self::Disabled => "disabled",
        }
    }
}

impl FromStr for SpotType {
    type Err = AppError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "pregnant" => Ok(Self::Pregnant),
            "elderly" => Ok(Self::Elderly),
            "disabled" => Ok(Self::Disabled),
            _ => Err(AppError::Validation(format!(
                "unknown tipo_vaga '{value}', expected one of: pregnant, elderly, disabled"
            ))),
        }
    }
}

/// Kind of misuse being reported.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ViolationType {
    /// Vehicle parked without the required credential.
    NoCredential,
    /// Access ramp or aisle is blocked.
    BlockingAccess,
    /// Space used for something other than parking.
    Misuse,
    /// Anything else, described in the complaint text.
    Other,
}

impl ViolationType {
    /// Returns a stable storage value for this violation type.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::NoCredential => "no_credential",
            Self::BlockingAccess => "blocking_access",
            Self::Misuse => "misuse",
            Self::Other => "other",
        }
    }
}

impl FromStr for ViolationType {
    type Err = AppError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "no_credential" => Ok(Self::NoCredential),
            "blocking_access" => Ok(Self::BlockingAccess),
            "misuse" => Ok(Self::Misuse),
            "other" => Ok(Self::Other),
            _ => Err(AppError::Validation(format!(
                "unknown tipo_infracao '{value}', expected one of: no_credential, blocking_access, misuse, other"
            ))),
        }
    }
}

/// Review state of a complaint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DenunciaStatus {
    /// Newly filed, not yet looked at.
    Pendente,
    /// Under review.
    EmAnalise,
    /// Addressed.
    Resolvida,
    /// Closed without action.
    Arquivada,
}

impl DenunciaStatus {
    /// Returns a stable storage value for this status.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pendente => "pendente",
            Self::EmAnalise => "em_analise",
            Self::Resolvida => "resolvida",
            Self::Arquivada => "arquivada",
        }
    }

    /// Returns all known statuses.
    #[must_use]
    pub fn all() -> &'static [Self] {
        const ALL: &[DenunciaStatus] = &[
            DenunciaStatus::Pendente,
            DenunciaStatus::EmAnalise,
            DenunciaStatus::Resolvida,
            DenunciaStatus::Arquivada,
        ];

        ALL
    }
}

impl Display for DenunciaStatus {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> std::fmt::Result {
        formatter.write_str(self.as_str())
    }
}

impl FromStr for DenunciaStatus {
    type Err = AppError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Self::all()
            .iter()
            .copied()
            .find(|status| status.as_str() == value)
            .ok_or_else(|| {
                let valid = Self::all()
                    .iter()
                    .map(DenunciaStatus::as_str)
                    .collect::<Vec<_>>()
                    .join(", ");
                AppError::Validation(format!("invalid status '{value}', use one of: {valid}"))
            })
    }
}

/// Input payload used to file a complaint.
#[derive(Debug, Clone, PartialEq)]
pub struct DenunciaSubmissionInput {
    /// Street address of the misused space.
    pub endereco: String,
    /// Optional latitude in degrees.
    pub latitude: Option<f64>,
    /// Optional longitude in degrees.
    pub longitude: Option<f64>,
    /// Reserved space kind.
    pub tipo_vaga: SpotType,
    /// Reported misuse kind.
    pub tipo_infracao: ViolationType,
    /// Free-text description.
    pub descricao: String,
    /// Media attachments as URLs or data URIs.
    pub midias: Vec<String>,
}

/// Validated complaint content, without server-assigned fields.
#[derive(Debug, Clone, PartialEq)]
pub struct DenunciaSubmission {
    endereco: NonEmptyString,
    coordinates: Option<Coordinates>,
    tipo_vaga: SpotType,
    tipo_infracao: ViolationType,
    descricao: NonEmptyString,
    midias: Vec<String>,
}

impl DenunciaSubmission {
    /// Creates a validated complaint submission.
    pub fn new(input: DenunciaSubmissionInput) -> AppResult<Self> {
        let DenunciaSubmissionInput {
            endereco,
            latitude,
            longitude,
            tipo_vaga,
            tipo_infracao,
            descricao,
            midias,
        } = input;

        if midias.iter().any(|media| media.trim().is_empty()) {
            return Err(AppError::Validation(
                "midias entries must not be empty".to_owned(),
            ));
        }

        Ok(Self {
            endereco: NonEmptyString::for_field("endereco", endereco.trim())?,
            coordinates: Coordinates::optional(latitude, longitude)?,
            tipo_vaga,
            tipo_infracao,
            descricao: NonEmptyString::for_field("descricao", descricao.trim())?,
            midias,
        })
    }

    /// Returns the street address.
    #[must_use]
    pub fn endereco(&self) -> &str {
        self.endereco.as_str()
    }

    /// Returns the optional position.
    #[must_use]
    pub fn coordinates(&self) -> Option<Coordinates> {
        self.coordinates
    }

    /// Returns the reserved space kind.
    #[must_use]
    pub fn tipo_vaga(&self) -> SpotType {
        self.tipo_vaga
    }

    /// Returns the misuse kind.
    #[must_use]
    pub fn tipo_infracao(&self) -> ViolationType {
        self.tipo_infracao
    }

    /// Returns the description.
    #[must_use]
    pub fn descricao(&self) -> &str {
        self.descricao.as_str()
    }

    /// Returns the media attachments.
    #[must_use]
    pub fn midias(&self) -> &[String] {
        &self.midias
    }
}

/// A persisted complaint.
#[derive(Debug, Clone, PartialEq)]
pub struct Denuncia {
    id: DenunciaId,
    submission: DenunciaSubmission,
    data_criacao: DateTime<Utc>,
    status: DenunciaStatus,
}

impl Denuncia {
    /// Assembles a complaint from persisted parts.
    #[must_use]
    pub fn new(
        id: DenunciaId,
        submission: DenunciaSubmission,
        data_criacao: DateTime<Utc>,
        status: DenunciaStatus,
    ) -> Self {
        Self {
            id,
            submission,
            data_criacao,
            status,
        }
    }

    /// Returns the persisted identifier.
    #[must_use]
    pub fn id(&self) -> DenunciaId {
        self.id
    }

    /// Returns the complaint content.
    #[must_use]
    pub fn submission(&self) -> &DenunciaSubmission {
        &self.submission
    }

    /// Returns the creation instant.
    #[must_use]
    pub fn data_criacao(&self) -> DateTime<Utc> {
        self.data_criacao
    }

    /// Returns the review state.
    #[must_use]
    pub fn status(&self) -> DenunciaStatus {
        self.status
    }
}
