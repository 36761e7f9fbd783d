use vagasplus_core::{AppError, AppResult, NonEmptyString};

use crate::{Occupancy, VagaId};

/// Validated WGS84 position.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Coordinates {
    latitude: f64,
    longitude: f64,
}

impl Coordinates {
    /// Creates validated coordinates.
    pub fn new(latitude: f64, longitude: f64) -> AppResult<Self> {
        if !latitude.is_finite() || !(-90.0..=90.0).contains(&latitude) {
            return Err(AppError::Validation(format!(
                "latitude must be between -90 and 90, got {latitude}"
            )));
        }

        if !longitude.is_finite() || !(-180.0..=180.0).contains(&longitude) {
            return Err(AppError::Validation(format!(
                "longitude must be between -180 and 180, got {longitude}"
            )));
        }

        Ok(Self {
            latitude,
            longitude,
        })
    }

    /// Creates coordinates when both parts are present.
    ///
    /// Supplying only one of latitude and longitude is rejected.
    pub fn optional(latitude: Option<f64>, longitude: Option<f64>) -> AppResult<Option<Self>> {
        match (latitude, longitude) {
            (Some(latitude), Some(longitude)) => Self::new(latitude, longitude).map(Some),
            (None, None) => Ok(None),
            _ => Err(AppError::Validation(
                "latitude and longitude must be provided together".to_owned(),
            )),
        }
    }

    /// Returns the latitude in degrees.
    #[must_use]
    pub fn latitude(&self) -> f64 {
        self.latitude
    }

    /// Returns the longitude in degrees.
    #[must_use]
    pub fn longitude(&self) -> f64 {
        self.longitude
    }
}

/// Input payload used to define a parking space.
#[derive(Debug, Clone, PartialEq)]
pub struct VagaDefinitionInput {
    /// Display name of the place.
    pub nome: String,
    /// Latitude in degrees.
    pub latitude: f64,
    /// Longitude in degrees.
    pub longitude: f64,
    /// Street address.
    pub endereco: String,
    /// Whether the place is wheelchair accessible.
    pub acessivel: bool,
    /// Declared number of slots.
    pub total_vagas: i32,
    /// Declared number of free slots.
    pub vagas_disponiveis: i32,
    /// Has slots reserved for pregnant people.
    pub vaga_gestante: bool,
    /// Has slots reserved for elderly people.
    pub vaga_idoso: bool,
    /// Has slots reserved for people with disabilities.
    pub vaga_pcd: bool,
}

/// Validated parking space attributes, without an identifier.
#[derive(Debug, Clone, PartialEq)]
pub struct VagaDefinition {
    nome: NonEmptyString,
    coordinates: Coordinates,
    endereco: NonEmptyString,
    acessivel: bool,
    occupancy: Occupancy,
    vaga_gestante: bool,
    vaga_idoso: bool,
    vaga_pcd: bool,
}

impl VagaDefinition {
    /// Creates a validated parking space definition.
    pub fn new(input: VagaDefinitionInput) -> AppResult<Self> {
        let VagaDefinitionInput {
            nome,
            latitude,
            longitude,
            endereco,
            acessivel,
            total_vagas,
            vagas_disponiveis,
            vaga_gestante,
            vaga_idoso,
            vaga_pcd,
        } = input;

        Ok(Self {
            nome: NonEmptyString::for_field("nome", nome.trim())?,
            coordinates: Coordinates::new(latitude, longitude)?,
            endereco: NonEmptyString::for_field("endereco", endereco.trim())?,
            acessivel,
            occupancy: Occupancy::new(vagas_disponiveis, total_vagas)?,
            vaga_gestante,
            vaga_idoso,
            vaga_pcd,
        })
    }

    /// Returns the display name.
    #[must_use]
    pub fn nome(&self) -> &str {
        self.nome.as_str()
    }

    /// Returns the position.
    #[must_use]
    pub fn coordinates(&self) -> Coordinates {
        self.coordinates
    }

    /// Returns the street address.
    #[must_use]
    pub fn endereco(&self) -> &str {
        self.endereco.as_str()
    }

    /// Returns the accessibility flag.
    #[must_use]
    pub fn acessivel(&self) -> bool {
        self.acessivel
    }

    /// Returns the declared occupancy.
    #[must_use]
    pub fn occupancy(&self) -> Occupancy {
        self.occupancy
    }

    /// Returns the pregnant-reserved flag.
    #[must_use]
    pub fn vaga_gestante(&self) -> bool {
        self.vaga_gestante
    }

    /// Returns the elderly-reserved flag.
    #[must_use]
    pub fn vaga_idoso(&self) -> bool {
        self.vaga_idoso
    }

    /// Returns the disability-reserved flag.
    #[must_use]
    pub fn vaga_pcd(&self) -> bool {
        self.vaga_pcd
    }

    /// Attaches the identifier assigned by the persistence layer.
    #[must_use]
    pub fn into_vaga(self, id: VagaId) -> Vaga {
        Vaga {
            id,
            definition: self,
        }
    }
}

/// A persisted accessible parking space.
#[derive(Debug, Clone, PartialEq)]
pub struct Vaga {
    id: VagaId,
    definition: VagaDefinition,
}

impl Vaga {
    /// Returns the persisted identifier.
    #[must_use]
    pub fn id(&self) -> VagaId {
        self.id
    }

    /// Returns the validated attributes.
    #[must_use]
    pub fn definition(&self) -> &VagaDefinition {
        &self.definition
    }
}
