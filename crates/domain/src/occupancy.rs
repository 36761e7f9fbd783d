use vagasplus_core::{AppError, AppResult};

/// Available versus total slots at a parking space.
///
/// Always satisfies `0 <= vagas_disponiveis <= total_vagas`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Occupancy {
    vagas_disponiveis: i32,
    total_vagas: i32,
}

impl Occupancy {
    /// Creates a validated occupancy pair.
    pub fn new(vagas_disponiveis: i32, total_vagas: i32) -> AppResult<Self> {
        if vagas_disponiveis < 0 || vagas_disponiveis > total_vagas {
            return Err(AppError::Validation(format!(
                "invalid number of available spaces: vagas_disponiveis must be between 0 and total_vagas ({total_vagas}), got {vagas_disponiveis}"
            )));
        }

        Ok(Self {
            vagas_disponiveis,
            total_vagas,
        })
    }

    /// Returns the number of free slots.
    #[must_use]
    pub fn vagas_disponiveis(&self) -> i32 {
        self.vagas_disponiveis
    }

    /// Returns the total number of slots.
    #[must_use]
    pub fn total_vagas(&self) -> i32 {
        self.total_vagas
    }
}
