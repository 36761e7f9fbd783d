use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};
use uuid::Uuid;
use vagasplus_core::{AppError, AppResult};

macro_rules! uuid_identifier {
    ($(#[$meta:meta])* $name:ident, $label:literal) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        pub struct $name(Uuid);

        impl $name {
            /// Creates a random identifier.
            #[must_use]
            pub fn new() -> Self {
                Self(Uuid::new_v4())
            }

            /// Creates an identifier from an existing UUID value.
            #[must_use]
            pub fn from_uuid(value: Uuid) -> Self {
                Self(value)
            }

            /// Parses a transport value into an identifier.
            pub fn parse(value: &str) -> AppResult<Self> {
                Uuid::parse_str(value.trim())
                    .map(Self)
                    .map_err(|_| AppError::Validation(format!("invalid {} id '{value}'", $label)))
            }

            /// Returns the underlying UUID value.
            #[must_use]
            pub fn as_uuid(&self) -> Uuid {
                self.0
            }
        }

        impl Default for $name {
            fn default() -> Self {
                Self::new()
            }
        }

        impl Display for $name {
            fn fmt(&self, formatter: &mut Formatter<'_>) -> std::fmt::Result {
                write!(formatter, "{}", self.0)
            }
        }
    };
}

uuid_identifier!(
    /// Unique identifier for a parking space record.
    VagaId,
    "vaga"
);

uuid_identifier!(
    /// Unique identifier for an occupancy status report.
    StatusReportId,
    "status report"
);

uuid_identifier!(
    /// Unique identifier for an abuse complaint.
    DenunciaId,
    "denuncia"
);
