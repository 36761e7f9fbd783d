mod conversions;
mod types;

pub use types::{CreateDenunciaRequest, DenunciaResponse, DenunciaStatusUpdatedResponse};
