use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Incoming payload for an abuse complaint.
#[derive(Debug, Deserialize, TS)]
#[ts(
    export,
    export_to = "../../../packages/api-types/src/generated/create-denuncia-request.ts"
)]
pub struct CreateDenunciaRequest {
    pub endereco: String,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    #[ts(type = "\"pregnant\" | \"elderly\" | \"disabled\"")]
    pub tipo_vaga: String,
    #[ts(type = "\"no_credential\" | \"blocking_access\" | \"misuse\" | \"other\"")]
    pub tipo_infracao: String,
    pub descricao: String,
    #[serde(default)]
    pub midias: Vec<String>,
}

/// API representation of a complaint.
#[derive(Debug, Serialize, TS)]
#[ts(
    export,
    export_to = "../../../packages/api-types/src/generated/denuncia-response.ts"
)]
pub struct DenunciaResponse {
    pub id: String,
    pub endereco: String,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    #[ts(type = "\"pregnant\" | \"elderly\" | \"disabled\"")]
    pub tipo_vaga: String,
    #[ts(type = "\"no_credential\" | \"blocking_access\" | \"misuse\" | \"other\"")]
    pub tipo_infracao: String,
    pub descricao: String,
    pub midias: Vec<String>,
    pub data_criacao: String,
    #[ts(type = "\"pendente\" | \"em_analise\" | \"resolvida\" | \"arquivada\"")]
    pub status: String,
}

/// Acknowledgement of a complaint review state change.
#[derive(Debug, Serialize, TS)]
#[ts(
    export,
    export_to = "../../../packages/api-types/src/generated/denuncia-status-updated-response.ts"
)]
pub struct DenunciaStatusUpdatedResponse {
    pub message: String,
    #[ts(type = "\"pendente\" | \"em_analise\" | \"resolvida\" | \"arquivada\"")]
    pub status: String,
}
