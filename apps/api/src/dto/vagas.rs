use serde::{Deserialize, Serialize};
use ts_rs::TS;
use vagasplus_domain::{Vaga, VagaDefinitionInput};

/// Incoming payload for parking space registration.
#[derive(Debug, Deserialize, TS)]
#[ts(
    export,
    export_to = "../../../packages/api-types/src/generated/create-vaga-request.ts"
)]
pub struct CreateVagaRequest {
    pub nome: String,
    pub latitude: f64,
    pub longitude: f64,
    pub endereco: String,
    #[serde(default)]
    pub acessivel: bool,
    pub total_vagas: i32,
    pub vagas_disponiveis: i32,
    #[serde(default)]
    pub vaga_gestante: bool,
    #[serde(default)]
    pub vaga_idoso: bool,
    #[serde(default)]
    pub vaga_pcd: bool,
}

/// API representation of a parking space.
#[derive(Debug, Serialize, TS)]
#[ts(
    export,
    export_to = "../../../packages/api-types/src/generated/vaga-response.ts"
)]
pub struct VagaResponse {
    pub id: String,
    pub nome: String,
    pub latitude: f64,
    pub longitude: f64,
    pub endereco: String,
    pub acessivel: bool,
    pub total_vagas: i32,
    pub vagas_disponiveis: i32,
    pub vaga_gestante: bool,
    pub vaga_idoso: bool,
    pub vaga_pcd: bool,
}

impl From<CreateVagaRequest> for VagaDefinitionInput {
    fn from(request: CreateVagaRequest) -> Self {
        Self {
            nome: request.nome,
            latitude: request.latitude,
            longitude: request.longitude,
            endereco: request.endereco,
            acessivel: request.acessivel,
            total_vagas: request.total_vagas,
            vagas_disponiveis: request.vagas_disponiveis,
            vaga_gestante: request.vaga_gestante,
            vaga_idoso: request.vaga_idoso,
            vaga_pcd: request.vaga_pcd,
        }
    }
}

impl From<Vaga> for VagaResponse {
    fn from(vaga: Vaga) -> Self {
        let definition = vaga.definition();
        let coordinates = definition.coordinates();
        let occupancy = definition.occupancy();

        Self {
            id: vaga.id().to_string(),
            nome: definition.nome().to_owned(),
            latitude: coordinates.latitude(),
            longitude: coordinates.longitude(),
            endereco: definition.endereco().to_owned(),
            acessivel: definition.acessivel(),
            total_vagas: occupancy.total_vagas(),
            vagas_disponiveis: occupancy.vagas_disponiveis(),
            vaga_gestante: definition.vaga_gestante(),
            vaga_idoso: definition.vaga_idoso(),
            vaga_pcd: definition.vaga_pcd(),
        }
    }
}
