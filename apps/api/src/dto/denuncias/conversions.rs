use vagasplus_core::AppError;
use vagasplus_domain::{Denuncia, DenunciaSubmissionInput};

use super::types::{CreateDenunciaRequest, DenunciaResponse};
use crate::dto::format_timestamp;

impl TryFrom<CreateDenunciaRequest> for DenunciaSubmissionInput {
    type Error = AppError;

    fn try_from(request: CreateDenunciaRequest) -> Result<Self, Self::Error> {
        Ok(Self {
            endereco: request.endereco,
            latitude: request.latitude,
            longitude: request.longitude,
            tipo_vaga: request.tipo_vaga.parse()?,
            tipo_infracao: request.tipo_infracao.parse()?,
            descricao: request.descricao,
            midias: request.midias,
        })
    }
}

impl From<Denuncia> for DenunciaResponse {
    fn from(denuncia: Denuncia) -> Self {
        let submission = denuncia.submission();
        let coordinates = submission.coordinates();

        Self {
            id: denuncia.id().to_string(),
            endereco: submission.endereco().to_owned(),
            latitude: coordinates.map(|value| value.latitude()),
            longitude: coordinates.map(|value| value.longitude()),
            tipo_vaga: submission.tipo_vaga().as_str().to_owned(),
            tipo_infracao: submission.tipo_infracao().as_str().to_owned(),
            descricao: submission.descricao().to_owned(),
            midias: submission.midias().to_vec(),
            data_criacao: format_timestamp(denuncia.data_criacao()),
            status: denuncia.status().as_str().to_owned(),
        }
    }
}
