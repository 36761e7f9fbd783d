use axum::Json;
use axum::extract::{Path, State};
use tracing::info;
use vagasplus_domain::VagaId;

use crate::dto::{CreateVagaRequest, CreatedIdResponse, GenericMessageResponse, VagaResponse};
use crate::error::ApiResult;
use crate::state::AppState;

pub async fn list_vagas_handler(
    State(state): State<AppState>,
) -> ApiResult<Json<Vec<VagaResponse>>> {
    let vagas = state
        .vaga_service
        .list_vagas()
        .await?
        .into_iter()
        .map(VagaResponse::from)
        .collect();

    Ok(Json(vagas))
}

pub async fn create_vaga_handler(
    State(state): State<AppState>,
    Json(payload): Json<CreateVagaRequest>,
) -> ApiResult<Json<CreatedIdResponse>> {
    let vaga = state.vaga_service.create_vaga(payload.into()).await?;
    info!(vaga_id = %vaga.id(), nome = %vaga.definition().nome(), "vaga created");

    Ok(Json(CreatedIdResponse {
        id: vaga.id().to_string(),
    }))
}

pub async fn get_vaga_handler(
    State(state): State<AppState>,
    Path(vaga_id): Path<String>,
) -> ApiResult<Json<VagaResponse>> {
    let vaga_id = VagaId::parse(vaga_id.as_str())?;
    let vaga = state.vaga_service.get_vaga(vaga_id).await?;

    Ok(Json(VagaResponse::from(vaga)))
}

pub async fn delete_vaga_handler(
    State(state): State<AppState>,
    Path(vaga_id): Path<String>,
) -> ApiResult<Json<GenericMessageResponse>> {
    let vaga_id = VagaId::parse(vaga_id.as_str())?;
    state.vaga_service.delete_vaga(vaga_id).await?;
    info!(vaga_id = %vaga_id, "vaga deleted");

    Ok(Json(GenericMessageResponse {
        message: "vaga deleted".to_owned(),
    }))
}

#[cfg(test)]
mod tests {
    use axum::Json;
    use axum::extract::{Path, State};
    use axum::http::StatusCode;
    use axum::response::IntoResponse;

    use super::{create_vaga_handler, delete_vaga_handler, get_vaga_handler, list_vagas_handler};
    use crate::dto::CreateVagaRequest;
    use crate::test_support::in_memory_state;

    fn request(nome: &str, vagas_disponiveis: i32) -> CreateVagaRequest {
        CreateVagaRequest {
            nome: nome.to_owned(),
            latitude: -23.5505,
            longitude: -46.6333,
            endereco: "Praça da Sé, São Paulo".to_owned(),
            acessivel: true,
            total_vagas: 4,
            vagas_disponiveis,
            vaga_gestante: false,
            vaga_idoso: true,
            vaga_pcd: true,
        }
    }

    #[tokio::test]
    async fn created_vaga_is_listed_and_fetchable() {
        let (state, _clock) = in_memory_state();

        let created =
            create_vaga_handler(State(state.clone()), Json(request("Hospital Central", 2))).await;
        let Ok(Json(created)) = created else {
            panic!("valid vaga should be created");
        };

        let fetched = get_vaga_handler(State(state.clone()), Path(created.id.clone())).await;
        let Ok(Json(fetched)) = fetched else {
            panic!("created vaga should be fetchable");
        };
        assert_eq!(fetched.nome, "Hospital Central");
        assert!(fetched.vaga_pcd);

        let listed = list_vagas_handler(State(state)).await;
        assert!(matches!(listed, Ok(Json(vagas)) if vagas.len() == 1));
    }

    #[tokio::test]
    async fn invalid_occupancy_is_bad_request() {
        let (state, _clock) = in_memory_state();

        let response = create_vaga_handler(State(state), Json(request("Hospital Central", 9)))
            .await
            .into_response();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn malformed_and_unknown_ids_map_to_client_errors() {
        let (state, _clock) = in_memory_state();

        let malformed = get_vaga_handler(State(state.clone()), Path("not-a-uuid".to_owned()))
            .await
            .into_response();
        assert_eq!(malformed.status(), StatusCode::BAD_REQUEST);

        let unknown = delete_vaga_handler(
            State(state),
            Path("7f1d2c3b-4a5e-4f60-8a71-9b8c7d6e5f40".to_owned()),
        )
        .await
        .into_response();
        assert_eq!(unknown.status(), StatusCode::NOT_FOUND);
    }
}
