use axum::Json;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use serde::Deserialize;
use tracing::info;
use vagasplus_domain::{DenunciaId, DenunciaStatus};

use crate::dto::{
    CreateDenunciaRequest, DenunciaResponse, DenunciaStatusUpdatedResponse,
    GenericMessageResponse,
};
use crate::error::ApiResult;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct DenunciaListQueryRequest {
    pub status: Option<String>,
    pub limit: Option<usize>,
}

#[derive(Debug, Deserialize)]
pub struct DenunciaStatusQueryRequest {
    pub status: String,
}

pub async fn create_denuncia_handler(
    State(state): State<AppState>,
    Json(payload): Json<CreateDenunciaRequest>,
) -> ApiResult<(StatusCode, Json<DenunciaResponse>)> {
    let denuncia = state
        .denuncia_service
        .create_denuncia(payload.try_into()?)
        .await?;
    info!(
        denuncia_id = %denuncia.id(),
        tipo_infracao = denuncia.submission().tipo_infracao().as_str(),
        "denuncia filed"
    );

    Ok((StatusCode::CREATED, Json(DenunciaResponse::from(denuncia))))
}

pub async fn list_denuncias_handler(
    State(state): State<AppState>,
    Query(query): Query<DenunciaListQueryRequest>,
) -> ApiResult<Json<Vec<DenunciaResponse>>> {
    let status = query
        .status
        .as_deref()
        .map(str::parse::<DenunciaStatus>)
        .transpose()?;

    let denuncias = state
        .denuncia_service
        .list_denuncias(status, query.limit)
        .await?
        .into_iter()
        .map(DenunciaResponse::from)
        .collect();

    Ok(Json(denuncias))
}

pub async fn get_denuncia_handler(
    State(state): State<AppState>,
    Path(denuncia_id): Path<String>,
) -> ApiResult<Json<DenunciaResponse>> {
    let denuncia_id = DenunciaId::parse(denuncia_id.as_str())?;
    let denuncia = state.denuncia_service.get_denuncia(denuncia_id).await?;

    Ok(Json(DenunciaResponse::from(denuncia)))
}

pub async fn update_denuncia_status_handler(
    State(state): State<AppState>,
    Path(denuncia_id): Path<String>,
    Query(query): Query<DenunciaStatusQueryRequest>,
) -> ApiResult<Json<DenunciaStatusUpdatedResponse>> {
    let denuncia_id = DenunciaId::parse(denuncia_id.as_str())?;
    let status = query.status.parse::<DenunciaStatus>()?;

    let status = state
        .denuncia_service
        .update_status(denuncia_id, status)
        .await?;
    info!(denuncia_id = %denuncia_id, status = %status, "denuncia status updated");

    Ok(Json(DenunciaStatusUpdatedResponse {
        message: "denuncia status updated".to_owned(),
        status: status.as_str().to_owned(),
    }))
}

pub async fn delete_denuncia_handler(
    State(state): State<AppState>,
    Path(denuncia_id): Path<String>,
) -> ApiResult<Json<GenericMessageResponse>> {
    let denuncia_id = DenunciaId::parse(denuncia_id.as_str())?;
    state.denuncia_service.delete_denuncia(denuncia_id).await?;
    info!(denuncia_id = %denuncia_id, "denuncia deleted");

    Ok(Json(GenericMessageResponse {
        message: "denuncia deleted".to_owned(),
    }))
}

#[cfg(test)]
mod tests {
    use axum::Json;
    use axum::extract::{Path, Query, State};
    use axum::http::StatusCode;
    use axum::response::IntoResponse;

    use super::{
        DenunciaListQueryRequest, DenunciaStatusQueryRequest, create_denuncia_handler,
        delete_denuncia_handler, get_denuncia_handler, list_denuncias_handler,
        update_denuncia_status_handler,
    };
    use crate::dto::CreateDenunciaRequest;
    use crate::test_support::in_memory_state;

    fn request(tipo_vaga: &str) -> CreateDenunciaRequest {
        CreateDenunciaRequest {
            endereco: "Av. Paulista, 1578".to_owned(),
            latitude: Some(-23.5614),
            longitude: Some(-46.6559),
            tipo_vaga: tipo_vaga.to_owned(),
            tipo_infracao: "no_credential".to_owned(),
            descricao: "Carro sem credencial na vaga PcD".to_owned(),
            midias: vec!["https://example.com/foto.jpg".to_owned()],
        }
    }

    #[tokio::test]
    async fn filed_denuncia_is_created_pending() {
        let (state, _clock) = in_memory_state();

        let created = create_denuncia_handler(State(state.clone()), Json(request("disabled"))).await;
        let Ok((status, Json(created))) = created else {
            panic!("valid denuncia should be created");
        };
        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(created.status, "pendente");
        assert_eq!(created.tipo_vaga, "disabled");

        let fetched = get_denuncia_handler(State(state), Path(created.id.clone())).await;
        assert!(matches!(fetched, Ok(Json(fetched)) if fetched.id == created.id));
    }

    #[tokio::test]
    async fn unknown_spot_type_is_bad_request() {
        let (state, _clock) = in_memory_state();

        let response = create_denuncia_handler(State(state), Json(request("motorcycle")))
            .await
            .into_response();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn status_update_is_reflected_in_filtered_listing() {
        let (state, _clock) = in_memory_state();
        let Ok((_, Json(created))) =
            create_denuncia_handler(State(state.clone()), Json(request("elderly"))).await
        else {
            panic!("valid denuncia should be created");
        };

        let updated = update_denuncia_status_handler(
            State(state.clone()),
            Path(created.id.clone()),
            Query(DenunciaStatusQueryRequest {
                status: "em_analise".to_owned(),
            }),
        )
        .await;
        assert!(matches!(updated, Ok(Json(body)) if body.status == "em_analise"));

        let pending = list_denuncias_handler(
            State(state.clone()),
            Query(DenunciaListQueryRequest {
                status: Some("pendente".to_owned()),
                limit: None,
            }),
        )
        .await;
        assert!(matches!(pending, Ok(Json(values)) if values.is_empty()));

        let in_review = list_denuncias_handler(
            State(state),
            Query(DenunciaListQueryRequest {
                status: Some("em_analise".to_owned()),
                limit: Some(10),
            }),
        )
        .await;
        assert!(matches!(in_review, Ok(Json(values)) if values.len() == 1));
    }

    #[tokio::test]
    async fn invalid_status_and_limit_are_bad_requests() {
        let (state, _clock) = in_memory_state();
        let Ok((_, Json(created))) =
            create_denuncia_handler(State(state.clone()), Json(request("pregnant"))).await
        else {
            panic!("valid denuncia should be created");
        };

        let invalid_status = update_denuncia_status_handler(
            State(state.clone()),
            Path(created.id),
            Query(DenunciaStatusQueryRequest {
                status: "closed".to_owned(),
            }),
        )
        .await
        .into_response();
        assert_eq!(invalid_status.status(), StatusCode::BAD_REQUEST);

        let invalid_limit = list_denuncias_handler(
            State(state),
            Query(DenunciaListQueryRequest {
                status: None,
                limit: Some(0),
            }),
        )
        .await
        .into_response();
        assert_eq!(invalid_limit.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn deleting_twice_is_not_found() {
        let (state, _clock) = in_memory_state();
        let Ok((_, Json(created))) =
            create_denuncia_handler(State(state.clone()), Json(request("disabled"))).await
        else {
            panic!("valid denuncia should be created");
        };

        let first = delete_denuncia_handler(State(state.clone()), Path(created.id.clone()))
            .await
            .into_response();
        assert_eq!(first.status(), StatusCode::OK);

        let second = delete_denuncia_handler(State(state), Path(created.id))
            .await
            .into_response();
        assert_eq!(second.status(), StatusCode::NOT_FOUND);
    }
}
