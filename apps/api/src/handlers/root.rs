use axum::Json;

use crate::dto::RootResponse;

pub async fn root_handler() -> Json<RootResponse> {
    Json(RootResponse {
        mensagem: "VagasPlus accessible parking API is running".to_owned(),
    })
}
