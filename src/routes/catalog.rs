use axum::{Json, Router, extract::State, routing::get};

use crate::{
    dto::catalog::{ReturnList, SupplierList},
    error::AppResult,
    response::ApiResponse,
    services::catalog_service,
    state::AppState,
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/suppliers", get(list_suppliers))
        .route("/returns", get(list_returns))
}

#[utoipa::path(
    get,
    path = "/suppliers",
    responses(
        (status = 200, description = "List suppliers", body = ApiResponse<SupplierList>)
    ),
    tag = "Catalog"
)]
pub async fn list_suppliers(
    State(state): State<AppState>,
) -> AppResult<Json<ApiResponse<SupplierList>>> {
    let resp = catalog_service::list_suppliers(&state).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    get,
    path = "/returns",
    responses(
        (status = 200, description = "List returns", body = ApiResponse<ReturnList>)
    ),
    tag = "Catalog"
)]
pub async fn list_returns(
    State(state): State<AppState>,
) -> AppResult<Json<ApiResponse<ReturnList>>> {
    let resp = catalog_service::list_returns(&state).await?;
    Ok(Json(resp))
}
