use axum::{
    Json, Router,
    extract::{Path, State},
    http::StatusCode,
    routing::get,
};

use crate::{
    dto::cashiers::{CashierList, CashiersByShift, CreateCashierRequest},
    error::AppResult,
    extract::ValidatedJson,
    models::Cashier,
    response::{Ack, ApiResponse},
    services::cashier_service,
    state::AppState,
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/cashiers", get(list_cashiers).post(create_cashier))
        .route("/cashiers/shift/{shift}", get(list_cashiers_by_shift))
        .route("/cashiers/{id}", get(get_cashier).delete(delete_cashier))
}

#[utoipa::path(
    get,
    path = "/cashiers",
    responses(
        (status = 200, description = "List cashiers", body = ApiResponse<CashierList>)
    ),
    tag = "Cashiers"
)]
pub async fn list_cashiers(
    State(state): State<AppState>,
) -> AppResult<Json<ApiResponse<CashierList>>> {
    let resp = cashier_service::list_cashiers(&state).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    get,
    path = "/cashiers/shift/{shift}",
    params(
        ("shift" = String, Path, description = "Shift label")
    ),
    responses(
        (status = 200, description = "Cashiers working the given shift", body = ApiResponse<CashiersByShift>)
    ),
    tag = "Cashiers"
)]
pub async fn list_cashiers_by_shift(
    State(state): State<AppState>,
    Path(shift): Path<String>,
) -> AppResult<Json<ApiResponse<CashiersByShift>>> {
    let resp = cashier_service::list_cashiers_by_shift(&state, shift).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    get,
    path = "/cashiers/{id}",
    params(
        ("id" = i32, Path, description = "Cashier ID")
    ),
    responses(
        (status = 200, description = "Get cashier", body = ApiResponse<Cashier>),
        (status = 404, description = "Cashier not found"),
    ),
    tag = "Cashiers"
)]
pub async fn get_cashier(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> AppResult<Json<ApiResponse<Cashier>>> {
    let resp = cashier_service::get_cashier(&state, id).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    post,
    path = "/cashiers",
    request_body = CreateCashierRequest,
    responses(
        (status = 201, description = "Create cashier", body = ApiResponse<Cashier>),
        (status = 400, description = "Invalid payload or username taken"),
    ),
    tag = "Cashiers"
)]
pub async fn create_cashier(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<CreateCashierRequest>,
) -> AppResult<(StatusCode, Json<ApiResponse<Cashier>>)> {
    let resp = cashier_service::create_cashier(&state, payload).await?;
    Ok((StatusCode::CREATED, Json(resp)))
}

#[utoipa::path(
    delete,
    path = "/cashiers/{id}",
    params(
        ("id" = i32, Path, description = "Cashier ID")
    ),
    responses(
        (status = 200, description = "Deleted cashier", body = ApiResponse<Ack>),
        (status = 404, description = "Cashier not found"),
    ),
    tag = "Cashiers"
)]
pub async fn delete_cashier(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> AppResult<Json<ApiResponse<Ack>>> {
    let resp = cashier_service::delete_cashier(&state, id).await?;
    Ok(Json(resp))
}
