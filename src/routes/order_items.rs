use axum::{
    Json, Router,
    extract::{Path, State},
    http::StatusCode,
    routing::{delete, get},
};

use crate::{
    dto::order_items::{CreateOrderItemRequest, OrderItemCreated, OrderItemList, OrderItemRemoved},
    error::AppResult,
    extract::ValidatedJson,
    response::ApiResponse,
    services::order_item_service,
    state::AppState,
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/order-items", get(list_order_items).post(create_order_item))
        .route("/order-items/{id}", delete(delete_order_item))
}

#[utoipa::path(
    get,
    path = "/order-items",
    responses(
        (status = 200, description = "List all order items", body = ApiResponse<OrderItemList>)
    ),
    tag = "Order items"
)]
pub async fn list_order_items(
    State(state): State<AppState>,
) -> AppResult<Json<ApiResponse<OrderItemList>>> {
    let resp = order_item_service::list_order_items(&state).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    post,
    path = "/order-items",
    request_body = CreateOrderItemRequest,
    responses(
        (status = 201, description = "Item added; order total recalculated", body = ApiResponse<OrderItemCreated>),
        (status = 400, description = "Invalid payload"),
        (status = 404, description = "Order or product not found"),
    ),
    tag = "Order items"
)]
pub async fn create_order_item(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<CreateOrderItemRequest>,
) -> AppResult<(StatusCode, Json<ApiResponse<OrderItemCreated>>)> {
    let resp = order_item_service::create_order_item(&state, payload).await?;
    Ok((StatusCode::CREATED, Json(resp)))
}

#[utoipa::path(
    delete,
    path = "/order-items/{id}",
    params(
        ("id" = i32, Path, description = "Order item ID")
    ),
    responses(
        (status = 200, description = "Item removed; order total recalculated", body = ApiResponse<OrderItemRemoved>),
        (status = 404, description = "Order item not found"),
    ),
    tag = "Order items"
)]
pub async fn delete_order_item(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> AppResult<Json<ApiResponse<OrderItemRemoved>>> {
    let resp = order_item_service::delete_order_item(&state, id).await?;
    Ok(Json(resp))
}
