use axum::{
    Json, Router,
    extract::{Path, Query, State, rejection::QueryRejection},
    http::StatusCode,
    routing::{get, put},
};
use validator::Validate;

use crate::{
    dto::orders::{
        CreateOrderRequest, OrderItemsByOrder, OrderList, OrdersByStatus, UpdateOrderStatusQuery,
    },
    error::{AppError, AppResult},
    extract::ValidatedJson,
    models::Order,
    response::{Ack, ApiResponse},
    services::order_service,
    state::AppState,
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/orders", get(list_orders).post(create_order))
        .route("/orders/status/{status}", get(list_orders_by_status))
        .route("/orders/{id}", get(get_order).delete(delete_order))
        .route("/orders/{id}/items", get(list_order_items))
        .route("/orders/{id}/status", put(update_order_status))
        .route("/orders/{id}/cancel", put(cancel_order))
        .route("/orders/{id}/complete", put(complete_order))
}

#[utoipa::path(
    get,
    path = "/orders",
    responses(
        (status = 200, description = "List orders", body = ApiResponse<OrderList>)
    ),
    tag = "Orders"
)]
pub async fn list_orders(State(state): State<AppState>) -> AppResult<Json<ApiResponse<OrderList>>> {
    let resp = order_service::list_orders(&state).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    get,
    path = "/orders/status/{status}",
    params(
        ("status" = String, Path, description = "Order status label, e.g. new, completed, cancelled")
    ),
    responses(
        (status = 200, description = "Orders with the given status", body = ApiResponse<OrdersByStatus>)
    ),
    tag = "Orders"
)]
pub async fn list_orders_by_status(
    State(state): State<AppState>,
    Path(status): Path<String>,
) -> AppResult<Json<ApiResponse<OrdersByStatus>>> {
    let resp = order_service::list_orders_by_status(&state, status).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    get,
    path = "/orders/{id}",
    params(
        ("id" = i32, Path, description = "Order ID")
    ),
    responses(
        (status = 200, description = "Get order", body = ApiResponse<Order>),
        (status = 404, description = "Order not found"),
    ),
    tag = "Orders"
)]
pub async fn get_order(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> AppResult<Json<ApiResponse<Order>>> {
    let resp = order_service::get_order(&state, id).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    get,
    path = "/orders/{id}/items",
    params(
        ("id" = i32, Path, description = "Order ID")
    ),
    responses(
        (status = 200, description = "Line items of the order; empty for an unknown order", body = ApiResponse<OrderItemsByOrder>)
    ),
    tag = "Orders"
)]
pub async fn list_order_items(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> AppResult<Json<ApiResponse<OrderItemsByOrder>>> {
    let resp = order_service::list_order_items_by_order(&state, id).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    post,
    path = "/orders",
    request_body = CreateOrderRequest,
    responses(
        (status = 201, description = "Create order with a zero total", body = ApiResponse<Order>),
        (status = 400, description = "Invalid payload"),
        (status = 404, description = "Customer or cashier not found"),
    ),
    tag = "Orders"
)]
pub async fn create_order(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<CreateOrderRequest>,
) -> AppResult<(StatusCode, Json<ApiResponse<Order>>)> {
    let resp = order_service::create_order(&state, payload).await?;
    Ok((StatusCode::CREATED, Json(resp)))
}

#[utoipa::path(
    put,
    path = "/orders/{id}/status",
    params(
        ("id" = i32, Path, description = "Order ID"),
        UpdateOrderStatusQuery
    ),
    responses(
        (status = 200, description = "Update order status", body = ApiResponse<Order>),
        (status = 400, description = "Missing or blank status"),
        (status = 404, description = "Order not found"),
    ),
    tag = "Orders"
)]
pub async fn update_order_status(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    query: Result<Query<UpdateOrderStatusQuery>, QueryRejection>,
) -> AppResult<Json<ApiResponse<Order>>> {
    let Query(query) = query.map_err(|rejection| AppError::BadRequest(rejection.body_text()))?;
    query
        .validate()
        .map_err(|errors| AppError::BadRequest(errors.to_string()))?;
    let resp = order_service::update_order_status(&state, id, query.new_status).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    put,
    path = "/orders/{id}/cancel",
    params(
        ("id" = i32, Path, description = "Order ID")
    ),
    responses(
        (status = 200, description = "Order cancelled", body = ApiResponse<Order>),
        (status = 404, description = "Order not found"),
    ),
    tag = "Orders"
)]
pub async fn cancel_order(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> AppResult<Json<ApiResponse<Order>>> {
    let resp = order_service::cancel_order(&state, id).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    put,
    path = "/orders/{id}/complete",
    params(
        ("id" = i32, Path, description = "Order ID")
    ),
    responses(
        (status = 200, description = "Order completed", body = ApiResponse<Order>),
        (status = 404, description = "Order not found"),
    ),
    tag = "Orders"
)]
pub async fn complete_order(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> AppResult<Json<ApiResponse<Order>>> {
    let resp = order_service::complete_order(&state, id).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    delete,
    path = "/orders/{id}",
    params(
        ("id" = i32, Path, description = "Order ID")
    ),
    responses(
        (status = 200, description = "Deleted order and its items", body = ApiResponse<Ack>),
        (status = 404, description = "Order not found"),
    ),
    tag = "Orders"
)]
pub async fn delete_order(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> AppResult<Json<ApiResponse<Ack>>> {
    let resp = order_service::delete_order(&state, id).await?;
    Ok(Json(resp))
}
