use sea_orm::{
    ActiveModelTrait, ColumnTrait, EntityTrait, QueryFilter, QueryOrder, Set, TransactionTrait,
};
use sea_orm::ActiveValue::NotSet;

use crate::{
    dto::orders::{CreateOrderRequest, OrderItemsByOrder, OrderList, OrdersByStatus},
    entity::{
        cashiers::Entity as Cashiers,
        customers::Entity as Customers,
        order_items::{Column as OrderItemCol, Entity as OrderItems},
        orders::{ActiveModel as OrderActive, Column as OrderCol, Entity as Orders, Model as OrderModel},
    },
    error::{AppError, AppResult},
    models::{Order, OrderStatus},
    response::{Ack, ApiResponse, Meta},
    services::order_item_service::order_item_from_entity,
    state::AppState,
};

pub async fn list_orders(state: &AppState) -> AppResult<ApiResponse<OrderList>> {
    let items: Vec<Order> = Orders::find()
        .order_by_asc(OrderCol::Id)
        .all(&state.orm)
        .await?
        .into_iter()
        .map(order_from_entity)
        .collect();

    let count = items.len();
    Ok(ApiResponse::success(
        "Orders",
        OrderList { items, count },
        Some(Meta::total(count)),
    ))
}

pub async fn list_orders_by_status(
    state: &AppState,
    status: String,
) -> AppResult<ApiResponse<OrdersByStatus>> {
    let items: Vec<Order> = Orders::find()
        .filter(OrderCol::Status.eq(status.clone()))
        .order_by_asc(OrderCol::Id)
        .all(&state.orm)
        .await?
        .into_iter()
        .map(order_from_entity)
        .collect();

    let count = items.len();
    Ok(ApiResponse::success(
        "Orders by status",
        OrdersByStatus {
            status,
            items,
            count,
        },
        Some(Meta::total(count)),
    ))
}

pub async fn get_order(state: &AppState, id: i32) -> AppResult<ApiResponse<Order>> {
    let order = find_order(state, id).await?;
    Ok(ApiResponse::success("Order", order_from_entity(order), None))
}

pub async fn list_order_items_by_order(
    state: &AppState,
    order_id: i32,
) -> AppResult<ApiResponse<OrderItemsByOrder>> {
    let items: Vec<_> = OrderItems::find()
        .filter(OrderItemCol::OrderId.eq(order_id))
        .order_by_asc(OrderItemCol::Id)
        .all(&state.orm)
        .await?
        .into_iter()
        .map(order_item_from_entity)
        .collect();

    let count = items.len();
    Ok(ApiResponse::success(
        "Order items",
        OrderItemsByOrder {
            order_id,
            items,
            count,
        },
        Some(Meta::total(count)),
    ))
}

/// Open a new order. The total always starts at zero; it only changes when items
/// are added or removed.
pub async fn create_order(
    state: &AppState,
    payload: CreateOrderRequest,
) -> AppResult<ApiResponse<Order>> {
    if Customers::find_by_id(payload.customer_id)
        .one(&state.orm)
        .await?
        .is_none()
    {
        return Err(AppError::not_found("Customer", payload.customer_id));
    }
    if Cashiers::find_by_id(payload.cashier_id)
        .one(&state.orm)
        .await?
        .is_none()
    {
        return Err(AppError::not_found("Cashier", payload.cashier_id));
    }

    let order = OrderActive {
        id: NotSet,
        customer_id: Set(payload.customer_id),
        cashier_id: Set(payload.cashier_id),
        total_amount: Set(0.0),
        status: Set(payload.status),
    }
    .insert(&state.orm)
    .await?;

    tracing::info!(
        order_id = order.id,
        customer_id = order.customer_id,
        cashier_id = order.cashier_id,
        "order created"
    );
    Ok(ApiResponse::success(
        "Order created",
        order_from_entity(order),
        Some(Meta::empty()),
    ))
}

/// Overwrite the status label. Any label is accepted and no transition is refused,
/// so a cancelled order can still be completed afterwards.
pub async fn update_order_status(
    state: &AppState,
    id: i32,
    status: String,
) -> AppResult<ApiResponse<Order>> {
    let existing = find_order(state, id).await?;
    let previous = existing.status.clone();

    let mut active: OrderActive = existing.into();
    active.status = Set(status);
    let order = active.update(&state.orm).await?;

    tracing::info!(order_id = id, from = %previous, to = %order.status, "order status changed");
    Ok(ApiResponse::success(
        format!("Order {id} status changed to '{}'", order.status),
        order_from_entity(order),
        Some(Meta::empty()),
    ))
}

pub async fn cancel_order(state: &AppState, id: i32) -> AppResult<ApiResponse<Order>> {
    let mut resp =
        update_order_status(state, id, OrderStatus::Cancelled.as_str().to_string()).await?;
    resp.message = format!("Order {id} cancelled");
    Ok(resp)
}

pub async fn complete_order(state: &AppState, id: i32) -> AppResult<ApiResponse<Order>> {
    let mut resp =
        update_order_status(state, id, OrderStatus::Completed.as_str().to_string()).await?;
    resp.message = format!("Order {id} completed");
    Ok(resp)
}

/// Delete an order together with its line items in one transaction.
pub async fn delete_order(state: &AppState, id: i32) -> AppResult<ApiResponse<Ack>> {
    let txn = state.orm.begin().await?;

    let items = OrderItems::delete_many()
        .filter(OrderItemCol::OrderId.eq(id))
        .exec(&txn)
        .await?;
    let result = Orders::delete_by_id(id).exec(&txn).await?;

    if result.rows_affected == 0 {
        return Err(AppError::not_found("Order", id));
    }

    txn.commit().await?;

    tracing::info!(order_id = id, items = items.rows_affected, "order deleted");
    Ok(ApiResponse::success(
        format!("Order {id} deleted"),
        Ack { id },
        Some(Meta::empty()),
    ))
}

async fn find_order(state: &AppState, id: i32) -> AppResult<OrderModel> {
    match Orders::find_by_id(id).one(&state.orm).await? {
        Some(o) => Ok(o),
        None => Err(AppError::not_found("Order", id)),
    }
}

pub(crate) fn order_from_entity(model: OrderModel) -> Order {
    Order {
        id: model.id,
        customer_id: model.customer_id,
        cashier_id: model.cashier_id,
        total_amount: model.total_amount,
        status: model.status,
    }
}
