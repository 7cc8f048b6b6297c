use sea_orm::{ActiveModelTrait, EntityTrait, ModelTrait, QueryOrder, Set, TransactionTrait};
use sea_orm::ActiveValue::NotSet;

use crate::{
    dto::order_items::{CreateOrderItemRequest, OrderItemCreated, OrderItemList, OrderItemRemoved},
    entity::{
        order_items::{ActiveModel, Column, Entity as OrderItems, Model as OrderItemModel},
        orders::Entity as Orders,
        products::Entity as Products,
    },
    error::{AppError, AppResult},
    models::OrderItem,
    response::{ApiResponse, Meta},
    services::order_total::recalculate_order_total,
    state::AppState,
};

pub async fn list_order_items(state: &AppState) -> AppResult<ApiResponse<OrderItemList>> {
    let items: Vec<OrderItem> = OrderItems::find()
        .order_by_asc(Column::Id)
        .all(&state.orm)
        .await?
        .into_iter()
        .map(order_item_from_entity)
        .collect();

    let count = items.len();
    Ok(ApiResponse::success(
        "Order items",
        OrderItemList { items, count },
        Some(Meta::total(count)),
    ))
}

/// Add a line item and recompute the owning order's total in the same transaction.
///
/// `unit_price` is taken from the request as a snapshot; the product's current
/// price is not consulted.
pub async fn create_order_item(
    state: &AppState,
    payload: CreateOrderItemRequest,
) -> AppResult<ApiResponse<OrderItemCreated>> {
    let txn = state.orm.begin().await?;

    if Orders::find_by_id(payload.order_id).one(&txn).await?.is_none() {
        return Err(AppError::not_found("Order", payload.order_id));
    }
    if Products::find_by_id(payload.product_id)
        .one(&txn)
        .await?
        .is_none()
    {
        return Err(AppError::not_found("Product", payload.product_id));
    }

    let item = ActiveModel {
        id: NotSet,
        order_id: Set(payload.order_id),
        product_id: Set(payload.product_id),
        quantity: Set(payload.quantity),
        unit_price: Set(payload.unit_price),
    }
    .insert(&txn)
    .await?;

    let order_total = recalculate_order_total(&txn, item.order_id).await?;
    txn.commit().await?;

    tracing::info!(
        item_id = item.id,
        order_id = item.order_id,
        order_total,
        "order item added"
    );
    Ok(ApiResponse::success(
        "Order item added",
        OrderItemCreated {
            item: order_item_from_entity(item),
            order_total,
        },
        Some(Meta::empty()),
    ))
}

/// Remove a line item and recompute the owning order's total in the same transaction.
pub async fn delete_order_item(
    state: &AppState,
    id: i32,
) -> AppResult<ApiResponse<OrderItemRemoved>> {
    let txn = state.orm.begin().await?;

    let item = match OrderItems::find_by_id(id).one(&txn).await? {
        Some(item) => item,
        None => return Err(AppError::not_found("Order item", id)),
    };
    let order_id = item.order_id;
    item.delete(&txn).await?;

    let order_total = recalculate_order_total(&txn, order_id).await?;
    txn.commit().await?;

    tracing::info!(item_id = id, order_id, order_total, "order item removed");
    Ok(ApiResponse::success(
        format!("Order item {id} removed from order {order_id}"),
        OrderItemRemoved {
            id,
            order_id,
            order_total,
        },
        Some(Meta::empty()),
    ))
}

pub(crate) fn order_item_from_entity(model: OrderItemModel) -> OrderItem {
    OrderItem {
        id: model.id,
        order_id: model.order_id,
        product_id: model.product_id,
        quantity: model.quantity,
        unit_price: model.unit_price,
    }
}
