//! Keeps `orders.total_amount` equal to the sum of `quantity * unit_price`
//! over the order's current line items.
//!
//! The total is always recomputed from scratch rather than adjusted by a delta,
//! so a stale or corrupted value is repaired by the next item mutation.

use sea_orm::{ActiveModelTrait, ColumnTrait, ConnectionTrait, EntityTrait, QueryFilter, Set};

use crate::{
    entity::{
        order_items::{Column as OrderItemCol, Entity as OrderItems, Model as OrderItemModel},
        orders::{ActiveModel as OrderActive, Entity as Orders},
    },
    error::AppResult,
};

/// Sum of `quantity * unit_price`, accumulated in `f64`.
pub fn sum_line_items<'a>(items: impl IntoIterator<Item = &'a OrderItemModel>) -> f64 {
    items
        .into_iter()
        .fold(0.0, |total, item| total + f64::from(item.quantity) * item.unit_price)
}

/// Recompute and persist the total of `order_id` from its current items.
///
/// Runs on any connection, including an open transaction, so callers can make the
/// item write and the total write atomic. A missing order is not an error: the
/// computed sum is returned and nothing is written.
pub async fn recalculate_order_total<C>(conn: &C, order_id: i32) -> AppResult<f64>
where
    C: ConnectionTrait,
{
    let items = OrderItems::find()
        .filter(OrderItemCol::OrderId.eq(order_id))
        .all(conn)
        .await?;
    let total = sum_line_items(&items);

    let Some(order) = Orders::find_by_id(order_id).one(conn).await? else {
        tracing::warn!(order_id, "order not found, total not persisted");
        return Ok(total);
    };

    let mut active: OrderActive = order.into();
    active.total_amount = Set(total);
    active.update(conn).await?;

    tracing::debug!(order_id, total, items = items.len(), "order total recalculated");
    Ok(total)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(id: i32, quantity: i32, unit_price: f64) -> OrderItemModel {
        OrderItemModel {
            id,
            order_id: 1,
            product_id: 5,
            quantity,
            unit_price,
        }
    }

    #[test]
    fn empty_order_sums_to_zero() {
        let items: Vec<OrderItemModel> = Vec::new();
        assert_eq!(sum_line_items(&items), 0.0);
    }

    #[test]
    fn sums_quantity_times_unit_price() {
        let items = vec![item(1, 3, 2.5), item(2, 1, 10.0)];
        assert_eq!(sum_line_items(&items), 17.5);
    }

    #[test]
    fn removing_an_item_drops_only_its_contribution() {
        let items = vec![item(1, 3, 2.5), item(2, 1, 10.0)];
        let remaining: Vec<_> = items.into_iter().filter(|i| i.id != 1).collect();
        assert_eq!(sum_line_items(&remaining), 10.0);
    }
}
