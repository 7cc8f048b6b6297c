use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::models::OrderItem;

#[derive(Debug, Clone, Deserialize, ToSchema, Validate)]
pub struct CreateOrderItemRequest {
    pub order_id: i32,
    pub product_id: i32,
    #[validate(range(min = 1))]
    pub quantity: i32,
    #[validate(range(min = 0.0))]
    pub unit_price: f64,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct OrderItemList {
    pub items: Vec<OrderItem>,
    pub count: usize,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct OrderItemCreated {
    pub item: OrderItem,
    pub order_total: f64,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct OrderItemRemoved {
    pub id: i32,
    pub order_id: i32,
    pub order_total: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(quantity: i32, unit_price: f64) -> CreateOrderItemRequest {
        CreateOrderItemRequest {
            order_id: 1,
            product_id: 5,
            quantity,
            unit_price,
        }
    }

    #[test]
    fn positive_quantity_and_price_pass() {
        assert!(request(3, 2.5).validate().is_ok());
        assert!(request(1, 0.0).validate().is_ok());
    }

    #[test]
    fn zero_quantity_or_negative_price_fail() {
        assert!(request(0, 2.5).validate().is_err());
        assert!(request(2, -1.0).validate().is_err());
    }
}
