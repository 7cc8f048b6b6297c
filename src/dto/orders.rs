use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

use crate::models::{Order, OrderItem, OrderStatus};

/// New order payload. There is deliberately no `total_amount` field: any value a
/// client sends is ignored and the order starts at zero.
#[derive(Debug, Deserialize, ToSchema, Validate)]
pub struct CreateOrderRequest {
    pub customer_id: i32,
    pub cashier_id: i32,
    #[serde(default = "default_status")]
    #[validate(length(min = 1, max = 50))]
    pub status: String,
}

fn default_status() -> String {
    OrderStatus::New.as_str().to_string()
}

#[derive(Debug, Deserialize, ToSchema, IntoParams, Validate)]
#[into_params(parameter_in = Query)]
pub struct UpdateOrderStatusQuery {
    #[validate(length(min = 1, max = 50))]
    pub new_status: String,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct OrderList {
    pub items: Vec<Order>,
    pub count: usize,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct OrdersByStatus {
    pub status: String,
    pub items: Vec<Order>,
    pub count: usize,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct OrderItemsByOrder {
    pub order_id: i32,
    pub items: Vec<OrderItem>,
    pub count: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_defaults_to_new_and_total_is_ignored() {
        let payload: CreateOrderRequest = serde_json::from_value(serde_json::json!({
            "customer_id": 1,
            "cashier_id": 2,
            "total_amount": 999.0
        }))
        .unwrap();
        assert_eq!(payload.status, "new");
        assert_eq!(payload.customer_id, 1);
        assert_eq!(payload.cashier_id, 2);
    }

    #[test]
    fn blank_status_fails_validation() {
        let query = UpdateOrderStatusQuery {
            new_status: String::new(),
        };
        assert!(query.validate().is_err());
    }
}
