use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::models::Cashier;

#[derive(Debug, Deserialize, ToSchema, Validate)]
pub struct CreateCashierRequest {
    #[validate(length(min = 1, max = 100))]
    pub full_name: String,
    #[validate(length(min = 1, max = 50))]
    pub shift: String,
    #[validate(length(min = 1, max = 50))]
    pub username: String,
    #[validate(length(min = 1, max = 50))]
    pub password: String,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct CashierList {
    pub items: Vec<Cashier>,
    pub count: usize,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct CashiersByShift {
    pub shift: String,
    pub items: Vec<Cashier>,
    pub count: usize,
}
