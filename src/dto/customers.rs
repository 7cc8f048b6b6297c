use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::models::Customer;

#[derive(Debug, Deserialize, ToSchema, Validate)]
pub struct CreateCustomerRequest {
    #[validate(length(min = 1, max = 50))]
    pub first_name: String,
    #[validate(length(min = 1, max = 50))]
    pub last_name: String,
    #[validate(length(max = 20))]
    pub phone: Option<String>,
    #[validate(email, length(max = 100))]
    pub email: Option<String>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct CustomerList {
    pub items: Vec<Customer>,
    pub count: usize,
}
