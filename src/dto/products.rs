use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::models::Product;

#[derive(Debug, Deserialize, ToSchema, Validate)]
pub struct CreateProductRequest {
    #[validate(length(min = 1, max = 100))]
    pub name: String,
    #[validate(length(max = 50))]
    pub category: Option<String>,
    #[validate(range(min = 0.0))]
    pub price: f64,
    #[validate(range(min = 0))]
    pub quantity: i32,
    pub expiration_date: Option<DateTime<Utc>>,
    pub supplier_id: Option<i32>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct ProductList {
    pub items: Vec<Product>,
    pub count: usize,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct ProductsByCategory {
    pub category: String,
    pub items: Vec<Product>,
    pub count: usize,
}
