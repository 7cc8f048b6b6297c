use serde::Serialize;
use utoipa::ToSchema;

use crate::models::{Return, Supplier};

#[derive(Debug, Serialize, ToSchema)]
pub struct SupplierList {
    pub items: Vec<Supplier>,
    pub count: usize,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct ReturnList {
    pub items: Vec<Return>,
    pub count: usize,
}
