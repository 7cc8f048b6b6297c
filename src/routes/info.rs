use axum::Json;
use serde::Serialize;
use utoipa::ToSchema;

use crate::response::{ApiResponse, Meta};

#[derive(Debug, Serialize, ToSchema)]
pub struct ServiceBanner {
    pub service: String,
    pub version: String,
    pub feature: String,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct ProjectInfo {
    pub project: String,
    pub description: String,
    pub key_feature: String,
    pub endpoints_available: Vec<String>,
}

const KEY_FEATURE: &str = "Order totals are recalculated whenever items are added or removed";

#[utoipa::path(
    get,
    path = "/",
    responses(
        (status = 200, description = "Service banner", body = ApiResponse<ServiceBanner>),
    ),
    tag = "Info"
)]
pub async fn root() -> Json<ApiResponse<ServiceBanner>> {
    let data = ServiceBanner {
        service: "store management api".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        feature: KEY_FEATURE.to_string(),
    };
    Json(ApiResponse::success(
        "store management api is running",
        data,
        Some(Meta::empty()),
    ))
}

#[utoipa::path(
    get,
    path = "/info",
    responses(
        (status = 200, description = "Project summary and endpoint groups", body = ApiResponse<ProjectInfo>),
    ),
    tag = "Info"
)]
pub async fn project_info() -> Json<ApiResponse<ProjectInfo>> {
    let data = ProjectInfo {
        project: "Minimarket".to_string(),
        description: "Store management backend with automatic order totals".to_string(),
        key_feature: KEY_FEATURE.to_string(),
        endpoints_available: [
            "Customers: GET/POST/DELETE /customers",
            "Products: GET/POST/DELETE /products, GET /products/category/{category}",
            "Cashiers: GET/POST/DELETE /cashiers, GET /cashiers/shift/{shift}",
            "Orders: GET/POST/PUT/DELETE /orders, status, cancel, complete",
            "Order items: GET/POST/DELETE /order-items",
            "Read-only: GET /suppliers, GET /returns",
        ]
        .into_iter()
        .map(String::from)
        .collect(),
    };
    Json(ApiResponse::success("Project info", data, Some(Meta::empty())))
}
