//! Read-only views over suppliers and returns.

use sea_orm::{EntityTrait, QueryOrder};

use crate::{
    dto::catalog::{ReturnList, SupplierList},
    entity::{
        returns::{Column as ReturnCol, Entity as Returns, Model as ReturnModel},
        suppliers::{Column as SupplierCol, Entity as Suppliers, Model as SupplierModel},
    },
    error::AppResult,
    models::{Return, Supplier},
    response::{ApiResponse, Meta},
    state::AppState,
};

pub async fn list_suppliers(state: &AppState) -> AppResult<ApiResponse<SupplierList>> {
    let items: Vec<Supplier> = Suppliers::find()
        .order_by_asc(SupplierCol::Id)
        .all(&state.orm)
        .await?
        .into_iter()
        .map(supplier_from_entity)
        .collect();

    let count = items.len();
    Ok(ApiResponse::success(
        "Suppliers",
        SupplierList { items, count },
        Some(Meta::total(count)),
    ))
}

pub async fn list_returns(state: &AppState) -> AppResult<ApiResponse<ReturnList>> {
    let items: Vec<Return> = Returns::find()
        .order_by_asc(ReturnCol::Id)
        .all(&state.orm)
        .await?
        .into_iter()
        .map(return_from_entity)
        .collect();

    let count = items.len();
    Ok(ApiResponse::success(
        "Returns",
        ReturnList { items, count },
        Some(Meta::total(count)),
    ))
}

fn supplier_from_entity(model: SupplierModel) -> Supplier {
    Supplier {
        id: model.id,
        company_name: model.company_name,
        contact_info: model.contact_info,
    }
}

fn return_from_entity(model: ReturnModel) -> Return {
    Return {
        id: model.id,
        order_id: model.order_id,
        product_id: model.product_id,
        amount_refunded: model.amount_refunded,
    }
}
