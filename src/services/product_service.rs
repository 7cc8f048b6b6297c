use chrono::Utc;
use sea_orm::{ActiveModelTrait, ColumnTrait, EntityTrait, QueryFilter, QueryOrder, Set};
use sea_orm::ActiveValue::NotSet;

use crate::{
    dto::products::{CreateProductRequest, ProductList, ProductsByCategory},
    entity::{
        products::{ActiveModel, Column, Entity as Products, Model as ProductModel},
        suppliers::Entity as Suppliers,
    },
    error::{AppError, AppResult},
    models::Product,
    response::{Ack, ApiResponse, Meta},
    state::AppState,
};

pub async fn list_products(state: &AppState) -> AppResult<ApiResponse<ProductList>> {
    let items: Vec<Product> = Products::find()
        .order_by_asc(Column::Id)
        .all(&state.orm)
        .await?
        .into_iter()
        .map(product_from_entity)
        .collect();

    let count = items.len();
    Ok(ApiResponse::success(
        "Products",
        ProductList { items, count },
        Some(Meta::total(count)),
    ))
}

pub async fn list_products_by_category(
    state: &AppState,
    category: String,
) -> AppResult<ApiResponse<ProductsByCategory>> {
    let items: Vec<Product> = Products::find()
        .filter(Column::Category.eq(category.clone()))
        .order_by_asc(Column::Id)
        .all(&state.orm)
        .await?
        .into_iter()
        .map(product_from_entity)
        .collect();

    let count = items.len();
    Ok(ApiResponse::success(
        "Products by category",
        ProductsByCategory {
            category,
            items,
            count,
        },
        Some(Meta::total(count)),
    ))
}

pub async fn get_product(state: &AppState, id: i32) -> AppResult<ApiResponse<Product>> {
    let result = Products::find_by_id(id)
        .one(&state.orm)
        .await?
        .map(product_from_entity);
    let result = match result {
        Some(p) => p,
        None => return Err(AppError::not_found("Product", id)),
    };
    Ok(ApiResponse::success("Product", result, None))
}

pub async fn create_product(
    state: &AppState,
    payload: CreateProductRequest,
) -> AppResult<ApiResponse<Product>> {
    if let Some(supplier_id) = payload.supplier_id {
        if Suppliers::find_by_id(supplier_id)
            .one(&state.orm)
            .await?
            .is_none()
        {
            return Err(AppError::not_found("Supplier", supplier_id));
        }
    }

    let product = ActiveModel {
        id: NotSet,
        name: Set(payload.name),
        category: Set(payload.category),
        price: Set(payload.price),
        quantity: Set(payload.quantity),
        expiration_date: Set(payload.expiration_date.map(Into::into)),
        supplier_id: Set(payload.supplier_id),
    }
    .insert(&state.orm)
    .await?;

    tracing::info!(product_id = product.id, "product created");
    Ok(ApiResponse::success(
        "Product created",
        product_from_entity(product),
        Some(Meta::empty()),
    ))
}

pub async fn delete_product(state: &AppState, id: i32) -> AppResult<ApiResponse<Ack>> {
    let result = Products::delete_by_id(id).exec(&state.orm).await?;

    if result.rows_affected == 0 {
        return Err(AppError::not_found("Product", id));
    }

    tracing::info!(product_id = id, "product deleted");
    Ok(ApiResponse::success(
        format!("Product {id} deleted"),
        Ack { id },
        Some(Meta::empty()),
    ))
}

fn product_from_entity(model: ProductModel) -> Product {
    Product {
        id: model.id,
        name: model.name,
        category: model.category,
        price: model.price,
        quantity: model.quantity,
        expiration_date: model.expiration_date.map(|dt| dt.with_timezone(&Utc)),
        supplier_id: model.supplier_id,
    }
}
