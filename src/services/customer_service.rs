use sea_orm::{ActiveModelTrait, EntityTrait, QueryOrder, Set};
use sea_orm::ActiveValue::NotSet;

use crate::{
    dto::customers::{CreateCustomerRequest, CustomerList},
    entity::customers::{ActiveModel, Column, Entity as Customers, Model as CustomerModel},
    error::{AppError, AppResult},
    models::Customer,
    response::{Ack, ApiResponse, Meta},
    state::AppState,
};

pub async fn list_customers(state: &AppState) -> AppResult<ApiResponse<CustomerList>> {
    let items: Vec<Customer> = Customers::find()
        .order_by_asc(Column::Id)
        .all(&state.orm)
        .await?
        .into_iter()
        .map(customer_from_entity)
        .collect();

    let count = items.len();
    Ok(ApiResponse::success(
        "Customers",
        CustomerList { items, count },
        Some(Meta::total(count)),
    ))
}

pub async fn get_customer(state: &AppState, id: i32) -> AppResult<ApiResponse<Customer>> {
    let customer = Customers::find_by_id(id)
        .one(&state.orm)
        .await?
        .map(customer_from_entity);
    let customer = match customer {
        Some(c) => c,
        None => return Err(AppError::not_found("Customer", id)),
    };
    Ok(ApiResponse::success("Customer", customer, None))
}

pub async fn create_customer(
    state: &AppState,
    payload: CreateCustomerRequest,
) -> AppResult<ApiResponse<Customer>> {
    let customer = ActiveModel {
        id: NotSet,
        first_name: Set(payload.first_name),
        last_name: Set(payload.last_name),
        phone: Set(payload.phone),
        email: Set(payload.email),
    }
    .insert(&state.orm)
    .await?;

    tracing::info!(customer_id = customer.id, "customer created");
    Ok(ApiResponse::success(
        "Customer created",
        customer_from_entity(customer),
        Some(Meta::empty()),
    ))
}

pub async fn delete_customer(state: &AppState, id: i32) -> AppResult<ApiResponse<Ack>> {
    let result = Customers::delete_by_id(id).exec(&state.orm).await?;

    if result.rows_affected == 0 {
        return Err(AppError::not_found("Customer", id));
    }

    tracing::info!(customer_id = id, "customer deleted");
    Ok(ApiResponse::success(
        format!("Customer {id} deleted"),
        Ack { id },
        Some(Meta::empty()),
    ))
}

fn customer_from_entity(model: CustomerModel) -> Customer {
    Customer {
        id: model.id,
        first_name: model.first_name,
        last_name: model.last_name,
        phone: model.phone,
        email: model.email,
    }
}
