#![allow(dead_code)]

use sea_orm::{ConnectOptions, Database};
use store_management_api::{
    db::run_migrations,
    dto::{
        cashiers::CreateCashierRequest, customers::CreateCustomerRequest,
        orders::CreateOrderRequest, products::CreateProductRequest,
    },
    models::{Cashier, Customer, Order, Product},
    services::{cashier_service, customer_service, order_service, product_service},
    state::AppState,
};

/// Fresh in-memory SQLite database with every table migrated.
pub async fn setup_state() -> anyhow::Result<AppState> {
    let mut options = ConnectOptions::new("sqlite::memory:");
    // One connection keeps every query on the same in-memory database.
    options
        .max_connections(1)
        .min_connections(1)
        .sqlx_logging(false);
    let orm = Database::connect(options).await?;
    run_migrations(&orm).await?;
    Ok(AppState::new(orm))
}

pub async fn create_customer(state: &AppState, first_name: &str) -> anyhow::Result<Customer> {
    let resp = customer_service::create_customer(
        state,
        CreateCustomerRequest {
            first_name: first_name.into(),
            last_name: "Tester".into(),
            phone: None,
            email: None,
        },
    )
    .await?;
    Ok(resp.data.unwrap())
}

pub async fn create_cashier(
    state: &AppState,
    username: &str,
    shift: &str,
) -> anyhow::Result<Cashier> {
    let resp = cashier_service::create_cashier(
        state,
        CreateCashierRequest {
            full_name: format!("{username} Cashier"),
            shift: shift.into(),
            username: username.into(),
            password: "secret".into(),
        },
    )
    .await?;
    Ok(resp.data.unwrap())
}

pub async fn create_product(
    state: &AppState,
    name: &str,
    category: Option<&str>,
    price: f64,
) -> anyhow::Result<Product> {
    let resp = product_service::create_product(
        state,
        CreateProductRequest {
            name: name.into(),
            category: category.map(String::from),
            price,
            quantity: 10,
            expiration_date: None,
            supplier_id: None,
        },
    )
    .await?;
    Ok(resp.data.unwrap())
}

pub async fn create_order(
    state: &AppState,
    customer_id: i32,
    cashier_id: i32,
) -> anyhow::Result<Order> {
    let resp = order_service::create_order(
        state,
        CreateOrderRequest {
            customer_id,
            cashier_id,
            status: "new".into(),
        },
    )
    .await?;
    Ok(resp.data.unwrap())
}
