use chrono::{Duration, Utc};
use sea_orm::{ActiveModelTrait, EntityTrait, PaginatorTrait, Set};
use sea_orm::ActiveValue::NotSet;

use store_management_api::{
    config::AppConfig,
    db::{create_orm_conn, run_migrations},
    dto::{
        cashiers::CreateCashierRequest, customers::CreateCustomerRequest,
        order_items::CreateOrderItemRequest, orders::CreateOrderRequest,
        products::CreateProductRequest,
    },
    entity::{
        Customers,
        returns::ActiveModel as ReturnActive,
        suppliers::ActiveModel as SupplierActive,
    },
    services::{
        cashier_service, customer_service, order_item_service, order_service, product_service,
    },
    state::AppState,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let config = AppConfig::from_env()?;

    let orm = create_orm_conn(&config.database_url).await?;
    // Ensure migrations are applied.
    run_migrations(&orm).await?;
    let state = AppState::new(orm);

    if Customers::find().count(&state.orm).await? > 0 {
        println!("Database already has data, skipping seed");
        return Ok(());
    }

    let dairy_supplier = SupplierActive {
        id: NotSet,
        company_name: Set("Meadow Dairy Co".into()),
        contact_info: Set(Some("orders@meadow.example".into())),
    }
    .insert(&state.orm)
    .await?;
    let bakery_supplier = SupplierActive {
        id: NotSet,
        company_name: Set("Corner Bakery".into()),
        contact_info: Set(None),
    }
    .insert(&state.orm)
    .await?;

    let customer = unwrap_data(
        customer_service::create_customer(
            &state,
            CreateCustomerRequest {
                first_name: "Anna".into(),
                last_name: "Petrova".into(),
                phone: Some("+1-555-0100".into()),
                email: Some("anna@example.com".into()),
            },
        )
        .await?
        .data,
    )?;
    customer_service::create_customer(
        &state,
        CreateCustomerRequest {
            first_name: "Ivan".into(),
            last_name: "Sokolov".into(),
            phone: None,
            email: None,
        },
    )
    .await?;

    let cashier = unwrap_data(
        cashier_service::create_cashier(
            &state,
            CreateCashierRequest {
                full_name: "Maria Ivanova".into(),
                shift: "morning".into(),
                username: "maria".into(),
                password: "maria123".into(),
            },
        )
        .await?
        .data,
    )?;
    cashier_service::create_cashier(
        &state,
        CreateCashierRequest {
            full_name: "Oleg Smirnov".into(),
            shift: "evening".into(),
            username: "oleg".into(),
            password: "oleg123".into(),
        },
    )
    .await?;

    let products = vec![
        ("Milk 1L", "dairy", 1.20, 80, Some(7), dairy_supplier.id),
        ("Kefir 0.5L", "dairy", 0.95, 40, Some(10), dairy_supplier.id),
        ("Rye Bread", "bakery", 2.50, 25, Some(3), bakery_supplier.id),
        ("Croissant", "bakery", 1.75, 30, Some(2), bakery_supplier.id),
    ];

    let mut product_ids = Vec::new();
    for (name, category, price, quantity, shelf_days, supplier_id) in products {
        let product = unwrap_data(
            product_service::create_product(
                &state,
                CreateProductRequest {
                    name: name.into(),
                    category: Some(category.into()),
                    price,
                    quantity,
                    expiration_date: shelf_days.map(|days| Utc::now() + Duration::days(days)),
                    supplier_id: Some(supplier_id),
                },
            )
            .await?
            .data,
        )?;
        product_ids.push((product.id, product.price));
    }
    println!("Seeded products");

    let order = unwrap_data(
        order_service::create_order(
            &state,
            CreateOrderRequest {
                customer_id: customer.id,
                cashier_id: cashier.id,
                status: "new".into(),
            },
        )
        .await?
        .data,
    )?;

    for (&(product_id, unit_price), quantity) in product_ids.iter().zip([2, 1, 1]) {
        order_item_service::create_order_item(
            &state,
            CreateOrderItemRequest {
                order_id: order.id,
                product_id,
                quantity,
                unit_price,
            },
        )
        .await?;
    }

    if let Some(&(product_id, unit_price)) = product_ids.first() {
        ReturnActive {
            id: NotSet,
            order_id: Set(order.id),
            product_id: Set(product_id),
            amount_refunded: Set(unit_price),
        }
        .insert(&state.orm)
        .await?;
    }

    let order = unwrap_data(order_service::get_order(&state, order.id).await?.data)?;
    println!(
        "Seed completed. Order {} total: {:.2}",
        order.id, order.total_amount
    );
    Ok(())
}

fn unwrap_data<T>(data: Option<T>) -> anyhow::Result<T> {
    data.ok_or_else(|| anyhow::anyhow!("service returned no data"))
}
