mod common;

use sea_orm::{ActiveModelTrait, Set};
use sea_orm::ActiveValue::NotSet;
use store_management_api::{
    dto::cashiers::CreateCashierRequest,
    dto::order_items::CreateOrderItemRequest,
    dto::orders::CreateOrderRequest,
    entity::{returns::ActiveModel as ReturnActive, suppliers::ActiveModel as SupplierActive},
    error::AppError,
    services::{
        cashier_service, catalog_service, customer_service, order_item_service, order_service,
        product_service,
    },
};

use common::{create_cashier, create_customer, create_order, create_product, setup_state};

#[tokio::test]
async fn products_filter_by_category() -> anyhow::Result<()> {
    let state = setup_state().await?;
    create_product(&state, "Milk", Some("dairy"), 1.2).await?;
    create_product(&state, "Bread", Some("bakery"), 2.5).await?;
    create_product(&state, "Kefir", Some("dairy"), 0.95).await?;
    create_product(&state, "Batteries", None, 4.0).await?;

    let dairy = product_service::list_products_by_category(&state, "dairy".into())
        .await?
        .data
        .unwrap();
    assert_eq!(dairy.category, "dairy");
    assert_eq!(dairy.count, 2);
    assert!(dairy.items.iter().all(|p| p.category.as_deref() == Some("dairy")));

    let all = product_service::list_products(&state).await?;
    assert_eq!(all.data.unwrap().count, 4);
    assert_eq!(all.meta.unwrap().total, Some(4));
    Ok(())
}

#[tokio::test]
async fn orders_filter_by_status() -> anyhow::Result<()> {
    let state = setup_state().await?;
    let customer = create_customer(&state, "Anna").await?;
    let cashier = create_cashier(&state, "maria", "morning").await?;
    let kept_new = create_order(&state, customer.id, cashier.id).await?;
    let cancelled = create_order(&state, customer.id, cashier.id).await?;
    let completed = create_order(&state, customer.id, cashier.id).await?;

    order_service::cancel_order(&state, cancelled.id).await?;
    let resp = order_service::complete_order(&state, completed.id).await?;
    assert_eq!(resp.message, format!("Order {} completed", completed.id));
    assert_eq!(resp.data.unwrap().status, "completed");

    let done = order_service::list_orders_by_status(&state, "completed".into())
        .await?
        .data
        .unwrap();
    assert_eq!(done.count, 1);
    assert_eq!(done.items[0].id, completed.id);

    let fresh = order_service::list_orders_by_status(&state, "new".into())
        .await?
        .data
        .unwrap();
    assert_eq!(fresh.items.iter().map(|o| o.id).collect::<Vec<_>>(), vec![kept_new.id]);
    Ok(())
}

#[tokio::test]
async fn status_updates_accept_any_label_and_any_transition() -> anyhow::Result<()> {
    let state = setup_state().await?;
    let customer = create_customer(&state, "Anna").await?;
    let cashier = create_cashier(&state, "maria", "morning").await?;
    let order = create_order(&state, customer.id, cashier.id).await?;

    order_service::cancel_order(&state, order.id).await?;
    let revived = order_service::complete_order(&state, order.id).await?.data.unwrap();
    assert_eq!(revived.status, "completed");

    let custom = order_service::update_order_status(&state, order.id, "awaiting pickup".into())
        .await?;
    assert_eq!(
        custom.message,
        format!("Order {} status changed to 'awaiting pickup'", order.id)
    );
    assert_eq!(custom.data.unwrap().total_amount, 0.0);
    Ok(())
}

#[tokio::test]
async fn client_supplied_status_is_kept_but_total_starts_at_zero() -> anyhow::Result<()> {
    let state = setup_state().await?;
    let customer = create_customer(&state, "Anna").await?;
    let cashier = create_cashier(&state, "maria", "morning").await?;

    let order = order_service::create_order(
        &state,
        CreateOrderRequest {
            customer_id: customer.id,
            cashier_id: cashier.id,
            status: "pending".into(),
        },
    )
    .await?
    .data
    .unwrap();
    assert_eq!(order.status, "pending");
    assert_eq!(order.total_amount, 0.0);
    Ok(())
}

#[tokio::test]
async fn creating_an_order_for_unknown_people_is_not_found() -> anyhow::Result<()> {
    let state = setup_state().await?;
    let cashier = create_cashier(&state, "maria", "morning").await?;

    let result = order_service::create_order(
        &state,
        CreateOrderRequest {
            customer_id: 12,
            cashier_id: cashier.id,
            status: "new".into(),
        },
    )
    .await;
    assert!(matches!(result, Err(AppError::NotFound(ref m)) if m == "Customer 12"));
    Ok(())
}

#[tokio::test]
async fn deleting_missing_rows_reports_not_found() -> anyhow::Result<()> {
    let state = setup_state().await?;

    assert!(matches!(
        customer_service::delete_customer(&state, 1).await,
        Err(AppError::NotFound(_))
    ));
    assert!(matches!(
        product_service::delete_product(&state, 1).await,
        Err(AppError::NotFound(_))
    ));
    assert!(matches!(
        cashier_service::delete_cashier(&state, 1).await,
        Err(AppError::NotFound(_))
    ));
    assert!(matches!(
        order_service::delete_order(&state, 1).await,
        Err(AppError::NotFound(_))
    ));
    assert!(matches!(
        order_item_service::delete_order_item(&state, 1).await,
        Err(AppError::NotFound(_))
    ));
    assert!(matches!(
        order_service::update_order_status(&state, 1, "completed".into()).await,
        Err(AppError::NotFound(_))
    ));
    Ok(())
}

#[tokio::test]
async fn deleting_existing_rows_succeeds_once() -> anyhow::Result<()> {
    let state = setup_state().await?;
    let customer = create_customer(&state, "Anna").await?;
    let product = create_product(&state, "Milk", Some("dairy"), 1.0).await?;

    let resp = customer_service::delete_customer(&state, customer.id).await?;
    assert_eq!(resp.message, format!("Customer {} deleted", customer.id));
    assert_eq!(resp.data.unwrap().id, customer.id);
    assert!(customer_service::get_customer(&state, customer.id).await.is_err());

    product_service::delete_product(&state, product.id).await?;
    assert!(matches!(
        product_service::delete_product(&state, product.id).await,
        Err(AppError::NotFound(_))
    ));
    Ok(())
}

#[tokio::test]
async fn cashiers_filter_by_shift_and_never_expose_passwords() -> anyhow::Result<()> {
    let state = setup_state().await?;
    create_cashier(&state, "maria", "morning").await?;
    create_cashier(&state, "oleg", "evening").await?;
    create_cashier(&state, "lena", "morning").await?;

    let morning = cashier_service::list_cashiers_by_shift(&state, "morning".into())
        .await?
        .data
        .unwrap();
    assert_eq!(morning.count, 2);
    assert!(morning.items.iter().all(|c| c.shift == "morning"));

    let json = serde_json::to_value(&morning)?;
    let text = json.to_string();
    assert!(!text.contains("password"));
    assert!(!text.contains("secret"));
    Ok(())
}

#[tokio::test]
async fn duplicate_cashier_username_is_rejected() -> anyhow::Result<()> {
    let state = setup_state().await?;
    create_cashier(&state, "maria", "morning").await?;

    let result = cashier_service::create_cashier(
        &state,
        CreateCashierRequest {
            full_name: "Another Maria".into(),
            shift: "evening".into(),
            username: "maria".into(),
            password: "other".into(),
        },
    )
    .await;
    assert!(matches!(result, Err(AppError::BadRequest(_))));
    Ok(())
}

#[tokio::test]
async fn suppliers_and_returns_are_listed() -> anyhow::Result<()> {
    let state = setup_state().await?;
    let supplier = SupplierActive {
        id: NotSet,
        company_name: Set("Meadow Dairy Co".into()),
        contact_info: Set(None),
    }
    .insert(&state.orm)
    .await?;

    let customer = create_customer(&state, "Anna").await?;
    let cashier = create_cashier(&state, "maria", "morning").await?;
    let product = create_product(&state, "Milk", Some("dairy"), 1.2).await?;
    let order = create_order(&state, customer.id, cashier.id).await?;
    ReturnActive {
        id: NotSet,
        order_id: Set(order.id),
        product_id: Set(product.id),
        amount_refunded: Set(1.2),
    }
    .insert(&state.orm)
    .await?;

    let suppliers = catalog_service::list_suppliers(&state).await?.data.unwrap();
    assert_eq!(suppliers.count, 1);
    assert_eq!(suppliers.items[0].id, supplier.id);

    let returns = catalog_service::list_returns(&state).await?.data.unwrap();
    assert_eq!(returns.count, 1);
    assert_eq!(returns.items[0].amount_refunded, 1.2);
    Ok(())
}

#[tokio::test]
async fn product_with_unknown_supplier_is_not_found() -> anyhow::Result<()> {
    let state = setup_state().await?;
    let result = product_service::create_product(
        &state,
        store_management_api::dto::products::CreateProductRequest {
            name: "Yogurt".into(),
            category: Some("dairy".into()),
            price: 0.8,
            quantity: 5,
            expiration_date: None,
            supplier_id: Some(31),
        },
    )
    .await;
    assert!(matches!(result, Err(AppError::NotFound(ref m)) if m == "Supplier 31"));
    Ok(())
}

#[tokio::test]
async fn items_by_order_is_a_plain_filter() -> anyhow::Result<()> {
    let state = setup_state().await?;
    let customer = create_customer(&state, "Anna").await?;
    let cashier = create_cashier(&state, "maria", "morning").await?;
    let milk = create_product(&state, "Milk", Some("dairy"), 1.5).await?;
    let order = create_order(&state, customer.id, cashier.id).await?;
    let other = create_order(&state, customer.id, cashier.id).await?;
    order_item_service::create_order_item(
        &state,
        CreateOrderItemRequest {
            order_id: other.id,
            product_id: milk.id,
            quantity: 2,
            unit_price: 1.5,
        },
    )
    .await?;

    let empty = order_service::list_order_items_by_order(&state, order.id)
        .await?
        .data
        .unwrap();
    assert_eq!(empty.count, 0);

    let unknown = order_service::list_order_items_by_order(&state, 4040)
        .await?
        .data
        .unwrap();
    assert_eq!(unknown.order_id, 4040);
    assert!(unknown.items.is_empty());

    let filled = order_service::list_order_items_by_order(&state, other.id)
        .await?
        .data
        .unwrap();
    assert_eq!(filled.count, 1);
    assert_eq!(filled.items[0].order_id, other.id);
    Ok(())
}
