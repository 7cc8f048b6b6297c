use utoipa::{OpenApi, openapi::OpenApi as OpenApiSpec};
use utoipa_scalar::{Scalar, Servable};

use crate::{
    dto::{
        cashiers::{CashierList, CashiersByShift, CreateCashierRequest},
        catalog::{ReturnList, SupplierList},
        customers::{CreateCustomerRequest, CustomerList},
        order_items::{CreateOrderItemRequest, OrderItemCreated, OrderItemList, OrderItemRemoved},
        orders::{CreateOrderRequest, OrderItemsByOrder, OrderList, OrdersByStatus},
        products::{CreateProductRequest, ProductList, ProductsByCategory},
    },
    models::{Cashier, Customer, Order, OrderItem, Product, Return, Supplier},
    response::{Ack, ApiResponse, Meta},
    routes::{cashiers, catalog, customers, health, info, order_items, orders, products},
};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Store Management API",
        description = "Store management with automatic order total calculation"
    ),
    paths(
        health::health_check,
        info::root,
        info::project_info,
        customers::list_customers,
        customers::get_customer,
        customers::create_customer,
        customers::delete_customer,
        products::list_products,
        products::list_products_by_category,
        products::get_product,
        products::create_product,
        products::delete_product,
        cashiers::list_cashiers,
        cashiers::list_cashiers_by_shift,
        cashiers::get_cashier,
        cashiers::create_cashier,
        cashiers::delete_cashier,
        orders::list_orders,
        orders::list_orders_by_status,
        orders::get_order,
        orders::list_order_items,
        orders::create_order,
        orders::update_order_status,
        orders::cancel_order,
        orders::complete_order,
        orders::delete_order,
        order_items::list_order_items,
        order_items::create_order_item,
        order_items::delete_order_item,
        catalog::list_suppliers,
        catalog::list_returns
    ),
    components(
        schemas(
            Customer,
            Cashier,
            Supplier,
            Product,
            Order,
            OrderItem,
            Return,
            CreateCustomerRequest,
            CreateCashierRequest,
            CreateProductRequest,
            CreateOrderRequest,
            CreateOrderItemRequest,
            CustomerList,
            CashierList,
            CashiersByShift,
            ProductList,
            ProductsByCategory,
            OrderList,
            OrdersByStatus,
            OrderItemsByOrder,
            OrderItemList,
            OrderItemCreated,
            OrderItemRemoved,
            SupplierList,
            ReturnList,
            Ack,
            Meta,
            health::HealthData,
            info::ServiceBanner,
            info::ProjectInfo,
            ApiResponse<Order>,
            ApiResponse<OrderItemCreated>,
            ApiResponse<OrderList>
        )
    ),
    tags(
        (name = "Health", description = "Health check endpoint"),
        (name = "Info", description = "Service information"),
        (name = "Customers", description = "Customer endpoints"),
        (name = "Products", description = "Product endpoints"),
        (name = "Cashiers", description = "Cashier endpoints"),
        (name = "Orders", description = "Order endpoints"),
        (name = "Order items", description = "Order line items; every change recalculates the order total"),
        (name = "Catalog", description = "Read-only suppliers and returns"),
    )
)]
pub struct ApiDoc;

pub fn scalar_docs() -> Scalar<OpenApiSpec> {
    Scalar::with_url("/docs", ApiDoc::openapi())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn openapi_lists_the_item_and_order_paths() {
        let doc = ApiDoc::openapi();
        let paths = &doc.paths.paths;
        assert!(paths.contains_key("/order-items"));
        assert!(paths.contains_key("/order-items/{id}"));
        assert!(paths.contains_key("/orders/{id}/status"));
        assert!(paths.contains_key("/products/category/{category}"));
    }
}
