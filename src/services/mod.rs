pub mod cashier_service;
pub mod catalog_service;
pub mod customer_service;
pub mod order_item_service;
pub mod order_service;
pub mod order_total;
pub mod product_service;
