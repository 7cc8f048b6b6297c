pub mod cashiers;
pub mod customers;
pub mod order_items;
pub mod orders;
pub mod products;
pub mod returns;
pub mod suppliers;

pub use cashiers::Entity as Cashiers;
pub use customers::Entity as Customers;
pub use order_items::Entity as OrderItems;
pub use orders::Entity as Orders;
pub use products::Entity as Products;
pub use returns::Entity as Returns;
pub use suppliers::Entity as Suppliers;
