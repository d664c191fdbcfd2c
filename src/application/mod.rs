pub mod auth_service;
pub mod order_service;
pub mod product_service;

pub use auth_service::AuthService;
pub use order_service::OrderService;
pub use product_service::ProductService;
