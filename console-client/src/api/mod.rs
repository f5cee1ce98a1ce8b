//! Typed endpoint groups
//!
//! One group per entity. Collection endpoints return raw JSON that is
//! decoded through `shared::response::parse_collection`, so the loose
//! response shapes never leak past this layer.

pub mod admins;
pub mod categories;
pub mod orders;
pub mod products;
pub mod services;

pub use admins::AdminsApi;
pub use categories::CategoriesApi;
pub use orders::OrdersApi;
pub use products::ProductsApi;
pub use services::ServicesApi;
