//! Entity models
//!
//! Plain records received from the backend; the client adds no identity
//! beyond what the server provides. Each entity carries its `Create` and
//! `Update` payload types (update fields are all optional).

pub mod admin;
pub mod category;
pub mod order;
pub mod product;
pub mod service;

pub use admin::{AccountStatus, Admin, AdminCreate, AdminRole, AdminUpdate};
pub use category::{Category, CategoryCreate, CategoryUpdate};
pub use order::{Order, OrderAddress, OrderItem, OrderStatus, OrderUser, Payment};
pub use product::{
    PricingModel, Product, ProductCreate, ProductStatus, ProductUpdate, ProductVariant,
};
pub use service::{Booking, Service, ServiceCreate, ServiceUpdate, Technician};
