//! Console Client - HTTP client for the storefront admin API
//!
//! Provides the REST calls the admin console makes: auth, per-entity CRUD
//! endpoint groups, image sub-resources, and the persisted session store.

pub mod api;
pub mod config;
pub mod error;
pub mod http;
pub mod session;

pub use config::ClientConfig;
pub use error::{ClientError, ClientResult};
pub use http::HttpClient;
pub use session::{Actor, Session, UserInfo};
