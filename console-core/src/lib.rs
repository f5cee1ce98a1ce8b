//! Console Core - CRUD view-model layer for the admin console
//!
//! Every management screen repeats the same lifecycle: load a collection,
//! filter/search/paginate it, open a create-or-edit form, validate and
//! submit, refetch, and gate destructive actions behind a confirmation
//! step. This crate implements that lifecycle once, parameterized by
//! entity type, instead of once per screen.

pub mod confirm;
pub mod debounce;
pub mod drafts;
pub mod form;
pub mod list;
pub mod notice;
pub mod pager;
pub mod record;
pub mod screen;
pub mod sources;
pub mod stats;

pub use confirm::ConfirmGate;
pub use debounce::SearchDebouncer;
pub use form::{Draft, FieldErrors, FormMode, FormSession};
pub use list::{Collection, Facet, ListStore};
pub use notice::{Notice, NoticeQueue, Severity};
pub use pager::Pager;
pub use record::Record;
pub use screen::{CrudScreen, Mutator, PendingImage};
pub use sources::{
    guard_categories_in_use, AdminScreen, BookingFeed, CategoryScreen, ProductScreen,
    ServiceScreen, TechnicianFeed,
};

/// Default rows per page on the management tables
pub const DEFAULT_PAGE_SIZE: usize = 5;

/// Search input debounce interval
pub const SEARCH_DEBOUNCE: std::time::Duration = std::time::Duration::from_millis(300);
