//! Wires the REST api groups into the screen machinery.

use async_trait::async_trait;
use console_client::api::{AdminsApi, CategoriesApi, OrdersApi, ProductsApi, ServicesApi};
use console_client::ClientResult;
use shared::models::{
    AccountStatus, Admin, AdminCreate, AdminUpdate, Booking, Category, CategoryCreate,
    CategoryUpdate, Order, Product, ProductCreate, ProductUpdate, Service, ServiceCreate,
    ServiceUpdate, Technician,
};
use shared::{AppError, ErrorCode};

use crate::drafts::{AdminDraft, CategoryDraft, ProductDraft, ServiceDraft};
use crate::list::Collection;
use crate::screen::{CrudScreen, Mutator, PendingImage};
use crate::stats::category_in_use;

#[async_trait]
impl Collection for AdminsApi {
    type Item = Admin;

    async fn fetch_all(&self) -> ClientResult<Vec<Admin>> {
        self.list().await
    }
}

#[async_trait]
impl Mutator for AdminsApi {
    type Create = AdminCreate;
    type Update = AdminUpdate;

    async fn create(&self, payload: &AdminCreate) -> ClientResult<Admin> {
        AdminsApi::create(self, payload).await
    }

    async fn update(&self, id: &str, payload: &AdminUpdate) -> ClientResult<Admin> {
        AdminsApi::update(self, id, payload).await
    }

    /// Admin accounts are never hard-deleted, only flipped to Deleted.
    async fn remove(&self, id: &str) -> ClientResult<()> {
        self.set_status(id, AccountStatus::Deleted).await?;
        Ok(())
    }

    async fn upload_image(&self, id: &str, image: &PendingImage) -> ClientResult<()> {
        self.upload_profile_image(id, &image.file_name, image.bytes.clone())
            .await
    }
}

// Orders are read-and-transition only, no create/edit/delete screen.
#[async_trait]
impl Collection for OrdersApi {
    type Item = Order;

    async fn fetch_all(&self) -> ClientResult<Vec<Order>> {
        self.list().await
    }
}

#[async_trait]
impl Collection for CategoriesApi {
    type Item = Category;

    async fn fetch_all(&self) -> ClientResult<Vec<Category>> {
        self.list().await
    }
}

#[async_trait]
impl Mutator for CategoriesApi {
    type Create = CategoryCreate;
    type Update = CategoryUpdate;

    async fn create(&self, payload: &CategoryCreate) -> ClientResult<Category> {
        CategoriesApi::create(self, payload).await
    }

    async fn update(&self, id: &str, payload: &CategoryUpdate) -> ClientResult<Category> {
        CategoriesApi::update(self, id, payload).await
    }

    async fn remove(&self, id: &str) -> ClientResult<()> {
        self.delete(id).await
    }

    async fn upload_image(&self, id: &str, image: &PendingImage) -> ClientResult<()> {
        CategoriesApi::upload_image(self, id, &image.file_name, image.bytes.clone()).await
    }
}

#[async_trait]
impl Collection for ProductsApi {
    type Item = Product;

    async fn fetch_all(&self) -> ClientResult<Vec<Product>> {
        self.list().await
    }
}

#[async_trait]
impl Mutator for ProductsApi {
    type Create = ProductCreate;
    type Update = ProductUpdate;

    async fn create(&self, payload: &ProductCreate) -> ClientResult<Product> {
        ProductsApi::create(self, payload).await
    }

    async fn update(&self, id: &str, payload: &ProductUpdate) -> ClientResult<Product> {
        ProductsApi::update(self, id, payload).await
    }

    async fn remove(&self, id: &str) -> ClientResult<()> {
        self.delete(id).await
    }

    async fn upload_image(&self, id: &str, image: &PendingImage) -> ClientResult<()> {
        ProductsApi::upload_image(self, id, &image.file_name, image.bytes.clone()).await
    }
}

#[async_trait]
impl Collection for ServicesApi {
    type Item = Service;

    async fn fetch_all(&self) -> ClientResult<Vec<Service>> {
        self.list().await
    }
}

#[async_trait]
impl Mutator for ServicesApi {
    type Create = ServiceCreate;
    type Update = ServiceUpdate;

    async fn create(&self, payload: &ServiceCreate) -> ClientResult<Service> {
        ServicesApi::create(self, payload).await
    }

    async fn update(&self, id: &str, payload: &ServiceUpdate) -> ClientResult<Service> {
        ServicesApi::update(self, id, payload).await
    }

    /// Services are retired, not erased.
    async fn remove(&self, id: &str) -> ClientResult<()> {
        self.set_status(id, AccountStatus::Inactive).await?;
        Ok(())
    }

    async fn upload_image(&self, id: &str, image: &PendingImage) -> ClientResult<()> {
        ServicesApi::upload_image(self, id, &image.file_name, image.bytes.clone()).await
    }
}

/// List-only feed of service bookings
pub struct BookingFeed {
    api: ServicesApi,
}

impl BookingFeed {
    pub fn new(api: ServicesApi) -> Self {
        Self { api }
    }
}

#[async_trait]
impl Collection for BookingFeed {
    type Item = Booking;

    async fn fetch_all(&self) -> ClientResult<Vec<Booking>> {
        self.api.bookings().await
    }
}

/// List-only feed of technicians
pub struct TechnicianFeed {
    api: ServicesApi,
}

impl TechnicianFeed {
    pub fn new(api: ServicesApi) -> Self {
        Self { api }
    }
}

#[async_trait]
impl Collection for TechnicianFeed {
    type Item = Technician;

    async fn fetch_all(&self) -> ClientResult<Vec<Technician>> {
        self.api.technicians().await
    }
}

pub type AdminScreen = CrudScreen<AdminsApi, AdminDraft>;
pub type CategoryScreen = CrudScreen<CategoriesApi, CategoryDraft>;
pub type ProductScreen = CrudScreen<ProductsApi, ProductDraft>;
pub type ServiceScreen = CrudScreen<ServicesApi, ServiceDraft>;

/// Refuse deleting any category the given products still reference.
///
/// `products` is a snapshot of the loaded product list; install the
/// guard again whenever that list refetches. The server remains
/// authoritative for the actual constraint.
pub fn guard_categories_in_use<C>(
    screen: &mut CrudScreen<C, CategoryDraft>,
    products: Vec<Product>,
) where
    C: Mutator<Item = Category, Create = CategoryCreate, Update = CategoryUpdate>,
{
    screen.set_remove_guard(move |category: &Category| {
        if category_in_use(&category.id, &products) {
            Some(AppError::new(ErrorCode::CategoryInUse))
        } else {
            None
        }
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use console_client::ClientConfig;

    use crate::list::ListStore;
    use crate::notice::NoticeQueue;
    use std::sync::Arc;

    fn services_api() -> ServicesApi {
        ServicesApi::new(ClientConfig::default().build_http_client())
    }

    #[tokio::test]
    async fn booking_and_technician_feeds_back_list_stores() {
        let bookings = ListStore::new(
            Arc::new(BookingFeed::new(services_api())),
            5,
            NoticeQueue::new(),
        );
        let technicians = ListStore::new(
            Arc::new(TechnicianFeed::new(services_api())),
            5,
            NoticeQueue::new(),
        );
        assert!(!bookings.is_loaded().await);
        assert!(!technicians.is_loaded().await);
    }
}
