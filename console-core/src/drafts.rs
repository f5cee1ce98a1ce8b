//! Concrete drafts for the management screens
//!
//! Drafts hold raw form inputs (numeric fields as strings) and apply the
//! display transforms when seeding from an entity or building payloads.

use console_client::Actor;
use rust_decimal::Decimal;
use shared::models::{
    AccountStatus, Admin, AdminCreate, AdminRole, AdminUpdate, Category, CategoryCreate,
    CategoryUpdate, PricingModel, Product, ProductCreate, ProductStatus, ProductUpdate,
    ProductVariant, Service, ServiceCreate, ServiceUpdate,
};

use crate::form::{
    check_decimal, check_email, check_password_policy, require, Draft, FieldErrors,
};

fn parse_optional_decimal(value: &str) -> Option<Decimal> {
    value.trim().parse().ok()
}

fn optional(value: &str) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

// ==================== Admin ====================

/// Admin account form draft.
///
/// The form shows one combined name field; the entity stores first/last,
/// so seeding joins them and submission splits on the first whitespace.
#[derive(Debug, Clone)]
pub struct AdminDraft {
    pub id: Option<String>,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub role: AdminRole,
    pub status: AccountStatus,
    pub password: String,
    pub confirm_password: String,
}

fn split_name(name: &str) -> (String, String) {
    match name.trim().split_once(char::is_whitespace) {
        Some((first, last)) => (first.to_string(), last.trim().to_string()),
        None => (name.trim().to_string(), String::new()),
    }
}

impl Draft for AdminDraft {
    type Entity = Admin;
    type Create = AdminCreate;
    type Update = AdminUpdate;

    fn from_defaults() -> Self {
        Self {
            id: None,
            name: String::new(),
            email: String::new(),
            phone: String::new(),
            role: AdminRole::Admin,
            status: AccountStatus::Active,
            password: String::new(),
            confirm_password: String::new(),
        }
    }

    fn from_entity(entity: &Admin) -> Self {
        Self {
            id: Some(entity.id.clone()),
            name: entity.full_name(),
            email: entity.email.clone(),
            phone: entity.phone.clone(),
            role: entity.role,
            status: entity.status,
            password: String::new(),
            confirm_password: String::new(),
        }
    }

    fn entity_id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    fn validate(&self, actor: &Actor) -> FieldErrors {
        let mut errors = FieldErrors::new();
        require(&mut errors, "name", &self.name);
        require(&mut errors, "email", &self.email);
        check_email(&mut errors, "email", &self.email);

        if self.id.is_none() {
            require(&mut errors, "password", &self.password);
            if !self.password.is_empty() {
                check_password_policy(&mut errors, "password", &self.password);
            }
            if self.password != self.confirm_password {
                errors.add("confirm_password", "passwords do not match");
            }
        }

        // Role-escalation guard: fires before any network dispatch
        if self.role == AdminRole::SuperAdmin && !actor.is_super_admin() {
            errors.add("role", "only a super admin can grant the super admin role");
        }

        errors
    }

    fn to_create(&self) -> AdminCreate {
        let (first_name, last_name) = split_name(&self.name);
        AdminCreate {
            first_name,
            last_name,
            email: self.email.trim().to_string(),
            phone: optional(&self.phone),
            role: self.role,
            password: self.password.clone(),
        }
    }

    fn to_update(&self) -> AdminUpdate {
        let (first_name, last_name) = split_name(&self.name);
        AdminUpdate {
            first_name: Some(first_name),
            last_name: Some(last_name),
            email: Some(self.email.trim().to_string()),
            phone: optional(&self.phone),
            role: Some(self.role),
            status: Some(self.status),
        }
    }
}

// ==================== Category ====================

/// Category form draft
#[derive(Debug, Clone)]
pub struct CategoryDraft {
    pub id: Option<String>,
    pub name: String,
    pub description: String,
    pub category_type: String,
}

impl Draft for CategoryDraft {
    type Entity = Category;
    type Create = CategoryCreate;
    type Update = CategoryUpdate;

    fn from_defaults() -> Self {
        Self {
            id: None,
            name: String::new(),
            description: String::new(),
            category_type: String::new(),
        }
    }

    fn from_entity(entity: &Category) -> Self {
        Self {
            id: Some(entity.id.clone()),
            name: entity.name.clone(),
            description: entity.description.clone(),
            category_type: entity.category_type.clone().unwrap_or_default(),
        }
    }

    fn entity_id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    fn validate(&self, _actor: &Actor) -> FieldErrors {
        let mut errors = FieldErrors::new();
        require(&mut errors, "name", &self.name);
        errors
    }

    fn to_create(&self) -> CategoryCreate {
        CategoryCreate {
            name: self.name.trim().to_string(),
            description: optional(&self.description),
            category_type: optional(&self.category_type),
        }
    }

    fn to_update(&self) -> CategoryUpdate {
        CategoryUpdate {
            name: Some(self.name.trim().to_string()),
            description: optional(&self.description),
            category_type: optional(&self.category_type),
        }
    }
}

// ==================== Product ====================

/// Product form draft (price inputs kept raw until validated)
#[derive(Debug, Clone)]
pub struct ProductDraft {
    pub id: Option<String>,
    pub name: String,
    pub description: String,
    pub category_id: String,
    pub product_type: String,
    pub pricing_model: PricingModel,
    pub price_from: String,
    pub price_to: String,
    pub variants: Vec<ProductVariant>,
    pub what_included: Vec<String>,
    pub what_not_included: Vec<String>,
    pub warranty_period: String,
    pub amc_available: bool,
    pub amc_price_per_year: String,
    pub status: ProductStatus,
}

impl Draft for ProductDraft {
    type Entity = Product;
    type Create = ProductCreate;
    type Update = ProductUpdate;

    fn from_defaults() -> Self {
        Self {
            id: None,
            name: String::new(),
            description: String::new(),
            category_id: String::new(),
            product_type: String::new(),
            pricing_model: PricingModel::Fixed,
            price_from: String::new(),
            price_to: String::new(),
            variants: Vec::new(),
            what_included: Vec::new(),
            what_not_included: Vec::new(),
            warranty_period: String::new(),
            amc_available: false,
            amc_price_per_year: String::new(),
            status: ProductStatus::Active,
        }
    }

    fn from_entity(entity: &Product) -> Self {
        Self {
            id: Some(entity.id.clone()),
            name: entity.name.clone(),
            description: entity.description.clone(),
            category_id: entity.category_id.clone(),
            product_type: entity.product_type.clone().unwrap_or_default(),
            pricing_model: entity.pricing_model,
            price_from: entity
                .estimated_price_from
                .map(|d| d.to_string())
                .unwrap_or_default(),
            price_to: entity
                .estimated_price_to
                .map(|d| d.to_string())
                .unwrap_or_default(),
            variants: entity.variants.clone(),
            what_included: entity.what_included.clone(),
            what_not_included: entity.what_not_included.clone(),
            warranty_period: entity.warranty_period.clone().unwrap_or_default(),
            amc_available: entity.amc_available,
            amc_price_per_year: entity
                .amc_price_per_year
                .map(|d| d.to_string())
                .unwrap_or_default(),
            status: entity.status,
        }
    }

    fn entity_id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    fn validate(&self, _actor: &Actor) -> FieldErrors {
        let mut errors = FieldErrors::new();
        require(&mut errors, "name", &self.name);
        require(&mut errors, "category", &self.category_id);
        require(&mut errors, "price_from", &self.price_from);
        require(&mut errors, "price_to", &self.price_to);
        check_decimal(&mut errors, "price_from", &self.price_from);
        check_decimal(&mut errors, "price_to", &self.price_to);
        // Inverted ranges (from > to) are accepted: quote-style listings
        // use them in the wild and the intended semantics are unconfirmed.
        if self.amc_available {
            check_decimal(&mut errors, "amc_price_per_year", &self.amc_price_per_year);
        }
        errors
    }

    fn to_create(&self) -> ProductCreate {
        ProductCreate {
            name: self.name.trim().to_string(),
            description: optional(&self.description),
            category_id: self.category_id.clone(),
            product_type: optional(&self.product_type),
            pricing_model: self.pricing_model,
            estimated_price_from: parse_optional_decimal(&self.price_from),
            estimated_price_to: parse_optional_decimal(&self.price_to),
            variants: (!self.variants.is_empty()).then(|| self.variants.clone()),
            what_included: (!self.what_included.is_empty()).then(|| self.what_included.clone()),
            what_not_included: (!self.what_not_included.is_empty())
                .then(|| self.what_not_included.clone()),
            warranty_period: optional(&self.warranty_period),
            amc_available: Some(self.amc_available),
            amc_price_per_year: parse_optional_decimal(&self.amc_price_per_year),
        }
    }

    fn to_update(&self) -> ProductUpdate {
        ProductUpdate {
            name: Some(self.name.trim().to_string()),
            description: optional(&self.description),
            category_id: Some(self.category_id.clone()),
            product_type: optional(&self.product_type),
            pricing_model: Some(self.pricing_model),
            estimated_price_from: parse_optional_decimal(&self.price_from),
            estimated_price_to: parse_optional_decimal(&self.price_to),
            variants: Some(self.variants.clone()),
            what_included: Some(self.what_included.clone()),
            what_not_included: Some(self.what_not_included.clone()),
            warranty_period: optional(&self.warranty_period),
            amc_available: Some(self.amc_available),
            amc_price_per_year: parse_optional_decimal(&self.amc_price_per_year),
            status: Some(self.status),
        }
    }
}

// ==================== Service ====================

/// Service form draft
#[derive(Debug, Clone)]
pub struct ServiceDraft {
    pub id: Option<String>,
    pub name: String,
    pub description: String,
    pub category_id: String,
    pub pricing_model: PricingModel,
    pub price_from: String,
    pub price_to: String,
    pub status: AccountStatus,
}

impl Draft for ServiceDraft {
    type Entity = Service;
    type Create = ServiceCreate;
    type Update = ServiceUpdate;

    fn from_defaults() -> Self {
        Self {
            id: None,
            name: String::new(),
            description: String::new(),
            category_id: String::new(),
            pricing_model: PricingModel::Fixed,
            price_from: String::new(),
            price_to: String::new(),
            status: AccountStatus::Active,
        }
    }

    fn from_entity(entity: &Service) -> Self {
        Self {
            id: Some(entity.id.clone()),
            name: entity.name.clone(),
            description: entity.description.clone(),
            category_id: entity.category_id.clone(),
            pricing_model: entity.pricing_model,
            price_from: entity
                .estimated_price_from
                .map(|d| d.to_string())
                .unwrap_or_default(),
            price_to: entity
                .estimated_price_to
                .map(|d| d.to_string())
                .unwrap_or_default(),
            status: entity.status,
        }
    }

    fn entity_id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    fn validate(&self, _actor: &Actor) -> FieldErrors {
        let mut errors = FieldErrors::new();
        require(&mut errors, "name", &self.name);
        require(&mut errors, "category", &self.category_id);
        require(&mut errors, "price_from", &self.price_from);
        require(&mut errors, "price_to", &self.price_to);
        check_decimal(&mut errors, "price_from", &self.price_from);
        check_decimal(&mut errors, "price_to", &self.price_to);
        errors
    }

    fn to_create(&self) -> ServiceCreate {
        ServiceCreate {
            name: self.name.trim().to_string(),
            description: optional(&self.description),
            category_id: self.category_id.clone(),
            pricing_model: self.pricing_model,
            estimated_price_from: parse_optional_decimal(&self.price_from),
            estimated_price_to: parse_optional_decimal(&self.price_to),
        }
    }

    fn to_update(&self) -> ServiceUpdate {
        ServiceUpdate {
            name: Some(self.name.trim().to_string()),
            description: optional(&self.description),
            category_id: Some(self.category_id.clone()),
            pricing_model: Some(self.pricing_model),
            estimated_price_from: parse_optional_decimal(&self.price_from),
            estimated_price_to: parse_optional_decimal(&self.price_to),
            status: Some(self.status),
        }
    }
}
