//! Record trait: what the view-model needs from an entity
//!
//! Each entity designates its searchable fields, its facet value (the key
//! the status/category filter matches exactly), and any local guard that
//! blocks editing or deleting it for a given actor.

use console_client::Actor;
use shared::models::{Admin, AdminRole, Booking, Category, Order, Product, Service, Technician};
use shared::{AppError, ErrorCode};

/// View-model contract for a listed entity
pub trait Record: Clone + Send + Sync + 'static {
    /// Server-assigned identifier
    fn record_id(&self) -> &str;

    /// Name shown in confirmation modals and notices
    fn display_name(&self) -> String;

    /// Value the exact-match facet filter compares against
    fn facet(&self) -> String;

    /// The designated fields the search text is matched against
    fn search_haystack(&self) -> Vec<String>;

    /// Local gate: why this actor may not edit the record, if anything.
    /// UI gating only; the server still authorizes every mutation.
    fn edit_blocked(&self, _actor: &Actor) -> Option<AppError> {
        None
    }

    /// Local gate: why this actor may not delete the record, if anything.
    fn delete_blocked(&self, _actor: &Actor) -> Option<AppError> {
        None
    }
}

fn role_label(role: AdminRole) -> &'static str {
    match role {
        AdminRole::Admin => "admin",
        AdminRole::SuperAdmin => "super admin",
    }
}

impl Record for Admin {
    fn record_id(&self) -> &str {
        &self.id
    }

    fn display_name(&self) -> String {
        self.full_name()
    }

    fn facet(&self) -> String {
        format!("{:?}", self.status)
    }

    fn search_haystack(&self) -> Vec<String> {
        vec![
            self.full_name(),
            self.email.clone(),
            self.phone.clone(),
            role_label(self.role).to_string(),
            format!("{:?}", self.status),
            self.id.clone(),
        ]
    }

    fn edit_blocked(&self, actor: &Actor) -> Option<AppError> {
        if !self.editable_by(&actor.id) {
            Some(AppError::new(ErrorCode::CannotModifySuperAdmin))
        } else {
            None
        }
    }

    fn delete_blocked(&self, actor: &Actor) -> Option<AppError> {
        if self.id == actor.id {
            Some(AppError::new(ErrorCode::CannotDeleteSelf))
        } else if self.is_super_admin() {
            Some(AppError::new(ErrorCode::CannotModifySuperAdmin))
        } else {
            None
        }
    }
}

impl Record for Order {
    fn record_id(&self) -> &str {
        &self.id
    }

    fn display_name(&self) -> String {
        format!("Order {}", self.id)
    }

    fn facet(&self) -> String {
        serde_json::to_value(self.status)
            .ok()
            .and_then(|v| v.as_str().map(str::to_string))
            .unwrap_or_default()
    }

    fn search_haystack(&self) -> Vec<String> {
        vec![
            self.id.clone(),
            self.user.email.clone(),
            self.address.city.clone(),
            self.address.pincode.clone(),
            self.facet(),
        ]
    }
}

impl Record for Category {
    fn record_id(&self) -> &str {
        &self.id
    }

    fn display_name(&self) -> String {
        self.name.clone()
    }

    fn facet(&self) -> String {
        self.category_type.clone().unwrap_or_default()
    }

    fn search_haystack(&self) -> Vec<String> {
        vec![self.name.clone(), self.id.clone()]
    }
}

impl Record for Product {
    fn record_id(&self) -> &str {
        &self.id
    }

    fn display_name(&self) -> String {
        self.name.clone()
    }

    /// Products are faceted by category on the management screen
    fn facet(&self) -> String {
        self.category_id.clone()
    }

    fn search_haystack(&self) -> Vec<String> {
        vec![
            self.name.clone(),
            self.id.clone(),
            format!("{:?}", self.status),
        ]
    }
}

impl Record for Service {
    fn record_id(&self) -> &str {
        &self.id
    }

    fn display_name(&self) -> String {
        self.name.clone()
    }

    fn facet(&self) -> String {
        format!("{:?}", self.status)
    }

    fn search_haystack(&self) -> Vec<String> {
        vec![
            self.name.clone(),
            self.id.clone(),
            format!("{:?}", self.status),
        ]
    }
}

impl Record for Booking {
    fn record_id(&self) -> &str {
        &self.id
    }

    fn display_name(&self) -> String {
        format!("Booking {}", self.id)
    }

    fn facet(&self) -> String {
        self.status.clone()
    }

    fn search_haystack(&self) -> Vec<String> {
        vec![
            self.id.clone(),
            self.service_name.clone(),
            self.user_email.clone(),
            self.status.clone(),
        ]
    }
}

impl Record for Technician {
    fn record_id(&self) -> &str {
        &self.id
    }

    fn display_name(&self) -> String {
        self.name.clone()
    }

    fn facet(&self) -> String {
        format!("{:?}", self.status)
    }

    fn search_haystack(&self) -> Vec<String> {
        vec![self.name.clone(), self.phone.clone(), self.id.clone()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::models::AccountStatus;

    fn admin(id: &str, role: AdminRole) -> Admin {
        Admin {
            id: id.to_string(),
            first_name: "Grace".to_string(),
            last_name: "Hopper".to_string(),
            email: "grace@example.com".to_string(),
            phone: "555-0100".to_string(),
            role,
            status: AccountStatus::Active,
            is_verified: true,
            profile_image: None,
            created_at: None,
        }
    }

    fn actor(id: &str, role: AdminRole) -> Actor {
        Actor {
            id: id.to_string(),
            role,
        }
    }

    #[test]
    fn admin_haystack_covers_designated_fields() {
        let haystack = admin("a1", AdminRole::Admin).search_haystack();
        assert!(haystack.contains(&"Grace Hopper".to_string()));
        assert!(haystack.contains(&"grace@example.com".to_string()));
        assert!(haystack.contains(&"555-0100".to_string()));
        assert!(haystack.contains(&"admin".to_string()));
        assert!(haystack.contains(&"a1".to_string()));
    }

    #[test]
    fn super_admin_edit_blocked_for_others() {
        let target = admin("a1", AdminRole::SuperAdmin);
        assert!(target.edit_blocked(&actor("a2", AdminRole::Admin)).is_some());
        assert!(target.edit_blocked(&actor("a1", AdminRole::SuperAdmin)).is_none());
    }

    #[test]
    fn self_delete_blocked() {
        let target = admin("a1", AdminRole::Admin);
        let err = target.delete_blocked(&actor("a1", AdminRole::Admin)).unwrap();
        assert_eq!(err.code, ErrorCode::CannotDeleteSelf);
        assert!(target.delete_blocked(&actor("a2", AdminRole::Admin)).is_none());
    }

    #[test]
    fn order_facet_is_lowercase_status() {
        let order: Order = serde_json::from_value(serde_json::json!({
            "id": "o1",
            "user": { "id": "u1", "email": "u@example.com" },
            "total_amount": 10.0,
            "status": "confirmed"
        }))
        .unwrap();
        assert_eq!(order.facet(), "confirmed");
    }
}
