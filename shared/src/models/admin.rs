//! Admin Model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Admin role
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AdminRole {
    #[serde(rename = "admin")]
    Admin,
    #[serde(rename = "super admin")]
    SuperAdmin,
}

/// Account lifecycle status (soft delete: status flip, never removal)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AccountStatus {
    Active,
    Inactive,
    Deleted,
}

/// Admin account entity
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Admin {
    pub id: String,
    #[serde(alias = "firstName")]
    pub first_name: String,
    #[serde(alias = "lastName", default)]
    pub last_name: String,
    pub email: String,
    #[serde(default)]
    pub phone: String,
    pub role: AdminRole,
    pub status: AccountStatus,
    #[serde(alias = "isVerified", default)]
    pub is_verified: bool,
    #[serde(alias = "profileImage", default)]
    pub profile_image: Option<String>,
    #[serde(alias = "createdAt", default)]
    pub created_at: Option<DateTime<Utc>>,
}

impl Admin {
    /// Combined display name
    pub fn full_name(&self) -> String {
        if self.last_name.is_empty() {
            self.first_name.clone()
        } else {
            format!("{} {}", self.first_name, self.last_name)
        }
    }

    pub fn is_super_admin(&self) -> bool {
        self.role == AdminRole::SuperAdmin
    }

    /// A super admin account may only be edited by itself.
    pub fn editable_by(&self, actor_id: &str) -> bool {
        !self.is_super_admin() || self.id == actor_id
    }

    /// A super admin may only be deleted by itself, and no actor may
    /// delete its own account, so super admins are never deletable.
    pub fn deletable_by(&self, actor_id: &str) -> bool {
        if self.id == actor_id {
            return false;
        }
        !self.is_super_admin()
    }
}

/// Create admin payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AdminCreate {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: Option<String>,
    pub role: AdminRole,
    pub password: String,
}

/// Update admin payload
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AdminUpdate {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub role: Option<AdminRole>,
    pub status: Option<AccountStatus>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn admin(id: &str, role: AdminRole) -> Admin {
        Admin {
            id: id.to_string(),
            first_name: "Ada".to_string(),
            last_name: "Lovelace".to_string(),
            email: "ada@example.com".to_string(),
            phone: String::new(),
            role,
            status: AccountStatus::Active,
            is_verified: true,
            profile_image: None,
            created_at: None,
        }
    }

    #[test]
    fn super_admin_only_editable_by_itself() {
        let target = admin("a1", AdminRole::SuperAdmin);
        assert!(target.editable_by("a1"));
        assert!(!target.editable_by("a2"));
    }

    #[test]
    fn no_one_deletes_their_own_account() {
        let target = admin("a1", AdminRole::Admin);
        assert!(!target.deletable_by("a1"));
        assert!(target.deletable_by("a2"));
    }

    #[test]
    fn super_admin_is_never_deletable() {
        let target = admin("a1", AdminRole::SuperAdmin);
        assert!(!target.deletable_by("a1"));
        assert!(!target.deletable_by("a2"));
    }

    #[test]
    fn role_serializes_with_space() {
        let json = serde_json::to_string(&AdminRole::SuperAdmin).unwrap();
        assert_eq!(json, "\"super admin\"");
    }

    #[test]
    fn camel_case_aliases_accepted() {
        let json = r#"{
            "id": "a1",
            "firstName": "Ada",
            "lastName": "Lovelace",
            "email": "ada@example.com",
            "role": "admin",
            "status": "Active",
            "isVerified": true
        }"#;
        let parsed: Admin = serde_json::from_str(json).unwrap();
        assert_eq!(parsed.full_name(), "Ada Lovelace");
        assert!(parsed.is_verified);
    }
}
