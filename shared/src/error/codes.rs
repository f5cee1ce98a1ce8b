//! Unified error codes for the admin console
//!
//! Error codes are organized by category:
//! - 0xxx: General errors
//! - 1xxx: Authentication errors
//! - 2xxx: Permission errors
//! - 3xxx: Catalog errors
//! - 4xxx: Order errors

use serde::{Deserialize, Serialize};
use std::fmt;

/// Unified error code enum
///
/// All error codes are represented as u16 values for efficient
/// serialization and cross-language compatibility with the dashboard
/// frontend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "u16", try_from = "u16")]
#[repr(u16)]
pub enum ErrorCode {
    // ==================== 0xxx: General ====================
    /// Operation completed successfully
    Success = 0,
    /// Unknown error
    Unknown = 1,
    /// Validation failed
    ValidationFailed = 2,
    /// Resource not found
    NotFound = 3,
    /// Resource already exists
    AlreadyExists = 4,
    /// Invalid request
    InvalidRequest = 5,
    /// Required field missing
    RequiredField = 6,
    /// Network or transport failure
    NetworkError = 7,

    // ==================== 1xxx: Auth ====================
    /// User is not authenticated
    NotAuthenticated = 1001,
    /// Invalid credentials (email/password)
    InvalidCredentials = 1002,
    /// Token has expired
    TokenExpired = 1003,
    /// Session has expired
    SessionExpired = 1004,

    // ==================== 2xxx: Permission ====================
    /// Permission denied
    PermissionDenied = 2001,
    /// Super admin role required
    SuperAdminRequired = 2002,
    /// Cannot modify a super admin account
    CannotModifySuperAdmin = 2003,
    /// Cannot delete your own account
    CannotDeleteSelf = 2004,

    // ==================== 3xxx: Catalog ====================
    /// Category is still referenced by products
    CategoryInUse = 3001,
    /// Image upload failed after the record was saved
    ImageUploadFailed = 3002,

    // ==================== 4xxx: Order ====================
    /// Requested order status transition is not allowed
    InvalidStatusTransition = 4001,
}

impl ErrorCode {
    /// Get the numeric code
    pub fn code(&self) -> u16 {
        *self as u16
    }

    /// Get the default human-readable message for this code
    pub fn message(&self) -> &'static str {
        match self {
            ErrorCode::Success => "Success",
            ErrorCode::Unknown => "Unknown error",
            ErrorCode::ValidationFailed => "Validation failed",
            ErrorCode::NotFound => "Resource not found",
            ErrorCode::AlreadyExists => "Resource already exists",
            ErrorCode::InvalidRequest => "Invalid request",
            ErrorCode::RequiredField => "Required field missing",
            ErrorCode::NetworkError => "Network error",
            ErrorCode::NotAuthenticated => "Not authenticated",
            ErrorCode::InvalidCredentials => "Invalid email or password",
            ErrorCode::TokenExpired => "Token has expired",
            ErrorCode::SessionExpired => "Session has expired",
            ErrorCode::PermissionDenied => "Permission denied",
            ErrorCode::SuperAdminRequired => "Super admin role required",
            ErrorCode::CannotModifySuperAdmin => {
                "Super admin accounts can only be modified by themselves"
            }
            ErrorCode::CannotDeleteSelf => "You cannot delete your own account",
            ErrorCode::CategoryInUse => "Category is still referenced by products",
            ErrorCode::ImageUploadFailed => "Image upload failed",
            ErrorCode::InvalidStatusTransition => "Status transition not allowed",
        }
    }

    /// Whether this code represents success
    pub fn is_success(&self) -> bool {
        matches!(self, ErrorCode::Success)
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.message(), self.code())
    }
}

impl From<ErrorCode> for u16 {
    fn from(code: ErrorCode) -> Self {
        code.code()
    }
}

impl TryFrom<u16> for ErrorCode {
    type Error = String;

    fn try_from(value: u16) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(ErrorCode::Success),
            1 => Ok(ErrorCode::Unknown),
            2 => Ok(ErrorCode::ValidationFailed),
            3 => Ok(ErrorCode::NotFound),
            4 => Ok(ErrorCode::AlreadyExists),
            5 => Ok(ErrorCode::InvalidRequest),
            6 => Ok(ErrorCode::RequiredField),
            7 => Ok(ErrorCode::NetworkError),
            1001 => Ok(ErrorCode::NotAuthenticated),
            1002 => Ok(ErrorCode::InvalidCredentials),
            1003 => Ok(ErrorCode::TokenExpired),
            1004 => Ok(ErrorCode::SessionExpired),
            2001 => Ok(ErrorCode::PermissionDenied),
            2002 => Ok(ErrorCode::SuperAdminRequired),
            2003 => Ok(ErrorCode::CannotModifySuperAdmin),
            2004 => Ok(ErrorCode::CannotDeleteSelf),
            3001 => Ok(ErrorCode::CategoryInUse),
            3002 => Ok(ErrorCode::ImageUploadFailed),
            4001 => Ok(ErrorCode::InvalidStatusTransition),
            _ => Err(format!("Unknown error code: {}", value)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn code_roundtrip_via_u16() {
        let codes = [
            ErrorCode::Success,
            ErrorCode::ValidationFailed,
            ErrorCode::NotAuthenticated,
            ErrorCode::CannotDeleteSelf,
            ErrorCode::CategoryInUse,
            ErrorCode::InvalidStatusTransition,
        ];
        for code in codes {
            let n: u16 = code.into();
            assert_eq!(ErrorCode::try_from(n).unwrap(), code);
        }
    }

    #[test]
    fn unknown_numeric_code_is_rejected() {
        assert!(ErrorCode::try_from(65535).is_err());
    }

    #[test]
    fn serializes_as_number() {
        let json = serde_json::to_string(&ErrorCode::PermissionDenied).unwrap();
        assert_eq!(json, "2001");
    }
}
