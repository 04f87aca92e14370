//! User-facing identity types consumed by the booking engine.
//!
//! Authentication itself is an external collaborator; the engine only sees
//! the authenticated user's id and role, plus a limited owner projection
//! when bookings are read back with their owner.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Role of the requesting user
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UserRole {
    /// A regular hotel guest; may only touch their own bookings
    Guest,
    /// Hotel staff with override read/write access to all bookings
    Manager,
    /// Full administrative access
    Admin,
}

impl UserRole {
    /// Whether this role may read or modify bookings it does not own
    pub fn can_access_any_booking(&self) -> bool {
        matches!(self, UserRole::Manager | UserRole::Admin)
    }

    /// String form used in token claims and the database
    pub fn as_str(&self) -> &'static str {
        match self {
            UserRole::Guest => "guest",
            UserRole::Manager => "manager",
            UserRole::Admin => "admin",
        }
    }
}

impl std::str::FromStr for UserRole {
    type Err = crate::errors::DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "guest" => Ok(UserRole::Guest),
            "manager" => Ok(UserRole::Manager),
            "admin" => Ok(UserRole::Admin),
            other => Err(crate::errors::DomainError::validation(format!(
                "Invalid user role: {}",
                other
            ))),
        }
    }
}

/// Identity context for the current request, supplied by the auth layer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Requester {
    /// Authenticated user id
    pub user_id: Uuid,
    /// Authenticated user role
    pub role: UserRole,
}

impl Requester {
    /// Creates a new requester context
    pub fn new(user_id: Uuid, role: UserRole) -> Self {
        Self { user_id, role }
    }
}

/// Limited owner fields exposed on joined booking reads
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookingOwner {
    /// Owner's first name
    pub first_name: String,
    /// Owner's last name
    pub last_name: String,
    /// Owner's email address
    pub email: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_override_access() {
        assert!(!UserRole::Guest.can_access_any_booking());
        assert!(UserRole::Manager.can_access_any_booking());
        assert!(UserRole::Admin.can_access_any_booking());
    }

    #[test]
    fn test_role_serialization() {
        let json = serde_json::to_string(&UserRole::Manager).unwrap();
        assert_eq!(json, "\"manager\"");
        let role: UserRole = serde_json::from_str("\"admin\"").unwrap();
        assert_eq!(role, UserRole::Admin);
    }
}
