//! Authorization context for authenticated requests

use crate::types::{AuthIdentity, UserRole};

/// Represents an authenticated user context
#[derive(Debug, Clone)]
pub struct AuthContext {
    pub user: AuthIdentity,
}

impl AuthContext {
    pub fn new(user: AuthIdentity) -> Self {
        Self { user }
    }

    /// Check if the authenticated user holds the admin role
    pub fn is_admin(&self) -> bool {
        self.user.role == UserRole::Admin
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use uuid::Uuid;

    fn identity(role: UserRole) -> AuthIdentity {
        AuthIdentity {
            id: Uuid::new_v4(),
            name: "Test User".to_string(),
            user_name: "test-user".to_string(),
            email: "test@example.com".to_string(),
            role,
            verified: true,
            balance: 0,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn test_is_admin() {
        assert!(AuthContext::new(identity(UserRole::Admin)).is_admin());
        assert!(!AuthContext::new(identity(UserRole::User)).is_admin());
    }
}
