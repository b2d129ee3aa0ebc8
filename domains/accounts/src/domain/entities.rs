//! Accounts domain entities

use adperk_auth::UserRole;
use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

/// Full user row.
///
/// `pending_token` is the one-time capability marker: set when a
/// verification or reset token is issued, compared and cleared at
/// redemption so a consumed token cannot be replayed before its
/// natural expiry.
#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct User {
    pub id: Uuid,
    pub name: String,
    pub user_name: String,
    pub email: String,
    #[serde(skip_serializing)]
    pub password_hash: String,
    pub role: UserRole,
    pub verified: bool,
    pub balance: i64,
    pub mobile: Option<String>,
    pub address: Option<String>,
    pub photo: Option<String>,
    #[serde(skip_serializing)]
    pub pending_token: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Referral commission row created when a referred user registers.
#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct Commission {
    pub id: Uuid,
    /// Referrer's user name
    pub reference: String,
    /// Newly registered user's user name
    pub new_user: String,
    pub commission: i64,
    pub status: CommissionStatus,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, serde::Deserialize, sqlx::Type)]
#[sqlx(type_name = "commission_status", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum CommissionStatus {
    Pending,
    Paid,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_serialization_excludes_secrets() {
        let user = User {
            id: Uuid::new_v4(),
            name: "Test".to_string(),
            user_name: "test".to_string(),
            email: "test@example.com".to_string(),
            password_hash: "$argon2id$secret".to_string(),
            role: UserRole::User,
            verified: true,
            balance: 0,
            mobile: None,
            address: None,
            photo: None,
            pending_token: Some("tok".to_string()),
            created_at: Utc::now(),
            updated_at: Utc::now(),
        };

        let json = serde_json::to_string(&user).unwrap();
        assert!(!json.contains("argon2id"));
        assert!(!json.contains("pending_token"));
        assert!(json.contains("test@example.com"));
    }
}
