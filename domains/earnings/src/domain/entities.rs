//! Earnings domain entities

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A purchasable earning plan.
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct Plan {
    pub id: Uuid,
    pub name: String,
    /// Purchase price, deducted from the buyer's balance
    pub price: i64,
    /// Entitlement lifetime in days
    pub validity_days: i32,
    /// Balance credited per ad click
    pub per_click_reward: i64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// An ad unit users click to earn.
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct Work {
    pub id: Uuid,
    pub name: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// A per-(user, ad) cooldown grant.
///
/// Stores the signed cooldown token and a denormalized expiry so the
/// storage layer can evaluate liveness inside a single statement.
#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct ClickGrant {
    pub id: Uuid,
    pub user_id: Uuid,
    pub ad_id: Uuid,
    pub ad_name: String,
    pub token: String,
    pub expires_at: DateTime<Utc>,
    pub created_at: DateTime<Utc>,
}

/// An immutable earning-ledger row.
#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct Earning {
    pub id: Uuid,
    pub user_id: Uuid,
    pub label: String,
    pub amount: i64,
    pub created_at: DateTime<Utc>,
}

/// An immutable plan-purchase history row.
#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct Purchase {
    pub id: Uuid,
    pub user_id: Uuid,
    pub plan_name: String,
    pub amount: i64,
    pub created_at: DateTime<Utc>,
}

/// Cross-domain read of the columns the earnings flows touch on the
/// user row.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct EarnerProfile {
    pub id: Uuid,
    pub email: String,
    pub balance: i64,
    pub plan_id: Option<Uuid>,
    pub plan_token: Option<String>,
}
