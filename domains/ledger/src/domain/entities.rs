//! Ledger domain entities

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Settlement state of a deposit or cash-out request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "ledger_status", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum LedgerStatus {
    Pending,
    Success,
    Rejected,
}

impl LedgerStatus {
    /// Settlement is a one-way transition out of `Pending`; settled
    /// requests never move again.
    pub fn settleable(&self) -> bool {
        matches!(self, LedgerStatus::Pending)
    }
}

/// A user's request to withdraw balance. Settled by an admin; the
/// balance debit happens at settlement, not at request time.
#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct CashOut {
    pub id: Uuid,
    pub user_id: Uuid,
    pub amount: i64,
    pub method: String,
    pub account_number: String,
    pub note: Option<String>,
    pub status: LedgerStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// A user's claim of an external payment. Credited to the balance when
/// an admin confirms it.
#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct Deposit {
    pub id: Uuid,
    pub user_id: Uuid,
    pub amount: i64,
    pub transaction_id: String,
    pub phone: String,
    pub method: String,
    pub status: LedgerStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_settlement_only_moves_out_of_pending() {
        assert!(LedgerStatus::Pending.settleable());
        assert!(!LedgerStatus::Success.settleable());
        assert!(!LedgerStatus::Rejected.settleable());
    }
}
