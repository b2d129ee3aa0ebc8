//! Ledger domain: deposits and cash-out requests with admin settlement

pub mod api;
pub mod domain;
pub mod repository;

// Re-export domain types at the crate root for convenience
pub use domain::entities::*;

// Re-export repository types
pub use repository::{CashOutRepository, DepositRepository, LedgerRepositories};

// Re-export API types
pub use api::routes;
pub use api::LedgerState;
