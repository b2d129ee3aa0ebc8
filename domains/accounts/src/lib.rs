//! Accounts domain: users, registration, login, email verification, password reset

pub mod api;
pub mod domain;
pub mod repository;

// Re-export domain types at the crate root for convenience
pub use domain::capability::{CapabilityIssuer, ResetIssue, VerificationIssue};
pub use domain::entities::*;

// Re-export repository types
pub use repository::{AccountsRepositories, CommissionRepository, UserRepository};

// Re-export API types
pub use api::routes;
pub use api::AccountsState;
