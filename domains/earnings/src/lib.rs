//! Earnings domain: plans, ad units, cooldown grants, and balance credits

pub mod api;
pub mod domain;
pub mod repository;

// Re-export domain types at the crate root for convenience
pub use domain::entities::*;
pub use domain::entitlement::{self, Entitlement};
pub use domain::guard::{self, GrantState};
pub use domain::EarnError;

// Re-export repository types
pub use repository::{
    EarningHistoryRepository, EarningsRepositories, GrantRepository, PlanRepository,
    ProfileRepository, WorkRepository,
};

// Re-export API types
pub use api::routes;
pub use api::EarningsState;
