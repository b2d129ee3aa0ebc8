//! API layer for the Earnings domain
//!
//! Contains HTTP handlers, routes, and domain state definition.

pub mod handlers;
pub mod middleware;
pub mod routes;

pub use middleware::EarningsState;
pub use routes::routes;
