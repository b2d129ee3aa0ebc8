//! API layer for the Ledger domain
//!
//! Contains HTTP handlers, routes, and domain state definition.

pub mod handlers;
pub mod middleware;
pub mod routes;

pub use middleware::LedgerState;
pub use routes::routes;
