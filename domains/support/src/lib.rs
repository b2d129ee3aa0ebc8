//! Support domain: user tickets and admin status updates

pub mod api;
pub mod domain;
pub mod repository;

// Re-export domain types at the crate root for convenience
pub use domain::entities::*;

// Re-export repository types
pub use repository::{SupportRepositories, TicketRepository};

// Re-export API types
pub use api::routes;
pub use api::SupportState;
