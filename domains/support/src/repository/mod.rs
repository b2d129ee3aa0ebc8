//! Repository implementations for the Support domain

pub mod tickets;

use sqlx::PgPool;

pub use tickets::TicketRepository;

/// Combined repository access for the Support domain
#[derive(Clone)]
pub struct SupportRepositories {
    pub tickets: TicketRepository,
}

impl SupportRepositories {
    pub fn new(pool: PgPool) -> Self {
        Self {
            tickets: TicketRepository::new(pool),
        }
    }
}
