//! Repository implementations for the Accounts domain

pub mod commissions;
pub mod users;

use sqlx::PgPool;

pub use commissions::CommissionRepository;
pub use users::UserRepository;

/// Combined repository access for the Accounts domain
#[derive(Clone)]
pub struct AccountsRepositories {
    pub users: UserRepository,
    pub commissions: CommissionRepository,
}

impl AccountsRepositories {
    pub fn new(pool: PgPool) -> Self {
        Self {
            users: UserRepository::new(pool.clone()),
            commissions: CommissionRepository::new(pool),
        }
    }
}
