//! Repository implementations for the Ledger domain

pub mod cash_outs;
pub mod deposits;
pub mod transactions;

use sqlx::PgPool;

pub use cash_outs::CashOutRepository;
pub use deposits::DepositRepository;

/// Combined repository access for the Ledger domain
#[derive(Clone)]
pub struct LedgerRepositories {
    pub cash_outs: CashOutRepository,
    pub deposits: DepositRepository,
    pool: PgPool,
}

impl LedgerRepositories {
    pub fn new(pool: PgPool) -> Self {
        Self {
            cash_outs: CashOutRepository::new(pool.clone()),
            deposits: DepositRepository::new(pool.clone()),
            pool,
        }
    }

    /// Begin a transaction for settlement sequences
    pub async fn begin(&self) -> Result<sqlx::Transaction<'_, sqlx::Postgres>, sqlx::Error> {
        self.pool.begin().await
    }
}
