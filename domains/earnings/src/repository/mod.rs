//! Repository implementations for the Earnings domain

pub mod grants;
pub mod history;
pub mod plans;
pub mod profiles;
pub mod transactions;
pub mod works;

use sqlx::PgPool;

pub use grants::GrantRepository;
pub use history::EarningHistoryRepository;
pub use plans::PlanRepository;
pub use profiles::ProfileRepository;
pub use works::WorkRepository;

/// Combined repository access for the Earnings domain
#[derive(Clone)]
pub struct EarningsRepositories {
    pub plans: PlanRepository,
    pub works: WorkRepository,
    pub grants: GrantRepository,
    pub history: EarningHistoryRepository,
    pub profiles: ProfileRepository,
    pool: PgPool,
}

impl EarningsRepositories {
    pub fn new(pool: PgPool) -> Self {
        Self {
            plans: PlanRepository::new(pool.clone()),
            works: WorkRepository::new(pool.clone()),
            grants: GrantRepository::new(pool.clone()),
            history: EarningHistoryRepository::new(pool.clone()),
            profiles: ProfileRepository::new(pool.clone()),
            pool,
        }
    }

    /// Begin a transaction for multi-write sequences
    pub async fn begin(&self) -> Result<sqlx::Transaction<'_, sqlx::Postgres>, sqlx::Error> {
        self.pool.begin().await
    }
}
