//! Plan repository

use crate::domain::entities::Plan;
use adperk_common::Result;
use sqlx::PgPool;
use uuid::Uuid;

const PLAN_COLUMNS: &str = "id, name, price, validity_days, per_click_reward, created_at, updated_at";

/// Fields required to insert a plan.
pub struct NewPlan {
    pub name: String,
    pub price: i64,
    pub validity_days: i32,
    pub per_click_reward: i64,
}

#[derive(Clone)]
pub struct PlanRepository {
    pool: PgPool,
}

impl PlanRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn create(&self, new_plan: NewPlan) -> Result<Plan> {
        let plan: Plan = sqlx::query_as(&format!(
            r#"
            INSERT INTO plans (id, name, price, validity_days, per_click_reward, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, NOW(), NOW())
            RETURNING {PLAN_COLUMNS}
            "#
        ))
        .bind(Uuid::new_v4())
        .bind(&new_plan.name)
        .bind(new_plan.price)
        .bind(new_plan.validity_days)
        .bind(new_plan.per_click_reward)
        .fetch_one(&self.pool)
        .await?;

        Ok(plan)
    }

    pub async fn get_by_id(&self, id: Uuid) -> Result<Option<Plan>> {
        let plan: Option<Plan> =
            sqlx::query_as(&format!("SELECT {PLAN_COLUMNS} FROM plans WHERE id = $1"))
                .bind(id)
                .fetch_optional(&self.pool)
                .await?;

        Ok(plan)
    }

    pub async fn list_all(&self) -> Result<Vec<Plan>> {
        let plans: Vec<Plan> = sqlx::query_as(&format!(
            "SELECT {PLAN_COLUMNS} FROM plans ORDER BY price ASC"
        ))
        .fetch_all(&self.pool)
        .await?;

        Ok(plans)
    }

    pub async fn update(&self, id: Uuid, changes: NewPlan) -> Result<Option<Plan>> {
        let plan: Option<Plan> = sqlx::query_as(&format!(
            r#"
            UPDATE plans SET
                name = $2,
                price = $3,
                validity_days = $4,
                per_click_reward = $5,
                updated_at = NOW()
            WHERE id = $1
            RETURNING {PLAN_COLUMNS}
            "#
        ))
        .bind(id)
        .bind(&changes.name)
        .bind(changes.price)
        .bind(changes.validity_days)
        .bind(changes.per_click_reward)
        .fetch_optional(&self.pool)
        .await?;

        Ok(plan)
    }

    pub async fn delete(&self, id: Uuid) -> Result<Option<Plan>> {
        let plan: Option<Plan> = sqlx::query_as(&format!(
            "DELETE FROM plans WHERE id = $1 RETURNING {PLAN_COLUMNS}"
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(plan)
    }
}
