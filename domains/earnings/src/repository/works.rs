//! Ad unit (work) repository

use crate::domain::entities::Work;
use adperk_common::Result;
use sqlx::PgPool;
use uuid::Uuid;

#[derive(Clone)]
pub struct WorkRepository {
    pool: PgPool,
}

impl WorkRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn create(&self, name: &str) -> Result<Work> {
        let work: Work = sqlx::query_as(
            r#"
            INSERT INTO works (id, name, created_at, updated_at)
            VALUES ($1, $2, NOW(), NOW())
            RETURNING id, name, created_at, updated_at
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(name)
        .fetch_one(&self.pool)
        .await?;

        Ok(work)
    }

    pub async fn get_by_id(&self, id: Uuid) -> Result<Option<Work>> {
        let work: Option<Work> =
            sqlx::query_as("SELECT id, name, created_at, updated_at FROM works WHERE id = $1")
                .bind(id)
                .fetch_optional(&self.pool)
                .await?;

        Ok(work)
    }

    pub async fn list_all(&self) -> Result<Vec<Work>> {
        let works: Vec<Work> = sqlx::query_as(
            "SELECT id, name, created_at, updated_at FROM works ORDER BY created_at DESC",
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(works)
    }

    pub async fn update(&self, id: Uuid, name: &str) -> Result<Option<Work>> {
        let work: Option<Work> = sqlx::query_as(
            r#"
            UPDATE works SET name = $2, updated_at = NOW()
            WHERE id = $1
            RETURNING id, name, created_at, updated_at
            "#,
        )
        .bind(id)
        .bind(name)
        .fetch_optional(&self.pool)
        .await?;

        Ok(work)
    }

    pub async fn delete(&self, id: Uuid) -> Result<Option<Work>> {
        let work: Option<Work> = sqlx::query_as(
            "DELETE FROM works WHERE id = $1 RETURNING id, name, created_at, updated_at",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(work)
    }
}
