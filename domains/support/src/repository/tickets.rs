//! Support ticket repository

use crate::domain::entities::{Ticket, TicketPriority, TicketStatus};
use adperk_common::Result;
use sqlx::PgPool;
use uuid::Uuid;

const TICKET_COLUMNS: &str =
    "id, user_id, name, email, subject, priority, message, status, created_at, updated_at";

/// Fields required to insert a ticket.
pub struct NewTicket {
    pub user_id: Uuid,
    pub name: String,
    pub email: String,
    pub subject: String,
    pub priority: TicketPriority,
    pub message: String,
}

#[derive(Clone)]
pub struct TicketRepository {
    pool: PgPool,
}

impl TicketRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn create(&self, new_ticket: NewTicket) -> Result<Ticket> {
        let ticket: Ticket = sqlx::query_as(&format!(
            r#"
            INSERT INTO support_tickets (id, user_id, name, email, subject, priority, message,
                                         status, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, 'pending', NOW(), NOW())
            RETURNING {TICKET_COLUMNS}
            "#
        ))
        .bind(Uuid::new_v4())
        .bind(new_ticket.user_id)
        .bind(&new_ticket.name)
        .bind(&new_ticket.email)
        .bind(&new_ticket.subject)
        .bind(new_ticket.priority)
        .bind(&new_ticket.message)
        .fetch_one(&self.pool)
        .await?;

        Ok(ticket)
    }

    pub async fn get_by_id(&self, id: Uuid) -> Result<Option<Ticket>> {
        let ticket: Option<Ticket> = sqlx::query_as(&format!(
            "SELECT {TICKET_COLUMNS} FROM support_tickets WHERE id = $1"
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(ticket)
    }

    pub async fn list_all(&self) -> Result<Vec<Ticket>> {
        let tickets: Vec<Ticket> = sqlx::query_as(&format!(
            "SELECT {TICKET_COLUMNS} FROM support_tickets ORDER BY created_at DESC"
        ))
        .fetch_all(&self.pool)
        .await?;

        Ok(tickets)
    }

    pub async fn list_for_user(&self, user_id: Uuid) -> Result<Vec<Ticket>> {
        let tickets: Vec<Ticket> = sqlx::query_as(&format!(
            "SELECT {TICKET_COLUMNS} FROM support_tickets WHERE user_id = $1 ORDER BY created_at DESC"
        ))
        .bind(user_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(tickets)
    }

    pub async fn set_status(&self, id: Uuid, status: TicketStatus) -> Result<Option<Ticket>> {
        let ticket: Option<Ticket> = sqlx::query_as(&format!(
            r#"
            UPDATE support_tickets SET status = $2, updated_at = NOW()
            WHERE id = $1
            RETURNING {TICKET_COLUMNS}
            "#
        ))
        .bind(id)
        .bind(status)
        .fetch_optional(&self.pool)
        .await?;

        Ok(ticket)
    }
}
