//! Mock Email Service Implementation
//!
//! In-memory email capture for testing without external dependencies.
//! Tests use it to assert on activation/reset mail content.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use chrono::{DateTime, Utc};

use crate::{EmailError, EmailMessage, EmailReceipt, EmailService};

/// Email captured by the mock service
#[derive(Debug, Clone)]
pub struct CapturedEmail {
    pub message: EmailMessage,
    pub receipt: EmailReceipt,
    pub captured_at: DateTime<Utc>,
}

/// Mock email service for testing
#[derive(Debug, Clone, Default)]
pub struct MockEmailService {
    emails: Arc<Mutex<Vec<CapturedEmail>>>,
}

impl MockEmailService {
    /// Create a new mock email service
    pub fn new() -> Self {
        Self::default()
    }

    /// Get all captured emails
    pub fn get_all_emails(&self) -> Vec<CapturedEmail> {
        self.emails.lock().unwrap().clone()
    }

    /// Get emails sent to a specific recipient
    pub fn get_emails_for_recipient(&self, email: &str) -> Vec<CapturedEmail> {
        self.emails
            .lock()
            .unwrap()
            .iter()
            .filter(|e| e.message.to == email)
            .cloned()
            .collect()
    }

    /// Clear all captured emails
    pub fn clear(&self) {
        self.emails.lock().unwrap().clear();
    }
}

#[async_trait::async_trait]
impl EmailService for MockEmailService {
    async fn send_email(&self, message: EmailMessage) -> Result<EmailReceipt, EmailError> {
        let receipt = EmailReceipt {
            message_id: format!("mock-{}", self.emails.lock().unwrap().len() + 1),
            sent_at: Utc::now(),
            provider: "mock".to_string(),
            metadata: HashMap::new(),
        };

        tracing::debug!(to = %message.to, subject = %message.subject, "Mock email captured");

        self.emails.lock().unwrap().push(CapturedEmail {
            message,
            receipt: receipt.clone(),
            captured_at: Utc::now(),
        });

        Ok(receipt)
    }

    fn default_from(&self) -> String {
        "no-reply@adperk.test".to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_mock_captures_and_filters_by_recipient() {
        let service = MockEmailService::new();

        service
            .send_email(EmailMessage::new(
                "a@example.com".to_string(),
                service.default_from(),
                "One".to_string(),
                "body".to_string(),
            ))
            .await
            .unwrap();
        service
            .send_email(EmailMessage::new(
                "b@example.com".to_string(),
                service.default_from(),
                "Two".to_string(),
                "body".to_string(),
            ))
            .await
            .unwrap();

        assert_eq!(service.get_all_emails().len(), 2);
        let for_a = service.get_emails_for_recipient("a@example.com");
        assert_eq!(for_a.len(), 1);
        assert_eq!(for_a[0].message.subject, "One");

        service.clear();
        assert!(service.get_all_emails().is_empty());
    }
}
