//! Contact inbox
//!
//! Visitors leave a message through the public form; admins read and delete
//! them from the stats view.

use std::sync::Arc;

use chrono::Utc;
use serde::Deserialize;
use tracing::info;

use crate::errors::{LinkgateError, Result};
use crate::storage::{ContactMessage, LinkStore, NewContactMessage};

const MAX_NAME_LENGTH: usize = 100;
const MAX_EMAIL_LENGTH: usize = 254;
const MAX_SUBJECT_LENGTH: usize = 200;
const MAX_MESSAGE_LENGTH: usize = 5000;

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ContactRequest {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub subject: String,
    #[serde(default)]
    pub message: String,
}

impl ContactRequest {
    /// 校验并去除首尾空白
    fn into_new_message(self) -> Result<NewContactMessage> {
        let name = required("name", &self.name, MAX_NAME_LENGTH)?;
        let email = required("email", &self.email, MAX_EMAIL_LENGTH)?;
        let message = required("message", &self.message, MAX_MESSAGE_LENGTH)?;

        if !email.contains('@') {
            return Err(LinkgateError::invalid_input("Invalid email address"));
        }

        let subject = self.subject.trim();
        if subject.chars().count() > MAX_SUBJECT_LENGTH {
            return Err(LinkgateError::invalid_input("subject is too long"));
        }

        Ok(NewContactMessage {
            name,
            email,
            subject: subject.to_string(),
            message,
            created_at: Utc::now(),
        })
    }
}

fn required(field: &str, value: &str, max_len: usize) -> Result<String> {
    let value = value.trim();
    if value.is_empty() {
        return Err(LinkgateError::invalid_input(format!("{} is required", field)));
    }
    if value.chars().count() > max_len {
        return Err(LinkgateError::invalid_input(format!("{} is too long", field)));
    }
    Ok(value.to_string())
}

pub struct ContactService {
    store: Arc<dyn LinkStore>,
}

impl ContactService {
    pub fn new(store: Arc<dyn LinkStore>) -> Self {
        Self { store }
    }

    pub async fn submit(&self, req: ContactRequest) -> Result<ContactMessage> {
        let message = self.store.create_message(req.into_new_message()?).await?;
        info!("ContactService: message #{} received from {}", message.id, message.email);
        Ok(message)
    }

    pub async fn list(&self) -> Result<Vec<ContactMessage>> {
        self.store.list_messages().await
    }

    pub async fn delete(&self, id: i32) -> Result<()> {
        self.store.delete_message(id).await
    }

    pub async fn count(&self) -> Result<u64> {
        self.store.count_messages().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request() -> ContactRequest {
        ContactRequest {
            name: " Ada ".to_string(),
            email: "ada@example.com".to_string(),
            subject: String::new(),
            message: "Hello there".to_string(),
        }
    }

    #[test]
    fn test_valid_request_is_trimmed() {
        let message = request().into_new_message().unwrap();
        assert_eq!(message.name, "Ada");
        assert_eq!(message.subject, "");
    }

    #[test]
    fn test_missing_fields() {
        for req in [
            ContactRequest { name: "  ".into(), ..request() },
            ContactRequest { email: String::new(), ..request() },
            ContactRequest { message: String::new(), ..request() },
        ] {
            assert!(matches!(req.into_new_message(), Err(LinkgateError::InvalidInput(_))));
        }
    }

    #[test]
    fn test_invalid_email() {
        let req = ContactRequest {
            email: "not-an-email".to_string(),
            ..request()
        };
        assert!(matches!(req.into_new_message(), Err(LinkgateError::InvalidInput(_))));
    }
}
