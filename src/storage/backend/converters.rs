use crate::storage::models::{ContactMessage, NewContactMessage, NewShortLink, ShortLink};
use migration::entities::{contact_message, short_link};

/// 将 Sea-ORM Model 转换为 ShortLink
pub fn model_to_shortlink(model: short_link::Model) -> ShortLink {
    ShortLink {
        id: model.id,
        hash: model.hash,
        original_url: model.original_url,
        password_hash: model.password_hash.filter(|h| !h.is_empty()),
        expires_at: model.expires_at,
        clicks: model.clicks.max(0),
        created_at: model.created_at,
    }
}

/// 新链接的 ActiveModel：id 由数据库分配，点击数从 0 开始
pub fn new_shortlink_to_active_model(link: NewShortLink) -> short_link::ActiveModel {
    use sea_orm::ActiveValue::*;

    short_link::ActiveModel {
        id: NotSet,
        hash: Set(link.hash),
        original_url: Set(link.original_url),
        password_hash: Set(link.password_hash),
        expires_at: Set(link.expires_at),
        clicks: Set(0),
        created_at: Set(link.created_at),
    }
}

pub fn model_to_message(model: contact_message::Model) -> ContactMessage {
    ContactMessage {
        id: model.id,
        name: model.name,
        email: model.email,
        subject: model.subject,
        message: model.message,
        created_at: model.created_at,
    }
}

pub fn new_message_to_active_model(message: NewContactMessage) -> contact_message::ActiveModel {
    use sea_orm::ActiveValue::*;

    contact_message::ActiveModel {
        id: NotSet,
        name: Set(message.name),
        email: Set(message.email),
        subject: Set(message.subject),
        message: Set(message.message),
        created_at: Set(message.created_at),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, Utc};
    use sea_orm::ActiveValue;

    fn create_test_model() -> short_link::Model {
        short_link::Model {
            id: 7,
            hash: "abc123".to_string(),
            original_url: "https://example.com".to_string(),
            password_hash: Some("$argon2id$hashed".to_string()),
            expires_at: Some(Utc::now() + Duration::days(7)),
            clicks: 42,
            created_at: Utc::now(),
        }
    }

    #[test]
    fn test_model_to_shortlink_basic() {
        let model = create_test_model();
        let link = model_to_shortlink(model.clone());

        assert_eq!(link.id, 7);
        assert_eq!(link.hash, model.hash);
        assert_eq!(link.original_url, model.original_url);
        assert_eq!(link.clicks, 42);
        assert!(link.is_protected());
    }

    #[test]
    fn test_model_to_shortlink_normalizes_empty_password_and_negative_clicks() {
        let model = short_link::Model {
            password_hash: Some(String::new()),
            clicks: -3,
            ..create_test_model()
        };

        let link = model_to_shortlink(model);

        assert!(link.password_hash.is_none());
        assert_eq!(link.clicks, 0);
    }

    #[test]
    fn test_new_shortlink_to_active_model() {
        let new_link = NewShortLink {
            hash: "xyz789".to_string(),
            original_url: "https://target.com".to_string(),
            password_hash: None,
            expires_at: None,
            created_at: Utc::now(),
        };

        let active = new_shortlink_to_active_model(new_link);

        assert!(matches!(active.id, ActiveValue::NotSet));
        assert_eq!(active.hash, ActiveValue::Set("xyz789".to_string()));
        assert_eq!(active.clicks, ActiveValue::Set(0));
        assert_eq!(active.password_hash, ActiveValue::Set(None));
    }

    #[test]
    fn test_model_to_message() {
        let now = Utc::now();
        let message = model_to_message(contact_message::Model {
            id: 3,
            name: "Ada".to_string(),
            email: "ada@example.com".to_string(),
            subject: String::new(),
            message: "Hello".to_string(),
            created_at: now,
        });

        assert_eq!(message.id, 3);
        assert_eq!(message.email, "ada@example.com");
        assert_eq!(message.created_at, now);
    }
}
