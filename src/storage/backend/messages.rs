//! Contact message persistence

use sea_orm::{ActiveModelTrait, EntityTrait, PaginatorTrait, QueryOrder};
use tracing::info;

use super::SeaOrmStorage;
use super::converters::{model_to_message, new_message_to_active_model};
use crate::errors::{LinkgateError, Result};
use crate::storage::models::{ContactMessage, NewContactMessage};

use migration::entities::contact_message;

impl SeaOrmStorage {
    pub async fn insert_message(&self, message: NewContactMessage) -> Result<ContactMessage> {
        let model = new_message_to_active_model(message)
            .insert(&self.db)
            .await
            .map_err(|e| {
                LinkgateError::database_operation(format!("Failed to store message: {}", e))
            })?;

        info!("Contact message stored: #{} from {}", model.id, model.email);
        Ok(model_to_message(model))
    }

    /// 最新的留言在前
    pub async fn load_messages(&self) -> Result<Vec<ContactMessage>> {
        let models = contact_message::Entity::find()
            .order_by_desc(contact_message::Column::CreatedAt)
            .order_by_desc(contact_message::Column::Id)
            .all(&self.db)
            .await
            .map_err(|e| {
                LinkgateError::database_operation(format!("Failed to list messages: {}", e))
            })?;

        Ok(models.into_iter().map(model_to_message).collect())
    }

    pub async fn remove_message(&self, id: i32) -> Result<()> {
        let result = contact_message::Entity::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(|e| {
                LinkgateError::database_operation(format!("Failed to delete message #{}: {}", id, e))
            })?;

        if result.rows_affected == 0 {
            return Err(LinkgateError::not_found(format!("Message #{} not found", id)));
        }

        info!("Contact message deleted: #{}", id);
        Ok(())
    }

    pub async fn message_count(&self) -> Result<u64> {
        contact_message::Entity::find()
            .count(&self.db)
            .await
            .map_err(|e| LinkgateError::database_operation(format!("Failed to count messages: {}", e)))
    }
}
