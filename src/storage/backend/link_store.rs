use async_trait::async_trait;

use super::SeaOrmStorage;
use crate::errors::Result;
use crate::storage::LinkStore;
use crate::storage::models::{
    ContactMessage, LinkFilter, LinkStats, NewContactMessage, NewShortLink, ShortLink,
};

#[async_trait]
impl LinkStore for SeaOrmStorage {
    async fn find_by_hash(&self, hash: &str) -> Result<Option<ShortLink>> {
        self.get_by_hash(hash).await
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<ShortLink>> {
        self.get_by_id(id).await
    }

    async fn create(&self, link: NewShortLink) -> Result<ShortLink> {
        self.insert_link(link).await
    }

    async fn increment_clicks(&self, id: i32) -> Result<()> {
        self.increment_click(id).await
    }

    async fn update(&self, id: i32, original_url: &str, hash: &str) -> Result<ShortLink> {
        self.update_link(id, original_url, hash).await
    }

    async fn delete(&self, id: i32) -> Result<()> {
        self.delete_link(id).await
    }

    async fn list(&self, filter: LinkFilter) -> Result<Vec<ShortLink>> {
        self.list_links(filter).await
    }

    async fn stats(&self) -> Result<LinkStats> {
        self.get_stats().await
    }

    async fn create_message(&self, message: NewContactMessage) -> Result<ContactMessage> {
        self.insert_message(message).await
    }

    async fn list_messages(&self) -> Result<Vec<ContactMessage>> {
        self.load_messages().await
    }

    async fn delete_message(&self, id: i32) -> Result<()> {
        self.remove_message(id).await
    }

    async fn count_messages(&self) -> Result<u64> {
        self.message_count().await
    }
}
