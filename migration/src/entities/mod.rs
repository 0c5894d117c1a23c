pub mod contact_message;
pub mod short_link;

pub use contact_message::Entity as ContactMessageEntity;
pub use short_link::Entity as ShortLinkEntity;
