//! Business logic shared by the HTTP handlers
//!
//! Services own validation and policy; persistence goes through the
//! injected `LinkStore`.

pub mod access_policy;
pub mod contact_service;
pub mod link_service;

pub use access_policy::{AccessDecision, evaluate_access};
pub use contact_service::{ContactRequest, ContactService};
pub use link_service::{
    InspectResult, LinkService, LinkSettings, ResolveAttempt, ResolveOutcome, ShortenRequest,
    ShortenResult,
};
