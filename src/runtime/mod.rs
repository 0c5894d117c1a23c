//! Application lifecycle
//!
//! - `lifetime`: startup wiring and graceful shutdown
//! - `server`: the HTTP server loop

pub mod lifetime;
pub mod server;

pub use server::run_server;
