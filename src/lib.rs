//! linkgate - a URL shortener service
//!
//! Shortens URLs to compact codes, optionally behind a password and an
//! expiration date, counts clicks atomically and renders QR codes for the
//! short links.
//!
//! # Architecture
//! - `storage`: `LinkStore` trait and the SeaORM backend (SQLite, MySQL, PostgreSQL)
//! - `services`: link resolution, access policy and the contact inbox
//! - `api`: HTTP handlers, pages and middleware
//! - `config`: TOML + environment configuration
//! - `runtime`: server startup and shutdown
//! - `system`: logging

pub mod api;
pub mod config;
pub mod errors;
pub mod runtime;
pub mod services;
pub mod storage;
pub mod system;
pub mod utils;
