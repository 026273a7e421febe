//! forge-messages
//!
//! Centralized messaging for the django-forge CLI. Every user-facing
//! string lives here as a template so output stays consistent across
//! crates.

pub mod messages;

pub use messages::MESSAGES;
