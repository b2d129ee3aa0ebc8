//! Shared utilities, configuration, and error handling for Adperk
//!
//! This crate provides common functionality used across the Adperk application:
//! - Configuration management following 12-factor principles
//! - Error types and handling
//! - Password hashing

pub mod config;
pub mod error;
pub mod password;

pub use config::{AppEnv, Config, CooldownProfile};
pub use error::{Error, Result};
pub use password::{hash_password, verify_password, MIN_PASSWORD_LENGTH};
