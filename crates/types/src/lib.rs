//! Shared types for typed configuration section lookups
//!
//! This crate contains the error taxonomy shared by the configuration
//! accessor and its callers.

pub mod error;

pub use error::{ConfigError, Result};
