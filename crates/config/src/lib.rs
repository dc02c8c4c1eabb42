//! Typed configuration section lookups
//!
//! This crate binds strongly-typed settings objects from a figment
//! configuration source, one named section per type. The optional lookup
//! reports absence as `None`; the required lookup turns absence into a
//! [`ConfigError::SectionNotFound`] error.

pub mod accessor;
pub mod memory;
pub mod section;

pub use accessor::{get_configuration, get_required_configuration, ConfigurationExt};
pub use memory::MemorySource;
pub use section::ConfigSection;
pub use types::{ConfigError, Result};
