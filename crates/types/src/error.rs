//! Error types for typed configuration section lookups

use thiserror::Error;

/// Result type alias for configuration section operations
pub type Result<T> = std::result::Result<T, ConfigError>;

/// Configuration specific errors
///
/// An absent section on the optional lookup path is not represented here:
/// it is the `Ok(None)` value. Only the required lookup turns absence into
/// [`ConfigError::SectionNotFound`].
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Required section is missing from the configuration source
    #[error("{section} section not found in Configuration.")]
    SectionNotFound { section: String },

    /// Section exists but its values could not be converted into the target type
    #[error("Failed to bind configuration section {section}: {source}")]
    Binding {
        section: String,
        #[source]
        source: Box<figment::Error>,
    },

    /// A provider behind the configuration source failed to produce data
    #[error("Configuration source error: {0}")]
    Source(#[source] Box<figment::Error>),
}

impl ConfigError {
    /// Name of the section the error refers to, if any
    pub fn section(&self) -> Option<&str> {
        match self {
            ConfigError::SectionNotFound { section } | ConfigError::Binding { section, .. } => {
                Some(section)
            }
            ConfigError::Source(_) => None,
        }
    }

    /// Whether the error signals a missing required section
    pub fn is_not_found(&self) -> bool {
        matches!(self, ConfigError::SectionNotFound { .. })
    }
}

impl From<figment::Error> for ConfigError {
    fn from(err: figment::Error) -> Self {
        ConfigError::Source(Box::new(err))
    }
}
