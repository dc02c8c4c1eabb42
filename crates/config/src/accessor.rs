//! Typed section lookups against a figment configuration source

use crate::section::ConfigSection;
use figment::{error::Kind, value::Value, Figment};
use tracing::{debug, warn};
use types::{ConfigError, Result};

/// Typed section lookups for a hierarchical configuration source
///
/// Each call reads the live source; nothing is cached between calls.
pub trait ConfigurationExt {
    /// Bind the section keyed by `T::SECTION`, or `None` when it is absent or empty
    ///
    /// Absence is never an error. Errors only come from the source itself or
    /// from converting the section's values into `T`.
    fn get_configuration<T: ConfigSection>(&self) -> Result<Option<T>>;

    /// Bind the section keyed by `T::SECTION`, failing with
    /// [`ConfigError::SectionNotFound`] when it is absent or empty
    fn get_required_configuration<T: ConfigSection>(&self) -> Result<T> {
        self.get_configuration::<T>()?
            .ok_or_else(|| ConfigError::SectionNotFound {
                section: T::SECTION.to_string(),
            })
    }
}

impl ConfigurationExt for Figment {
    fn get_configuration<T: ConfigSection>(&self) -> Result<Option<T>> {
        let section = T::SECTION;

        let value = match self.find_value(section) {
            Ok(value) => value,
            Err(err) if matches!(err.kind, Kind::MissingField(_)) => {
                debug!(section, "Configuration section not present");
                return Ok(None);
            }
            Err(err) => return Err(err.into()),
        };

        if is_empty_section(&value) {
            debug!(section, "Configuration section is empty");
            return Ok(None);
        }

        match value.deserialize::<T>() {
            Ok(bound) => {
                debug!(section, "Configuration section bound");
                Ok(Some(bound))
            }
            Err(err) => {
                warn!(section, error = %err, "Failed to bind configuration section");
                Err(ConfigError::Binding {
                    section: section.to_string(),
                    source: Box::new(err),
                })
            }
        }
    }
}

fn is_empty_section(value: &Value) -> bool {
    matches!(value, Value::Dict(_, dict) if dict.is_empty())
}

/// Optional lookup; see [`ConfigurationExt::get_configuration`]
pub fn get_configuration<T: ConfigSection>(source: &Figment) -> Result<Option<T>> {
    source.get_configuration::<T>()
}

/// Required lookup; see [`ConfigurationExt::get_required_configuration`]
pub fn get_required_configuration<T: ConfigSection>(source: &Figment) -> Result<T> {
    source.get_required_configuration::<T>()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::MemorySource;
    use figment::providers::Serialized;
    use serde::Deserialize;

    #[derive(Debug, Clone, PartialEq, Deserialize)]
    struct SomeConfiguration {
        #[serde(rename = "Name")]
        name: String,
        #[serde(rename = "Value")]
        value: i32,
    }

    crate::config_section!(SomeConfiguration);

    fn some_configuration_source() -> Figment {
        Figment::from(
            MemorySource::new()
                .with("SomeConfiguration:Name", "some name")
                .with("SomeConfiguration:Value", "123"),
        )
    }

    fn expected() -> SomeConfiguration {
        SomeConfiguration {
            name: "some name".to_string(),
            value: 123,
        }
    }

    #[test]
    fn test_required_returns_bound_values() {
        let figment = some_configuration_source();
        let config = figment.get_required_configuration::<SomeConfiguration>().unwrap();
        assert_eq!(config, expected());
    }

    #[test]
    fn test_optional_returns_some_with_bound_values() {
        let figment = some_configuration_source();
        let config = figment.get_configuration::<SomeConfiguration>().unwrap();
        assert_eq!(config, Some(expected()));
    }

    #[test]
    fn test_required_fails_when_section_missing() {
        let figment = Figment::from(MemorySource::new());
        let err = figment
            .get_required_configuration::<SomeConfiguration>()
            .unwrap_err();

        assert!(err.is_not_found());
        assert_eq!(
            err.to_string(),
            "SomeConfiguration section not found in Configuration."
        );
    }

    #[test]
    fn test_optional_returns_none_when_section_missing() {
        let figment = Figment::from(MemorySource::new());
        let config = figment.get_configuration::<SomeConfiguration>().unwrap();
        assert!(config.is_none());
    }

    #[test]
    fn test_empty_section_is_absent() {
        let figment = Figment::from(Serialized::default(
            "SomeConfiguration",
            figment::value::Dict::new(),
        ));

        assert!(figment.get_configuration::<SomeConfiguration>().unwrap().is_none());
        assert!(figment
            .get_required_configuration::<SomeConfiguration>()
            .unwrap_err()
            .is_not_found());
    }

    #[test]
    fn test_conversion_failure_is_passed_through() {
        let figment = Figment::from(
            MemorySource::new()
                .with("SomeConfiguration:Name", "some name")
                .with("SomeConfiguration:Value", "not a number"),
        );

        let err = figment.get_configuration::<SomeConfiguration>().unwrap_err();
        assert!(matches!(err, ConfigError::Binding { .. }));
        assert_eq!(err.section(), Some("SomeConfiguration"));

        let err = figment
            .get_required_configuration::<SomeConfiguration>()
            .unwrap_err();
        assert!(matches!(err, ConfigError::Binding { .. }));
    }

    #[derive(Debug, PartialEq, Deserialize)]
    struct Contact {
        #[serde(rename = "Zip")]
        zip: String,
        #[serde(rename = "Phone")]
        phone: String,
        #[serde(rename = "Note")]
        note: String,
    }

    crate::config_section!(Contact);

    #[test]
    fn test_number_and_bool_looking_strings_bind_into_string_fields() {
        let figment = Figment::from(
            MemorySource::new()
                .with("Contact:Zip", "01234")
                .with("Contact:Phone", "123")
                .with("Contact:Note", "true"),
        );

        let contact = figment.get_required_configuration::<Contact>().unwrap();
        assert_eq!(
            contact,
            Contact {
                zip: "01234".to_string(),
                phone: "123".to_string(),
                note: "true".to_string(),
            }
        );
    }

    #[test]
    fn test_section_key_is_case_sensitive() {
        let figment = Figment::from(
            MemorySource::new()
                .with("someconfiguration:Name", "some name")
                .with("someconfiguration:Value", "123"),
        );
        assert!(figment.get_configuration::<SomeConfiguration>().unwrap().is_none());
    }

    #[test]
    fn test_free_functions_delegate() {
        let figment = some_configuration_source();
        assert_eq!(
            get_configuration::<SomeConfiguration>(&figment).unwrap(),
            Some(expected())
        );
        assert_eq!(
            get_required_configuration::<SomeConfiguration>(&figment).unwrap(),
            expected()
        );
    }
}
