//! In-memory configuration provider
//!
//! Flat `Section:Field` keys with string values, nested into figment
//! dictionaries on demand. Values stay strings; converting them into the
//! target field's type is left to the binder.

use figment::{
    value::{Dict, Map, Tag, Value},
    Error, Metadata, Profile, Provider,
};

/// Separator between key segments
pub const KEY_DELIMITER: char = ':';

/// Figment's own key path separator, also accepted inside keys
pub const PATH_DELIMITER: char = '.';

/// Figment provider backed by an in-memory list of key/value pairs
///
/// ```
/// use config::MemorySource;
/// use figment::Figment;
///
/// let figment = Figment::from(
///     MemorySource::new()
///         .with("SomeConfiguration:Name", "some name")
///         .with("SomeConfiguration:Value", "123"),
/// );
/// assert!(figment.contains("SomeConfiguration.Value"));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MemorySource {
    entries: Vec<(String, String)>,
}

impl MemorySource {
    /// Create an empty source
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a source from key/value pairs
    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        pairs.into_iter().collect()
    }

    /// Add a key/value pair; later pairs override earlier ones
    pub fn with(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.entries.push((key.into(), value.into()));
        self
    }

    /// Number of pairs held
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the source holds no pairs
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn to_dict(&self) -> Dict {
        let mut dict = Dict::new();
        for (key, raw) in &self.entries {
            let path: Vec<&str> = key
                .split([KEY_DELIMITER, PATH_DELIMITER])
                .map(str::trim)
                .filter(|segment| !segment.is_empty())
                .collect();

            insert(&mut dict, &path, Value::from(raw.clone()));
        }
        dict
    }
}

fn insert(dict: &mut Dict, path: &[&str], value: Value) {
    match path {
        [] => {}
        [leaf] => {
            dict.insert((*leaf).to_string(), value);
        }
        [head, rest @ ..] => {
            let entry = dict
                .entry((*head).to_string())
                .or_insert_with(|| Value::Dict(Tag::Default, Dict::new()));

            // A leaf overwritten by a deeper key turns into a section.
            if !matches!(entry, Value::Dict(..)) {
                *entry = Value::Dict(Tag::Default, Dict::new());
            }

            if let Value::Dict(_, child) = entry {
                insert(child, rest, value);
            }
        }
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for MemorySource {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            entries: iter
                .into_iter()
                .map(|(key, value)| (key.into(), value.into()))
                .collect(),
        }
    }
}

impl Provider for MemorySource {
    fn metadata(&self) -> Metadata {
        Metadata::named("In-memory configuration")
    }

    fn data(&self) -> Result<Map<Profile, Dict>, Error> {
        Ok(Profile::Default.collect(self.to_dict()))
    }
}
