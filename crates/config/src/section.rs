//! Section naming contract
//!
//! A target type names the configuration section it binds from through an
//! associated constant. The [`config_section!`](crate::config_section) macro
//! derives the key from the type's identifier.

use serde::de::DeserializeOwned;

/// A settings type that binds from one named section of the configuration source
pub trait ConfigSection: DeserializeOwned {
    /// Key of the section, e.g. `"SomeConfiguration"` or `"Outer.Inner"` for a nested one
    const SECTION: &'static str;
}

/// Implement [`ConfigSection`] for a type
///
/// `config_section!(Server)` keys the section by the simple type name,
/// `config_section!(Server => "Http")` uses the explicit key instead.
#[macro_export]
macro_rules! config_section {
    ($ty:ident) => {
        impl $crate::ConfigSection for $ty {
            const SECTION: &'static str = stringify!($ty);
        }
    };
    ($ty:ty => $key:expr) => {
        impl $crate::ConfigSection for $ty {
            const SECTION: &'static str = $key;
        }
    };
}
