//! Connection properties consumed by credential resolution

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Connection properties passed to `resolve`
///
/// A flat string-to-string map, the same shape the connection layer receives
/// from its caller. Only two keys drive built-in resolution:
///
/// - [`ResolutionConfig::PROFILE_NAME`]: named profile, empty means none
/// - [`ResolutionConfig::USE_FEDERATED_AUTH`]: boolean flag, default `false`
///
/// Every other key is carried untouched so override strategies can read it.
///
/// # Examples
///
/// ```
/// use dbauth_credential::ResolutionConfig;
///
/// let config = ResolutionConfig::new()
///     .with(ResolutionConfig::PROFILE_NAME, "work")
///     .with(ResolutionConfig::USE_FEDERATED_AUTH, "TRUE");
///
/// assert_eq!(config.profile_name(), Some("work"));
/// assert!(config.use_federated_auth());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ResolutionConfig {
    properties: BTreeMap<String, String>,
}

impl ResolutionConfig {
    /// Key holding the named profile
    pub const PROFILE_NAME: &'static str = "profile_name";

    /// Key holding the federated auth flag
    pub const USE_FEDERATED_AUTH: &'static str = "use_federated_auth";

    pub fn new() -> Self {
        Self::default()
    }

    /// Set a property (builder pattern)
    pub fn with(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.set(key, value);
        self
    }

    /// Set a property, returning the previous value
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<String>) -> Option<String> {
        self.properties.insert(key.into(), value.into())
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.properties.get(key).map(String::as_str)
    }

    /// Read a boolean property.
    ///
    /// Only `true` (any case, surrounding whitespace ignored) is true.
    /// Anything else, including `1`, `yes` or a missing key, is `false`.
    pub fn get_bool(&self, key: &str) -> bool {
        self.get(key)
            .is_some_and(|raw| raw.trim().eq_ignore_ascii_case("true"))
    }

    /// Named profile, or `None` when absent or blank
    pub fn profile_name(&self) -> Option<&str> {
        self.get(Self::PROFILE_NAME)
            .map(str::trim)
            .filter(|name| !name.is_empty())
    }

    pub fn use_federated_auth(&self) -> bool {
        self.get_bool(Self::USE_FEDERATED_AUTH)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.properties
            .iter()
            .map(|(key, value)| (key.as_str(), value.as_str()))
    }

    pub fn len(&self) -> usize {
        self.properties.len()
    }

    pub fn is_empty(&self) -> bool {
        self.properties.is_empty()
    }
}

impl<K, V> FromIterator<(K, V)> for ResolutionConfig
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            properties: iter
                .into_iter()
                .map(|(key, value)| (key.into(), value.into()))
                .collect(),
        }
    }
}
