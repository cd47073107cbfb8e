//! Named profiles located in a shared profile store

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

/// Profile name the shared config file uses for its unnamed section
pub const DEFAULT_PROFILE: &str = "default";

/// A profile found by name in a [`ProfileStore`](crate::traits::ProfileStore)
///
/// Handed to the federated backend, which reads whatever keys it needs
/// (SSO start URL, account id, role name, region, ...).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResolvedProfile {
    name: String,
    properties: BTreeMap<String, String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    source: Option<PathBuf>,
}

impl ResolvedProfile {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            properties: BTreeMap::new(),
            source: None,
        }
    }

    /// Set a property (builder pattern)
    pub fn with_property(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.properties.insert(key.into(), value.into());
        self
    }

    /// Record the file this profile was read from
    pub fn with_source(mut self, source: impl Into<PathBuf>) -> Self {
        self.source = Some(source.into());
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.properties.get(key).map(String::as_str)
    }

    pub fn properties(&self) -> &BTreeMap<String, String> {
        &self.properties
    }

    /// File the profile came from, if it was loaded from disk
    pub fn source(&self) -> Option<&Path> {
        self.source.as_deref()
    }

    pub(crate) fn insert(&mut self, key: String, value: String) {
        self.properties.insert(key, value);
    }

    pub(crate) fn append_to(&mut self, key: &str, continuation: &str) -> bool {
        match self.properties.get_mut(key) {
            Some(value) => {
                value.push('\n');
                value.push_str(continuation);
                true
            }
            None => false,
        }
    }
}
