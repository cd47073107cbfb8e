//! In-process profile store

use std::collections::BTreeMap;

use async_trait::async_trait;
use parking_lot::RwLock;

use crate::core::{ProfileStoreError, ResolvedProfile};
use crate::traits::ProfileStore;

/// Profile store kept in memory
///
/// For hosts that manage profiles themselves rather than through a shared
/// config file.
#[derive(Debug, Default)]
pub struct InMemoryProfileStore {
    profiles: RwLock<BTreeMap<String, ResolvedProfile>>,
}

impl InMemoryProfileStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a profile (builder pattern)
    pub fn with_profile(self, profile: ResolvedProfile) -> Self {
        self.insert(profile);
        self
    }

    /// Insert or replace a profile, returning the one it replaced
    pub fn insert(&self, profile: ResolvedProfile) -> Option<ResolvedProfile> {
        self.profiles
            .write()
            .insert(profile.name().to_string(), profile)
    }

    pub fn remove(&self, name: &str) -> Option<ResolvedProfile> {
        self.profiles.write().remove(name)
    }

    pub fn len(&self) -> usize {
        self.profiles.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.profiles.read().is_empty()
    }
}

#[async_trait]
impl ProfileStore for InMemoryProfileStore {
    async fn lookup(&self, name: &str) -> Result<Option<ResolvedProfile>, ProfileStoreError> {
        Ok(self.profiles.read().get(name).cloned())
    }
}
