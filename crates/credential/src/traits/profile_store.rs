//! Shared profile store lookup

use async_trait::async_trait;

use crate::core::{ProfileStoreError, ResolvedProfile};

/// Externally maintained collection of named profiles
///
/// `Ok(None)` means the store was readable but defines no such profile.
#[async_trait]
pub trait ProfileStore: Send + Sync {
    async fn lookup(&self, name: &str) -> Result<Option<ResolvedProfile>, ProfileStoreError>;
}
