//! Typestate builder for [`CredentialResolutionRegistry`]

use std::sync::Arc;

use super::CredentialResolutionRegistry;
use crate::profile::SharedConfigProfileStore;
use crate::traits::{DefaultCredentialBackend, FederatedCredentialBackend, ProfileStore};

// Type-level marker for an unset required backend
#[doc(hidden)]
pub struct No;

/// Builder for [`CredentialResolutionRegistry`] with typestate pattern
///
/// Both backends are required and checked at compile time: `build` only
/// exists once each type parameter has moved from [`No`] to the backend
/// itself. The profile store defaults to
/// [`SharedConfigProfileStore::from_env`].
///
/// # Type Parameters
///
/// * `D` - default backend slot, [`No`] until set
/// * `F` - federated backend slot, [`No`] until set
pub struct CredentialResolutionRegistryBuilder<D, F> {
    default_backend: D,
    federated_backend: F,
    profile_store: Option<Arc<dyn ProfileStore>>,
}

impl CredentialResolutionRegistryBuilder<No, No> {
    pub fn new() -> Self {
        Self {
            default_backend: No,
            federated_backend: No,
            profile_store: None,
        }
    }
}

impl Default for CredentialResolutionRegistryBuilder<No, No> {
    fn default() -> Self {
        Self::new()
    }
}

impl<F> CredentialResolutionRegistryBuilder<No, F> {
    /// Set the backend used when federated auth is off (required)
    pub fn default_backend(
        self,
        backend: Arc<dyn DefaultCredentialBackend>,
    ) -> CredentialResolutionRegistryBuilder<Arc<dyn DefaultCredentialBackend>, F> {
        CredentialResolutionRegistryBuilder {
            default_backend: backend,
            federated_backend: self.federated_backend,
            profile_store: self.profile_store,
        }
    }
}

impl<D> CredentialResolutionRegistryBuilder<D, No> {
    /// Set the backend used when federated auth is on (required)
    pub fn federated_backend(
        self,
        backend: Arc<dyn FederatedCredentialBackend>,
    ) -> CredentialResolutionRegistryBuilder<D, Arc<dyn FederatedCredentialBackend>> {
        CredentialResolutionRegistryBuilder {
            default_backend: self.default_backend,
            federated_backend: backend,
            profile_store: self.profile_store,
        }
    }
}

impl<D, F> CredentialResolutionRegistryBuilder<D, F> {
    /// Set the store federated resolution looks profiles up in (optional)
    pub fn profile_store(mut self, store: Arc<dyn ProfileStore>) -> Self {
        self.profile_store = Some(store);
        self
    }
}

impl
    CredentialResolutionRegistryBuilder<
        Arc<dyn DefaultCredentialBackend>,
        Arc<dyn FederatedCredentialBackend>,
    >
{
    /// Build the registry with no override installed
    pub fn build(self) -> CredentialResolutionRegistry {
        let profile_store = self
            .profile_store
            .unwrap_or_else(|| Arc::new(SharedConfigProfileStore::from_env()));

        CredentialResolutionRegistry::from_parts(
            self.default_backend,
            self.federated_backend,
            profile_store,
        )
    }
}
