//! Credential resolution registry
//!
//! Holds the optional override strategy and implements the fallback between
//! the default and federated backends.

use std::fmt;
use std::sync::Arc;

use parking_lot::RwLock;
use tracing::{debug, trace, warn};

use super::builder::{CredentialResolutionRegistryBuilder, No};
use crate::core::{
    BoxError, CredentialProvider, HostInfo, ResolutionConfig, ResolveError,
};
use crate::traits::{
    CustomResolutionStrategy, DefaultCredentialBackend, FederatedCredentialBackend, FnStrategy,
    ProfileStore,
};

type OverrideSlot = RwLock<Option<Arc<dyn CustomResolutionStrategy>>>;

/// Resolves a [`CredentialProvider`] for each connection attempt
///
/// At most one [`CustomResolutionStrategy`] is installed at a time. `resolve`
/// consults it first; when there is none, or it has no opinion, the registry
/// picks a built-in backend from the connection properties:
///
/// | `use_federated_auth` | backend   | input                                          |
/// |----------------------|-----------|------------------------------------------------|
/// | `false` (default)    | default   | `profile_name` if non-empty, else none         |
/// | `true`               | federated | profile `profile_name` from the profile store  |
///
/// Federated auth without a `profile_name` fails with
/// [`ResolveError::ProfileNotFound`]; there is no implicit profile.
///
/// # Thread Safety
///
/// Clones share the same override slot. The slot is behind a read-write lock
/// that is held only to snapshot or swap the strategy; strategies and backends
/// run with no lock held, so a slow identity service never blocks
/// `install_override`, `clear_override` or other resolutions.
///
/// # Examples
///
/// ```no_run
/// use std::sync::Arc;
/// use dbauth_credential::prelude::*;
///
/// # async fn example(
/// #     default_backend: Arc<dyn DefaultCredentialBackend>,
/// #     federated_backend: Arc<dyn FederatedCredentialBackend>,
/// # ) -> Result<(), ResolveError> {
/// let registry = CredentialResolutionRegistry::builder()
///     .default_backend(default_backend)
///     .federated_backend(federated_backend)
///     .profile_store(Arc::new(SharedConfigProfileStore::from_env()))
///     .build();
///
/// let host = HostInfo::new("orders.cluster.internal").with_port(5432);
/// let config = ResolutionConfig::new().with(ResolutionConfig::PROFILE_NAME, "work");
///
/// let provider = registry.resolve(&host, &config).await?;
/// # Ok(())
/// # }
/// ```
#[derive(Clone)]
pub struct CredentialResolutionRegistry {
    override_slot: Arc<OverrideSlot>,
    default_backend: Arc<dyn DefaultCredentialBackend>,
    federated_backend: Arc<dyn FederatedCredentialBackend>,
    profile_store: Arc<dyn ProfileStore>,
}

impl CredentialResolutionRegistry {
    /// Create builder for constructing a registry
    pub fn builder() -> CredentialResolutionRegistryBuilder<No, No> {
        CredentialResolutionRegistryBuilder::new()
    }

    pub(super) fn from_parts(
        default_backend: Arc<dyn DefaultCredentialBackend>,
        federated_backend: Arc<dyn FederatedCredentialBackend>,
        profile_store: Arc<dyn ProfileStore>,
    ) -> Self {
        Self {
            override_slot: Arc::new(RwLock::new(None)),
            default_backend,
            federated_backend,
            profile_store,
        }
    }

    /// Install `strategy`, replacing any strategy already installed
    ///
    /// Resolutions already in flight keep using the strategy they started
    /// with.
    pub fn install_override(&self, strategy: Arc<dyn CustomResolutionStrategy>) {
        let previous = self.override_slot.write().replace(strategy);
        debug!(
            replaced = previous.is_some(),
            "Installed custom credential resolution strategy"
        );
    }

    /// Install a synchronous closure as the override strategy
    ///
    /// # Examples
    ///
    /// ```no_run
    /// # use dbauth_credential::prelude::*;
    /// # fn example(registry: &CredentialResolutionRegistry, pinned: CredentialProvider) {
    /// registry.install_override_fn(move |host, _config| {
    ///     Ok((host.host == "legacy.internal").then(|| pinned.clone()))
    /// });
    /// # }
    /// ```
    pub fn install_override_fn<F>(&self, resolve: F)
    where
        F: Fn(&HostInfo, &ResolutionConfig) -> Result<Option<CredentialProvider>, BoxError>
            + Send
            + Sync
            + 'static,
    {
        self.install_override(Arc::new(FnStrategy::new(resolve)));
    }

    /// Remove the installed override strategy; no-op when none is installed
    pub fn clear_override(&self) {
        let previous = self.override_slot.write().take();
        if previous.is_some() {
            debug!("Cleared custom credential resolution strategy");
        }
    }

    pub fn has_override(&self) -> bool {
        self.override_slot.read().is_some()
    }

    /// Resolve a credential provider for `host`
    ///
    /// Every call runs the full algorithm; nothing is cached here.
    ///
    /// # Errors
    ///
    /// - [`ResolveError::ProfileNotFound`] if federated auth is requested
    ///   without a profile name, or for a profile the store does not define
    /// - [`ResolveError::ProfileStore`] if the profile store cannot be read
    /// - [`ResolveError::Override`] / [`ResolveError::Backend`] carrying the
    ///   strategy's or backend's own error unchanged
    pub async fn resolve(
        &self,
        host: &HostInfo,
        config: &ResolutionConfig,
    ) -> Result<CredentialProvider, ResolveError> {
        let strategy = self.override_slot.read().clone();

        if let Some(strategy) = strategy {
            let resolved = strategy
                .resolve(host, config)
                .await
                .map_err(ResolveError::Override)?;

            if let Some(provider) = resolved {
                trace!(
                    host = %host,
                    provider = provider.provider_name(),
                    "Credential provider supplied by override strategy"
                );
                return Ok(provider);
            }
            trace!(host = %host, "Override strategy deferred to built-in selection");
        }

        self.resolve_builtin(host, config).await
    }

    async fn resolve_builtin(
        &self,
        host: &HostInfo,
        config: &ResolutionConfig,
    ) -> Result<CredentialProvider, ResolveError> {
        let profile_name = config.profile_name();

        if !config.use_federated_auth() {
            debug!(
                host = %host,
                profile = ?profile_name,
                "Resolving credentials with default backend"
            );
            return self
                .default_backend
                .build(profile_name)
                .await
                .map_err(ResolveError::Backend);
        }

        let Some(profile_name) = profile_name else {
            warn!(host = %host, "Federated auth requested without a profile name");
            return Err(ResolveError::ProfileNotFound {
                profile: String::new(),
            });
        };
        debug!(
            host = %host,
            profile = profile_name,
            "Resolving credentials with federated backend"
        );

        let Some(profile) = self.profile_store.lookup(profile_name).await? else {
            warn!(
                host = %host,
                profile = profile_name,
                "Federated auth requested for a profile that is not defined"
            );
            return Err(ResolveError::ProfileNotFound {
                profile: profile_name.to_string(),
            });
        };

        self.federated_backend
            .build(&profile)
            .await
            .map_err(ResolveError::Backend)
    }
}

impl fmt::Debug for CredentialResolutionRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CredentialResolutionRegistry")
            .field("has_override", &self.has_override())
            .finish_non_exhaustive()
    }
}
