//! dbauth Credential - credential resolution for database connections
//!
//! Decides how a connection obtains credentials for its target host. The
//! connection layer asks a [`CredentialResolutionRegistry`] for a
//! [`CredentialProvider`]; the registry consults an application-installed
//! override strategy first and otherwise falls back to a built-in choice
//! between a profile-based default backend and a federated (SSO) backend.
//!
//! # Features
//!
//! - **Runtime override** - install or clear one custom strategy at any time
//! - **Deterministic fallback** - `use_federated_auth` and `profile_name` pick the backend
//! - **Lock-light** - strategies and backends run with no lock held
//! - **Shared config profiles** - reads `~/.aws/config` style files for federated profiles
//! - **Transparent errors** - backend and override failures surface unchanged
#![forbid(unsafe_code)]

/// Core types and errors
pub mod core;
/// Profile store implementations
pub mod profile;
/// Credential provider implementations
pub mod providers;
/// Resolution registry and its builder
pub mod registry;
/// Capability traits for strategies, backends and profile stores
pub mod traits;

// ── Root re-exports ─────────────────────────────────────────────────────────

pub use crate::core::{
    BoxError, CredentialProvider, Credentials, DEFAULT_PROFILE, HostInfo, ProfileStoreError,
    ResolutionConfig, ResolveError, ResolvedProfile,
};
pub use crate::registry::{CredentialResolutionRegistry, CredentialResolutionRegistryBuilder};
pub use crate::traits::{
    CustomResolutionStrategy, DefaultCredentialBackend, FederatedCredentialBackend, FnStrategy,
    ProfileStore, ProvideCredentials,
};

/// Commonly used types and traits
pub mod prelude {
    pub use crate::core::{
        BoxError, CredentialProvider, Credentials, HostInfo, ProfileStoreError, ResolutionConfig,
        ResolveError, ResolvedProfile,
    };

    pub use crate::profile::{InMemoryProfileStore, SharedConfigProfileStore};
    pub use crate::providers::StaticCredentialProvider;
    pub use crate::registry::CredentialResolutionRegistry;

    pub use crate::traits::{
        CustomResolutionStrategy, DefaultCredentialBackend, FederatedCredentialBackend,
        ProfileStore, ProvideCredentials,
    };
}
