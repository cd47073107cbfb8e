//! Built-in credential backends the registry falls back to

use async_trait::async_trait;

use crate::core::{BoxError, CredentialProvider, ResolvedProfile};

/// Profile-based backend used when federated auth is off
///
/// With `Some(name)` the backend must resolve credentials for that profile.
/// With `None` it applies its own ambient chain (environment, shared
/// credentials file, instance metadata, ...).
#[async_trait]
pub trait DefaultCredentialBackend: Send + Sync {
    async fn build(&self, profile_name: Option<&str>) -> Result<CredentialProvider, BoxError>;
}

/// Federated/SSO backend used when federated auth is on
///
/// Receives the profile already located in the shared profile store; any
/// token exchange it performs is opaque to the registry.
#[async_trait]
pub trait FederatedCredentialBackend: Send + Sync {
    async fn build(&self, profile: &ResolvedProfile) -> Result<CredentialProvider, BoxError>;
}
