//! Custom resolution strategy installed over the built-in selection

use std::fmt;

use async_trait::async_trait;

use crate::core::{BoxError, CredentialProvider, HostInfo, ResolutionConfig};

/// Application-supplied resolution strategy
///
/// Consulted first by every `resolve` call while installed. Returning
/// `Ok(None)` means "no opinion" and lets the built-in default/federated
/// selection run; returning an error aborts resolution with
/// [`ResolveError::Override`](crate::ResolveError::Override).
///
/// # Contract
///
/// - Called without any registry lock held, possibly from many tasks at once
/// - Must not assume it is still installed while it runs: a concurrent
///   `clear_override` only affects later calls
///
/// # Example
///
/// ```
/// use async_trait::async_trait;
/// use dbauth_credential::prelude::*;
///
/// struct ReportingReplicas {
///     provider: CredentialProvider,
/// }
///
/// #[async_trait]
/// impl CustomResolutionStrategy for ReportingReplicas {
///     async fn resolve(
///         &self,
///         host: &HostInfo,
///         _config: &ResolutionConfig,
///     ) -> Result<Option<CredentialProvider>, BoxError> {
///         Ok(host
///             .host
///             .starts_with("reporting-")
///             .then(|| self.provider.clone()))
///     }
/// }
/// ```
#[async_trait]
pub trait CustomResolutionStrategy: Send + Sync {
    /// Produce a provider for `host`, or `None` to defer to the built-in selection
    async fn resolve(
        &self,
        host: &HostInfo,
        config: &ResolutionConfig,
    ) -> Result<Option<CredentialProvider>, BoxError>;
}

/// Adapts a synchronous closure into a [`CustomResolutionStrategy`]
pub struct FnStrategy<F> {
    resolve: F,
}

impl<F> FnStrategy<F>
where
    F: Fn(&HostInfo, &ResolutionConfig) -> Result<Option<CredentialProvider>, BoxError>
        + Send
        + Sync,
{
    pub fn new(resolve: F) -> Self {
        Self { resolve }
    }
}

#[async_trait]
impl<F> CustomResolutionStrategy for FnStrategy<F>
where
    F: Fn(&HostInfo, &ResolutionConfig) -> Result<Option<CredentialProvider>, BoxError>
        + Send
        + Sync,
{
    async fn resolve(
        &self,
        host: &HostInfo,
        config: &ResolutionConfig,
    ) -> Result<Option<CredentialProvider>, BoxError> {
        (self.resolve)(host, config)
    }
}

impl<F> fmt::Debug for FnStrategy<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FnStrategy").finish_non_exhaustive()
    }
}
