//! Credential provider trait

use async_trait::async_trait;

use crate::core::{BoxError, Credentials};

/// Supplies [`Credentials`] on demand
///
/// Implemented by whatever a backend builds: a static key pair, an SSO token
/// exchanger, an instance-metadata client. Implementations own their caching
/// and refresh; callers may invoke this once per connection attempt.
#[async_trait]
pub trait ProvideCredentials: Send + Sync {
    /// Load credentials
    ///
    /// # Errors
    ///
    /// Any failure of the underlying source, returned as-is.
    async fn provide_credentials(&self) -> Result<Credentials, BoxError>;

    /// Short provider name for logs (e.g. `"static"`, `"sso"`)
    fn name(&self) -> &str;
}
