//! Provider that always returns the same credentials

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use thiserror::Error;

use crate::core::{BoxError, Credentials};
use crate::traits::ProvideCredentials;

/// Fixed credentials carried past their expiry
#[derive(Debug, Error)]
#[error("static credentials '{access_key_id}' expired at {expires_at}")]
pub struct ExpiredCredentials {
    /// Access key id of the expired credentials
    pub access_key_id: String,
    /// When they expired
    pub expires_at: DateTime<Utc>,
}

/// Returns a fixed set of [`Credentials`]
///
/// Once credentials built `with_expiry` have expired, every call fails with
/// [`ExpiredCredentials`] instead of handing out stale material.
///
/// Useful for override strategies that pin a host to known credentials and
/// for tests.
///
/// # Examples
///
/// ```
/// use dbauth_credential::prelude::*;
///
/// # async fn example() -> Result<(), BoxError> {
/// let provider = CredentialProvider::new(StaticCredentialProvider::new(
///     Credentials::new("AKIDEXAMPLE", "secret"),
/// ));
///
/// let creds = provider.provide_credentials().await?;
/// assert_eq!(creds.access_key_id(), "AKIDEXAMPLE");
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct StaticCredentialProvider {
    credentials: Credentials,
}

impl StaticCredentialProvider {
    pub fn new(credentials: Credentials) -> Self {
        Self { credentials }
    }
}

#[async_trait]
impl ProvideCredentials for StaticCredentialProvider {
    async fn provide_credentials(&self) -> Result<Credentials, BoxError> {
        if self.credentials.is_expired_at(Utc::now()) {
            return Err(ExpiredCredentials {
                access_key_id: self.credentials.access_key_id().to_string(),
                expires_at: self.credentials.expires_at().unwrap_or_default(),
            }
            .into());
        }
        Ok(self.credentials.clone())
    }

    fn name(&self) -> &str {
        "static"
    }
}
