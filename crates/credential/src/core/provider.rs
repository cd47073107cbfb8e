//! Credential material and the provider handle returned by resolution

use std::fmt;
use std::sync::Arc;

use chrono::{DateTime, Utc};
use secrecy::{ExposeSecret, SecretString};

use super::BoxError;
use crate::traits::ProvideCredentials;

/// Authentication material supplied by a [`CredentialProvider`]
///
/// `Debug` never prints the secret key or session token.
pub struct Credentials {
    access_key_id: String,
    secret_access_key: SecretString,
    session_token: Option<SecretString>,
    expires_at: Option<DateTime<Utc>>,
}

impl Credentials {
    pub fn new(access_key_id: impl Into<String>, secret_access_key: impl Into<String>) -> Self {
        Self {
            access_key_id: access_key_id.into(),
            secret_access_key: SecretString::from(secret_access_key.into()),
            session_token: None,
            expires_at: None,
        }
    }

    /// Attach a session token (temporary credentials)
    pub fn with_session_token(mut self, token: impl Into<String>) -> Self {
        self.session_token = Some(SecretString::from(token.into()));
        self
    }

    pub fn with_expiry(mut self, expires_at: DateTime<Utc>) -> Self {
        self.expires_at = Some(expires_at);
        self
    }

    pub fn access_key_id(&self) -> &str {
        &self.access_key_id
    }

    pub fn secret_access_key(&self) -> &SecretString {
        &self.secret_access_key
    }

    pub fn session_token(&self) -> Option<&SecretString> {
        self.session_token.as_ref()
    }

    pub fn expires_at(&self) -> Option<DateTime<Utc>> {
        self.expires_at
    }

    /// `true` once `now` has reached the expiry; long-lived credentials never expire.
    pub fn is_expired_at(&self, now: DateTime<Utc>) -> bool {
        self.expires_at.is_some_and(|expiry| now >= expiry)
    }
}

impl Clone for Credentials {
    fn clone(&self) -> Self {
        Self {
            access_key_id: self.access_key_id.clone(),
            secret_access_key: SecretString::from(self.secret_access_key.expose_secret().to_owned()),
            session_token: self
                .session_token
                .as_ref()
                .map(|token| SecretString::from(token.expose_secret().to_owned())),
            expires_at: self.expires_at,
        }
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("access_key_id", &self.access_key_id)
            .field("secret_access_key", &"[REDACTED]")
            .field(
                "session_token",
                &self.session_token.as_ref().map(|_| "[REDACTED]"),
            )
            .field("expires_at", &self.expires_at)
            .finish()
    }
}

/// Handle to something that can supply [`Credentials`] on demand
///
/// This is what `resolve` hands back to the connection layer. The registry
/// never looks inside it. Cloning is cheap and clones share the same
/// underlying provider, so [`CredentialProvider::ptr_eq`] can tell whether two
/// handles came from the same construction.
#[derive(Clone)]
pub struct CredentialProvider {
    inner: Arc<dyn ProvideCredentials>,
}

impl CredentialProvider {
    pub fn new(provider: impl ProvideCredentials + 'static) -> Self {
        Self {
            inner: Arc::new(provider),
        }
    }

    pub fn from_arc(provider: Arc<dyn ProvideCredentials>) -> Self {
        Self { inner: provider }
    }

    /// Short name of the underlying provider, for logs and diagnostics
    pub fn provider_name(&self) -> &str {
        self.inner.name()
    }

    /// Ask the underlying provider for credentials
    pub async fn provide_credentials(&self) -> Result<Credentials, BoxError> {
        self.inner.provide_credentials().await
    }

    /// `true` if both handles point at the same provider instance
    pub fn ptr_eq(&self, other: &Self) -> bool {
        std::ptr::addr_eq(Arc::as_ptr(&self.inner), Arc::as_ptr(&other.inner))
    }
}

impl fmt::Debug for CredentialProvider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CredentialProvider")
            .field("name", &self.provider_name())
            .finish()
    }
}
