//! Error types for credential resolution
//!
//! - [`ResolveError`]: everything `CredentialResolutionRegistry::resolve` can return
//! - [`ProfileStoreError`]: failures reading or parsing a shared profile store
//!
//! The registry originates exactly one error of its own,
//! [`ResolveError::ProfileNotFound`]. Failures from override strategies and
//! backends are carried unchanged: their `Display` and `source()` are forwarded
//! and the original error can be recovered with `downcast_ref`.
//!
//! ```
//! use dbauth_credential::ResolveError;
//!
//! let err = ResolveError::ProfileNotFound { profile: "ghost".to_string() };
//! assert!(err.is_configuration_error());
//! assert_eq!(err.to_string(), "profile not found: ghost");
//! ```

use std::path::PathBuf;

use thiserror::Error;

/// Opaque error raised by an override strategy, a backend, or a credential provider.
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Error returned by credential resolution
#[derive(Debug, Error)]
pub enum ResolveError {
    /// Federated auth was requested for a profile the shared profile store does not define
    #[error("profile not found: {profile}")]
    ProfileNotFound {
        /// Requested profile name
        profile: String,
    },

    /// The shared profile store could not be read
    #[error("failed to load shared profiles: {0}")]
    ProfileStore(#[from] ProfileStoreError),

    /// Default or federated backend failed while building a provider
    #[error(transparent)]
    Backend(BoxError),

    /// Installed override strategy failed
    #[error(transparent)]
    Override(BoxError),
}

impl ResolveError {
    /// `true` for errors caused by connection or profile configuration.
    ///
    /// These are terminal: retrying the same `resolve` call cannot succeed
    /// until the configuration changes. Opaque backend and override errors
    /// return `false`; the registry makes no claim about them.
    pub fn is_configuration_error(&self) -> bool {
        matches!(
            self,
            Self::ProfileNotFound { .. } | Self::ProfileStore(ProfileStoreError::Parse { .. })
        )
    }

    /// Name of the missing profile, if this is a [`ResolveError::ProfileNotFound`].
    pub fn missing_profile(&self) -> Option<&str> {
        match self {
            Self::ProfileNotFound { profile } => Some(profile),
            _ => None,
        }
    }
}

/// Errors raised while loading a shared profile store
#[derive(Debug, Error)]
pub enum ProfileStoreError {
    /// Profile file exists but could not be read
    #[error("failed to read profile file {path:?}: {source}")]
    Read {
        /// File that was being read
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// Profile file contents are malformed
    #[error("malformed profile file {path:?} at line {line}: {message}")]
    Parse {
        /// File that was being parsed
        path: PathBuf,
        /// 1-based line number
        line: usize,
        /// What was wrong with the line
        message: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Error)]
    #[error("connection refused by identity service")]
    struct NetworkDown;

    #[test]
    fn backend_error_is_transparent() {
        let err = ResolveError::Backend(Box::new(NetworkDown));

        assert_eq!(err.to_string(), "connection refused by identity service");
        assert!(!err.is_configuration_error());
        match err {
            ResolveError::Backend(inner) => assert!(inner.downcast_ref::<NetworkDown>().is_some()),
            other => panic!("unexpected variant: {other:?}"),
        }
    }

    #[test]
    fn profile_not_found_names_profile() {
        let err = ResolveError::ProfileNotFound {
            profile: "prod".to_string(),
        };

        assert_eq!(err.missing_profile(), Some("prod"));
        assert!(err.is_configuration_error());
    }

    #[test]
    fn parse_failure_is_configuration_error() {
        let err: ResolveError = ProfileStoreError::Parse {
            path: PathBuf::from("/tmp/config"),
            line: 3,
            message: "expected `key = value`".to_string(),
        }
        .into();

        assert!(err.is_configuration_error());
        assert!(err.to_string().contains("line 3"));
    }

    #[test]
    fn read_failure_is_not_configuration_error() {
        let err: ResolveError = ProfileStoreError::Read {
            path: PathBuf::from("/tmp/config"),
            source: std::io::Error::from(std::io::ErrorKind::PermissionDenied),
        }
        .into();

        assert!(!err.is_configuration_error());
        assert_eq!(err.missing_profile(), None);
    }
}
