//! Core types for credential resolution

mod config;
mod error;
mod host;
mod profile;
mod provider;

pub use config::ResolutionConfig;
pub use error::{BoxError, ProfileStoreError, ResolveError};
pub use host::HostInfo;
pub use profile::{DEFAULT_PROFILE, ResolvedProfile};
pub use provider::{CredentialProvider, Credentials};
