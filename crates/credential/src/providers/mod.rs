//! Credential provider implementations

mod static_provider;

pub use static_provider::{ExpiredCredentials, StaticCredentialProvider};
