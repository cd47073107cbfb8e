//! Capability traits consumed and exposed by the resolution registry

mod backend;
mod credentials;
mod profile_store;
mod strategy;

pub use backend::{DefaultCredentialBackend, FederatedCredentialBackend};
pub use credentials::ProvideCredentials;
pub use profile_store::ProfileStore;
pub use strategy::{CustomResolutionStrategy, FnStrategy};
