//! Credential resolution registry
//!
//! # Overview
//!
//! [`CredentialResolutionRegistry`] is what the connection layer calls before
//! opening a connection. It owns a single optional override slot and the two
//! built-in backends it falls back to.
//!
//! ```text
//! resolve(host, config)
//!     │
//!     ├─ override installed? ── Some(provider) ──────────────► provider
//!     │        │
//!     │        └─ None / not installed
//!     │
//!     ├─ use_federated_auth = false ─► DefaultCredentialBackend::build(profile_name?)
//!     │
//!     └─ use_federated_auth = true ──► ProfileStore::lookup(profile_name)
//!                                          ├─ missing ─► ResolveError::ProfileNotFound
//!                                          └─ found ───► FederatedCredentialBackend::build(profile)
//! ```
//!
//! # Override lifecycle
//!
//! The slot is either empty or holds one strategy. `install_override`
//! replaces whatever is there and `clear_override` empties it; both are
//! idempotent. `resolve` only reads the slot.

mod builder;
#[allow(clippy::module_inception)]
mod registry;

pub use builder::{CredentialResolutionRegistryBuilder, No};
pub use registry::CredentialResolutionRegistry;
