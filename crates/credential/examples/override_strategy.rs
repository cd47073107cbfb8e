//! Resolution with and without an application override
//!
//! Wires toy backends into a registry, resolves for a few hosts, then
//! installs an override that pins one host to fixed credentials.
//!
//! Run with `cargo run --example override_strategy`.

use std::sync::Arc;

use async_trait::async_trait;
use dbauth_credential::prelude::*;

/// Stands in for an ambient credential chain
struct AmbientBackend;

#[async_trait]
impl DefaultCredentialBackend for AmbientBackend {
    async fn build(&self, profile_name: Option<&str>) -> Result<CredentialProvider, BoxError> {
        let key_id = format!("AKID-{}", profile_name.unwrap_or("ambient"));
        Ok(CredentialProvider::new(StaticCredentialProvider::new(
            Credentials::new(key_id, "example-secret"),
        )))
    }
}

/// Stands in for an SSO token exchange
struct SsoBackend;

#[async_trait]
impl FederatedCredentialBackend for SsoBackend {
    async fn build(&self, profile: &ResolvedProfile) -> Result<CredentialProvider, BoxError> {
        let role = profile.get("sso_role_name").ok_or("profile has no sso_role_name")?;
        Ok(CredentialProvider::new(StaticCredentialProvider::new(
            Credentials::new(format!("ASIA-{role}"), "example-secret")
                .with_session_token("example-session"),
        )))
    }
}

#[tokio::main]
async fn main() -> Result<(), BoxError> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .init();

    let profiles = InMemoryProfileStore::new().with_profile(
        ResolvedProfile::new("analytics").with_property("sso_role_name", "AnalyticsReader"),
    );
    let registry = CredentialResolutionRegistry::builder()
        .default_backend(Arc::new(AmbientBackend))
        .federated_backend(Arc::new(SsoBackend))
        .profile_store(Arc::new(profiles))
        .build();

    let orders = HostInfo::new("orders.internal").with_port(5432);
    let legacy = HostInfo::new("legacy.internal").with_port(3306);
    let federated = ResolutionConfig::new()
        .with(ResolutionConfig::PROFILE_NAME, "analytics")
        .with(ResolutionConfig::USE_FEDERATED_AUTH, "true");
    let plain = ResolutionConfig::new();

    for (host, config) in [(&orders, &federated), (&legacy, &plain)] {
        let provider = registry.resolve(host, config).await?;
        let creds = provider.provide_credentials().await?;
        println!("{host}: {} ({})", creds.access_key_id(), provider.provider_name());
    }

    let pinned = CredentialProvider::new(StaticCredentialProvider::new(Credentials::new(
        "AKID-legacy-pinned",
        "example-secret",
    )));
    registry.install_override_fn(move |host, _config| {
        Ok((host.host == "legacy.internal").then(|| pinned.clone()))
    });

    let creds = registry
        .resolve(&legacy, &plain)
        .await?
        .provide_credentials()
        .await?;
    println!("{legacy} with override: {}", creds.access_key_id());

    let missing = ResolutionConfig::new()
        .with(ResolutionConfig::PROFILE_NAME, "ghost")
        .with(ResolutionConfig::USE_FEDERATED_AUTH, "true");
    if let Err(err) = registry.resolve(&orders, &missing).await {
        println!("{orders}: {err}");
    }

    registry.clear_override();
    Ok(())
}
