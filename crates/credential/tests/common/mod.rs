//! Recording test doubles shared by the integration tests

#![allow(dead_code)]

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use dbauth_credential::prelude::*;
use parking_lot::Mutex;

#[derive(Debug, thiserror::Error)]
#[error("identity service unavailable: {0}")]
pub struct BackendDown(pub &'static str);

#[derive(Debug, thiserror::Error)]
#[error("override rejected host {0}")]
pub struct OverrideRejected(pub String);

/// Provider tagged with a name so tests can tell where it came from
pub fn provider(name: &'static str) -> CredentialProvider {
    CredentialProvider::new(NamedProvider(name))
}

struct NamedProvider(&'static str);

#[async_trait]
impl ProvideCredentials for NamedProvider {
    async fn provide_credentials(&self) -> Result<Credentials, BoxError> {
        Ok(Credentials::new(format!("AKID-{}", self.0), "secret"))
    }

    fn name(&self) -> &str {
        self.0
    }
}

/// Default backend recording the profile name of every call
pub struct RecordingDefaultBackend {
    pub provider: CredentialProvider,
    pub calls: Mutex<Vec<Option<String>>>,
    pub fail: bool,
}

impl RecordingDefaultBackend {
    pub fn new() -> Arc<Self> {
        Arc::new(Self {
            provider: provider("default"),
            calls: Mutex::new(Vec::new()),
            fail: false,
        })
    }

    pub fn failing() -> Arc<Self> {
        Arc::new(Self {
            provider: provider("default"),
            calls: Mutex::new(Vec::new()),
            fail: true,
        })
    }

    pub fn calls(&self) -> Vec<Option<String>> {
        self.calls.lock().clone()
    }
}

#[async_trait]
impl DefaultCredentialBackend for RecordingDefaultBackend {
    async fn build(&self, profile_name: Option<&str>) -> Result<CredentialProvider, BoxError> {
        self.calls.lock().push(profile_name.map(str::to_string));
        if self.fail {
            return Err(BackendDown("default").into());
        }
        Ok(self.provider.clone())
    }
}

/// Federated backend recording every profile it was handed
pub struct RecordingFederatedBackend {
    pub provider: CredentialProvider,
    pub calls: Mutex<Vec<ResolvedProfile>>,
    pub fail: bool,
}

impl RecordingFederatedBackend {
    pub fn new() -> Arc<Self> {
        Arc::new(Self {
            provider: provider("federated"),
            calls: Mutex::new(Vec::new()),
            fail: false,
        })
    }

    pub fn failing() -> Arc<Self> {
        Arc::new(Self {
            provider: provider("federated"),
            calls: Mutex::new(Vec::new()),
            fail: true,
        })
    }

    pub fn calls(&self) -> Vec<ResolvedProfile> {
        self.calls.lock().clone()
    }
}

#[async_trait]
impl FederatedCredentialBackend for RecordingFederatedBackend {
    async fn build(&self, profile: &ResolvedProfile) -> Result<CredentialProvider, BoxError> {
        self.calls.lock().push(profile.clone());
        if self.fail {
            return Err(BackendDown("sso").into());
        }
        Ok(self.provider.clone())
    }
}

/// Override strategy returning a fixed answer and counting calls
pub struct FixedStrategy {
    pub answer: Option<CredentialProvider>,
    pub calls: AtomicUsize,
}

impl FixedStrategy {
    pub fn supplying(provider: CredentialProvider) -> Arc<Self> {
        Arc::new(Self {
            answer: Some(provider),
            calls: AtomicUsize::new(0),
        })
    }

    pub fn deferring() -> Arc<Self> {
        Arc::new(Self {
            answer: None,
            calls: AtomicUsize::new(0),
        })
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl CustomResolutionStrategy for FixedStrategy {
    async fn resolve(
        &self,
        _host: &HostInfo,
        _config: &ResolutionConfig,
    ) -> Result<Option<CredentialProvider>, BoxError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(self.answer.clone())
    }
}

/// Registry wired to recording backends and an in-memory profile store
pub struct Harness {
    pub registry: CredentialResolutionRegistry,
    pub default_backend: Arc<RecordingDefaultBackend>,
    pub federated_backend: Arc<RecordingFederatedBackend>,
    pub profiles: Arc<InMemoryProfileStore>,
}

impl Harness {
    pub fn new() -> Self {
        Self::with_backends(RecordingDefaultBackend::new(), RecordingFederatedBackend::new())
    }

    pub fn with_backends(
        default_backend: Arc<RecordingDefaultBackend>,
        federated_backend: Arc<RecordingFederatedBackend>,
    ) -> Self {
        let profiles = Arc::new(
            InMemoryProfileStore::new()
                .with_profile(
                    ResolvedProfile::new("prod")
                        .with_property("sso_start_url", "https://example.awsapps.com/start")
                        .with_property("sso_role_name", "DatabaseReader"),
                )
                .with_profile(ResolvedProfile::new("default").with_property("region", "us-east-1")),
        );

        let registry = CredentialResolutionRegistry::builder()
            .default_backend(default_backend.clone())
            .federated_backend(federated_backend.clone())
            .profile_store(profiles.clone())
            .build();

        Self {
            registry,
            default_backend,
            federated_backend,
            profiles,
        }
    }

    pub fn no_backend_called(&self) -> bool {
        self.default_backend.calls().is_empty() && self.federated_backend.calls().is_empty()
    }
}

pub fn host() -> HostInfo {
    HostInfo::new("orders.cluster-abc.us-east-1.rds.amazonaws.com")
        .with_port(5432)
        .with_host_id("orders-instance-1")
}

pub fn config(profile_name: &str, federated: bool) -> ResolutionConfig {
    ResolutionConfig::new()
        .with(ResolutionConfig::PROFILE_NAME, profile_name)
        .with(ResolutionConfig::USE_FEDERATED_AUTH, federated.to_string())
}
