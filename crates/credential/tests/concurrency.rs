//! Concurrent install / clear / resolve

mod common;

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use common::{FixedStrategy, Harness, config, host, provider};
use dbauth_credential::prelude::*;
use tokio::sync::{Notify, oneshot};

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn concurrent_install_clear_resolve() {
    let harness = Arc::new(Harness::new());
    let pinned = provider("pinned");
    let mut tasks = Vec::new();

    for i in 0..8 {
        let registry = harness.registry.clone();
        let pinned = pinned.clone();
        tasks.push(tokio::spawn(async move {
            for j in 0..50 {
                if (i + j) % 2 == 0 {
                    registry.install_override(FixedStrategy::supplying(pinned.clone()));
                } else {
                    registry.clear_override();
                }
                tokio::task::yield_now().await;
            }
        }));
    }

    for _ in 0..8 {
        let registry = harness.registry.clone();
        tasks.push(tokio::spawn(async move {
            for _ in 0..50 {
                let resolved = registry.resolve(&host(), &config("work", false)).await.unwrap();
                let name = resolved.provider_name();
                assert!(name == "pinned" || name == "default", "unexpected provider {name}");
            }
        }));
    }

    for task in tasks {
        task.await.unwrap();
    }

    for call in harness.default_backend.calls() {
        assert_eq!(call.as_deref(), Some("work"));
    }
}

/// Override that parks until released, to observe what the registry does meanwhile
struct GatedStrategy {
    entered: Notify,
    release: Notify,
    answer: CredentialProvider,
}

#[async_trait]
impl CustomResolutionStrategy for GatedStrategy {
    async fn resolve(
        &self,
        _host: &HostInfo,
        _config: &ResolutionConfig,
    ) -> Result<Option<CredentialProvider>, BoxError> {
        self.entered.notify_one();
        self.release.notified().await;
        Ok(Some(self.answer.clone()))
    }
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn slow_override_does_not_block_writers() {
    let harness = Harness::new();
    let gated = Arc::new(GatedStrategy {
        entered: Notify::new(),
        release: Notify::new(),
        answer: provider("gated"),
    });
    harness.registry.install_override(gated.clone());

    let registry = harness.registry.clone();
    let (done_tx, done_rx) = oneshot::channel();
    tokio::spawn(async move {
        let result = registry.resolve(&host(), &config("", false)).await;
        let _ = done_tx.send(result);
    });

    gated.entered.notified().await;

    // Writers must get the lock while the strategy is still running
    let writers = tokio::time::timeout(Duration::from_secs(5), async {
        harness.registry.clear_override();
        harness
            .registry
            .install_override(FixedStrategy::supplying(provider("next")));
    })
    .await;
    assert!(writers.is_ok(), "install/clear blocked behind a running override");

    // A fresh resolve sees the new override right away
    let fresh = harness
        .registry
        .resolve(&host(), &config("", false))
        .await
        .unwrap();
    assert_eq!(fresh.provider_name(), "next");

    // The in-flight resolve finishes with the strategy it started with
    gated.release.notify_one();
    let in_flight = done_rx.await.unwrap().unwrap();
    assert_eq!(in_flight.provider_name(), "gated");
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn parallel_resolves_all_reach_backend() {
    let harness = Arc::new(Harness::new());

    let handles: Vec<_> = (0..32)
        .map(|i| {
            let harness = Arc::clone(&harness);
            tokio::spawn(async move {
                let federated = i % 2 == 0;
                let profile = if federated { "prod" } else { "work" };
                harness
                    .registry
                    .resolve(&host(), &config(profile, federated))
                    .await
                    .map(|provider| provider.provider_name().to_string())
            })
        })
        .collect();

    for (i, handle) in handles.into_iter().enumerate() {
        let name = handle.await.unwrap().unwrap();
        let expected = if i % 2 == 0 { "federated" } else { "default" };
        assert_eq!(name, expected);
    }

    assert_eq!(harness.default_backend.calls().len(), 16);
    assert_eq!(harness.federated_backend.calls().len(), 16);
}
