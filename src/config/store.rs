//! Atomic configuration store.
//!
//! # Responsibilities
//! - Hold the current `InertiaConfig` behind an atomic pointer
//! - Apply shallow last-writer-wins merges
//! - Hand out `Arc` snapshots so a request never observes a torn config
//!
//! # Design Decisions
//! - Writes are expected at startup/route registration; interleaving writes
//!   with live traffic is memory-safe but racy at the protocol level
//!   (in-flight requests keep the snapshot they started with)

use std::sync::Arc;

use arc_swap::ArcSwap;

use crate::config::schema::{ConfigUpdate, InertiaConfig};

/// Shared configuration store for one engine instance.
pub struct ConfigStore {
    current: ArcSwap<InertiaConfig>,
}

impl ConfigStore {
    pub fn new(config: InertiaConfig) -> Self {
        Self {
            current: ArcSwap::from_pointee(config),
        }
    }

    /// Current configuration snapshot.
    pub fn snapshot(&self) -> Arc<InertiaConfig> {
        self.current.load_full()
    }

    /// Shallow-merge `update` over the current configuration and publish
    /// the result atomically.
    pub fn update(&self, update: ConfigUpdate) {
        let next = self.current.load().merged(update);
        self.current.store(Arc::new(next));
    }
}

impl Default for ConfigStore {
    fn default() -> Self {
        Self::new(InertiaConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_snapshot_is_stable_across_updates() {
        let store = ConfigStore::default();
        let before = store.snapshot();

        store.update(ConfigUpdate::new().view("changed"));

        // The snapshot taken before the update is unaffected.
        assert_eq!(before.view, "app");
        assert_eq!(store.snapshot().view, "changed");
    }

    #[test]
    fn test_sequential_updates_merge() {
        let store = ConfigStore::default();
        store.update(ConfigUpdate::new().version(2u64));
        store.update(ConfigUpdate::new().view("x"));

        let config = store.snapshot();
        assert_eq!(config.version.token(), "2");
        assert_eq!(config.view, "x");
    }
}
