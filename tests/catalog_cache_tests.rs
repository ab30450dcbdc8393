mod common;

use arc_stash::client::{CatalogSource, ClientError};
use arc_stash::storage::CatalogCache;
use arc_stash::{Item, Quest};
use async_trait::async_trait;
use common::*;
use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};

struct FakeSource {
    item_fetches: AtomicUsize,
    fail: bool,
}

impl FakeSource {
    fn new() -> Self {
        Self { item_fetches: AtomicUsize::new(0), fail: false }
    }

    fn fetches(&self) -> usize {
        self.item_fetches.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl CatalogSource for FakeSource {
    async fn fetch_items(&self) -> Result<HashMap<String, Item>, ClientError> {
        self.item_fetches.fetch_add(1, Ordering::SeqCst);
        if self.fail {
            return Err(ClientError::Config("offline".to_string()));
        }
        Ok(weapon_catalog())
    }

    async fn fetch_quests(&self) -> Result<HashMap<String, Quest>, ClientError> {
        Ok(quests(vec![quest("q1", &[], &["metal"], &[])]))
    }
}

#[tokio::test]
async fn test_first_ensure_loads_and_builds_table() {
    let source = FakeSource::new();
    let mut cache = CatalogCache::new(12);
    assert!(cache.is_stale());
    assert!(cache.snapshot().is_none());

    let snapshot = cache.ensure(&source).await.expect("loads");
    assert_eq!(snapshot.items.len(), 4);
    assert_eq!(snapshot.quests.len(), 1);
    assert_eq!(snapshot.recycle_table["weapon"], 3200);
    assert_eq!(snapshot.recycle_table.len(), snapshot.items.len());
    assert!(!cache.is_stale());
}

#[tokio::test]
async fn test_fresh_cache_is_reused() {
    let source = FakeSource::new();
    let mut cache = CatalogCache::new(12);

    cache.ensure(&source).await.expect("loads");
    cache.ensure(&source).await.expect("reuses");
    assert_eq!(source.fetches(), 1);
}

#[tokio::test]
async fn test_invalidate_forces_reload() {
    let source = FakeSource::new();
    let mut cache = CatalogCache::new(12);

    cache.ensure(&source).await.expect("loads");
    cache.invalidate();
    assert!(cache.snapshot().is_none());
    cache.ensure(&source).await.expect("reloads");
    assert_eq!(source.fetches(), 2);
}

#[tokio::test]
async fn test_refresh_always_fetches() {
    let source = FakeSource::new();
    let mut cache = CatalogCache::new(12);

    cache.ensure(&source).await.expect("loads");
    cache.refresh(&source).await.expect("refreshes");
    assert_eq!(source.fetches(), 2);
}

#[tokio::test]
async fn test_failed_refresh_keeps_previous_snapshot() {
    let mut cache = CatalogCache::new(12);
    cache.ensure(&FakeSource::new()).await.expect("loads");

    let broken = FakeSource { item_fetches: AtomicUsize::new(0), fail: true };
    assert!(cache.refresh(&broken).await.is_err());
    assert_eq!(cache.snapshot().map(|s| s.items.len()), Some(4));
}

#[test]
fn test_install_builds_snapshot_without_a_source() {
    let mut cache = CatalogCache::new(1);
    let snapshot = cache.install(weapon_catalog(), HashMap::new());
    assert_eq!(snapshot.recycle_table["mech_comp"], 325);
    assert!(cache.snapshot().is_some());
}
