// In-memory catalog cache owned by the calling service
use std::collections::HashMap;
use std::sync::Arc;
use chrono::{DateTime, Utc};
use crate::client::{CatalogSource, ClientError};
use crate::models::{Item, Quest};
use crate::operations::{build_deep_recycle_table, RecycleTable};
use crate::{v_debug, v_info};

/// Item and quest catalogs with the recycle table derived from them.
///
/// The table is always built from `items`, so the two never disagree.
#[derive(Debug, Clone)]
pub struct CatalogSnapshot {
    pub items: HashMap<String, Item>,
    pub quests: HashMap<String, Quest>,
    pub recycle_table: RecycleTable,
    pub fetched_at: DateTime<Utc>,
}

impl CatalogSnapshot {
    pub fn build(items: HashMap<String, Item>, quests: HashMap<String, Quest>) -> Self {
        v_info!("♻️ Building deep recycle value table for {} items", items.len());
        let recycle_table = build_deep_recycle_table(&items);
        Self {
            items,
            quests,
            recycle_table,
            fetched_at: Utc::now(),
        }
    }
}

/// Holds one catalog snapshot and reloads it when it goes stale.
///
/// Nothing is written to disk; a restart starts empty.
pub struct CatalogCache {
    snapshot: Option<Arc<CatalogSnapshot>>,
    refresh_hours: i64,
}

impl CatalogCache {
    pub fn new(refresh_hours: i64) -> Self {
        Self {
            snapshot: None,
            refresh_hours,
        }
    }

    /// Current snapshot, stale or not
    pub fn snapshot(&self) -> Option<Arc<CatalogSnapshot>> {
        self.snapshot.clone()
    }

    pub fn is_stale(&self) -> bool {
        match &self.snapshot {
            Some(snapshot) => {
                let age_hours = Utc::now().signed_duration_since(snapshot.fetched_at).num_hours();
                age_hours >= self.refresh_hours
            }
            None => true,
        }
    }

    pub fn invalidate(&mut self) {
        if self.snapshot.take().is_some() {
            v_debug!("🗑️ Catalog cache invalidated");
        }
    }

    /// Install catalogs fetched elsewhere
    pub fn install(&mut self, items: HashMap<String, Item>, quests: HashMap<String, Quest>) -> Arc<CatalogSnapshot> {
        let snapshot = Arc::new(CatalogSnapshot::build(items, quests));
        self.snapshot = Some(Arc::clone(&snapshot));
        snapshot
    }

    /// Return the cached snapshot, loading it first if missing or stale
    pub async fn ensure(&mut self, source: &dyn CatalogSource) -> Result<Arc<CatalogSnapshot>, ClientError> {
        if !self.is_stale() {
            if let Some(snapshot) = &self.snapshot {
                v_debug!("📋 Using cached catalogs from {}", snapshot.fetched_at.format("%H:%M:%S UTC"));
                return Ok(Arc::clone(snapshot));
            }
        }
        self.refresh(source).await
    }

    /// Reload both catalogs unconditionally.
    ///
    /// On failure the previous snapshot, if any, is kept.
    pub async fn refresh(&mut self, source: &dyn CatalogSource) -> Result<Arc<CatalogSnapshot>, ClientError> {
        v_info!("📡 Fetching item and quest catalogs");
        let items = source.fetch_items().await?;
        let quests = source.fetch_quests().await?;
        Ok(self.install(items, quests))
    }
}
