//! TTL-expiring catalog snapshot.
//!
//! Admin edits land in the catalog store, not in this process, so the server
//! re-reads the store when its snapshot goes stale. `invalidate` drops the
//! snapshot explicitly for the admin path that wants edits visible now.

use std::sync::Arc;
use std::time::{Duration, Instant};

use anyhow::Error;
use catalog::model::Catalog;
use catalog::store::CatalogSource;
use tokio::sync::RwLock;
use tracing::info;

struct CacheEntry {
    catalog: Arc<Catalog>,
    loaded_at: Instant,
}

impl CacheEntry {
    fn is_expired(&self, ttl: Duration) -> bool {
        self.loaded_at.elapsed() >= ttl
    }
}

pub struct CatalogCache {
    source: CatalogSource,
    ttl: Duration,
    entry: RwLock<Option<CacheEntry>>,
}

impl CatalogCache {
    pub fn new(source: CatalogSource, ttl: Duration) -> Self {
        Self {
            source,
            ttl,
            entry: RwLock::new(None),
        }
    }

    /// Current catalog snapshot, reloading from the source when the cached
    /// one is stale. Handlers hold the returned `Arc` for the whole request,
    /// so a reload mid-request cannot produce an inconsistent view.
    pub async fn get(&self) -> Result<Arc<Catalog>, Error> {
        {
            let guard = self.entry.read().await;
            if let Some(entry) = guard.as_ref()
                && !entry.is_expired(self.ttl)
            {
                return Ok(entry.catalog.clone());
            }
        }

        let mut guard = self.entry.write().await;

        // another task may have reloaded while we waited for the write lock
        if let Some(entry) = guard.as_ref()
            && !entry.is_expired(self.ttl)
        {
            return Ok(entry.catalog.clone());
        }

        let catalog = Arc::new(self.source.load().await?);
        info!(
            "Catalog reloaded: {} technologies, {} combinations",
            catalog.technologies.len(),
            catalog.combinations.len()
        );

        *guard = Some(CacheEntry {
            catalog: catalog.clone(),
            loaded_at: Instant::now(),
        });

        Ok(catalog)
    }

    pub async fn invalidate(&self) {
        *self.entry.write().await = None;

        info!("Catalog cache invalidated");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use catalog::store::write_catalog;

    fn temp_catalog_file(name: &str, catalog: &Catalog) -> std::path::PathBuf {
        let dir = std::env::temp_dir().join("catalog-cache-test");
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join(name);
        write_catalog(&path, catalog).unwrap();
        path
    }

    #[tokio::test]
    async fn test_snapshot_is_reused_within_ttl() {
        let path = temp_catalog_file("reused.json", &Catalog::default());
        let cache = CatalogCache::new(CatalogSource::File(path), Duration::from_secs(3600));

        let first = cache.get().await.unwrap();
        let second = cache.get().await.unwrap();

        assert!(Arc::ptr_eq(&first, &second));
    }

    #[tokio::test]
    async fn test_invalidate_forces_a_reload() {
        let path = temp_catalog_file("invalidated.json", &Catalog::default());
        let cache =
            CatalogCache::new(CatalogSource::File(path), Duration::from_secs(3600));

        let first = cache.get().await.unwrap();
        cache.invalidate().await;
        let second = cache.get().await.unwrap();

        assert!(!Arc::ptr_eq(&first, &second));
    }

    #[tokio::test]
    async fn test_zero_ttl_reloads_every_read() {
        let path = temp_catalog_file("zero-ttl.json", &Catalog::default());
        let cache = CatalogCache::new(CatalogSource::File(path), Duration::from_secs(0));

        let first = cache.get().await.unwrap();
        let second = cache.get().await.unwrap();

        assert!(!Arc::ptr_eq(&first, &second));
    }
}
