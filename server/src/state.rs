use std::sync::Arc;
use std::time::Duration;

use catalog::model::Inquiry;
use catalog::store::read_inquiries;
use tokio::sync::RwLock;
use tracing::info;

use super::{cache::CatalogCache, config::Config};

pub struct State {
    pub config: Config,
    pub catalog_cache: CatalogCache,
    pub inquiries: RwLock<Vec<Inquiry>>,
}

impl State {
    pub async fn new() -> Arc<Self> {
        let config = Config::load();

        let catalog_cache = CatalogCache::new(
            config.catalog_source(),
            Duration::from_secs(config.catalog_ttl_secs),
        );

        // fail fast on a bad catalog source instead of on the first request
        let snapshot = catalog_cache.get().await.expect("Catalog misconfigured!");
        info!(
            "Loaded {} technologies, {} combinations",
            snapshot.technologies.len(),
            snapshot.combinations.len()
        );

        let inquiries = read_inquiries(&config.inquiries_path).expect("Inquiry log unreadable!");
        info!("Loaded {} inquiries", inquiries.len());

        Arc::new(Self {
            config,
            catalog_cache,
            inquiries: RwLock::new(inquiries),
        })
    }
}
