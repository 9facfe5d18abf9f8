use std::{env, fmt::Display, path::PathBuf, str::FromStr};

use catalog::store::CatalogSource;
use tracing::{info, warn};

pub struct Config {
    pub port: u16,
    pub catalog_path: PathBuf,
    pub catalog_url: Option<String>,
    pub catalog_ttl_secs: u64,
    pub inquiries_path: PathBuf,
}

impl Config {
    pub fn load() -> Self {
        Self {
            port: try_load("RUST_PORT", "1111"),
            catalog_path: PathBuf::from(try_load::<String>("CATALOG_PATH", "catalog.json")),
            catalog_url: var("CATALOG_URL").ok(),
            catalog_ttl_secs: try_load("CATALOG_TTL_SECS", "300"),
            inquiries_path: PathBuf::from(try_load::<String>("INQUIRIES_PATH", "inquiries.json")),
        }
    }

    /// Remote mirror when `CATALOG_URL` is set, local file otherwise.
    pub fn catalog_source(&self) -> CatalogSource {
        match &self.catalog_url {
            Some(url) => CatalogSource::Remote(url.clone()),
            None => CatalogSource::File(self.catalog_path.clone()),
        }
    }
}

fn var(key: &str) -> Result<String, ()> {
    env::var(key).map_err(|_| {
        warn!("Environment variable {key} not found, using default");
    })
}

fn try_load<T: FromStr>(key: &str, default: &str) -> T
where
    T::Err: Display,
{
    var(key)
        .unwrap_or_else(|_| {
            info!("{key} not set, using default: {default}");
            default.to_string()
        })
        .parse()
        .map_err(|e| {
            warn!("Invalid {key} value: {e}");
        })
        .expect("Environment misconfigured!")
}
