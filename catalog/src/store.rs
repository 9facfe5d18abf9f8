//! Catalog persistence.
//!
//! The catalog lives in a JSON file, either local on disk or mirrored behind
//! a URL (the sheet-export mirror the admin tooling publishes). Either way a
//! load produces one complete [`Catalog`] snapshot; readers never observe a
//! half-written view.
//!
//! Inquiries are appended to their own JSON file next to the catalog.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Error};
use reqwest::get;

use crate::model::{Catalog, Inquiry};

/// Where the catalog snapshot comes from.
#[derive(Debug, Clone)]
pub enum CatalogSource {
    File(PathBuf),
    Remote(String),
}

impl CatalogSource {
    /// Load one full catalog snapshot from the configured source.
    pub async fn load(&self) -> Result<Catalog, Error> {
        match self {
            CatalogSource::File(path) => read_catalog(path),
            CatalogSource::Remote(url) => fetch_catalog(url).await,
        }
    }
}

pub fn read_catalog(path: &Path) -> Result<Catalog, Error> {
    let data = fs::read_to_string(path)
        .with_context(|| format!("Failed to read catalog file {}", path.display()))?;

    serde_json::from_str(&data)
        .with_context(|| format!("Malformed catalog file {}", path.display()))
}

pub fn write_catalog(path: &Path, catalog: &Catalog) -> Result<(), Error> {
    let data = serde_json::to_string_pretty(catalog)?;

    fs::write(path, data)
        .with_context(|| format!("Failed to write catalog file {}", path.display()))
}

pub async fn fetch_catalog(url: &str) -> Result<Catalog, Error> {
    let response = get(url)
        .await
        .with_context(|| format!("Failed to fetch catalog from {url}"))?;

    response
        .error_for_status()
        .with_context(|| format!("Catalog mirror {url} answered with an error status"))?
        .json()
        .await
        .with_context(|| format!("Malformed catalog payload from {url}"))
}

/// Read the inquiry log. A missing file is an empty log, not an error.
pub fn read_inquiries(path: &Path) -> Result<Vec<Inquiry>, Error> {
    if !path.exists() {
        return Ok(Vec::new());
    }

    let data = fs::read_to_string(path)
        .with_context(|| format!("Failed to read inquiry log {}", path.display()))?;

    serde_json::from_str(&data)
        .with_context(|| format!("Malformed inquiry log {}", path.display()))
}

pub fn write_inquiries(path: &Path, inquiries: &[Inquiry]) -> Result<(), Error> {
    let data = serde_json::to_string_pretty(inquiries)?;

    fs::write(path, data)
        .with_context(|| format!("Failed to write inquiry log {}", path.display()))
}
