use std::sync::Arc;

use tokio::sync::RwLock;

use crate::domain::record::parse_table;
use crate::domain::tool::{category_names, normalize_records, placeholder_tools, Tool};
use crate::errors::DataLoadError;

/// The normalized tool catalog for the current session, plus its derived
/// category set. Built once per successful fetch and only ever read after.
pub struct Catalog {
    pub tools: Vec<Tool>,
    pub categories: Vec<String>,
}

impl Catalog {
    /// Detail lookup by name, case-insensitive. The path segment arrives
    /// already percent-decoded.
    pub fn find(&self, name: &str) -> Option<&Tool> {
        let needle = name.to_lowercase();
        self.tools.iter().find(|tool| tool.name.to_lowercase() == needle)
    }
}

/// Fetches and caches the tool resource. The listing and detail routes share
/// one parsed catalog per session; the cache is replaced only by an explicit
/// reload, and only on success.
pub struct CatalogClient {
    client: reqwest::Client,
    data_url: String,
    placeholder_fallback: bool,
    cache: RwLock<Option<Arc<Catalog>>>,
}

impl CatalogClient {
    pub fn new(data_url: String, placeholder_fallback: bool) -> Self {
        CatalogClient {
            client: reqwest::Client::new(),
            data_url,
            placeholder_fallback,
            cache: RwLock::new(None),
        }
    }

    pub async fn catalog(&self) -> Result<Arc<Catalog>, DataLoadError> {
        if let Some(catalog) = self.cache.read().await.as_ref() {
            return Ok(catalog.clone());
        }
        self.refresh().await
    }

    /// Single fetch-and-parse attempt, no retry. A failure leaves any
    /// previously cached catalog in place.
    pub async fn refresh(&self) -> Result<Arc<Catalog>, DataLoadError> {
        let body = self.fetch_text().await?;
        let catalog = Arc::new(parse_catalog(&body, self.placeholder_fallback)?);
        log::info!(
            "Catalog loaded: {} tools, {} categories",
            catalog.tools.len(),
            catalog.categories.len()
        );

        *self.cache.write().await = Some(catalog.clone());
        Ok(catalog)
    }

    async fn fetch_text(&self) -> Result<String, DataLoadError> {
        let response = self.client.get(&self.data_url).send().await?;
        if !response.status().is_success() {
            return Err(DataLoadError::Status(response.status()));
        }
        Ok(response.text().await?)
    }
}

pub fn parse_catalog(body: &str, placeholder_fallback: bool) -> Result<Catalog, DataLoadError> {
    let records = parse_table(body)?;
    let mut tools = normalize_records(&records);

    if tools.is_empty() && placeholder_fallback {
        log::warn!("No valid tools in the resource, falling back to placeholder data");
        tools = placeholder_tools();
    }

    let categories = category_names(&tools);
    Ok(Catalog { tools, categories })
}
