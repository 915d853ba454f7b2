//! ResourceStore - the immutable, shared catalog

use std::collections::HashMap;
use std::path::Path;
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::domains::resources::error::CatalogError;
use crate::domains::resources::models::{Resource, ResourceRecord};

/// Result of the duplicate scan over the catalog.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ValidationReport {
    pub duplicate_ids: Vec<String>,
    pub duplicate_urls: Vec<String>,
    pub is_valid: bool,
}

/// Catalog loaded once at startup. Cloning shares the underlying entries.
#[derive(Debug, Clone)]
pub struct ResourceStore {
    resources: Arc<[Resource]>,
}

impl ResourceStore {
    pub fn new(resources: Vec<Resource>) -> Self {
        Self {
            resources: resources.into(),
        }
    }

    /// Parse a catalog from its JSON text (an array of records).
    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        let records: Vec<ResourceRecord> = serde_json::from_str(json)?;
        let resources = records
            .into_iter()
            .map(Resource::try_from)
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self::new(resources))
    }

    /// Read and parse the catalog file, then log the duplicate scan.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, CatalogError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|source| CatalogError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        let store = Self::from_json(&json)?;
        info!(path = %path.display(), count = store.len(), "Catalog loaded");

        let report = store.validate();
        if !report.is_valid {
            warn!(
                duplicate_ids = ?report.duplicate_ids,
                duplicate_urls = ?report.duplicate_urls,
                "Catalog contains duplicates; serving it unchanged"
            );
        }

        Ok(store)
    }

    /// Every resource, in catalog order.
    pub fn get_all(&self) -> &[Resource] {
        &self.resources
    }

    pub fn len(&self) -> usize {
        self.resources.len()
    }

    pub fn is_empty(&self) -> bool {
        self.resources.is_empty()
    }

    pub fn get(&self, id: &str) -> Option<&Resource> {
        self.resources.iter().find(|r| r.id == id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.get(id).is_some()
    }

    /// Exact, case-sensitive match on the category label. Unknown labels
    /// yield an empty list.
    pub fn get_by_category(&self, category: &str) -> Vec<&Resource> {
        self.resources
            .iter()
            .filter(|r| r.category.as_str() == category)
            .collect()
    }

    /// Case-insensitive substring search over title, description and tags.
    pub fn search(&self, query: &str) -> Vec<&Resource> {
        let query = query.to_lowercase();
        self.resources
            .iter()
            .filter(|r| r.matches_query(&query))
            .collect()
    }

    /// Scan for repeated ids and urls.
    ///
    /// A value is reported when it is seen for the second time, so a value
    /// repeated three or more times still appears once.
    pub fn validate(&self) -> ValidationReport {
        let mut id_counts: HashMap<&str, usize> = HashMap::new();
        let mut url_counts: HashMap<&str, usize> = HashMap::new();
        let mut duplicate_ids = Vec::new();
        let mut duplicate_urls = Vec::new();

        for resource in self.resources.iter() {
            let seen = id_counts.entry(resource.id.as_str()).or_insert(0);
            if *seen == 1 {
                duplicate_ids.push(resource.id.clone());
            }
            *seen += 1;

            let seen = url_counts.entry(resource.url.as_str()).or_insert(0);
            if *seen == 1 {
                duplicate_urls.push(resource.url.clone());
            }
            *seen += 1;
        }

        let is_valid = duplicate_ids.is_empty() && duplicate_urls.is_empty();
        ValidationReport {
            duplicate_ids,
            duplicate_urls,
            is_valid,
        }
    }
}
