//! Resource model - one entry of the curated catalog
//!
//! The catalog JSON is read into [`ResourceRecord`]s and converted into
//! [`Resource`]s at load time. The conversion is where ids are derived from
//! titles and where categories and dates are checked.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::common::utils::{contains_lowered, parse_added_on, slugify};
use crate::domains::resources::error::CatalogError;
use crate::domains::resources::models::Category;

/// Raw catalog record, exactly as stored in `resources.json`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ResourceRecord {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub title: String,
    pub url: String,
    pub description: String,
    pub category: String,
    #[serde(default)]
    pub tags: Vec<String>,
    pub added_on: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_featured: Option<bool>,
}

/// A validated catalog entry.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase", try_from = "ResourceRecord")]
pub struct Resource {
    pub id: String,
    pub title: String,
    pub url: String,
    pub description: String,
    pub category: Category,
    pub tags: Vec<String>,
    /// `addedOn` exactly as written in the catalog
    pub added_on: String,
    pub is_featured: bool,

    /// `added_on` parsed, used for chronological ordering
    #[serde(skip)]
    pub added_at: DateTime<Utc>,
}

impl TryFrom<ResourceRecord> for Resource {
    type Error = CatalogError;

    fn try_from(record: ResourceRecord) -> Result<Self, Self::Error> {
        let id = match record.id {
            Some(id) if !id.is_empty() => id,
            _ => slugify(&record.title),
        };

        let category = record
            .category
            .parse::<Category>()
            .map_err(|_| CatalogError::InvalidCategory {
                id: id.clone(),
                category: record.category.clone(),
            })?;

        let added_at = parse_added_on(&record.added_on).ok_or_else(|| CatalogError::InvalidDate {
            id: id.clone(),
            added_on: record.added_on.clone(),
        })?;

        Ok(Self {
            id,
            title: record.title,
            url: record.url,
            description: record.description,
            category,
            tags: record.tags,
            added_on: record.added_on,
            is_featured: record.is_featured.unwrap_or(false),
            added_at,
        })
    }
}

impl Resource {
    /// Whether `query_lower` (already lower-cased) is a substring of the title,
    /// the description or any tag.
    pub fn matches_query(&self, query_lower: &str) -> bool {
        contains_lowered(&self.title, query_lower)
            || contains_lowered(&self.description, query_lower)
            || self.tags.iter().any(|tag| contains_lowered(tag, query_lower))
    }
}
