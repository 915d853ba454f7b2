//! Test fixtures for catalog entries.

use directory_core::domains::resources::{Resource, ResourceRecord, ResourceStore};

/// Builder for catalog entries with sensible defaults.
pub struct ResourceBuilder {
    record: ResourceRecord,
}

impl ResourceBuilder {
    pub fn new(id: &str, title: &str) -> Self {
        Self {
            record: ResourceRecord {
                id: Some(id.to_string()),
                title: title.to_string(),
                url: format!("https://example.com/{}", id),
                description: format!("About {}", title),
                category: "Tool".to_string(),
                tags: Vec::new(),
                added_on: "2024-01-01".to_string(),
                is_featured: None,
            },
        }
    }

    pub fn category(mut self, category: &str) -> Self {
        self.record.category = category.to_string();
        self
    }

    pub fn tags(mut self, tags: &[&str]) -> Self {
        self.record.tags = tags.iter().map(|t| t.to_string()).collect();
        self
    }

    pub fn added_on(mut self, added_on: &str) -> Self {
        self.record.added_on = added_on.to_string();
        self
    }

    pub fn featured(mut self) -> Self {
        self.record.is_featured = Some(true);
        self
    }

    pub fn url(mut self, url: &str) -> Self {
        self.record.url = url.to_string();
        self
    }

    pub fn description(mut self, description: &str) -> Self {
        self.record.description = description.to_string();
        self
    }

    pub fn build(self) -> Resource {
        Resource::try_from(self.record).expect("fixture resource should be valid")
    }
}

pub fn resource(id: &str, title: &str) -> ResourceBuilder {
    ResourceBuilder::new(id, title)
}

/// Two-entry catalog: "a" (React Guide, Framework) and "b" (CSS Basics, CSS, featured).
pub fn react_and_css_catalog() -> Vec<Resource> {
    vec![
        resource("a", "React Guide")
            .category("Framework")
            .tags(&["react"])
            .added_on("2024-01-01")
            .build(),
        resource("b", "CSS Basics")
            .category("CSS")
            .tags(&["css"])
            .added_on("2024-06-01")
            .featured()
            .build(),
    ]
}

pub fn react_and_css_store() -> ResourceStore {
    ResourceStore::new(react_and_css_catalog())
}
