use super::{ArticleCatalog, ArticleRef, FlowRecord, FlowStore, FlowSummary};
use crate::error::StoreError;
use crate::graph::Graph;
use ahash::AHashMap;
use chrono::{DateTime, Utc};
use itertools::Itertools;

/// In-memory implementation of both collaborator traits, used by tests and
/// demos. Keyed by slug, like the hosted store it stands in for.
#[derive(Debug, Default)]
pub struct MemoryStore {
    flows: AHashMap<String, FlowRecord>,
    articles: Vec<ArticleRef>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_flow(mut self, record: FlowRecord) -> Self {
        self.flows.insert(record.slug.clone(), record);
        self
    }

    pub fn with_article(mut self, article: ArticleRef) -> Self {
        self.articles.push(article);
        self
    }

    pub fn flow_count(&self) -> usize {
        self.flows.len()
    }
}

impl FlowStore for MemoryStore {
    fn load_flow(&self, slug: &str) -> Result<FlowRecord, StoreError> {
        self.flows
            .get(slug)
            .cloned()
            .ok_or_else(|| StoreError::FlowNotFound {
                slug: slug.to_string(),
            })
    }

    fn save_graph(&mut self, slug: &str, graph: &Graph) -> Result<DateTime<Utc>, StoreError> {
        let record = self
            .flows
            .get_mut(slug)
            .ok_or_else(|| StoreError::FlowNotFound {
                slug: slug.to_string(),
            })?;
        record.graph = graph.clone();
        record.updated_at = Utc::now();
        Ok(record.updated_at)
    }

    fn insert_flow(&mut self, record: FlowRecord) -> Result<(), StoreError> {
        if self.flows.contains_key(&record.slug) {
            return Err(StoreError::SlugTaken {
                slug: record.slug.clone(),
            });
        }
        self.flows.insert(record.slug.clone(), record);
        Ok(())
    }

    fn rename_flow(
        &mut self,
        slug: &str,
        new_name: &str,
        new_slug: &str,
    ) -> Result<(), StoreError> {
        if new_slug != slug && self.flows.contains_key(new_slug) {
            return Err(StoreError::SlugTaken {
                slug: new_slug.to_string(),
            });
        }
        let mut record = self
            .flows
            .remove(slug)
            .ok_or_else(|| StoreError::FlowNotFound {
                slug: slug.to_string(),
            })?;
        record.name = new_name.to_string();
        record.slug = new_slug.to_string();
        record.updated_at = Utc::now();
        self.flows.insert(new_slug.to_string(), record);
        Ok(())
    }

    fn delete_flow(&mut self, slug: &str) -> Result<(), StoreError> {
        self.flows
            .remove(slug)
            .map(|_| ())
            .ok_or_else(|| StoreError::FlowNotFound {
                slug: slug.to_string(),
            })
    }

    fn list_flows(&self) -> Result<Vec<FlowSummary>, StoreError> {
        Ok(self
            .flows
            .values()
            .map(FlowSummary::from)
            .sorted_by(|a, b| a.name.cmp(&b.name))
            .collect())
    }

    fn default_slug(&self) -> Result<Option<String>, StoreError> {
        Ok(self
            .flows
            .values()
            .find(|r| r.is_default)
            .map(|r| r.slug.clone()))
    }

    fn clear_default(&mut self) -> Result<(), StoreError> {
        for record in self.flows.values_mut() {
            record.is_default = false;
        }
        Ok(())
    }

    fn mark_default(&mut self, slug: &str) -> Result<(), StoreError> {
        let record = self
            .flows
            .get_mut(slug)
            .ok_or_else(|| StoreError::FlowNotFound {
                slug: slug.to_string(),
            })?;
        record.is_default = true;
        Ok(())
    }
}

impl ArticleCatalog for MemoryStore {
    fn articles(&self) -> Result<Vec<ArticleRef>, StoreError> {
        Ok(self.articles.clone())
    }
}
