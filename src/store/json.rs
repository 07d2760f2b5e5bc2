use super::{ArticleCatalog, ArticleRef, FlowRecord, FlowStore, FlowSummary};
use crate::error::StoreError;
use crate::graph::Graph;
use chrono::{DateTime, Utc};
use itertools::Itertools;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Serialized shape of the on-disk collection document.
#[derive(Debug, Default, Serialize, Deserialize)]
struct StoreDocument {
    #[serde(default)]
    flows: Vec<FlowRecord>,
    #[serde(default)]
    articles: Vec<ArticleRef>,
}

/// A flow collection persisted as a single JSON document on disk.
///
/// The whole document is read on open and rewritten after every mutation;
/// collections are small (a handful of flows) so this stays well inside the
/// tool's single-operator usage pattern.
#[derive(Debug)]
pub struct JsonFlowStore {
    path: PathBuf,
    doc: StoreDocument,
}

impl JsonFlowStore {
    /// Opens a store document, treating a missing file as an empty
    /// collection that will be created on the first write.
    pub fn open(path: impl AsRef<Path>) -> Result<Self, StoreError> {
        let path = path.as_ref().to_path_buf();
        let doc = match fs::read_to_string(&path) {
            Ok(json) => serde_json::from_str(&json)
                .map_err(|e| StoreError::Backend(format!("Malformed store document: {}", e)))?,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => StoreDocument::default(),
            Err(e) => {
                return Err(StoreError::Backend(format!(
                    "Could not read store document '{}': {}",
                    path.display(),
                    e
                )));
            }
        };
        Ok(Self { path, doc })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Replaces the article catalog portion of the document. The catalog is
    /// owned by the article-management collaborator; this hook exists for
    /// seeding demo stores.
    pub fn set_articles(&mut self, articles: Vec<ArticleRef>) -> Result<(), StoreError> {
        self.doc.articles = articles;
        self.persist()
    }

    fn persist(&self) -> Result<(), StoreError> {
        let json = serde_json::to_string_pretty(&self.doc)
            .map_err(|e| StoreError::Backend(format!("Serialization failed: {}", e)))?;
        fs::write(&self.path, json).map_err(|e| {
            StoreError::Backend(format!(
                "Could not write store document '{}': {}",
                self.path.display(),
                e
            ))
        })
    }

    fn find(&self, slug: &str) -> Result<usize, StoreError> {
        self.doc
            .flows
            .iter()
            .position(|r| r.slug == slug)
            .ok_or_else(|| StoreError::FlowNotFound {
                slug: slug.to_string(),
            })
    }
}

impl FlowStore for JsonFlowStore {
    fn load_flow(&self, slug: &str) -> Result<FlowRecord, StoreError> {
        let idx = self.find(slug)?;
        Ok(self.doc.flows[idx].clone())
    }

    fn save_graph(&mut self, slug: &str, graph: &Graph) -> Result<DateTime<Utc>, StoreError> {
        let idx = self.find(slug)?;
        self.doc.flows[idx].graph = graph.clone();
        self.doc.flows[idx].updated_at = Utc::now();
        let updated_at = self.doc.flows[idx].updated_at;
        self.persist()?;
        Ok(updated_at)
    }

    fn insert_flow(&mut self, record: FlowRecord) -> Result<(), StoreError> {
        if self.find(&record.slug).is_ok() {
            return Err(StoreError::SlugTaken {
                slug: record.slug.clone(),
            });
        }
        self.doc.flows.push(record);
        self.persist()
    }

    fn rename_flow(
        &mut self,
        slug: &str,
        new_name: &str,
        new_slug: &str,
    ) -> Result<(), StoreError> {
        if new_slug != slug && self.find(new_slug).is_ok() {
            return Err(StoreError::SlugTaken {
                slug: new_slug.to_string(),
            });
        }
        let idx = self.find(slug)?;
        self.doc.flows[idx].name = new_name.to_string();
        self.doc.flows[idx].slug = new_slug.to_string();
        self.doc.flows[idx].updated_at = Utc::now();
        self.persist()
    }

    fn delete_flow(&mut self, slug: &str) -> Result<(), StoreError> {
        let idx = self.find(slug)?;
        self.doc.flows.remove(idx);
        self.persist()
    }

    fn list_flows(&self) -> Result<Vec<FlowSummary>, StoreError> {
        Ok(self
            .doc
            .flows
            .iter()
            .map(FlowSummary::from)
            .sorted_by(|a, b| a.name.cmp(&b.name))
            .collect())
    }

    fn default_slug(&self) -> Result<Option<String>, StoreError> {
        Ok(self
            .doc
            .flows
            .iter()
            .find(|r| r.is_default)
            .map(|r| r.slug.clone()))
    }

    fn clear_default(&mut self) -> Result<(), StoreError> {
        for record in &mut self.doc.flows {
            record.is_default = false;
        }
        self.persist()
    }

    fn mark_default(&mut self, slug: &str) -> Result<(), StoreError> {
        let idx = self.find(slug)?;
        self.doc.flows[idx].is_default = true;
        self.persist()
    }
}

impl ArticleCatalog for JsonFlowStore {
    fn articles(&self) -> Result<Vec<ArticleRef>, StoreError> {
        Ok(self.doc.articles.clone())
    }
}
