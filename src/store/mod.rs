//! The boundary with the persistence collaborators: the flow collection
//! store and the read-only article catalog.
//!
//! The editor never talks to a concrete backend; it is written against
//! [`FlowStore`] and [`ArticleCatalog`], with [`MemoryStore`] backing tests
//! and demos and [`JsonFlowStore`] persisting a whole collection as one JSON
//! document on disk.

pub mod json;
pub mod lifecycle;
pub mod memory;

pub use json::JsonFlowStore;
pub use memory::MemoryStore;

use crate::error::StoreError;
use crate::graph::Graph;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One persisted flow: the graph plus the collection-level metadata that
/// hangs off it. At most one record in a collection has `is_default` set.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FlowRecord {
    pub id: String,
    pub name: String,
    pub slug: String,
    pub graph: Graph,
    pub is_default: bool,
    pub updated_at: DateTime<Utc>,
}

/// What the flow-reference picker needs to know about another flow.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FlowSummary {
    pub id: String,
    pub name: String,
    pub slug: String,
}

impl From<&FlowRecord> for FlowSummary {
    fn from(record: &FlowRecord) -> Self {
        Self {
            id: record.id.clone(),
            name: record.name.clone(),
            slug: record.slug.clone(),
        }
    }
}

/// What the article picker needs to know about an article. The catalog is
/// owned by the article-management collaborator; this is a read-only view.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArticleRef {
    pub id: String,
    pub title: String,
    /// Present when the collaborator exposes a public link-out slug.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub slug: Option<String>,
}

/// The persisted flow collection.
///
/// Calls are awaited at the call site and never retried automatically; a
/// failure is returned as a value for inline display and the in-memory graph
/// is left untouched so no authoring work is lost.
pub trait FlowStore {
    /// Loads one flow by slug. A missing flow is a blocking not-found state.
    fn load_flow(&self, slug: &str) -> Result<FlowRecord, StoreError>;

    /// Persists a graph for an existing flow and returns the new
    /// `updated_at`. The payload is expected to carry freshly derived
    /// per-node styles (see [`FlowEditor::save_payload`]).
    ///
    /// [`FlowEditor::save_payload`]: crate::editor::FlowEditor::save_payload
    fn save_graph(&mut self, slug: &str, graph: &Graph) -> Result<DateTime<Utc>, StoreError>;

    /// Inserts a new flow. Fails with [`StoreError::SlugTaken`] on collision.
    fn insert_flow(&mut self, record: FlowRecord) -> Result<(), StoreError>;

    /// Renames and/or re-slugs an existing flow.
    fn rename_flow(&mut self, slug: &str, new_name: &str, new_slug: &str)
    -> Result<(), StoreError>;

    /// Removes a flow. The default-flow guard lives in
    /// [`lifecycle::delete_flow`]; implementations just remove the record.
    fn delete_flow(&mut self, slug: &str) -> Result<(), StoreError>;

    /// All flows in the collection, sorted by name.
    fn list_flows(&self) -> Result<Vec<FlowSummary>, StoreError>;

    /// The slug of the current default flow, if any.
    fn default_slug(&self) -> Result<Option<String>, StoreError>;

    /// Clears the default marker collection-wide. First half of the
    /// set-default two-write sequence.
    fn clear_default(&mut self) -> Result<(), StoreError>;

    /// Marks one flow as the default. Second half of the two-write sequence.
    fn mark_default(&mut self, slug: &str) -> Result<(), StoreError>;

    fn slug_available(&self, slug: &str) -> Result<bool, StoreError> {
        match self.load_flow(slug) {
            Ok(_) => Ok(false),
            Err(StoreError::FlowNotFound { .. }) => Ok(true),
            Err(e) => Err(e),
        }
    }
}

/// Read-only listing of linkable articles for the article-picker dialog.
pub trait ArticleCatalog {
    fn articles(&self) -> Result<Vec<ArticleRef>, StoreError>;
}

/// Flows offered by the flow-reference picker: everything except the flow
/// currently open (a flow node must not reference its own flow).
pub fn linkable_flows<S: FlowStore>(
    store: &S,
    open_slug: &str,
) -> Result<Vec<FlowSummary>, StoreError> {
    let mut flows = store.list_flows()?;
    flows.retain(|f| f.slug != open_slug);
    Ok(flows)
}
