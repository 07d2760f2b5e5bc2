//! The flow graph data model: typed nodes, typed option edges, and the
//! aggregate that is serialized as-is to persistent storage.

pub mod edge;
pub mod id;
pub mod node;
pub mod style;

pub use edge::{Edge, EdgeOption};
pub use node::{Node, NodeKind, NodePayload, Position, TicketPriority};
pub use style::{NodeStyle, derive_node_style};

use crate::error::GraphReadError;
use ahash::AHashSet;
use serde::{Deserialize, Serialize};

/// Version of the persisted graph document this build reads and writes.
/// Documents without the field are treated as version 1 (the pre-versioning
/// legacy shape was identical).
pub const SCHEMA_VERSION: u32 = 1;

fn default_schema_version() -> u32 {
    SCHEMA_VERSION
}

/// The aggregate all editor components read and write: `{ nodes, edges }`
/// plus an explicit schema version for safe evolution of the persisted shape.
///
/// Invariants upheld by the mutation engine, assumed by readers:
/// - node ids are unique within the graph;
/// - every edge's `source` and `target` name nodes present in the graph.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Graph {
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,
    #[serde(default)]
    pub nodes: Vec<Node>,
    #[serde(default)]
    pub edges: Vec<Edge>,
}

impl Default for Graph {
    fn default() -> Self {
        Self {
            schema_version: SCHEMA_VERSION,
            nodes: Vec::new(),
            edges: Vec::new(),
        }
    }
}

impl Graph {
    /// Parses a persisted graph document, rejecting documents written by a
    /// newer schema than this build understands.
    pub fn from_json(json: &str) -> Result<Self, GraphReadError> {
        let graph: Graph =
            serde_json::from_str(json).map_err(|e| GraphReadError::JsonParse(e.to_string()))?;
        if graph.schema_version > SCHEMA_VERSION {
            return Err(GraphReadError::UnsupportedSchemaVersion {
                found: graph.schema_version,
                supported: SCHEMA_VERSION,
            });
        }
        Ok(graph)
    }

    pub fn to_json(&self) -> Result<String, GraphReadError> {
        serde_json::to_string(self).map_err(|e| GraphReadError::JsonParse(e.to_string()))
    }

    pub fn node(&self, node_id: &str) -> Option<&Node> {
        self.nodes.iter().find(|n| n.id == node_id)
    }

    pub(crate) fn node_mut(&mut self, node_id: &str) -> Option<&mut Node> {
        self.nodes.iter_mut().find(|n| n.id == node_id)
    }

    pub fn has_node(&self, node_id: &str) -> bool {
        self.node(node_id).is_some()
    }

    pub fn edge(&self, edge_id: &str) -> Option<&Edge> {
        self.edges.iter().find(|e| e.id == edge_id)
    }

    pub(crate) fn edge_mut(&mut self, edge_id: &str) -> Option<&mut Edge> {
        self.edges.iter_mut().find(|e| e.id == edge_id)
    }

    /// Nodes currently carrying the transient `selected` flag.
    pub fn selected_nodes(&self) -> Vec<&Node> {
        self.nodes.iter().filter(|n| n.selected).collect()
    }

    /// Ids of edges whose source or target no longer names a node in this
    /// graph. The mutation engine never constructs such edges; this is the
    /// read-time integrity check used when inspecting documents of unknown
    /// provenance.
    pub fn dangling_edges(&self) -> Vec<&str> {
        let ids: AHashSet<&str> = self.nodes.iter().map(|n| n.id.as_str()).collect();
        self.edges
            .iter()
            .filter(|e| !ids.contains(e.source.as_str()) || !ids.contains(e.target.as_str()))
            .map(|e| e.id.as_str())
            .collect()
    }

    /// Node ids that appear more than once.
    pub fn duplicate_node_ids(&self) -> Vec<&str> {
        let mut seen = AHashSet::new();
        self.nodes
            .iter()
            .filter(|n| !seen.insert(n.id.as_str()))
            .map(|n| n.id.as_str())
            .collect()
    }

    /// Recomputes every node's style from its kind. Called when a save
    /// payload is prepared so persisted visual state never drifts from the
    /// kind-style mapping.
    pub fn refresh_styles(&mut self) {
        for node in &mut self.nodes {
            node.style = Some(derive_node_style(node.kind()));
        }
    }
}
