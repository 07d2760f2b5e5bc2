use super::node::NodeKind;
use serde::{Deserialize, Serialize};

/// Presentation descriptor a renderer applies to a node. Derived entirely
/// from the node's kind; never hand-edited.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NodeStyle {
    pub fill: String,
    pub border: String,
}

/// Maps a node kind to its canonical style. Pure; recomputed for every node
/// when a save payload is prepared so persisted styling cannot drift from
/// this mapping even if a node's in-memory style went stale.
pub fn derive_node_style(kind: NodeKind) -> NodeStyle {
    let (fill, border) = match kind {
        NodeKind::Question => ("#eff6ff", "#3b82f6"),
        NodeKind::Article => ("#ecfdf5", "#10b981"),
        NodeKind::Ticket => ("#fffbeb", "#f59e0b"),
        NodeKind::Flow => ("#f5f3ff", "#8b5cf6"),
    };
    NodeStyle {
        fill: fill.to_string(),
        border: border.to_string(),
    }
}
