use super::style::NodeStyle;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A free-form 2D canvas coordinate. No grid invariant is enforced.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Position {
    pub x: f64,
    pub y: f64,
}

impl Position {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Returns this position shifted by a fixed delta.
    pub fn offset_by(self, dx: f64, dy: f64) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }
}

/// The closed set of node kinds. A node's kind is fixed at creation;
/// payload edits never change it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NodeKind {
    Question,
    Article,
    Ticket,
    Flow,
}

impl fmt::Display for NodeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NodeKind::Question => write!(f, "question"),
            NodeKind::Article => write!(f, "article"),
            NodeKind::Ticket => write!(f, "ticket"),
            NodeKind::Flow => write!(f, "flow"),
        }
    }
}

/// Urgency level carried by `ticket` nodes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum TicketPriority {
    Low,
    #[default]
    Normal,
    High,
    Urgent,
}

impl fmt::Display for TicketPriority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TicketPriority::Low => write!(f, "Low"),
            TicketPriority::Normal => write!(f, "Normal"),
            TicketPriority::High => write!(f, "High"),
            TicketPriority::Urgent => write!(f, "Urgent"),
        }
    }
}

/// The kind-specific data carried by a node, serialized with the `kind` tag
/// inlined into the node object. One concrete shape per kind; code that
/// branches on kind matches this enum exhaustively.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase", rename_all_fields = "camelCase")]
pub enum NodePayload {
    Question {
        label: String,
    },
    /// A reference to an article owned by the article-management collaborator.
    /// Only the id and a cached title (mirrored into `label`) are stored.
    Article {
        label: String,
        article_id: String,
        article_title: String,
    },
    Ticket {
        label: String,
        priority: TicketPriority,
    },
    /// A reference to another flow. Must not point at the flow being edited;
    /// the flow picker never offers the open flow.
    Flow {
        label: String,
        flow_id: String,
        flow_slug: String,
    },
}

impl NodePayload {
    pub fn kind(&self) -> NodeKind {
        match self {
            NodePayload::Question { .. } => NodeKind::Question,
            NodePayload::Article { .. } => NodeKind::Article,
            NodePayload::Ticket { .. } => NodeKind::Ticket,
            NodePayload::Flow { .. } => NodeKind::Flow,
        }
    }

    pub fn label(&self) -> &str {
        match self {
            NodePayload::Question { label }
            | NodePayload::Article { label, .. }
            | NodePayload::Ticket { label, .. }
            | NodePayload::Flow { label, .. } => label,
        }
    }
}

/// A vertex in the flow graph.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Node {
    pub id: String,
    pub position: Position,
    #[serde(flatten)]
    pub payload: NodePayload,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub style: Option<NodeStyle>,
    /// Transient UI flag; cleared on duplication, omitted from JSON when unset.
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub selected: bool,
    /// Transient UI flag; cleared on duplication, omitted from JSON when unset.
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub dragging: bool,
}

impl Node {
    pub fn new(id: impl Into<String>, position: Position, payload: NodePayload) -> Self {
        let style = Some(super::style::derive_node_style(payload.kind()));
        Self {
            id: id.into(),
            position,
            payload,
            style,
            selected: false,
            dragging: false,
        }
    }

    pub fn kind(&self) -> NodeKind {
        self.payload.kind()
    }

    pub fn label(&self) -> &str {
        self.payload.label()
    }
}
