//! The mutation engine, history manager, and edge-creation state machine,
//! composed around a single owned [`Graph`].
//!
//! Every structural mutation follows the same shape: resolve the affected
//! ids first, bail out silently when they are stale (stale references only
//! arise from internal bugs, never user input, so they must not crash the
//! UI), then push a history snapshot and commit. No-ops leave both history
//! stacks untouched.

pub mod history;
pub mod linking;

pub use history::History;
pub use linking::{BranchVariant, LinkClick, LinkMode};

use crate::graph::edge::derive_edge_id;
use crate::graph::id::fresh_id;
use crate::graph::{Edge, EdgeOption, Graph, NodePayload, Position, TicketPriority, node::Node};

/// Fixed offset applied to a duplicated node so the copy never exactly
/// overlaps the original.
pub const DUPLICATE_OFFSET: (f64, f64) = (32.0, 32.0);

/// A typed payload edit. Applying an edit whose shape does not match the
/// node's kind is a silent no-op: a node's kind is immutable after creation.
#[derive(Debug, Clone, PartialEq)]
pub enum NodeEdit {
    QuestionLabel(String),
    /// Re-link an article node. The label is always the article's title so
    /// the node caption cannot drift from the referenced article.
    ArticleLink {
        article_id: String,
        article_title: String,
    },
    Ticket {
        label: String,
        priority: TicketPriority,
    },
    FlowLink {
        flow_id: String,
        flow_slug: String,
        label: String,
    },
}

/// The authoring core for one open flow graph.
#[derive(Debug)]
pub struct FlowEditor {
    graph: Graph,
    history: History,
    link_mode: LinkMode,
}

impl FlowEditor {
    pub fn new(graph: Graph) -> Self {
        Self {
            graph,
            history: History::new(),
            link_mode: LinkMode::Idle,
        }
    }

    pub fn graph(&self) -> &Graph {
        &self.graph
    }

    pub fn into_graph(self) -> Graph {
        self.graph
    }

    /// A clone of the graph with every node's style recomputed from its
    /// kind: the exact payload submitted to the persistence collaborator.
    pub fn save_payload(&mut self) -> Graph {
        self.graph.refresh_styles();
        self.graph.clone()
    }

    // --- node mutations -------------------------------------------------

    /// Appends a new node and returns its freshly generated id.
    pub fn add_node(&mut self, position: Position, payload: NodePayload) -> String {
        let id = self.fresh_node_id();
        self.history.record(&self.graph);
        self.graph.nodes.push(Node::new(id.clone(), position, payload));
        id
    }

    /// Copies a node's kind and payload under a fresh id, offset by
    /// [`DUPLICATE_OFFSET`] and with transient flags cleared. Returns the
    /// new id, or `None` (no-op) when the source id is unknown.
    pub fn duplicate_node(&mut self, node_id: &str) -> Option<String> {
        let original = self.graph.node(node_id)?.clone();
        let id = self.fresh_node_id();
        self.history.record(&self.graph);
        let mut copy = Node::new(
            id.clone(),
            original
                .position
                .offset_by(DUPLICATE_OFFSET.0, DUPLICATE_OFFSET.1),
            original.payload,
        );
        copy.style = original.style;
        self.graph.nodes.push(copy);
        Some(id)
    }

    /// Removes a node and every edge touching it. The cascade is the
    /// load-bearing invariant: the graph never contains a dangling edge.
    /// Returns false (no-op) when the id is unknown.
    pub fn delete_node(&mut self, node_id: &str) -> bool {
        if !self.graph.has_node(node_id) {
            return false;
        }
        self.history.record(&self.graph);
        self.graph.nodes.retain(|n| n.id != node_id);
        self.graph.edges.retain(|e| !e.touches(node_id));
        if let LinkMode::AwaitingTarget { source, .. } = &self.link_mode {
            if source == node_id {
                self.link_mode = LinkMode::Idle;
            }
        }
        true
    }

    /// Merges a typed edit into a node's payload. No-op when the id is
    /// unknown or the edit's shape does not match the node's kind.
    pub fn update_node(&mut self, node_id: &str, edit: NodeEdit) -> bool {
        let Some(node) = self.graph.node(node_id) else {
            return false;
        };
        let updated = match (&node.payload, edit) {
            (NodePayload::Question { .. }, NodeEdit::QuestionLabel(label)) => {
                NodePayload::Question { label }
            }
            (
                NodePayload::Article { .. },
                NodeEdit::ArticleLink {
                    article_id,
                    article_title,
                },
            ) => NodePayload::Article {
                label: article_title.clone(),
                article_id,
                article_title,
            },
            (NodePayload::Ticket { .. }, NodeEdit::Ticket { label, priority }) => {
                NodePayload::Ticket { label, priority }
            }
            (
                NodePayload::Flow { .. },
                NodeEdit::FlowLink {
                    flow_id,
                    flow_slug,
                    label,
                },
            ) => NodePayload::Flow {
                label,
                flow_id,
                flow_slug,
            },
            _ => return false,
        };
        self.history.record(&self.graph);
        if let Some(node) = self.graph.node_mut(node_id) {
            node.payload = updated;
        }
        true
    }

    /// Moves a node. Positions are transient drag state, so moves are not
    /// snapshotted into history.
    pub fn set_node_position(&mut self, node_id: &str, position: Position) -> bool {
        match self.graph.node_mut(node_id) {
            Some(node) => {
                node.position = position;
                true
            }
            None => false,
        }
    }

    /// Marks a single node as selected, clearing any other selection.
    /// Selection is transient and not snapshotted.
    pub fn select_only(&mut self, node_id: &str) -> bool {
        if !self.graph.has_node(node_id) {
            return false;
        }
        for node in &mut self.graph.nodes {
            node.selected = node.id == node_id;
        }
        true
    }

    pub fn clear_selection(&mut self) {
        for node in &mut self.graph.nodes {
            node.selected = false;
        }
    }

    // --- edge mutations -------------------------------------------------

    /// Appends a new edge between two existing nodes and returns its id.
    /// `None` (no-op) when either endpoint is unknown, which keeps dangling
    /// edges unconstructible. Self-loops are not rejected here; the
    /// two-click flow upstream never offers one.
    pub fn add_edge(
        &mut self,
        source: &str,
        target: &str,
        option: EdgeOption,
    ) -> Option<String> {
        if !self.graph.has_node(source) || !self.graph.has_node(target) {
            return None;
        }
        let id = self.fresh_edge_id(source, target, &option);
        self.history.record(&self.graph);
        self.graph
            .edges
            .push(Edge::new(id.clone(), source, target, option));
        Some(id)
    }

    /// Replaces an edge's option wholesale. Because the option is a tagged
    /// union, flipping between static and input discards the previously
    /// active field rather than leaving it stale. No-op on unknown ids.
    pub fn update_edge(&mut self, edge_id: &str, option: EdgeOption) -> bool {
        if self.graph.edge(edge_id).is_none() {
            return false;
        }
        self.history.record(&self.graph);
        if let Some(edge) = self.graph.edge_mut(edge_id) {
            edge.option = option;
        }
        true
    }

    // --- history --------------------------------------------------------

    pub fn undo(&mut self) -> bool {
        self.history.undo(&mut self.graph)
    }

    pub fn redo(&mut self) -> bool {
        self.history.redo(&mut self.graph)
    }

    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    pub fn can_redo(&self) -> bool {
        self.history.can_redo()
    }

    // --- edge-creation machine ------------------------------------------

    pub fn link_mode(&self) -> &LinkMode {
        &self.link_mode
    }

    /// Arms the two-click edge creation. The entry gate (exactly one
    /// selected article node) lives on the interaction surface.
    pub fn start_branch_link(&mut self, variant: BranchVariant) {
        self.link_mode = LinkMode::AwaitingSource { variant };
    }

    pub fn cancel_branch_link(&mut self) {
        self.link_mode = LinkMode::Idle;
    }

    /// Routes a node click through the edge-creation machine. While idle
    /// this reports [`LinkClick::NotLinking`] and the caller treats the
    /// click as ordinary selection.
    pub fn handle_node_click(&mut self, node_id: &str) -> LinkClick {
        match self.link_mode.clone() {
            LinkMode::Idle => LinkClick::NotLinking,
            LinkMode::AwaitingSource { variant } => {
                if !self.graph.has_node(node_id) {
                    return LinkClick::Ignored;
                }
                self.link_mode = LinkMode::AwaitingTarget {
                    variant,
                    source: node_id.to_string(),
                };
                LinkClick::SourceChosen
            }
            LinkMode::AwaitingTarget { variant, source } => {
                if node_id == source || !self.graph.has_node(node_id) {
                    // Same node as source: stay in awaiting-target. This is
                    // how self-loops are kept out of the standard flow.
                    return LinkClick::Ignored;
                }
                match self.add_edge(&source, node_id, EdgeOption::static_label(variant.label())) {
                    Some(edge_id) => {
                        self.link_mode = LinkMode::Idle;
                        LinkClick::EdgeCreated { edge_id }
                    }
                    None => LinkClick::Ignored,
                }
            }
        }
    }

    // --- id generation --------------------------------------------------

    fn fresh_node_id(&self) -> String {
        loop {
            let id = fresh_id("n");
            if !self.graph.has_node(&id) {
                return id;
            }
        }
    }

    fn fresh_edge_id(&self, source: &str, target: &str, option: &EdgeOption) -> String {
        let derived = derive_edge_id(source, target, option);
        if self.graph.edge(&derived).is_none() {
            return derived;
        }
        // Parallel edge with the same endpoints and option kind; uniquify.
        loop {
            let id = format!("{}-{}", derived, fresh_id("d"));
            if self.graph.edge(&id).is_none() {
                return id;
            }
        }
    }
}
