//! Prelude module for convenient imports
//!
//! Re-exports the types needed to open a session, author a graph, and talk
//! to the store boundary, so downstream code can reach the core API with a
//! single import.
//!
//! # Example
//!
//! ```rust,no_run
//! use keiro::prelude::*;
//!
//! # fn run_example() -> Result<()> {
//! let store = JsonFlowStore::open("flows.json")?;
//! let mut session = EditorSession::open(&store, "support")?;
//! session.drop_stamp(Stamp::Question, Position::new(40.0, 40.0));
//! # Ok(())
//! # }
//! ```

// Graph model
pub use crate::graph::{
    Edge, EdgeOption, Graph, Node, NodeKind, NodePayload, NodeStyle, Position, SCHEMA_VERSION,
    TicketPriority, derive_node_style,
};

// Mutation engine, history, and the edge-creation machine
pub use crate::editor::{
    BranchVariant, DUPLICATE_OFFSET, FlowEditor, History, LinkClick, LinkMode, NodeEdit,
};

// Interaction surface
pub use crate::session::{
    DropOutcome, EdgeDialog, EditorSession, FocusTarget, KeyChord, NodeDialog, Platform,
    ShortcutAction, Stamp,
};

// Store boundary
pub use crate::store::{
    ArticleCatalog, ArticleRef, FlowRecord, FlowStore, FlowSummary, JsonFlowStore, MemoryStore,
};

// Error types
pub use crate::error::{GraphReadError, StoreError};

// Result type alias for convenience
pub type Result<T> = std::result::Result<T, Box<dyn std::error::Error>>;
