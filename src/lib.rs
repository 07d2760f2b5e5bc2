//! # Keiro - Decision-Flow Graph Authoring Core
//!
//! **Keiro** is the authoring core of a help-center "web-widget flow"
//! builder: an interactive editor for directed decision graphs with typed
//! nodes, typed option edges, cascading mutation, linear snapshot undo/redo,
//! and an explicit two-click edge-creation state machine.
//!
//! ## Core Workflow
//!
//! The crate is backend-agnostic. Persistence and the article catalog are
//! collaborators reached through the [`store::FlowStore`] and
//! [`store::ArticleCatalog`] traits; canvas rendering is assumed to be an
//! off-the-shelf component that consumes the [`graph::Graph`] the editor
//! owns. The primary workflow is:
//!
//! 1.  **Open**: load a flow by slug through a `FlowStore` into an
//!     [`session::EditorSession`].
//! 2.  **Author**: feed UI gestures (palette drops, clicks, dialogs, key
//!     chords) into the session; it delegates to the mutation engine, the
//!     history manager, and the edge-creation machine in
//!     [`editor::FlowEditor`].
//! 3.  **Save**: submit the style-refreshed graph payload back to the store.
//!     Local edits are never rolled back on failure, so no work is lost.
//!
//! ## Quick Start
//!
//! ```rust
//! use keiro::prelude::*;
//! use chrono::Utc;
//!
//! fn main() -> Result<()> {
//!     // A store would normally live on the other side of the network; the
//!     // in-memory implementation backs demos and tests.
//!     let mut store = MemoryStore::new()
//!         .with_flow(FlowRecord {
//!             id: "flow-1".to_string(),
//!             name: "Support".to_string(),
//!             slug: "support".to_string(),
//!             graph: Graph::default(),
//!             is_default: true,
//!             updated_at: Utc::now(),
//!         })
//!         .with_article(ArticleRef {
//!             id: "a-1".to_string(),
//!             title: "Resetting your password".to_string(),
//!             slug: None,
//!         });
//!
//!     let mut session = EditorSession::open(&store, "support")?;
//!
//!     // Drop an article stamp: creation is deferred until an article is
//!     // picked, so cancelling the dialog leaves no orphaned node.
//!     let outcome = session.drop_stamp(Stamp::Article, Position::new(120.0, 80.0));
//!     assert_eq!(outcome, DropOutcome::NeedsArticlePick);
//!     let article = store.articles()?.remove(0);
//!     let article_node = session.resolve_article_drop(&article).unwrap();
//!
//!     // Branch a Yes edge off the article node with the two-click flow.
//!     session.node_clicked(&article_node);
//!     assert!(session.start_branch_link(BranchVariant::Yes));
//!     session.node_clicked(&article_node); // first click: source
//!     let question = session.drop_stamp(Stamp::Question, Position::new(120.0, 240.0));
//!     if let DropOutcome::Created { node_id } = question {
//!         session.node_clicked(&node_id); // second click: target, edge commits
//!     }
//!
//!     session.save(&mut store)?;
//!     Ok(())
//! }
//! ```

pub mod editor;
pub mod error;
pub mod graph;
pub mod prelude;
pub mod session;
pub mod store;
