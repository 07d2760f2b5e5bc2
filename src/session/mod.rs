//! The interaction surface: a thin event-driven layer over the editor core.
//!
//! An [`EditorSession`] holds one open flow and translates UI gestures
//! (palette drops, clicks, context-menu actions, key chords, the save
//! button) into mutation-engine calls. It owns the interaction state the
//! graph model deliberately does not: the deferred drop awaiting a picker
//! dialog, the pending delete confirmation, and the save-in-flight gate.

pub mod shortcuts;

pub use shortcuts::{FocusTarget, KeyChord, Platform, ShortcutAction};

use crate::editor::{BranchVariant, FlowEditor, LinkClick, NodeEdit};
use crate::error::StoreError;
use crate::graph::{EdgeOption, Graph, NodeKind, NodePayload, Position, TicketPriority};
use crate::store::{ArticleRef, FlowStore, FlowSummary, lifecycle};
use chrono::{DateTime, Utc};

/// The four draggable palette stamps.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stamp {
    Question,
    Article,
    Ticket,
    Flow,
}

/// A drop whose node creation is deferred until a reference is picked.
/// Cancelling the dialog discards this without ever materializing a node.
#[derive(Debug, Clone, PartialEq)]
enum PendingDrop {
    Article { position: Position },
    Flow { position: Position },
}

/// What a palette drop did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DropOutcome {
    /// The node was materialized immediately.
    Created { node_id: String },
    /// An article must be picked before the node exists.
    NeedsArticlePick,
    /// Another flow must be picked before the node exists.
    NeedsFlowPick,
}

/// Which property editor a double-click opens. Carries the current values
/// for prefilling; the dialog writes back through [`FlowEditor::update_node`]
/// or [`FlowEditor::update_edge`].
#[derive(Debug, Clone, PartialEq)]
pub enum NodeDialog {
    QuestionLabel {
        node_id: String,
        label: String,
    },
    ArticlePicker {
        node_id: String,
        article_id: String,
    },
    TicketEditor {
        node_id: String,
        label: String,
        priority: TicketPriority,
    },
    FlowPicker {
        node_id: String,
        flow_id: String,
    },
}

#[derive(Debug, Clone, PartialEq)]
pub struct EdgeDialog {
    pub edge_id: String,
    pub option: EdgeOption,
}

/// One open flow plus the interaction state around it.
#[derive(Debug)]
pub struct EditorSession {
    flow_id: String,
    name: String,
    slug: String,
    is_default: bool,
    last_saved_at: DateTime<Utc>,
    editor: FlowEditor,
    pending_drop: Option<PendingDrop>,
    pending_delete: Option<String>,
    saving: bool,
}

impl EditorSession {
    /// Loads a flow by slug and opens a session on it. A missing flow is
    /// surfaced as a blocking not-found error; nothing partial is opened.
    pub fn open<S: FlowStore>(store: &S, slug: &str) -> Result<Self, StoreError> {
        let record = store.load_flow(slug)?;
        Ok(Self {
            flow_id: record.id,
            name: record.name,
            slug: record.slug,
            is_default: record.is_default,
            last_saved_at: record.updated_at,
            editor: FlowEditor::new(record.graph),
            pending_drop: None,
            pending_delete: None,
            saving: false,
        })
    }

    pub fn flow_id(&self) -> &str {
        &self.flow_id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn slug(&self) -> &str {
        &self.slug
    }

    pub fn is_default(&self) -> bool {
        self.is_default
    }

    pub fn last_saved_at(&self) -> DateTime<Utc> {
        self.last_saved_at
    }

    pub fn editor(&self) -> &FlowEditor {
        &self.editor
    }

    pub fn editor_mut(&mut self) -> &mut FlowEditor {
        &mut self.editor
    }

    // --- palette drops --------------------------------------------------

    /// Handles a stamp dropped at a canvas coordinate. Question and ticket
    /// nodes are materialized immediately with a default payload; article
    /// and flow nodes are deferred behind a picker dialog so cancelling
    /// never leaves an orphaned node.
    pub fn drop_stamp(&mut self, stamp: Stamp, position: Position) -> DropOutcome {
        match stamp {
            Stamp::Question => {
                let node_id = self.editor.add_node(
                    position,
                    NodePayload::Question {
                        label: "New question".to_string(),
                    },
                );
                DropOutcome::Created { node_id }
            }
            Stamp::Ticket => {
                let node_id = self.editor.add_node(
                    position,
                    NodePayload::Ticket {
                        label: "New ticket".to_string(),
                        priority: TicketPriority::Normal,
                    },
                );
                DropOutcome::Created { node_id }
            }
            Stamp::Article => {
                self.pending_drop = Some(PendingDrop::Article { position });
                DropOutcome::NeedsArticlePick
            }
            Stamp::Flow => {
                self.pending_drop = Some(PendingDrop::Flow { position });
                DropOutcome::NeedsFlowPick
            }
        }
    }

    pub fn has_pending_drop(&self) -> bool {
        self.pending_drop.is_some()
    }

    /// Materializes a deferred article drop with the picked article.
    /// Returns `None` when no article drop is pending.
    pub fn resolve_article_drop(&mut self, article: &ArticleRef) -> Option<String> {
        match self.pending_drop.take() {
            Some(PendingDrop::Article { position }) => Some(self.editor.add_node(
                position,
                NodePayload::Article {
                    label: article.title.clone(),
                    article_id: article.id.clone(),
                    article_title: article.title.clone(),
                },
            )),
            other => {
                self.pending_drop = other;
                None
            }
        }
    }

    /// Materializes a deferred flow drop with the picked flow. Refuses the
    /// flow currently being edited; the picker never offers it, but a stale
    /// dialog must not create a self-reference.
    pub fn resolve_flow_drop(&mut self, flow: &FlowSummary) -> Option<String> {
        if flow.slug == self.slug {
            return None;
        }
        match self.pending_drop.take() {
            Some(PendingDrop::Flow { position }) => Some(self.editor.add_node(
                position,
                NodePayload::Flow {
                    label: flow.name.clone(),
                    flow_id: flow.id.clone(),
                    flow_slug: flow.slug.clone(),
                },
            )),
            other => {
                self.pending_drop = other;
                None
            }
        }
    }

    /// Discards a deferred drop; no node was ever created for it.
    pub fn cancel_pending_drop(&mut self) {
        self.pending_drop = None;
    }

    // --- clicks and dialogs ---------------------------------------------

    /// A single click on a node: routed through the edge-creation machine
    /// while it is active, ordinary selection otherwise.
    pub fn node_clicked(&mut self, node_id: &str) -> LinkClick {
        let click = self.editor.handle_node_click(node_id);
        if click == LinkClick::NotLinking {
            self.editor.select_only(node_id);
        }
        click
    }

    /// The kind-appropriate property editor for a double-clicked node,
    /// prefilled with current values. Opens regardless of edge-creation
    /// mode. `None` on a stale id.
    pub fn node_dialog(&self, node_id: &str) -> Option<NodeDialog> {
        let node = self.editor.graph().node(node_id)?;
        Some(match &node.payload {
            NodePayload::Question { label } => NodeDialog::QuestionLabel {
                node_id: node.id.clone(),
                label: label.clone(),
            },
            NodePayload::Article { article_id, .. } => NodeDialog::ArticlePicker {
                node_id: node.id.clone(),
                article_id: article_id.clone(),
            },
            NodePayload::Ticket { label, priority } => NodeDialog::TicketEditor {
                node_id: node.id.clone(),
                label: label.clone(),
                priority: *priority,
            },
            NodePayload::Flow { flow_id, .. } => NodeDialog::FlowPicker {
                node_id: node.id.clone(),
                flow_id: flow_id.clone(),
            },
        })
    }

    /// The edge property editor for a double-clicked edge. `None` on a
    /// stale id.
    pub fn edge_dialog(&self, edge_id: &str) -> Option<EdgeDialog> {
        let edge = self.editor.graph().edge(edge_id)?;
        Some(EdgeDialog {
            edge_id: edge.id.clone(),
            option: edge.option.clone(),
        })
    }

    /// Applies a dialog's result to a node.
    pub fn apply_node_edit(&mut self, node_id: &str, edit: NodeEdit) -> bool {
        self.editor.update_node(node_id, edit)
    }

    /// Applies the edge dialog's result.
    pub fn apply_edge_edit(&mut self, edge_id: &str, option: EdgeOption) -> bool {
        self.editor.update_edge(edge_id, option)
    }

    // --- branch-link entry gate -----------------------------------------

    /// The "Add Yes Edge" / "Add No Edge" actions are offered only while
    /// exactly one node is selected and that node is an article node.
    pub fn can_start_branch_link(&self) -> bool {
        match self.editor.graph().selected_nodes().as_slice() {
            [node] => node.kind() == NodeKind::Article,
            _ => false,
        }
    }

    /// Arms the two-click edge creation when the gate allows it.
    pub fn start_branch_link(&mut self, variant: BranchVariant) -> bool {
        if !self.can_start_branch_link() {
            return false;
        }
        self.editor.start_branch_link(variant);
        true
    }

    // --- delete confirmation --------------------------------------------

    /// Context-menu delete: destructive, so it parks behind a confirmation
    /// prompt instead of committing immediately. Returns false on a stale id.
    pub fn request_delete(&mut self, node_id: &str) -> bool {
        if !self.editor.graph().has_node(node_id) {
            return false;
        }
        self.pending_delete = Some(node_id.to_string());
        true
    }

    pub fn pending_delete(&self) -> Option<&str> {
        self.pending_delete.as_deref()
    }

    /// Commits the pending delete (cascading). Returns false when nothing
    /// was pending or the node vanished in the meantime.
    pub fn confirm_delete(&mut self) -> bool {
        match self.pending_delete.take() {
            Some(node_id) => self.editor.delete_node(&node_id),
            None => false,
        }
    }

    pub fn cancel_delete(&mut self) {
        self.pending_delete = None;
    }

    // --- keyboard -------------------------------------------------------

    /// Feeds a key chord through the platform-aware shortcut table and, on
    /// a hit, drives the history directly. Suppressed while focus is in a
    /// dialog text field so native text undo keeps working there.
    pub fn key_pressed(&mut self, chord: KeyChord, focus: FocusTarget) -> Option<ShortcutAction> {
        let action = shortcuts::resolve(chord, Platform::current(), focus)?;
        match action {
            ShortcutAction::Undo => self.editor.undo(),
            ShortcutAction::Redo => self.editor.redo(),
        };
        Some(action)
    }

    // --- saving ---------------------------------------------------------

    pub fn is_saving(&self) -> bool {
        self.saving
    }

    /// Starts a save: returns the style-refreshed graph payload to submit,
    /// or `None` while a save is already in flight (the UI disables the
    /// trigger, this gate backs it up so a mutated-in-between state can
    /// never race a second submission).
    pub fn begin_save(&mut self) -> Option<Graph> {
        if self.saving {
            return None;
        }
        self.saving = true;
        Some(self.editor.save_payload())
    }

    /// Completes a save. On failure the error is handed back for inline
    /// display and local edits stay live; nothing is rolled back.
    pub fn finish_save(
        &mut self,
        result: Result<DateTime<Utc>, StoreError>,
    ) -> Option<StoreError> {
        self.saving = false;
        match result {
            Ok(updated_at) => {
                self.last_saved_at = updated_at;
                None
            }
            Err(e) => Some(e),
        }
    }

    /// Convenience wrapper driving [`begin_save`](Self::begin_save) and
    /// [`finish_save`](Self::finish_save) against a store in one call.
    pub fn save<S: FlowStore>(&mut self, store: &mut S) -> Result<(), StoreError> {
        let Some(payload) = self.begin_save() else {
            // A save is already in flight; the trigger should be disabled.
            return Ok(());
        };
        let result = store.save_graph(&self.slug, &payload);
        match self.finish_save(result) {
            None => Ok(()),
            Some(e) => Err(e),
        }
    }

    // --- whole-flow lifecycle -------------------------------------------

    /// Renames/re-slugs the open flow; local metadata follows on success.
    pub fn rename<S: FlowStore>(
        &mut self,
        store: &mut S,
        new_name: &str,
        new_slug: &str,
    ) -> Result<(), StoreError> {
        lifecycle::rename_flow(store, &self.slug, new_name, new_slug)?;
        self.name = new_name.to_string();
        self.slug = new_slug.to_string();
        Ok(())
    }

    /// Duplicates the open flow under a new name and slug.
    pub fn duplicate<S: FlowStore>(
        &mut self,
        store: &mut S,
        new_name: &str,
        new_slug: &str,
    ) -> Result<FlowSummary, StoreError> {
        lifecycle::duplicate_flow(store, &self.slug, new_name, new_slug)
    }

    /// Deletes the open flow. Refused while it is the default; the caller
    /// closes the session on success.
    pub fn delete<S: FlowStore>(self, store: &mut S) -> Result<(), (Self, StoreError)> {
        match lifecycle::delete_flow(store, &self.slug) {
            Ok(()) => Ok(()),
            Err(e) => Err((self, e)),
        }
    }

    /// Marks the open flow as the collection-wide default (two collaborator
    /// writes; see [`lifecycle::set_default_flow`] for the race caveat).
    pub fn set_default<S: FlowStore>(&mut self, store: &mut S) -> Result<(), StoreError> {
        lifecycle::set_default_flow(store, &self.slug)?;
        self.is_default = true;
        Ok(())
    }
}
