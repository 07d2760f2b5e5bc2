//! History manager tests: linear undo/redo over full graph snapshots.
mod common;
use common::seeded_editor;
use keiro::editor::NodeEdit;
use keiro::prelude::*;

#[test]
fn test_undo_redo_round_trip_single_mutation() {
    let (mut editor, q1, ..) = seeded_editor();
    let before = editor.graph().clone();

    editor.update_node(&q1, NodeEdit::QuestionLabel("Edited".to_string()));
    let after = editor.graph().clone();
    assert_ne!(before, after);

    assert!(editor.undo());
    assert_eq!(editor.graph(), &before);

    assert!(editor.redo());
    assert_eq!(editor.graph(), &after);
}

#[test]
fn test_undo_redo_round_trip_over_mutation_sequence() {
    let (mut editor, q1, a1, t1) = seeded_editor();

    // A mixed sequence of k = 4 structural mutations.
    editor.update_node(&q1, NodeEdit::QuestionLabel("Step 1".to_string()));
    let dup = editor.duplicate_node(&a1).unwrap();
    editor.add_edge(&dup, &t1, EdgeOption::static_label("No")).unwrap();
    editor.delete_node(&t1);
    let final_state = editor.graph().clone();

    for _ in 0..4 {
        assert!(editor.undo());
    }
    for _ in 0..4 {
        assert!(editor.redo());
    }

    // Deep equality on the graph, not reference identity.
    assert_eq!(editor.graph(), &final_state);
    assert_eq!(editor.graph().to_json().unwrap(), final_state.to_json().unwrap());
}

#[test]
fn test_undo_on_empty_stack_is_noop() {
    let mut editor = FlowEditor::new(Graph::default());
    assert!(!editor.undo());
    assert!(!editor.redo());
    assert_eq!(editor.graph(), &Graph::default());
}

#[test]
fn test_new_mutation_after_undo_discards_redo() {
    let (mut editor, q1, ..) = seeded_editor();

    editor.update_node(&q1, NodeEdit::QuestionLabel("First".to_string()));
    assert!(editor.undo());
    assert!(editor.can_redo());

    // A fresh mutation forks the timeline; redo must become a no-op.
    editor.update_node(&q1, NodeEdit::QuestionLabel("Second".to_string()));
    assert!(!editor.can_redo());
    assert!(!editor.redo());
    assert_eq!(editor.graph().node(&q1).unwrap().label(), "Second");
}

#[test]
fn test_noop_mutations_do_not_touch_history() {
    let (mut editor, q1, ..) = seeded_editor();

    editor.update_node(&q1, NodeEdit::QuestionLabel("Kept".to_string()));
    assert!(editor.undo());
    assert!(editor.can_redo());

    // Operations on stale ids are silent no-ops and must not clear redo.
    assert!(!editor.delete_node("n-missing"));
    assert!(editor.duplicate_node("n-missing").is_none());
    assert!(!editor.update_node("n-missing", NodeEdit::QuestionLabel("x".to_string())));
    assert!(editor.add_edge("n-a", "n-b", EdgeOption::static_label("Yes")).is_none());
    assert!(!editor.update_edge("e-missing", EdgeOption::input("p")));

    assert!(editor.can_redo());
    assert!(editor.redo());
    assert_eq!(editor.graph().node(&q1).unwrap().label(), "Kept");
}

#[test]
fn test_undo_restores_cascade_deleted_edges() {
    let (mut editor, _, a1, _) = seeded_editor();
    let before = editor.graph().clone();

    editor.delete_node(&a1);
    assert!(editor.graph().edges.is_empty());

    assert!(editor.undo());
    assert_eq!(editor.graph(), &before);
    assert_eq!(editor.graph().edges.len(), 2);
}

#[test]
fn test_history_depth_tracking() {
    let mut history = History::new();
    let mut graph = Graph::default();

    history.record(&graph);
    graph.schema_version = SCHEMA_VERSION; // no structural change needed
    history.record(&graph);
    assert_eq!(history.undo_depth(), 2);
    assert_eq!(history.redo_depth(), 0);

    assert!(history.undo(&mut graph));
    assert_eq!(history.undo_depth(), 1);
    assert_eq!(history.redo_depth(), 1);

    history.record(&graph);
    assert_eq!(history.redo_depth(), 0);
}
