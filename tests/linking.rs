//! Edge-creation state machine tests: the two-click Yes/No branch flow.
mod common;
use common::{open_session, seeded_editor, seeded_store};
use keiro::prelude::*;

#[test]
fn test_machine_starts_idle() {
    let (editor, ..) = seeded_editor();
    assert_eq!(editor.link_mode(), &LinkMode::Idle);
    assert!(!editor.link_mode().is_active());
    assert_eq!(editor.link_mode().prompt(), None);
}

#[test]
fn test_two_click_flow_commits_labeled_edge() {
    let (mut editor, q1, a1, _) = seeded_editor();
    let edges_before = editor.graph().edges.len();

    editor.start_branch_link(BranchVariant::No);
    assert_eq!(
        editor.link_mode(),
        &LinkMode::AwaitingSource {
            variant: BranchVariant::No
        }
    );

    assert_eq!(editor.handle_node_click(&a1), LinkClick::SourceChosen);
    assert_eq!(
        editor.link_mode(),
        &LinkMode::AwaitingTarget {
            variant: BranchVariant::No,
            source: a1.clone()
        }
    );

    let click = editor.handle_node_click(&q1);
    let LinkClick::EdgeCreated { edge_id } = click else {
        panic!("expected edge creation, got {:?}", click);
    };

    assert_eq!(editor.link_mode(), &LinkMode::Idle);
    assert_eq!(editor.graph().edges.len(), edges_before + 1);
    let edge = editor.graph().edge(&edge_id).unwrap();
    assert_eq!(edge.source, a1);
    assert_eq!(edge.target, q1);
    assert_eq!(edge.option, EdgeOption::static_label("No"));
}

#[test]
fn test_clicking_source_again_prevents_self_loop() {
    let (mut editor, _, a1, _) = seeded_editor();
    let edges_before = editor.graph().edges.len();

    editor.start_branch_link(BranchVariant::Yes);
    editor.handle_node_click(&a1);

    // Clicking the armed source again must not create an edge, and the
    // machine must stay in awaiting-target.
    assert_eq!(editor.handle_node_click(&a1), LinkClick::Ignored);
    assert_eq!(
        editor.link_mode(),
        &LinkMode::AwaitingTarget {
            variant: BranchVariant::Yes,
            source: a1.clone()
        }
    );
    assert_eq!(editor.graph().edges.len(), edges_before);
    assert!(editor.graph().edges.iter().all(|e| e.source != e.target));
}

#[test]
fn test_clicks_while_idle_do_not_link() {
    let (mut editor, q1, ..) = seeded_editor();
    let before = editor.graph().clone();

    assert_eq!(editor.handle_node_click(&q1), LinkClick::NotLinking);
    assert_eq!(editor.graph(), &before);
}

#[test]
fn test_stale_ids_are_ignored_in_both_waiting_states() {
    let (mut editor, _, a1, _) = seeded_editor();

    editor.start_branch_link(BranchVariant::Yes);
    assert_eq!(editor.handle_node_click("n-missing"), LinkClick::Ignored);
    assert!(matches!(
        editor.link_mode(),
        LinkMode::AwaitingSource { .. }
    ));

    editor.handle_node_click(&a1);
    assert_eq!(editor.handle_node_click("n-missing"), LinkClick::Ignored);
    assert!(matches!(
        editor.link_mode(),
        LinkMode::AwaitingTarget { .. }
    ));
}

#[test]
fn test_cancel_returns_to_idle() {
    let (mut editor, _, a1, _) = seeded_editor();
    editor.start_branch_link(BranchVariant::Yes);
    editor.handle_node_click(&a1);

    editor.cancel_branch_link();
    assert_eq!(editor.link_mode(), &LinkMode::Idle);
}

#[test]
fn test_deleting_armed_source_resets_machine() {
    let (mut editor, _, a1, _) = seeded_editor();
    editor.start_branch_link(BranchVariant::Yes);
    editor.handle_node_click(&a1);

    editor.delete_node(&a1);
    assert_eq!(editor.link_mode(), &LinkMode::Idle);
}

#[test]
fn test_prompts_name_the_expected_click() {
    let (mut editor, _, a1, _) = seeded_editor();

    editor.start_branch_link(BranchVariant::Yes);
    let prompt = editor.link_mode().prompt().unwrap();
    assert!(prompt.contains("Yes"));
    assert!(prompt.contains("branches from"));

    editor.handle_node_click(&a1);
    let prompt = editor.link_mode().prompt().unwrap();
    assert!(prompt.contains("Yes"));
    assert!(prompt.contains("leads to"));
}

#[test]
fn test_entry_gate_requires_single_selected_article() {
    let store = seeded_store();
    let mut session = open_session(&store);

    // Nothing selected: gate closed.
    assert!(!session.can_start_branch_link());
    assert!(!session.start_branch_link(BranchVariant::Yes));

    let q = match session.drop_stamp(Stamp::Question, Position::new(0.0, 0.0)) {
        DropOutcome::Created { node_id } => node_id,
        other => panic!("unexpected outcome {:?}", other),
    };
    session.drop_stamp(Stamp::Article, Position::new(0.0, 160.0));
    let article = store.articles().unwrap().remove(0);
    let a = session.resolve_article_drop(&article).unwrap();

    // A selected question node does not open the gate.
    session.node_clicked(&q);
    assert!(!session.can_start_branch_link());

    // A single selected article node does.
    session.node_clicked(&a);
    assert!(session.can_start_branch_link());
    assert!(session.start_branch_link(BranchVariant::Yes));
    assert!(session.editor().link_mode().is_active());
}

#[test]
fn test_branch_authoring_scenario() {
    // Create one article node A; select it; "Add Yes Edge"; click A as
    // source; click a new question node Q as target. Exactly one edge
    // {source: A, target: Q, static "Yes"} must result.
    let store = seeded_store();
    let mut session = open_session(&store);

    session.drop_stamp(Stamp::Article, Position::new(100.0, 100.0));
    let article = store.articles().unwrap().remove(0);
    let a = session.resolve_article_drop(&article).unwrap();

    session.node_clicked(&a);
    assert!(session.start_branch_link(BranchVariant::Yes));

    assert_eq!(session.node_clicked(&a), LinkClick::SourceChosen);

    let q = match session.drop_stamp(Stamp::Question, Position::new(100.0, 260.0)) {
        DropOutcome::Created { node_id } => node_id,
        other => panic!("unexpected outcome {:?}", other),
    };
    let click = session.node_clicked(&q);
    assert!(matches!(click, LinkClick::EdgeCreated { .. }));

    let edges = &session.editor().graph().edges;
    assert_eq!(edges.len(), 1);
    assert_eq!(edges[0].source, a);
    assert_eq!(edges[0].target, q);
    assert_eq!(edges[0].option, EdgeOption::static_label("Yes"));
}
