//! Common test utilities for building graphs, flow records, and stores.
use chrono::Utc;
use keiro::prelude::*;

/// A fixed timestamp-ish record wrapper so tests don't repeat metadata.
#[allow(dead_code)]
pub fn flow_record(slug: &str, name: &str, graph: Graph, is_default: bool) -> FlowRecord {
    FlowRecord {
        id: format!("id-{}", slug),
        name: name.to_string(),
        slug: slug.to_string(),
        graph,
        is_default,
        updated_at: Utc::now(),
    }
}

/// An editor seeded with a small authored graph:
///
/// ```text
///   q1 (question) --"Yes"--> a1 (article) --input--> t1 (ticket)
/// ```
///
/// Returns the editor and the three node ids `(q1, a1, t1)`. The seeding
/// mutations have run through the engine, so the editor starts with history.
#[allow(dead_code)]
pub fn seeded_editor() -> (FlowEditor, String, String, String) {
    let mut editor = FlowEditor::new(Graph::default());
    let q1 = editor.add_node(
        Position::new(0.0, 0.0),
        NodePayload::Question {
            label: "Need help?".to_string(),
        },
    );
    let a1 = editor.add_node(
        Position::new(0.0, 160.0),
        NodePayload::Article {
            label: "Password reset".to_string(),
            article_id: "art-1".to_string(),
            article_title: "Password reset".to_string(),
        },
    );
    let t1 = editor.add_node(
        Position::new(0.0, 320.0),
        NodePayload::Ticket {
            label: "Escalate".to_string(),
            priority: TicketPriority::High,
        },
    );
    editor
        .add_edge(&q1, &a1, EdgeOption::static_label("Yes"))
        .unwrap();
    editor
        .add_edge(&a1, &t1, EdgeOption::input("Tell us more..."))
        .unwrap();
    (editor, q1, a1, t1)
}

/// A store with two flows (`support`, the default, and `sales`) and a
/// two-article catalog.
#[allow(dead_code)]
pub fn seeded_store() -> MemoryStore {
    MemoryStore::new()
        .with_flow(flow_record("support", "Support", Graph::default(), true))
        .with_flow(flow_record("sales", "Sales", Graph::default(), false))
        .with_article(ArticleRef {
            id: "art-1".to_string(),
            title: "Password reset".to_string(),
            slug: Some("password-reset".to_string()),
        })
        .with_article(ArticleRef {
            id: "art-2".to_string(),
            title: "Billing FAQ".to_string(),
            slug: None,
        })
}

/// A session opened on the seeded store's `support` flow.
#[allow(dead_code)]
pub fn open_session(store: &MemoryStore) -> EditorSession {
    EditorSession::open(store, "support").expect("support flow should exist")
}
