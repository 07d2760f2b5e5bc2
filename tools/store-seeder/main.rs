use chrono::Utc;
use clap::Parser;
use keiro::graph::id::fresh_id;
use keiro::prelude::*;
use keiro::store::lifecycle;
use rand::Rng;

/// A CLI tool to generate a demo flow store for the keiro editor.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Cli {
    /// The path to write the generated store document to
    #[arg(short, long, default_value = "demo_store.json")]
    output: String,

    /// Number of flows to generate (the first becomes the default)
    #[arg(long, default_value_t = 3)]
    flows: usize,

    /// Number of question branches per flow
    #[arg(long, default_value_t = 4)]
    branches: usize,
}

const TOPICS: &[&str] = &[
    "Billing",
    "Shipping",
    "Returns",
    "Account access",
    "Getting started",
    "Integrations",
];

fn main() -> Result<()> {
    let cli = Cli::parse();

    if cli.flows == 0 {
        eprintln!("Error: --flows must be at least 1");
        std::process::exit(1);
    }

    println!(
        "Generating demo store with {} flow(s), {} branch(es) each...",
        cli.flows, cli.branches
    );

    let mut store = JsonFlowStore::open(&cli.output)?;

    let articles: Vec<ArticleRef> = TOPICS
        .iter()
        .map(|topic| ArticleRef {
            id: fresh_id("a"),
            title: format!("{} guide", topic),
            slug: Some(topic.to_lowercase().replace(' ', "-")),
        })
        .collect();
    store.set_articles(articles.clone())?;

    for i in 0..cli.flows {
        let slug = format!("demo-flow-{}", i + 1);
        store.insert_flow(FlowRecord {
            id: fresh_id("flow"),
            name: format!("Demo flow {}", i + 1),
            slug: slug.clone(),
            graph: generate_graph(&articles, cli.branches),
            is_default: false,
            updated_at: Utc::now(),
        })?;
        println!("  -> Wrote flow '{}'", slug);
    }

    lifecycle::set_default_flow(&mut store, "demo-flow-1")?;
    println!("  -> Marked 'demo-flow-1' as the default flow");
    println!("Done. Store written to '{}'", cli.output);
    Ok(())
}

/// Builds a plausible authored graph: a root question fanning out into
/// article nodes, each branching into a follow-up question or ticket.
fn generate_graph(articles: &[ArticleRef], branches: usize) -> Graph {
    let mut rng = rand::rng();
    let mut editor = FlowEditor::new(Graph::default());

    let root = editor.add_node(
        Position::new(0.0, 0.0),
        NodePayload::Question {
            label: "What do you need help with?".to_string(),
        },
    );

    for b in 0..branches {
        let article = &articles[rng.random_range(0..articles.len())];
        let x = 260.0 * (b as f64 + 1.0);

        let article_node = editor.add_node(
            Position::new(x, 160.0),
            NodePayload::Article {
                label: article.title.clone(),
                article_id: article.id.clone(),
                article_title: article.title.clone(),
            },
        );
        editor.add_edge(
            &root,
            &article_node,
            EdgeOption::static_label(format!("Option {}", b + 1)),
        );

        // Half the branches end in an escalation ticket, the rest loop into
        // a follow-up question with a Yes/No fork.
        if rng.random_bool(0.5) {
            let ticket = editor.add_node(
                Position::new(x, 320.0),
                NodePayload::Ticket {
                    label: "Escalate to support".to_string(),
                    priority: TicketPriority::Normal,
                },
            );
            editor.add_edge(
                &article_node,
                &ticket,
                EdgeOption::input("Describe your problem..."),
            );
        } else {
            let followup = editor.add_node(
                Position::new(x, 320.0),
                NodePayload::Question {
                    label: "Did this answer your question?".to_string(),
                },
            );
            editor.add_edge(
                &article_node,
                &followup,
                EdgeOption::static_label(BranchVariant::Yes.label()),
            );
        }
    }

    editor.save_payload()
}
