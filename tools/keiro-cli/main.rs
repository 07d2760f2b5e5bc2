use clap::{Parser, Subcommand};
use itertools::Itertools;
use keiro::prelude::*;
use std::process::ExitCode;

/// Inspect and validate keiro flow store documents.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print a summary of one flow: metadata, nodes, and edges.
    Inspect {
        /// Path to the store JSON document
        store: String,
        /// Slug of the flow to inspect
        slug: String,
    },
    /// Check every flow in the store for integrity problems: dangling
    /// edges, duplicate node ids, and multiple default flows.
    Validate {
        /// Path to the store JSON document
        store: String,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    match cli.command {
        Command::Inspect { store, slug } => inspect(&store, &slug),
        Command::Validate { store } => validate(&store),
    }
}

fn open_store(path: &str) -> Option<JsonFlowStore> {
    match JsonFlowStore::open(path) {
        Ok(store) => Some(store),
        Err(e) => {
            eprintln!("Failed to open store '{}': {}", path, e);
            None
        }
    }
}

fn inspect(store_path: &str, slug: &str) -> ExitCode {
    let Some(store) = open_store(store_path) else {
        return ExitCode::FAILURE;
    };

    let record = match store.load_flow(slug) {
        Ok(record) => record,
        Err(e) => {
            eprintln!("{}", e);
            return ExitCode::FAILURE;
        }
    };

    let default_marker = if record.is_default { " [default]" } else { "" };
    println!("Flow '{}' ({}){}", record.name, record.slug, default_marker);
    println!("  Last saved: {}", record.updated_at);
    println!(
        "  Schema version: {}",
        record.graph.schema_version
    );

    println!("  Nodes ({}):", record.graph.nodes.len());
    for node in &record.graph.nodes {
        println!(
            "    {} [{}] \"{}\" @ ({:.0}, {:.0})",
            node.id,
            node.kind(),
            node.label(),
            node.position.x,
            node.position.y
        );
    }

    println!("  Edges ({}):", record.graph.edges.len());
    for edge in &record.graph.edges {
        let option = match &edge.option {
            EdgeOption::Static { label } => format!("static \"{}\"", label),
            EdgeOption::Input { input_placeholder } => {
                format!("input \"{}\"", input_placeholder)
            }
        };
        println!(
            "    {} -> {} ({})",
            edge.source, edge.target, option
        );
    }

    ExitCode::SUCCESS
}

fn validate(store_path: &str) -> ExitCode {
    let Some(store) = open_store(store_path) else {
        return ExitCode::FAILURE;
    };

    let flows = match store.list_flows() {
        Ok(flows) => flows,
        Err(e) => {
            eprintln!("{}", e);
            return ExitCode::FAILURE;
        }
    };

    let mut problems = 0usize;
    let mut defaults: Vec<String> = Vec::new();

    for summary in &flows {
        let record = match store.load_flow(&summary.slug) {
            Ok(record) => record,
            Err(e) => {
                eprintln!("{}", e);
                problems += 1;
                continue;
            }
        };
        if record.is_default {
            defaults.push(record.slug.clone());
        }

        let dangling = record.graph.dangling_edges();
        if !dangling.is_empty() {
            println!(
                "Flow '{}': {} dangling edge(s): {}",
                record.slug,
                dangling.len(),
                dangling.iter().join(", ")
            );
            problems += dangling.len();
        }

        let duplicates = record.graph.duplicate_node_ids();
        if !duplicates.is_empty() {
            println!(
                "Flow '{}': duplicate node id(s): {}",
                record.slug,
                duplicates.iter().join(", ")
            );
            problems += duplicates.len();
        }
    }

    if defaults.len() > 1 {
        println!(
            "Collection has {} default flows (expected at most one): {}",
            defaults.len(),
            defaults.iter().join(", ")
        );
        problems += 1;
    }

    if problems == 0 {
        println!("{} flow(s) checked, no problems found.", flows.len());
        ExitCode::SUCCESS
    } else {
        println!("{} flow(s) checked, {} problem(s) found.", flows.len(), problems);
        ExitCode::FAILURE
    }
}
