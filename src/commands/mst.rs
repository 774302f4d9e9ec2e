//! `algotrace mst` command - minimum spanning tree (Kruskal, Prim)

use serde_json::json;
use tracing::debug;

use crate::cli::{MstArgs, OutputFormat};
use crate::commands::dispatch::CommandContext;
use crate::commands::format::{json, records};
use algotrace_core::error::Result;
use algotrace_core::graph::{run_mst, MstAlgorithm, MstResult};
use algotrace_core::model::{Graph, NodeId};
use algotrace_core::records::header;

/// Execute the mst command
pub fn execute(ctx: &CommandContext, args: &MstArgs) -> Result<()> {
    let graph = args.graph.load()?;
    let algorithm = args.algorithm.unwrap_or(ctx.config.mst.algorithm);
    let source = args.source.map(NodeId);

    if algorithm == MstAlgorithm::Kruskal && source.is_some() {
        debug!("kruskal ignores --source");
    }

    let result = run_mst(&graph, algorithm, source)?;
    debug!(elapsed = ?ctx.start.elapsed(), edges = result.edges.len(), "mst");

    match ctx.format() {
        OutputFormat::Human => output_human(ctx, &graph, &result),
        OutputFormat::Json => output_json(&graph, source, &result)?,
        OutputFormat::Records => output_records(&graph, &result),
    }

    Ok(())
}

fn output_human(ctx: &CommandContext, graph: &Graph, result: &MstResult) {
    if !ctx.quiet() {
        println!(
            "{} on {} nodes, {} edges",
            result.algorithm,
            graph.node_count(),
            graph.edge_count()
        );
        println!();
        ctx.playback().print_steps(&result.trace);
        println!();
        println!("Tree edges:");
        for edge in &result.edges {
            println!("  {} - {} (weight {})", edge.from, edge.to, edge.weight);
        }
    }

    let shape = if result.spans(graph) {
        "spanning tree"
    } else {
        "forest, graph is disconnected"
    };
    println!("Total weight: {} ({})", result.total_weight, shape);
}

fn output_json(graph: &Graph, source: Option<NodeId>, result: &MstResult) -> Result<()> {
    let output = json!({
        "algorithm": result.algorithm,
        "source": source,
        "node_count": graph.node_count(),
        "edge_count": graph.edge_count(),
        "tree": result.edges,
        "total_weight": result.total_weight,
        "spanning": result.spans(graph),
        "steps": json::steps_json(&result.trace)?,
    });
    json::print_json(&output)
}

fn output_records(graph: &Graph, result: &MstResult) {
    println!(
        "{}",
        header(
            "mst",
            &[
                ("algorithm", result.algorithm.to_string()),
                ("nodes", graph.node_count().to_string()),
                ("edges", graph.edge_count().to_string()),
                ("total_weight", result.total_weight.to_string()),
                ("spanning", result.spans(graph).to_string()),
                ("steps", result.trace.len().to_string()),
            ],
        )
    );
    records::print_steps(&result.trace);
    for edge in &result.edges {
        println!("E {} {} {} {}", edge.id, edge.from, edge.to, edge.weight);
    }
}
