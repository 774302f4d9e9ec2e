//! `algotrace path` command - single-source shortest paths (Dijkstra)

use serde_json::json;
use tracing::debug;

use crate::cli::{OutputFormat, PathArgs};
use crate::commands::dispatch::CommandContext;
use crate::commands::format::{json, records};
use algotrace_core::error::{AlgoError, Result};
use algotrace_core::graph::dijkstra::tree_edge_ids;
use algotrace_core::graph::{run_shortest_path, ShortestPathResult};
use algotrace_core::model::{Graph, NodeId};
use algotrace_core::records::{header, join_list};

/// Execute the path command
pub fn execute(ctx: &CommandContext, args: &PathArgs) -> Result<()> {
    let graph = args.graph.load()?;

    let target = args.target.map(NodeId);
    if let Some(target) = target {
        if !graph.contains(target) {
            return Err(AlgoError::invalid_node(target.index(), "path target"));
        }
    }

    let mut opts = ctx.config.shortest_path_options();
    if args.allow_negative {
        opts.reject_negative_weights = false;
    }

    let result = run_shortest_path(&graph, args.source.map(NodeId), &opts)?;
    debug!(elapsed = ?ctx.start.elapsed(), steps = result.trace.len(), "path");

    match ctx.format() {
        OutputFormat::Human => output_human(ctx, &graph, &result, target),
        OutputFormat::Json => output_json(&graph, &result, target)?,
        OutputFormat::Records => output_records(&graph, &result, target),
    }

    Ok(())
}

fn path_text(path: &[NodeId]) -> String {
    path.iter()
        .map(|n| n.to_string())
        .collect::<Vec<_>>()
        .join(" -> ")
}

fn output_human(
    ctx: &CommandContext,
    graph: &Graph,
    result: &ShortestPathResult,
    target: Option<NodeId>,
) {
    if !ctx.quiet() {
        println!(
            "dijkstra from node {} on {} nodes, {} edges",
            result.source,
            graph.node_count(),
            graph.edge_count()
        );
        println!();
        ctx.playback().print_steps(&result.trace);
        println!();
    }

    if let Some(target) = target {
        match (result.path_to(target), result.distance(target)) {
            (Some(path), Some(distance)) => {
                println!("Path to {}: {} (cost {})", target, path_text(&path), distance)
            }
            _ => println!("Node {} is unreachable from node {}", target, result.source),
        }
        return;
    }

    println!("Distances from node {}:", result.source);
    for (node, distance) in result.distances.iter().enumerate() {
        if !distance.is_reachable() {
            println!("  node {}: unreachable", node);
        } else if let Some(via) = result.predecessors[node] {
            println!("  node {}: {} (via {})", node, distance, via);
        } else {
            println!("  node {}: {}", node, distance);
        }
    }
}

fn output_json(graph: &Graph, result: &ShortestPathResult, target: Option<NodeId>) -> Result<()> {
    let target_json = target.map(|t| {
        json!({
            "node": t,
            "distance": result.distance(t),
            "path": result.path_to(t),
        })
    });

    let output = json!({
        "algorithm": "dijkstra",
        "source": result.source,
        "distances": result.distances,
        "predecessors": result.predecessors,
        "tree_edges": tree_edge_ids(graph, result),
        "target": target_json,
        "steps": json::steps_json(&result.trace)?,
    });
    json::print_json(&output)
}

fn output_records(graph: &Graph, result: &ShortestPathResult, target: Option<NodeId>) {
    let mut fields = vec![
        ("algorithm", "dijkstra".to_string()),
        ("source", result.source.to_string()),
        ("nodes", graph.node_count().to_string()),
        ("steps", result.trace.len().to_string()),
    ];
    if let Some(target) = target {
        fields.push(("target", target.to_string()));
    }
    println!("{}", header("path", &fields));

    records::print_steps(&result.trace);

    for (node, distance) in result.distances.iter().enumerate() {
        let pred = result.predecessors[node]
            .map(|p| p.to_string())
            .unwrap_or_else(|| "-".to_string());
        println!("D {} {} pred={}", node, distance, pred);
    }

    if let Some(target) = target {
        let path = result.path_to(target).unwrap_or_default();
        let distance = result
            .distance(target)
            .map(|d| d.to_string())
            .unwrap_or_else(|| "inf".to_string());
        println!("P {} {} path={}", target, distance, join_list(&path));
    }
}
