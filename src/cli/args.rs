//! Command argument structures

use std::path::PathBuf;

use clap::Args;

use super::parse::{parse_edge_spec, parse_mst_algorithm, parse_sort_algorithm};
use algotrace_core::error::{AlgoError, Result};
use algotrace_core::graph::MstAlgorithm;
use algotrace_core::model::{EdgeSpec, Graph, GraphDocument};
use algotrace_core::sort::SortAlgorithm;

/// Where a command's graph comes from: a document or inline edges
#[derive(Args, Debug, Clone)]
pub struct GraphArgs {
    /// Graph document (.json, .toml, .yaml)
    #[arg(long, short = 'g', conflicts_with_all = ["nodes", "edges"])]
    pub graph: Option<PathBuf>,

    /// Node count for an inline graph (default: highest edge endpoint + 1)
    #[arg(long, short = 'n')]
    pub nodes: Option<usize>,

    /// Inline edge: FROM-TO:WEIGHT (undirected) or FROM>TO:WEIGHT (directed)
    #[arg(
        long = "edge",
        short = 'e',
        value_parser = parse_edge_spec,
        action = clap::ArgAction::Append
    )]
    pub edges: Vec<EdgeSpec>,
}

impl GraphArgs {
    /// Build the graph from the document or the inline edges
    pub fn load(&self) -> Result<Graph> {
        if let Some(path) = &self.graph {
            return GraphDocument::load(path)?.to_graph();
        }

        if self.nodes.is_none() && self.edges.is_empty() {
            return Err(AlgoError::UsageError(
                "no graph given: pass --graph FILE or --edge SPEC (with optional --nodes N)"
                    .to_string(),
            ));
        }

        let node_count = match self.nodes {
            Some(count) => count,
            None => inferred_node_count(&self.edges)?,
        };
        GraphDocument::from_inline(node_count, &self.edges).to_graph()
    }
}

/// Highest endpoint plus one; an endpoint of `usize::MAX` has no such count
fn inferred_node_count(edges: &[EdgeSpec]) -> Result<usize> {
    edges.iter().try_fold(0, |count: usize, edge| {
        let highest = edge.from.max(edge.to);
        let needed = highest
            .checked_add(1)
            .ok_or_else(|| AlgoError::invalid_node(highest, "inline edge"))?;
        Ok(count.max(needed))
    })
}

/// Arguments for the mst command.
#[derive(Args, Debug)]
pub struct MstArgs {
    #[command(flatten)]
    pub graph: GraphArgs,

    /// Algorithm (kruskal, prim); defaults to `[mst] algorithm`
    #[arg(long, short = 'a', value_parser = parse_mst_algorithm)]
    pub algorithm: Option<MstAlgorithm>,

    /// Start node, required by prim
    #[arg(long, short = 's')]
    pub source: Option<usize>,
}

/// Arguments for the path command.
#[derive(Args, Debug)]
pub struct PathArgs {
    #[command(flatten)]
    pub graph: GraphArgs,

    /// Source node
    #[arg(long, short = 's')]
    pub source: Option<usize>,

    /// Report the path to this node
    #[arg(long, short = 't')]
    pub target: Option<usize>,

    /// Run even when an edge has a negative weight
    #[arg(long)]
    pub allow_negative: bool,
}

/// Arguments for the sort command.
#[derive(Args, Debug)]
pub struct SortArgs {
    /// Algorithm (bubble, selection, insertion, quick, merge); defaults to `[sort] algorithm`
    #[arg(long, short = 'a', value_parser = parse_sort_algorithm)]
    pub algorithm: Option<SortAlgorithm>,

    /// Values to sort; each argument may hold a comma-separated list
    #[arg(required = true, allow_negative_numbers = true)]
    pub values: Vec<String>,
}

impl SortArgs {
    /// Individual value entries, with comma lists split and blanks dropped
    pub fn entries(&self) -> Vec<&str> {
        self.values
            .iter()
            .flat_map(|v| v.split(','))
            .map(str::trim)
            .filter(|v| !v.is_empty())
            .collect()
    }
}
