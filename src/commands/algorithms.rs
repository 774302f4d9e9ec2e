//! `algotrace algorithms` command - list supported algorithms

use serde_json::json;

use crate::cli::OutputFormat;
use crate::commands::dispatch::CommandContext;
use crate::commands::format::json;
use algotrace_core::error::Result;
use algotrace_core::graph::MstAlgorithm;
use algotrace_core::records::header;
use algotrace_core::sort::SortAlgorithm;

/// Execute the algorithms command
pub fn execute(ctx: &CommandContext) -> Result<()> {
    match ctx.format() {
        OutputFormat::Human => output_human(ctx),
        OutputFormat::Json => output_json()?,
        OutputFormat::Records => output_records(),
    }
    Ok(())
}

fn names<T: ToString>(items: &[T]) -> String {
    items
        .iter()
        .map(|i| i.to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

fn output_human(ctx: &CommandContext) {
    println!("mst: {}", names(&MstAlgorithm::ALL));
    println!("path: dijkstra");
    println!("sort: {}", names(&SortAlgorithm::ALL));

    if !ctx.quiet() {
        println!();
        println!("prim and dijkstra require --source; kruskal runs on the whole graph.");
        println!(
            "Defaults: mst={}, sort={}",
            ctx.config.mst.algorithm, ctx.config.sort.algorithm
        );
        if let Some(path) = &ctx.config_source {
            println!("Config: {}", path.display());
        }
    }
}

fn output_json() -> Result<()> {
    let mst: Vec<_> = MstAlgorithm::ALL
        .iter()
        .map(|a| json!({ "name": a, "requires_source": a.requires_source() }))
        .collect();
    let sort: Vec<_> = SortAlgorithm::ALL
        .iter()
        .map(|a| json!({ "name": a, "stable": a.is_stable() }))
        .collect();

    let output = json!({
        "mst": mst,
        "path": [{ "name": "dijkstra", "requires_source": true }],
        "sort": sort,
    });
    json::print_json(&output)
}

fn output_records() {
    println!("{}", header("algorithms", &[]));
    for algorithm in MstAlgorithm::ALL {
        println!("L mst {} source={}", algorithm, algorithm.requires_source());
    }
    println!("L path dijkstra source=true");
    for algorithm in SortAlgorithm::ALL {
        println!("L sort {} stable={}", algorithm, algorithm.is_stable());
    }
}
