//! `algotrace sort` command - sort numbers and trace every step

use serde_json::json;
use tracing::debug;

use crate::cli::{OutputFormat, SortArgs};
use crate::commands::dispatch::CommandContext;
use crate::commands::format::{format_values, json, records};
use algotrace_core::error::Result;
use algotrace_core::model::Array;
use algotrace_core::records::{header, join_list};
use algotrace_core::sort::{run_sort, SortResult};
use algotrace_core::trace::StepCategory;

/// Execute the sort command
pub fn execute(ctx: &CommandContext, args: &SortArgs) -> Result<()> {
    let array = Array::parse(&args.entries())?;
    let algorithm = args.algorithm.unwrap_or(ctx.config.sort.algorithm);

    let result = run_sort(&array, algorithm);
    debug!(elapsed = ?ctx.start.elapsed(), steps = result.steps.len(), "sort");

    match ctx.format() {
        OutputFormat::Human => output_human(ctx, &array, &result),
        OutputFormat::Json => output_json(&array, &result)?,
        OutputFormat::Records => output_records(&array, &result),
    }

    Ok(())
}

fn output_human(ctx: &CommandContext, array: &Array, result: &SortResult) {
    if !ctx.quiet() {
        println!("{} sort of {} values", result.algorithm, array.len());
        println!();
        ctx.playback().print_steps(&result.steps);
        println!();
    }

    println!("Sorted: {}", format_values(result.sorted()));

    if !ctx.quiet() {
        println!(
            "{} steps: {} comparisons, {} data moves",
            result.steps.len(),
            result.count(StepCategory::Comparison),
            result.snapshots.len() - 1
        );
    }
}

fn output_json(array: &Array, result: &SortResult) -> Result<()> {
    let output = json!({
        "algorithm": result.algorithm,
        "input": array.values(),
        "sorted": result.sorted(),
        "operations": result.operation_count(),
        "snapshots": result.snapshots,
        "steps": json::steps_json(&result.steps)?,
    });
    json::print_json(&output)
}

fn output_records(array: &Array, result: &SortResult) {
    println!(
        "{}",
        header(
            "sort",
            &[
                ("algorithm", result.algorithm.to_string()),
                ("values", array.len().to_string()),
                ("steps", result.steps.len().to_string()),
                ("snapshots", result.snapshots.len().to_string()),
            ],
        )
    );
    records::print_steps(&result.steps);
    println!("A {}", join_list(result.sorted()));
}
