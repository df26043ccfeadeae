//! `gka list` - list the parsed graphs

use gka_core::error::Result;
use gka_core::format::{record_value, OutputFormat};
use gka_core::graph::GraphSummary;

use crate::commands::dispatch::CommandContext;

pub fn execute(ctx: &CommandContext) -> Result<()> {
    let loaded = ctx.load()?;
    let graphs = loaded.registry.list_graphs();

    match ctx.cli.format {
        OutputFormat::Json => {
            let items: Vec<serde_json::Value> = graphs.iter().map(summary_json).collect();
            println!("{}", serde_json::to_string_pretty(&items)?);
        }
        OutputFormat::Human => {
            if graphs.is_empty() {
                if !ctx.cli.quiet {
                    println!("No graphs found");
                }
                return Ok(());
            }
            if !ctx.cli.quiet {
                println!("{} graphs found", graphs.len());
            }
            for g in &graphs {
                println!(
                    "{:>3}  {}  {}  ({} nodes, {} edges)",
                    g.index + 1,
                    g.id,
                    g.source_file,
                    g.node_count,
                    g.edge_count
                );
            }
        }
        OutputFormat::Records => {
            for g in &graphs {
                println!(
                    "graph index={} id={} source={} nodes={} edges={}",
                    g.index + 1,
                    g.id,
                    record_value(&g.source_file),
                    g.node_count,
                    g.edge_count
                );
            }
        }
    }

    Ok(())
}

fn summary_json(g: &GraphSummary) -> serde_json::Value {
    serde_json::json!({
        "index": g.index + 1,
        "id": g.id,
        "source_file": g.source_file,
        "node_count": g.node_count,
        "edge_count": g.edge_count,
    })
}
