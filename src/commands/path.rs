//! `gka path` - shortest path between two nodes of a graph

use gka_core::error::Result;
use gka_core::format::OutputFormat;
use gka_core::{bail_invalid, trace_time};

use crate::commands::dispatch::CommandContext;

pub fn execute(ctx: &CommandContext, index: usize, from: &str, to: &str) -> Result<()> {
    for id in [from, to] {
        if id.trim().is_empty() {
            bail_invalid!("node id", format!("{:?}", id));
        }
    }

    let loaded = ctx.load()?;
    let graph = loaded.select(index)?;

    // select accepted the index, so it is at least 1
    let path = loaded.registry.shortest_path(index - 1, from, to)?;
    trace_time!(ctx.start, "path", graph = graph.id());

    let found = !path.is_empty();
    let hops = path.len().saturating_sub(1);

    match ctx.cli.format {
        OutputFormat::Json => {
            let output = serde_json::json!({
                "graph": graph.id(),
                "from": from,
                "to": to,
                "found": found,
                "path": path,
                "path_length": hops,
            });
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        OutputFormat::Human => {
            if !found {
                println!("No path from {} to {}", from, to);
                return Ok(());
            }
            println!("{}", path.join(" -> "));
            if !ctx.cli.quiet {
                let unit = if hops == 1 { "hop" } else { "hops" };
                println!("Path length: {} {}", hops, unit);
            }
        }
        OutputFormat::Records => {
            println!(
                "path graph={} from={} to={} found={} length={}",
                graph.id(),
                from,
                to,
                found,
                hops
            );
            for (step, node) in path.iter().enumerate() {
                println!("step n={} node={}", step, node);
            }
        }
    }

    Ok(())
}
