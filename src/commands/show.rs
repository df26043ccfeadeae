//! `gka show` - print the nodes and edges of one graph

use gka_core::error::Result;
use gka_core::format::{record_value, OutputFormat};
use gka_core::graph::{EdgeView, GraphView};

use crate::commands::dispatch::CommandContext;

pub fn execute(ctx: &CommandContext, index: usize) -> Result<()> {
    let loaded = ctx.load()?;
    let graph = loaded.select(index)?;
    let view = GraphView::new(graph);

    match ctx.cli.format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&view)?),
        OutputFormat::Human => output_human(&view),
        OutputFormat::Records => output_records(&view),
    }

    Ok(())
}

fn edge_attributes(edge: &EdgeView) -> String {
    let mut attrs = String::new();
    if let Some(label) = edge.label {
        attrs.push_str(&format!(" label={}", record_value(label)));
    }
    if let Some(weight) = edge.weight {
        attrs.push_str(&format!(" weight={}", weight));
    }
    attrs
}

fn output_human(view: &GraphView) {
    println!("{} ({})", view.id, view.source_file);
    let ids: Vec<&str> = view.nodes.iter().map(|n| n.id).collect();
    println!("Nodes ({}): {}", ids.len(), ids.join(", "));
    println!("Edges ({}):", view.edges.len());
    for edge in &view.edges {
        println!("  {}{}", edge.id, edge_attributes(edge));
    }
}

fn output_records(view: &GraphView) {
    println!(
        "graph id={} source={} nodes={} edges={}",
        view.id,
        record_value(view.source_file),
        view.nodes.len(),
        view.edges.len()
    );
    for node in &view.nodes {
        println!("node id={} label={}", node.id, record_value(node.label));
    }
    for edge in &view.edges {
        println!(
            "edge id={} source={} target={} direction={}{}",
            edge.id,
            edge.source,
            edge.target,
            edge.direction.token(),
            edge_attributes(edge)
        );
    }
}
