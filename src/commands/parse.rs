//! `gka parse` - parse every source and report what was found

use gka_core::error::Result;
use gka_core::format::{record_value, OutputFormat};
use gka_core::parser::{BatchReport, SourceReport};

use crate::commands::dispatch::CommandContext;

pub fn execute(ctx: &CommandContext) -> Result<()> {
    let loaded = ctx.load()?;
    let report = &loaded.report;

    match ctx.cli.format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&report_json(report))?);
        }
        OutputFormat::Human => output_human(report, ctx.cli.quiet),
        OutputFormat::Records => output_records(report),
    }

    Ok(())
}

fn report_json(report: &BatchReport) -> serde_json::Value {
    let sources: Vec<serde_json::Value> = report
        .sources
        .iter()
        .map(|s| {
            serde_json::json!({
                "name": s.name,
                "graph_id": s.graph_id,
                "lines": s.lines,
                "matched_lines": s.matched_lines,
                "skipped_lines": s.skipped_lines,
                "duplicate_edges": s.duplicate_edges,
                "invalid_content": s.invalid_content(),
                "index": s.graph_index.map(|i| i + 1),
            })
        })
        .collect();

    serde_json::json!({
        "sources": sources,
        "unreadable": report.unreadable,
        "graphs_added": report.graphs_added(),
    })
}

fn output_human(report: &BatchReport, quiet: bool) {
    for source in &report.sources {
        println!("Parsing: {}", source.name);
        if source.invalid_content() {
            println!("  Invalid file content");
            println!("  No parsable information detected");
            continue;
        }
        if !quiet {
            print_source_counts(source);
        }
    }

    for unreadable in &report.unreadable {
        println!("Unreadable: {} ({})", unreadable.name, unreadable.reason);
    }

    if !quiet {
        println!("{} graphs registered", report.graphs_added());
    }
}

fn print_source_counts(source: &SourceReport) {
    println!(
        "  {} of {} lines parsed, {} skipped, {} duplicate edges",
        source.matched_lines, source.lines, source.skipped_lines, source.duplicate_edges
    );
    if let Some(index) = source.graph_index {
        println!("  Registered as #{} ({})", index + 1, source.graph_id);
    }
}

fn output_records(report: &BatchReport) {
    for s in &report.sources {
        let index = s
            .graph_index
            .map(|i| (i + 1).to_string())
            .unwrap_or_else(|| "-".to_string());
        println!(
            "source name={} graph={} index={} lines={} matched={} skipped={} duplicates={} invalid={}",
            record_value(&s.name),
            s.graph_id,
            index,
            s.lines,
            s.matched_lines,
            s.skipped_lines,
            s.duplicate_edges,
            s.invalid_content()
        );
    }
    for u in &report.unreadable {
        println!(
            "unreadable name={} reason={}",
            record_value(&u.name),
            record_value(&u.reason)
        );
    }
}
