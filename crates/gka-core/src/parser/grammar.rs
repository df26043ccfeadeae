//! Single-line grammar of the description language
//!
//! ```text
//! <node> ws <dir> ws <node> ws [ '(' label ')' ] ws [ ':' ws weight ] ws [ ';' ]
//! ```
//!
//! Nodes are runs of Unicode letters, decimal digits and underscores; `<dir>`
//! is `->` or `--`. A line must match as a whole.

use regex::Regex;

use crate::error::{GraphError, Result};
use crate::graph::Direction;

const NODE: &str = r"[\p{L}\p{Nd}_]+";

/// Assemble the full-line pattern from its parts
fn line_pattern() -> String {
    let ws = r"\s*";
    let direction = r"(?P<direction>->|--)";
    let label = r"(?:\((?P<label>[^)]+)\))?";
    // fractional numerals are accepted here and dropped as weights later
    let weight = r"(?::\s*(?P<weight>\d+(?:\.\d+)?))?";
    format!(
        "^(?P<source>{NODE}){ws}{direction}{ws}(?P<target>{NODE}){ws}{label}{ws}{weight}{ws};?{ws}$"
    )
}

pub(crate) fn compile() -> Result<Regex> {
    Regex::new(&line_pattern())
        .map_err(|e| GraphError::Other(format!("failed to compile line grammar: {}", e)))
}

/// One statement of the description language
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedLine {
    pub source: String,
    pub direction: Direction,
    pub target: String,
    pub label: Option<String>,
    pub weight: Option<i64>,
}

/// Match `line` (already trimmed) against the grammar
pub(crate) fn match_line(pattern: &Regex, line: &str) -> Option<ParsedLine> {
    let caps = pattern.captures(line)?;

    let source = caps.name("source")?.as_str().to_string();
    let direction = Direction::from_token(caps.name("direction")?.as_str())?;
    let target = caps.name("target")?.as_str().to_string();
    let label = caps.name("label").map(|m| m.as_str().to_string());
    let weight = caps.name("weight").and_then(|m| parse_weight(m.as_str()));

    Some(ParsedLine {
        source,
        direction,
        target,
        label,
        weight,
    })
}

/// Integer weight, or `None` if the numeral is not a 32-bit integer
pub fn parse_weight(input: &str) -> Option<i64> {
    input.trim().parse::<i32>().ok().map(i64::from)
}
