//! Subcommand handlers.
//!
//! Each handler writes its normal output to `out` and returns the first
//! error; `main` turns that into `error: ...` on stderr and exit status 1.

use std::io::Write;

use resolv_ir::{Error, Result};
use resolv_path::{parse_filter_token, parse_path, Segment};
use resolv_registry::Registry;
use tracing::debug;

/// `resolv get <variable>...`: one resolved value per line.
///
/// Every variable is resolved before anything is written, so a failure
/// produces no partial output.
pub fn get<W: Write>(registry: &Registry, variables: &[String], out: &mut W) -> Result<()> {
    if variables.is_empty() {
        return Err(Error::bad_path("no variables given"));
    }
    debug!(count = variables.len(), "resolving variables");
    for value in registry.resolve_all(variables)? {
        writeln!(out, "{value}")?;
    }
    Ok(())
}

/// `resolv expand <string>`: interpolate and print.
pub fn expand<W: Write>(registry: &Registry, input: &str, out: &mut W) -> Result<()> {
    let expanded = registry.resolve_string(input)?;
    writeln!(out, "{expanded}")?;
    Ok(())
}

/// `resolv parse <path>`: show how a path expression splits.
///
/// ```text
/// key servers
/// filter field=host value=example.org
/// key port
/// ```
///
/// Numeric tokens print as `index N`; whether they act as an index or a
/// key depends on the tree they are used against.
pub fn parse<W: Write>(path: &str, out: &mut W) -> Result<()> {
    let mut lines = Vec::new();
    for token in parse_path(path) {
        lines.push(match Segment::classify(token) {
            Segment::Filter(raw) => {
                let filter = parse_filter_token(raw)?;
                format!("filter field={} value={}", filter.field, filter.value)
            }
            Segment::Index(index) => format!("index {index}"),
            Segment::Key(key) => format!("key {key}"),
        });
    }
    for line in lines {
        writeln!(out, "{line}")?;
    }
    Ok(())
}
