//! Text rendering of enumeration results.
//!
//! Each path is written as its identifiers, one per line, followed by a
//! `couts:<total_cost>` line. Paths appear in discovery order.

use std::io::Write;

use crate::enumerate::{Enumeration, PathView};
use crate::error::EnumError;

/// Prefix of the cost line that closes every path block.
pub const COST_PREFIX: &str = "couts:";

/// Writes a single path block.
pub fn write_path<W: Write>(out: &mut W, path: &PathView<'_>) -> Result<(), EnumError> {
    for id in path.sequence() {
        writeln!(out, "{id}")?;
    }
    writeln!(out, "{COST_PREFIX}{}", path.total_cost())?;
    Ok(())
}

/// Writes every path of `result` in discovery order.
pub fn write_paths<W: Write>(out: &mut W, result: &Enumeration) -> Result<(), EnumError> {
    for path in result.iter() {
        write_path(out, &path)?;
    }
    out.flush()?;
    Ok(())
}

/// Renders every path into a string.
pub fn render(result: &Enumeration) -> String {
    let mut buf = Vec::new();
    // Writing into a Vec cannot fail.
    let _ = write_paths(&mut buf, result);
    String::from_utf8_lossy(&buf).into_owned()
}
