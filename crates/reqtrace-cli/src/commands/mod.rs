//! Command implementations.

mod conflicts;
mod trace;
mod verify;

pub use conflicts::execute_conflicts;
pub use trace::execute_trace;
pub use verify::execute_verify;

use crate::error::Result;
use reqtrace_domain::BrdRecord;
use std::path::Path;

/// Load a BRD from a JSON file.
///
/// Raw extraction output is accepted as-is: markdown code fences are
/// stripped and missing sections default to empty.
pub(crate) fn load_brd(path: &Path) -> Result<BrdRecord> {
    let raw = std::fs::read_to_string(path)?;
    Ok(reqtrace_extract::parse_extraction_response(&raw)?)
}
