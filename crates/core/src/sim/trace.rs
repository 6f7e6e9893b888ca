//! Trace Reader.
//!
//! Decodes valgrind-style memory traces into [`AccessRecord`]s. Each line has
//! the form
//!
//! ```text
//! [space]<op> <hex-address>,<decimal-size>
//! ```
//!
//! where `<op>` is `L` (load), `S` (store) or `M` (modify). Any other
//! operation character, such as `I` for an instruction fetch, decodes to
//! [`AccessKind::Unknown`], which the simulator skips. Blank lines are ignored.
//!
//! Decoding is permissive. The size is informational, so a missing or
//! unparsable size decodes as 0 and the access is still simulated. A line
//! whose address cannot be parsed, including one with bytes that are not
//! UTF-8, is logged and turned into an `Unknown` record instead of aborting
//! the run.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use tracing::{debug, warn};

use crate::common::data::{AccessKind, AccessRecord};
use crate::common::error::TraceError;

/// Decodes one trace line.
///
/// # Returns
///
/// `None` for a blank line, otherwise a record. Malformed lines yield an
/// [`AccessKind::Unknown`] record carrying the operation character.
pub fn parse_line(line: &str) -> Option<AccessRecord> {
    decode(line, None)
}

/// Decodes every line of an in-memory trace, skipping blank lines.
pub fn parse_trace(text: &str) -> Vec<AccessRecord> {
    text.lines()
        .enumerate()
        .filter_map(|(idx, line)| decode(line, Some(idx + 1)))
        .collect()
}

/// Reads and decodes a trace file.
///
/// # Errors
///
/// [`TraceError::Open`] if the file cannot be opened, [`TraceError::Read`]
/// if an I/O error interrupts reading. Invalid UTF-8 is not an error; the
/// offending bytes are replaced and the line decodes like any malformed line.
pub fn read_trace(path: impl AsRef<Path>) -> Result<Vec<AccessRecord>, TraceError> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|source| TraceError::Open {
        path: path.to_path_buf(),
        source,
    })?;

    let mut records = Vec::new();
    for (idx, bytes) in BufReader::new(file).split(b'\n').enumerate() {
        let bytes = bytes.map_err(|source| TraceError::Read {
            path: path.to_path_buf(),
            line: idx + 1,
            source,
        })?;
        let line = String::from_utf8_lossy(&bytes);
        records.extend(decode(line.trim_end_matches('\r'), Some(idx + 1)));
    }
    debug!(path = %path.display(), records = records.len(), "trace loaded");
    Ok(records)
}

fn decode(line: &str, line_no: Option<usize>) -> Option<AccessRecord> {
    let line = line.trim_start();
    let mut chars = line.chars();
    let op = chars.next()?;
    let kind = AccessKind::from_op(op);

    match parse_operands(chars.as_str()) {
        Some((address, size)) => Some(AccessRecord::new(kind, address, size)),
        None => {
            warn!(line = ?line_no, text = line, "malformed trace line, skipping");
            Some(AccessRecord::new(AccessKind::Unknown(op), 0, 0))
        }
    }
}

/// Parses `<hex-address>[,<size>]`, tolerating surrounding whitespace and a `0x` prefix.
///
/// Only the address is required. A missing or unparsable size is 0.
fn parse_operands(rest: &str) -> Option<(u64, u32)> {
    let (addr, size) = match rest.trim().split_once(',') {
        Some((addr, size)) => (addr.trim(), Some(size.trim())),
        None => (rest.trim(), None),
    };
    let addr = addr
        .strip_prefix("0x")
        .or_else(|| addr.strip_prefix("0X"))
        .unwrap_or(addr);
    let address = u64::from_str_radix(addr, 16).ok()?;

    let size = match size {
        None | Some("") => 0,
        Some(text) => text.parse().unwrap_or_else(|_| {
            warn!(size = text, "unparsable access size, using 0");
            0
        }),
    };
    Some((address, size))
}
