// src/decode/extract.rs

use super::ColumnRoles;
use crate::config::MalformedRowPolicy;
use crate::error::{Error, Result};
use crate::table::RawRow;
use tracing::{debug, warn};

/// A validated (x, y, character) triple.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Record {
    pub x: usize,
    pub y: usize,
    pub ch: char,
}

/// Widest data row accepted.
const MAX_CELLS: usize = 3;

/// Turn data rows (header already removed) into records.
///
/// `first_row` is the source row number of `rows[0]`, only used in errors
/// and logs. Rows with unusable coordinates are dropped; rows wider than
/// three cells either abort or are dropped depending on `policy`.
pub fn extract_records(
    rows: &[RawRow],
    roles: ColumnRoles,
    policy: MalformedRowPolicy,
    first_row: usize,
) -> Result<Vec<Record>> {
    let mut records = Vec::with_capacity(rows.len());

    for (i, row) in rows.iter().enumerate() {
        let row_no = first_row + i;

        if row.len() > MAX_CELLS {
            match policy {
                MalformedRowPolicy::Abort => {
                    return Err(Error::MalformedRow {
                        row: row_no,
                        cells: row.len(),
                    })
                }
                MalformedRowPolicy::Skip => {
                    warn!(row = row_no, cells = row.len(), "skipping malformed row");
                    continue;
                }
            }
        }

        let cell = |idx: usize| row.get(idx).map(|c| c.trim()).unwrap_or("");

        let (Some(x), Some(y)) = (parse_coord(cell(roles.x)), parse_coord(cell(roles.y))) else {
            debug!(row = row_no, x = cell(roles.x), y = cell(roles.y), "dropping row with bad coordinates");
            continue;
        };
        let ch = cell(roles.ch).chars().next().unwrap_or(' ');

        records.push(Record { x, y, ch });
    }

    debug!(records = records.len(), rows = rows.len(), "extracted records");
    Ok(records)
}

/// Parse a coordinate the lenient way: optional sign, then the leading run
/// of ASCII digits; anything after the digits is ignored. Negative and
/// overflowing values are rejected.
pub fn parse_coord(text: &str) -> Option<usize> {
    let text = text.trim_start();
    let (negative, rest) = match text.as_bytes().first() {
        Some(b'-') => (true, &text[1..]),
        Some(b'+') => (false, &text[1..]),
        _ => (false, text),
    };

    let digits = rest.bytes().take_while(u8::is_ascii_digit).count();
    if digits == 0 {
        return None;
    }
    let value: usize = rest[..digits].parse().ok()?;

    if negative && value != 0 {
        None
    } else {
        Some(value)
    }
}
