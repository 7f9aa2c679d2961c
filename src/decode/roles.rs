// src/decode/roles.rs

use serde::{Deserialize, Serialize};
use tracing::debug;

/// Which column index holds each role.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColumnRoles {
    pub x: usize,
    pub y: usize,
    #[serde(rename = "char")]
    pub ch: usize,
}

impl Default for ColumnRoles {
    /// `x | char | y`, the layout of the published source tables.
    fn default() -> Self {
        Self { x: 0, ch: 1, y: 2 }
    }
}

/// The only header width that is inspected for labels.
const HEADER_WIDTH: usize = 3;

/// Work out column roles from the header row.
///
/// Only a header of exactly three cells is inspected. Each role takes the
/// first cell whose label matches it; unmatched roles, and every role for
/// any other header width, keep the `fallback` index.
pub fn resolve_roles(header: &[String], fallback: ColumnRoles) -> ColumnRoles {
    if header.len() != HEADER_WIDTH {
        debug!(cells = header.len(), "header not 3 cells wide, using fallback roles");
        return fallback;
    }

    let labels: Vec<String> = header.iter().map(|c| c.trim().to_lowercase()).collect();
    let find = |pred: fn(&str) -> bool| labels.iter().position(|l| pred(l));

    let roles = ColumnRoles {
        x: find(is_x_label).unwrap_or(fallback.x),
        y: find(is_y_label).unwrap_or(fallback.y),
        ch: find(is_char_label).unwrap_or(fallback.ch),
    };
    debug!(?labels, ?roles, "resolved column roles");
    roles
}

fn is_x_label(l: &str) -> bool {
    l == "x" || l.contains("x-") || l.contains("x ")
}

fn is_y_label(l: &str) -> bool {
    l == "y" || l.contains("y-") || l.contains("y ")
}

fn is_char_label(l: &str) -> bool {
    ["char", "unicode", "symbol"].iter().any(|k| l.contains(k))
}
