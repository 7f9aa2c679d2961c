// src/error.rs

use thiserror::Error;

/// Every way a decode can fail. All variants are terminal for the decode
/// that produced them; nothing is retried or partially rendered.
#[derive(Debug, Error)]
pub enum Error {
    /// The source reference cannot be used (unparseable URL, wrong scheme).
    #[error("invalid source `{input}`: {reason}")]
    InvalidInput { input: String, reason: String },

    /// The server answered with a non-success status.
    #[error("fetch failed for {url}: HTTP {status}")]
    SourceUnavailable {
        url: String,
        status: reqwest::StatusCode,
    },

    /// Transport-level failure (connect, timeout, body read).
    #[error(transparent)]
    Http(#[from] reqwest::Error),

    #[error("document contains no <table> element")]
    NoTableFound,

    #[error("table has no data rows")]
    NoDataRows,

    /// A data row carried more cells than the three roles can account for.
    #[error("row {row} has {cells} cells, expected at most 3")]
    MalformedRow { row: usize, cells: usize },

    #[error("parsed 0 records (check table format)")]
    NoValidRecords,

    /// Coordinates would need a grid larger than the configured cell limit.
    #[error("grid up to ({max_x}, {max_y}) exceeds the {limit}-cell limit")]
    GridTooLarge {
        max_x: usize,
        max_y: usize,
        limit: usize,
    },

    #[error("invalid configuration: {0}")]
    Config(String),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
