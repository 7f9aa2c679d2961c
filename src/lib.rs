//! Decode messages hidden in published coordinate tables.
//!
//! A source document carries one table whose rows are `(x, character, y)`
//! triples in some column order. [`decode`] turns such rows into the block
//! of text they spell out; [`decode_html`] and [`decode_from_url`] add the
//! table lookup and the HTTP fetch in front of it.

pub mod config;
pub mod decode;
pub mod error;
pub mod fetch;
pub mod table;

pub use config::{CoordinateOrigin, DecodeOptions, FetchOptions, MalformedRowPolicy, Options};
pub use decode::{decode, decode_grid, ColumnRoles, Grid, Record};
pub use error::{Error, Result};
pub use table::{RawRow, RawTable, TableSource};

use reqwest::Client;
use tracing::{info, instrument};

/// Decode the first table of an HTML document already in memory.
pub fn decode_html(html: &str, opts: &DecodeOptions) -> Result<Vec<String>> {
    let table = table::html::first_table(html)?;
    decode(&table, opts)
}

/// Fetch `url`, locate its first table and decode it.
#[instrument(level = "info", skip(client, opts))]
pub async fn decode_from_url(client: &Client, url: &str, opts: &Options) -> Result<Vec<String>> {
    let url = fetch::parse_source_url(url)?;
    let html = fetch::fetch_document(client, &url, &opts.fetch).await?;
    let lines = decode_html(&html, &opts.decode)?;
    info!(lines = lines.len(), "decoded");
    Ok(lines)
}
