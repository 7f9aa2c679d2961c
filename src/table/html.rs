// src/table/html.rs

use super::{RawRow, RawTable};
use crate::error::{Error, Result};
use scraper::{ElementRef, Html, Selector};
use tracing::{debug, trace};

/// Parse `html` and return the rows of its first `<table>`.
///
/// Rows are the table's own `tr` elements in document order; rows belonging
/// to a table nested inside a cell are not pulled up into the outer table.
/// Each cell's text nodes are concatenated and trimmed.
pub fn first_table(html: &str) -> Result<RawTable> {
    let doc = Html::parse_document(html);
    let table_sel = Selector::parse("table").expect("table selector should parse");
    let row_sel = Selector::parse("tr").expect("row selector should parse");

    let table = doc.select(&table_sel).next().ok_or(Error::NoTableFound)?;

    let rows: Vec<RawRow> = table
        .select(&row_sel)
        .filter(|tr| owning_table(*tr).map(|t| t.id()) == Some(table.id()))
        .map(row_cells)
        .collect();

    debug!(rows = rows.len(), "extracted first table");
    Ok(RawTable::new(rows))
}

fn row_cells(tr: ElementRef<'_>) -> RawRow {
    let cells: RawRow = tr
        .children()
        .filter_map(ElementRef::wrap)
        .filter(|el| matches!(el.value().name(), "td" | "th"))
        .map(|cell| cell.text().collect::<String>().trim().to_string())
        .collect();
    trace!(?cells, "row");
    cells
}

/// Nearest `table` ancestor of an element.
fn owning_table(el: ElementRef<'_>) -> Option<ElementRef<'_>> {
    el.ancestors()
        .filter_map(ElementRef::wrap)
        .find(|a| a.value().name() == "table")
}
