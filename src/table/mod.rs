// src/table/mod.rs

pub mod html;

/// One table row: cell texts in source order.
pub type RawRow = Vec<String>;

/// Anything that can hand the decoder an ordered list of rows.
pub trait TableSource {
    fn rows(&self) -> &[RawRow];
}

/// Rows of the first table found in a document.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawTable {
    pub rows: Vec<RawRow>,
}

impl RawTable {
    pub fn new(rows: Vec<RawRow>) -> Self {
        Self { rows }
    }

    /// Build a table from string literals; handy for tests and demos.
    pub fn from_cells<R, C>(rows: R) -> Self
    where
        R: IntoIterator<Item = C>,
        C: IntoIterator,
        C::Item: Into<String>,
    {
        Self {
            rows: rows
                .into_iter()
                .map(|r| r.into_iter().map(Into::into).collect())
                .collect(),
        }
    }
}

impl TableSource for RawTable {
    fn rows(&self) -> &[RawRow] {
        &self.rows
    }
}

impl TableSource for Vec<RawRow> {
    fn rows(&self) -> &[RawRow] {
        self
    }
}

impl TableSource for [RawRow] {
    fn rows(&self) -> &[RawRow] {
        self
    }
}

impl<T: TableSource + ?Sized> TableSource for &T {
    fn rows(&self) -> &[RawRow] {
        (**self).rows()
    }
}
