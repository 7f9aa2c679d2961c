// src/decode/mod.rs
//
// Table rows in, text lines out. Nothing in here does I/O.

pub mod extract;
pub mod grid;
pub mod render;
pub mod roles;

pub use extract::{extract_records, parse_coord, Record};
pub use grid::{Grid, DEFAULT_MAX_CELLS};
pub use render::render_lines;
pub use roles::{resolve_roles, ColumnRoles};

use crate::config::DecodeOptions;
use crate::error::{Error, Result};
use crate::table::TableSource;
use tracing::{debug, instrument};

/// Decode a table into its grid.
///
/// Row 0 is the header candidate, every later row is data.
#[instrument(level = "debug", skip_all)]
pub fn decode_grid<S: TableSource + ?Sized>(source: &S, opts: &DecodeOptions) -> Result<Grid> {
    let rows = source.rows();
    let Some((header, data)) = rows.split_first() else {
        return Err(Error::NoDataRows);
    };
    if data.is_empty() {
        return Err(Error::NoDataRows);
    }

    let roles = resolve_roles(header, opts.fallback_roles);
    let records = extract_records(data, roles, opts.malformed_rows, 1)?;
    if records.is_empty() {
        return Err(Error::NoValidRecords);
    }

    let grid = Grid::build(&records, opts.origin, opts.max_cells)?;
    debug!(
        width = grid.width(),
        height = grid.height(),
        records = records.len(),
        "built grid"
    );
    Ok(grid)
}

/// Decode a table into rendered lines, top row first.
pub fn decode<S: TableSource + ?Sized>(source: &S, opts: &DecodeOptions) -> Result<Vec<String>> {
    decode_grid(source, opts).map(|g| render_lines(&g))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{CoordinateOrigin, MalformedRowPolicy};
    use crate::table::RawTable;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_small_message() {
        let table = RawTable::from_cells([
            ["x-coordinate", "Character", "y-coordinate"],
            ["0", "A", "0"],
            ["1", "B", "0"],
            ["0", "C", "1"],
        ]);
        let lines = decode(&table, &DecodeOptions::default()).unwrap();
        assert_eq!(lines, vec!["AB", "C "]);
    }

    #[test]
    fn test_shuffled_columns() {
        let table = RawTable::from_cells([
            ["Char", "X", "Y"],
            ["A", "0", "0"],
            ["B", "1", "0"],
            ["C", "0", "1"],
        ]);
        let lines = decode(&table, &DecodeOptions::default()).unwrap();
        assert_eq!(lines, vec!["AB", "C "]);
    }

    #[test]
    fn test_unlabelled_header_uses_fallback() {
        let table = RawTable::from_cells([
            ["foo", "bar", "baz"],
            ["2", "#", "1"],
        ]);
        let lines = decode(&table, &DecodeOptions::default()).unwrap();
        assert_eq!(lines, vec!["   ", "  #"]);
    }

    #[test]
    fn test_output_shape_and_overwrite() {
        let table = RawTable::from_cells([
            vec!["x", "char", "y"],
            vec!["5", "a", "3"],
            vec!["1", "b", "1"],
            vec!["1", "c", "1"],
            vec!["oops", "d", "0"],
        ]);
        let lines = decode(&table, &DecodeOptions::default()).unwrap();
        assert_eq!(lines.len(), 4);
        assert!(lines.iter().all(|l| l.chars().count() == 6));
        assert_eq!(lines[1], " c    ");
        assert_eq!(lines[3], "     a");
        assert_eq!(lines[0], "      ");
    }

    #[test]
    fn test_only_row_is_malformed() {
        let table = RawTable::from_cells([
            vec!["x", "char", "y"],
            vec!["0", "A", "0", "extra"],
        ]);
        let err = decode(&table, &DecodeOptions::default()).unwrap_err();
        assert!(matches!(err, Error::MalformedRow { row: 1, cells: 4 }));
    }

    #[test]
    fn test_malformed_row_skipped_when_configured() {
        let table = RawTable::from_cells([
            vec!["x", "char", "y"],
            vec!["0", "A", "0", "extra"],
            vec!["1", "B", "0"],
        ]);
        let opts = DecodeOptions {
            malformed_rows: MalformedRowPolicy::Skip,
            ..DecodeOptions::default()
        };
        assert_eq!(decode(&table, &opts).unwrap(), vec![" B"]);

        // Skipping every data row still leaves nothing to draw.
        let only_bad = RawTable::from_cells([
            vec!["x", "char", "y"],
            vec!["0", "A", "0", "extra"],
        ]);
        assert!(matches!(
            decode(&only_bad, &opts).unwrap_err(),
            Error::NoValidRecords
        ));
    }

    #[test]
    fn test_non_numeric_coordinates() {
        let table = RawTable::from_cells([["x", "char", "y"], ["left", "A", "top"]]);
        let err = decode(&table, &DecodeOptions::default()).unwrap_err();
        assert!(matches!(err, Error::NoValidRecords));
    }

    #[test]
    fn test_no_data_rows() {
        let empty = RawTable::default();
        assert!(matches!(
            decode(&empty, &DecodeOptions::default()).unwrap_err(),
            Error::NoDataRows
        ));

        let header_only = RawTable::from_cells([["x", "char", "y"]]);
        assert!(matches!(
            decode(&header_only, &DecodeOptions::default()).unwrap_err(),
            Error::NoDataRows
        ));
    }

    #[test]
    fn test_bottom_left_origin() {
        let table = RawTable::from_cells([
            ["x", "char", "y"],
            ["0", "A", "0"],
            ["1", "B", "0"],
            ["0", "C", "1"],
        ]);
        let opts = DecodeOptions {
            origin: CoordinateOrigin::BottomLeft,
            ..DecodeOptions::default()
        };
        assert_eq!(decode(&table, &opts).unwrap(), vec!["C ", "AB"]);
    }

    #[test]
    fn test_plain_rows_are_a_source() {
        let rows: Vec<Vec<String>> = vec![
            vec!["Y".into(), "X".into(), "Symbol".into()],
            vec!["0".into(), "2".into(), "z".into()],
        ];
        assert_eq!(decode(&rows, &DecodeOptions::default()).unwrap(), vec!["  z"]);
        assert_eq!(
            decode(rows.as_slice(), &DecodeOptions::default()).unwrap(),
            vec!["  z"]
        );
    }

    #[test]
    fn test_oversized_coordinates_are_an_error() {
        let table = RawTable::from_cells([
            ["x", "char", "y"],
            ["18446744073709551615", "A", "0"],
        ]);
        assert!(matches!(
            decode(&table, &DecodeOptions::default()).unwrap_err(),
            Error::GridTooLarge { .. }
        ));

        let table = RawTable::from_cells([
            ["x", "char", "y"],
            ["0", "B", "0"],
            ["4000000000", "A", "4000000000"],
        ]);
        assert!(matches!(
            decode(&table, &DecodeOptions::default()).unwrap_err(),
            Error::GridTooLarge { .. }
        ));
    }

    #[test]
    fn test_cell_limit_is_configurable() {
        let table = RawTable::from_cells([["x", "char", "y"], ["9", "A", "0"]]);
        let opts = DecodeOptions {
            max_cells: 5,
            ..DecodeOptions::default()
        };
        assert!(matches!(
            decode(&table, &opts).unwrap_err(),
            Error::GridTooLarge { max_x: 9, max_y: 0, limit: 5 }
        ));
        assert_eq!(
            decode(&table, &DecodeOptions::default()).unwrap(),
            vec!["         A"]
        );
    }
}
