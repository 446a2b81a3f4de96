//! Compact builders for binary test grids.
//!
//! Pattern strings use `#` for foreground and `.` for background, one
//! string per row, so a test can show its grid inline:
//!
//! ```
//! use fathom_test_utils::grid_from_rows;
//!
//! let grid = grid_from_rows(&[
//!     "###",
//!     "#.#",
//!     "###",
//! ]);
//! assert_eq!(grid.extents(), &[3, 3]);
//! assert_eq!(grid.get(&[1, 1]), Some(false));
//! ```

use fathom_core::BitGrid;

fn parse_cell(row: usize, col: usize, ch: char) -> bool {
    match ch {
        '#' => true,
        '.' => false,
        other => panic!("unexpected cell char {other:?} at row {row}, col {col}"),
    }
}

/// Build a 2D grid from pattern rows.
///
/// All rows must be the same length. Panics on ragged input or characters
/// other than `#` and `.`.
pub fn grid_from_rows(rows: &[&str]) -> BitGrid {
    assert!(!rows.is_empty(), "grid needs at least one row");
    let cols = rows[0].len();
    let mut cells = Vec::with_capacity(rows.len() * cols);
    for (r, row) in rows.iter().enumerate() {
        assert_eq!(row.len(), cols, "row {r} has a different length");
        for (c, ch) in row.chars().enumerate() {
            cells.push(parse_cell(r, c, ch));
        }
    }
    BitGrid::new(&[rows.len() as u32, cols as u32], cells).expect("pattern builds a valid grid")
}

/// Build a 3D grid from pattern layers, each a slice of rows.
///
/// All layers must share the same row count and row length.
pub fn grid_from_layers(layers: &[&[&str]]) -> BitGrid {
    assert!(!layers.is_empty(), "grid needs at least one layer");
    let rows = layers[0].len();
    assert!(rows > 0, "layers need at least one row");
    let cols = layers[0][0].len();
    let mut cells = Vec::with_capacity(layers.len() * rows * cols);
    for (l, layer) in layers.iter().enumerate() {
        assert_eq!(layer.len(), rows, "layer {l} has a different row count");
        for (r, row) in layer.iter().enumerate() {
            assert_eq!(row.len(), cols, "layer {l} row {r} has a different length");
            for (c, ch) in row.chars().enumerate() {
                cells.push(parse_cell(r, c, ch));
            }
        }
    }
    BitGrid::new(
        &[layers.len() as u32, rows as u32, cols as u32],
        cells,
    )
    .expect("pattern builds a valid grid")
}

/// Build an all-foreground grid with the given extents.
pub fn full_grid(extents: &[u32]) -> BitGrid {
    BitGrid::filled(extents, true).expect("extents build a valid grid")
}
