//! Stacking slices into a binary 3D grid.

use fathom_core::BitGrid;

use crate::error::ImportError;
use crate::source::{GraySlice, SliceSource};

/// Stack every slice of `source` into a 3D grid with extents
/// `[slice count, height, width]`.
///
/// The threshold is inverted on purpose, following the tomography
/// convention this importer serves: lit pixels (luma > 0) are material
/// and become background, and only fully dark pixels (luma 0) become
/// foreground cells the transform can propagate through.
///
/// Slice 0 fixes the pixel dimensions; any later slice that disagrees is
/// a [`SliceShapeMismatch`](ImportError::SliceShapeMismatch).
pub fn stack_slices(source: &dyn SliceSource) -> Result<BitGrid, ImportError> {
    if source.is_empty() {
        return Err(ImportError::EmptyStack);
    }

    let first = source.read_slice(0)?;
    let (width, height) = (first.width, first.height);
    let mut cells = Vec::with_capacity(source.len() * first.pixels.len());
    push_cells(&mut cells, &first);

    for index in 1..source.len() {
        let slice = source.read_slice(index)?;
        if slice.width != width || slice.height != height {
            return Err(ImportError::SliceShapeMismatch {
                index,
                expected: (width, height),
                found: (slice.width, slice.height),
            });
        }
        push_cells(&mut cells, &slice);
    }

    let grid = BitGrid::new(&[source.len() as u32, height, width], cells)?;
    Ok(grid)
}

fn push_cells(cells: &mut Vec<bool>, slice: &GraySlice) {
    debug_assert_eq!(
        slice.pixels.len(),
        slice.width as usize * slice.height as usize,
        "slice pixel buffer does not match its dimensions"
    );
    cells.extend(slice.pixels.iter().map(|&luma| luma == 0));
}

// ── Tests ──────────────────────────────────────────────────────────────
