//! Fathom: seeded distance transforms over binary toroidal grids.
//!
//! This is the top-level facade crate that re-exports the public API from
//! all Fathom sub-crates. For most users, adding `fathom` as a single
//! dependency is sufficient.
//!
//! A transform takes a binary grid (foreground cells distances propagate
//! through, background cells they never enter), a foreground origin cell,
//! and a metric, and returns the distance from the origin to every cell.
//! Both grid axes wrap, so distances route across the seams.
//!
//! # Quick start
//!
//! ```rust
//! use fathom::prelude::*;
//!
//! // A 4x4 torus, foreground everywhere except one hole.
//! let grid = BitGrid::from_fn(&[4, 4], |c| c != &[1, 1][..]).unwrap();
//!
//! let field = distance_transform(&grid, &[0, 0], Metric::Cityblock).unwrap();
//! assert_eq!(field.get(&[0, 0]), Some(0.0));
//! assert_eq!(field.get(&[2, 2]), Some(4.0));
//! // Background cells are never reached.
//! assert_eq!(field.get(&[1, 1]), Some(f64::INFINITY));
//! // The wrap makes the far edge adjacent to the origin.
//! assert_eq!(field.get(&[0, 3]), Some(1.0));
//! ```
//!
//! 3D grids work the same way; build them directly or stack a directory
//! of grayscale slices with [`import::stack_slices`].
//!
//! # Modules
//!
//! Each module corresponds to a sub-crate. Use them for types not in the
//! prelude:
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`types`] | `fathom-core` | grids, distance fields, metrics, connectivity |
//! | [`space`] | `fathom-space` | toroidal lattice backends and the `Lattice` trait |
//! | [`transform`] | `fathom-transform` | the wavefront engine and bounding-box crop |
//! | [`import`] | `fathom-import` | image-stack import for 3D foreground masks |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Core types (`fathom-core`).
///
/// Contains [`types::BitGrid`], [`types::DistanceField`],
/// [`types::Metric`], [`types::Connectivity`], and the shared error
/// types.
pub use fathom_core as types;

/// Toroidal lattice backends (`fathom-space`).
///
/// Provides the [`space::Lattice`] trait and the concrete backends
/// [`space::Torus2D`] and [`space::Torus3D`].
pub use fathom_space as space;

/// The wavefront engine (`fathom-transform`).
///
/// [`transform::distance_transform`] runs a transform;
/// [`transform::crop_to_positions`] shrinks a grid to the bounding box
/// of a position set first.
pub use fathom_transform as transform;

/// Image-stack import (`fathom-import`).
///
/// Decode a directory of numbered grayscale slices into a 3D
/// [`types::BitGrid`] with [`import::stack_slices`].
pub use fathom_import as import;

/// Common imports for typical Fathom usage.
///
/// ```rust
/// use fathom::prelude::*;
/// ```
pub mod prelude {
    // Grids and fields
    pub use fathom_core::{BitGrid, Coord, DistanceField};

    // Metrics and topology tags
    pub use fathom_core::{Connectivity, Metric};

    // Errors
    pub use fathom_core::{GridError, TransformError};

    // Lattices
    pub use fathom_space::{Lattice, Torus2D, Torus3D};

    // Transform entry points
    pub use fathom_transform::{
        crop_to_positions, distance_transform, distance_transform_named, Cropped,
    };

    // Import
    pub use fathom_import::{stack_slices, DirectorySource, ImportError, SliceSource};
}
