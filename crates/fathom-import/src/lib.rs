//! Image-stack import for the Fathom distance transform.
//!
//! Volumetric foreground masks usually arrive as a directory of numbered
//! grayscale slices. This crate decodes such a stack and binarizes it
//! into the 3D [`BitGrid`](fathom_core::BitGrid) the transform consumes.
//!
//! The binarization is inverted relative to the usual image convention:
//! lit pixels mark material and become background, while fully dark
//! pixels (luma 0) become the foreground cells distances propagate
//! through.
//!
//! ```no_run
//! use fathom_import::{stack_slices, DirectorySource};
//!
//! // scans/heart/0.png .. scans/heart/119.png
//! let source = DirectorySource::new("scans/heart", 120, "png");
//! let grid = stack_slices(&source)?;
//! assert_eq!(grid.ndim(), 3);
//! # Ok::<(), fathom_import::ImportError>(())
//! ```
//!
//! Sources other than a directory of files implement [`SliceSource`].

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod error;
pub mod source;
pub mod stack;

pub use error::ImportError;
pub use source::{DirectorySource, GraySlice, SliceSource};
pub use stack::stack_slices;
