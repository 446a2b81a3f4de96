//! Error types for slice reading and stacking.

use std::fmt;
use std::io;
use std::path::PathBuf;

use fathom_core::GridError;

/// Errors raised while reading image slices or stacking them into a grid.
#[derive(Debug)]
pub enum ImportError {
    /// A slice file could not be read.
    Io {
        /// Path of the unreadable file.
        path: PathBuf,
        /// Underlying I/O error.
        source: io::Error,
    },
    /// A slice file was read but is not a decodable image.
    Decode {
        /// Path of the undecodable file.
        path: PathBuf,
        /// Underlying decoder error.
        source: image::ImageError,
    },
    /// A slice disagrees with the first slice's pixel dimensions.
    SliceShapeMismatch {
        /// Index of the offending slice.
        index: usize,
        /// Width and height of slice 0.
        expected: (u32, u32),
        /// Width and height of the offending slice.
        found: (u32, u32),
    },
    /// The source holds no slices.
    EmptyStack,
    /// The stacked cells do not form a valid grid.
    Grid(GridError),
}

impl fmt::Display for ImportError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io { path, source } => {
                write!(f, "failed to read {}: {source}", path.display())
            }
            Self::Decode { path, source } => {
                write!(f, "failed to decode {}: {source}", path.display())
            }
            Self::SliceShapeMismatch {
                index,
                expected: (ew, eh),
                found: (fw, fh),
            } => {
                write!(f, "slice {index} is {fw}x{fh} pixels, expected {ew}x{eh}")
            }
            Self::EmptyStack => write!(f, "image stack holds no slices"),
            Self::Grid(e) => write!(f, "stacked slices do not form a grid: {e}"),
        }
    }
}

impl std::error::Error for ImportError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
            Self::Decode { source, .. } => Some(source),
            Self::Grid(e) => Some(e),
            _ => None,
        }
    }
}

impl From<GridError> for ImportError {
    fn from(e: GridError) -> Self {
        Self::Grid(e)
    }
}

// ── Tests ──────────────────────────────────────────────────────────────
