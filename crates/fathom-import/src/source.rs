//! Slice sources.
//!
//! A [`SliceSource`] hands out grayscale slices by index. The stacker in
//! [`crate::stack`] is written against the trait, so tests and callers
//! with in-memory data plug in without touching the filesystem.

use std::path::{Path, PathBuf};

use crate::error::ImportError;

/// One decoded slice: row-major 8-bit luma pixels.
///
/// `pixels` holds `height * width` values, rows concatenated top to
/// bottom.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GraySlice {
    /// Pixel columns per row.
    pub width: u32,
    /// Pixel rows.
    pub height: u32,
    /// Luma values, one byte per pixel.
    pub pixels: Vec<u8>,
}

/// A stack of grayscale slices, indexed bottom to top.
pub trait SliceSource {
    /// Number of slices in the stack.
    fn len(&self) -> usize;

    /// Whether the stack holds no slices.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Decode slice `index` (0-based).
    fn read_slice(&self, index: usize) -> Result<GraySlice, ImportError>;
}

/// Reads numbered image files from a directory.
///
/// Slice `i` lives at `dir/i.ext`, so a 120-slice PNG stack is
/// `dir/0.png` through `dir/119.png`. Files are decoded with the `image`
/// crate and converted to 8-bit luma; any format the crate recognises
/// works.
#[derive(Clone, Debug)]
pub struct DirectorySource {
    dir: PathBuf,
    count: usize,
    extension: String,
}

impl DirectorySource {
    /// A source over `count` files named `0.ext` .. `count - 1.ext`
    /// under `dir`. `extension` is given without the leading dot.
    pub fn new(dir: impl Into<PathBuf>, count: usize, extension: impl Into<String>) -> Self {
        Self {
            dir: dir.into(),
            count,
            extension: extension.into(),
        }
    }

    /// The directory the slices are read from.
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn slice_path(&self, index: usize) -> PathBuf {
        self.dir.join(format!("{index}.{}", self.extension))
    }
}

impl SliceSource for DirectorySource {
    fn len(&self) -> usize {
        self.count
    }

    fn read_slice(&self, index: usize) -> Result<GraySlice, ImportError> {
        let path = self.slice_path(index);
        let decoded = image::open(&path).map_err(|e| match e {
            image::ImageError::IoError(source) => ImportError::Io { path, source },
            other => ImportError::Decode {
                path,
                source: other,
            },
        })?;
        let luma = decoded.to_luma8();
        Ok(GraySlice {
            width: luma.width(),
            height: luma.height(),
            pixels: luma.into_raw(),
        })
    }
}

// ── Tests ──────────────────────────────────────────────────────────────
