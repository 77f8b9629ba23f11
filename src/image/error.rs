//! Error taxonomy for image construction and pixel writes.
//!
//! Per-pixel reads have no error path (coordinates clamp to the border), so
//! everything here surfaces either at construction time or from `put_pixel`.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ImageError {
    /// Width or height is zero.
    #[error("invalid image size {width}x{height}")]
    SizeInvalid { width: usize, height: usize },

    /// The pixel storage could not be reserved.
    #[error("failed to allocate {width}x{height} pixel storage")]
    AllocationFailed { width: usize, height: usize },

    /// The backing buffer does not match the declared dimensions.
    #[error("corrupt image buffer: expected {expected} pixels, found {found}")]
    Corrupt { expected: usize, found: usize },

    /// `put_pixel` was called with coordinates outside the image.
    #[error("put_pixel at ({x}, {y}) outside {width}x{height} image")]
    PutPixelOutOfRange {
        x: i32,
        y: i32,
        width: usize,
        height: usize,
    },
}
