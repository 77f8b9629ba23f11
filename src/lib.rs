#![doc = include_str!("../README.md")]

// Public modules (stable-ish surface)
pub mod areatex;
pub mod filter;
pub mod image;

// Helper module – public, but considered an unstable internal.
pub mod math;

// --- High-level re-exports -------------------------------------------------

// Main entry points: whole-image filter + per-pixel shader.
pub use crate::filter::{
    EdgeDetectionMode, PassTimings, PixelShader, Preset, SmaaFilter, SmaaOptions, SmaaRun,
};

// Image buffers and the read capability consumed by the passes.
pub use crate::image::{Image, ImageError, ImageReader};

// Area lookup tables (shared by the runtime and the generator binary).
pub use crate::areatex::{AreaTables, AreaTexData};

// --- Prelude ---------------------------------------------------------------

/// Small prelude for quick experiments.
///
/// ```no_run
/// use smaa_filter::prelude::*;
///
/// # fn main() -> Result<(), smaa_filter::ImageError> {
/// let color = Image::new(64, 64)?;
/// let filter = SmaaFilter::new(EdgeDetectionMode::Luma, SmaaOptions::default());
/// let out = filter.process(&color)?;
/// assert_eq!(out.width(), 64);
/// # Ok(())
/// # }
/// ```
pub mod prelude {
    pub use crate::filter::{EdgeDetectionMode, Preset, SmaaFilter, SmaaOptions};
    pub use crate::image::{Image, ImageReader};
}
