//! Image module: RGBA float buffers, the read capability, and samplers.
//!
//! Components
//! - `traits`: [`ImageReader`] capability with border-clamped reads, plus row
//!   iterators over owned buffers.
//! - `rgba`: owned [`Image`] buffer of `[f32; 4]` pixels (row-major,
//!   stride == width) with checked construction and writes.
//! - `sampling`: bilinear samplers used by the blending passes.
//! - `io`: PNG helpers for the command-line front end.
//!
//! Design goals
//! - Keep hot loops simple and cache-friendly via row access.
//! - Reads never fail: coordinates outside the image clamp to the border.
//! - Writes are checked: `put_pixel` rejects out-of-range coordinates.

pub mod error;
pub mod io;
pub mod rgba;
pub mod sampling;
pub mod traits;

pub use self::error::ImageError;
pub use self::rgba::Image;
pub use self::sampling::{sample_bilinear, sample_offset_horizontal, sample_offset_vertical};
pub use self::traits::{ImageReader, Rows, RowsMut};
