//! The three-pass SMAA runtime.
//!
//! Overview
//! - Pass 1 thresholds luma/color/depth deltas into a west/north edge mask,
//!   with local contrast adaptation and optional predication.
//! - Pass 2 classifies each edge run by walking to its two ends (diagonal
//!   orientations first, then horizontal/vertical), encodes the crossing
//!   edges found there, and fetches blending weights from the area tables.
//!   Corner detection then attenuates the weights near 90-degree corners.
//! - Pass 3 mixes every pixel with one axis-aligned neighbor using the
//!   weights, via one-dimensional bilinear sampling.
//!
//! Modules
//! - `options` – presets and the full parameter set.
//! - `shader` – [`PixelShader`], the per-pixel form of all three passes.
//! - `pipeline` – [`SmaaFilter`], the whole-image driver with row-parallel
//!   passes and a barrier between them.
//! - `search`, `diag`, `corner` – the line-end searches and corner fix
//!   backing pass 2.
//!
//! Each pass output depends only on a bounded neighborhood of its inputs,
//! so rows can be processed in any order within a pass.

mod corner;
mod diag;
mod search;

pub mod options;
pub mod pipeline;
pub mod shader;

pub use self::options::{EdgeDetectionMode, Preset, SmaaOptions};
pub use self::pipeline::{PassTimings, SmaaFilter, SmaaRun};
pub use self::shader::PixelShader;
