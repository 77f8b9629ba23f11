//! Whole-image driver for the three passes.
//!
//! Each pass writes one full-resolution image and reads the previous
//! pass's output; within a pass every output pixel depends only on a
//! bounded neighborhood of the inputs, so rows are processed in parallel
//! and the pass boundary is the only synchronization point. Four images
//! are live during a run: input, edges, weights, output.
//!
//! Running the filter on its own output converges: with the default
//! preset a second run changes no channel by more than 0.5, and typically
//! far less.

use log::debug;
use std::time::Instant;

use crate::image::{Image, ImageError, ImageReader};

use super::options::{EdgeDetectionMode, Preset, SmaaOptions};
use super::shader::PixelShader;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Wall-clock spent in each pass, in milliseconds.
#[derive(Clone, Copy, Debug, Default)]
pub struct PassTimings {
    pub edges_ms: f64,
    pub weights_ms: f64,
    pub blend_ms: f64,
}

/// Output of a run plus the intermediate images.
pub struct SmaaRun {
    pub output: Image,
    pub edges: Image,
    pub weights: Image,
    pub timings: PassTimings,
}

/// The full three-pass filter.
pub struct SmaaFilter {
    shader: PixelShader,
    mode: EdgeDetectionMode,
}

impl SmaaFilter {
    pub fn new(mode: EdgeDetectionMode, options: SmaaOptions) -> Self {
        Self {
            shader: PixelShader::new(options),
            mode,
        }
    }

    pub fn from_preset(mode: EdgeDetectionMode, preset: Preset) -> Self {
        Self::new(mode, SmaaOptions::from_preset(preset))
    }

    pub fn mode(&self) -> EdgeDetectionMode {
        self.mode
    }

    pub fn shader(&self) -> &PixelShader {
        &self.shader
    }

    pub fn shader_mut(&mut self) -> &mut PixelShader {
        &mut self.shader
    }

    /// Antialias `color`. In depth mode the first channel of `color`
    /// doubles as the depth signal.
    pub fn process(&self, color: &Image) -> Result<Image, ImageError> {
        Ok(self.run(color, None, None)?.output)
    }

    /// Antialias `color` with predicated thresholding against a companion
    /// buffer (applies to luma/color modes when predication is enabled).
    pub fn process_with_predication(
        &self,
        color: &Image,
        predication: &Image,
    ) -> Result<Image, ImageError> {
        Ok(self.run(color, Some(predication), None)?.output)
    }

    /// Antialias `color` detecting edges in a separate depth image.
    pub fn process_with_depth(&self, color: &Image, depth: &Image) -> Result<Image, ImageError> {
        Ok(self.run(color, Some(depth), None)?.output)
    }

    /// Antialias `color`, packing the blended velocity magnitude into the
    /// output alpha for a later temporal-resolve stage.
    pub fn process_with_velocity(
        &self,
        color: &Image,
        velocity: &Image,
    ) -> Result<Image, ImageError> {
        Ok(self.run(color, None, Some(velocity))?.output)
    }

    /// Like the `process` variants, but keeps the intermediate images and
    /// per-pass timings. `companion` is the predication image in luma/color
    /// modes and the depth image in depth mode; `velocity` feeds the alpha
    /// packing of the blending pass.
    pub fn process_detailed(
        &self,
        color: &Image,
        companion: Option<&Image>,
        velocity: Option<&Image>,
    ) -> Result<SmaaRun, ImageError> {
        self.run(color, companion, velocity)
    }

    fn run(
        &self,
        color: &Image,
        companion: Option<&Image>,
        velocity: Option<&Image>,
    ) -> Result<SmaaRun, ImageError> {
        let w = color.width();
        let h = color.height();
        let shader = &self.shader;
        let mode = self.mode;
        let mut timings = PassTimings::default();

        // 1. Edge detection.
        let start = Instant::now();
        let mut edges = Image::new(w, h)?;
        fill_rows(&mut edges, |y, row| {
            let predication = companion.map(|c| c as &dyn ImageReader);
            for (x, out) in row.iter_mut().enumerate() {
                let (xi, yi) = (x as i32, y as i32);
                *out = match mode {
                    EdgeDetectionMode::Luma => {
                        shader.luma_edge_detection(xi, yi, color, predication)
                    }
                    EdgeDetectionMode::Color => {
                        shader.color_edge_detection(xi, yi, color, predication)
                    }
                    EdgeDetectionMode::Depth => {
                        shader.depth_edge_detection(xi, yi, companion.unwrap_or(color))
                    }
                };
            }
        });
        timings.edges_ms = start.elapsed().as_secs_f64() * 1000.0;
        debug!(
            "{} edge detection: {}x{} in {:.3} ms",
            mode.name(),
            w,
            h,
            timings.edges_ms
        );

        // 2. Blending weights.
        let start = Instant::now();
        let mut weights = Image::new(w, h)?;
        {
            let edges = &edges;
            fill_rows(&mut weights, |y, row| {
                for (x, out) in row.iter_mut().enumerate() {
                    *out = shader.blending_weight_calculation(x as i32, y as i32, edges, None);
                }
            });
        }
        timings.weights_ms = start.elapsed().as_secs_f64() * 1000.0;
        debug!("blending weights: {:.3} ms", timings.weights_ms);

        // 3. Neighborhood blending.
        let start = Instant::now();
        let mut output = Image::new(w, h)?;
        {
            let weights = &weights;
            fill_rows(&mut output, |y, row| {
                let velocity = velocity.map(|v| v as &dyn ImageReader);
                for (x, out) in row.iter_mut().enumerate() {
                    *out =
                        shader.neighborhood_blending(x as i32, y as i32, color, weights, velocity);
                }
            });
        }
        timings.blend_ms = start.elapsed().as_secs_f64() * 1000.0;
        debug!("neighborhood blending: {:.3} ms", timings.blend_ms);

        Ok(SmaaRun {
            output,
            edges,
            weights,
            timings,
        })
    }
}

/// Run `f` over every output row; rows are independent within a pass.
fn fill_rows<F>(image: &mut Image, f: F)
where
    F: Fn(usize, &mut [[f32; 4]]) + Send + Sync,
{
    let w = image.width();

    #[cfg(feature = "parallel")]
    image
        .pixels_mut()
        .par_chunks_mut(w)
        .enumerate()
        .for_each(|(y, row)| f(y, row));

    #[cfg(not(feature = "parallel"))]
    image
        .pixels_mut()
        .chunks_mut(w)
        .enumerate()
        .for_each(|(y, row)| f(y, row));
}
