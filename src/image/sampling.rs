//! Bilinear samplers over [`ImageReader`] inputs.
//!
//! The neighborhood-blending pass mixes a pixel with one axis-aligned
//! neighbor by sampling at a fractional offset; the 1-D variants below do
//! exactly that along one axis. The full 2-D sampler exists for companion
//! buffers sampled at arbitrary positions.

use super::traits::ImageReader;
use crate::math::{bilinear, lerp};

/// Sample at fractional `(x, y)` with a four-tap bilinear filter.
pub fn sample_bilinear<I: ImageReader + ?Sized>(image: &I, x: f32, y: f32) -> [f32; 4] {
    let ix = x.floor();
    let iy = y.floor();
    let fx = x - ix;
    let fy = y - iy;
    let xi = ix as i32;
    let yi = iy as i32;

    let c00 = image.get_pixel(xi, yi);
    let c10 = image.get_pixel(xi + 1, yi);
    let c01 = image.get_pixel(xi, yi + 1);
    let c11 = image.get_pixel(xi + 1, yi + 1);

    let mut out = [0.0; 4];
    for c in 0..4 {
        out[c] = bilinear(c00[c], c10[c], c01[c], c11[c], fx, fy);
    }
    out
}

/// Sample at `(x + xoffset, y)` interpolating along x only.
pub fn sample_offset_horizontal<I: ImageReader + ?Sized>(
    image: &I,
    x: i32,
    y: i32,
    xoffset: f32,
) -> [f32; 4] {
    let ix = xoffset.floor();
    let fx = xoffset - ix;
    let x = x + ix as i32;

    let c0 = image.get_pixel(x, y);
    let c1 = image.get_pixel(x + 1, y);

    let mut out = [0.0; 4];
    for c in 0..4 {
        out[c] = lerp(c0[c], c1[c], fx);
    }
    out
}

/// Sample at `(x, y + yoffset)` interpolating along y only.
pub fn sample_offset_vertical<I: ImageReader + ?Sized>(
    image: &I,
    x: i32,
    y: i32,
    yoffset: f32,
) -> [f32; 4] {
    let iy = yoffset.floor();
    let fy = yoffset - iy;
    let y = y + iy as i32;

    let c0 = image.get_pixel(x, y);
    let c1 = image.get_pixel(x, y + 1);

    let mut out = [0.0; 4];
    for c in 0..4 {
        out[c] = lerp(c0[c], c1[c], fy);
    }
    out
}
