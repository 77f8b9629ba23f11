//! PNG helpers for the command-line front end.
//!
//! - `load_rgba_image`: read any PNG into an owned RGBA float buffer,
//!   remembering bit depth and alpha presence so the output can round-trip.
//! - `save_rgba_image`: write a float buffer back at the recorded depth,
//!   dropping alpha when requested.

use super::rgba::Image;
use image::{DynamicImage, ImageBuffer, Rgb, Rgba};
use std::path::Path;

/// Source sample depth of a loaded PNG.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BitDepth {
    Eight,
    Sixteen,
}

/// A decoded PNG plus the metadata needed to write it back unchanged.
pub struct LoadedImage {
    pub image: Image,
    pub bit_depth: BitDepth,
    pub has_alpha: bool,
}

/// Load a PNG (or any format the `image` crate decodes) as RGBA floats.
///
/// Grayscale and palette images are expanded to RGB; missing alpha reads as
/// opaque. Channel values are normalized to [0, 1].
pub fn load_rgba_image(path: &Path) -> Result<LoadedImage, String> {
    let dynimg =
        image::open(path).map_err(|e| format!("Failed to open {}: {e}", path.display()))?;

    let color = dynimg.color();
    let has_alpha = color.has_alpha();
    let bit_depth = if color.bytes_per_pixel() / color.channel_count() >= 2 {
        BitDepth::Sixteen
    } else {
        BitDepth::Eight
    };

    let rgba = dynimg.to_rgba32f();
    let (w, h) = (rgba.width() as usize, rgba.height() as usize);
    let mut pixels = Vec::with_capacity(w * h);
    for p in rgba.pixels() {
        pixels.push([p.0[0], p.0[1], p.0[2], p.0[3]]);
    }
    let image = Image::from_raw(w, h, pixels)
        .map_err(|e| format!("Failed to decode {}: {e}", path.display()))?;

    Ok(LoadedImage {
        image,
        bit_depth,
        has_alpha,
    })
}

/// Save a float buffer at the given depth, clamping channels to [0, 1].
pub fn save_rgba_image(
    image: &Image,
    path: &Path,
    bit_depth: BitDepth,
    include_alpha: bool,
) -> Result<(), String> {
    let w = image.width() as u32;
    let h = image.height() as u32;
    let io_err = |e: image::ImageError| format!("Failed to save {}: {e}", path.display());

    match (bit_depth, include_alpha) {
        (BitDepth::Eight, true) => {
            let buf: ImageBuffer<Rgba<u8>, Vec<u8>> = ImageBuffer::from_fn(w, h, |x, y| {
                let p = image.row(y as usize)[x as usize];
                Rgba([quant8(p[0]), quant8(p[1]), quant8(p[2]), quant8(p[3])])
            });
            buf.save(path).map_err(io_err)
        }
        (BitDepth::Eight, false) => {
            let buf: ImageBuffer<Rgb<u8>, Vec<u8>> = ImageBuffer::from_fn(w, h, |x, y| {
                let p = image.row(y as usize)[x as usize];
                Rgb([quant8(p[0]), quant8(p[1]), quant8(p[2])])
            });
            buf.save(path).map_err(io_err)
        }
        (BitDepth::Sixteen, true) => {
            let buf: ImageBuffer<Rgba<u16>, Vec<u16>> = ImageBuffer::from_fn(w, h, |x, y| {
                let p = image.row(y as usize)[x as usize];
                Rgba([quant16(p[0]), quant16(p[1]), quant16(p[2]), quant16(p[3])])
            });
            buf.save(path).map_err(io_err)
        }
        (BitDepth::Sixteen, false) => {
            let buf: ImageBuffer<Rgb<u16>, Vec<u16>> = ImageBuffer::from_fn(w, h, |x, y| {
                let p = image.row(y as usize)[x as usize];
                Rgb([quant16(p[0]), quant16(p[1]), quant16(p[2])])
            });
            buf.save(path).map_err(io_err)
        }
    }
}

#[inline]
fn quant8(v: f32) -> u8 {
    (v.clamp(0.0, 1.0) * 255.0).round() as u8
}

#[inline]
fn quant16(v: f32) -> u16 {
    (v.clamp(0.0, 1.0) * 65535.0).round() as u16
}
