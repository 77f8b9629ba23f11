//! Synthetic RGBA test images.

use smaa_filter::Image;

/// Every pixel set to `color`.
pub fn uniform(width: usize, height: usize, color: [f32; 4]) -> Image {
    let pixels = vec![color; width * height];
    Image::from_raw(width, height, pixels).expect("valid dimensions")
}

/// Rows above `split_y` are `low`, rows at and below it are `high`.
pub fn horizontal_step(
    width: usize,
    height: usize,
    split_y: usize,
    low: [f32; 4],
    high: [f32; 4],
) -> Image {
    let mut pixels = Vec::with_capacity(width * height);
    for y in 0..height {
        let color = if y < split_y { low } else { high };
        pixels.extend(std::iter::repeat(color).take(width));
    }
    Image::from_raw(width, height, pixels).expect("valid dimensions")
}

/// Black image with a single white pixel at `(x, y)`.
pub fn isolated_pixel(width: usize, height: usize, x: usize, y: usize) -> Image {
    let mut pixels = vec![[0.0, 0.0, 0.0, 1.0]; width * height];
    pixels[y * width + x] = [1.0, 1.0, 1.0, 1.0];
    Image::from_raw(width, height, pixels).expect("valid dimensions")
}

/// Black image with white pixels along the line `y = x`.
pub fn diagonal_line(size: usize) -> Image {
    let mut pixels = vec![[0.0, 0.0, 0.0, 1.0]; size * size];
    for i in 0..size {
        pixels[i * size + i] = [1.0, 1.0, 1.0, 1.0];
    }
    Image::from_raw(size, size, pixels).expect("valid dimensions")
}

/// Black image with a white axis-aligned rectangle.
pub fn filled_rect(
    width: usize,
    height: usize,
    x0: usize,
    y0: usize,
    x1: usize,
    y1: usize,
) -> Image {
    let mut pixels = vec![[0.0, 0.0, 0.0, 1.0]; width * height];
    for y in y0..y1 {
        for x in x0..x1 {
            pixels[y * width + x] = [1.0, 1.0, 1.0, 1.0];
        }
    }
    Image::from_raw(width, height, pixels).expect("valid dimensions")
}

/// Largest per-channel absolute difference over two whole images.
pub fn max_difference(a: &Image, b: &Image) -> f32 {
    assert_eq!(a.width(), b.width());
    assert_eq!(a.height(), b.height());
    a.pixels()
        .iter()
        .zip(b.pixels())
        .flat_map(|(pa, pb)| pa.iter().zip(pb).map(|(ca, cb)| (ca - cb).abs()))
        .fold(0.0, f32::max)
}
