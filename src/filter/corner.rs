//! Corner detection: attenuates blending near 90-degree corners.
//!
//! Without this fix, the ends of an edge run that meet a perpendicular
//! edge get fully revectorized and sharp corners come out too soft. Each
//! end that is near (its distance not larger than the other side's) has its
//! two weight components reduced in proportion to the crossing edges just
//! beyond the corner.

use crate::image::ImageReader;
use crate::math::saturate;

use super::shader::PixelShader;

impl PixelShader {
    pub(crate) fn detect_horizontal_corner_pattern<E: ImageReader>(
        &self,
        edges_image: &E,
        weights: &mut [f32; 4],
        left: i32,
        right: i32,
        y: i32,
        d1: i32,
        d2: i32,
    ) {
        let mut factor = [1.0f32, 1.0];
        let mut rounding = 1.0 - self.options.corner_rounding as f32 / 100.0;

        // Pixels at the center of a line blend from both ends; halve the
        // correction there.
        if d1 == d2 {
            rounding *= 0.5;
        }

        if d1 <= d2 {
            // Near the left corner.
            factor[0] -= rounding * edges_image.get_pixel(left, y + 1)[0];
            factor[1] -= rounding * edges_image.get_pixel(left, y - 2)[0];
        }
        if d1 >= d2 {
            // Near the right corner.
            factor[0] -= rounding * edges_image.get_pixel(right + 1, y + 1)[0];
            factor[1] -= rounding * edges_image.get_pixel(right + 1, y - 2)[0];
        }

        weights[0] *= saturate(factor[0]);
        weights[1] *= saturate(factor[1]);
    }

    pub(crate) fn detect_vertical_corner_pattern<E: ImageReader>(
        &self,
        edges_image: &E,
        weights: &mut [f32; 4],
        top: i32,
        bottom: i32,
        x: i32,
        d1: i32,
        d2: i32,
    ) {
        let mut factor = [1.0f32, 1.0];
        let mut rounding = 1.0 - self.options.corner_rounding as f32 / 100.0;

        if d1 == d2 {
            rounding *= 0.5;
        }

        if d1 <= d2 {
            factor[0] -= rounding * edges_image.get_pixel(x + 1, top)[1];
            factor[1] -= rounding * edges_image.get_pixel(x - 2, top)[1];
        }
        if d1 >= d2 {
            factor[0] -= rounding * edges_image.get_pixel(x + 1, bottom + 1)[1];
            factor[1] -= rounding * edges_image.get_pixel(x - 2, bottom + 1)[1];
        }

        weights[2] *= saturate(factor[0]);
        weights[3] *= saturate(factor[1]);
    }
}
