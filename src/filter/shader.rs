//! Per-pixel form of the three passes.
//!
//! [`PixelShader`] holds the configuration and the area tables and exposes
//! each pass as a pure function of (x, y) and the input images. Input
//! images are any [`ImageReader`]; the primary image parameters are generic
//! so the neighborhood taps inline, while the optional companion images
//! (predication, velocity) go through dynamic dispatch, which only costs
//! when they are present.
//!
//! Edges around a pixel (x, y) in the edges image:
//! west is R of (x, y), north is G of (x, y), east is R of (x+1, y), south
//! is G of (x, y+1).

use crate::areatex::AreaTables;
use crate::image::{sample_offset_horizontal, sample_offset_vertical, ImageReader};
use crate::math::{color_delta, rgb_to_luma, step};

use super::options::{Preset, SmaaOptions};

pub struct PixelShader {
    pub(crate) options: SmaaOptions,
    pub(crate) tables: AreaTables,
}

impl PixelShader {
    /// Shader with single-slice area tables (no subpixel offsets).
    pub fn new(options: SmaaOptions) -> Self {
        Self {
            options,
            tables: AreaTables::build(false),
        }
    }

    /// Shader with the full subsample-slice tables, for callers passing
    /// nonzero subsample indices.
    pub fn with_subsampling(options: SmaaOptions) -> Self {
        Self {
            options,
            tables: AreaTables::build(true),
        }
    }

    pub fn from_preset(preset: Preset) -> Self {
        Self::new(SmaaOptions::from_preset(preset))
    }

    pub fn options(&self) -> &SmaaOptions {
        &self.options
    }

    pub fn options_mut(&mut self) -> &mut SmaaOptions {
        &mut self.options
    }

    /// Replace the configuration with a preset's option set.
    pub fn set_preset(&mut self, preset: Preset) {
        self.options = SmaaOptions::from_preset(preset);
    }

    /// Threshold pair (west, north) adjusted by the predication image:
    /// scaled globally, reduced where the companion buffer has an edge.
    fn calculate_predicated_threshold(
        &self,
        x: i32,
        y: i32,
        predication_image: &dyn ImageReader,
    ) -> [f32; 2] {
        let here = predication_image.get_pixel(x, y);
        let left = predication_image.get_pixel(x - 1, y);
        let top = predication_image.get_pixel(x, y - 1);

        let edges = [
            step(self.options.predication_threshold, (here[0] - left[0]).abs()),
            step(self.options.predication_threshold, (here[0] - top[0]).abs()),
        ];
        let scaled = self.options.predication_scale * self.options.threshold;
        [
            scaled * (1.0 - self.options.predication_strength * edges[0]),
            scaled * (1.0 - self.options.predication_strength * edges[1]),
        ]
    }

    /// Luma edge detection (first pass).
    ///
    /// Requires gamma-corrected colors. Reads up to (-2, +1) around the
    /// pixel in each axis.
    pub fn luma_edge_detection<C: ImageReader>(
        &self,
        x: i32,
        y: i32,
        color_image: &C,
        predication_image: Option<&dyn ImageReader>,
    ) -> [f32; 4] {
        let threshold = match predication_image {
            Some(pred) if self.options.enable_predication => {
                self.calculate_predicated_threshold(x, y, pred)
            }
            _ => [self.options.threshold; 2],
        };

        let l = rgb_to_luma(color_image.get_pixel(x, y));
        let l_left = rgb_to_luma(color_image.get_pixel(x - 1, y));
        let l_top = rgb_to_luma(color_image.get_pixel(x, y - 1));
        let d_left = (l - l_left).abs();
        let d_top = (l - l_top).abs();

        let mut edges = [
            step(threshold[0], d_left),
            step(threshold[1], d_top),
            0.0,
            1.0,
        ];
        if edges[0] == 0.0 && edges[1] == 0.0 {
            return edges;
        }

        let d_right = (l - rgb_to_luma(color_image.get_pixel(x + 1, y))).abs();
        let d_bottom = (l - rgb_to_luma(color_image.get_pixel(x, y + 1))).abs();
        let mut max_delta = d_left.max(d_right).max(d_top.max(d_bottom));

        if edges[0] != 0.0 {
            let l_left_left = rgb_to_luma(color_image.get_pixel(x - 2, y));
            max_delta = max_delta.max((l_left - l_left_left).abs());
            if max_delta > self.options.local_contrast_adaptation_factor * d_left {
                edges[0] = 0.0;
            }
        }
        if edges[1] != 0.0 {
            let l_top_top = rgb_to_luma(color_image.get_pixel(x, y - 2));
            max_delta = max_delta.max((l_top - l_top_top).abs());
            if max_delta > self.options.local_contrast_adaptation_factor * d_top {
                edges[1] = 0.0;
            }
        }

        edges
    }

    /// Color edge detection (first pass): like luma, but the delta is the
    /// largest per-channel difference.
    pub fn color_edge_detection<C: ImageReader>(
        &self,
        x: i32,
        y: i32,
        color_image: &C,
        predication_image: Option<&dyn ImageReader>,
    ) -> [f32; 4] {
        let threshold = match predication_image {
            Some(pred) if self.options.enable_predication => {
                self.calculate_predicated_threshold(x, y, pred)
            }
            _ => [self.options.threshold; 2],
        };

        let c = color_image.get_pixel(x, y);
        let c_left = color_image.get_pixel(x - 1, y);
        let c_top = color_image.get_pixel(x, y - 1);
        let d_left = color_delta(c, c_left);
        let d_top = color_delta(c, c_top);

        let mut edges = [
            step(threshold[0], d_left),
            step(threshold[1], d_top),
            0.0,
            1.0,
        ];
        if edges[0] == 0.0 && edges[1] == 0.0 {
            return edges;
        }

        let d_right = color_delta(c, color_image.get_pixel(x + 1, y));
        let d_bottom = color_delta(c, color_image.get_pixel(x, y + 1));
        let mut max_delta = d_left.max(d_right).max(d_top.max(d_bottom));

        if edges[0] != 0.0 {
            let d_left_left = color_delta(c_left, color_image.get_pixel(x - 2, y));
            max_delta = max_delta.max(d_left_left);
            if max_delta > self.options.local_contrast_adaptation_factor * d_left {
                edges[0] = 0.0;
            }
        }
        if edges[1] != 0.0 {
            let d_top_top = color_delta(c_top, color_image.get_pixel(x, y - 2));
            max_delta = max_delta.max(d_top_top);
            if max_delta > self.options.local_contrast_adaptation_factor * d_top {
                edges[1] = 0.0;
            }
        }

        edges
    }

    /// Depth edge detection (first pass): thresholds the first channel
    /// only, with no contrast adaptation.
    pub fn depth_edge_detection<D: ImageReader>(
        &self,
        x: i32,
        y: i32,
        depth_image: &D,
    ) -> [f32; 4] {
        let here = depth_image.get_pixel(x, y);
        let left = depth_image.get_pixel(x - 1, y);
        let top = depth_image.get_pixel(x, y - 1);

        [
            step(self.options.depth_threshold, (here[0] - left[0]).abs()),
            step(self.options.depth_threshold, (here[0] - top[0]).abs()),
            0.0,
            1.0,
        ]
    }

    /// Blending weight calculation (second pass).
    ///
    /// Output channels are the blend weights contributed to this pixel from
    /// each direction: R = top, G = bottom, B = left, A = right. Pass `None`
    /// for `subsample_indices` outside of temporal/spatial supersampling;
    /// the four integers select area-table slices for (vertical ortho,
    /// horizontal ortho, first diagonal, second diagonal).
    ///
    /// Reads up to `max(max_search_steps, max_search_steps_diag + 1)` pixels
    /// away along each axis.
    pub fn blending_weight_calculation<E: ImageReader>(
        &self,
        x: i32,
        y: i32,
        edges_image: &E,
        subsample_indices: Option<[usize; 4]>,
    ) -> [f32; 4] {
        let mut weights = [0.0f32; 4];
        let indices = subsample_indices.unwrap_or([0; 4]);
        let edges = edges_image.get_pixel(x, y);

        if edges[1] > 0.0 {
            // Edge at north.
            if self.options.enable_diag_detection {
                // Diagonals have both north and west edges, so one of the
                // boundaries is enough; diagonals also take priority.
                let w = self.calculate_diag_weights(
                    edges_image,
                    x,
                    y,
                    [edges[0], edges[1]],
                    indices,
                );
                weights[0] = w[0];
                weights[1] = w[1];
                if weights[0] + weights[1] != 0.0 {
                    return weights;
                }
            }

            if self.options.max_search_steps > 0 {
                let left = self.search_x_left(edges_image, x, y);
                let right = self.search_x_right(edges_image, x, y);
                let d1 = x - left;
                let d2 = right - x;

                // Crossing edges at both line ends: bit 0 for the y-1 side,
                // bit 1 for the y side.
                let mut e1 = 0usize;
                let mut e2 = 0usize;
                if edges_image.get_pixel(left, y - 1)[0] > 0.0 {
                    e1 += 1;
                }
                if edges_image.get_pixel(left, y)[0] > 0.0 {
                    e1 += 2;
                }
                if edges_image.get_pixel(right + 1, y - 1)[0] > 0.0 {
                    e2 += 1;
                }
                if edges_image.get_pixel(right + 1, y)[0] > 0.0 {
                    e2 += 2;
                }

                let w = self.tables.ortho_area(d1, d2, e1, e2, indices[1]);
                weights[0] = w[0];
                weights[1] = w[1];

                if self.options.enable_corner_detection {
                    self.detect_horizontal_corner_pattern(
                        edges_image,
                        &mut weights,
                        left,
                        right,
                        y,
                        d1,
                        d2,
                    );
                }
            }
        }

        if edges[0] > 0.0 {
            // Edge at west. The left neighbor's diagonal search may already
            // cover this boundary.
            if self.options.enable_diag_detection
                && self.is_vertical_search_unneeded(edges_image, x, y)
            {
                return weights;
            }

            if self.options.max_search_steps > 0 {
                let top = self.search_y_up(edges_image, x, y);
                let bottom = self.search_y_down(edges_image, x, y);
                let d1 = y - top;
                let d2 = bottom - y;

                let mut e1 = 0usize;
                let mut e2 = 0usize;
                if edges_image.get_pixel(x - 1, top)[1] > 0.0 {
                    e1 += 1;
                }
                if edges_image.get_pixel(x, top)[1] > 0.0 {
                    e1 += 2;
                }
                if edges_image.get_pixel(x - 1, bottom + 1)[1] > 0.0 {
                    e2 += 1;
                }
                if edges_image.get_pixel(x, bottom + 1)[1] > 0.0 {
                    e2 += 2;
                }

                let w = self.tables.ortho_area(d1, d2, e1, e2, indices[0]);
                weights[2] = w[0];
                weights[3] = w[1];

                if self.options.enable_corner_detection {
                    self.detect_vertical_corner_pattern(
                        edges_image,
                        &mut weights,
                        top,
                        bottom,
                        x,
                        d1,
                        d2,
                    );
                }
            }
        }

        weights
    }

    /// Neighborhood blending (third pass).
    ///
    /// Mixes the pixel with the neighbor in the dominant weight direction.
    /// When a velocity image is supplied, its blended magnitude is packed
    /// into the output alpha for a later temporal-resolve stage. Reads one
    /// pixel around (x, y).
    pub fn neighborhood_blending<C: ImageReader, B: ImageReader>(
        &self,
        x: i32,
        y: i32,
        color_image: &C,
        blend_image: &B,
        velocity_image: Option<&dyn ImageReader>,
    ) -> [f32; 4] {
        let w = blend_image.get_pixel(x, y);
        let left = w[2];
        let top = w[0];
        let right = blend_image.get_pixel(x + 1, y)[3];
        let bottom = blend_image.get_pixel(x, y + 1)[1];

        if right + bottom + left + top < 1e-5 {
            let mut color = color_image.get_pixel(x, y);
            if let Some(velocity) = velocity_image {
                let v = velocity.get_pixel(x, y);
                color[3] = pack_velocity(v[0], v[1]);
            }
            return color;
        }

        let horizontal = right.max(left) > bottom.max(top);
        let (offset1, offset2, weight1, weight2) = if horizontal {
            (right, -left, right / (right + left), left / (right + left))
        } else {
            (bottom, -top, bottom / (bottom + top), top / (bottom + top))
        };

        // Bilinear sampling at a fractional offset mixes the pixel with the
        // chosen neighbor in one tap.
        let (c1, c2) = if horizontal {
            (
                sample_offset_horizontal(color_image, x, y, offset1),
                sample_offset_horizontal(color_image, x, y, offset2),
            )
        } else {
            (
                sample_offset_vertical(color_image, x, y, offset1),
                sample_offset_vertical(color_image, x, y, offset2),
            )
        };

        let mut color = [0.0f32; 4];
        for c in 0..4 {
            color[c] = weight1 * c1[c] + weight2 * c2[c];
        }

        if let Some(velocity) = velocity_image {
            let (v1, v2) = if horizontal {
                (
                    sample_offset_horizontal(velocity, x, y, offset1),
                    sample_offset_horizontal(velocity, x, y, offset2),
                )
            } else {
                (
                    sample_offset_vertical(velocity, x, y, offset1),
                    sample_offset_vertical(velocity, x, y, offset2),
                )
            };
            let vx = weight1 * v1[0] + weight2 * v2[0];
            let vy = weight1 * v1[1] + weight2 * v2[1];
            color[3] = pack_velocity(vx, vy);
        }

        color
    }
}

/// Compress a velocity magnitude into the alpha channel.
#[inline]
fn pack_velocity(vx: f32, vy: f32) -> f32 {
    (5.0 * (vx * vx + vy * vy).sqrt()).sqrt()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::filter::options::SmaaOptions;
    use crate::image::Image;

    fn constant_image(w: usize, h: usize, color: [f32; 4]) -> Image {
        Image::from_raw(w, h, vec![color; w * h]).unwrap()
    }

    #[test]
    fn velocity_packs_into_alpha_without_blending() {
        let shader = PixelShader::new(SmaaOptions::default());
        let color = constant_image(4, 4, [0.25, 0.5, 0.75, 1.0]);
        // All-zero weights take the passthrough branch.
        let blend = constant_image(4, 4, [0.0; 4]);
        let velocity = constant_image(4, 4, [0.6, 0.8, 0.0, 0.0]);

        let out = shader.neighborhood_blending(2, 2, &color, &blend, Some(&velocity));
        let expected = (5.0f32 * (0.6f32 * 0.6 + 0.8f32 * 0.8).sqrt()).sqrt();
        assert_eq!(out[0], 0.25);
        assert_eq!(out[1], 0.5);
        assert_eq!(out[2], 0.75);
        assert!((out[3] - expected).abs() < 1e-6);
    }

    #[test]
    fn velocity_packs_into_alpha_when_blending() {
        let shader = PixelShader::new(SmaaOptions::default());

        let mut color = constant_image(4, 1, [0.0, 0.0, 0.0, 1.0]);
        color.put_pixel(1, 0, [1.0, 0.0, 0.0, 1.0]).unwrap();
        // Left weight 0.5 at (1, 0): the pixel blends halfway toward x = 0.
        let mut blend = constant_image(4, 1, [0.0; 4]);
        blend.put_pixel(1, 0, [0.0, 0.0, 0.5, 0.0]).unwrap();
        let velocity = constant_image(4, 1, [0.3, 0.4, 0.0, 0.0]);

        let out = shader.neighborhood_blending(1, 0, &color, &blend, Some(&velocity));
        let expected = (5.0f32 * (0.3f32 * 0.3 + 0.4f32 * 0.4).sqrt()).sqrt();
        assert!((out[0] - 0.5).abs() < 1e-6);
        assert!((out[3] - expected).abs() < 1e-6);

        // Without a velocity image the alpha comes from the color blend.
        let out = shader.neighborhood_blending(1, 0, &color, &blend, None);
        assert!((out[0] - 0.5).abs() < 1e-6);
        assert!((out[3] - 1.0).abs() < 1e-6);
    }
}
