//! Diagonal line-end searches and weights.
//!
//! A diagonal run shows up as a staircase of paired north/west edges. Two
//! orientations are probed from both ends of the pixel's north edge: the
//! bottom-left/top-right direction first, then top-left/bottom-right. A
//! run longer than three pixels produces weights from the diagonal area
//! table and preempts the orthogonal path.

use crate::image::ImageReader;

use super::shader::PixelShader;

impl PixelShader {
    /// Walk in direction (dir, -dir) while the staircase continues.
    ///
    /// Returns the final x coordinate and whether a definite line end was
    /// seen (as opposed to running out of search budget).
    fn search_diag1<E: ImageReader>(
        &self,
        edges_image: &E,
        x: i32,
        y: i32,
        dir: i32,
    ) -> (i32, bool) {
        let end = x + self.options.max_search_steps_diag as i32 * dir;
        let (mut x, mut y) = (x, y);

        while x != end {
            x += dir;
            y -= dir;
            let e = edges_image.get_pixel(x, y);
            if e[1] == 0.0 {
                // North edge gone.
                return (x - dir, true);
            }
            if e[0] == 0.0 {
                // West edge gone; the step ended on a north edge when
                // walking down-left.
                return (if dir < 0 { x } else { x - dir }, true);
            }
        }

        (x - dir, false)
    }

    /// Walk in direction (dir, dir), tracking the north edge of the current
    /// pixel and the west edge of its right neighbor.
    fn search_diag2<E: ImageReader>(
        &self,
        edges_image: &E,
        x: i32,
        y: i32,
        dir: i32,
    ) -> (i32, bool) {
        let end = x + self.options.max_search_steps_diag as i32 * dir;
        let (mut x, mut y) = (x, y);

        while x != end {
            x += dir;
            y += dir;
            if edges_image.get_pixel(x, y)[1] == 0.0 {
                return (x - dir, true);
            }
            if edges_image.get_pixel(x + 1, y)[0] == 0.0 {
                return (if dir > 0 { x } else { x - dir }, true);
            }
        }

        (x - dir, false)
    }

    /// Weights for both diagonal orientations through (x, y), zero when no
    /// diagonal of length > 3 is found.
    pub(crate) fn calculate_diag_weights<E: ImageReader>(
        &self,
        edges_image: &E,
        x: i32,
        y: i32,
        edges: [f32; 2],
        subsample_indices: [usize; 4],
    ) -> [f32; 2] {
        let mut weights = [0.0f32; 2];

        if self.options.max_search_steps_diag == 0 {
            return weights;
        }

        // First orientation: down-left and up-right from the north edge.
        let (d1, found1) = if edges[0] > 0.0 {
            let (sx, f) = self.search_diag1(edges_image, x, y, -1);
            (x - sx, f)
        } else {
            (0, true)
        };
        let (sx, found2) = self.search_diag1(edges_image, x, y, 1);
        let d2 = sx - x;

        if d1 + d2 > 2 {
            // Crossing edges at the two ends: 2 for a horizontal
            // continuation, 1 for a vertical one.
            let mut e1 = 0usize;
            let mut e2 = 0usize;
            if found1 {
                let (cx, cy) = (x - d1, y + d1);
                if edges_image.get_pixel(cx - 1, cy)[1] > 0.0 {
                    e1 += 2;
                }
                if edges_image.get_pixel(cx, cy)[0] > 0.0 {
                    e1 += 1;
                }
            }
            if found2 {
                let (cx, cy) = (x + d2, y - d2);
                if edges_image.get_pixel(cx + 1, cy)[1] > 0.0 {
                    e2 += 2;
                }
                if edges_image.get_pixel(cx + 1, cy - 1)[0] > 0.0 {
                    e2 += 1;
                }
            }

            let w = self
                .tables
                .diag_area(d1, d2, e1, e2, subsample_indices[2]);
            weights[0] += w[0];
            weights[1] += w[1];
        }

        // Second orientation: up-left and down-right.
        let (sx, found1) = self.search_diag2(edges_image, x, y, -1);
        let d1 = x - sx;
        let (d2, found2) = if edges_image.get_pixel(x + 1, y)[0] > 0.0 {
            let (sx, f) = self.search_diag2(edges_image, x, y, 1);
            (sx - x, f)
        } else {
            (0, true)
        };

        if d1 + d2 > 2 {
            let mut e1 = 0usize;
            let mut e2 = 0usize;
            if found1 {
                let (cx, cy) = (x - d1, y - d1);
                if edges_image.get_pixel(cx - 1, cy)[1] > 0.0 {
                    e1 += 2;
                }
                if edges_image.get_pixel(cx, cy - 1)[0] > 0.0 {
                    e1 += 1;
                }
            }
            if found2 {
                let (cx, cy) = (x + d2, y + d2);
                let c = edges_image.get_pixel(cx + 1, cy);
                if c[1] > 0.0 {
                    e2 += 2;
                }
                if c[0] > 0.0 {
                    e2 += 1;
                }
            }

            // This orientation contributes with the area pair swapped.
            let w = self
                .tables
                .diag_area(d1, d2, e1, e2, subsample_indices[3]);
            weights[0] += w[1];
            weights[1] += w[0];
        }

        weights
    }

    /// Whether the left neighbor's second-orientation diagonal search
    /// already covers this pixel's west edge, making the vertical search
    /// redundant.
    pub(crate) fn is_vertical_search_unneeded<E: ImageReader>(
        &self,
        edges_image: &E,
        x: i32,
        y: i32,
    ) -> bool {
        if self.options.max_search_steps_diag == 0 {
            return false;
        }

        let d1 = if edges_image.get_pixel(x - 1, y)[1] > 0.0 {
            let (sx, _) = self.search_diag2(edges_image, x - 1, y, -1);
            x - sx
        } else {
            0
        };
        let (sx, _) = self.search_diag2(edges_image, x - 1, y, 1);
        let d2 = sx - x;

        d1 + d2 > 2
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::filter::options::SmaaOptions;
    use crate::image::Image;

    /// Edges of a white anti-diagonal staircase: every pixel (i, i) carries
    /// both a north and a west edge, plus the trailing edges at (i+1, i)
    /// and (i, i+1).
    fn diagonal_edges(n: usize) -> Image {
        let mut img = Image::new(n, n).unwrap();
        for i in 0..n as i32 {
            img.put_pixel(i, i, [1.0, 1.0, 0.0, 1.0]).unwrap();
            if i + 1 < n as i32 {
                let e = img.get_pixel(i + 1, i);
                img.put_pixel(i + 1, i, [1.0, e[1], 0.0, 1.0]).unwrap();
                let e = img.get_pixel(i, i + 1);
                img.put_pixel(i, i + 1, [e[0], 1.0, 0.0, 1.0]).unwrap();
            }
        }
        img
    }

    #[test]
    fn staircase_produces_diagonal_weights() {
        let edges = diagonal_edges(16);
        let shader = PixelShader::new(SmaaOptions::default());
        let e = edges.get_pixel(8, 8);
        let w = shader.calculate_diag_weights(&edges, 8, 8, [e[0], e[1]], [0; 4]);
        assert!(w[0] + w[1] > 0.0, "expected diagonal weights, got {w:?}");
    }

    #[test]
    fn zero_diag_steps_disable_the_search() {
        let edges = diagonal_edges(16);
        let options = SmaaOptions {
            max_search_steps_diag: 0,
            ..SmaaOptions::default()
        };
        let shader = PixelShader::new(options);
        let e = edges.get_pixel(8, 8);
        let w = shader.calculate_diag_weights(&edges, 8, 8, [e[0], e[1]], [0; 4]);
        assert_eq!(w, [0.0, 0.0]);
        assert!(!shader.is_vertical_search_unneeded(&edges, 8, 8));
    }
}
