//! Horizontal and vertical line-end searches.
//!
//! Starting from a pixel on an edge run, each search walks one pixel per
//! step until the run ends or a perpendicular crossing edge breaks it. The
//! search range is bounded by `max_search_steps` per side.

use crate::image::ImageReader;

use super::shader::PixelShader;

impl PixelShader {
    /// Leftmost pixel of the north-edge run through (x, y).
    pub(crate) fn search_x_left<E: ImageReader>(&self, edges_image: &E, x: i32, y: i32) -> i32 {
        let end = x - self.options.max_search_steps as i32;
        let mut x = x;

        while x > end {
            let e = edges_image.get_pixel(x, y);
            if e[1] == 0.0 {
                // North edge not activated: the run ended one pixel back.
                break;
            }
            if e[0] != 0.0 {
                // Bottom crossing edge breaks the line.
                return x;
            }
            if edges_image.get_pixel(x, y - 1)[0] != 0.0 {
                // Top crossing edge breaks the line.
                return x;
            }
            x -= 1;
        }

        x + 1
    }

    /// Rightmost pixel of the north-edge run through (x, y).
    pub(crate) fn search_x_right<E: ImageReader>(&self, edges_image: &E, x: i32, y: i32) -> i32 {
        let end = x + self.options.max_search_steps as i32;
        let mut x = x;

        while x < end {
            x += 1;
            let e = edges_image.get_pixel(x, y);
            if e[1] == 0.0 || e[0] != 0.0 {
                break;
            }
            if edges_image.get_pixel(x, y - 1)[0] != 0.0 {
                break;
            }
        }

        x - 1
    }

    /// Topmost pixel of the west-edge run through (x, y).
    pub(crate) fn search_y_up<E: ImageReader>(&self, edges_image: &E, x: i32, y: i32) -> i32 {
        let end = y - self.options.max_search_steps as i32;
        let mut y = y;

        while y > end {
            let e = edges_image.get_pixel(x, y);
            if e[0] == 0.0 {
                break;
            }
            if e[1] != 0.0 {
                return y;
            }
            if edges_image.get_pixel(x - 1, y)[1] != 0.0 {
                return y;
            }
            y -= 1;
        }

        y + 1
    }

    /// Bottommost pixel of the west-edge run through (x, y).
    pub(crate) fn search_y_down<E: ImageReader>(&self, edges_image: &E, x: i32, y: i32) -> i32 {
        let end = y + self.options.max_search_steps as i32;
        let mut y = y;

        while y < end {
            y += 1;
            let e = edges_image.get_pixel(x, y);
            if e[0] == 0.0 || e[1] != 0.0 {
                break;
            }
            if edges_image.get_pixel(x - 1, y)[1] != 0.0 {
                break;
            }
        }

        y - 1
    }
}
