//! Owned RGBA float image in row-major layout (stride == width).
//!
//! The pipeline allocates one of these per pass output. Construction and
//! writes are checked; reads clamp to the border per [`ImageReader`].

use super::error::ImageError;
use super::traits::{ImageReader, Rows, RowsMut};

#[derive(Clone, Debug, PartialEq)]
pub struct Image {
    w: usize,
    h: usize,
    data: Vec<[f32; 4]>,
}

impl Image {
    /// Construct a zero-initialized buffer of size `w × h`.
    pub fn new(w: usize, h: usize) -> Result<Self, ImageError> {
        if w == 0 || h == 0 {
            return Err(ImageError::SizeInvalid {
                width: w,
                height: h,
            });
        }
        let len = w * h;
        let mut data = Vec::new();
        data.try_reserve_exact(len)
            .map_err(|_| ImageError::AllocationFailed {
                width: w,
                height: h,
            })?;
        data.resize(len, [0.0; 4]);
        Ok(Self { w, h, data })
    }

    /// Wrap an existing pixel buffer. The buffer length must equal `w * h`.
    pub fn from_raw(w: usize, h: usize, data: Vec<[f32; 4]>) -> Result<Self, ImageError> {
        if w == 0 || h == 0 {
            return Err(ImageError::SizeInvalid {
                width: w,
                height: h,
            });
        }
        if data.len() != w * h {
            return Err(ImageError::Corrupt {
                expected: w * h,
                found: data.len(),
            });
        }
        Ok(Self { w, h, data })
    }

    #[inline]
    pub fn width(&self) -> usize {
        self.w
    }

    #[inline]
    pub fn height(&self) -> usize {
        self.h
    }

    #[inline]
    fn idx(&self, x: usize, y: usize) -> usize {
        y * self.w + x
    }

    /// Write the pixel at `(x, y)`.
    ///
    /// Unlike reads, writes do not clamp: coordinates outside the image are
    /// an error that aborts the current pipeline run.
    pub fn put_pixel(&mut self, x: i32, y: i32, color: [f32; 4]) -> Result<(), ImageError> {
        if x < 0 || y < 0 || x as usize >= self.w || y as usize >= self.h {
            return Err(ImageError::PutPixelOutOfRange {
                x,
                y,
                width: self.w,
                height: self.h,
            });
        }
        let i = self.idx(x as usize, y as usize);
        self.data[i] = color;
        Ok(())
    }

    #[inline]
    pub fn row(&self, y: usize) -> &[[f32; 4]] {
        let start = y * self.w;
        &self.data[start..start + self.w]
    }

    #[inline]
    pub fn row_mut(&mut self, y: usize) -> &mut [[f32; 4]] {
        let start = y * self.w;
        &mut self.data[start..start + self.w]
    }

    pub fn rows(&self) -> Rows<'_, Self> {
        Rows { image: self, y: 0 }
    }

    pub fn rows_mut(&mut self) -> RowsMut<'_, Self> {
        RowsMut { image: self, y: 0 }
    }

    /// Flat pixel slice, row-major.
    #[inline]
    pub fn pixels(&self) -> &[[f32; 4]] {
        &self.data
    }

    #[inline]
    pub fn pixels_mut(&mut self) -> &mut [[f32; 4]] {
        &mut self.data
    }
}

impl ImageReader for Image {
    #[inline]
    fn width(&self) -> usize {
        self.w
    }

    #[inline]
    fn height(&self) -> usize {
        self.h
    }

    #[inline]
    fn get_pixel(&self, x: i32, y: i32) -> [f32; 4] {
        let cx = x.clamp(0, self.w as i32 - 1) as usize;
        let cy = y.clamp(0, self.h as i32 - 1) as usize;
        self.data[cy * self.w + cx]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_zero_sizes() {
        assert!(matches!(
            Image::new(0, 4),
            Err(ImageError::SizeInvalid { .. })
        ));
        assert!(matches!(
            Image::new(4, 0),
            Err(ImageError::SizeInvalid { .. })
        ));
    }

    #[test]
    fn from_raw_checks_length() {
        let err = Image::from_raw(2, 2, vec![[0.0; 4]; 3]).unwrap_err();
        assert_eq!(
            err,
            ImageError::Corrupt {
                expected: 4,
                found: 3
            }
        );
    }

    #[test]
    fn put_pixel_rejects_out_of_range() {
        let mut img = Image::new(2, 2).unwrap();
        assert!(img.put_pixel(1, 1, [0.5; 4]).is_ok());
        assert!(matches!(
            img.put_pixel(2, 0, [0.0; 4]),
            Err(ImageError::PutPixelOutOfRange { .. })
        ));
        assert!(matches!(
            img.put_pixel(0, -1, [0.0; 4]),
            Err(ImageError::PutPixelOutOfRange { .. })
        ));
    }

    #[test]
    fn row_iterators_visit_every_row_once() {
        let mut img = Image::new(3, 4).unwrap();
        for (y, row) in img.rows_mut().enumerate() {
            for px in row.iter_mut() {
                px[0] = y as f32;
            }
        }
        let visited: Vec<f32> = img.rows().map(|row| row[0][0]).collect();
        assert_eq!(visited, vec![0.0, 1.0, 2.0, 3.0]);
    }

    #[test]
    fn reads_clamp_to_border() {
        let mut img = Image::new(3, 2).unwrap();
        img.put_pixel(0, 0, [0.1, 0.0, 0.0, 1.0]).unwrap();
        img.put_pixel(2, 1, [0.9, 0.0, 0.0, 1.0]).unwrap();

        assert_eq!(img.get_pixel(-1, -5), img.get_pixel(0, 0));
        assert_eq!(img.get_pixel(3, 1), img.get_pixel(2, 1));
        assert_eq!(img.get_pixel(100, 100), img.get_pixel(2, 1));
        assert_eq!(img.get_pixel(0, -1)[0], 0.1);
    }
}
