use crate::core::actions::render_tile::ports::pixel_sink::PixelSink;
use crate::core::data::colour::Colour;
use crate::core::data::point::Point;
use crate::core::data::surface_size::SurfaceSize;
use std::error::Error;
use std::fmt;

const BYTES_PER_PIXEL: usize = 3;

fn surface_to_buffer_size(size: SurfaceSize) -> usize {
    size.pixel_count() * BYTES_PER_PIXEL
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PixelBufferError {
    BoundsMismatch {
        expected_size: usize,
        buffer_size: usize,
    },
}

impl fmt::Display for PixelBufferError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::BoundsMismatch {
                expected_size,
                buffer_size,
            } => {
                write!(
                    f,
                    "expected a buffer of {} bytes but got {}",
                    expected_size, buffer_size
                )
            }
        }
    }
}

impl Error for PixelBufferError {}

pub type PixelBufferData = Vec<u8>;

/// Row-major RGB surface. Writes outside the surface are clipped away.
#[derive(Debug)]
pub struct PixelBuffer {
    size: SurfaceSize,
    buffer: PixelBufferData,
}

impl PixelBuffer {
    #[must_use]
    pub fn new(size: SurfaceSize) -> Self {
        Self {
            size,
            buffer: vec![0; surface_to_buffer_size(size)],
        }
    }

    #[must_use]
    pub fn size(&self) -> SurfaceSize {
        self.size
    }

    #[must_use]
    pub fn buffer(&self) -> &PixelBufferData {
        &self.buffer
    }

    /// Reallocates for a new surface size. Previous contents are discarded.
    pub fn resize(&mut self, size: SurfaceSize) {
        self.size = size;
        self.buffer = vec![0; surface_to_buffer_size(size)];
    }

    #[must_use]
    pub fn pixel(&self, point: Point) -> Option<Colour> {
        if !self.size.contains_point(point) {
            return None;
        }

        let index = self.index_of(point.x as usize, point.y as usize);

        Some(Colour {
            r: self.buffer[index],
            g: self.buffer[index + 1],
            b: self.buffer[index + 2],
        })
    }

    pub fn fill_block(&mut self, top_left: Point, width: u32, height: u32, colour: Colour) {
        let surface_width = i64::from(self.size.width());
        let surface_height = i64::from(self.size.height());

        let left = i64::from(top_left.x).clamp(0, surface_width);
        let top = i64::from(top_left.y).clamp(0, surface_height);
        let right = (i64::from(top_left.x) + i64::from(width)).clamp(0, surface_width);
        let bottom = (i64::from(top_left.y) + i64::from(height)).clamp(0, surface_height);

        for y in top..bottom {
            let row_start = self.index_of(left as usize, y as usize);
            let row_end = self.index_of(right as usize, y as usize);

            for pixel in self.buffer[row_start..row_end].chunks_exact_mut(BYTES_PER_PIXEL) {
                pixel[0] = colour.r;
                pixel[1] = colour.g;
                pixel[2] = colour.b;
            }
        }
    }

    /// Copies the surface into an RGBA frame of the same dimensions, alpha fully opaque.
    pub fn copy_into_rgba(&self, dst: &mut [u8]) -> Result<(), PixelBufferError> {
        let expected_size = self.size.pixel_count() * 4;

        if dst.len() != expected_size {
            return Err(PixelBufferError::BoundsMismatch {
                expected_size,
                buffer_size: dst.len(),
            });
        }

        for (src_pixel, dst_pixel) in self
            .buffer
            .chunks_exact(BYTES_PER_PIXEL)
            .zip(dst.chunks_exact_mut(4))
        {
            dst_pixel[0] = src_pixel[0];
            dst_pixel[1] = src_pixel[1];
            dst_pixel[2] = src_pixel[2];
            dst_pixel[3] = 255;
        }

        Ok(())
    }

    fn index_of(&self, x: usize, y: usize) -> usize {
        (y * self.size.width() as usize + x) * BYTES_PER_PIXEL
    }
}

impl PixelSink for PixelBuffer {
    fn paint_block(&mut self, x: i32, y: i32, width: u32, height: u32, grey: u8) {
        self.fill_block(Point { x, y }, width, height, Colour::grey(grey));
    }
}
