use crate::core::data::colour::Colour;
use crate::core::data::point::Point;
use crate::core::data::surface::{BYTES_PER_PIXEL, Surface};

/// Flat row-major RGBA8 pixel storage for a fixed [`Surface`].
///
/// Writes outside the surface are dropped. The byte layout matches what the
/// display texture expects, so [`PixelBuffer::as_raw_bytes`] can be uploaded
/// without conversion.
#[derive(Debug, Clone)]
pub struct PixelBuffer {
    surface: Surface,
    buffer: Vec<u8>,
}

impl PixelBuffer {
    #[must_use]
    pub fn new(surface: Surface) -> Self {
        Self {
            surface,
            buffer: vec![0; surface.byte_len()],
        }
    }

    #[must_use]
    pub fn surface(&self) -> Surface {
        self.surface
    }

    #[must_use]
    pub fn width(&self) -> u32 {
        self.surface.width()
    }

    #[must_use]
    pub fn height(&self) -> u32 {
        self.surface.height()
    }

    #[must_use]
    pub fn stride(&self) -> usize {
        self.surface.stride()
    }

    #[must_use]
    pub fn as_raw_bytes(&self) -> &[u8] {
        &self.buffer
    }

    pub fn clear(&mut self) {
        self.buffer.fill(0);
    }

    pub fn set(&mut self, row: i64, col: i64, colour: Colour) {
        let Some(index) = self.index_of(row, col) else {
            return;
        };

        self.buffer[index..index + BYTES_PER_PIXEL].copy_from_slice(&colour.to_bytes());
    }

    #[must_use]
    pub fn get(&self, row: i64, col: i64) -> Option<Colour> {
        let index = self.index_of(row, col)?;

        Some(Colour {
            r: self.buffer[index],
            g: self.buffer[index + 1],
            b: self.buffer[index + 2],
            a: self.buffer[index + 3],
        })
    }

    /// Paints the pixel under `point`, truncating towards zero.
    ///
    /// Negative and non-finite coordinates are rejected before truncation so
    /// that e.g. `x = -0.5` does not land in column 0.
    pub fn paint(&mut self, point: Point, colour: Colour) {
        if !(point.x >= 0.0 && point.y >= 0.0) {
            return;
        }

        self.set(point.y as i64, point.x as i64, colour);
    }

    #[must_use]
    pub fn lit_pixel_count(&self) -> usize {
        self.buffer
            .chunks_exact(BYTES_PER_PIXEL)
            .filter(|pixel| pixel.iter().any(|&byte| byte != 0))
            .count()
    }

    fn index_of(&self, row: i64, col: i64) -> Option<usize> {
        if !self.surface.contains(row, col) {
            return None;
        }

        Some(row as usize * self.surface.stride() + col as usize * BYTES_PER_PIXEL)
    }
}
