use crate::controllers::chaos::ports::display::{DisplayError, DisplayPort};
use crate::core::data::pixel_buffer::PixelBuffer;
use pixels::{Pixels, SurfaceTexture};
use std::sync::Arc;
use winit::window::Window;

/// Display adapter: a `pixels` streaming texture scaled onto a winit window.
///
/// Fields drop in declaration order, so the texture and GPU surface are
/// released before the window they draw into.
pub struct PixelsPresenter {
    pixels: Pixels<'static>,
    window: Arc<Window>,
}

impl PixelsPresenter {
    /// `width` × `height` is the pixel buffer size; the on-screen surface
    /// follows the window's physical size and is scaled to fit.
    pub fn new(window: Arc<Window>, width: u32, height: u32) -> Result<Self, pixels::Error> {
        let size = window.inner_size();
        let surface_texture = SurfaceTexture::new(size.width, size.height, Arc::clone(&window));
        let pixels = Pixels::new(width, height, surface_texture)?;

        tracing::debug!(
            buffer_width = width,
            buffer_height = height,
            surface_width = size.width,
            surface_height = size.height,
            "created pixels surface"
        );

        Ok(Self { pixels, window })
    }

    fn copy_pixel_buffer_into_pixels_frame(&mut self, buffer: &PixelBuffer) -> Result<(), DisplayError> {
        let src = buffer.as_raw_bytes();
        let dest = self.pixels.frame_mut();

        if dest.len() != src.len() {
            return Err(DisplayError::SizeMismatch {
                buffer_len: src.len(),
                frame_len: dest.len(),
            });
        }

        dest.copy_from_slice(src);
        Ok(())
    }
}

impl DisplayPort for PixelsPresenter {
    fn present(&mut self, buffer: &PixelBuffer) -> Result<(), DisplayError> {
        self.copy_pixel_buffer_into_pixels_frame(buffer)?;

        self.window.pre_present_notify();
        self.pixels
            .render()
            .map_err(|e| DisplayError::Render(e.to_string()))
    }

    fn resize_surface(&mut self, width: u32, height: u32) -> Result<(), DisplayError> {
        // Minimised windows report a zero size; keep the old surface.
        if width == 0 || height == 0 {
            return Ok(());
        }

        self.pixels
            .resize_surface(width, height)
            .map_err(|e| DisplayError::Resize(e.to_string()))
    }
}
