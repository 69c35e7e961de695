use crate::core::data::pixel_buffer::PixelBuffer;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DisplayError {
    #[error("pixel buffer is {buffer_len} bytes but the display frame is {frame_len} bytes")]
    SizeMismatch { buffer_len: usize, frame_len: usize },
    #[error("failed to render frame: {0}")]
    Render(String),
    #[error("failed to resize surface: {0}")]
    Resize(String),
}

/// Where finished frames go: upload the buffer into the on-screen texture and
/// present it.
pub trait DisplayPort {
    fn present(&mut self, buffer: &PixelBuffer) -> Result<(), DisplayError>;

    fn resize_surface(&mut self, width: u32, height: u32) -> Result<(), DisplayError>;
}
