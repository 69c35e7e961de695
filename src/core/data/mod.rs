pub mod camera;
pub mod colour;
pub mod pixel_buffer;
pub mod point;
pub mod surface;
pub mod triangle;
