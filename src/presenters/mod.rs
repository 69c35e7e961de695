//! Output adapters that put finished frames on screen.

pub mod pixels;
