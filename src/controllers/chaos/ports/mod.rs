//! Port definitions for the chaos controller.
//!
//! The frame loop talks to the window system only through these traits, so
//! the whole loop can run against in-memory fakes.

pub mod display;
pub mod input;
pub mod sleeper;
