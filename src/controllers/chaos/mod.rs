//! Real-time frame loop for the chaos game.
//!
//! # Architecture
//!
//! The controller follows the same ports & adapters split as the rest of the
//! crate:
//! - **Input**: an [`ports::input::InputPort`] drained once per frame
//! - **Output**: a [`ports::display::DisplayPort`] that receives the pixel buffer
//! - **Core**: the chaos game from `core/` advances the current point
//!
//! Everything runs on the calling thread.

mod controller;
pub mod errors;
pub mod events;
pub mod frame;
pub mod ports;
pub mod state;

pub use controller::{ChaosController, FrameReport};
