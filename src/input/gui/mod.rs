//! GUI input adapter for the chaos game.
//!
//! This module provides a windowed interface using winit for window management
//! and event polling, with pixels as the framebuffer the controller draws into.

pub mod commands;
pub mod errors;
pub mod events;
pub mod winit_input;
