//! Input adapters for the chaos game.
//!
//! This module contains adapters that receive input from the platform and
//! translate it into frame-loop events.

#[cfg(feature = "gui")]
pub mod gui;
