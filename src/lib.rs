mod controllers;
mod core;
#[cfg(feature = "gui")]
mod input;
#[cfg(feature = "gui")]
mod presenters;
#[cfg(test)]
mod test_support;

pub use crate::controllers::chaos::errors::{ChaosError, ChaosResult};
pub use crate::controllers::chaos::events::input_event::InputEvent;
pub use crate::controllers::chaos::frame::{FramePacer, FramePacerError};
pub use crate::controllers::chaos::ports::display::{DisplayError, DisplayPort};
pub use crate::controllers::chaos::ports::input::InputPort;
pub use crate::controllers::chaos::ports::sleeper::{Sleeper, ThreadSleeper};
pub use crate::controllers::chaos::state::AppState;
pub use crate::controllers::chaos::{ChaosController, FrameReport};
pub use crate::core::actions::chaos_game::chaos_game::ChaosGame;
pub use crate::core::actions::chaos_game::point_generator::{random_point_in_triangle, step};
pub use crate::core::actions::chaos_game::ports::random_source::RandomSource;
pub use crate::core::config::chaos_config::ChaosConfig;
pub use crate::core::data::camera::{Camera, ZoomDirection};
pub use crate::core::data::colour::Colour;
pub use crate::core::data::pixel_buffer::PixelBuffer;
pub use crate::core::data::point::Point;
pub use crate::core::data::surface::{Surface, SurfaceError};
pub use crate::core::data::triangle::{Triangle, TriangleError};
pub use crate::core::random::seeded_random::SeededRandom;

#[cfg(feature = "gui")]
pub use crate::input::gui::commands::run_gui::RunGuiCommand;
#[cfg(feature = "gui")]
pub use crate::input::gui::errors::GuiError;
#[cfg(feature = "gui")]
pub use crate::presenters::pixels::PixelsPresenter;
