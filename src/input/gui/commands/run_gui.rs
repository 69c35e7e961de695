use crate::controllers::chaos::ChaosController;
use crate::controllers::chaos::ports::sleeper::ThreadSleeper;
use crate::core::config::chaos_config::ChaosConfig;
use crate::core::random::seeded_random::SeededRandom;
use crate::input::gui::errors::GuiError;
use crate::input::gui::winit_input::WinitInput;
use crate::presenters::pixels::PixelsPresenter;
use std::sync::Arc;
use winit::{dpi::LogicalSize, event_loop::EventLoop, window::WindowBuilder};

pub struct RunGuiCommand {
    config: ChaosConfig,
}

impl RunGuiCommand {
    #[must_use]
    pub fn new(config: ChaosConfig) -> Self {
        Self { config }
    }

    /// Opens the window and runs the frame loop until it is closed.
    ///
    /// Any resource that fails to come up aborts before the first frame.
    /// Returns the number of frames drawn.
    pub fn execute(&self) -> Result<u64, GuiError> {
        let event_loop = EventLoop::new()?;

        let window = WindowBuilder::new()
            .with_title(self.config.title)
            .with_inner_size(LogicalSize::new(
                f64::from(self.config.width),
                f64::from(self.config.height),
            ))
            .with_resizable(false)
            .build(&event_loop)?;
        let window_id = window.id();

        // The presenter holds the only handle to the window, so tearing the
        // controller down releases surface, then window, then event loop.
        let presenter = PixelsPresenter::new(Arc::new(window), self.config.width, self.config.height)?;
        let input = WinitInput::new(event_loop, window_id);

        let mut controller = ChaosController::new(
            &self.config,
            presenter,
            input,
            ThreadSleeper,
            SeededRandom::from_time(),
        )?;

        let frames = controller.run()?;
        drop(controller);

        tracing::info!(frames, "display resources released");

        Ok(frames)
    }
}
