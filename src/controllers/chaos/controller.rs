use crate::controllers::chaos::errors::ChaosResult;
use crate::controllers::chaos::events::input_event::InputEvent;
use crate::controllers::chaos::frame::pacer::FramePacer;
use crate::controllers::chaos::ports::display::DisplayPort;
use crate::controllers::chaos::ports::input::InputPort;
use crate::controllers::chaos::ports::sleeper::Sleeper;
use crate::controllers::chaos::state::AppState;
use crate::core::actions::chaos_game::chaos_game::ChaosGame;
use crate::core::actions::chaos_game::ports::random_source::RandomSource;
use crate::core::config::chaos_config::ChaosConfig;
use crate::core::data::colour::Colour;
use crate::core::data::pixel_buffer::PixelBuffer;
use crate::core::data::surface::Surface;
use crate::core::data::triangle::Triangle;
use std::time::{Duration, Instant};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrameReport {
    pub elapsed: Duration,
    pub delay: Duration,
}

impl FrameReport {
    #[must_use]
    pub fn overran(&self) -> bool {
        self.delay.is_zero()
    }
}

/// Fixed-rate frame loop: poll input, run one batch, present, sleep.
///
/// Owns the application state and every collaborator; nothing here is
/// shared with another thread.
pub struct ChaosController<D, I, S, R>
where
    D: DisplayPort,
    I: InputPort,
    S: Sleeper,
    R: RandomSource,
{
    state: AppState,
    display: D,
    input: I,
    sleeper: S,
    rng: R,
    pacer: FramePacer,
    iterations_per_frame: u32,
    foreground: Colour,
    frames: u64,
}

impl<D, I, S, R> ChaosController<D, I, S, R>
where
    D: DisplayPort,
    I: InputPort,
    S: Sleeper,
    R: RandomSource,
{
    pub fn new(config: &ChaosConfig, display: D, input: I, sleeper: S, mut rng: R) -> ChaosResult<Self> {
        let surface = Surface::new(config.width, config.height)?;
        let triangle = Triangle::inset(surface, config.margin)?;
        let game = ChaosGame::new(triangle, &mut rng);

        tracing::info!(
            width = surface.width(),
            height = surface.height(),
            vertices = ?triangle.vertices(),
            start = ?game.current(),
            "initialised chaos game"
        );

        let state = AppState::new(PixelBuffer::new(surface), game);

        Self::with_state(state, config, display, input, sleeper, rng)
    }

    pub fn with_state(
        state: AppState,
        config: &ChaosConfig,
        display: D,
        input: I,
        sleeper: S,
        rng: R,
    ) -> ChaosResult<Self> {
        let pacer = FramePacer::from_max_fps(config.max_fps)?;

        Ok(Self {
            state,
            display,
            input,
            sleeper,
            rng,
            pacer,
            iterations_per_frame: config.iterations_per_frame,
            foreground: config.foreground,
            frames: 0,
        })
    }

    #[must_use]
    pub fn state(&self) -> &AppState {
        &self.state
    }

    #[must_use]
    pub fn frames(&self) -> u64 {
        self.frames
    }

    /// Iterates until a close request has been seen, then returns the number
    /// of frames drawn. The frame that observed the close still completes.
    pub fn run(&mut self) -> ChaosResult<u64> {
        while !self.state.exit_requested() {
            self.iterate()?;
        }

        tracing::info!(frames = self.frames, "close requested; leaving frame loop");

        Ok(self.frames)
    }

    pub fn iterate(&mut self) -> ChaosResult<FrameReport> {
        let start = Instant::now();

        for event in self.input.drain_events() {
            self.handle_event(event)?;
        }

        self.state
            .advance(self.iterations_per_frame, self.foreground, &mut self.rng);
        self.display.present(self.state.buffer())?;
        self.frames += 1;

        let elapsed = start.elapsed();
        let delay = self.pacer.delay_after(elapsed);

        if delay.is_zero() {
            tracing::trace!(
                frame = self.frames,
                elapsed_ms = elapsed.as_secs_f64() * 1000.0,
                "frame overran budget"
            );
        } else {
            self.sleeper.sleep(delay);
        }

        Ok(FrameReport { elapsed, delay })
    }

    fn handle_event(&mut self, event: InputEvent) -> ChaosResult<()> {
        match event {
            InputEvent::CloseRequested => {
                self.state.request_exit();
            }
            InputEvent::Zoom(direction) => {
                self.state.zoom(direction);

                let camera = self.state.camera();
                tracing::debug!(
                    scale = camera.scale(),
                    offset_x = camera.offset().x,
                    offset_y = camera.offset().y,
                    "camera zoomed"
                );
            }
            InputEvent::ClearRequested => {
                self.state.clear();
                tracing::debug!("pixel buffer cleared");
            }
            InputEvent::SurfaceResized { width, height } => {
                self.display.resize_surface(width, height)?;
            }
            InputEvent::Ignored => {}
        }

        Ok(())
    }
}
