use std::time::Duration;
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum FramePacerError {
    #[error("target frame rate must be greater than zero")]
    ZeroFps,
}

/// Caps the loop at `max_fps` by sleeping off whatever is left of each
/// frame's budget.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FramePacer {
    budget: Duration,
}

impl FramePacer {
    pub fn from_max_fps(max_fps: u32) -> Result<Self, FramePacerError> {
        if max_fps == 0 {
            return Err(FramePacerError::ZeroFps);
        }

        Ok(Self {
            budget: Duration::from_secs(1) / max_fps,
        })
    }

    #[must_use]
    pub fn budget(&self) -> Duration {
        self.budget
    }

    /// `max(0, budget - elapsed)`. An overrun frame gets no sleep and no
    /// credit carried into the next one.
    #[must_use]
    pub fn delay_after(&self, elapsed: Duration) -> Duration {
        self.budget.saturating_sub(elapsed)
    }
}
