//! Test doubles shared across unit tests.

use crate::controllers::chaos::events::input_event::InputEvent;
use crate::controllers::chaos::ports::display::{DisplayError, DisplayPort};
use crate::controllers::chaos::ports::input::InputPort;
use crate::controllers::chaos::ports::sleeper::Sleeper;
use crate::core::actions::chaos_game::ports::random_source::RandomSource;
use crate::core::data::pixel_buffer::PixelBuffer;
use std::collections::VecDeque;
use std::time::Duration;

/// Replays fixed unit samples and vertex indices, cycling when exhausted.
#[derive(Debug, Clone)]
pub struct ScriptedRandom {
    units: Vec<f64>,
    indices: Vec<usize>,
    unit_cursor: usize,
    index_cursor: usize,
}

impl ScriptedRandom {
    pub fn new(units: Vec<f64>, indices: Vec<usize>) -> Self {
        assert!(!units.is_empty() && !indices.is_empty());

        Self {
            units,
            indices,
            unit_cursor: 0,
            index_cursor: 0,
        }
    }

    pub fn always_vertex(index: usize) -> Self {
        Self::new(vec![0.5], vec![index])
    }
}

impl RandomSource for ScriptedRandom {
    fn next_unit(&mut self) -> f64 {
        let value = self.units[self.unit_cursor % self.units.len()];
        self.unit_cursor += 1;
        value
    }

    fn next_index(&mut self, bound: usize) -> usize {
        let value = self.indices[self.index_cursor % self.indices.len()];
        self.index_cursor += 1;
        assert!(value < bound, "scripted index {value} out of range 0..{bound}");
        value
    }
}

#[derive(Debug, Default)]
pub struct RecordingDisplay {
    pub presented: Vec<usize>,
    pub resized: Vec<(u32, u32)>,
    pub fail_on_present: Option<usize>,
    pub present_delay: Duration,
}

impl DisplayPort for RecordingDisplay {
    fn present(&mut self, buffer: &PixelBuffer) -> Result<(), DisplayError> {
        if !self.present_delay.is_zero() {
            std::thread::sleep(self.present_delay);
        }

        if self.fail_on_present == Some(self.presented.len()) {
            return Err(DisplayError::Render("scripted failure".to_owned()));
        }

        self.presented.push(buffer.lit_pixel_count());
        Ok(())
    }

    fn resize_surface(&mut self, width: u32, height: u32) -> Result<(), DisplayError> {
        self.resized.push((width, height));
        Ok(())
    }
}

/// Hands out one batch of events per poll; empty once the script runs out.
#[derive(Debug, Default)]
pub struct ScriptedInput {
    frames: VecDeque<Vec<InputEvent>>,
    pub polls: usize,
}

impl ScriptedInput {
    pub fn new(frames: Vec<Vec<InputEvent>>) -> Self {
        Self {
            frames: frames.into(),
            polls: 0,
        }
    }
}

impl InputPort for ScriptedInput {
    fn drain_events(&mut self) -> Vec<InputEvent> {
        self.polls += 1;
        self.frames.pop_front().unwrap_or_default()
    }
}

#[derive(Debug, Default)]
pub struct RecordingSleeper {
    pub sleeps: Vec<Duration>,
}

impl Sleeper for RecordingSleeper {
    fn sleep(&mut self, duration: Duration) {
        self.sleeps.push(duration);
    }
}
