use crate::core::actions::chaos_game::point_generator::{random_point_in_triangle, step};
use crate::core::actions::chaos_game::ports::random_source::RandomSource;
use crate::core::data::camera::Camera;
use crate::core::data::colour::Colour;
use crate::core::data::pixel_buffer::PixelBuffer;
use crate::core::data::point::Point;
use crate::core::data::triangle::Triangle;

/// Algorithm state: the fixed triangle and the current iterate.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChaosGame {
    triangle: Triangle,
    current: Point,
}

impl ChaosGame {
    /// Starts from a uniformly random point inside `triangle`.
    pub fn new<R: RandomSource + ?Sized>(triangle: Triangle, rng: &mut R) -> Self {
        let current = random_point_in_triangle(&triangle, rng);

        Self { triangle, current }
    }

    #[must_use]
    pub fn starting_at(triangle: Triangle, current: Point) -> Self {
        Self { triangle, current }
    }

    #[must_use]
    pub fn triangle(&self) -> &Triangle {
        &self.triangle
    }

    #[must_use]
    pub fn current(&self) -> Point {
        self.current
    }

    /// Paints the current point then advances it, `iterations` times.
    ///
    /// The buffer is never cleared here; density builds up across batches.
    pub fn run_batch<R: RandomSource + ?Sized>(
        &mut self,
        buffer: &mut PixelBuffer,
        camera: &Camera,
        colour: Colour,
        iterations: u32,
        rng: &mut R,
    ) {
        let mut current = self.current;

        for _ in 0..iterations {
            buffer.paint(camera.project(current), colour);
            current = step(current, &self.triangle, rng);
        }

        self.current = current;
    }
}
