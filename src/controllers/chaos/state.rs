use crate::core::actions::chaos_game::chaos_game::ChaosGame;
use crate::core::actions::chaos_game::ports::random_source::RandomSource;
use crate::core::data::camera::{Camera, ZoomDirection};
use crate::core::data::colour::Colour;
use crate::core::data::pixel_buffer::PixelBuffer;
use crate::core::data::point::Point;

/// Everything the frame loop mutates. One instance per run, owned by the
/// controller.
#[derive(Debug, Clone)]
pub struct AppState {
    buffer: PixelBuffer,
    game: ChaosGame,
    camera: Camera,
    exit_requested: bool,
}

impl AppState {
    #[must_use]
    pub fn new(buffer: PixelBuffer, game: ChaosGame) -> Self {
        Self {
            buffer,
            game,
            camera: Camera::default(),
            exit_requested: false,
        }
    }

    #[must_use]
    pub fn buffer(&self) -> &PixelBuffer {
        &self.buffer
    }

    #[must_use]
    pub fn game(&self) -> &ChaosGame {
        &self.game
    }

    #[must_use]
    pub fn camera(&self) -> &Camera {
        &self.camera
    }

    #[must_use]
    pub fn exit_requested(&self) -> bool {
        self.exit_requested
    }

    pub fn request_exit(&mut self) {
        self.exit_requested = true;
    }

    pub fn advance<R: RandomSource + ?Sized>(&mut self, iterations: u32, colour: Colour, rng: &mut R) {
        self.game
            .run_batch(&mut self.buffer, &self.camera, colour, iterations, rng);
    }

    pub fn clear(&mut self) {
        self.buffer.clear();
    }

    /// Zooms about the surface centre. Density painted under the old
    /// projection no longer lines up, so the buffer starts over.
    pub fn zoom(&mut self, direction: ZoomDirection) {
        let anchor = Point::new(
            f64::from(self.buffer.width() / 2),
            f64::from(self.buffer.height() / 2),
        );

        self.camera.zoom(direction, anchor);
        self.buffer.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::data::surface::Surface;
    use crate::core::data::triangle::Triangle;
    use crate::core::random::seeded_random::SeededRandom;

    fn create_state() -> AppState {
        let surface = Surface::new(924, 800).unwrap();
        let triangle = Triangle::inset(surface, 50.0).unwrap();

        AppState::new(
            PixelBuffer::new(surface),
            ChaosGame::starting_at(triangle, triangle.centroid()),
        )
    }

    #[test]
    fn new_state_is_blank_and_running() {
        let state = create_state();

        assert!(!state.exit_requested());
        assert!(state.camera().is_identity());
        assert_eq!(state.buffer().lit_pixel_count(), 0);
    }

    #[test]
    fn advance_accumulates_without_clearing() {
        let mut state = create_state();
        let mut rng = SeededRandom::from_seed(4);

        state.advance(5_000, Colour::WHITE, &mut rng);
        let first = state.buffer().lit_pixel_count();
        state.advance(5_000, Colour::WHITE, &mut rng);

        assert!(first > 0);
        assert!(state.buffer().lit_pixel_count() >= first);
    }

    #[test]
    fn zoom_clears_buffer_and_moves_camera() {
        let mut state = create_state();
        let mut rng = SeededRandom::from_seed(4);
        state.advance(1_000, Colour::WHITE, &mut rng);
        let current = state.game().current();

        state.zoom(ZoomDirection::In);

        assert_eq!(state.buffer().lit_pixel_count(), 0);
        assert!((state.camera().scale() - 1.1).abs() < 1e-12);
        assert_eq!(state.game().current(), current);
    }

    #[test]
    fn zoom_anchors_on_surface_centre() {
        let mut state = create_state();
        let centre = Point::new(462.0, 400.0);

        state.zoom(ZoomDirection::Out);

        let projected = state.camera().project(centre);
        assert!((projected.x - centre.x).abs() < 1e-9);
        assert!((projected.y - centre.y).abs() < 1e-9);
    }

    #[test]
    fn request_exit_sets_flag() {
        let mut state = create_state();
        state.request_exit();

        assert!(state.exit_requested());
    }
}
