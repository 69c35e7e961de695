use crate::core::data::colour::Colour;

const DEFAULT_WIDTH: u32 = 924;
const DEFAULT_HEIGHT: u32 = 800;
const DEFAULT_MARGIN: f64 = 50.0;
const DEFAULT_MAX_FPS: u32 = 60;
const DEFAULT_ITERATIONS_PER_FRAME: u32 = 1_000_000;
const DEFAULT_TITLE: &str = "Sierpiński triangle";

/// Startup tunables. Fixed for the lifetime of the process.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChaosConfig {
    pub width: u32,
    pub height: u32,
    /// Distance of the triangle's corners from the surface edges.
    pub margin: f64,
    pub max_fps: u32,
    pub iterations_per_frame: u32,
    pub foreground: Colour,
    pub title: &'static str,
}

impl Default for ChaosConfig {
    fn default() -> Self {
        Self {
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            margin: DEFAULT_MARGIN,
            max_fps: DEFAULT_MAX_FPS,
            iterations_per_frame: DEFAULT_ITERATIONS_PER_FRAME,
            foreground: Colour::WHITE,
            title: DEFAULT_TITLE,
        }
    }
}
