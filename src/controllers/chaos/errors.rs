use crate::controllers::chaos::frame::pacer::FramePacerError;
use crate::controllers::chaos::ports::display::DisplayError;
use crate::core::data::surface::SurfaceError;
use crate::core::data::triangle::TriangleError;
use thiserror::Error;

pub type ChaosResult<T> = std::result::Result<T, ChaosError>;

#[derive(Debug, Error)]
pub enum ChaosError {
    #[error("invalid surface: {0}")]
    Surface(#[from] SurfaceError),
    #[error("invalid triangle: {0}")]
    Triangle(#[from] TriangleError),
    #[error("invalid frame rate: {0}")]
    Pacer(#[from] FramePacerError),
    #[error(transparent)]
    Display(#[from] DisplayError),
}
