use crate::core::data::camera::ZoomDirection;

/// Platform-neutral input, already filtered down to what the frame loop acts on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    CloseRequested,
    Zoom(ZoomDirection),
    /// Wipe the accumulated density and start filling again.
    ClearRequested,
    SurfaceResized { width: u32, height: u32 },
    Ignored,
}
