use crate::controllers::chaos::events::input_event::InputEvent;
use crate::core::data::camera::ZoomDirection;
use winit::event::{ElementState, MouseButton, MouseScrollDelta, WindowEvent};

/// Maps a winit window event onto the handful of inputs the frame loop acts
/// on. Anything else becomes [`InputEvent::Ignored`].
pub fn translate_window_event(event: &WindowEvent) -> InputEvent {
    match event {
        WindowEvent::CloseRequested => InputEvent::CloseRequested,
        WindowEvent::MouseWheel { delta, .. } => {
            zoom_direction(delta).map_or(InputEvent::Ignored, InputEvent::Zoom)
        }
        WindowEvent::MouseInput { state, button, .. } => mouse_button_event(*state, *button),
        WindowEvent::Resized(size) => InputEvent::SurfaceResized {
            width: size.width,
            height: size.height,
        },
        _ => InputEvent::Ignored,
    }
}

fn zoom_direction(delta: &MouseScrollDelta) -> Option<ZoomDirection> {
    let vertical = match delta {
        MouseScrollDelta::LineDelta(_, y) => f64::from(*y),
        MouseScrollDelta::PixelDelta(position) => position.y,
    };

    if vertical > 0.0 {
        Some(ZoomDirection::In)
    } else if vertical < 0.0 {
        Some(ZoomDirection::Out)
    } else {
        None
    }
}

fn mouse_button_event(state: ElementState, button: MouseButton) -> InputEvent {
    match (state, button) {
        (ElementState::Pressed, MouseButton::Left) => InputEvent::ClearRequested,
        _ => InputEvent::Ignored,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use winit::dpi::{PhysicalPosition, PhysicalSize};

    #[test]
    fn close_request_is_recognised() {
        assert_eq!(
            translate_window_event(&WindowEvent::CloseRequested),
            InputEvent::CloseRequested
        );
    }

    #[test]
    fn resize_carries_physical_size() {
        let event = WindowEvent::Resized(PhysicalSize::new(1848, 1600));

        assert_eq!(
            translate_window_event(&event),
            InputEvent::SurfaceResized {
                width: 1848,
                height: 1600
            }
        );
    }

    #[test]
    fn unrelated_events_are_ignored() {
        assert_eq!(
            translate_window_event(&WindowEvent::Focused(true)),
            InputEvent::Ignored
        );
        assert_eq!(
            translate_window_event(&WindowEvent::Destroyed),
            InputEvent::Ignored
        );
    }

    #[test]
    fn wheel_up_zooms_in_and_down_zooms_out() {
        assert_eq!(
            zoom_direction(&MouseScrollDelta::LineDelta(0.0, 1.0)),
            Some(ZoomDirection::In)
        );
        assert_eq!(
            zoom_direction(&MouseScrollDelta::LineDelta(0.0, -2.0)),
            Some(ZoomDirection::Out)
        );
        assert_eq!(
            zoom_direction(&MouseScrollDelta::PixelDelta(PhysicalPosition::new(0.0, 12.5))),
            Some(ZoomDirection::In)
        );
    }

    #[test]
    fn horizontal_scroll_does_not_zoom() {
        assert_eq!(zoom_direction(&MouseScrollDelta::LineDelta(3.0, 0.0)), None);
    }

    #[test]
    fn only_left_press_clears() {
        assert_eq!(
            mouse_button_event(ElementState::Pressed, MouseButton::Left),
            InputEvent::ClearRequested
        );
        assert_eq!(
            mouse_button_event(ElementState::Released, MouseButton::Left),
            InputEvent::Ignored
        );
        assert_eq!(
            mouse_button_event(ElementState::Pressed, MouseButton::Right),
            InputEvent::Ignored
        );
    }
}
