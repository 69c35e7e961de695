use crate::controllers::chaos::events::input_event::InputEvent;
use crate::controllers::chaos::ports::input::InputPort;
use crate::input::gui::events::translate_window_event;
use std::time::Duration;
use winit::event::Event;
use winit::event_loop::EventLoop;
use winit::platform::pump_events::{EventLoopExtPumpEvents, PumpStatus};
use winit::window::WindowId;

/// Input adapter that pumps the winit event loop without blocking.
pub struct WinitInput {
    event_loop: EventLoop<()>,
    window_id: WindowId,
}

impl WinitInput {
    #[must_use]
    pub fn new(event_loop: EventLoop<()>, window_id: WindowId) -> Self {
        Self {
            event_loop,
            window_id,
        }
    }
}

impl InputPort for WinitInput {
    fn drain_events(&mut self) -> Vec<InputEvent> {
        let window_id = self.window_id;
        let mut events = Vec::new();

        let status = self
            .event_loop
            .pump_events(Some(Duration::ZERO), |event, _| {
                if let Event::WindowEvent {
                    window_id: id,
                    ref event,
                } = event
                {
                    if id != window_id {
                        return;
                    }

                    let translated = translate_window_event(event);
                    if translated != InputEvent::Ignored {
                        events.push(translated);
                    }
                }
            });

        if let PumpStatus::Exit(code) = status {
            tracing::debug!(code, "event loop asked to exit");
            events.push(InputEvent::CloseRequested);
        }

        events
    }
}
