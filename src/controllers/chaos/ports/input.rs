use crate::controllers::chaos::events::input_event::InputEvent;

pub trait InputPort {
    /// Everything queued since the previous call. Never blocks.
    fn drain_events(&mut self) -> Vec<InputEvent>;
}
