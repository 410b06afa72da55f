//! Central event handler that routes keyboard and mouse events.

use crossterm::event::{Event, KeyEventKind};

use crate::tui::components::{PickerState, WheelPicker};

use super::Action;
use super::keyboard::handle_key_event;
use super::mouse::handle_mouse_event;

/// Central event handler for a picker.
pub struct EventHandler;

impl EventHandler {
    /// Handle a crossterm event and return an action.
    pub fn handle_event(picker: &WheelPicker, state: &mut PickerState, event: &Event) -> Action {
        match event {
            Event::Key(key) if key.kind == KeyEventKind::Press => {
                handle_key_event(picker, state, *key)
            }
            Event::Mouse(mouse) => handle_mouse_event(state, *mouse),
            _ => Action::None,
        }
    }
}
