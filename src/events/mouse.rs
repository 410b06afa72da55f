//! Mouse event handling.
//!
//! Mouse events are resolved against the regions each column registered
//! during the last render.

use crossterm::event::{MouseButton, MouseEvent, MouseEventKind};

use crate::tui::components::PickerState;

use super::Action;

/// Handle mouse events and return the appropriate action.
///
/// Wheel events step the column under the cursor once the scroll
/// accumulator releases a delta; left clicks snap to the clicked row.
pub fn handle_mouse_event(state: &mut PickerState, mouse: MouseEvent) -> Action {
    let x = mouse.column;
    let y = mouse.row;

    let delta = match mouse.kind {
        MouseEventKind::ScrollUp => -1,
        MouseEventKind::ScrollDown => 1,
        MouseEventKind::Down(MouseButton::Left) => return state.regions.handle_click(x, y),
        _ => return Action::None,
    };

    let Some(column) = state.regions.column_at(x, y) else {
        return Action::None;
    };
    match state.scroll.accumulate(column, delta) {
        Some(delta) => Action::Step { column, delta },
        None => Action::None,
    }
}
