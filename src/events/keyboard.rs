//! Keyboard event handling.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::tui::components::{PickerState, WheelPicker};

use super::Action;

/// Handle keyboard events for the focused column and return the appropriate action.
pub fn handle_key_event(picker: &WheelPicker, state: &PickerState, key: KeyEvent) -> Action {
    let column = state.focused.min(picker.column_count().saturating_sub(1));
    let Some(focused) = picker.column(column) else {
        return Action::None;
    };
    let page = focused.visible_rows().max(1) as i32;

    match key.code {
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => Action::Quit,
        KeyCode::Char('q') | KeyCode::Esc => Action::Quit,

        KeyCode::Up | KeyCode::Char('k') => Action::Step { column, delta: -1 },
        KeyCode::Down | KeyCode::Char('j') => Action::Step { column, delta: 1 },
        KeyCode::PageUp => Action::Step { column, delta: -page },
        KeyCode::PageDown => Action::Step { column, delta: page },
        KeyCode::Home | KeyCode::Char('g') => Action::SelectFirst(column),
        KeyCode::End | KeyCode::Char('G') => Action::SelectLast(column),

        KeyCode::BackTab => Action::FocusPrev,
        KeyCode::Tab if key.modifiers.contains(KeyModifiers::SHIFT) => Action::FocusPrev,
        KeyCode::Left | KeyCode::Char('h') => Action::FocusPrev,
        KeyCode::Right | KeyCode::Char('l') | KeyCode::Tab => Action::FocusNext,

        _ => Action::None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::binding::Binding;
    use crate::tui::components::WheelColumn;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn picker() -> WheelPicker {
        WheelPicker::double(
            WheelColumn::new(Binding::new(0), 0..24),
            WheelColumn::new(Binding::new(0), Vec::<u8>::new()),
            ":",
        )
    }

    #[test]
    fn test_navigation_targets_focused_column() {
        let picker = picker();
        let state = PickerState::new();

        assert_eq!(
            handle_key_event(&picker, &state, key(KeyCode::Down)),
            Action::Step { column: 0, delta: 1 }
        );
        assert_eq!(
            handle_key_event(&picker, &state, key(KeyCode::Char('k'))),
            Action::Step { column: 0, delta: -1 }
        );
        assert_eq!(
            handle_key_event(&picker, &state, key(KeyCode::PageDown)),
            Action::Step { column: 0, delta: 5 }
        );
        assert_eq!(
            handle_key_event(&picker, &state, key(KeyCode::End)),
            Action::SelectLast(0)
        );
    }

    #[test]
    fn test_jumps_on_empty_column_are_noops() {
        let picker = picker();
        let mut state = PickerState {
            focused: 1,
            ..PickerState::new()
        };

        let end = handle_key_event(&picker, &state, key(KeyCode::End));
        let home = handle_key_event(&picker, &state, key(KeyCode::Home));
        assert_eq!(end, Action::SelectLast(1));
        assert_eq!(home, Action::SelectFirst(1));

        assert!(!picker.apply(&mut state, end));
        assert!(!picker.apply(&mut state, home));
        assert_eq!(picker.selection(1).get(), 0);
    }

    #[test]
    fn test_jumps_move_focused_binding() {
        let picker = picker();
        let mut state = PickerState::new();

        let end = handle_key_event(&picker, &state, key(KeyCode::End));
        assert!(picker.apply(&mut state, end));
        assert_eq!(picker.selection(0).get(), 23);

        let home = handle_key_event(&picker, &state, key(KeyCode::Char('g')));
        assert!(picker.apply(&mut state, home));
        assert_eq!(picker.selection(0).get(), 0);
    }

    #[test]
    fn test_focus_and_quit_keys() {
        let picker = picker();
        let state = PickerState::new();

        assert_eq!(handle_key_event(&picker, &state, key(KeyCode::Tab)), Action::FocusNext);
        assert_eq!(handle_key_event(&picker, &state, key(KeyCode::Left)), Action::FocusPrev);
        assert_eq!(handle_key_event(&picker, &state, key(KeyCode::Esc)), Action::Quit);
        assert_eq!(
            handle_key_event(
                &picker,
                &state,
                KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL)
            ),
            Action::Quit
        );
        assert_eq!(handle_key_event(&picker, &state, key(KeyCode::Char('x'))), Action::None);
    }
}
