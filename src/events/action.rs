//! Action enum for decoupling input handling from state changes.

/// Actions that can be dispatched from event handlers.
///
/// These represent user intents and are applied by the picker to update
/// bindings and focus.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// No-op action
    None,
    /// Leave the picker
    Quit,

    // === Selection ===
    /// Move a column's selection by `delta` rows
    Step { column: usize, delta: i32 },
    /// Snap a column to a specific row
    Select { column: usize, index: usize },
    /// Jump a column to its first row
    SelectFirst(usize),
    /// Jump a column to its last row
    SelectLast(usize),

    // === Focus ===
    FocusNext,
    FocusPrev,
    Focus(usize),
}
