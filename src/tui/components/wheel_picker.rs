//! Multi-column wheel picker.
//!
//! Lays out one to three [`WheelColumn`]s left to right with optional
//! separator labels in the gaps. Each column talks to its own binding; the
//! picker itself holds no selection state.

use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    widgets::{StatefulWidget, Widget},
};

use crate::binding::Binding;
use crate::error::{PickerError, PickerResult};
use crate::events::Action;
use crate::picker::Picker;
use crate::scroll::ScrollAccumulator;
use crate::tui::interaction::{InteractionRegistry, InteractiveRegion};

use super::separators::{render_separator_label, separator_width};
use super::wheel_column::{DEFAULT_HEIGHT, WheelColumn};

/// Most columns a picker can hold.
pub const MAX_COLUMNS: usize = 3;

#[derive(Debug, Clone)]
pub struct WheelPicker {
    columns: Vec<WheelColumn>,
    /// One entry per gap; empty strings are not drawn.
    separators: Vec<String>,
    height: u16,
}

/// Per-frame interaction state owned by the host.
#[derive(Debug, Default, Clone)]
pub struct PickerState {
    /// Column receiving keyboard input
    pub focused: usize,
    pub regions: InteractionRegistry,
    pub scroll: ScrollAccumulator,
}

impl PickerState {
    pub fn new() -> Self {
        Self::default()
    }
}

/// Configuration-object construction for [`WheelPicker`].
#[derive(Debug, Default)]
pub struct PickerBuilder {
    columns: Vec<WheelColumn>,
    separators: Vec<String>,
    height: Option<u16>,
    label_inset: Option<u16>,
}

impl PickerBuilder {
    pub fn column(mut self, column: WheelColumn) -> Self {
        self.columns.push(column);
        self
    }

    /// Separator for the next gap, in order.
    pub fn separator(mut self, text: impl Into<String>) -> Self {
        self.separators.push(text.into());
        self
    }

    /// Shared height applied to every column.
    pub fn height(mut self, height: u16) -> Self {
        self.height = Some(height);
        self
    }

    /// Inset applied to every column. Defaults to the first column's.
    pub fn label_inset(mut self, label_inset: u16) -> Self {
        self.label_inset = Some(label_inset);
        self
    }

    pub fn build(self) -> PickerResult<WheelPicker> {
        let count = self.columns.len();
        if count == 0 {
            return Err(PickerError::NoColumns);
        }
        if count > MAX_COLUMNS {
            return Err(PickerError::TooManyColumns(count));
        }
        let gaps = count - 1;
        if self.separators.len() > gaps {
            return Err(PickerError::TooManySeparators {
                gaps,
                separators: self.separators.len(),
            });
        }

        let height = self.height.unwrap_or(DEFAULT_HEIGHT);
        let label_inset = self.label_inset.unwrap_or(self.columns[0].inset());
        let columns = self
            .columns
            .into_iter()
            .map(|column| column.height(height).label_inset(label_inset))
            .collect();

        let mut separators = self.separators;
        separators.resize(gaps, String::new());

        Ok(WheelPicker {
            columns,
            separators,
            height,
        })
    }
}

impl WheelPicker {
    pub fn builder() -> PickerBuilder {
        PickerBuilder::default()
    }

    /// One column.
    pub fn single(first: WheelColumn) -> Self {
        Self::from_parts(vec![first], vec![])
    }

    /// Two columns with `middle` between them.
    pub fn double(first: WheelColumn, second: WheelColumn, middle: impl Into<String>) -> Self {
        Self::from_parts(vec![first, second], vec![middle.into()])
    }

    /// Three columns with independent separators in both gaps.
    pub fn triple(
        first: WheelColumn,
        second: WheelColumn,
        third: WheelColumn,
        middle1: impl Into<String>,
        middle2: impl Into<String>,
    ) -> Self {
        Self::from_parts(
            vec![first, second, third],
            vec![middle1.into(), middle2.into()],
        )
    }

    /// Counts are fixed by the callers above, so this never fails.
    /// Height and inset come from the first column so every selection band
    /// lands on the same row.
    fn from_parts(columns: Vec<WheelColumn>, separators: Vec<String>) -> Self {
        let height = columns[0].frame_height();
        let label_inset = columns[0].inset();
        Self {
            columns: columns
                .into_iter()
                .map(|c| c.height(height).label_inset(label_inset))
                .collect(),
            separators,
            height,
        }
    }

    /// Change the shared height of the picker and every column.
    pub fn with_height(mut self, height: u16) -> Self {
        self.height = height;
        self.columns = self.columns.into_iter().map(|c| c.height(height)).collect();
        self
    }

    pub fn column_count(&self) -> usize {
        self.columns.len()
    }

    pub fn column(&self, index: usize) -> Option<&WheelColumn> {
        self.columns.get(index)
    }

    pub fn columns(&self) -> &[WheelColumn] {
        &self.columns
    }

    /// Separator text for gap `gap` (between column `gap` and `gap + 1`).
    pub fn separator(&self, gap: usize) -> &str {
        self.separators.get(gap).map(String::as_str).unwrap_or("")
    }

    /// Binding of column `index`; unused columns report an inert zero.
    pub fn selection(&self, index: usize) -> Binding {
        self.columns
            .get(index)
            .map(|c| c.selection().clone())
            .unwrap_or_else(Binding::inert)
    }

    pub fn height(&self) -> u16 {
        self.height
    }

    /// Horizontal areas of each column within `area`.
    pub fn column_areas(&self, area: Rect) -> Vec<Rect> {
        self.layout(area).0
    }

    /// Column areas plus the area of each drawn separator.
    fn layout(&self, area: Rect) -> (Vec<Rect>, Vec<(usize, Rect)>) {
        let frame = Rect {
            height: area.height.min(self.height),
            ..area
        };

        let mut constraints = Vec::with_capacity(self.columns.len() * 2);
        // Slot in `constraints` for each column, and for each drawn separator.
        let mut column_slots = Vec::with_capacity(self.columns.len());
        let mut separator_slots = Vec::new();
        for (i, _) in self.columns.iter().enumerate() {
            column_slots.push(constraints.len());
            constraints.push(Constraint::Fill(1));
            let width = separator_width(self.separator(i));
            if width > 0 {
                separator_slots.push((i, constraints.len()));
                constraints.push(Constraint::Length(width));
            }
        }

        let areas = Layout::horizontal(constraints).split(frame);
        (
            column_slots.into_iter().map(|slot| areas[slot]).collect(),
            separator_slots
                .into_iter()
                .map(|(gap, slot)| (gap, areas[slot]))
                .collect(),
        )
    }

    /// Apply an action to the bindings and focus. Returns true if anything changed.
    pub fn apply(&self, state: &mut PickerState, action: Action) -> bool {
        let count = self.columns.len();
        let before = state.focused;
        let changed = match action {
            Action::None | Action::Quit => false,
            Action::Step { column, delta } => self
                .columns
                .get(column)
                .is_some_and(|c| c.step(delta)),
            Action::Select { column, index } => match self.columns.get(column) {
                Some(c) => {
                    state.focused = column;
                    c.select(index)
                }
                None => false,
            },
            Action::SelectFirst(column) => {
                self.columns.get(column).is_some_and(|c| c.select_first())
            }
            Action::SelectLast(column) => {
                self.columns.get(column).is_some_and(|c| c.select_last())
            }
            Action::Focus(column) => {
                if column < count {
                    state.focused = column;
                }
                false
            }
            Action::FocusNext => {
                state.focused = (state.focused.min(count - 1) + 1) % count;
                false
            }
            Action::FocusPrev => {
                state.focused = state
                    .focused
                    .min(count - 1)
                    .checked_sub(1)
                    .unwrap_or(count - 1);
                false
            }
        };

        if changed {
            crate::log::log_event(&format!("{:?} -> {:?}", action, self.selection_values()));
        }
        changed || before != state.focused
    }

    /// Current binding values of every column.
    pub fn selection_values(&self) -> Vec<usize> {
        self.columns.iter().map(|c| c.selected_index()).collect()
    }
}

impl StatefulWidget for &WheelPicker {
    type State = PickerState;

    fn render(self, area: Rect, buf: &mut Buffer, state: &mut Self::State) {
        state.regions.clear();
        state.focused = state.focused.min(self.columns.len() - 1);

        let (column_areas, separator_areas) = self.layout(area);

        // Every column shares height and inset, so the selection band of
        // each one sits on the same centre row.
        let mut label_row = None;
        for (i, (column, column_area)) in self.columns.iter().zip(column_areas).enumerate() {
            let (wheel, offset) = column.render_column(column_area, buf, i == state.focused);
            if label_row.is_none() && !wheel.is_empty() {
                label_row = Some(WheelColumn::centre_row(wheel));
            }
            state.regions.register(InteractiveRegion {
                column: i,
                bounds: Rect {
                    height: column_area.height.min(self.height),
                    ..column_area
                },
                wheel,
                offset,
                len: column.len(),
            });
        }

        if let Some(y) = label_row {
            for (gap, sep_area) in separator_areas {
                render_separator_label(buf, sep_area, self.separator(gap), y);
            }
        }
    }
}

impl Widget for &WheelPicker {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let mut state = PickerState::new();
        StatefulWidget::render(self, area, buf, &mut state);
    }
}
