//! Demo application state: a time picker over host-owned bindings.

use crossterm::event::{Event, KeyCode, KeyEventKind};

use wheelpicker::error::Result;
use wheelpicker::{
    Action, Binding, Config, EventHandler, Picker, PickerState, WheelColumn, WheelPicker, log,
};

pub struct App {
    pub hours: Binding,
    pub minutes: Binding,
    pub seconds: Binding,
    pub picker: WheelPicker,
    pub state: PickerState,
    pub should_quit: bool,
}

impl App {
    pub fn new(config: &Config) -> Result<Self> {
        let hours = Binding::new(0);
        let minutes = Binding::new(0);
        let seconds = Binding::new(0);

        // Each column uses a different value type.
        let columns = [
            WheelColumn::new(hours.clone(), 0u8..24).suffix("h"),
            WheelColumn::new(minutes.clone(), 0u32..60).suffix("m"),
            WheelColumn::new(seconds.clone(), (0..60).map(|s| format!("{:02}", s))).suffix("s"),
        ];

        let mut builder = WheelPicker::builder()
            .height(config.height())
            .label_inset(config.label_inset());
        for (i, column) in columns.into_iter().take(config.columns()).enumerate() {
            if i > 0 {
                builder = builder.separator(config.separator());
            }
            builder = builder.column(column.cyclic(config.cyclic()));
        }

        Ok(Self {
            hours,
            minutes,
            seconds,
            picker: builder.build()?,
            state: PickerState::new(),
            should_quit: false,
        })
    }

    /// Handle a terminal event. Returns true if a redraw is needed.
    pub fn handle_event(&mut self, event: &Event) -> bool {
        if let Event::Key(key) = event {
            if key.kind == KeyEventKind::Press && key.code == KeyCode::Char('r') {
                self.reset();
                return true;
            }
        }
        if let Event::Resize(..) = event {
            return true;
        }

        match EventHandler::handle_event(&self.picker, &mut self.state, event) {
            Action::Quit => {
                self.should_quit = true;
                false
            }
            action => self.picker.apply(&mut self.state, action),
        }
    }

    /// Write zero into every binding from the host side.
    pub fn reset(&mut self) {
        for binding in [&self.hours, &self.minutes, &self.seconds] {
            binding.set(0);
        }
        log::log_event("host reset all selections");
    }

    /// The current choice as displayed, e.g. `9h : 41m : 05s`.
    pub fn selected_text(&self) -> String {
        let mut text = String::new();
        for (i, column) in self.picker.columns().iter().enumerate() {
            if i > 0 {
                let separator = self.picker.separator(i - 1);
                if !separator.is_empty() {
                    text.push(' ');
                    text.push_str(separator);
                }
                text.push(' ');
            }
            if let Some(item) = column.selected_item() {
                text.push_str(column.prefix_text());
                text.push_str(item);
                text.push_str(column.suffix_text());
            }
        }
        text
    }
}
