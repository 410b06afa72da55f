//! Multi-column wheel picker for ratatui.
//!
//! A [`WheelPicker`] shows one to three side-by-side [`WheelColumn`]s, each
//! bound to an externally owned selection index through a [`Binding`]. The
//! host keeps a clone of every binding, writes to it whenever it likes, and
//! reads the user's choice back after each event.
//!
//! # Example
//!
//! ```
//! use ratatui::{buffer::Buffer, layout::Rect, widgets::StatefulWidget};
//! use wheelpicker::{Binding, PickerState, WheelColumn, WheelPicker};
//!
//! let hours = Binding::new(9);
//! let minutes = Binding::new(30);
//! let picker = WheelPicker::double(
//!     WheelColumn::new(hours.clone(), 0..24).suffix("h"),
//!     WheelColumn::new(minutes.clone(), 0..60).suffix("m"),
//!     ":",
//! );
//!
//! let area = Rect::new(0, 0, 24, picker.height());
//! let mut buf = Buffer::empty(area);
//! let mut state = PickerState::new();
//! StatefulWidget::render(&picker, area, &mut buf, &mut state);
//!
//! minutes.set(45); // shows up on the next render
//! ```

pub mod binding;
pub mod config;
pub mod error;
pub mod events;
pub mod log;
pub mod picker;
pub mod scroll;
pub mod tui;

pub use binding::Binding;
pub use config::Config;
pub use error::{ConfigError, PickerError, WheelError};
pub use events::{Action, EventHandler};
pub use picker::Picker;
pub use tui::components::{PickerBuilder, PickerState, WheelColumn, WheelPicker};
