//! UI components for the wheel picker.
//!
//! # Component Organization
//!
//! - `wheel_column` - One scrollable, snap-to-row value column
//! - `wheel_picker` - One to three columns laid out side by side
//! - `separators` - Static labels drawn between adjacent columns

mod separators;
mod wheel_column;
mod wheel_picker;

pub use separators::{render_separator_label, separator_width};
pub use wheel_column::{DEFAULT_HEIGHT, DEFAULT_LABEL_INSET, WheelColumn};
pub use wheel_picker::{MAX_COLUMNS, PickerBuilder, PickerState, WheelPicker};
