//! Event handling for wheel pickers.
//!
//! Crossterm events are translated into [`Action`]s, which the picker then
//! applies to its bindings with [`WheelPicker::apply`](crate::WheelPicker::apply).

mod action;
mod handler;
mod keyboard;
mod mouse;

pub use action::Action;
pub use handler::EventHandler;
pub use keyboard::handle_key_event;
pub use mouse::handle_mouse_event;
