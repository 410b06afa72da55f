//! Terminal rendering for wheel pickers.

pub mod components;
pub mod interaction;
pub mod theme;
