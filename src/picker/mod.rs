//! Generic picker module
//!
//! Provides the selection behaviour shared by every wheel column: stepping,
//! jumping, and display clamping over an externally owned index.

mod traits;

pub use traits::Picker;
