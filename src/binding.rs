//! Shared selection index.
//!
//! A [`Binding`] is the two-way link between a host and a wheel column. The
//! host keeps one clone, the column keeps another; writes from either side
//! are visible to the other on the next read. Bindings are `Rc` based and
//! therefore confined to the UI thread.

use std::cell::Cell;
use std::fmt;
use std::rc::Rc;

/// A shared, externally owned selection index.
#[derive(Clone)]
pub struct Binding(Inner);

#[derive(Clone)]
enum Inner {
    Shared(Rc<Cell<usize>>),
    /// Placeholder for columns that were never supplied. Writes are dropped.
    Constant(usize),
}

impl Binding {
    /// Create a new shared binding holding `value`.
    pub fn new(value: usize) -> Self {
        Self(Inner::Shared(Rc::new(Cell::new(value))))
    }

    /// Create an inert binding that always reads `value` and ignores writes.
    pub fn constant(value: usize) -> Self {
        Self(Inner::Constant(value))
    }

    /// The inert zero binding used for unused picker columns.
    pub fn inert() -> Self {
        Self::constant(0)
    }

    /// Read the current value.
    pub fn get(&self) -> usize {
        match &self.0 {
            Inner::Shared(cell) => cell.get(),
            Inner::Constant(value) => *value,
        }
    }

    /// Write a new value. Returns true if the stored value changed.
    pub fn set(&self, value: usize) -> bool {
        match &self.0 {
            Inner::Shared(cell) => cell.replace(value) != value,
            Inner::Constant(_) => false,
        }
    }
}

impl fmt::Debug for Binding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.0 {
            Inner::Shared(cell) => f.debug_tuple("Binding").field(&cell.get()).finish(),
            Inner::Constant(value) => f.debug_tuple("Binding::constant").field(value).finish(),
        }
    }
}

impl From<usize> for Binding {
    fn from(value: usize) -> Self {
        Self::new(value)
    }
}
