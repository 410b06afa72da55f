//! Picker trait definition
//!
//! A generic trait for list-based selection components whose selection
//! lives outside the component.

/// A list picker backed by an externally owned selection index.
///
/// Setting the selection goes through `&self` because the index is stored
/// in a shared binding, not in the picker itself.
///
/// # Example
///
/// ```ignore
/// struct Letters {
///     items: Vec<String>,
///     selected: Binding,
/// }
///
/// impl Picker for Letters {
///     type Item = String;
///
///     fn items(&self) -> &[Self::Item] {
///         &self.items
///     }
///
///     fn selected_index(&self) -> usize {
///         self.selected.get()
///     }
///
///     fn set_selected_index(&self, index: usize) -> bool {
///         self.selected.set(index)
///     }
/// }
/// ```
pub trait Picker {
    /// The type of items in the picker
    type Item;

    /// Get the list of items
    fn items(&self) -> &[Self::Item];

    /// Get the raw selected index. May be out of range.
    fn selected_index(&self) -> usize;

    /// Store a new selected index. Returns true if it changed.
    fn set_selected_index(&self, index: usize) -> bool;

    /// Whether stepping past either end wraps around
    fn wraps(&self) -> bool {
        false
    }

    /// Get the number of items
    fn len(&self) -> usize {
        self.items().len()
    }

    /// Check if the picker is empty
    fn is_empty(&self) -> bool {
        self.items().is_empty()
    }

    /// The selected index clamped into range, or `None` when empty.
    fn display_index(&self) -> Option<usize> {
        if self.is_empty() {
            None
        } else {
            Some(self.selected_index().min(self.len() - 1))
        }
    }

    /// Get the currently displayed item
    fn selected_item(&self) -> Option<&Self::Item> {
        self.display_index().and_then(|i| self.items().get(i))
    }

    /// Select a specific index. Out-of-range indices are ignored.
    fn select_index(&self, index: usize) -> bool {
        if index < self.len() {
            self.set_selected_index(index)
        } else {
            false
        }
    }

    /// Move the selection by `delta` rows, saturating or wrapping at the ends.
    fn step(&self, delta: i32) -> bool {
        let Some(current) = self.display_index() else {
            return false;
        };
        let len = self.len() as i64;
        let target = current as i64 + delta as i64;
        let target = if self.wraps() {
            target.rem_euclid(len)
        } else {
            target.clamp(0, len - 1)
        };
        self.set_selected_index(target as usize)
    }

    /// Select the next item
    fn select_next(&self) -> bool {
        self.step(1)
    }

    /// Select the previous item
    fn select_prev(&self) -> bool {
        self.step(-1)
    }

    /// Jump to the first item
    fn select_first(&self) -> bool {
        self.select_index(0)
    }

    /// Jump to the last item
    fn select_last(&self) -> bool {
        match self.len() {
            0 => false,
            len => self.select_index(len - 1),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    struct Letters {
        items: Vec<&'static str>,
        selected: Cell<usize>,
        cyclic: bool,
    }

    impl Letters {
        fn new(selected: usize, cyclic: bool) -> Self {
            Self {
                items: vec!["a", "b", "c"],
                selected: Cell::new(selected),
                cyclic,
            }
        }
    }

    impl Picker for Letters {
        type Item = &'static str;

        fn items(&self) -> &[Self::Item] {
            &self.items
        }

        fn selected_index(&self) -> usize {
            self.selected.get()
        }

        fn set_selected_index(&self, index: usize) -> bool {
            self.selected.replace(index) != index
        }

        fn wraps(&self) -> bool {
            self.cyclic
        }
    }

    #[test]
    fn test_step_saturates() {
        let picker = Letters::new(2, false);
        assert!(!picker.select_next());
        assert_eq!(picker.selected_index(), 2);

        assert!(picker.step(-10));
        assert_eq!(picker.selected_index(), 0);
    }

    #[test]
    fn test_step_wraps_when_cyclic() {
        let picker = Letters::new(2, true);
        assert!(picker.select_next());
        assert_eq!(picker.selected_index(), 0);

        assert!(picker.select_prev());
        assert_eq!(picker.selected_index(), 2);
    }

    #[test]
    fn test_out_of_range_is_clamped_for_display_only() {
        let picker = Letters::new(9, false);
        assert_eq!(picker.display_index(), Some(2));
        assert_eq!(picker.selected_item(), Some(&"c"));
        assert_eq!(picker.selected_index(), 9);

        assert!(!picker.select_index(5));
        assert_eq!(picker.selected_index(), 9);

        assert!(picker.select_prev());
        assert_eq!(picker.selected_index(), 1);
    }
}
