//! Mouse hit regions for wheel columns.
//!
//! Every render of a picker registers one region per column. Mouse events
//! are then resolved against the regions of the last frame, so clicks land
//! on exactly the rows that were drawn.

use ratatui::layout::{Position, Rect};

use crate::events::Action;

/// The on-screen footprint of one column in the last frame.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InteractiveRegion {
    /// Column index inside the picker
    pub column: usize,
    /// Full column frame
    pub bounds: Rect,
    /// Rows that show items
    pub wheel: Rect,
    /// Item shown in the first wheel row; negative rows above the list are blank
    pub offset: isize,
    /// Number of items in the column
    pub len: usize,
}

impl InteractiveRegion {
    pub fn contains(&self, x: u16, y: u16) -> bool {
        self.bounds.contains(Position::new(x, y))
    }

    /// Item index under screen row `y`, if a row was drawn there.
    pub fn item_at(&self, x: u16, y: u16) -> Option<usize> {
        if !self.wheel.contains(Position::new(x, y)) {
            return None;
        }
        let index = usize::try_from(self.offset + (y - self.wheel.y) as isize).ok()?;
        (index < self.len).then_some(index)
    }
}

/// Registry of interactive regions, rebuilt each frame during render.
#[derive(Debug, Default, Clone)]
pub struct InteractionRegistry {
    regions: Vec<InteractiveRegion>,
}

impl InteractionRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Clear all regions (call at start of each render)
    pub fn clear(&mut self) {
        self.regions.clear();
    }

    pub fn register(&mut self, region: InteractiveRegion) {
        self.regions.push(region);
    }

    pub fn regions(&self) -> &[InteractiveRegion] {
        &self.regions
    }

    /// Find the region at the given position
    pub fn region_at(&self, x: u16, y: u16) -> Option<&InteractiveRegion> {
        self.regions.iter().find(|r| r.contains(x, y))
    }

    /// A click selects the row under the cursor, or focuses the column when
    /// it lands outside the drawn rows.
    pub fn handle_click(&self, x: u16, y: u16) -> Action {
        match self.region_at(x, y) {
            Some(region) => match region.item_at(x, y) {
                Some(index) => Action::Select {
                    column: region.column,
                    index,
                },
                None => Action::Focus(region.column),
            },
            None => Action::None,
        }
    }

    /// Column under the cursor for scroll events
    pub fn column_at(&self, x: u16, y: u16) -> Option<usize> {
        self.region_at(x, y).map(|r| r.column)
    }
}
