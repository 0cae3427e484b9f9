//! Grid focus: applies navigator results to a grid view's selection.
//!
//! `GridFocus` is the caller side of [`CellNavigator`]: it owns the visible
//! cell set, stores accepted moves, and reports presses it could not use so
//! a parent component can handle them.

use gridnav_types::{Cell, Direction, InputEvent, Result};

use crate::layout::GridLayout;
use crate::navigator::CellNavigator;

/// Result of feeding one input to a grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FocusOutcome {
    /// Selection moved from one cell to another.
    Moved { from: usize, to: usize },
    /// The input was not consumed; the selection is unchanged.
    Unhandled,
}

/// Selection state and cell set of one grid view.
#[derive(Debug, Clone)]
pub struct GridFocus {
    navigator: CellNavigator,
    cells: Vec<Cell>,
}

impl GridFocus {
    /// Create a grid with the first cell selected (nothing if empty).
    pub fn new(cells: Vec<Cell>) -> Self {
        let mut navigator = CellNavigator::new();
        if !cells.is_empty() {
            navigator.set_selected_cell_index(0);
        }
        Self { navigator, cells }
    }

    /// Create a grid from a layout, starting at its initial cell.
    pub fn from_layout(layout: &GridLayout) -> Self {
        let mut focus = Self::new(layout.cells());
        focus.select(layout.initial);
        focus
    }

    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    pub fn selected(&self) -> Option<usize> {
        self.navigator.selected_cell_index()
    }

    /// Select a cell directly, clamped to the cell set.
    pub fn select(&mut self, index: usize) {
        match self.cells.len() {
            0 => self.navigator.clear_selection(),
            len => {
                if index >= len {
                    log::warn!("selection {index} out of range, clamping to {}", len - 1);
                }
                self.navigator.set_selected_cell_index(index.min(len - 1));
            },
        }
    }

    /// Replace the cell set after a resize or data reload.
    ///
    /// The selection keeps its index when still in range, otherwise it is
    /// clamped to the last cell.
    pub fn set_cells(&mut self, cells: Vec<Cell>) {
        self.cells = cells;
        match self.selected() {
            Some(index) => self.select(index),
            None if !self.cells.is_empty() => self.navigator.set_selected_cell_index(0),
            None => {},
        }
    }

    /// Move the selection one step in `direction`.
    pub fn move_focus(&mut self, direction: Direction) -> Result<FocusOutcome> {
        let Some(from) = self.selected() else {
            return Ok(FocusOutcome::Unhandled);
        };
        match self.navigator.destination_cell_index(&self.cells, direction)? {
            Some(to) => {
                self.navigator.set_selected_cell_index(to);
                log::debug!("focus {direction}: {from} -> {to}");
                Ok(FocusOutcome::Moved { from, to })
            },
            None => {
                log::debug!("focus {direction}: no destination from {from}");
                Ok(FocusOutcome::Unhandled)
            },
        }
    }

    /// Handle an input event. Only D-pad presses are consumed.
    pub fn handle_input(&mut self, event: &InputEvent) -> Result<FocusOutcome> {
        match event {
            InputEvent::ButtonPress(button) => match Direction::from_button(*button) {
                Some(direction) => self.move_focus(direction),
                None => Ok(FocusOutcome::Unhandled),
            },
            _ => Ok(FocusOutcome::Unhandled),
        }
    }
}
