//! Directional cell navigation over absolutely positioned tiles.
//!
//! Given a set of rectangles and the currently selected one, the navigator
//! resolves an arrow-key press into the neighbouring cell that should become
//! selected. Layouts need not be regular: tiles may differ in size, span
//! several neighbours, or overlap.
//!
//! Two cells are adjacent in a direction when the leading edge of the
//! selected cell coincides with the trailing edge of the candidate. The
//! strength of the adjacency depends on the perpendicular spans:
//!
//! | Direction | Edges compared               | Spans compared |
//! |-----------|------------------------------|----------------|
//! | Up        | `from.top == to.bottom`      | x spans        |
//! | Down      | `from.bottom == to.top`      | x spans        |
//! | Left      | `from.left == to.right`      | y spans        |
//! | Right     | `from.right == to.left`      | y spans        |
//!
//! Overlapping spans give a [`Adjacency::Solid`] match, spans that only meet
//! at a single point give a [`Adjacency::Weak`] one.

use gridnav_types::{Cell, Direction, NavError, Result};

/// How strongly a candidate cell neighbours the selected one.
///
/// Variants are ordered by strength: `None < Weak < Solid`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Adjacency {
    /// Not adjacent in the requested direction.
    None,
    /// Edges are flush but perpendicular spans only touch at a point.
    Weak,
    /// Edges are flush and perpendicular spans overlap.
    Solid,
}

/// Classify `to` as a neighbour of `from` in `direction`.
pub fn adjacency(from: &Cell, to: &Cell, direction: Direction) -> Adjacency {
    let (leading, trailing) = match direction {
        Direction::Up => (from.top(), to.bottom()),
        Direction::Down => (from.bottom(), to.top()),
        Direction::Left => (from.left(), to.right()),
        Direction::Right => (from.right(), to.left()),
    };
    if leading != trailing {
        return Adjacency::None;
    }

    let ((from_start, from_end), (to_start, to_end)) = if direction.is_vertical() {
        ((from.left(), from.right()), (to.left(), to.right()))
    } else {
        ((from.top(), from.bottom()), (to.top(), to.bottom()))
    };

    if to_start < from_end && to_end > from_start {
        Adjacency::Solid
    } else if to_start == from_end || to_end == from_start {
        Adjacency::Weak
    } else {
        Adjacency::None
    }
}

/// A qualifying neighbour found during a scan.
#[derive(Debug, Clone, Copy)]
struct Candidate {
    index: usize,
    strength: Adjacency,
    x: f64,
    y: f64,
}

impl Candidate {
    /// Whether a later candidate should replace the running best.
    ///
    /// A stronger match always wins. Among equal strengths the candidate
    /// wins when it lies at or beyond the best towards the top-left corner.
    fn outranks(&self, best: &Candidate) -> bool {
        match self.strength.cmp(&best.strength) {
            std::cmp::Ordering::Greater => true,
            std::cmp::Ordering::Less => false,
            std::cmp::Ordering::Equal => self.x <= best.x && self.y <= best.y,
        }
    }
}

/// Stateful navigator owned by one grid view.
///
/// The navigator only computes destinations; the caller stores the accepted
/// move back with [`set_selected_cell_index`](Self::set_selected_cell_index).
#[derive(Debug, Clone, Default)]
pub struct CellNavigator {
    selected: Option<usize>,
}

impl CellNavigator {
    /// Create a navigator with no selection.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the currently selected cell. The index is checked against the
    /// cell set only when a destination is requested.
    pub fn set_selected_cell_index(&mut self, index: usize) {
        self.selected = Some(index);
    }

    /// Forget the current selection.
    pub fn clear_selection(&mut self) {
        self.selected = None;
    }

    pub fn selected_cell_index(&self) -> Option<usize> {
        self.selected
    }

    /// Find the cell that should become selected when moving in `direction`.
    ///
    /// Returns `Ok(None)` when nothing is selected or no cell qualifies. The
    /// selected index must be in range and every cell must have finite
    /// geometry with positive extents.
    pub fn destination_cell_index(
        &self,
        cells: &[Cell],
        direction: Direction,
    ) -> Result<Option<usize>> {
        let Some(selected) = self.selected else {
            return Ok(None);
        };
        let from = cells.get(selected).ok_or(NavError::InvalidSelection {
            index: selected,
            len: cells.len(),
        })?;
        for (index, cell) in cells.iter().enumerate() {
            cell.validate()
                .map_err(|reason| NavError::InvalidCell { index, reason })?;
        }

        let best = cells
            .iter()
            .enumerate()
            .filter_map(|(index, to)| {
                let strength = adjacency(from, to, direction);
                log::trace!("cell {selected} -> {index} ({direction}): {strength:?}");
                (strength != Adjacency::None).then_some(Candidate {
                    index,
                    strength,
                    x: to.x,
                    y: to.y,
                })
            })
            .fold(None::<Candidate>, |best, candidate| match best {
                Some(b) if !candidate.outranks(&b) => Some(b),
                _ => Some(candidate),
            });

        Ok(best.map(|c| c.index))
    }
}
