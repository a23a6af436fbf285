//! Body of the snake.

use std::collections::VecDeque;

use crate::grid::Cell;

/// Ordered cells of the snake, the head is the first element and the tail the last.
///
/// Always contains at least a single cell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Snake {
    /// Segments, front is the head.
    body: VecDeque<Cell>,
}

impl Snake {
    /// Create a snake consisting of only a head.
    #[must_use]
    pub fn new(head: Cell) -> Self {
        let mut body = VecDeque::with_capacity(16);
        body.push_back(head);

        Self { body }
    }

    /// Create a snake from cells ordered head to tail.
    ///
    /// # Returns
    ///
    /// - `None` when `cells` is empty.
    #[must_use]
    pub fn from_cells(cells: impl IntoIterator<Item = Cell>) -> Option<Self> {
        let body: VecDeque<Cell> = cells.into_iter().collect();

        (!body.is_empty()).then_some(Self { body })
    }

    /// First segment.
    #[inline]
    #[must_use]
    pub fn head(&self) -> Cell {
        // The body can never be empty, see the constructors
        self.body[0]
    }

    /// Amount of segments.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.body.len()
    }

    /// Always `false`, exists for API symmetry with [`Self::len`].
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.body.is_empty()
    }

    /// Iterate over the segments from head to tail.
    #[inline]
    pub fn cells(&self) -> impl Iterator<Item = Cell> + '_ {
        self.body.iter().copied()
    }

    /// Whether any segment occupies the cell.
    #[inline]
    #[must_use]
    pub fn contains(&self, cell: Cell) -> bool {
        self.body.contains(&cell)
    }

    /// Move the snake by placing a new head.
    ///
    /// # Arguments
    ///
    /// * `new_head` - Cell the head moves into.
    /// * `grow` - When `true` the tail stays, making the snake one segment longer.
    pub fn advance(&mut self, new_head: Cell, grow: bool) {
        self.body.push_front(new_head);

        if !grow {
            self.body.pop_back();
        }
    }
}
