//! Grid the snake lives on.
//!
//! The grid is fixed for the lifetime of the game, every position is a [`Cell`] inside it.

use crate::direction::Direction;

/// Amount of cells horizontally.
pub const GRID_WIDTH: i32 = 40;
/// Amount of cells vertically.
pub const GRID_HEIGHT: i32 = 30;
/// Size in pixels of a single square cell.
pub const CELL_SIZE: i32 = 20;

/// Width of the drawable surface in pixels.
pub const SCREEN_WIDTH: u32 = (GRID_WIDTH * CELL_SIZE) as u32;
/// Height of the drawable surface in pixels.
pub const SCREEN_HEIGHT: u32 = (GRID_HEIGHT * CELL_SIZE) as u32;

/// Where the head of the snake starts.
pub const SNAKE_START: Cell = Cell::new(5, 5);
/// Where the first food item is placed.
pub const FOOD_START: Cell = Cell::new(10, 10);

/// Single grid-aligned position.
///
/// Coordinates are signed so a step outside of the grid can still be represented and checked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Cell {
    /// Horizontal coordinate, increases to the right.
    pub x: i32,
    /// Vertical coordinate, increases downwards.
    pub y: i32,
}

impl Cell {
    /// Create a cell from a coordinate pair.
    #[inline]
    #[must_use]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Neighbouring cell one step in a direction.
    ///
    /// The result might be outside of the grid, check with [`Self::in_bounds`].
    #[inline]
    #[must_use]
    pub const fn offset(self, direction: Direction) -> Self {
        let (dx, dy) = direction.offset();

        Self::new(self.x + dx, self.y + dy)
    }

    /// Whether the cell lies inside `[0, GRID_WIDTH) x [0, GRID_HEIGHT)`.
    #[inline]
    #[must_use]
    pub const fn in_bounds(self) -> bool {
        self.x >= 0 && self.x < GRID_WIDTH && self.y >= 0 && self.y < GRID_HEIGHT
    }

    /// Rectangle in pixels covered by this cell.
    ///
    /// # Returns
    ///
    /// - (`x`, `y`, `width`, `height`) of the cell on the surface.
    #[inline]
    #[must_use]
    pub const fn to_pixel_rect(self) -> (i32, i32, i32, i32) {
        (self.x * CELL_SIZE, self.y * CELL_SIZE, CELL_SIZE, CELL_SIZE)
    }
}

impl From<(i32, i32)> for Cell {
    fn from((x, y): (i32, i32)) -> Self {
        Self::new(x, y)
    }
}

#[cfg(test)]
mod tests {
    use super::{Cell, GRID_HEIGHT, GRID_WIDTH, SCREEN_HEIGHT, SCREEN_WIDTH};
    use crate::direction::Direction;

    #[test]
    fn screen_matches_grid() {
        assert_eq!(SCREEN_WIDTH, 800);
        assert_eq!(SCREEN_HEIGHT, 600);
    }

    #[test]
    fn bounds() {
        assert!(Cell::new(0, 0).in_bounds());
        assert!(Cell::new(GRID_WIDTH - 1, GRID_HEIGHT - 1).in_bounds());
        assert!(!Cell::new(GRID_WIDTH, 5).in_bounds());
        assert!(!Cell::new(5, GRID_HEIGHT).in_bounds());
        assert!(!Cell::new(-1, 5).in_bounds());
        assert!(!Cell::new(5, -1).in_bounds());
    }

    #[test]
    fn offset() {
        let cell = Cell::new(5, 5);

        assert_eq!(cell.offset(Direction::Up), Cell::new(5, 4));
        assert_eq!(cell.offset(Direction::Down), Cell::new(5, 6));
        assert_eq!(cell.offset(Direction::Left), Cell::new(4, 5));
        assert_eq!(cell.offset(Direction::Right), Cell::new(6, 5));
    }

    #[test]
    fn pixel_rect() {
        assert_eq!(Cell::new(3, 2).to_pixel_rect(), (60, 40, 20, 20));
    }
}
