//! Generate random numbers.

use crate::grid::{Cell, GRID_HEIGHT, GRID_WIDTH};

/// Source of uniformly distributed integers.
///
/// Implemented for [`fastrand::Rng`], tests can implement it to script the outcome.
pub trait CellRng {
    /// Generate a random number between the range, both ends included.
    ///
    /// # Arguments
    ///
    /// * `min` - Start of the random value, must not be bigger than `max`.
    /// * `max` - End of the random value, must not be smaller than `min`.
    ///
    /// # Returns
    ///
    /// - A random number in `min..=max`.
    fn range_inclusive(&mut self, min: i32, max: i32) -> i32;
}

impl CellRng for fastrand::Rng {
    #[inline]
    fn range_inclusive(&mut self, min: i32, max: i32) -> i32 {
        self.i32(min..=max)
    }
}

/// Pick a random cell on the grid.
///
/// Both axes are drawn independently, the snake body is not taken into account.
pub fn random_cell(rng: &mut impl CellRng) -> Cell {
    let x = rng.range_inclusive(0, GRID_WIDTH - 1);
    let y = rng.range_inclusive(0, GRID_HEIGHT - 1);

    Cell::new(x, y)
}

/// Create the random generator, seeded when a seed is passed.
#[must_use]
pub fn rng(seed: Option<u64>) -> fastrand::Rng {
    seed.map_or_else(fastrand::Rng::new, fastrand::Rng::with_seed)
}
