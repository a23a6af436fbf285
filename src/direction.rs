//! Movement directions of the snake.

/// One of the four directions the snake can travel in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    /// Towards the top of the screen.
    Up,
    /// Towards the bottom of the screen.
    Down,
    /// Towards the left side of the screen.
    Left,
    /// Towards the right side of the screen.
    Right,
}

impl Direction {
    /// All directions in the order the keys are checked every tick.
    pub const ALL: [Self; 4] = [Self::Up, Self::Down, Self::Left, Self::Right];

    /// The exact opposite direction.
    #[inline]
    #[must_use]
    pub const fn reverse(self) -> Self {
        match self {
            Self::Up => Self::Down,
            Self::Down => Self::Up,
            Self::Left => Self::Right,
            Self::Right => Self::Left,
        }
    }

    /// Unit step on the grid.
    ///
    /// # Returns
    ///
    /// - (`dx`, `dy`): horizontal and vertical delta, the vertical axis points down.
    #[inline]
    #[must_use]
    pub const fn offset(self) -> (i32, i32) {
        match self {
            Self::Up => (0, -1),
            Self::Down => (0, 1),
            Self::Left => (-1, 0),
            Self::Right => (1, 0),
        }
    }

    /// Pick the next direction from the held keys.
    ///
    /// The first held direction in [`Self::ALL`] order that doesn't reverse `current` wins.
    /// Only a single change is applied, no matter how many keys are held.
    ///
    /// # Arguments
    ///
    /// * `current` - Direction the snake is travelling in right now.
    /// * `is_held` - Whether the key for a direction is held.
    #[must_use]
    pub fn resolve(current: Self, is_held: impl Fn(Self) -> bool) -> Self {
        Self::ALL
            .into_iter()
            .find(|&direction| direction != current.reverse() && is_held(direction))
            .unwrap_or(current)
    }
}

#[cfg(test)]
mod tests {
    use super::Direction;

    #[test]
    fn reverse_is_involution() {
        for direction in Direction::ALL {
            assert_ne!(direction.reverse(), direction);
            assert_eq!(direction.reverse().reverse(), direction);
        }
    }

    #[test]
    fn reverse_offsets_cancel() {
        for direction in Direction::ALL {
            let (dx, dy) = direction.offset();
            let (rx, ry) = direction.reverse().offset();

            assert_eq!((dx + rx, dy + ry), (0, 0));
        }
    }

    #[test]
    fn resolve_without_keys_keeps_direction() {
        assert_eq!(Direction::resolve(Direction::Left, |_| false), Direction::Left);
    }

    #[test]
    fn resolve_rejects_reverse() {
        assert_eq!(
            Direction::resolve(Direction::Left, |d| d == Direction::Right),
            Direction::Left
        );
        assert_eq!(
            Direction::resolve(Direction::Up, |d| d == Direction::Down),
            Direction::Up
        );
    }

    #[test]
    fn resolve_accepts_turns() {
        assert_eq!(
            Direction::resolve(Direction::Right, |d| d == Direction::Up),
            Direction::Up
        );
        assert_eq!(
            Direction::resolve(Direction::Up, |d| d == Direction::Left),
            Direction::Left
        );
    }

    #[test]
    fn resolve_uses_priority_order() {
        // Everything held, up wins because it's checked first
        assert_eq!(Direction::resolve(Direction::Left, |_| true), Direction::Up);

        // Up is the reverse so it's skipped, down is next but that's held too
        assert_eq!(
            Direction::resolve(Direction::Down, |d| matches!(d, Direction::Up | Direction::Left)),
            Direction::Left
        );
    }
}
