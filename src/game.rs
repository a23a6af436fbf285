//! Rules of a single game.
//!
//! All state is owned by [`GameState`], which is advanced one discrete step at a time with [`GameState::tick`].
//!
//! # Collisions
//!
//! Hitting a wall or the snake's own body both end the game immediately: the tick that detects the collision doesn't move the snake and doesn't resolve food.

use crate::{
    direction::Direction,
    grid::{Cell, FOOD_START, SNAKE_START},
    input::DirectionalInput,
    random::{self, CellRng},
    snake::Snake,
};

/// What happened during a single tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    /// The snake moved one cell.
    Moved,
    /// The snake moved onto the food and grew.
    Ate,
    /// The next cell was outside of the grid, the game is over.
    HitWall,
    /// The next cell was part of the snake, the game is over.
    HitSelf,
    /// The game was already over, nothing happened.
    Finished,
}

impl TickOutcome {
    /// Whether this tick ended the game.
    #[inline]
    #[must_use]
    pub const fn is_collision(self) -> bool {
        matches!(self, Self::HitWall | Self::HitSelf)
    }
}

/// Complete state of a game.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameState {
    /// Segments of the snake.
    snake: Snake,
    /// Direction the snake travels in.
    direction: Direction,
    /// Cell the food is on.
    food: Cell,
    /// Amount of food eaten.
    score: u32,
    /// Whether a collision happened.
    game_over: bool,
}

impl GameState {
    /// Setup the initial state: a single segment snake moving right and the food at a fixed cell.
    #[must_use]
    pub fn new() -> Self {
        Self::with_parts(Snake::new(SNAKE_START), Direction::Right, FOOD_START)
    }

    /// Setup a running game from a specific situation.
    #[must_use]
    pub const fn with_parts(snake: Snake, direction: Direction, food: Cell) -> Self {
        let score = 0;
        let game_over = false;

        Self {
            snake,
            direction,
            food,
            score,
            game_over,
        }
    }

    /// Advance the game a single step.
    ///
    /// # Arguments
    ///
    /// * `input` - Queried for held direction keys.
    /// * `rng` - Used to relocate the food after it's eaten.
    pub fn tick(&mut self, input: &impl DirectionalInput, rng: &mut impl CellRng) -> TickOutcome {
        if self.game_over {
            return TickOutcome::Finished;
        }

        // Apply at most a single direction change
        self.direction = Direction::resolve(self.direction, |direction| input.held(direction));

        let new_head = self.snake.head().offset(self.direction);

        if !new_head.in_bounds() {
            self.game_over = true;

            return TickOutcome::HitWall;
        }

        // Checked against the body before it moves, so the current tail counts too
        if self.snake.contains(new_head) {
            self.game_over = true;

            return TickOutcome::HitSelf;
        }

        let ate = new_head == self.food;
        self.snake.advance(new_head, ate);

        if ate {
            self.score += 1;

            // Might land on the snake itself
            self.food = random::random_cell(rng);

            TickOutcome::Ate
        } else {
            TickOutcome::Moved
        }
    }

    /// Segments of the snake.
    #[inline]
    #[must_use]
    pub const fn snake(&self) -> &Snake {
        &self.snake
    }

    /// Direction the snake travels in.
    #[inline]
    #[must_use]
    pub const fn direction(&self) -> Direction {
        self.direction
    }

    /// Cell the food is on.
    #[inline]
    #[must_use]
    pub const fn food(&self) -> Cell {
        self.food
    }

    /// Amount of food eaten.
    #[inline]
    #[must_use]
    pub const fn score(&self) -> u32 {
        self.score
    }

    /// Whether the game has ended.
    #[inline]
    #[must_use]
    pub const fn is_over(&self) -> bool {
        self.game_over
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}
