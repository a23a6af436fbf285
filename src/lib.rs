#![forbid(unsafe_code)]

//! Classic snake rendered on a pixel buffer.
//!
//! A snake moves over a grid of 40 by 30 cells, growing every time it eats the food.
//! The game ends when the head hits the border of the grid or the body of the snake.
//!
//! # Rules
//!
//! - The snake starts as a single cell at `(5, 5)` moving right, the food starts at `(10, 10)`.
//! - Every tick the first held arrow key (checked in up, down, left, right order) that doesn't reverse the snake changes its direction.
//! - The head moves a single cell, the tail follows unless the food is eaten.
//! - Eating increments the score and moves the food to a random cell, which might be under the snake.
//! - Any collision ends the game immediately without moving the snake.
//!
//! # Usage
//!
//! The game logic doesn't depend on the window, a [`GameLoop`] can be driven by anything implementing [`DirectionalInput`] and [`Surface`].
//!
//! ```
//! use pixel_snake::{Canvas, DirectionalInput, Direction, Flow, GameLoop};
//!
//! /// Player that never presses a key.
//! struct Idle;
//!
//! impl DirectionalInput for Idle {
//!     fn held(&self, _direction: Direction) -> bool {
//!         false
//!     }
//! }
//!
//! let mut game_loop = GameLoop::new(fastrand::Rng::with_seed(0));
//! let mut canvas = Canvas::new(800, 600);
//!
//! // Runs right until it hits the wall
//! while game_loop.frame(true, &Idle, &mut canvas) == Flow::Continue {}
//!
//! assert!(game_loop.state().is_over());
//! ```
//!
//! To play it in a window use [`run`]:
//!
//! ```no_run
//! pixel_snake::run(pixel_snake::Config::default().with_title("Snake")).unwrap();
//! ```
//!
//! # Install Requirements
//!
//! On Linux the window needs the X11 or Wayland development libraries, see the `winit` crate.

pub mod canvas;
pub mod config;
pub mod direction;
pub mod game;
pub mod game_loop;
mod graphics;
pub mod grid;
pub mod input;
pub mod random;
pub mod render;
pub mod snake;
mod window;

pub use canvas::{Canvas, Surface};
pub use config::Config;
pub use direction::Direction;
pub use game::{GameState, TickOutcome};
pub use game_loop::{Flow, GameLoop, TICK_INTERVAL};
pub use grid::Cell;
pub use input::{DirectionalInput, Input};
pub use random::CellRng;
pub use rgb::RGB8;
pub use snake::Snake;

/// Open a window and play a single game.
///
/// Blocks until the game is over or the window is closed.
///
/// # Arguments
///
/// * `config` - Configuration for the window, can be used to set the title, scaling and other things.
///
/// # Errors
///
/// - When a window could not be opened.
/// - If no GPU could be found or accessed.
#[inline]
pub fn run(config: Config) -> miette::Result<()> {
    window::run(config)
}
