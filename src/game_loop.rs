//! Update and render loop of a single game.
//!
//! The loop doesn't know about windows, the host calls [`GameLoop::frame`] once every [`TICK_INTERVAL`] until it returns [`Flow::Finished`].

use std::time::Duration;

use crate::{
    canvas::Surface,
    game::{GameState, TickOutcome},
    input::DirectionalInput,
    random::CellRng,
    render,
};

/// Time to wait between two frames, roughly 10 updates per second.
pub const TICK_INTERVAL: Duration = Duration::from_millis(100);

/// Whether the host should keep calling [`GameLoop::frame`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    /// Wait [`TICK_INTERVAL`] and call again.
    Continue,
    /// The closing frame is shown, the host can exit.
    Finished,
}

/// Owner of the game state driving it from start to game over.
#[derive(Debug)]
pub struct GameLoop<R: CellRng> {
    /// State of the game.
    state: GameState,
    /// Random generator for relocating food.
    rng: R,
    /// Whether the closing frame has been drawn.
    closed: bool,
}

impl<R: CellRng> GameLoop<R> {
    /// Start a new game.
    #[must_use]
    pub fn new(rng: R) -> Self {
        Self::with_state(GameState::new(), rng)
    }

    /// Continue from an existing game state.
    #[must_use]
    pub const fn with_state(state: GameState, rng: R) -> Self {
        let closed = false;

        Self { state, rng, closed }
    }

    /// Run a single iteration of the loop.
    ///
    /// While the window is open and the game is running a single tick is executed and rendered.
    /// When the tick collides nothing new is rendered, the closing frame is drawn instead.
    ///
    /// # Arguments
    ///
    /// * `window_open` - `false` when the host window has been asked to close.
    /// * `input` - Queried for held direction keys.
    /// * `surface` - Surface to draw the frame on.
    pub fn frame(
        &mut self,
        window_open: bool,
        input: &impl DirectionalInput,
        surface: &mut impl Surface,
    ) -> Flow {
        if self.closed {
            return Flow::Finished;
        }

        if window_open && !self.state.is_over() {
            let outcome = self.state.tick(input, &mut self.rng);

            match outcome {
                TickOutcome::Moved | TickOutcome::Ate => {
                    log::trace!(
                        "Snake moved to {:?}, length {}",
                        self.state.snake().head(),
                        self.state.snake().len()
                    );

                    render::render(&self.state, surface);

                    return Flow::Continue;
                }
                TickOutcome::HitWall | TickOutcome::HitSelf => {
                    log::info!("Game over ({outcome:?}) with score {}", self.state.score());
                }
                TickOutcome::Finished => (),
            }
        }

        render::render_closing(surface);
        self.closed = true;

        Flow::Finished
    }

    /// State of the game.
    #[inline]
    #[must_use]
    pub const fn state(&self) -> &GameState {
        &self.state
    }

    /// Whether the closing frame has been drawn.
    #[inline]
    #[must_use]
    pub const fn is_finished(&self) -> bool {
        self.closed
    }
}
