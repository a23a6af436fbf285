//! Spawn a winit window and drive the game loop from its events.

use std::sync::Arc;

use glamour::Size2;
use miette::{IntoDiagnostic, Report, Result, WrapErr};
use web_time::Instant;
use winit::{
    application::ApplicationHandler,
    dpi::{LogicalSize, PhysicalSize},
    event::WindowEvent,
    event_loop::{ActiveEventLoop, ControlFlow, EventLoop},
    window::{Window, WindowId},
};

use crate::{
    canvas::Canvas,
    game_loop::{Flow, GameLoop, TICK_INTERVAL},
    graphics::{Graphics, Screen},
    grid::{SCREEN_HEIGHT, SCREEN_WIDTH},
    input::Input,
    random, Config,
};

/// Open the window and play a single game until it's over or the window is closed.
///
/// # Errors
///
/// - When the event loop or the window could not be created.
/// - If no GPU could be found or accessed.
pub(crate) fn run(config: Config) -> Result<()> {
    // Create an event loop which sleeps until the next tick is due
    let event_loop = EventLoop::new()
        .into_diagnostic()
        .wrap_err("Error creating event loop")?;
    event_loop.set_control_flow(ControlFlow::Wait);

    let mut state = State::new(config);

    event_loop
        .run_app(&mut state)
        .into_diagnostic()
        .wrap_err("Error running event loop")?;

    // Errors while creating the window can't be returned from the event handlers
    state.startup_error.map_or(Ok(()), Err)
}

/// State of the window that can still be uninitialized.
///
/// All optional fields are tied to the window creation flow of winit.
struct State {
    /// User supplied configuration.
    config: Config,
    /// Window the game is shown in.
    ///
    /// `None` if the window still needs to be initialized.
    window: Option<Arc<Window>>,
    /// Surface drawing to the window.
    screen: Option<Screen>,
    /// Keyboard state.
    input: Input,
    /// The game itself.
    game_loop: GameLoop<fastrand::Rng>,
    /// `false` after the player asked to close the window.
    window_open: bool,
    /// When the next frame of the game loop should run.
    next_tick: Instant,
    /// Score shown in the title bar.
    shown_score: Option<u32>,
    /// Error that happened while setting up the window.
    startup_error: Option<Report>,
}

impl State {
    /// Setup the state, the window is created when the event loop resumes.
    fn new(config: Config) -> Self {
        let game_loop = GameLoop::new(random::rng(config.seed));

        Self {
            config,
            window: None,
            screen: None,
            input: Input::new(),
            game_loop,
            window_open: true,
            next_tick: Instant::now(),
            shown_score: None,
            startup_error: None,
        }
    }

    /// Create the window and the GPU state rendering to it.
    fn create_window(&self, event_loop: &ActiveEventLoop) -> Result<(Arc<Window>, Screen)> {
        // Define the properties of the window
        let window_attributes = Window::default_attributes()
            .with_title(&self.config.title)
            // Apply scaling for the requested size
            .with_inner_size(LogicalSize::new(
                f64::from(SCREEN_WIDTH) * f64::from(self.config.scaling),
                f64::from(SCREEN_HEIGHT) * f64::from(self.config.scaling),
            ))
            // Keep at least a quarter of the buffer visible
            .with_min_inner_size(LogicalSize::new(
                f64::from(SCREEN_WIDTH) / 4.0,
                f64::from(SCREEN_HEIGHT) / 4.0,
            ));

        // Spawn a new window using the event loop
        let window = Arc::new(
            event_loop
                .create_window(window_attributes)
                .into_diagnostic()
                .wrap_err("Error creating window")?,
        );

        // Because pollster returns the value we can set it immediately
        let graphics = pollster::block_on(Graphics::new(
            &self.config,
            Arc::clone(&window),
            Size2::new(SCREEN_WIDTH, SCREEN_HEIGHT),
        ))?;

        let canvas = Canvas::new(SCREEN_WIDTH as usize, SCREEN_HEIGHT as usize);

        Ok((window, Screen::new(canvas, graphics)))
    }

    /// Run a single iteration of the game loop.
    fn tick(&mut self, event_loop: &ActiveEventLoop) {
        let Some(screen) = &mut self.screen else {
            return;
        };

        let flow = self.game_loop.frame(self.window_open, &self.input, screen);

        // Taps have been consumed by this tick
        self.input.update();

        // Schedule the next tick, don't try to catch up when we fell behind
        self.next_tick = (self.next_tick + TICK_INTERVAL).max(Instant::now());

        self.update_title();

        if flow == Flow::Finished {
            log::debug!("Closing frame shown, exiting event loop");

            // Tell winit that we want to exit
            event_loop.exit();
        }
    }

    /// Show the score in the title bar when it changed.
    fn update_title(&mut self) {
        let Some(window) = &self.window else {
            return;
        };

        let score = self.game_loop.state().score();
        if self.shown_score == Some(score) {
            return;
        }

        window.set_title(&format!("{} - Score: {score}", self.config.title));
        self.shown_score = Some(score);
    }
}

impl ApplicationHandler for State {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        // Setup the window only once
        if self.window.is_some() {
            return;
        }

        match self.create_window(event_loop) {
            Ok((window, screen)) => {
                log::info!("Starting game");

                self.window = Some(window);
                self.screen = Some(screen);
                self.next_tick = Instant::now();
                self.update_title();
            }
            Err(err) => {
                // Can't continue without a window
                self.startup_error = Some(err);

                event_loop.exit();
            }
        }
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: WindowId,
        event: WindowEvent,
    ) {
        match event {
            // Handle the game loop and show the last frame for other redraw reasons
            WindowEvent::RedrawRequested => {
                if Instant::now() >= self.next_tick {
                    self.tick(event_loop);
                } else if let Some(screen) = &mut self.screen {
                    screen.redraw();
                }
            }
            // Resize the render surface
            WindowEvent::Resized(PhysicalSize { width, height }) => {
                if let Some(screen) = &mut self.screen {
                    screen.resize(width, height);
                }

                // On MacOS the window needs to be redrawn manually after resizing
                if let Some(window) = &self.window {
                    window.request_redraw();
                }
            }
            // Close the window after the closing frame is drawn
            WindowEvent::CloseRequested => {
                log::debug!("Window close requested");

                self.window_open = false;
                self.tick(event_loop);
            }
            // Keys released while unfocused are never reported
            WindowEvent::Focused(false) => {
                log::debug!("Window lost focus, releasing all keys");

                self.input.release_all();
            }
            // Handle keyboard events with the input manager
            WindowEvent::KeyboardInput { event, .. } => {
                self.input.handle_event(&event);

                // Seen by the game loop at the start of the next tick
                if self.input.exit_requested() {
                    self.window_open = false;
                }
            }
            // Ignore the rest of the events
            _ => (),
        }
    }

    fn about_to_wait(&mut self, event_loop: &ActiveEventLoop) {
        let Some(window) = &self.window else {
            return;
        };

        if Instant::now() >= self.next_tick {
            // Application is about to wait, request a redraw to run the next tick
            window.request_redraw();
        }

        // Sleep until the next tick
        event_loop.set_control_flow(ControlFlow::WaitUntil(self.next_tick));
    }

    fn exiting(&mut self, _event_loop: &ActiveEventLoop) {
        // The surface must be destroyed before the window
        self.screen = None;
        self.window = None;
    }
}
