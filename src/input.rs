//! Handle keyboard input events.

use hashbrown::HashMap;
use winit::{
    event::{ElementState, KeyEvent},
    keyboard::{KeyCode, PhysicalKey},
};

use crate::direction::Direction;

/// Anything that can be asked whether the key for a direction is held down.
pub trait DirectionalInput {
    /// Whether the key mapped to the direction is held.
    fn held(&self, direction: Direction) -> bool;
}

/// Any button state.
#[derive(Debug, Default)]
pub(crate) struct ButtonState {
    /// Whether the button is being held down right now.
    is_down: bool,
    /// Whether the button went down at any point since the previous update tick.
    pressed_since_tick: bool,
}

impl ButtonState {
    /// Create a new state.
    pub(crate) const fn new(is_down: bool) -> Self {
        let pressed_since_tick = is_down;

        Self {
            is_down,
            pressed_since_tick,
        }
    }

    /// Handle the state if the button is currently pressed.
    pub(crate) fn handle_event(&mut self, pressed: bool) {
        self.is_down = pressed;

        // Remember short taps that are released before the next tick
        if pressed {
            self.pressed_since_tick = true;
        }
    }

    /// Forget the taps of the previous tick.
    pub(crate) fn update(&mut self) {
        self.pressed_since_tick = false;
    }

    /// Whether the button is down or was tapped during this tick.
    pub(crate) const fn held(&self) -> bool {
        self.is_down || self.pressed_since_tick
    }
}

/// Manager for handling keyboard events.
#[derive(Debug, Default)]
pub struct Input {
    /// All keyboard buttons seen so far.
    keys: HashMap<KeyCode, ButtonState>,
}

impl Input {
    /// Setup the input.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Handle a winit keyboard event.
    #[inline]
    pub fn handle_event(&mut self, event: &KeyEvent) {
        if let PhysicalKey::Code(keycode) = event.physical_key {
            self.handle_key(keycode, event.state == ElementState::Pressed);
        }
    }

    /// Register a key going up or down.
    pub fn handle_key(&mut self, keycode: KeyCode, is_down: bool) {
        if let Some(state) = self.keys.get_mut(&keycode) {
            // Key already registered, update the state
            state.handle_event(is_down);
        } else {
            // Key not found, register it
            self.keys.insert(keycode, ButtonState::new(is_down));
        }
    }

    /// Update all registered buttons.
    ///
    /// Only allowed to be called once per update tick, after the tick consumed the input.
    #[inline]
    pub fn update(&mut self) {
        self.keys.values_mut().for_each(ButtonState::update);
    }

    /// Forget all keys, used when the window loses focus.
    #[inline]
    pub fn release_all(&mut self) {
        self.keys.clear();
    }

    /// Check the key held state for a keyboard button.
    #[inline]
    #[must_use]
    pub fn key_held(&self, key: KeyCode) -> bool {
        self.keys.get(&key).is_some_and(ButtonState::held)
    }

    /// Whether the window should be closed on request of the player.
    #[inline]
    #[must_use]
    pub fn exit_requested(&self) -> bool {
        self.key_held(KeyCode::Escape)
    }
}

impl DirectionalInput for Input {
    fn held(&self, direction: Direction) -> bool {
        keys_for(direction)
            .iter()
            .any(|&keycode| self.key_held(keycode))
    }
}

/// Keys mapped to a direction, arrow keys first and WASD as an alternative.
const fn keys_for(direction: Direction) -> [KeyCode; 2] {
    match direction {
        Direction::Up => [KeyCode::ArrowUp, KeyCode::KeyW],
        Direction::Down => [KeyCode::ArrowDown, KeyCode::KeyS],
        Direction::Left => [KeyCode::ArrowLeft, KeyCode::KeyA],
        Direction::Right => [KeyCode::ArrowRight, KeyCode::KeyD],
    }
}
