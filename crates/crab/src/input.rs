//! Keyboard input state and the game's logical actions.
//!
//! [`Input`] tracks which keys are currently pressed, just pressed this
//! frame, or just released this frame. It is updated by the window event
//! handler. The simulation never looks at physical keys: it asks an
//! [`InputSource`] about [`Action`]s, and [`KeyBindings`] decides which keys
//! map to which action.
//!
//! Movement is level-triggered ("is it held?") so the crab keeps walking
//! while a key is down. Quitting is edge-triggered ("was it pressed this
//! frame?") so holding Escape fires once.

use std::collections::{HashMap, HashSet};
use std::hash::Hash;

pub use winit::keyboard::KeyCode;

/// Tracks the state of a set of inputs (keys or logical actions).
///
/// - `pressed`: currently held down
/// - `just_pressed`: pressed this frame (not held last frame)
/// - `just_released`: released this frame
#[derive(Debug, Clone)]
pub struct Input<T: Eq + Hash + Copy> {
    pressed: HashSet<T>,
    just_pressed: HashSet<T>,
    just_released: HashSet<T>,
}

impl<T: Eq + Hash + Copy> Input<T> {
    pub fn new() -> Self {
        Self {
            pressed: HashSet::new(),
            just_pressed: HashSet::new(),
            just_released: HashSet::new(),
        }
    }

    /// Returns `true` if the input is currently held down.
    pub fn pressed(&self, input: T) -> bool {
        self.pressed.contains(&input)
    }

    /// Returns `true` if the input was pressed this frame.
    pub fn just_pressed(&self, input: T) -> bool {
        self.just_pressed.contains(&input)
    }

    /// Returns `true` if the input was released this frame.
    pub fn just_released(&self, input: T) -> bool {
        self.just_released.contains(&input)
    }

    /// Record a press. Repeats while already held are not new presses.
    pub fn press(&mut self, input: T) {
        if self.pressed.insert(input) {
            self.just_pressed.insert(input);
        }
    }

    pub fn release(&mut self, input: T) {
        if self.pressed.remove(&input) {
            self.just_released.insert(input);
        }
    }

    /// Clear per-frame state. Called once the frame's edges have been consumed.
    pub fn clear_just(&mut self) {
        self.just_pressed.clear();
        self.just_released.clear();
    }
}

impl<T: Eq + Hash + Copy> Default for Input<T> {
    fn default() -> Self {
        Self::new()
    }
}

/// What the player can ask the crab to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    MoveLeft,
    MoveRight,
    MoveUp,
    MoveDown,
    Quit,
}

impl Action {
    pub const ALL: [Action; 5] = [
        Action::MoveLeft,
        Action::MoveRight,
        Action::MoveUp,
        Action::MoveDown,
        Action::Quit,
    ];
}

/// The two queries the simulation makes about player input each tick.
pub trait InputSource {
    /// Level-triggered: the action is currently held.
    fn held(&self, action: Action) -> bool;

    /// Edge-triggered: the action went from released to pressed this frame.
    fn just_pressed(&self, action: Action) -> bool;
}

/// Scripted input, used by tests and replays.
impl InputSource for Input<Action> {
    fn held(&self, action: Action) -> bool {
        self.pressed(action)
    }

    fn just_pressed(&self, action: Action) -> bool {
        Input::just_pressed(self, action)
    }
}

/// Maps physical keys to actions. Several keys may share an action.
#[derive(Debug, Clone)]
pub struct KeyBindings {
    bindings: HashMap<KeyCode, Action>,
}

impl KeyBindings {
    /// An empty binding table.
    pub fn empty() -> Self {
        Self {
            bindings: HashMap::new(),
        }
    }

    /// Bind `key` to `action` (builder pattern). Rebinding a key replaces it.
    pub fn bind(mut self, key: KeyCode, action: Action) -> Self {
        self.bindings.insert(key, action);
        self
    }

    pub fn action(&self, key: KeyCode) -> Option<Action> {
        self.bindings.get(&key).copied()
    }

    /// All keys bound to `action`.
    pub fn keys_for(&self, action: Action) -> impl Iterator<Item = KeyCode> + '_ {
        self.bindings
            .iter()
            .filter(move |(_, a)| **a == action)
            .map(|(k, _)| *k)
    }
}

impl Default for KeyBindings {
    /// Arrow keys and WASD move, Escape quits.
    fn default() -> Self {
        Self::empty()
            .bind(KeyCode::ArrowLeft, Action::MoveLeft)
            .bind(KeyCode::ArrowRight, Action::MoveRight)
            .bind(KeyCode::ArrowUp, Action::MoveUp)
            .bind(KeyCode::ArrowDown, Action::MoveDown)
            .bind(KeyCode::KeyA, Action::MoveLeft)
            .bind(KeyCode::KeyD, Action::MoveRight)
            .bind(KeyCode::KeyW, Action::MoveUp)
            .bind(KeyCode::KeyS, Action::MoveDown)
            .bind(KeyCode::Escape, Action::Quit)
    }
}

/// Keyboard state viewed through a binding table.
pub struct BoundInput<'a> {
    pub keys: &'a Input<KeyCode>,
    pub bindings: &'a KeyBindings,
}

impl InputSource for BoundInput<'_> {
    fn held(&self, action: Action) -> bool {
        self.bindings.keys_for(action).any(|k| self.keys.pressed(k))
    }

    fn just_pressed(&self, action: Action) -> bool {
        self.bindings.keys_for(action).any(|k| self.keys.just_pressed(k))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn press_sets_pressed_and_just_pressed() {
        let mut input = Input::new();
        input.press(KeyCode::Escape);
        assert!(input.pressed(KeyCode::Escape));
        assert!(input.just_pressed(KeyCode::Escape));

        input.clear_just();
        assert!(input.pressed(KeyCode::Escape));
        assert!(!input.just_pressed(KeyCode::Escape));
    }

    #[test]
    fn key_repeat_is_not_a_new_press() {
        let mut input = Input::new();
        input.press(KeyCode::Escape);
        input.clear_just();
        // OS auto-repeat delivers another Pressed event while the key is held.
        input.press(KeyCode::Escape);
        assert!(!input.just_pressed(KeyCode::Escape));
    }

    #[test]
    fn release_sets_just_released() {
        let mut input = Input::new();
        input.press(KeyCode::ArrowLeft);
        input.clear_just();
        input.release(KeyCode::ArrowLeft);
        assert!(!input.pressed(KeyCode::ArrowLeft));
        assert!(input.just_released(KeyCode::ArrowLeft));
    }

    #[test]
    fn releasing_an_unpressed_key_is_ignored() {
        let mut input: Input<KeyCode> = Input::new();
        input.release(KeyCode::ArrowLeft);
        assert!(!input.just_released(KeyCode::ArrowLeft));
    }

    #[test]
    fn default_bindings_cover_every_action() {
        let bindings = KeyBindings::default();
        for action in Action::ALL {
            assert!(bindings.keys_for(action).next().is_some(), "{action:?} unbound");
        }
        assert_eq!(bindings.action(KeyCode::Escape), Some(Action::Quit));
        assert_eq!(bindings.action(KeyCode::KeyA), Some(Action::MoveLeft));
        assert_eq!(bindings.action(KeyCode::Space), None);
    }

    #[test]
    fn bound_input_maps_keys_to_actions() {
        let bindings = KeyBindings::default();
        let mut keys = Input::new();
        keys.press(KeyCode::KeyD);
        keys.press(KeyCode::Escape);

        let source = BoundInput {
            keys: &keys,
            bindings: &bindings,
        };
        assert!(source.held(Action::MoveRight));
        assert!(!source.held(Action::MoveLeft));
        assert!(source.just_pressed(Action::Quit));

        keys.clear_just();
        let source = BoundInput {
            keys: &keys,
            bindings: &bindings,
        };
        assert!(source.held(Action::Quit));
        assert!(!source.just_pressed(Action::Quit));
    }

    #[test]
    fn rebinding_replaces_previous_action() {
        let bindings = KeyBindings::empty()
            .bind(KeyCode::KeyQ, Action::MoveLeft)
            .bind(KeyCode::KeyQ, Action::Quit);
        assert_eq!(bindings.action(KeyCode::KeyQ), Some(Action::Quit));
        assert_eq!(bindings.keys_for(Action::MoveLeft).count(), 0);
    }
}
