// Input manager - turns winit events into sandbox input

use super::action::{Action, InputSource};
use super::config::InputConfig;
use super::pointer::{PointerGesture, PointerTracker};
use crate::core::math::Vector2;
use std::time::Instant;
use winit::event::{ElementState, KeyEvent, MouseButton};
use winit::keyboard::{KeyCode, PhysicalKey};

/// Something the sandbox should react to
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    /// A bound non-pointer action was triggered
    Action(Action),
    /// The spawn button was pressed and released
    Gesture(PointerGesture),
}

/// Collects input events between frames
pub struct InputManager {
    /// Binding table
    config: InputConfig,

    /// Spawn gesture state
    pointer: PointerTracker,

    /// Events since the last drain
    pending: Vec<InputEvent>,
}

impl InputManager {
    /// Create an input manager with the given bindings
    pub fn new(config: InputConfig) -> Self {
        Self {
            config,
            pointer: PointerTracker::new(),
            pending: Vec::with_capacity(8),
        }
    }

    /// Process a keyboard event from winit
    pub fn process_keyboard_event(&mut self, event: &KeyEvent) {
        // Only process physical key presses
        if let PhysicalKey::Code(key_code) = event.physical_key {
            self.process_key(key_code, event.state, event.repeat);
        }
    }

    /// Process a key transition. Actions fire on press, ignoring auto-repeat.
    pub fn process_key(&mut self, key_code: KeyCode, state: ElementState, repeat: bool) {
        if state != ElementState::Pressed || repeat {
            return;
        }
        if let Some(action) = self.config.get_action(InputSource::key(key_code)) {
            self.trigger(action, Instant::now());
        }
    }

    /// Record a cursor position already converted to simulation space
    pub fn process_cursor_moved(&mut self, position: Vector2) {
        self.pointer.move_to(position);
    }

    /// Process a mouse button transition observed at `now`
    pub fn process_mouse_button(&mut self, button: MouseButton, state: ElementState, now: Instant) {
        let Some(action) = self.config.get_action(InputSource::mouse(button)) else {
            return;
        };

        match (action, state) {
            (Action::Spawn, ElementState::Pressed) => self.pointer.press(now),
            (Action::Spawn, ElementState::Released) => {
                if let Some(gesture) = self.pointer.release(now) {
                    self.pending.push(InputEvent::Gesture(gesture));
                }
            }
            (action, ElementState::Pressed) => self.trigger(action, now),
            (_, ElementState::Released) => {}
        }
    }

    /// Drop any half-finished gesture (focus loss, cursor left the window)
    pub fn cancel_pointer(&mut self) {
        self.pointer.cancel();
    }

    /// Where the spawn button went down, while it is held
    pub fn aim_origin(&self) -> Option<Vector2> {
        self.pointer.press_origin()
    }

    /// Take every event collected since the last call
    pub fn drain(&mut self) -> Vec<InputEvent> {
        std::mem::take(&mut self.pending)
    }

    fn trigger(&mut self, action: Action, now: Instant) {
        // A keyboard-bound spawn drops a ball under the cursor
        if action == Action::Spawn {
            self.pointer.press(now);
            if let Some(gesture) = self.pointer.release(now) {
                self.pending.push(InputEvent::Gesture(gesture));
            }
            return;
        }
        self.pending.push(InputEvent::Action(action));
    }
}

impl Default for InputManager {
    fn default() -> Self {
        Self::new(InputConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn test_key_press_emits_action() {
        let mut manager = InputManager::default();

        manager.process_key(KeyCode::KeyP, ElementState::Pressed, false);
        manager.process_key(KeyCode::KeyP, ElementState::Released, false);

        assert_eq!(
            manager.drain(),
            vec![InputEvent::Action(Action::TogglePause)]
        );
        assert!(manager.drain().is_empty());
    }

    #[test]
    fn test_key_repeat_is_ignored() {
        let mut manager = InputManager::default();
        manager.process_key(KeyCode::KeyC, ElementState::Pressed, true);
        assert!(manager.drain().is_empty());
    }

    #[test]
    fn test_unbound_key_is_ignored() {
        let mut manager = InputManager::default();
        manager.process_key(KeyCode::KeyZ, ElementState::Pressed, false);
        assert!(manager.drain().is_empty());
    }

    #[test]
    fn test_mouse_drag_emits_gesture() {
        let start = Instant::now();
        let mut manager = InputManager::default();

        manager.process_cursor_moved(Vector2::new(200.0, 150.0));
        manager.process_mouse_button(MouseButton::Left, ElementState::Pressed, start);
        assert_eq!(manager.aim_origin(), Some(Vector2::new(200.0, 150.0)));

        manager.process_cursor_moved(Vector2::new(180.0, 190.0));
        manager.process_mouse_button(
            MouseButton::Left,
            ElementState::Released,
            start + Duration::from_millis(1500),
        );

        let events = manager.drain();
        assert_eq!(events.len(), 1);
        let InputEvent::Gesture(gesture) = events[0] else {
            panic!("expected a gesture, got {:?}", events[0]);
        };
        assert_eq!(gesture.origin, Vector2::new(200.0, 150.0));
        assert_eq!(gesture.release, Vector2::new(180.0, 190.0));
        assert_eq!(gesture.held, Duration::from_millis(1500));
        assert_eq!(manager.aim_origin(), None);
    }

    #[test]
    fn test_cancelled_press_emits_nothing() {
        let now = Instant::now();
        let mut manager = InputManager::default();

        manager.process_mouse_button(MouseButton::Left, ElementState::Pressed, now);
        manager.cancel_pointer();
        manager.process_mouse_button(MouseButton::Left, ElementState::Released, now);

        assert!(manager.drain().is_empty());
    }

    #[test]
    fn test_keyboard_bound_spawn_drops_under_cursor() {
        let mut config = InputConfig::default();
        config.bind(InputSource::key(KeyCode::KeyB), Action::Spawn);
        let mut manager = InputManager::new(config);
        manager.process_cursor_moved(Vector2::new(10.0, 20.0));

        manager.process_key(KeyCode::KeyB, ElementState::Pressed, false);

        let events = manager.drain();
        assert!(matches!(
            events.as_slice(),
            [InputEvent::Gesture(g)] if g.is_click() && g.release == Vector2::new(10.0, 20.0)
        ));
    }
}
