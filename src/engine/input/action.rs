// Sandbox action definitions and default bindings

use winit::event::MouseButton;
use winit::keyboard::KeyCode;

/// Represents everything the user can ask the sandbox to do
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    /// Press to aim, release to drop a ball (drag to launch it)
    Spawn,

    // Meta actions
    TogglePause,
    Clear,
    Quit,
}

/// Represents an input source (keyboard key or mouse button)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InputSource {
    Keyboard(KeyCode),
    Mouse(MouseButton),
}

impl InputSource {
    /// Create a keyboard input source
    pub fn key(code: KeyCode) -> Self {
        Self::Keyboard(code)
    }

    /// Create a mouse button input source
    pub fn mouse(button: MouseButton) -> Self {
        Self::Mouse(button)
    }
}

/// Default keyboard/mouse bindings
pub fn default_bindings() -> Vec<(InputSource, Action)> {
    vec![
        (InputSource::mouse(MouseButton::Left), Action::Spawn),
        (InputSource::key(KeyCode::KeyP), Action::TogglePause),
        (InputSource::key(KeyCode::Space), Action::TogglePause),
        (InputSource::key(KeyCode::KeyC), Action::Clear),
        (InputSource::key(KeyCode::Escape), Action::Quit),
    ]
}
