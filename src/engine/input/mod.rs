// Input handling system
//
// Turns raw winit keyboard, mouse and cursor events into two kinds of sandbox
// input: bound actions (pause, clear, quit) and completed spawn gestures.
//
// ## Architecture
//
// - `action`: Defines sandbox actions and default bindings
// - `config`: Binding table and remapping
// - `pointer`: Press/drag/release tracking for spawning
// - `manager`: Main input manager coordinating everything
//
// ## Usage Example
//
// ```rust
// let mut input = InputManager::default();
//
// // In your event loop, forward events (cursor already in simulation space)
// input.process_cursor_moved(camera.screen_to_world(cursor));
// input.process_mouse_button(button, state, Instant::now());
//
// // Once per frame, handle what happened
// for event in input.drain() {
//     match event {
//         InputEvent::Gesture(gesture) => sandbox.spawn(&gesture),
//         InputEvent::Action(action) => { /* pause, clear, quit */ }
//     }
// }
// ```

pub mod action;
pub mod config;
pub mod manager;
pub mod pointer;

// Re-export commonly used types
pub use action::Action;
pub use manager::{InputEvent, InputManager};
pub use pointer::PointerGesture;
