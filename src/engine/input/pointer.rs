// Press/drag/release tracking for the spawn gesture

use crate::core::math::Vector2;
use std::time::{Duration, Instant};

/// A completed press-and-release of the spawn button
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointerGesture {
    /// Where the button went down (simulation space)
    pub origin: Vector2,
    /// Where the button came up (simulation space)
    pub release: Vector2,
    /// How long the button was held
    pub held: Duration,
}

impl PointerGesture {
    /// True if the pointer did not move between press and release
    pub fn is_click(&self) -> bool {
        self.origin == self.release
    }

    /// Vector from the release point back to the press point
    pub fn pull(&self) -> Vector2 {
        self.origin - self.release
    }
}

#[derive(Debug, Clone, Copy)]
struct Press {
    origin: Vector2,
    at: Instant,
}

/// Follows the cursor and turns press/release pairs into gestures
#[derive(Debug, Default)]
pub struct PointerTracker {
    /// Last known cursor position
    cursor: Vector2,
    /// Active press, if the button is down
    press: Option<Press>,
}

impl PointerTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a cursor move
    pub fn move_to(&mut self, position: Vector2) {
        self.cursor = position;
    }

    /// Check if the button is currently held
    pub fn is_pressed(&self) -> bool {
        self.press.is_some()
    }

    /// Where the current press started
    pub fn press_origin(&self) -> Option<Vector2> {
        self.press.map(|press| press.origin)
    }

    /// Button went down at the current cursor position
    pub fn press(&mut self, at: Instant) {
        self.press = Some(Press {
            origin: self.cursor,
            at,
        });
    }

    /// Button came up; returns the finished gesture if a press was active
    pub fn release(&mut self, at: Instant) -> Option<PointerGesture> {
        let press = self.press.take()?;
        Some(PointerGesture {
            origin: press.origin,
            release: self.cursor,
            held: at.saturating_duration_since(press.at),
        })
    }

    /// Forget an active press (e.g. when the window loses focus)
    pub fn cancel(&mut self) {
        self.press = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_click_gesture() {
        let start = Instant::now();
        let mut pointer = PointerTracker::new();
        pointer.move_to(Vector2::new(40.0, 50.0));

        pointer.press(start);
        assert!(pointer.is_pressed());
        let gesture = pointer.release(start + Duration::from_millis(250)).unwrap();

        assert!(gesture.is_click());
        assert_eq!(gesture.release, Vector2::new(40.0, 50.0));
        assert_eq!(gesture.held, Duration::from_millis(250));
        assert!(!pointer.is_pressed());
    }

    #[test]
    fn test_drag_gesture_pull_points_back_to_origin() {
        let start = Instant::now();
        let mut pointer = PointerTracker::new();
        pointer.move_to(Vector2::new(100.0, 100.0));
        pointer.press(start);
        pointer.move_to(Vector2::new(70.0, 140.0));

        let gesture = pointer.release(start).unwrap();

        assert!(!gesture.is_click());
        assert_eq!(gesture.origin, Vector2::new(100.0, 100.0));
        assert_eq!(gesture.pull(), Vector2::new(30.0, -40.0));
    }

    #[test]
    fn test_release_without_press() {
        let mut pointer = PointerTracker::new();
        assert!(pointer.release(Instant::now()).is_none());
    }

    #[test]
    fn test_cancel_drops_press() {
        let mut pointer = PointerTracker::new();
        pointer.press(Instant::now());
        pointer.cancel();
        assert!(pointer.release(Instant::now()).is_none());
    }
}
