// Spawn rules: how a pointer gesture becomes a ball

use crate::core::math::Vector2;
use crate::engine::input::PointerGesture;
use std::time::Duration;

/// Radius of every spawned ball, in pixels
pub const BALL_RADIUS: f32 = 10.0;

/// The drag vector is divided by this to get the launch velocity
pub const DRAG_DIVISOR: f32 = 10.0;

/// Largest horizontal speed given to a ball dropped with a plain click
pub const CLICK_NUDGE: f32 = 1.0;

/// Everything needed to create a ball
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpawnRequest {
    pub position: Vector2,
    pub velocity: Vector2,
    pub radius: f32,
    pub mass: f32,
}

/// Mass from how long the button was held: one unit per started second,
/// never less than one.
pub fn mass_from_hold(held: Duration) -> f32 {
    let seconds = held.as_millis() as f32 / 1000.0;
    seconds.ceil().max(1.0)
}

impl SpawnRequest {
    /// Build a request from a finished gesture.
    ///
    /// A drag spawns at the press point and launches towards it from the
    /// release point, like a slingshot. A click spawns under the cursor with a
    /// small random sideways nudge drawn from `rng`.
    pub fn from_gesture(gesture: &PointerGesture, rng: &mut fastrand::Rng) -> Self {
        let (position, velocity) = if gesture.is_click() {
            let nudge = (rng.f32() * 2.0 - 1.0) * CLICK_NUDGE;
            (gesture.release, Vector2::new(nudge, 0.0))
        } else {
            (gesture.origin, gesture.pull() / DRAG_DIVISOR)
        };

        Self {
            position,
            velocity,
            radius: BALL_RADIUS,
            mass: mass_from_hold(gesture.held),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn gesture(origin: Vector2, release: Vector2, held_ms: u64) -> PointerGesture {
        PointerGesture {
            origin,
            release,
            held: Duration::from_millis(held_ms),
        }
    }

    #[test]
    fn test_mass_from_hold() {
        assert_eq!(mass_from_hold(Duration::ZERO), 1.0);
        assert_eq!(mass_from_hold(Duration::from_millis(1)), 1.0);
        assert_eq!(mass_from_hold(Duration::from_millis(1000)), 1.0);
        assert_eq!(mass_from_hold(Duration::from_millis(1001)), 2.0);
        assert_eq!(mass_from_hold(Duration::from_millis(3500)), 4.0);
    }

    #[test]
    fn test_drag_launches_from_origin() {
        let mut rng = fastrand::Rng::with_seed(3);
        let g = gesture(Vector2::new(300.0, 200.0), Vector2::new(250.0, 260.0), 2100);

        let request = SpawnRequest::from_gesture(&g, &mut rng);

        assert_eq!(request.position, Vector2::new(300.0, 200.0));
        assert_eq!(request.velocity, Vector2::new(5.0, -6.0));
        assert_eq!(request.mass, 3.0);
        assert_eq!(request.radius, BALL_RADIUS);
    }

    #[test]
    fn test_click_gets_small_horizontal_nudge() {
        let mut rng = fastrand::Rng::with_seed(11);
        let at = Vector2::new(120.0, 80.0);

        for _ in 0..100 {
            let request = SpawnRequest::from_gesture(&gesture(at, at, 0), &mut rng);
            assert_eq!(request.position, at);
            assert_eq!(request.velocity.y, 0.0);
            assert!(request.velocity.x.abs() <= CLICK_NUDGE);
            assert_eq!(request.mass, 1.0);
        }
    }
}
