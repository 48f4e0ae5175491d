// The ball sandbox: a physics world plus the rules for filling it

use super::spawn::{SpawnRequest, BALL_RADIUS};
use crate::core::math::Vector2;
use crate::engine::input::PointerGesture;
use crate::engine::physics::{Body, BodyHandle, Bounds, PhysicsConfig, PhysicsError, PhysicsWorld};

/// Mass of the ball placed at the centre when the sandbox starts
const STARTING_BALL_MASS: f32 = 2.0;

/// Owns the simulation and everything that feeds it
pub struct Sandbox {
    world: PhysicsWorld,
    rng: fastrand::Rng,
}

impl Sandbox {
    /// Create a sandbox of the given size with one ball in the middle
    pub fn new(bounds: Bounds) -> Result<Self, PhysicsError> {
        Self::with_rng(bounds, PhysicsConfig::default(), fastrand::Rng::new())
    }

    /// Create a sandbox with explicit constants and random source
    pub fn with_rng(
        bounds: Bounds,
        config: PhysicsConfig,
        rng: fastrand::Rng,
    ) -> Result<Self, PhysicsError> {
        let mut world = PhysicsWorld::with_config(bounds, config);
        world.create_body(
            Vector2::new(bounds.width / 2.0, bounds.height / 2.0),
            BALL_RADIUS,
            STARTING_BALL_MASS,
        )?;

        log::info!(
            "Sandbox ready: {}x{}, gravity {}",
            bounds.width,
            bounds.height,
            world.config().gravity
        );

        Ok(Self { world, rng })
    }

    /// Spawn a ball for a finished pointer gesture.
    ///
    /// Invalid balls are logged and never enter the world.
    pub fn spawn(&mut self, gesture: &PointerGesture) -> Option<BodyHandle> {
        let request = SpawnRequest::from_gesture(gesture, &mut self.rng);
        match self.spawn_request(request) {
            Ok(handle) => {
                log::debug!(
                    "Spawned ball #{} at ({:.1}, {:.1}) mass {} velocity ({:.2}, {:.2})",
                    handle.index(),
                    request.position.x,
                    request.position.y,
                    request.mass,
                    request.velocity.x,
                    request.velocity.y
                );
                Some(handle)
            }
            Err(err) => {
                log::warn!("Rejected spawn: {}", err);
                None
            }
        }
    }

    /// Create the body described by `request` and give it its launch velocity
    pub fn spawn_request(&mut self, request: SpawnRequest) -> Result<BodyHandle, PhysicsError> {
        let handle = self
            .world
            .create_body(request.position, request.radius, request.mass)?;
        self.world.apply_velocity(handle, request.velocity)?;
        Ok(handle)
    }

    /// Run `ticks` fixed steps of `dt` seconds
    pub fn update(&mut self, ticks: u32, dt: f32) {
        for _ in 0..ticks {
            self.world.advance(dt);
        }
        if ticks > 0 {
            log::trace!(
                "Step {}: {} balls, {} contacts",
                self.world.step_count(),
                self.world.len(),
                self.world.last_contact_count()
            );
        }
    }

    /// Remove every ball
    pub fn clear(&mut self) {
        let count = self.world.len();
        self.world.clear();
        log::info!("Cleared {} balls", count);
    }

    /// Bodies for drawing, in insertion order
    pub fn bodies(&self) -> impl Iterator<Item = &Body> {
        self.world.bodies().map(|(_, body)| body)
    }

    /// Read access to the world
    pub fn world(&self) -> &PhysicsWorld {
        &self.world
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    fn sandbox() -> Sandbox {
        Sandbox::with_rng(
            Bounds::new(800.0, 600.0),
            PhysicsConfig::default(),
            fastrand::Rng::with_seed(5),
        )
        .unwrap()
    }

    #[test]
    fn test_starts_with_one_centred_ball() {
        let sandbox = sandbox();
        let bodies: Vec<&Body> = sandbox.bodies().collect();

        assert_eq!(bodies.len(), 1);
        assert_eq!(bodies[0].position(), Vector2::new(400.0, 300.0));
        assert_eq!(bodies[0].mass(), STARTING_BALL_MASS);
    }

    #[test]
    fn test_spawn_from_drag() {
        let mut sandbox = sandbox();
        let gesture = PointerGesture {
            origin: Vector2::new(100.0, 100.0),
            release: Vector2::new(80.0, 130.0),
            held: Duration::from_millis(400),
        };

        let handle = sandbox.spawn(&gesture).unwrap();
        let body = sandbox.world().body(handle).unwrap();

        assert_eq!(body.position(), Vector2::new(100.0, 100.0));
        assert_eq!(body.velocity(), Vector2::new(2.0, -3.0));
        assert_eq!(body.mass(), 1.0);
    }

    #[test]
    fn test_invalid_request_is_rejected() {
        let mut sandbox = sandbox();
        let request = SpawnRequest {
            position: Vector2::new(50.0, 50.0),
            velocity: Vector2::ZERO,
            radius: 0.0,
            mass: 1.0,
        };

        assert_eq!(
            sandbox.spawn_request(request),
            Err(PhysicsError::InvalidRadius(0.0))
        );
        assert_eq!(sandbox.world().len(), 1);
    }

    #[test]
    fn test_update_runs_each_tick() {
        let mut sandbox = sandbox();
        sandbox.update(3, 1.0 / 60.0);
        assert_eq!(sandbox.world().step_count(), 3);

        sandbox.update(0, 1.0 / 60.0);
        assert_eq!(sandbox.world().step_count(), 3);
    }

    #[test]
    fn test_clear_removes_every_ball() {
        let mut sandbox = sandbox();
        sandbox.clear();
        assert_eq!(sandbox.bodies().count(), 0);
        assert_eq!(sandbox.world().bounds(), Bounds::new(800.0, 600.0));
    }
}
