use super::body::{Body, Bounds};
use super::collision;
use super::config::PhysicsConfig;
use super::error::PhysicsError;
use crate::core::math::Vector2;

/// Stable identifier of a body inside a [`PhysicsWorld`].
///
/// Handles are insertion indices; they stay valid until the world is cleared.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BodyHandle(usize);

impl BodyHandle {
    pub fn index(self) -> usize {
        self.0
    }
}

/// Owns every body and advances them together
pub struct PhysicsWorld {
    /// Simulation constants
    config: PhysicsConfig,

    /// Extent of the simulation space (the walls)
    bounds: Bounds,

    /// Bodies in insertion order
    bodies: Vec<Body>,

    /// Number of non-trivial steps taken
    step_count: u64,

    /// Overlapping pairs resolved during the last step
    last_contact_count: usize,
}

impl PhysicsWorld {
    /// Create an empty world with default constants
    pub fn new(bounds: Bounds) -> Self {
        Self::with_config(bounds, PhysicsConfig::default())
    }

    /// Create an empty world with custom constants
    pub fn with_config(bounds: Bounds, config: PhysicsConfig) -> Self {
        Self {
            config,
            bounds,
            bodies: Vec::with_capacity(32),
            step_count: 0,
            last_contact_count: 0,
        }
    }

    /// Validate and add a body at rest
    pub fn create_body(
        &mut self,
        position: Vector2,
        radius: f32,
        mass: f32,
    ) -> Result<BodyHandle, PhysicsError> {
        let body = Body::new(position, radius, mass)?;
        Ok(self.add_body(body))
    }

    /// Add an already validated body
    pub fn add_body(&mut self, body: Body) -> BodyHandle {
        self.bodies.push(body);
        BodyHandle(self.bodies.len() - 1)
    }

    /// Advance the simulation by one tick.
    ///
    /// Every body is integrated and bounced off the walls in insertion order,
    /// then each overlapping pair `(i, j)` with `i < j` is resolved once, in
    /// index order, and bodies pushed into a wall by that pass are clamped back.
    /// A zero `dt` leaves the world untouched; a negative or non-finite one is
    /// logged and ignored.
    pub fn advance(&mut self, dt: f32) {
        if let Err(err) = validate_timestep(dt) {
            log::warn!("Skipping physics step: {}", err);
            return;
        }
        if dt == 0.0 {
            return;
        }

        for body in &mut self.bodies {
            body.step(dt, self.bounds, &self.config);
        }

        let mut contacts = 0;
        for i in 0..self.bodies.len() {
            let (head, tail) = self.bodies.split_at_mut(i + 1);
            let a = &mut head[i];
            for b in tail.iter_mut() {
                if collision::overlaps(a, b)
                    && collision::resolve(a, b, self.config.restitution).is_some()
                {
                    contacts += 1;
                }
            }
        }

        if contacts > 0 {
            for body in &mut self.bodies {
                body.clamp_to_bounds(self.bounds);
            }
        }

        self.last_contact_count = contacts;
        self.step_count += 1;
    }

    /// Get a body by handle
    pub fn body(&self, handle: BodyHandle) -> Option<&Body> {
        self.bodies.get(handle.0)
    }

    /// Get a mutable body by handle
    #[allow(dead_code)]
    pub fn body_mut(&mut self, handle: BodyHandle) -> Option<&mut Body> {
        self.bodies.get_mut(handle.0)
    }

    /// Add a velocity change to a body
    pub fn apply_velocity(
        &mut self,
        handle: BodyHandle,
        delta: Vector2,
    ) -> Result<(), PhysicsError> {
        let body = self
            .bodies
            .get_mut(handle.0)
            .ok_or(PhysicsError::UnknownBody(handle))?;
        body.add_velocity(delta);
        Ok(())
    }

    /// Iterate bodies with their handles, in insertion order
    pub fn bodies(&self) -> impl Iterator<Item = (BodyHandle, &Body)> {
        self.bodies
            .iter()
            .enumerate()
            .map(|(i, body)| (BodyHandle(i), body))
    }

    /// Number of bodies
    pub fn len(&self) -> usize {
        self.bodies.len()
    }

    /// True if the world has no bodies
    pub fn is_empty(&self) -> bool {
        self.bodies.is_empty()
    }

    /// Remove every body; all handles become invalid
    pub fn clear(&mut self) {
        self.bodies.clear();
        self.last_contact_count = 0;
    }

    /// Current wall extent
    pub fn bounds(&self) -> Bounds {
        self.bounds
    }

    /// Move the walls. Bodies outside are pushed back in on the next step.
    #[allow(dead_code)]
    pub fn set_bounds(&mut self, width: f32, height: f32) {
        self.bounds = Bounds::new(width, height);
    }

    /// Current constants
    pub fn config(&self) -> &PhysicsConfig {
        &self.config
    }

    /// Replace the constants
    #[allow(dead_code)]
    pub fn set_config(&mut self, config: PhysicsConfig) {
        self.config = config;
    }

    /// Number of steps taken so far
    pub fn step_count(&self) -> u64 {
        self.step_count
    }

    /// Overlapping pairs resolved during the last step
    pub fn last_contact_count(&self) -> usize {
        self.last_contact_count
    }
}

fn validate_timestep(dt: f32) -> Result<(), PhysicsError> {
    if dt >= 0.0 && dt.is_finite() {
        Ok(())
    } else {
        Err(PhysicsError::InvalidTimestep(dt))
    }
}
