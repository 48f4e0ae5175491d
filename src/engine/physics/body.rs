use super::config::PhysicsConfig;
use super::error::PhysicsError;
use crate::core::math::{clamp, Vector2};

/// Axis-aligned extent of the simulation space.
///
/// The origin is the top-left corner and y grows downwards, so the floor is at
/// `y = height`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    pub width: f32,
    pub height: f32,
}

impl Bounds {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }
}

/// Ratio applied to the reflected velocity component when a body hits a wall.
///
/// `damping / (2 * sqrt(mass * mass * acceleration_y))`, read from the body's
/// acceleration accumulator at the moment of impact. When the radicand is not
/// strictly positive the expression has no value and `damping` is used as is.
/// The result never exceeds 1, so a wall never adds energy.
pub fn damping_ratio(damping: f32, mass: f32, acceleration_y: f32) -> f32 {
    let radicand = mass * mass * acceleration_y;
    if !(radicand > 0.0 && radicand.is_finite()) {
        log::trace!(
            "damper radicand {} out of domain (mass {}, ay {}), falling back to {}",
            radicand,
            mass,
            acceleration_y,
            damping
        );
        return clamp(damping, 0.0, 1.0);
    }

    clamp(damping / (2.0 * radicand.sqrt()), 0.0, 1.0)
}

/// A circular rigid body
#[derive(Debug, Clone, PartialEq)]
pub struct Body {
    position: Vector2,
    velocity: Vector2,
    acceleration: Vector2,
    radius: f32,
    mass: f32,
}

impl Body {
    /// Create a body at rest.
    ///
    /// Fails when the radius or mass is not a positive finite number; such a
    /// body would break inverse-mass resolution.
    pub fn new(position: Vector2, radius: f32, mass: f32) -> Result<Self, PhysicsError> {
        if !(radius > 0.0 && radius.is_finite()) {
            return Err(PhysicsError::InvalidRadius(radius));
        }
        if !(mass > 0.0 && mass.is_finite()) {
            return Err(PhysicsError::InvalidMass(mass));
        }

        Ok(Self {
            position,
            velocity: Vector2::ZERO,
            acceleration: Vector2::ZERO,
            radius,
            mass,
        })
    }

    pub fn position(&self) -> Vector2 {
        self.position
    }

    pub fn velocity(&self) -> Vector2 {
        self.velocity
    }

    pub fn acceleration(&self) -> Vector2 {
        self.acceleration
    }

    pub fn radius(&self) -> f32 {
        self.radius
    }

    pub fn mass(&self) -> f32 {
        self.mass
    }

    pub fn inverse_mass(&self) -> f32 {
        1.0 / self.mass
    }

    pub fn set_velocity(&mut self, velocity: Vector2) {
        self.velocity = velocity;
    }

    /// Add a velocity change directly (used for launch velocity at spawn time)
    pub fn add_velocity(&mut self, delta: Vector2) {
        self.velocity += delta;
    }

    pub(crate) fn translate(&mut self, offset: Vector2) {
        self.position += offset;
    }

    /// Advance one step: gravity, semi-implicit Euler, then the two decays.
    ///
    /// Velocity is in units per step, so the accumulated acceleration is added
    /// to it without another `dt` factor.
    pub fn integrate(&mut self, dt: f32, config: &PhysicsConfig) {
        self.acceleration += Vector2::new(0.0, config.gravity) * dt;

        self.velocity += self.acceleration;
        self.position += self.velocity;

        self.acceleration *= config.acceleration_decay;
        self.velocity *= config.velocity_decay;
    }

    /// Clamp the body inside `bounds` and reflect the velocity component normal
    /// to every edge it crossed, scaled by `ratio`.
    ///
    /// Each edge is checked on its own, so a corner hit clamps both axes.
    /// Returns true if any edge was hit.
    pub fn collide_with_bounds(&mut self, bounds: Bounds, ratio: f32) -> bool {
        let mut hit = false;

        // Top
        if self.position.y < self.radius {
            self.position.y = self.radius;
            self.velocity.y = -self.velocity.y * ratio;
            hit = true;
        }

        // Bottom
        if self.position.y > bounds.height - self.radius {
            self.position.y = bounds.height - self.radius;
            self.velocity.y = -self.velocity.y * ratio;
            hit = true;
        }

        // Left
        if self.position.x < self.radius {
            self.position.x = self.radius;
            self.velocity.x = -self.velocity.x * ratio;
            hit = true;
        }

        // Right
        if self.position.x > bounds.width - self.radius {
            self.position.x = bounds.width - self.radius;
            self.velocity.x = -self.velocity.x * ratio;
            hit = true;
        }

        hit
    }

    /// Pull the centre back inside `bounds` without touching velocity.
    ///
    /// Pairwise positional correction runs after the wall pass and can push a
    /// body into a wall; this keeps the containment guarantee for the step.
    pub fn clamp_to_bounds(&mut self, bounds: Bounds) {
        self.position.x = clamp(self.position.x, self.radius, bounds.width - self.radius);
        self.position.y = clamp(self.position.y, self.radius, bounds.height - self.radius);
    }

    /// Integrate and then resolve wall contacts with this body's damper ratio.
    pub fn step(&mut self, dt: f32, bounds: Bounds, config: &PhysicsConfig) -> bool {
        self.integrate(dt, config);
        let ratio = damping_ratio(config.damping, self.mass, self.acceleration.y);
        self.collide_with_bounds(bounds, ratio)
    }
}

/// Builder for spawning bodies with an initial velocity
#[derive(Debug, Clone)]
pub struct BodyBuilder {
    position: Vector2,
    velocity: Vector2,
    radius: f32,
    mass: f32,
}

impl BodyBuilder {
    /// Start a body with the given radius and mass at the origin
    pub fn new(radius: f32, mass: f32) -> Self {
        Self {
            position: Vector2::ZERO,
            velocity: Vector2::ZERO,
            radius,
            mass,
        }
    }

    /// Set the initial position of the body
    pub fn position(mut self, x: f32, y: f32) -> Self {
        self.position = Vector2::new(x, y);
        self
    }

    /// Set the initial velocity (units per step)
    pub fn velocity(mut self, x: f32, y: f32) -> Self {
        self.velocity = Vector2::new(x, y);
        self
    }

    /// Build the body, validating radius and mass
    pub fn build(self) -> Result<Body, PhysicsError> {
        let mut body = Body::new(self.position, self.radius, self.mass)?;
        body.set_velocity(self.velocity);
        Ok(body)
    }
}
