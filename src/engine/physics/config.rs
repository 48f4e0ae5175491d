// Simulation-wide physics constants

/// Tunable constants shared by every body in a [`PhysicsWorld`](super::PhysicsWorld).
///
/// Units follow the simulation: distances in logical pixels, velocities in
/// pixels per step. Gravity is scaled by `dt` before it reaches the
/// acceleration accumulator, everything else is applied once per step.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PhysicsConfig {
    /// Downward acceleration (positive y is down)
    pub gravity: f32,
    /// Numerator of the per-body boundary damper ratio
    pub damping: f32,
    /// Coefficient of restitution for ball-ball impulses (1.0 = elastic)
    pub restitution: f32,
    /// Factor applied to the acceleration accumulator after each integration
    pub acceleration_decay: f32,
    /// Factor applied to velocity after each integration (air drag)
    pub velocity_decay: f32,
}

/// Default constants. The two decay factors are empirical and give the toy
/// its feel; keep them as they are.
pub const DEFAULT_CONFIG: PhysicsConfig = PhysicsConfig {
    gravity: 15.0,
    damping: 0.9,
    restitution: 1.0,
    acceleration_decay: 0.5,
    velocity_decay: 0.99,
};

impl Default for PhysicsConfig {
    fn default() -> Self {
        DEFAULT_CONFIG
    }
}

impl PhysicsConfig {
    /// Set gravity
    pub fn with_gravity(mut self, gravity: f32) -> Self {
        self.gravity = gravity;
        self
    }

    /// Set the boundary damping numerator
    pub fn with_damping(mut self, damping: f32) -> Self {
        self.damping = damping;
        self
    }

    /// Set ball-ball restitution
    #[allow(dead_code)]
    pub fn with_restitution(mut self, restitution: f32) -> Self {
        self.restitution = restitution;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = PhysicsConfig::default();
        assert_eq!(config.gravity, 15.0);
        assert_eq!(config.damping, 0.9);
        assert_eq!(config.restitution, 1.0);
        assert_eq!(config.acceleration_decay, 0.5);
        assert_eq!(config.velocity_decay, 0.99);
    }

    #[test]
    fn test_builders_only_touch_their_field() {
        let config = PhysicsConfig::default()
            .with_gravity(10.0)
            .with_damping(0.8)
            .with_restitution(0.5);

        assert_eq!(config.gravity, 10.0);
        assert_eq!(config.damping, 0.8);
        assert_eq!(config.restitution, 0.5);
        assert_eq!(config.velocity_decay, DEFAULT_CONFIG.velocity_decay);
    }
}
