use super::world::BodyHandle;

/// Errors surfaced by the physics world.
///
/// Numeric corner cases inside a step (coincident centres, a non-positive
/// damper input) are not errors; they are substituted with defined values.
#[derive(Debug, Clone, Copy, PartialEq, thiserror::Error)]
pub enum PhysicsError {
    #[error("Body radius must be positive and finite, got {0}")]
    InvalidRadius(f32),

    #[error("Body mass must be positive and finite, got {0}")]
    InvalidMass(f32),

    #[error("Timestep must be non-negative and finite, got {0}")]
    InvalidTimestep(f32),

    #[error("No body with handle {0:?}")]
    UnknownBody(BodyHandle),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_physics_error_display() {
        let err = PhysicsError::InvalidMass(0.0);
        assert_eq!(err.to_string(), "Body mass must be positive and finite, got 0");

        let err = PhysicsError::InvalidTimestep(-1.5);
        assert_eq!(
            err.to_string(),
            "Timestep must be non-negative and finite, got -1.5"
        );
    }
}
