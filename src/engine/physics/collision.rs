use super::body::Body;
use crate::core::math::Vector2;

/// Normal used when two centres coincide exactly and no direction exists
pub const FALLBACK_NORMAL: Vector2 = Vector2::X;

/// Result of resolving one overlapping pair
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Contact {
    /// Unit normal pointing from `b` towards `a`
    pub normal: Vector2,
    /// Overlap depth before positional correction
    pub penetration: f32,
    /// Impulse applied to `a` (the negation went to `b`); zero when skipped
    pub impulse: Vector2,
}

impl Contact {
    /// True if the bodies were approaching and an impulse was applied
    pub fn had_impulse(&self) -> bool {
        self.impulse != Vector2::ZERO
    }
}

/// Circle-circle overlap test on centre distance
pub fn overlaps(a: &Body, b: &Body) -> bool {
    a.position().distance(b.position()) < a.radius() + b.radius()
}

/// Separate two overlapping circles and exchange an impulse along the contact
/// normal.
///
/// The overlap is pushed out along the normal in proportion to each body's
/// inverse mass, which removes the penetration without changing momentum.
/// If the bodies are already moving apart along the normal no impulse is
/// applied. Returns `None` (and changes nothing) when the circles do not
/// overlap.
///
/// Swapping the arguments gives the same result, except when the centres
/// coincide: the fixed [`FALLBACK_NORMAL`] then always pushes the first
/// argument towards +x, so the two orders separate the bodies in opposite
/// directions.
pub fn resolve(a: &mut Body, b: &mut Body, restitution: f32) -> Option<Contact> {
    let delta = a.position() - b.position();
    let distance = delta.magnitude();

    let penetration = a.radius() + b.radius() - distance;
    if penetration <= 0.0 {
        return None;
    }

    if delta == Vector2::ZERO {
        log::trace!("coincident centres, using fallback normal");
    }
    let normal = delta.normalized_or(FALLBACK_NORMAL);
    let mtd = normal * penetration;

    let im1 = a.inverse_mass();
    let im2 = b.inverse_mass();
    let im_sum = im1 + im2;

    a.translate(mtd * (im1 / im_sum));
    b.translate(-(mtd * (im2 / im_sum)));

    let relative_velocity = a.velocity() - b.velocity();
    let vn = relative_velocity.dot(normal);

    if vn > 0.0 {
        return Some(Contact {
            normal,
            penetration,
            impulse: Vector2::ZERO,
        });
    }

    let magnitude = -(1.0 + restitution) * vn / im_sum;
    let impulse = normal * magnitude;

    a.add_velocity(impulse * im1);
    b.add_velocity(-(impulse * im2));

    Some(Contact {
        normal,
        penetration,
        impulse,
    })
}
