// Math utilities: the 2D vector used by the simulation plus scalar helpers

use std::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Sub, SubAssign};

/// Minimal 2D vector for the physics core.
///
/// Operators never touch their operands: `a + b` yields a new value and leaves
/// `a` alone. Mutation is explicit through the compound assignment operators
/// (`+=`, `-=`, `*=`, `/=`), which is how integration updates a body in place.
/// `Vector2` is `Copy`, so every binding is already an independent clone.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Vector2 {
    pub x: f32,
    pub y: f32,
}

impl Vector2 {
    pub const ZERO: Self = Self::new(0.0, 0.0);
    pub const X: Self = Self::new(1.0, 0.0);

    /// Create a new vector
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Dot product
    pub fn dot(self, other: Self) -> f32 {
        self.x * other.x + self.y * other.y
    }

    /// Squared length (no square root)
    pub fn magnitude_squared(self) -> f32 {
        self.dot(self)
    }

    /// Length of the vector
    pub fn magnitude(self) -> f32 {
        self.magnitude_squared().sqrt()
    }

    /// Unit vector in the same direction.
    ///
    /// Returns `None` for the zero vector, which has no direction.
    pub fn normalized(self) -> Option<Self> {
        let magnitude = self.magnitude();
        if magnitude > 0.0 && magnitude.is_finite() {
            Some(self / magnitude)
        } else {
            None
        }
    }

    /// Unit vector in the same direction, or `fallback` for the zero vector
    pub fn normalized_or(self, fallback: Self) -> Self {
        self.normalized().unwrap_or(fallback)
    }

    /// Distance between two points
    pub fn distance(self, other: Self) -> f32 {
        (self - other).magnitude()
    }

    /// True when both components are finite
    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

impl Add for Vector2 {
    type Output = Self;
    fn add(self, rhs: Self) -> Self {
        Self::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Vector2 {
    type Output = Self;
    fn sub(self, rhs: Self) -> Self {
        Self::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl Mul<f32> for Vector2 {
    type Output = Self;
    fn mul(self, scalar: f32) -> Self {
        Self::new(self.x * scalar, self.y * scalar)
    }
}

impl Div<f32> for Vector2 {
    type Output = Self;
    fn div(self, scalar: f32) -> Self {
        Self::new(self.x / scalar, self.y / scalar)
    }
}

impl Neg for Vector2 {
    type Output = Self;
    fn neg(self) -> Self {
        Self::new(-self.x, -self.y)
    }
}

impl AddAssign for Vector2 {
    fn add_assign(&mut self, rhs: Self) {
        self.x += rhs.x;
        self.y += rhs.y;
    }
}

impl SubAssign for Vector2 {
    fn sub_assign(&mut self, rhs: Self) {
        self.x -= rhs.x;
        self.y -= rhs.y;
    }
}

impl MulAssign<f32> for Vector2 {
    fn mul_assign(&mut self, scalar: f32) {
        self.x *= scalar;
        self.y *= scalar;
    }
}

impl DivAssign<f32> for Vector2 {
    fn div_assign(&mut self, scalar: f32) {
        self.x /= scalar;
        self.y /= scalar;
    }
}

impl From<glam::Vec2> for Vector2 {
    fn from(v: glam::Vec2) -> Self {
        Self::new(v.x, v.y)
    }
}

impl From<Vector2> for glam::Vec2 {
    fn from(v: Vector2) -> Self {
        glam::Vec2::new(v.x, v.y)
    }
}

/// Clamp a value between min and max
pub fn clamp<T: PartialOrd>(value: T, min: T, max: T) -> T {
    if value < min {
        min
    } else if value > max {
        max
    } else {
        value
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_operators_leave_operands_untouched() {
        let a = Vector2::new(1.0, 2.0);
        let b = Vector2::new(3.0, -4.0);

        assert_eq!(a + b, Vector2::new(4.0, -2.0));
        assert_eq!(a - b, Vector2::new(-2.0, 6.0));
        assert_eq!(a * 2.0, Vector2::new(2.0, 4.0));
        assert_eq!(b / 2.0, Vector2::new(1.5, -2.0));
        assert_eq!(-a, Vector2::new(-1.0, -2.0));

        assert_eq!(a, Vector2::new(1.0, 2.0));
        assert_eq!(b, Vector2::new(3.0, -4.0));
    }

    #[test]
    fn test_in_place_mutation() {
        let mut v = Vector2::new(1.0, 1.0);
        let snapshot = v;

        v += Vector2::new(1.0, 2.0);
        v *= 2.0;
        v -= Vector2::new(1.0, 1.0);
        v /= 3.0;

        assert_eq!(v, Vector2::new(1.0, 5.0 / 3.0));
        assert_eq!(snapshot, Vector2::new(1.0, 1.0));
    }

    #[test]
    fn test_magnitude_and_dot() {
        let v = Vector2::new(3.0, 4.0);
        assert_eq!(v.magnitude(), 5.0);
        assert_eq!(v.magnitude_squared(), 25.0);
        assert_eq!(v.dot(Vector2::new(2.0, -1.0)), 2.0);
        assert_eq!(Vector2::ZERO.distance(v), 5.0);
    }

    #[test]
    fn test_normalized() {
        let n = Vector2::new(0.0, -7.5).normalized().unwrap();
        assert_relative_eq!(n.x, 0.0);
        assert_relative_eq!(n.y, -1.0);

        let n = Vector2::new(3.0, 4.0).normalized().unwrap();
        assert_relative_eq!(n.magnitude(), 1.0, epsilon = 1e-6);
    }

    #[test]
    fn test_normalized_zero_has_no_direction() {
        assert_eq!(Vector2::ZERO.normalized(), None);
        assert_eq!(Vector2::ZERO.normalized_or(Vector2::X), Vector2::X);
    }

    #[test]
    fn test_glam_round_trip() {
        let v = Vector2::new(1.5, -2.5);
        let g: glam::Vec2 = v.into();
        assert_eq!(g, glam::Vec2::new(1.5, -2.5));
        assert_eq!(Vector2::from(g), v);
    }

    #[test]
    fn test_clamp() {
        assert_eq!(clamp(5.0, 0.0, 10.0), 5.0);
        assert_eq!(clamp(-5.0, 0.0, 10.0), 0.0);
        assert_eq!(clamp(15.0, 0.0, 10.0), 10.0);
    }
}
