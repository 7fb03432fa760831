//! Ray representation.

use prism_kernel_math::{Matrix, Tuple};

/// A ray in world space.
///
/// By construction convention `origin` is a point (w = 1) and `direction`
/// is a vector (w = 0); the transform math relies on it, since a w of zero
/// is what makes translation leave the direction alone.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ray {
    /// Starting point of the ray.
    pub origin: Tuple,
    /// Direction of travel. Not required to be unit length.
    pub direction: Tuple,
}

impl Ray {
    /// Ray from an origin point and a direction vector.
    pub fn new(origin: Tuple, direction: Tuple) -> Self {
        Self { origin, direction }
    }

    /// The point `origin + direction * t`.
    pub fn position(&self, t: f64) -> Tuple {
        self.origin + self.direction * t
    }

    /// New ray with origin and direction both multiplied by `matrix`.
    ///
    /// Used to carry a world-space ray into an object's local frame by
    /// passing the inverse of the object's transform.
    pub fn transform(&self, matrix: &Matrix) -> Self {
        Self {
            origin: matrix.mul_tuple(&self.origin),
            direction: matrix.mul_tuple(&self.direction),
        }
    }
}
