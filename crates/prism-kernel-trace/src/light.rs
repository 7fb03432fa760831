//! Point light sources.

use prism_kernel_math::{Color, Tuple};

/// A point light: a position with no size and an intensity color.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointLight {
    /// World-space position of the light.
    pub position: Tuple,
    /// Light color and brightness combined.
    pub intensity: Color,
}

impl PointLight {
    /// Point light at `position` with the given `intensity`.
    pub fn new(position: Tuple, intensity: Color) -> Self {
        Self {
            position,
            intensity,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_light_has_position_and_intensity() {
        let position = Tuple::point(0.0, 0.0, 0.0);
        let intensity = Color::new(1.0, 1.0, 1.0);
        let light = PointLight::new(position, intensity);
        assert_eq!(light.position, position);
        assert_eq!(light.intensity, intensity);
    }
}
