//! Surface materials and Phong lighting evaluation.

use prism_kernel_math::{Color, Tuple};

use crate::PointLight;

/// Phong shading parameters for a surface.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Material {
    /// Base surface color.
    pub color: Color,
    /// Ambient reflection, typically in `[0, 1]`.
    pub ambient: f64,
    /// Diffuse reflection, typically in `[0, 1]`.
    pub diffuse: f64,
    /// Specular reflection, typically in `[0, 1]`.
    pub specular: f64,
    /// Specular highlight exponent; higher is tighter.
    pub shininess: f64,
}

impl Default for Material {
    fn default() -> Self {
        Self {
            color: Color::WHITE,
            ambient: 0.1,
            diffuse: 0.9,
            specular: 0.9,
            shininess: 200.0,
        }
    }
}

impl Material {
    /// Phong lighting at a point on a surface with this material.
    ///
    /// `eyev` and `normalv` must be unit vectors. Ambient always
    /// contributes; diffuse and specular drop to black when the light is on
    /// the far side of the surface, and specular additionally drops to
    /// black when the reflection points away from the eye. The sum is not
    /// clamped; mapping into displayable range belongs to the canvas
    /// boundary.
    pub fn lighting(
        &self,
        light: &PointLight,
        point: Tuple,
        eyev: Tuple,
        normalv: Tuple,
    ) -> Color {
        let effective_color = self.color * light.intensity;
        let lightv = (light.position - point).normalize();

        let ambient = effective_color * self.ambient;

        let light_dot_normal = lightv.dot(&normalv);
        if light_dot_normal < 0.0 {
            return ambient;
        }

        let diffuse = effective_color * self.diffuse * light_dot_normal;

        let reflectv = (-lightv).reflect(&normalv);
        let reflect_dot_eye = reflectv.dot(&eyev);
        let specular = if reflect_dot_eye <= 0.0 {
            Color::BLACK
        } else {
            light.intensity * self.specular * reflect_dot_eye.powf(self.shininess)
        };

        ambient + diffuse + specular
    }
}
