//! Intersectable surfaces.
//!
//! [`Surface`] is the seam where further primitives would plug in: the
//! intersection and hit machinery only ever sees the trait, so adding a
//! plane or cylinder touches nothing outside this module.

use std::fmt;

use prism_kernel_math::{Matrix, Tuple};

use crate::{Intersection, Intersections, Material, Ray, TraceError};

/// A surface that rays can intersect.
pub trait Surface: fmt::Debug {
    /// All intersections of `ray` with this surface, in generation order.
    ///
    /// Tangent contacts and intersections behind the ray origin are
    /// included; an empty set is a miss, not an error.
    fn intersect<'a>(&'a self, ray: &Ray) -> Result<Intersections<'a>, TraceError>;

    /// The unit surface normal at a world-space point on the surface.
    fn normal_at(&self, world_point: Tuple) -> Result<Tuple, TraceError>;

    /// The surface's shading material.
    fn material(&self) -> &Material;
}

/// A unit sphere centered at the object-space origin.
///
/// Scale, rotation, and translation into world space live entirely in
/// `transform`; the implicit equation stays `x² + y² + z² = 1` and every
/// query first maps into object space through the inverse transform.
#[derive(Debug, Clone, PartialEq)]
pub struct Sphere {
    /// Object-to-world transform. Identity by default.
    pub transform: Matrix,
    /// Shading material. Default material by default.
    pub material: Material,
}

impl Sphere {
    /// Unit sphere with the identity transform and default material.
    pub fn new() -> Self {
        Self {
            transform: Matrix::identity(),
            material: Material::default(),
        }
    }

    /// Replace the object-to-world transform.
    pub fn set_transform(&mut self, transform: Matrix) {
        self.transform = transform;
    }
}

impl Default for Sphere {
    fn default() -> Self {
        Self::new()
    }
}

impl Surface for Sphere {
    fn intersect<'a>(&'a self, ray: &Ray) -> Result<Intersections<'a>, TraceError> {
        if ray.direction.magnitude() == 0.0 {
            return Err(TraceError::DegenerateRay);
        }

        let local = ray.transform(&self.transform.inverse()?);
        let sphere_to_ray = local.origin - Tuple::point(0.0, 0.0, 0.0);

        let a = local.direction.dot(&local.direction);
        let b = 2.0 * local.direction.dot(&sphere_to_ray);
        let c = sphere_to_ray.dot(&sphere_to_ray) - 1.0;

        let discriminant = b * b - 4.0 * a * c;
        if discriminant < 0.0 {
            return Ok(Intersections::new());
        }

        let sqrt_disc = discriminant.sqrt();
        let t1 = (-b - sqrt_disc) / (2.0 * a);
        let t2 = (-b + sqrt_disc) / (2.0 * a);

        let mut xs = Intersections::new();
        xs.push(Intersection::new(t1, self as &dyn Surface));
        xs.push(Intersection::new(t2, self as &dyn Surface));
        Ok(xs)
    }

    fn normal_at(&self, world_point: Tuple) -> Result<Tuple, TraceError> {
        let inverse = self.transform.inverse()?;
        let object_point = inverse.mul_tuple(&world_point);
        let object_normal = object_point - Tuple::point(0.0, 0.0, 0.0);

        // Normals transform by the transpose of the inverse, not the forward
        // matrix; otherwise non-uniform scaling skews them off the surface.
        let mut world_normal = inverse.transpose().mul_tuple(&object_normal);
        // The transpose smears translation terms into w; the normal is a
        // vector regardless.
        world_normal.w = 0.0;
        Ok(world_normal.normalize())
    }

    fn material(&self) -> &Material {
        &self.material
    }
}
