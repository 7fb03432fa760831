#![warn(missing_docs)]

//! Facade for the prism ray-tracing kernel.
//!
//! Re-exports the math, trace, and canvas crates so a driver can depend on
//! one crate and cast, intersect, and shade.
//!
//! # Example
//!
//! ```
//! use prism_kernel::prism_kernel_math::{Color, Tuple};
//! use prism_kernel::prism_kernel_trace::{PointLight, Ray, Sphere, Surface};
//!
//! let sphere = Sphere::new();
//! let light = PointLight::new(Tuple::point(-10.0, 10.0, -10.0), Color::WHITE);
//! let ray = Ray::new(Tuple::point(0.0, 0.0, -5.0), Tuple::vector(0.0, 0.0, 1.0));
//!
//! let xs = sphere.intersect(&ray).unwrap();
//! let hit = xs.hit().expect("the ray points at the sphere");
//! let point = ray.position(hit.t);
//! let normal = hit.object.normal_at(point).unwrap();
//! let color = hit
//!     .object
//!     .material()
//!     .lighting(&light, point, -ray.direction, normal);
//! assert!(color.r > 0.0);
//! ```

pub use prism_canvas;
pub use prism_kernel_math;
pub use prism_kernel_trace;
