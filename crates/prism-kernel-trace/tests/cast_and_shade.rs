//! End-to-end: cast a ray through a transformed sphere, pick the hit, and
//! shade it. This is the full per-pixel pipeline a driver runs.

use prism_kernel_math::transform::{scaling, translation};
use prism_kernel_math::{Color, Tuple, EPSILON};
use prism_kernel_trace::{PointLight, Ray, Sphere, Surface};

#[test]
fn test_shade_the_visible_hit_of_a_centered_sphere() {
    let sphere = Sphere::new();
    let light = PointLight::new(Tuple::point(0.0, 0.0, -10.0), Color::WHITE);
    let ray = Ray::new(Tuple::point(0.0, 0.0, -5.0), Tuple::vector(0.0, 0.0, 1.0));

    let xs = sphere.intersect(&ray).unwrap();
    let hit = xs.hit().unwrap();
    assert_eq!(hit.t, 4.0);

    let point = ray.position(hit.t);
    let normal = hit.object.normal_at(point).unwrap();
    let eye = -ray.direction;
    let color = hit.object.material().lighting(&light, point, eye, normal);

    // Head-on view of the default material with the light behind the eye:
    // full ambient + diffuse + specular.
    assert_eq!(color, Color::new(1.9, 1.9, 1.9));
}

#[test]
fn test_shade_a_scaled_sphere() {
    let mut sphere = Sphere::new();
    sphere.set_transform(scaling(2.0, 2.0, 2.0));
    let ray = Ray::new(Tuple::point(0.0, 0.0, -5.0), Tuple::vector(0.0, 0.0, 1.0));

    let xs = sphere.intersect(&ray).unwrap();
    let hit = xs.hit().unwrap();
    assert_eq!(hit.t, 3.0);

    let point = ray.position(hit.t);
    let normal = hit.object.normal_at(point).unwrap();
    assert_eq!(normal, Tuple::vector(0.0, 0.0, -1.0));
    assert!((normal.magnitude() - 1.0).abs() < EPSILON);
}

#[test]
fn test_miss_leaves_nothing_to_shade() {
    let mut sphere = Sphere::new();
    sphere.set_transform(translation(5.0, 0.0, 0.0));
    let ray = Ray::new(Tuple::point(0.0, 0.0, -5.0), Tuple::vector(0.0, 0.0, 1.0));
    let xs = sphere.intersect(&ray).unwrap();
    assert!(xs.hit().is_none());
}

#[test]
fn test_grazing_ray_shades_from_the_silhouette() {
    // A ray aimed at the sphere's edge still produces a valid unit normal
    // nearly perpendicular to the view direction.
    let sphere = Sphere::new();
    let origin = Tuple::point(0.0, 0.0, -5.0);
    let target = Tuple::point(0.0, 0.99, 0.0);
    let ray = Ray::new(origin, (target - origin).normalize());

    let xs = sphere.intersect(&ray).unwrap();
    let hit = xs.hit().expect("grazing ray should still hit");
    let normal = hit.object.normal_at(ray.position(hit.t)).unwrap();
    assert!((normal.magnitude() - 1.0).abs() < EPSILON);
    assert!(normal.y > 0.9);
}
