//! The per-pixel render loop: one sphere, one light, a wall behind.

use std::path::Path;

use anyhow::{Context, Result};
use log::{info, warn};

use prism_canvas::Canvas;
use prism_kernel_math::transform::scaling;
use prism_kernel_math::{Color, Tuple};
use prism_kernel_trace::{PointLight, Ray, Sphere, Surface};

/// Scene parameters, all plain values; the kernel has no configuration
/// surface of its own.
pub struct Scene {
    /// Canvas edge length in pixels.
    pub size: usize,
    /// Base color of the sphere's material.
    pub sphere_color: Color,
    /// Optional non-uniform scale applied to the sphere.
    pub sphere_scale: Option<(f64, f64, f64)>,
    /// World-space position of the point light.
    pub light_position: Tuple,
}

/// Cast a ray per pixel at the sphere, shade the hits, and write a PNG.
///
/// A pixel whose evaluation fails (non-invertible transform, degenerate
/// ray) is skipped with a warning rather than aborting the render.
pub fn run(scene: &Scene, output: &Path) -> Result<()> {
    let ray_origin = Tuple::point(0.0, 0.0, -5.0);
    let wall_z = 10.0;
    let wall_size = 7.0;
    let pixel_size = wall_size / scene.size as f64;
    let half = wall_size / 2.0;

    let mut canvas = Canvas::new(scene.size, scene.size);

    let mut sphere = Sphere::new();
    sphere.material.color = scene.sphere_color;
    if let Some((sx, sy, sz)) = scene.sphere_scale {
        sphere.set_transform(scaling(sx, sy, sz));
    }

    let light = PointLight::new(scene.light_position, Color::WHITE);

    let mut skipped = 0usize;
    for y in 0..scene.size {
        let world_y = half - pixel_size * y as f64;
        for x in 0..scene.size {
            let world_x = -half + pixel_size * x as f64;
            let target = Tuple::point(world_x, world_y, wall_z);
            let ray = Ray::new(ray_origin, (target - ray_origin).normalize());

            let xs = match sphere.intersect(&ray) {
                Ok(xs) => xs,
                Err(err) => {
                    warn!("skipping pixel ({x}, {y}): {err}");
                    skipped += 1;
                    continue;
                }
            };
            let Some(hit) = xs.hit() else {
                continue;
            };

            let point = ray.position(hit.t);
            let normal = match hit.object.normal_at(point) {
                Ok(normal) => normal,
                Err(err) => {
                    warn!("skipping pixel ({x}, {y}): {err}");
                    skipped += 1;
                    continue;
                }
            };
            let eye = -ray.direction;
            let color = hit.object.material().lighting(&light, point, eye, normal);
            canvas.write_pixel(x, y, color);
        }
    }

    info!(
        "rendered {}x{} pixels, {} skipped",
        scene.size, scene.size, skipped
    );

    save_png(&canvas, output)?;
    println!("Wrote {}", output.display());
    Ok(())
}

fn save_png(canvas: &Canvas, path: &Path) -> Result<()> {
    let image = image::RgbaImage::from_raw(
        canvas.width() as u32,
        canvas.height() as u32,
        canvas.to_rgba_bytes(),
    )
    .context("canvas buffer did not match its dimensions")?;
    image
        .save(path)
        .with_context(|| format!("writing {}", path.display()))?;
    Ok(())
}
