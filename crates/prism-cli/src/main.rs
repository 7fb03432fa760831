//! prism CLI - demo renderer for the prism kernel
//!
//! Casts one ray per pixel at a single transformed sphere and writes the
//! shaded result to a PNG.

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

use prism_kernel_math::{Color, Tuple};

mod render;

#[derive(Parser)]
#[command(name = "prism")]
#[command(about = "Minimal ray-tracing kernel demo renderer", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Render the one-sphere scene to a PNG
    Render {
        /// Output PNG file
        #[arg(short, long, default_value = "ball.png")]
        output: PathBuf,

        /// Canvas size in pixels (the canvas is square)
        #[arg(short, long, default_value_t = 100)]
        size: usize,

        /// Sphere color as comma-separated R,G,B in [0,1]
        #[arg(long, default_value = "1,0.7,1", value_parser = parse_color)]
        color: Color,

        /// Light position as comma-separated X,Y,Z
        #[arg(long, default_value = "-10,10,-10", value_parser = parse_point)]
        light: Tuple,

        /// Optional sphere scale as comma-separated SX,SY,SZ
        #[arg(long, value_parser = parse_triple)]
        scale: Option<(f64, f64, f64)>,
    },
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Render {
            output,
            size,
            color,
            light,
            scale,
        }) => {
            let scene = render::Scene {
                size,
                sphere_color: color,
                sphere_scale: scale,
                light_position: light,
            };
            render::run(&scene, &output)?;
        }
        None => {
            // Default to the stock scene
            let scene = render::Scene {
                size: 100,
                sphere_color: Color::new(1.0, 0.7, 1.0),
                sphere_scale: None,
                light_position: Tuple::point(-10.0, 10.0, -10.0),
            };
            render::run(&scene, &PathBuf::from("ball.png"))?;
        }
    }

    Ok(())
}

fn parse_triple(s: &str) -> Result<(f64, f64, f64), String> {
    let parts: Vec<&str> = s.split(',').collect();
    if parts.len() != 3 {
        return Err(format!("expected three comma-separated numbers, got {s:?}"));
    }
    let mut values = [0.0; 3];
    for (value, part) in values.iter_mut().zip(&parts) {
        *value = part
            .trim()
            .parse::<f64>()
            .map_err(|e| format!("bad number {:?}: {e}", part.trim()))?;
    }
    Ok((values[0], values[1], values[2]))
}

fn parse_color(s: &str) -> Result<Color, String> {
    let (r, g, b) = parse_triple(s)?;
    Ok(Color::new(r, g, b))
}

fn parse_point(s: &str) -> Result<Tuple, String> {
    let (x, y, z) = parse_triple(s)?;
    Ok(Tuple::point(x, y, z))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_triple() {
        assert_eq!(parse_triple("1,0.7,1").unwrap(), (1.0, 0.7, 1.0));
        assert_eq!(parse_triple(" -10, 10 ,-10 ").unwrap(), (-10.0, 10.0, -10.0));
        assert!(parse_triple("1,2").is_err());
        assert!(parse_triple("1,2,x").is_err());
    }

    #[test]
    fn test_parse_point_is_a_point() {
        let p = parse_point("0,1,2").unwrap();
        assert!(p.is_point());
    }
}
