//! Affine transform builders.
//!
//! Pure functions producing 4x4 matrices. Composition is ordinary matrix
//! multiplication in reverse application order: `c.mul(&b).mul(&a)` applies
//! `a` first.

use crate::Matrix;

/// Translation by `(x, y, z)`.
///
/// Moves points and leaves vectors (w = 0) unchanged.
pub fn translation(x: f64, y: f64, z: f64) -> Matrix {
    let mut m = Matrix::identity();
    m[(0, 3)] = x;
    m[(1, 3)] = y;
    m[(2, 3)] = z;
    m
}

/// Non-uniform scale by `(x, y, z)`.
pub fn scaling(x: f64, y: f64, z: f64) -> Matrix {
    let mut m = Matrix::identity();
    m[(0, 0)] = x;
    m[(1, 1)] = y;
    m[(2, 2)] = z;
    m
}

/// Right-handed rotation about the X axis by `radians`.
pub fn rotation_x(radians: f64) -> Matrix {
    let (s, c) = radians.sin_cos();
    let mut m = Matrix::identity();
    m[(1, 1)] = c;
    m[(1, 2)] = -s;
    m[(2, 1)] = s;
    m[(2, 2)] = c;
    m
}

/// Right-handed rotation about the Y axis by `radians`.
pub fn rotation_y(radians: f64) -> Matrix {
    let (s, c) = radians.sin_cos();
    let mut m = Matrix::identity();
    m[(0, 0)] = c;
    m[(0, 2)] = s;
    m[(2, 0)] = -s;
    m[(2, 2)] = c;
    m
}

/// Right-handed rotation about the Z axis by `radians`.
pub fn rotation_z(radians: f64) -> Matrix {
    let (s, c) = radians.sin_cos();
    let mut m = Matrix::identity();
    m[(0, 0)] = c;
    m[(0, 1)] = -s;
    m[(1, 0)] = s;
    m[(1, 1)] = c;
    m
}

/// Shear: each parameter moves one coordinate in proportion to another,
/// `xy` being "x in proportion to y" and so on.
pub fn shearing(xy: f64, xz: f64, yx: f64, yz: f64, zx: f64, zy: f64) -> Matrix {
    let mut m = Matrix::identity();
    m[(0, 1)] = xy;
    m[(0, 2)] = xz;
    m[(1, 0)] = yx;
    m[(1, 2)] = yz;
    m[(2, 0)] = zx;
    m[(2, 1)] = zy;
    m
}
