//! Error types for ray evaluation.

use prism_kernel_math::MathError;
use thiserror::Error;

/// Errors that abort the evaluation of a single ray.
///
/// These are deterministic computational failures; the driver decides
/// whether to skip the affected pixel or halt the render. An empty
/// intersection set is not an error.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum TraceError {
    /// The object's transform has determinant zero, so the ray cannot be
    /// mapped into object space.
    #[error("object transform is not invertible: {0}")]
    NotInvertible(#[from] MathError),

    /// The ray direction has zero magnitude and defines no line.
    #[error("ray direction has zero magnitude")]
    DegenerateRay,
}
