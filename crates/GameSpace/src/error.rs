//! # Errors
//!
//! Recoverable failures. Contract violations inside the transform math (a homogeneous
//! component that is not `1`, inverting a singular matrix through [`crate::matrix::AffineMatrix::inverse`])
//! are panics, not variants here.

use thiserror::Error;

/// Failures when building or inverting matrices from caller-supplied numbers.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum TransformError {
    #[error("matrix is not invertible (determinant {determinant})")]
    Singular { determinant: f64 },
    #[error("bottom row is ({m31}, {m32}, {m33}), expected (0, 0, 1)")]
    NotAffine { m31: f64, m32: f64, m33: f64 },
}

/// Invalid or unreadable [`crate::config::ViewportConfig`].
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("world_width must be finite and > 0, got {0}")]
    WorldWidth(f64),
    #[error("zoom limits must satisfy 0 < min <= max, got min {min}, max {max}")]
    ZoomLimits { min: f64, max: f64 },
    #[error("world_width {world_width} is outside the zoom limits [{min}, {max}]")]
    WorldWidthOutOfRange { world_width: f64, min: f64, max: f64 },
    #[error("zoom_in_factor must be in (0, 1), got {0}")]
    ZoomInFactor(f64),
    #[error("zoom_out_factor must be finite and > 1, got {0}")]
    ZoomOutFactor(f64),
    #[error("window size must be non-zero, got {width}x{height}")]
    WindowSize { width: u32, height: u32 },
    #[error("failed to parse config: {0}")]
    Parse(#[from] serde_json::Error),
}
