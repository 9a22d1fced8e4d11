//! Error types for the zcast array boundaries.

use thiserror::Error;

/// Errors raised when index-aligned input arrays disagree in length.
///
/// These are the only errors zcast produces. Geometric degeneracies are
/// never errors; they are classified through
/// [`HitFlag`](crate::HitFlag), and ill-conditioned inputs below the
/// classification thresholds propagate NaN/inf silently. A length mismatch,
/// by contrast, is a programming error at the call site and is rejected
/// before any geometry runs.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CastError {
    /// The five batch arrays do not share one leading dimension.
    #[error("batch arrays disagree in length: origins={origins}, targets={targets}, corners={corner_a}/{corner_b}/{corner_c}")]
    BatchLengthMismatch {
        /// Number of ray origins.
        origins: usize,
        /// Number of ray targets.
        targets: usize,
        /// Number of first triangle corners.
        corner_a: usize,
        /// Number of second triangle corners.
        corner_b: usize,
        /// Number of third triangle corners.
        corner_c: usize,
    },

    /// The three triangle-corner arrays do not share one length.
    #[error("triangle corner arrays disagree in length: a={corner_a}, b={corner_b}, c={corner_c}")]
    TriangleLengthMismatch {
        /// Number of first corners.
        corner_a: usize,
        /// Number of second corners.
        corner_b: usize,
        /// Number of third corners.
        corner_c: usize,
    },
}

/// Result type for zcast operations.
pub type Result<T> = std::result::Result<T, CastError>;
