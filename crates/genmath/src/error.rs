//! Error type for the library.
//!
//! Degenerate geometry is never an error (it falls back to simpler formulas);
//! only unrepresentable values, overflow and out-of-range indices surface here.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GeomError {
    /// Checked numeric conversion failed.
    #[error("value {value} is not representable as {target}")]
    Conversion { value: String, target: &'static str },
    /// Integer arithmetic in the input type overflowed.
    #[error("{op} of {lhs} and {rhs} overflows the input type")]
    Overflow {
        op: &'static str,
        lhs: String,
        rhs: String,
    },
    /// Index past the end of a table or weight slice.
    #[error("index {index} out of bounds for length {len}")]
    IndexOutOfBounds { index: usize, len: usize },
    /// Radius that is negative, NaN or infinite.
    #[error("invalid radius {value}: radii must be finite and non-negative")]
    InvalidRadius { value: String },
    /// Input the evaluator cannot handle, e.g. a Bezier degree beyond `powi`'s exponent range.
    #[error("unsupported: {0}")]
    Unsupported(String),
}

pub type Result<T, E = GeomError> = std::result::Result<T, E>;
