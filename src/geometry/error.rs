use super::FloatSize;
use snafu::{prelude::*, Backtrace};

pub type Result<T> = std::result::Result<T, GeometryError>;

#[derive(Debug, Snafu)]
#[snafu(visibility(pub(crate)))]
pub enum GeometryError {
    #[snafu(display("Improper distance: side length {length} must be strictly positive"))]
    InvalidLength {
        /// The first length that was not strictly positive
        length: FloatSize,
        backtrace: Backtrace,
    },
    #[snafu(display(
        "Improper corners: low={low} exceeds high={high} in dimension {dimension}"
    ))]
    InvertedCorners {
        dimension: usize,
        low: FloatSize,
        high: FloatSize,
        backtrace: Backtrace,
    },
    #[snafu(display("Can not produce a unit vector from a vector of length zero"))]
    ZeroNorm { backtrace: Backtrace },
    #[snafu(display("Can not produce a unit vector from a vector with infinite or NaN coordinates"))]
    NonFiniteVector { backtrace: Backtrace },
    #[snafu(display("Improper distance: tolerance {tolerance} must be finite and non-negative"))]
    InvalidTolerance {
        tolerance: FloatSize,
        backtrace: Backtrace,
    },
}

impl GeometryError {
    /// The scalar that caused this error, if there is a single one
    pub fn offending_value(&self) -> Option<FloatSize> {
        match self {
            GeometryError::InvalidLength { length, .. } => Some(*length),
            GeometryError::InvalidTolerance { tolerance, .. } => Some(*tolerance),
            GeometryError::InvertedCorners { .. }
            | GeometryError::ZeroNorm { .. }
            | GeometryError::NonFiniteVector { .. } => None,
        }
    }
}
