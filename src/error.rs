use thiserror::Error;

/// Invalid-input errors for the chartfilter reduction routines.
///
/// Every variant is a caller contract violation, raised synchronously
/// before any work is done. There is no transient failure class and
/// nothing to retry.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum FilterError {
    /// A flat coordinate array did not hold an integral number of
    /// interleaved (x, y) pairs.
    #[error("flat coordinate array has odd length {0}; expected interleaved x,y pairs")]
    OddCoordinateCount(usize),

    /// Tolerance is a distance and must be non-negative.
    #[error("negative tolerance {0}; expected a distance >= 0")]
    NegativeTolerance(f64),
}

/// Convenience type alias for results using [`FilterError`].
pub type Result<T> = std::result::Result<T, FilterError>;
