use thiserror::Error;

/// Crate-wide result type alias.
pub type Result<T> = std::result::Result<T, Error>;

/// Error type for the simulation core.
///
/// The taxonomy is deliberately narrow: the event loop itself has no
/// recoverable failure modes (degenerate geometry is reported as an
/// infinite time-to-hit and stale predictions are discarded on
/// extraction), so errors only arise at the API boundary.
#[derive(Debug, Error)]
pub enum Error {
    /// Invalid API parameter (non-positive radius/mass, empty particle
    /// set, failed placement, non-finite simulation bounds, ...).
    #[error("invalid parameter: {0}")]
    InvalidParam(String),

    /// Numerical pathology (e.g. a NaN event time reaching the queue).
    #[error("numerical error: {0}")]
    MathError(String),
}
