use thiserror::Error;

/// Failure modes of geometry generation and the circulation solve.
///
/// Every variant carries the offending input; all failures are fail-fast
/// and return no partial results.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum PanelError {
    #[error("panel count must be at least 1, got {n}")]
    InvalidPanelCount { n: i64 },

    #[error("airfoil code {code:?} does not start with two camber digits")]
    InvalidAirfoilCode { code: String },

    #[error("unknown airfoil type {kind:?} (expected \"naca\" or \"parabolic\")")]
    UnsupportedAirfoilType { kind: String },

    #[error("failed to load coordinate table {path}: {reason}")]
    ResourceLoad { path: String, reason: String },

    #[error("collocation point coincides with vortex point of panel {panel}")]
    SingularKernel { panel: usize },

    #[error("influence matrix is singular (rcond estimate {rcond:.3e})")]
    SingularSystem { rcond: f64 },

    #[error("panel {panel} has zero length, cannot derive pressure coefficient")]
    ZeroLengthPanel { panel: usize },
}

pub type Result<T> = std::result::Result<T, PanelError>;
