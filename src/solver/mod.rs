pub mod coefficients;
pub mod kernel;
pub mod system;

pub use coefficients::SolutionState;

use crate::airfoil::PanelGeometry;
use crate::error::Result;
use crate::flow::FlowCondition;

// ---------------------------------------------------------------------------
// Circulation solve: one direct linear solve per flow condition
// ---------------------------------------------------------------------------

/// Tunables of the linear solve.
#[derive(Debug, Clone, Copy)]
pub struct SolverOptions {
    /// Reject systems whose reciprocal-condition estimate falls below this.
    pub rcond_min: f64,
}

impl SolverOptions {
    /// Machine-epsilon-relative threshold for an N-panel system.
    pub fn for_panels(n: usize) -> Self {
        Self {
            rcond_min: n as f64 * f64::EPSILON,
        }
    }
}

/// Solve for the circulation distribution and derived coefficients.
///
/// Stateless and re-entrant: each call is a pure function of geometry and
/// flow condition, there is no iteration and no retained solver state.
pub fn solve(geometry: &PanelGeometry, flow: &FlowCondition) -> Result<SolutionState> {
    solve_with(geometry, flow, SolverOptions::for_panels(geometry.n_panels()))
}

/// `solve` with an explicit conditioning tolerance.
pub fn solve_with(
    geometry: &PanelGeometry,
    flow: &FlowCondition,
    options: SolverOptions,
) -> Result<SolutionState> {
    let (a, b) = system::assemble(geometry, flow)?;
    let circulation = system::solve_linear(a, &b, options.rcond_min)?;
    coefficients::derive(geometry, flow, circulation)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
