pub mod airfoil;
pub mod error;
pub mod flow;
pub mod io;
pub mod solver;

// Flat re-exports for the common entry points
pub mod types {
    pub use crate::airfoil::{AirfoilSpec, CamberLine, PanelGeometry};
    pub use crate::error::{PanelError, Result};
    pub use crate::flow::{Angle, FlowCondition, RHO_SL};
    pub use crate::solver::{SolutionState, SolverOptions};
}

pub use solver::{solve, solve_with};
