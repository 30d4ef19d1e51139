use nalgebra::{DMatrix, DVector};

use crate::airfoil::PanelGeometry;
use crate::error::{PanelError, Result};
use crate::flow::FlowCondition;

use super::kernel::{induced_velocity, normal_vector};

// ---------------------------------------------------------------------------
// No-penetration boundary condition: assemble and solve A Gamma = b
// ---------------------------------------------------------------------------

/// Influence-coefficient matrix A and right-hand side b.
///
/// A[i][j] is the normal velocity induced at collocation point i by a unit
/// vortex at panel j; b[i] cancels the freestream's normal component.
pub fn assemble(
    geometry: &PanelGeometry,
    flow: &FlowCondition,
) -> Result<(DMatrix<f64>, DVector<f64>)> {
    let n = geometry.n_panels();
    let (u_inf, w_inf) = flow.freestream();

    let mut a = DMatrix::zeros(n, n);
    let mut b = DVector::zeros(n);

    for i in 0..n {
        let normal = normal_vector(geometry.inclinations[i]);
        b[i] = -(u_inf * normal.x + w_inf * normal.y);

        for j in 0..n {
            let vel = induced_velocity(
                &geometry.colloc_points[i],
                &geometry.vortex_points[j],
                1.0,
                j,
            )?;
            a[(i, j)] = vel.dot(&normal);
        }
    }

    Ok((a, b))
}

/// Direct LU solve of the boundary-condition system.
///
/// The reciprocal-condition estimate comes from the diagonal of U; systems
/// below `rcond_min` are rejected rather than solved into garbage.
pub fn solve_linear(
    a: DMatrix<f64>,
    b: &DVector<f64>,
    rcond_min: f64,
) -> Result<DVector<f64>> {
    let n = a.nrows();
    let lu = a.lu();

    let u = lu.u();
    let mut d_min = f64::INFINITY;
    let mut d_max = 0.0_f64;
    for i in 0..n {
        let d = u[(i, i)].abs();
        d_min = d_min.min(d);
        d_max = d_max.max(d);
    }
    let rcond = if d_max > 0.0 { d_min / d_max } else { 0.0 };
    if !rcond.is_finite() || rcond < rcond_min {
        return Err(PanelError::SingularSystem { rcond });
    }

    lu.solve(b).ok_or(PanelError::SingularSystem { rcond })
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
