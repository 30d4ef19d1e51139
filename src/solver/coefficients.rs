use nalgebra::DVector;

use crate::airfoil::PanelGeometry;
use crate::error::{PanelError, Result};
use crate::flow::FlowCondition;

// ---------------------------------------------------------------------------
// Per-panel lift and pressure differences from the circulation vector
// ---------------------------------------------------------------------------

/// Solution of one circulation solve, indexed by panel.
#[derive(Debug, Clone, PartialEq)]
pub struct SolutionState {
    /// Circulation Gamma per panel, m^2/s.
    pub circulation: DVector<f64>,
    /// Lift-difference coefficient per panel.
    pub delta_cl: Vec<f64>,
    /// Pressure-difference coefficient per panel.
    pub delta_cp: Vec<f64>,
    /// Chordwise collocation position x/c per panel, for plotting.
    pub x_colloc: Vec<f64>,
}

impl SolutionState {
    /// Section lift coefficient: Kutta-Joukowski sum over all panels.
    pub fn total_cl(&self) -> f64 {
        self.delta_cl.iter().sum()
    }

    pub fn n_panels(&self) -> usize {
        self.delta_cl.len()
    }
}

/// Derive per-panel coefficients from the solved circulation.
///
/// With q_dyn = 1/2 rho q_inf^2:
///   dCl_i = rho q_inf Gamma_i / q_dyn
///   dCp_i = rho q_inf Gamma_i / (len_i q_dyn)
pub fn derive(
    geometry: &PanelGeometry,
    flow: &FlowCondition,
    circulation: DVector<f64>,
) -> Result<SolutionState> {
    let q_dyn = flow.q_dyn();
    let lift_scale = flow.density * flow.q_inf / q_dyn;

    let mut delta_cl = Vec::with_capacity(circulation.len());
    let mut delta_cp = Vec::with_capacity(circulation.len());

    for (i, gamma) in circulation.iter().enumerate() {
        let len = geometry.lengths[i];
        if len == 0.0 {
            return Err(PanelError::ZeroLengthPanel { panel: i });
        }
        delta_cl.push(lift_scale * gamma);
        delta_cp.push(lift_scale * gamma / len);
    }

    Ok(SolutionState {
        circulation,
        delta_cl,
        delta_cp,
        x_colloc: geometry.x_colloc(),
    })
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::airfoil::AirfoilSpec;
    use crate::flow::Angle;
    use approx::assert_relative_eq;
    use nalgebra::{DVector, Point2};

    #[test]
    fn coefficient_scaling() {
        // flat plate, unit chord, one panel: dCl = 2 Gamma / q_inf,
        // dCp = dCl / len
        let geometry =
            PanelGeometry::generate(&AirfoilSpec::naca("0010", 1).unwrap()).unwrap();
        let flow = FlowCondition::new(Angle::Degrees(0.0), 2.0);
        let state = derive(&geometry, &flow, DVector::from_element(1, 0.5)).unwrap();
        assert_relative_eq!(state.delta_cl[0], 2.0 * 0.5 / 2.0, max_relative = 1e-12);
        assert_relative_eq!(state.delta_cp[0], state.delta_cl[0], max_relative = 1e-12);
        assert_relative_eq!(state.total_cl(), state.delta_cl[0]);
    }

    #[test]
    fn density_cancels_in_coefficients() {
        let geometry =
            PanelGeometry::generate(&AirfoilSpec::parabolic(0.1, 4).unwrap()).unwrap();
        let gamma = DVector::from_fn(4, |i, _| 0.1 * (i + 1) as f64);
        let sea = FlowCondition::new(Angle::Degrees(0.0), 1.0);
        let thin = FlowCondition::new(Angle::Degrees(0.0), 1.0).with_density(0.4);
        let a = derive(&geometry, &sea, gamma.clone()).unwrap();
        let b = derive(&geometry, &thin, gamma).unwrap();
        for i in 0..4 {
            assert_relative_eq!(a.delta_cp[i], b.delta_cp[i], max_relative = 1e-12);
        }
    }

    #[test]
    fn zero_length_panel_is_rejected() {
        let p = Point2::new(0.5, 0.0);
        let geometry = PanelGeometry {
            edges: vec![Point2::origin(), p, p],
            vortex_points: vec![Point2::new(0.125, 0.0), p],
            colloc_points: vec![Point2::new(0.375, 0.0), p],
            inclinations: vec![0.0, 0.0],
            lengths: vec![0.5, 0.0],
        };
        let flow = FlowCondition::new(Angle::Degrees(0.0), 1.0);
        assert_eq!(
            derive(&geometry, &flow, DVector::from_element(2, 1.0)),
            Err(PanelError::ZeroLengthPanel { panel: 1 })
        );
    }
}
