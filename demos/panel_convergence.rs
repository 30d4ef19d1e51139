//! Panel-count convergence of the pressure distribution on a NACA 0015.

use vortex_panel::airfoil::{AirfoilSpec, PanelGeometry};
use vortex_panel::flow::{Angle, FlowCondition};
use vortex_panel::solver;

fn main() {
    let flow = FlowCondition::new(Angle::Degrees(5.0), 1.0);

    println!("Cl convergence, NACA 0015 at 5 deg:");
    println!("{:>8}  {:>12}  {:>14}", "panels", "Cl", "arc length");

    for n in [10, 25, 100, 400] {
        let geometry =
            PanelGeometry::generate(&AirfoilSpec::naca("0015", n).unwrap()).unwrap();
        let state = solver::solve(&geometry, &flow).unwrap();
        println!(
            "{n:>8}  {:>12.6}  {:>14.8}",
            state.total_cl(),
            geometry.arc_length()
        );
    }

    // leading-edge pressure peak sharpens as the discretization refines
    println!("\nFirst-panel dCp:");
    for n in [10, 25, 100] {
        let geometry =
            PanelGeometry::generate(&AirfoilSpec::naca("0015", n).unwrap()).unwrap();
        let state = solver::solve(&geometry, &flow).unwrap();
        println!(
            "  n={n:<4} x/c={:.4}  dCp={:.4}",
            state.x_colloc[0], state.delta_cp[0]
        );
    }
}
