//! Parabolic camberline vs the analytic thin-airfoil pressure difference
//!
//!   dCp(x) = 4 aoa sqrt((1-x)/x) + 32 eps sqrt(x (1-x))

use vortex_panel::airfoil::{AirfoilSpec, PanelGeometry};
use vortex_panel::flow::{Angle, FlowCondition};
use vortex_panel::solver;

fn analytic_dcp(x: f64, aoa_rad: f64, eps: f64) -> f64 {
    4.0 * aoa_rad * ((1.0 - x) / x).sqrt() + 32.0 * eps * (x * (1.0 - x)).sqrt()
}

fn main() {
    let eps = 0.1;
    let aoa_deg = 10.0;
    let n_panels = 20;

    let geometry =
        PanelGeometry::generate(&AirfoilSpec::parabolic(eps, n_panels).unwrap()).unwrap();
    let flow = FlowCondition::new(Angle::Degrees(aoa_deg), 1.0);
    let state = solver::solve(&geometry, &flow).unwrap();

    println!(
        "Parabolic eps={eps} at {aoa_deg} deg, {n_panels} panels (analytic vs numerical dCp):"
    );
    println!("{:>8}  {:>12}  {:>12}  {:>10}", "x/c", "analytic", "numerical", "error");

    let aoa_rad = aoa_deg.to_radians();
    for i in 0..state.n_panels() {
        let x = state.x_colloc[i];
        let exact = analytic_dcp(x, aoa_rad, eps);
        let num = state.delta_cp[i];
        println!(
            "{x:>8.4}  {exact:>12.5}  {num:>12.5}  {:>9.2}%",
            100.0 * (num - exact) / exact
        );
    }

    let cl_exact = 2.0 * std::f64::consts::PI * (aoa_rad + 2.0 * eps);
    println!(
        "\nCl numerical: {:.5}   thin-airfoil 2 pi (aoa + 2 eps): {:.5}",
        state.total_cl(),
        cl_exact
    );
}
