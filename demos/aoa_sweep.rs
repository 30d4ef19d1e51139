//! Lift-slope sweep: NACA 2414 vs NACA 0010 from 0 to 10 degrees.

use vortex_panel::airfoil::{AirfoilSpec, PanelGeometry};
use vortex_panel::flow::{Angle, FlowCondition};
use vortex_panel::io::csv;
use vortex_panel::solver;

fn main() {
    let n_panels = 50;
    let q_inf = 1.0;

    let cambered =
        PanelGeometry::generate(&AirfoilSpec::naca("2414", n_panels).unwrap()).unwrap();
    let symmetric =
        PanelGeometry::generate(&AirfoilSpec::naca("0010", n_panels).unwrap()).unwrap();

    println!("{:>8}  {:>12}  {:>12}", "aoa", "Cl 2414", "Cl 0010");

    for i in 0..=20 {
        let aoa = i as f64 * 0.5;
        let flow = FlowCondition::new(Angle::Degrees(aoa), q_inf);
        let cl_2414 = solver::solve(&cambered, &flow).unwrap().total_cl();
        let cl_0010 = solver::solve(&symmetric, &flow).unwrap().total_cl();
        println!("{aoa:>8.1}  {cl_2414:>12.5}  {cl_0010:>12.5}");
    }

    // export the 5-degree distributions for plotting
    let flow = FlowCondition::new(Angle::Degrees(5.0), q_inf);
    let state = solver::solve(&cambered, &flow).unwrap();
    csv::write_solution_file("naca2414_aoa5.csv", &state).expect("Failed to write CSV");
    println!("\nExported: naca2414_aoa5.csv");
}
