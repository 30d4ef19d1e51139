use vortex_panel::airfoil::{AirfoilSpec, PanelGeometry};
use vortex_panel::error::Result;
use vortex_panel::flow::{Angle, FlowCondition};
use vortex_panel::io::csv;
use vortex_panel::solver;

fn main() {
    if let Err(e) = run() {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    // -----------------------------------------------------------------------
    // Case setup: cambered NACA 2414 vs symmetric NACA 0010
    // -----------------------------------------------------------------------
    let n_panels = 50;
    let aoa_deg = 5.0;
    let q_inf = 1.0;

    let cambered = AirfoilSpec::naca("2414", n_panels)?;
    let symmetric = AirfoilSpec::naca("0010", n_panels)?;
    let flow = FlowCondition::new(Angle::Degrees(aoa_deg), q_inf);

    println!();
    println!("====================================================================");
    println!("  DISCRETE VORTEX PANEL METHOD — thin-airfoil theory");
    println!("====================================================================");
    println!();
    println!("  Conditions");
    println!("  ──────────────────────────────────────────────────────────────────");
    println!(
        "  Panels:        {:>8}       AoA:          {:>8.2} deg",
        n_panels, aoa_deg
    );
    println!(
        "  q_inf:         {:>8.2} m/s   Density:      {:>8.3} kg/m^3",
        q_inf, flow.density
    );
    println!();

    for (name, spec) in [("NACA 2414", cambered), ("NACA 0010", symmetric)] {
        let geometry = PanelGeometry::generate(&spec)?;
        let state = solver::solve(&geometry, &flow)?;

        println!("  {name}");
        println!("  ──────────────────────────────────────────────────────────────────");
        println!(
            "  Camberline arc length: {:.5}   Cl: {:>8.4}",
            geometry.arc_length(),
            state.total_cl()
        );
        println!();
        println!(
            "  {:>5}  {:>8}  {:>12}  {:>10}  {:>10}",
            "panel", "x/c", "circulation", "dCl", "dCp"
        );
        println!("  {}", "─".repeat(54));

        let sample_interval = (state.n_panels() / 10).max(1);
        for i in (0..state.n_panels()).step_by(sample_interval) {
            println!(
                "  {:>5}  {:>8.4}  {:>12.6}  {:>10.5}  {:>10.5}",
                i, state.x_colloc[i], state.circulation[i], state.delta_cl[i], state.delta_cp[i]
            );
        }
        println!();

        let file = format!("{}_solution.csv", name.to_lowercase().replace(' ', "_"));
        if let Err(e) = csv::write_solution_file(&file, &state) {
            eprintln!("  (could not write {file}: {e})");
        } else {
            println!("  Exported: {file}");
        }
        println!();
    }

    println!("====================================================================");
    println!();
    Ok(())
}
