use std::io::{self, Write};

use crate::solver::SolutionState;

/// Write a solved distribution to CSV format.
///
/// Columns: panel, x_c, circulation, delta_cl, delta_cp
pub fn write_solution<W: Write>(writer: &mut W, state: &SolutionState) -> io::Result<()> {
    writeln!(writer, "panel,x_c,circulation,delta_cl,delta_cp")?;

    for i in 0..state.n_panels() {
        writeln!(
            writer,
            "{},{:.6},{:.8},{:.8},{:.8}",
            i,
            state.x_colloc[i],
            state.circulation[i],
            state.delta_cl[i],
            state.delta_cp[i],
        )?;
    }

    Ok(())
}

/// Write a solved distribution to a CSV file at the given path.
pub fn write_solution_file(path: &str, state: &SolutionState) -> io::Result<()> {
    let mut file = std::fs::File::create(path)?;
    write_solution(&mut file, state)
}
