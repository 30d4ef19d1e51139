pub mod coords;
pub mod csv;

pub use coords::load_coordinates;
pub use csv::{write_solution, write_solution_file};
