pub mod flow_solver;
pub mod gap;

pub use flow_solver::{NaturalFlow, NaturalSection, solve_natural_flow};
pub use gap::{GapGeometry, resolve_gap};
