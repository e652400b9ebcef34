//! Shortest solutions for sliding tile puzzles on grids of up to 16 cells,
//! found by breadth-first search over bit-packed configurations.

pub mod configuration;
pub mod moves;
pub mod report;
pub mod route;
pub mod search;
pub mod tile;
pub mod traits;
pub mod util;


pub use configuration::{Configuration, LayoutError};
pub use moves::Direction;
pub use report::SolveReport;
pub use route::{Route, RouteOrder, Step};
pub use search::{search, solve, SearchOptions, SearchOutcome, SearchStats};
