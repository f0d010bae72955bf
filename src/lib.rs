//! Twister Puzzle Solver Library
//!
//! Folds a chain of 27 linked cubes into a solid 3x3x3 cube. Each cube is
//! joined to its neighbours through fixed faces, and each joint can only be
//! twisted in quarter turns about its own axis. The solver places the cubes
//! in chain order with a depth-first search over those twists.

pub mod geometry;
pub mod report;
pub mod search;
pub mod solver;
pub mod topology;

pub use geometry::{Direction, Face, Location, Orientation};
pub use search::{Placement, SearchStats};
pub use solver::{solve, solve_parallel, SearchOutcome, Solution, SolutionError};
