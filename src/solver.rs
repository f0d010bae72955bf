//! Driver that tries each essentially distinct starting placement.
//!
//! The first three cubes of the chain lie in a straight line, so up to the
//! symmetries of the grid cube 0 can be fixed at `(0, y, z)` with
//! `y, z ∈ {0, 1}`, always in the canonical orientation. That leaves four
//! starting placements, tried in order until one of them folds.

use std::error::Error;
use std::fmt;

use rayon::prelude::*;
use rustc_hash::FxHashMap;

use crate::geometry::{Direction, Location, Orientation};
use crate::search::{extend, Placement, PlacementStack, SearchStats};
use crate::topology::{CHAIN, CHAIN_LEN};

/// Number of essentially distinct starting placements.
pub const START_COUNT: usize = 4;

/// Starting placements for cube 0, `y` major then `z`.
pub const fn starting_placements() -> [Placement; START_COUNT] {
    let origin = Placement::new(Location::new(0, 0, 0), Orientation::CANONICAL);
    let mut starts = [origin; START_COUNT];
    let mut i = 0;
    while i < START_COUNT {
        let y = (i / 2) as i32;
        let z = (i % 2) as i32;
        starts[i] = Placement::new(Location::new(0, y, z), Orientation::CANONICAL);
        i += 1;
    }
    starts
}

/// A complete fold of the chain.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Solution {
    start_index: usize,
    placements: Vec<Placement>,
    stats: SearchStats,
}

impl Solution {
    pub fn new(start_index: usize, placements: Vec<Placement>, stats: SearchStats) -> Self {
        Self {
            start_index,
            placements,
            stats,
        }
    }

    /// Index into [`starting_placements`] the search started from.
    pub fn start_index(&self) -> usize {
        self.start_index
    }

    pub fn placements(&self) -> &[Placement] {
        &self.placements
    }

    pub fn locations(&self) -> impl DoubleEndedIterator<Item = Location> + ExactSizeIterator + '_ {
        self.placements.iter().map(|placement| placement.location)
    }

    /// Counters from the search that produced this solution.
    pub fn stats(&self) -> SearchStats {
        self.stats
    }

    /// Checks that the placements really fold the chain into the grid.
    pub fn verify(&self) -> Result<(), SolutionError> {
        if self.placements.len() != CHAIN_LEN {
            return Err(SolutionError::Length(self.placements.len()));
        }

        let mut seen: FxHashMap<Location, usize> = FxHashMap::default();
        for (cube, placement) in self.placements.iter().enumerate() {
            let location = placement.location;
            if !location.in_bounds() {
                return Err(SolutionError::OutOfBounds { cube, location });
            }
            if let Some(&first) = seen.get(&location) {
                return Err(SolutionError::Overlap {
                    first,
                    second: cube,
                    location,
                });
            }
            seen.insert(location, cube);
        }

        for (cube, pair) in self.placements.windows(2).enumerate() {
            let (prev, next) = (pair[0], pair[1]);
            let (Some(to_next), Some(to_prev)) = (CHAIN[cube].to_next, CHAIN[cube + 1].to_prev)
            else {
                unreachable!("inner joints always have both faces");
            };

            let outward = prev.orientation.face_direction(to_next);
            if prev.location + outward != next.location {
                return Err(SolutionError::Detached {
                    cube,
                    direction: outward,
                });
            }
            if next.orientation.face_direction(to_prev) != outward.reverse() {
                return Err(SolutionError::Misaligned { cube: cube + 1 });
            }
        }

        Ok(())
    }
}

/// Ways a sequence of placements can fail to fold the chain.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SolutionError {
    /// The wrong number of cubes was placed.
    Length(usize),
    OutOfBounds {
        cube: usize,
        location: Location,
    },
    Overlap {
        first: usize,
        second: usize,
        location: Location,
    },
    /// The next cube is not where this cube's outgoing joint points.
    Detached {
        cube: usize,
        direction: Direction,
    },
    /// The cube's incoming joint face does not point back at its predecessor.
    Misaligned {
        cube: usize,
    },
}

impl fmt::Display for SolutionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Length(len) => write!(f, "expected {CHAIN_LEN} cubes, found {len}"),
            Self::OutOfBounds { cube, location } => {
                write!(f, "cube {cube} at {location} is outside the grid")
            }
            Self::Overlap {
                first,
                second,
                location,
            } => write!(f, "cubes {first} and {second} both occupy {location}"),
            Self::Detached { cube, direction } => write!(
                f,
                "cube {} is not at {direction} of cube {cube}",
                cube + 1
            ),
            Self::Misaligned { cube } => {
                write!(f, "cube {cube} does not face its predecessor")
            }
        }
    }
}

impl Error for SolutionError {}

/// Result of searching from one or more starting placements.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchOutcome {
    Solved(Solution),
    /// Every branch was cut; carries the counters of all searches run.
    Exhausted(SearchStats),
}

impl SearchOutcome {
    pub fn solution(&self) -> Option<&Solution> {
        match self {
            Self::Solved(solution) => Some(solution),
            Self::Exhausted(_) => None,
        }
    }

    pub fn into_solution(self) -> Option<Solution> {
        match self {
            Self::Solved(solution) => Some(solution),
            Self::Exhausted(_) => None,
        }
    }

    pub fn stats(&self) -> SearchStats {
        match self {
            Self::Solved(solution) => solution.stats(),
            Self::Exhausted(stats) => *stats,
        }
    }
}

/// Searches from a single starting placement.
///
/// # Panics
///
/// Panics if `start_index` is not below [`START_COUNT`].
pub fn solve_from(start_index: usize) -> SearchOutcome {
    let start = starting_placements()[start_index];
    let mut stack = PlacementStack::new(start);
    let mut stats = SearchStats::default();

    if extend(&mut stack, &mut stats) {
        SearchOutcome::Solved(Solution::new(
            start_index,
            stack.placements().collect(),
            stats,
        ))
    } else {
        SearchOutcome::Exhausted(stats)
    }
}

/// Tries the starting placements in order and returns the first fold found.
///
/// A solved outcome carries the counters of its own starting placement only.
pub fn solve() -> SearchOutcome {
    let mut exhausted = SearchStats::default();
    for start_index in 0..START_COUNT {
        match solve_from(start_index) {
            SearchOutcome::Solved(solution) => return SearchOutcome::Solved(solution),
            SearchOutcome::Exhausted(stats) => exhausted += stats,
        }
    }
    SearchOutcome::Exhausted(exhausted)
}

/// Searches all starting placements on the rayon pool.
///
/// Picks the solution of the earliest starting placement, so the result
/// matches [`solve`].
pub fn solve_parallel() -> SearchOutcome {
    let outcomes: Vec<SearchOutcome> = (0..START_COUNT)
        .into_par_iter()
        .map(solve_from)
        .collect();

    let mut exhausted = SearchStats::default();
    for outcome in outcomes {
        match outcome {
            SearchOutcome::Solved(solution) => return SearchOutcome::Solved(solution),
            SearchOutcome::Exhausted(stats) => exhausted += stats,
        }
    }
    SearchOutcome::Exhausted(exhausted)
}
