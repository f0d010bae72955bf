//! Depth-first backtracking search that folds the chain into the grid.
//!
//! The search places cubes strictly in chain order. The location of cube `k`
//! is forced by the location and orientation of cube `k - 1`, so the only
//! choice at each depth is the twist of the joint between them: up to four
//! orientations of cube `k` keep face 0 pointing back at cube `k - 1`.
//!
//! Key points:
//! - Occupied cells are tracked in a `u32` bitmask next to the placement stack
//! - Candidate orientations live in a fixed-size array, so the hot path does
//!   not allocate
//! - Every push onto the stack is wrapped in a guard that pops it again on
//!   every return path except a completed fold

use std::fmt;
use std::ops::{AddAssign, Deref, DerefMut};

use crate::geometry::{face0_towards, Direction, Face, Location, Orientation};
use crate::topology::{Joint, CHAIN, CHAIN_LEN};

/// The location and orientation of one cube of the chain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Placement {
    pub location: Location,
    pub orientation: Orientation,
}

impl Placement {
    pub const fn new(location: Location, orientation: Orientation) -> Self {
        Self {
            location,
            orientation,
        }
    }
}

/// The cubes placed so far, indexed by their position in the chain.
///
/// Locations and orientations are kept in parallel vectors. Between search
/// steps both have the same length; while a step is exploring twists the
/// location of the current cube is pushed once and its orientations are
/// pushed and popped one at a time.
#[derive(Debug, Clone)]
pub struct PlacementStack {
    locations: Vec<Location>,
    orientations: Vec<Orientation>,
    /// Bit `i` is set if grid cell `i` holds a cube.
    occupied: u32,
}

impl PlacementStack {
    /// Creates a stack holding only the first cube of the chain.
    ///
    /// # Panics
    ///
    /// Panics if the starting location is outside the grid.
    pub fn new(start: Placement) -> Self {
        assert!(
            start.location.in_bounds(),
            "starting location {} is outside the grid",
            start.location
        );
        let mut locations = Vec::with_capacity(CHAIN_LEN);
        let mut orientations = Vec::with_capacity(CHAIN_LEN);
        locations.push(start.location);
        orientations.push(start.orientation);
        Self {
            locations,
            orientations,
            occupied: 1 << start.location.cell_index(),
        }
    }

    /// Number of fully placed cubes.
    pub fn len(&self) -> usize {
        self.orientations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.orientations.is_empty()
    }

    pub fn is_complete(&self) -> bool {
        self.len() == CHAIN_LEN
    }

    pub fn locations(&self) -> &[Location] {
        &self.locations
    }

    pub fn orientations(&self) -> &[Orientation] {
        &self.orientations
    }

    /// Returns the placement of cube `index`, if it has been placed.
    pub fn get(&self, index: usize) -> Option<Placement> {
        Some(Placement::new(
            *self.locations.get(index)?,
            *self.orientations.get(index)?,
        ))
    }

    pub fn placements(&self) -> impl Iterator<Item = Placement> + '_ {
        self.locations
            .iter()
            .zip(&self.orientations)
            .map(|(&location, &orientation)| Placement::new(location, orientation))
    }

    /// Checks whether an in-bounds location already holds a cube.
    #[inline]
    pub fn is_occupied(&self, location: Location) -> bool {
        self.occupied & (1 << location.cell_index()) != 0
    }

    fn push_location(&mut self, location: Location) -> Pushed<'_> {
        debug_assert!(!self.is_occupied(location));
        self.occupied |= 1 << location.cell_index();
        self.locations.push(location);
        Pushed::new(self, Self::pop_location)
    }

    fn push_orientation(&mut self, orientation: Orientation) -> Pushed<'_> {
        debug_assert_eq!(self.orientations.len() + 1, self.locations.len());
        self.orientations.push(orientation);
        Pushed::new(self, Self::pop_orientation)
    }

    fn pop_location(&mut self) {
        if let Some(location) = self.locations.pop() {
            self.occupied &= !(1 << location.cell_index());
        }
    }

    fn pop_orientation(&mut self) {
        self.orientations.pop();
    }
}

/// Undoes a single push onto a [`PlacementStack`] when dropped, unless
/// [`Pushed::keep`] was called.
struct Pushed<'a> {
    stack: &'a mut PlacementStack,
    pop: fn(&mut PlacementStack),
    kept: bool,
}

impl<'a> Pushed<'a> {
    fn new(stack: &'a mut PlacementStack, pop: fn(&mut PlacementStack)) -> Self {
        Self {
            stack,
            pop,
            kept: false,
        }
    }

    /// Leaves the pushed entry on the stack.
    fn keep(mut self) {
        self.kept = true;
    }
}

impl Deref for Pushed<'_> {
    type Target = PlacementStack;

    fn deref(&self) -> &PlacementStack {
        self.stack
    }
}

impl DerefMut for Pushed<'_> {
    fn deref_mut(&mut self) -> &mut PlacementStack {
        self.stack
    }
}

impl Drop for Pushed<'_> {
    fn drop(&mut self) {
        if !self.kept {
            (self.pop)(self.stack);
        }
    }
}

/// Orientations of a cube whose `to_prev` face points a required way.
#[derive(Debug, Clone, Copy)]
pub struct Candidates {
    orientations: [Orientation; 4],
    len: usize,
}

impl Candidates {
    pub fn as_slice(&self) -> &[Orientation] {
        &self.orientations[..self.len]
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }
}

impl IntoIterator for Candidates {
    type Item = Orientation;
    type IntoIter = std::iter::Take<std::array::IntoIter<Orientation, 4>>;

    fn into_iter(self) -> Self::IntoIter {
        self.orientations.into_iter().take(self.len)
    }
}

/// Lists the orientations a cube may take when its `to_prev` face must point
/// in `reverse_direction`.
///
/// The seed orientation comes from [`face0_towards`], which is only correct
/// because every chain joint connects back through face 0. When `to_next`
/// is on a different axis from `to_prev`, the three further twists about the
/// `to_prev` axis follow in rotation order. When `to_next` is absent or
/// opposite `to_prev`, twisting cannot move the next cube, so the seed is the
/// only candidate.
pub fn candidate_orientations(
    reverse_direction: Direction,
    to_prev: Face,
    to_next: Option<Face>,
) -> Candidates {
    debug_assert_eq!(to_prev, Face::F0, "chain joints connect back through face 0");

    let seed = face0_towards(reverse_direction);
    let mut candidates = Candidates {
        orientations: [seed; 4],
        len: 1,
    };

    if to_next.is_some_and(|next| !to_prev.is_opposite(next)) {
        for i in 1..4 {
            candidates.orientations[i] = candidates.orientations[i - 1].right_hand_rotate(to_prev);
        }
        candidates.len = 4;
    }

    candidates
}

/// Returns the cell the next cube lands in, given the previous cube's
/// placement and joint.
///
/// # Panics
///
/// Panics if `prev_joint` has no connection to a next cube.
pub fn next_location(prev: Placement, prev_joint: Joint) -> (Location, Direction) {
    let Some(to_next) = prev_joint.to_next else {
        panic!("the last cube of the chain has no successor");
    };
    let direction = prev.orientation.face_direction(to_next);
    (prev.location + direction, direction)
}

/// Counters collected while searching.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct SearchStats {
    /// Cubes put into a free, in-bounds cell.
    pub placements: u64,
    /// Orientations tried across all placements.
    pub orientations: u64,
    /// Branches cut because the next cell was outside the grid.
    pub out_of_bounds: u64,
    /// Branches cut because the next cell was already taken.
    pub collisions: u64,
}

impl AddAssign for SearchStats {
    fn add_assign(&mut self, other: Self) {
        self.placements += other.placements;
        self.orientations += other.orientations;
        self.out_of_bounds += other.out_of_bounds;
        self.collisions += other.collisions;
    }
}

impl fmt::Display for SearchStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} placements, {} orientations, {} out of bounds, {} collisions",
            self.placements, self.orientations, self.out_of_bounds, self.collisions
        )
    }
}

/// Extends `stack` until the whole chain is placed.
///
/// Returns `true` if the chain was completed; the stack then holds all 27
/// placements. On `false` the stack is back to its state on entry.
pub fn extend(stack: &mut PlacementStack, stats: &mut SearchStats) -> bool {
    let cube_index = stack.len();
    assert!(cube_index > 0, "the search needs a placed first cube");
    place(stack, cube_index, stats)
}

fn place(stack: &mut PlacementStack, cube_index: usize, stats: &mut SearchStats) -> bool {
    debug_assert!(0 < cube_index && cube_index <= CHAIN_LEN);
    debug_assert_eq!(stack.len(), cube_index);

    if cube_index == CHAIN_LEN {
        return true;
    }

    let Some(prev) = stack.get(cube_index - 1) else {
        unreachable!("cube {} is not placed", cube_index - 1);
    };
    let (location, direction) = next_location(prev, CHAIN[cube_index - 1]);

    if !location.in_bounds() {
        stats.out_of_bounds += 1;
        return false;
    }
    if stack.is_occupied(location) {
        stats.collisions += 1;
        return false;
    }

    let joint = CHAIN[cube_index];
    let Some(to_prev) = joint.to_prev else {
        unreachable!("cube {cube_index} has no joint to its predecessor");
    };
    let candidates = candidate_orientations(direction.reverse(), to_prev, joint.to_next);

    let mut placed = stack.push_location(location);
    stats.placements += 1;

    for orientation in candidates {
        let mut oriented = placed.push_orientation(orientation);
        stats.orientations += 1;

        if place(&mut oriented, cube_index + 1, stats) {
            oriented.keep();
            placed.keep();
            return true;
        }
    }

    false
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::Face::{F0, F1, F3};

    fn start_at(x: i32, y: i32, z: i32) -> PlacementStack {
        PlacementStack::new(Placement::new(
            Location::new(x, y, z),
            Orientation::CANONICAL,
        ))
    }

    #[test]
    fn test_second_cube_follows_face_3() {
        let start = Placement::new(Location::new(0, 0, 0), Orientation::CANONICAL);
        let (location, direction) = next_location(start, CHAIN[0]);
        assert_eq!(direction, Direction::PosX);
        assert_eq!(location, Location::new(1, 0, 0));
    }

    #[test]
    fn test_straight_joint_has_one_candidate() {
        for direction in Direction::ALL {
            let candidates = candidate_orientations(direction, F0, Some(F3));
            assert_eq!(candidates.len(), 1);
            assert_eq!(candidates.as_slice()[0], face0_towards(direction));
        }
    }

    #[test]
    fn test_last_cube_has_one_candidate() {
        for direction in Direction::ALL {
            assert_eq!(candidate_orientations(direction, F0, None).len(), 1);
        }
    }

    #[test]
    fn test_turning_joint_has_four_distinct_candidates() {
        for direction in Direction::ALL {
            let candidates = candidate_orientations(direction, F0, Some(F1));
            assert_eq!(candidates.len(), 4);

            let slice = candidates.as_slice();
            for (i, orientation) in slice.iter().enumerate() {
                assert_eq!(orientation.face_direction(F0), direction);
                for other in &slice[i + 1..] {
                    assert_ne!(orientation, other);
                }
            }

            // every twist sends the next cube a different way
            let mut next_directions: Vec<Direction> = slice
                .iter()
                .map(|orientation| orientation.face_direction(F1))
                .collect();
            next_directions.dedup();
            assert_eq!(next_directions.len(), 4);
            assert!(!next_directions.contains(&direction));
            assert!(!next_directions.contains(&direction.reverse()));
        }
    }

    #[test]
    fn test_candidates_iterate_in_rotation_order() {
        let candidates = candidate_orientations(Direction::NegX, F0, Some(F1));
        let collected: Vec<Orientation> = candidates.into_iter().collect();
        assert_eq!(collected[0], Orientation::CANONICAL);
        assert_eq!(collected[1], Orientation::CANONICAL.right_hand_rotate(F0));
        assert_eq!(collected[3].right_hand_rotate(F0), collected[0]);
    }

    #[test]
    fn test_extend_completes_from_origin() {
        let mut stack = start_at(0, 0, 0);
        let mut stats = SearchStats::default();

        assert!(extend(&mut stack, &mut stats));
        assert!(stack.is_complete());
        assert_eq!(stack.locations().len(), CHAIN_LEN);
        assert_eq!(stack.get(1).map(|p| p.location), Some(Location::new(1, 0, 0)));
        assert_eq!(
            stats,
            SearchStats {
                placements: 98,
                orientations: 222,
                out_of_bounds: 76,
                collisions: 48,
            }
        );
    }

    #[test]
    fn test_failed_search_restores_stack() {
        let mut stack = start_at(0, 1, 1);
        let mut stats = SearchStats::default();

        assert!(!extend(&mut stack, &mut stats));
        assert_eq!(stack.len(), 1);
        assert_eq!(stack.locations(), &[Location::new(0, 1, 1)]);
        assert!(stack.is_occupied(Location::new(0, 1, 1)));
        for x in 1..3 {
            assert!(!stack.is_occupied(Location::new(x, 1, 1)));
        }
        assert_eq!(
            stats,
            SearchStats {
                placements: 6,
                orientations: 9,
                out_of_bounds: 4,
                collisions: 0,
            }
        );
    }

    #[test]
    fn test_guard_pops_unless_kept() {
        let mut stack = start_at(0, 0, 0);
        let location = Location::new(1, 0, 0);
        {
            let mut placed = stack.push_location(location);
            let oriented = placed.push_orientation(Orientation::CANONICAL);
            assert_eq!(oriented.len(), 2);
        }
        assert_eq!(stack.len(), 1);
        assert_eq!(stack.locations().len(), 1);
        assert!(!stack.is_occupied(location));

        {
            let mut placed = stack.push_location(location);
            placed.push_orientation(Orientation::CANONICAL).keep();
            placed.keep();
        }
        assert_eq!(stack.len(), 2);
        assert!(stack.is_occupied(location));
    }

    #[test]
    fn test_stats_accumulate() {
        let mut total = SearchStats::default();
        total += SearchStats {
            placements: 1,
            orientations: 2,
            out_of_bounds: 3,
            collisions: 4,
        };
        total += total;
        assert_eq!(total.placements, 2);
        assert_eq!(total.collisions, 8);
    }
}
