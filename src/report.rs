//! Human-readable renderings of a folded chain.
//!
//! Three views are produced:
//! - a placement listing with connector marks showing which axis each joint
//!   runs along
//! - a move printout for folding the physical puzzle by hand
//! - the three z layers side by side, each cell labelled with its cube index

use crate::geometry::{Location, DIM};
use crate::solver::Solution;
use crate::topology::CHAIN_LEN;

/// Number of move tokens per printed line.
const MOVES_PER_LINE: usize = 5;

/// Lists every cube's location, with a connector line between consecutive
/// cubes marking the axis (x, y or z column) the joint runs along.
pub fn format_placements(solution: &Solution) -> String {
    let locations: Vec<Location> = solution.locations().collect();
    let mut output = String::new();

    for (i, location) in locations.iter().enumerate() {
        output.push_str(&format!("Cube {i:2}: {location}\n"));
        let Some(next) = locations.get(i + 1) else {
            continue;
        };
        let mark = |changed: bool| if changed { '|' } else { ' ' };
        let connector = format!(
            "          {}  {}  {}",
            mark(location.x != next.x),
            mark(location.y != next.y),
            mark(location.z != next.z)
        );
        output.push_str(connector.trim_end());
        output.push('\n');
    }

    output
}

/// Locations in the order the physical chain is easiest to fold: from the
/// last cube back to the first, mirrored through the grid center.
pub fn folding_order(solution: &Solution) -> Vec<Location> {
    solution.locations().rev().map(Location::mirrored).collect()
}

/// Renders a single step of the folding order.
///
/// Horizontal moves show the z level of the cube being left (`..`, `--` or
/// `==` for levels 0 to 2) with an arrow; vertical moves show `(.)` for up
/// and `(*)` for down.
fn move_token(from: Location, to: Location) -> String {
    let level = match from.z {
        0 => "..",
        1 => "--",
        _ => "==",
    };
    if to.x > from.x {
        format!("{level}>")
    } else if to.x < from.x {
        format!("<{level}")
    } else if to.y > from.y {
        format!("{level}^")
    } else if to.y < from.y {
        format!("{level}v")
    } else if to.z > from.z {
        "(.)".to_string()
    } else {
        "(*)".to_string()
    }
}

/// Prints the moves along the folding order, five per line.
pub fn format_moves(solution: &Solution) -> String {
    let order = folding_order(solution);
    let tokens: Vec<String> = order
        .windows(2)
        .map(|step| move_token(step[0], step[1]))
        .collect();

    let mut output = String::new();
    for line in tokens.chunks(MOVES_PER_LINE) {
        output.push_str(&line.join(" "));
        output.push('\n');
    }
    output
}

/// Displays the z layers side by side, with the chain index of each cube.
///
/// Rows run from the top (y=2) to the bottom (y=0). Empty cells show as `.`.
pub fn format_layers(solution: &Solution) -> String {
    const UNSET: usize = usize::MAX;
    let dim = DIM as usize;

    let mut grid = [UNSET; CHAIN_LEN];
    for (cube, location) in solution.locations().enumerate() {
        if location.in_bounds() {
            grid[location.cell_index()] = cube;
        }
    }

    let mut output = String::new();
    for z in 0..dim {
        if z > 0 {
            output.push_str("  ");
        }
        // each slice is `dim` cells of two characters plus separators
        output.push_str(&format!("z={:<width$}", z, width = 3 * dim - 3));
    }
    let header_len = output.trim_end().len();
    output.truncate(header_len);
    output.push('\n');

    for y in (0..dim).rev() {
        let mut row = String::new();
        for z in 0..dim {
            if z > 0 {
                row.push_str("  ");
            }
            for x in 0..dim {
                if x > 0 {
                    row.push(' ');
                }
                let cube = grid[Location::new(x as i32, y as i32, z as i32).cell_index()];
                if cube == UNSET {
                    row.push_str(" .");
                } else {
                    row.push_str(&format!("{cube:2}"));
                }
            }
        }
        output.push_str(&row);
        output.push('\n');
    }

    output
}

/// All three views, separated by blank lines.
pub fn format_solution(solution: &Solution) -> String {
    format!(
        "{}\n{}\n{}",
        format_placements(solution),
        format_moves(solution),
        format_layers(solution)
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::solver::solve;

    fn solved() -> Solution {
        solve().into_solution().unwrap()
    }

    #[test]
    fn test_move_tokens() {
        let origin = Location::new(1, 1, 1);
        assert_eq!(move_token(origin, Location::new(2, 1, 1)), "-->");
        assert_eq!(move_token(origin, Location::new(0, 1, 1)), "<--");
        assert_eq!(move_token(origin, Location::new(1, 2, 1)), "--^");
        assert_eq!(move_token(origin, Location::new(1, 0, 1)), "--v");
        assert_eq!(move_token(origin, Location::new(1, 1, 2)), "(.)");
        assert_eq!(move_token(origin, Location::new(1, 1, 0)), "(*)");
        assert_eq!(
            move_token(Location::new(0, 0, 0), Location::new(1, 0, 0)),
            "..>"
        );
        assert_eq!(
            move_token(Location::new(1, 0, 2), Location::new(0, 0, 2)),
            "<=="
        );
    }

    #[test]
    fn test_folding_order_reverses_and_mirrors() {
        let solution = solved();
        let order = folding_order(&solution);
        assert_eq!(order.len(), CHAIN_LEN);
        assert_eq!(order[0], Location::new(0, 0, 0));
        assert_eq!(order[CHAIN_LEN - 1], Location::new(2, 2, 2));
        assert_eq!(order[1], Location::new(0, 0, 1));
    }

    #[test]
    fn test_moves_have_five_per_line() {
        let moves = format_moves(&solved());
        let lines: Vec<&str> = moves.lines().collect();
        assert_eq!(lines.len(), 6);
        assert!(lines[..5]
            .iter()
            .all(|line| line.split(' ').count() == MOVES_PER_LINE));
        assert_eq!(lines[5].split(' ').count(), 1);
    }

    #[test]
    fn test_layers_label_every_cell() {
        let layers = format_layers(&solved());
        assert!(!layers.contains('.'));
        assert_eq!(layers.lines().count(), 4);
        assert!(layers.starts_with("z=0"));
    }

    #[test]
    fn test_placement_listing_connectors() {
        let listing = format_placements(&solved());
        let lines: Vec<&str> = listing.lines().collect();
        assert_eq!(lines.len(), 2 * CHAIN_LEN - 1);
        assert_eq!(lines[0], "Cube  0: (0, 0, 0)");
        assert_eq!(lines[1], "          |");
        assert_eq!(lines[4], "Cube  2: (2, 0, 0)");
        assert_eq!(lines[5], "                |");
    }
}
