//! The fixed joint layout of the 27-cube chain.
//!
//! Cube `i` is joined to cube `i - 1` and cube `i + 1`, except for the two
//! end cubes which each have a single neighbour. Each joint connects one face
//! of each cube, and the joint layout never changes while the chain is
//! twisted.

use crate::geometry::Face::{self, F0, F1, F3};

/// Number of cubes in the chain (and cells in the 3x3x3 grid).
pub const CHAIN_LEN: usize = 27;

/// The faces a cube uses to connect to its neighbours in the chain.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Joint {
    /// Face connected to the previous cube; `None` for the first cube.
    pub to_prev: Option<Face>,
    /// Face connected to the next cube; `None` for the last cube.
    pub to_next: Option<Face>,
}

impl Joint {
    const fn new(to_prev: Option<Face>, to_next: Option<Face>) -> Self {
        Self { to_prev, to_next }
    }

    /// Whether the two connectors sit on opposite faces, so the cube runs
    /// straight through.
    pub const fn is_straight(&self) -> bool {
        match (self.to_prev, self.to_next) {
            (Some(prev), Some(next)) => prev.is_opposite(next),
            _ => false,
        }
    }
}

const fn link(to_next: Face) -> Joint {
    Joint::new(Some(F0), Some(to_next))
}

/// Joint faces for every cube of the chain, in chain order.
pub const CHAIN: [Joint; CHAIN_LEN] = [
    Joint::new(None, Some(F3)),
    link(F3),
    link(F1),
    link(F3),
    link(F1),
    link(F3),
    link(F1),
    link(F3),
    link(F1),
    link(F1),
    link(F1),
    link(F1),
    link(F3),
    link(F1),
    link(F3),
    link(F1),
    link(F1),
    link(F1),
    link(F3),
    link(F1),
    link(F1),
    link(F3),
    link(F1),
    link(F1),
    link(F1),
    link(F3),
    Joint::new(Some(F0), None),
];

/// Every cube after the first connects back through face 0, which the
/// orientation enumerator relies on.
const _: () = {
    assert!(CHAIN[0].to_prev.is_none());
    assert!(CHAIN[CHAIN_LEN - 1].to_next.is_none());
    let mut i = 1;
    while i < CHAIN_LEN {
        assert!(matches!(CHAIN[i].to_prev, Some(F0)));
        if i < CHAIN_LEN - 1 {
            assert!(CHAIN[i].to_next.is_some());
        }
        i += 1;
    }
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoints_have_one_connection() {
        assert_eq!(CHAIN[0].to_prev, None);
        assert!(CHAIN[0].to_next.is_some());
        assert!(CHAIN[CHAIN_LEN - 1].to_prev.is_some());
        assert_eq!(CHAIN[CHAIN_LEN - 1].to_next, None);
    }

    #[test]
    fn test_connectors_are_distinct_faces() {
        for (i, joint) in CHAIN.iter().enumerate() {
            if let (Some(prev), Some(next)) = (joint.to_prev, joint.to_next) {
                assert_ne!(prev, next, "cube {i} uses one face for both joints");
            }
        }
    }

    #[test]
    fn test_straight_cubes() {
        let straight: Vec<usize> = CHAIN
            .iter()
            .enumerate()
            .filter(|(_, joint)| joint.is_straight())
            .map(|(i, _)| i)
            .collect();
        assert_eq!(straight, vec![1, 3, 5, 7, 12, 14, 18, 21, 25]);
    }
}
