//! Grid locations, unit directions, cube faces and cube orientations.
//!
//! Faces are numbered 0 to 5 so that opposite faces share the same number
//! modulo 3: faces 0 and 3 are opposite, as are 1 and 4, and 2 and 5. Any two
//! faces that are neither equal nor opposite are adjoining.
//!
//! An orientation records which face points in each of the six axis
//! directions. Only the faces pointing -x, -y and -z are stored; the faces
//! pointing +x, +y and +z are their opposites.

use std::fmt;
use std::ops::{Add, Sub};

/// Number of cells along each axis of the target cube.
pub const DIM: i32 = 3;

/// One of the six faces of a unit cube.
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Face {
    F0 = 0,
    F1 = 1,
    F2 = 2,
    F3 = 3,
    F4 = 4,
    F5 = 5,
}

use Face::*;

/// `OPPOSITE[f]` is the face across the cube from face `f`.
const OPPOSITE: [Face; 6] = [F3, F4, F5, F0, F1, F2];

/// `ADJOINING[f][g]` is true when faces `f` and `g` share an edge.
const ADJOINING: [[bool; 6]; 6] = build_adjoining_table();

const fn build_adjoining_table() -> [[bool; 6]; 6] {
    let mut table = [[false; 6]; 6];
    let mut f = 0;
    while f < 6 {
        let mut g = 0;
        while g < 6 {
            table[f][g] = f % 3 != g % 3;
            g += 1;
        }
        f += 1;
    }
    table
}

impl Face {
    pub const ALL: [Face; 6] = [F0, F1, F2, F3, F4, F5];

    /// Returns the face with the given index.
    ///
    /// # Panics
    ///
    /// Panics if `index` is not in `0..6`.
    pub const fn from_index(index: usize) -> Self {
        match Self::try_from_index(index) {
            Some(face) => face,
            None => panic!("face index out of range"),
        }
    }

    pub const fn try_from_index(index: usize) -> Option<Self> {
        if index < 6 {
            Some(Self::ALL[index])
        } else {
            None
        }
    }

    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }

    #[inline]
    pub const fn opposite(self) -> Self {
        OPPOSITE[self.index()]
    }

    #[inline]
    pub const fn is_opposite(self, other: Face) -> bool {
        self.opposite() as u8 == other as u8
    }

    #[inline]
    pub const fn is_adjoining(self, other: Face) -> bool {
        ADJOINING[self.index()][other.index()]
    }
}

impl fmt::Display for Face {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Face{}", self.index())
    }
}

/// A coordinate axis of the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Axis {
    X,
    Y,
    Z,
}

/// One of the six axis-aligned unit vectors.
///
/// The variant order matches the order in which faces are looked up in an
/// orientation: -x, +x, -y, +y, -z, +z.
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    NegX,
    PosX,
    NegY,
    PosY,
    NegZ,
    PosZ,
}

impl Direction {
    pub const ALL: [Direction; 6] = [
        Direction::NegX,
        Direction::PosX,
        Direction::NegY,
        Direction::PosY,
        Direction::NegZ,
        Direction::PosZ,
    ];

    /// Returns the (dx, dy, dz) offset of this direction.
    pub const fn vector(self) -> (i32, i32, i32) {
        match self {
            Self::NegX => (-1, 0, 0),
            Self::PosX => (1, 0, 0),
            Self::NegY => (0, -1, 0),
            Self::PosY => (0, 1, 0),
            Self::NegZ => (0, 0, -1),
            Self::PosZ => (0, 0, 1),
        }
    }

    /// Returns the direction with the given offset, or `None` if the offset
    /// is not a unit axis vector.
    pub const fn try_from_vector(vector: (i32, i32, i32)) -> Option<Self> {
        match vector {
            (-1, 0, 0) => Some(Self::NegX),
            (1, 0, 0) => Some(Self::PosX),
            (0, -1, 0) => Some(Self::NegY),
            (0, 1, 0) => Some(Self::PosY),
            (0, 0, -1) => Some(Self::NegZ),
            (0, 0, 1) => Some(Self::PosZ),
            _ => None,
        }
    }

    /// Returns the direction with the given offset.
    ///
    /// # Panics
    ///
    /// Panics if the offset is not one of the six unit axis vectors.
    pub fn from_vector(vector: (i32, i32, i32)) -> Self {
        match Self::try_from_vector(vector) {
            Some(direction) => direction,
            None => panic!("{vector:?} is not a unit axis vector"),
        }
    }

    pub const fn reverse(self) -> Self {
        match self {
            Self::NegX => Self::PosX,
            Self::PosX => Self::NegX,
            Self::NegY => Self::PosY,
            Self::PosY => Self::NegY,
            Self::NegZ => Self::PosZ,
            Self::PosZ => Self::NegZ,
        }
    }

    pub const fn axis(self) -> Axis {
        match self {
            Self::NegX | Self::PosX => Axis::X,
            Self::NegY | Self::PosY => Axis::Y,
            Self::NegZ | Self::PosZ => Axis::Z,
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::NegX => "-X",
            Self::PosX => "+X",
            Self::NegY => "-Y",
            Self::PosY => "+Y",
            Self::NegZ => "-Z",
            Self::PosZ => "+Z",
        };
        f.write_str(label)
    }
}

/// A cell position in 3D space.
///
/// Locations produced during search may step outside the grid; they are
/// only stored once `in_bounds` holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Location {
    pub x: i32,
    pub y: i32,
    pub z: i32,
}

impl Location {
    pub const fn new(x: i32, y: i32, z: i32) -> Self {
        Self { x, y, z }
    }

    /// Checks whether the location lies inside the 3x3x3 grid.
    #[inline]
    pub const fn in_bounds(self) -> bool {
        0 <= self.x
            && self.x < DIM
            && 0 <= self.y
            && self.y < DIM
            && 0 <= self.z
            && self.z < DIM
    }

    /// Linear index of an in-bounds location.
    ///
    /// Index order is x-major: `idx = x * DIM * DIM + y * DIM + z`.
    #[inline(always)]
    pub const fn cell_index(self) -> usize {
        debug_assert!(self.in_bounds());
        (self.x * DIM * DIM + self.y * DIM + self.z) as usize
    }

    /// Mirrors the location through the center of the grid.
    pub const fn mirrored(self) -> Self {
        Self::new(DIM - 1 - self.x, DIM - 1 - self.y, DIM - 1 - self.z)
    }
}

impl Add<Direction> for Location {
    type Output = Location;

    fn add(self, direction: Direction) -> Location {
        let (dx, dy, dz) = direction.vector();
        Location::new(self.x + dx, self.y + dy, self.z + dz)
    }
}

impl Sub for Location {
    type Output = Direction;

    /// Direction from `other` to `self`.
    ///
    /// Panics unless the two locations are grid neighbours.
    fn sub(self, other: Location) -> Direction {
        Direction::from_vector((self.x - other.x, self.y - other.y, self.z - other.z))
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {})", self.x, self.y, self.z)
    }
}

/// The assignment of a cube's six faces to the six axis directions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Orientation {
    /// Faces pointing -x, -y and -z, in that order.
    neg_faces: [Face; 3],
}

impl Orientation {
    /// Face 0 points -x, face 1 points -y, face 2 points -z.
    pub const CANONICAL: Orientation = Orientation::new(F0, F1, F2);

    /// Creates an orientation from the faces pointing -x, -y and -z.
    ///
    /// # Panics
    ///
    /// Panics if the three faces are not pairwise adjoining.
    pub const fn new(neg_x_face: Face, neg_y_face: Face, neg_z_face: Face) -> Self {
        match Self::try_new(neg_x_face, neg_y_face, neg_z_face) {
            Some(orientation) => orientation,
            None => panic!("orientation faces must be pairwise adjoining"),
        }
    }

    pub const fn try_new(neg_x_face: Face, neg_y_face: Face, neg_z_face: Face) -> Option<Self> {
        if neg_x_face.is_adjoining(neg_y_face)
            && neg_x_face.is_adjoining(neg_z_face)
            && neg_y_face.is_adjoining(neg_z_face)
        {
            Some(Self {
                neg_faces: [neg_x_face, neg_y_face, neg_z_face],
            })
        } else {
            None
        }
    }

    #[inline]
    pub const fn neg_x_face(self) -> Face {
        self.neg_faces[0]
    }

    #[inline]
    pub const fn neg_y_face(self) -> Face {
        self.neg_faces[1]
    }

    #[inline]
    pub const fn neg_z_face(self) -> Face {
        self.neg_faces[2]
    }

    #[inline]
    pub const fn x_face(self) -> Face {
        self.neg_x_face().opposite()
    }

    #[inline]
    pub const fn y_face(self) -> Face {
        self.neg_y_face().opposite()
    }

    #[inline]
    pub const fn z_face(self) -> Face {
        self.neg_z_face().opposite()
    }

    /// Returns the face pointing in `direction`.
    pub const fn face_towards(self, direction: Direction) -> Face {
        match direction {
            Direction::NegX => self.neg_x_face(),
            Direction::PosX => self.x_face(),
            Direction::NegY => self.neg_y_face(),
            Direction::PosY => self.y_face(),
            Direction::NegZ => self.neg_z_face(),
            Direction::PosZ => self.z_face(),
        }
    }

    /// Returns the direction that `face` points towards.
    pub fn face_direction(self, face: Face) -> Direction {
        match Direction::ALL
            .into_iter()
            .find(|&direction| self.face_towards(direction) == face)
        {
            Some(direction) => direction,
            // every face is assigned by a pairwise-adjoining triple and its opposites
            None => unreachable!("{face} is not assigned by {self}"),
        }
    }

    /// Rotates the cube 90 degrees clockwise about the axis through
    /// `axis_face` and its opposite.
    ///
    /// The two faces on the axis keep their directions and the other four
    /// cycle. Applying the same rotation four times is the identity.
    pub fn right_hand_rotate(self, axis_face: Face) -> Self {
        match self.face_direction(axis_face).axis() {
            // +y -> -z -> -y -> +z -> +y
            Axis::X => Self::new(self.neg_x_face(), self.neg_z_face(), self.y_face()),
            // +z -> -x -> -z -> +x -> +z
            Axis::Y => Self::new(self.z_face(), self.neg_y_face(), self.neg_x_face()),
            // +x -> -y -> -x -> +y -> +x
            Axis::Z => Self::new(self.neg_y_face(), self.x_face(), self.neg_z_face()),
        }
    }
}

impl fmt::Display for Orientation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Orientation(neg_x={}, neg_y={}, neg_z={})",
            self.neg_x_face(),
            self.neg_y_face(),
            self.neg_z_face()
        )
    }
}

/// Returns an orientation in which face 0 points towards `direction`.
///
/// The faces for the other two negative axes are a fixed but arbitrary
/// choice; every entry is a proper rotation of `Orientation::CANONICAL`.
pub const fn face0_towards(direction: Direction) -> Orientation {
    match direction {
        Direction::NegX => Orientation::new(F0, F1, F2),
        Direction::PosX => Orientation::new(F3, F5, F4),
        Direction::NegY => Orientation::new(F2, F0, F1),
        Direction::PosY => Orientation::new(F4, F3, F5),
        Direction::NegZ => Orientation::new(F1, F2, F0),
        Direction::PosZ => Orientation::new(F5, F4, F3),
    }
}
