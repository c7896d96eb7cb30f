//! Facelet positions: a face symbol plus a slot number 1-9.
//!
//! The 54 positions are fixed for the lifetime of the program and map onto a
//! flat index (face block * 9 + slot - 1) so that cube states and move tables
//! can be plain arrays. Slot 5 of every face is the center.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// One of the six cube faces, in block order.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
#[repr(u8)]
pub enum Face {
    Front,
    Right,
    Back,
    Left,
    Up,
    Down,
}

impl Face {
    pub const ALL: [Face; 6] = [
        Face::Front,
        Face::Right,
        Face::Back,
        Face::Left,
        Face::Up,
        Face::Down,
    ];

    /// The four faces around the vertical axis, in `rl` rotation order.
    pub const SIDES: [Face; 4] = [Face::Front, Face::Right, Face::Back, Face::Left];

    pub fn letter(self) -> char {
        match self {
            Face::Front => 'F',
            Face::Right => 'R',
            Face::Back => 'B',
            Face::Left => 'L',
            Face::Up => 'U',
            Face::Down => 'D',
        }
    }

    /// The center facelet of this face.
    pub fn center(self) -> Facelet {
        Facelet::from_index(self as usize * 9 + 4)
    }

    /// The facelet of this face at `slot` (1-9).
    pub fn slot(self, slot: usize) -> Facelet {
        debug_assert!((1..=9).contains(&slot));
        Facelet::from_index(self as usize * 9 + slot - 1)
    }
}

impl fmt::Display for Face {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.letter())
    }
}

macro_rules! facelets {
    ($($name:ident),* $(,)?) => {
        /// A single facelet position, e.g. `F1` or `U8`.
        ///
        /// The discriminant is the flat index used by [`crate::CubeState`]
        /// and the move permutation tables.
        #[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
        #[repr(u8)]
        pub enum Facelet {
            $($name),*
        }

        impl Facelet {
            pub const COUNT: usize = 54;

            pub const ALL: [Facelet; 54] = [$(Facelet::$name),*];

            const LABELS: [&'static str; 54] = [$(stringify!($name)),*];
        }
    };
}

facelets! {
    F1, F2, F3, F4, F5, F6, F7, F8, F9,
    R1, R2, R3, R4, R5, R6, R7, R8, R9,
    B1, B2, B3, B4, B5, B6, B7, B8, B9,
    L1, L2, L3, L4, L5, L6, L7, L8, L9,
    U1, U2, U3, U4, U5, U6, U7, U8, U9,
    D1, D2, D3, D4, D5, D6, D7, D8, D9,
}

impl Facelet {
    pub fn index(self) -> usize {
        self as usize
    }

    pub fn from_index(index: usize) -> Facelet {
        Facelet::ALL[index]
    }

    pub fn face(self) -> Face {
        Face::ALL[self as usize / 9]
    }

    /// The slot number 1-9 within the face.
    pub fn slot(self) -> usize {
        self as usize % 9 + 1
    }

    pub fn is_center(self) -> bool {
        self.slot() == 5
    }

    pub fn label(self) -> &'static str {
        Self::LABELS[self as usize]
    }
}

impl fmt::Display for Facelet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

static FACELET_BY_LABEL: phf::Map<&'static str, Facelet> = phf::phf_map! {
    "F1" => Facelet::F1, "F2" => Facelet::F2, "F3" => Facelet::F3,
    "F4" => Facelet::F4, "F5" => Facelet::F5, "F6" => Facelet::F6,
    "F7" => Facelet::F7, "F8" => Facelet::F8, "F9" => Facelet::F9,
    "R1" => Facelet::R1, "R2" => Facelet::R2, "R3" => Facelet::R3,
    "R4" => Facelet::R4, "R5" => Facelet::R5, "R6" => Facelet::R6,
    "R7" => Facelet::R7, "R8" => Facelet::R8, "R9" => Facelet::R9,
    "B1" => Facelet::B1, "B2" => Facelet::B2, "B3" => Facelet::B3,
    "B4" => Facelet::B4, "B5" => Facelet::B5, "B6" => Facelet::B6,
    "B7" => Facelet::B7, "B8" => Facelet::B8, "B9" => Facelet::B9,
    "L1" => Facelet::L1, "L2" => Facelet::L2, "L3" => Facelet::L3,
    "L4" => Facelet::L4, "L5" => Facelet::L5, "L6" => Facelet::L6,
    "L7" => Facelet::L7, "L8" => Facelet::L8, "L9" => Facelet::L9,
    "U1" => Facelet::U1, "U2" => Facelet::U2, "U3" => Facelet::U3,
    "U4" => Facelet::U4, "U5" => Facelet::U5, "U6" => Facelet::U6,
    "U7" => Facelet::U7, "U8" => Facelet::U8, "U9" => Facelet::U9,
    "D1" => Facelet::D1, "D2" => Facelet::D2, "D3" => Facelet::D3,
    "D4" => Facelet::D4, "D5" => Facelet::D5, "D6" => Facelet::D6,
    "D7" => Facelet::D7, "D8" => Facelet::D8, "D9" => Facelet::D9,
};

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("`{0}` is not a facelet position")]
pub struct ParseFaceletError(pub String);

impl FromStr for Facelet {
    type Err = ParseFaceletError;

    fn from_str(s: &str) -> Result<Facelet, ParseFaceletError> {
        FACELET_BY_LABEL
            .get(s)
            .copied()
            .ok_or_else(|| ParseFaceletError(s.to_owned()))
    }
}

use Facelet::*;

/// The twelve edge slots as position pairs, in canonical detection order.
///
/// The order matters: the bottom-cross case dispatch is keyed by the index of
/// the slot a piece is found in.
pub const EDGE_SLOTS: [[Facelet; 2]; 12] = [
    [F2, U8],
    [F4, L6],
    [F6, R4],
    [F8, D2],
    [U2, B2],
    [U4, L2],
    [U6, R2],
    [B4, R6],
    [B6, L4],
    [B8, D8],
    [R8, D6],
    [L8, D4],
];

/// The eight corner slots as position triples, in canonical detection order.
pub const CORNER_SLOTS: [[Facelet; 3]; 8] = [
    [F1, U7, L3],
    [F3, U9, R1],
    [F7, L9, D1],
    [F9, R7, D3],
    [U1, L1, B3],
    [U3, R3, B1],
    [L7, D7, B9],
    [R9, D9, B7],
];

/// Geometrically adjacent face pairs; their center colors are exactly the
/// twelve legal edge color-pairs.
pub const EDGE_FACE_PAIRS: [[Face; 2]; 12] = [
    [Face::Front, Face::Left],
    [Face::Front, Face::Right],
    [Face::Front, Face::Up],
    [Face::Front, Face::Down],
    [Face::Right, Face::Up],
    [Face::Right, Face::Down],
    [Face::Left, Face::Up],
    [Face::Left, Face::Down],
    [Face::Back, Face::Left],
    [Face::Back, Face::Right],
    [Face::Back, Face::Up],
    [Face::Back, Face::Down],
];

/// The eight geometric corners as face triples.
pub const CORNER_FACE_TRIPLES: [[Face; 3]; 8] = [
    [Face::Front, Face::Left, Face::Up],
    [Face::Front, Face::Left, Face::Down],
    [Face::Front, Face::Right, Face::Up],
    [Face::Front, Face::Right, Face::Down],
    [Face::Back, Face::Left, Face::Up],
    [Face::Back, Face::Left, Face::Down],
    [Face::Back, Face::Right, Face::Up],
    [Face::Back, Face::Right, Face::Down],
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn index_round_trip() {
        for (i, facelet) in Facelet::ALL.iter().enumerate() {
            assert_eq!(facelet.index(), i);
            assert_eq!(Facelet::from_index(i), *facelet);
        }
    }

    #[test]
    fn label_round_trip() {
        for facelet in Facelet::ALL {
            assert_eq!(facelet.label().parse::<Facelet>(), Ok(facelet));
        }
        assert!("F0".parse::<Facelet>().is_err());
        assert!("X5".parse::<Facelet>().is_err());
    }

    #[test]
    fn centers() {
        assert_eq!(Face::Front.center(), Facelet::F5);
        assert_eq!(Face::Down.center(), Facelet::D5);
        for face in Face::ALL {
            assert!(face.center().is_center());
            assert_eq!(face.center().face(), face);
        }
    }

    #[test]
    fn slot_tables_cover_every_non_center_facelet_once() {
        let mut seen = [false; 54];
        for pair in EDGE_SLOTS {
            for facelet in pair {
                assert!(!seen[facelet.index()]);
                seen[facelet.index()] = true;
            }
        }
        for triple in CORNER_SLOTS {
            for facelet in triple {
                assert!(!seen[facelet.index()]);
                seen[facelet.index()] = true;
            }
        }
        let covered = seen.iter().filter(|&&s| s).count();
        assert_eq!(covered, 48);
        for facelet in Facelet::ALL {
            assert_eq!(seen[facelet.index()], !facelet.is_center());
        }
    }
}
