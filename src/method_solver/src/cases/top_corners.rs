//! Top-corner placement cases: detect whether the corner belonging above
//! the front-left is structurally correct, search the other rotations for
//! it, and pick between the two mirrored finishing sequences.

use cube_core::Move::{self, *};
use cube_core::{CubeState, Face, Facelet};

/// Cycles the three top corners around a correct front-top-left corner.
pub(crate) const NIKLAS_LEFT: &[Move] = &[R, Up, Lp, U, Rp, Up, L, U];

/// The mirrored finish, entered through a whole-cube rotation.
pub(crate) const NIKLAS_RIGHT: &[Move] = &[Rr, Lp, U, R, Up, L, U, Rp, Up];

/// Whether the piece in the front-top-left slot carries exactly the three
/// surrounding center colors.
pub(crate) fn front_corner_placed(cube: &CubeState) -> bool {
    let want = [
        cube.center(Face::Front),
        cube.center(Face::Up),
        cube.center(Face::Left),
    ];
    let have = [
        cube[Facelet::F1],
        cube[Facelet::U7],
        cube[Facelet::L3],
    ];
    want.iter().all(|c| have.contains(c))
}

/// Whether all four top corners are structurally placed.
pub(crate) fn all_corners_placed(cube: &CubeState) -> bool {
    let mut scratch = cube.clone();
    for _ in 0..4 {
        if !front_corner_placed(&scratch) {
            return false;
        }
        scratch = Move::Rl.apply(&scratch);
    }
    true
}

/// Search the four rotations for a placed corner; on success, the rotation
/// sequence that brings it to the front-top-left.
pub(crate) fn find_placed_corner(cube: &CubeState) -> Option<&'static [Move]> {
    const ROTATIONS: [&[Move]; 4] = [&[], &[Rl], &[Rl, Rl], &[Rr]];
    let mut scratch = cube.clone();
    for rotation in ROTATIONS {
        if front_corner_placed(&scratch) {
            return Some(rotation);
        }
        scratch = Move::Rl.apply(&scratch);
    }
    None
}

/// With the placed corner at the front-top-left, the remaining three form a
/// left- or right-handed cycle; pick the matching finish.
pub(crate) fn finishing_sequence(cube: &CubeState) -> &'static [Move] {
    let want = [
        cube.center(Face::Front),
        cube.center(Face::Right),
        cube.center(Face::Up),
    ];
    let back_left = [
        cube[Facelet::U1],
        cube[Facelet::B3],
        cube[Facelet::L1],
    ];
    if want.iter().all(|c| back_left.contains(c)) {
        NIKLAS_LEFT
    } else {
        NIKLAS_RIGHT
    }
}
