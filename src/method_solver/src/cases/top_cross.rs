//! Top-cross cases, classified by how many of the four up-face edge
//! facelets already match the up center: dot (none), line (an opposite
//! pair) or L-shape (an adjacent pair).

use cube_core::Move::{self, *};
use cube_core::{CubeState, Face, Facelet};

use super::u_alignment;

/// Resolves a horizontal line (left and right edges oriented).
pub(crate) const LINE: &[Move] = &[F, R, U, Rp, Up, Fp];

/// Resolves an L-shape sitting at the back-left.
pub(crate) const ELL: &[Move] = &[F, U, R, Up, Rp, Fp];

/// Resolves the dot: the line sequence leaves an L at the front-right, two
/// up turns park it at the back-left, the L sequence finishes.
pub(crate) const DOT: &[Move] = &[F, R, U, Rp, Up, Fp, U, U, F, U, R, Up, Rp, Fp];

/// The line case, rotated first when the line runs front-to-back.
pub(crate) fn line_case(cube: &CubeState) -> Vec<Move> {
    let up = cube.center(Face::Up);
    let mut moves = Vec::new();
    if cube[Facelet::U2] == up && cube[Facelet::U8] == up {
        moves.push(U);
    }
    moves.extend_from_slice(LINE);
    moves
}

/// The L-shape case: park the oriented pair at the back-left, then resolve.
pub(crate) fn ell_case(cube: &CubeState) -> Option<Vec<Move>> {
    let mut scratch = cube.clone();
    for k in 0..4 {
        let up = scratch.center(Face::Up);
        if scratch[Facelet::U2] == up && scratch[Facelet::U4] == up {
            let mut moves = u_alignment(k).to_vec();
            moves.extend_from_slice(ELL);
            return Some(moves);
        }
        scratch = Move::U.apply(&scratch);
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_util::solved;
    use cube_core::replay;

    /// The dot sequence must lift the four up-color stickers sitting on the
    /// side positions of the top edges onto the up face.
    #[test]
    fn dot_sequence_forms_the_cross() {
        let sides = [Facelet::F2, Facelet::L2, Facelet::R2, Facelet::B2];
        let tops = [Facelet::U2, Facelet::U4, Facelet::U6, Facelet::U8];
        let mut rng = fastrand::Rng::with_seed(41);
        let state = replay(&solved(), &crate::test_util::scramble(&mut rng, 15));
        let after = replay(&state, DOT);
        let lifted: Vec<_> = tops.iter().map(|&f| after[f]).collect();
        let mut expected: Vec<_> = sides.iter().map(|&f| state[f]).collect();
        let mut actual = lifted.clone();
        expected.sort();
        actual.sort();
        assert_eq!(actual, expected);
    }

    fn with_flipped_edges(pairs: &[(Facelet, Facelet)]) -> cube_core::CubeState {
        let mut colors = [cube_core::Color(' '); Facelet::COUNT];
        let reference = solved();
        for facelet in Facelet::ALL {
            colors[facelet.index()] = reference[facelet];
        }
        for &(a, b) in pairs {
            colors.swap(a.index(), b.index());
        }
        cube_core::CubeState::new(colors)
    }

    #[test]
    fn line_case_prepends_a_turn_only_for_the_vertical_line() {
        // vertical line: up color remains on U2/U8 only
        let vertical = with_flipped_edges(&[
            (Facelet::U4, Facelet::L2),
            (Facelet::U6, Facelet::R2),
        ]);
        assert_eq!(line_case(&vertical)[0], U);
        assert_eq!(line_case(&vertical).len(), LINE.len() + 1);

        let horizontal = with_flipped_edges(&[
            (Facelet::U2, Facelet::B2),
            (Facelet::U8, Facelet::F2),
        ]);
        assert_eq!(line_case(&horizontal).len(), LINE.len());
    }
}
