//! The move engine: each move is a fixed permutation of the 54 facelet slots.
//!
//! Tables are in goes-to form: applying a move sends the sticker at slot `i`
//! to slot `table[i]`. They are built at compile time from the face cycles,
//! so the geometry stays auditable.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

use crate::facelet::Facelet::{self, *};
use crate::state::CubeState;

type Perm = [u8; Facelet::COUNT];

const fn perm_from_cycles(cycles: &[&[Facelet]]) -> Perm {
    let mut table = [0u8; Facelet::COUNT];
    let mut i = 0;
    while i < Facelet::COUNT {
        table[i] = i as u8;
        i += 1;
    }
    let mut c = 0;
    while c < cycles.len() {
        let cycle = cycles[c];
        let mut j = 0;
        while j < cycle.len() {
            let from = cycle[j] as usize;
            let to = cycle[(j + 1) % cycle.len()] as u8;
            table[from] = to;
            j += 1;
        }
        c += 1;
    }
    table
}

const fn inverted(p: Perm) -> Perm {
    let mut table = [0u8; Facelet::COUNT];
    let mut i = 0;
    while i < Facelet::COUNT {
        table[p[i] as usize] = i as u8;
        i += 1;
    }
    table
}

const F_CW: Perm = perm_from_cycles(&[
    &[F1, F3, F9, F7],
    &[F2, F6, F8, F4],
    &[U7, R1, D3, L9],
    &[U8, R4, D2, L6],
    &[U9, R7, D1, L3],
]);

const B_CW: Perm = perm_from_cycles(&[
    &[B1, B3, B9, B7],
    &[B2, B6, B8, B4],
    &[U1, L7, D9, R3],
    &[U2, L4, D8, R6],
    &[U3, L1, D7, R9],
]);

const L_CW: Perm = perm_from_cycles(&[
    &[L1, L3, L9, L7],
    &[L2, L6, L8, L4],
    &[U1, F1, D1, B9],
    &[U4, F4, D4, B6],
    &[U7, F7, D7, B3],
]);

const R_CW: Perm = perm_from_cycles(&[
    &[R1, R3, R9, R7],
    &[R2, R6, R8, R4],
    &[F3, U3, B7, D3],
    &[F6, U6, B4, D6],
    &[F9, U9, B1, D9],
]);

const U_CW: Perm = perm_from_cycles(&[
    &[U1, U3, U9, U7],
    &[U2, U6, U8, U4],
    &[F1, L1, B1, R1],
    &[F2, L2, B2, R2],
    &[F3, L3, B3, R3],
]);

const D_CW: Perm = perm_from_cycles(&[
    &[D1, D3, D9, D7],
    &[D2, D6, D8, D4],
    &[F7, R7, B7, L7],
    &[F8, R8, B8, L8],
    &[F9, R9, B9, L9],
]);

/// Whole-cube rotation bringing the Right face to the Front: the Up face
/// turns clockwise, the Down face counter-clockwise, and every side-face
/// facelet shifts one face to the left.
const ROT_LEFT: Perm = perm_from_cycles(&[
    &[U1, U3, U9, U7],
    &[U2, U6, U8, U4],
    &[D1, D7, D9, D3],
    &[D2, D4, D8, D6],
    &[F1, L1, B1, R1],
    &[F2, L2, B2, R2],
    &[F3, L3, B3, R3],
    &[F4, L4, B4, R4],
    &[F5, L5, B5, R5],
    &[F6, L6, B6, R6],
    &[F7, L7, B7, R7],
    &[F8, L8, B8, R8],
    &[F9, L9, B9, R9],
]);

const F_CCW: Perm = inverted(F_CW);
const B_CCW: Perm = inverted(B_CW);
const L_CCW: Perm = inverted(L_CW);
const R_CCW: Perm = inverted(R_CW);
const U_CCW: Perm = inverted(U_CW);
const D_CCW: Perm = inverted(D_CW);
const ROT_RIGHT: Perm = inverted(ROT_LEFT);

/// An elementary move: a quarter turn of one face, or a whole-cube
/// reorientation about the vertical axis.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum Move {
    F,
    Fp,
    B,
    Bp,
    L,
    Lp,
    R,
    Rp,
    U,
    Up,
    D,
    Dp,
    /// Rotate the whole cube so the Right face comes to the Front.
    Rl,
    /// Rotate the whole cube so the Left face comes to the Front.
    Rr,
}

impl Move {
    pub const ALL: [Move; 14] = [
        Move::F,
        Move::Fp,
        Move::B,
        Move::Bp,
        Move::L,
        Move::Lp,
        Move::R,
        Move::Rp,
        Move::U,
        Move::Up,
        Move::D,
        Move::Dp,
        Move::Rl,
        Move::Rr,
    ];

    pub fn inverse(self) -> Move {
        match self {
            Move::F => Move::Fp,
            Move::Fp => Move::F,
            Move::B => Move::Bp,
            Move::Bp => Move::B,
            Move::L => Move::Lp,
            Move::Lp => Move::L,
            Move::R => Move::Rp,
            Move::Rp => Move::R,
            Move::U => Move::Up,
            Move::Up => Move::U,
            Move::D => Move::Dp,
            Move::Dp => Move::D,
            Move::Rl => Move::Rr,
            Move::Rr => Move::Rl,
        }
    }

    fn permutation(self) -> &'static Perm {
        match self {
            Move::F => &F_CW,
            Move::Fp => &F_CCW,
            Move::B => &B_CW,
            Move::Bp => &B_CCW,
            Move::L => &L_CW,
            Move::Lp => &L_CCW,
            Move::R => &R_CW,
            Move::Rp => &R_CCW,
            Move::U => &U_CW,
            Move::Up => &U_CCW,
            Move::D => &D_CW,
            Move::Dp => &D_CCW,
            Move::Rl => &ROT_LEFT,
            Move::Rr => &ROT_RIGHT,
        }
    }

    /// Apply this move to a state, producing the permuted state.
    pub fn apply(self, state: &CubeState) -> CubeState {
        let table = self.permutation();
        let old = state.colors();
        let mut new = *old;
        for i in 0..Facelet::COUNT {
            new[table[i] as usize] = old[i];
        }
        CubeState::new(new)
    }

    pub fn token(self) -> &'static str {
        match self {
            Move::F => "f",
            Move::Fp => "f'",
            Move::B => "b",
            Move::Bp => "b'",
            Move::L => "l",
            Move::Lp => "l'",
            Move::R => "r",
            Move::Rp => "r'",
            Move::U => "u",
            Move::Up => "u'",
            Move::D => "d",
            Move::Dp => "d'",
            Move::Rl => "rl",
            Move::Rr => "rr",
        }
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.token())
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("`{0}` is not a move token")]
pub struct ParseMoveError(pub String);

impl FromStr for Move {
    type Err = ParseMoveError;

    fn from_str(s: &str) -> Result<Move, ParseMoveError> {
        Move::ALL
            .iter()
            .find(|m| m.token() == s)
            .copied()
            .ok_or_else(|| ParseMoveError(s.to_owned()))
    }
}

/// Replay a move sequence against a state by iterated application.
pub fn replay(state: &CubeState, sequence: &[Move]) -> CubeState {
    let mut current = state.clone();
    for &m in sequence {
        current = m.apply(&current);
    }
    current
}

/// Parse a whitespace-separated move-token string.
pub fn parse_sequence(s: &str) -> Result<Vec<Move>, ParseMoveError> {
    s.split_whitespace().map(Move::from_str).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::Color;

    fn solved() -> CubeState {
        CubeState::solved(['F', 'R', 'B', 'L', 'U', 'D'].map(Color))
    }

    #[test]
    fn tables_are_permutations() {
        for m in Move::ALL {
            let mut seen = [false; Facelet::COUNT];
            for &v in m.permutation() {
                assert!(!seen[v as usize], "{m} maps two slots to {v}");
                seen[v as usize] = true;
            }
        }
    }

    #[test]
    fn four_quarter_turns_are_identity() {
        let start = solved();
        for m in Move::ALL {
            let mut state = start.clone();
            for _ in 0..4 {
                state = m.apply(&state);
            }
            assert_eq!(state, start, "{m} applied four times");
        }
    }

    #[test]
    fn inverse_round_trip() {
        let mut state = solved();
        // take the state off the beaten path first
        state = replay(&state, &[Move::F, Move::R, Move::U, Move::Rl, Move::D]);
        for m in Move::ALL {
            assert_eq!(m.inverse().apply(&m.apply(&state)), state, "{m}");
            assert_eq!(m.inverse().inverse(), m);
        }
    }

    #[test]
    fn whole_cube_rotations_cancel() {
        let state = replay(&solved(), &[Move::F, Move::U]);
        assert_eq!(replay(&state, &[Move::Rl, Move::Rr]), state);
        assert_eq!(replay(&state, &[Move::Rr, Move::Rl]), state);
    }

    #[test]
    fn rotate_left_brings_right_face_to_front() {
        let state = Move::Rl.apply(&solved());
        assert_eq!(state.center(crate::facelet::Face::Front), Color('R'));
        assert_eq!(state.center(crate::facelet::Face::Left), Color('F'));
    }

    #[test]
    fn face_turn_permutes_exactly_twenty_slots() {
        for m in [
            Move::F,
            Move::Fp,
            Move::B,
            Move::Bp,
            Move::L,
            Move::Lp,
            Move::R,
            Move::Rp,
            Move::U,
            Move::Up,
            Move::D,
            Move::Dp,
        ] {
            let moved = m
                .permutation()
                .iter()
                .enumerate()
                .filter(|&(i, &v)| i != v as usize)
                .count();
            assert_eq!(moved, 20, "{m}");
        }
    }

    #[test]
    fn token_round_trip() {
        for m in Move::ALL {
            assert_eq!(m.token().parse::<Move>(), Ok(m));
        }
        assert!("f2".parse::<Move>().is_err());
        assert!("x".parse::<Move>().is_err());
        assert_eq!(
            parse_sequence("f r' rl u u'"),
            Ok(vec![Move::F, Move::Rp, Move::Rl, Move::U, Move::Up])
        );
    }

    #[test]
    fn replay_then_inverse_replay_restores_state() {
        let mut rng = fastrand::Rng::with_seed(11);
        let start = solved();
        let sequence: Vec<Move> = (0..40)
            .map(|_| Move::ALL[rng.usize(..Move::ALL.len())])
            .collect();
        let scrambled = replay(&start, &sequence);
        let back: Vec<Move> = sequence.iter().rev().map(|m| m.inverse()).collect();
        assert_eq!(replay(&scrambled, &back), start);
    }
}
