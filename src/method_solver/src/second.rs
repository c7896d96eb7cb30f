//! Second-layer stage: insert the middle-band edges. Candidates are top
//! edges containing neither the up nor the down center color; when none is
//! on top but the band is still wrong, the stuck piece is extracted back to
//! the top first.

use cube_core::{CubeState, Face, Facelet, Move};

use crate::cases::second_layer::{INSERT_LEFT, INSERT_RIGHT, MiddleSlot, extraction};
use crate::stage::{apply_recorded, run_step};
use crate::{ROTATION_CAP, SolveError};

/// The four top edge slots, in detection order.
const TOP_SLOTS: [[Facelet; 2]; 4] = [
    [Facelet::F2, Facelet::U8],
    [Facelet::U4, Facelet::L2],
    [Facelet::U6, Facelet::R2],
    [Facelet::U2, Facelet::B2],
];

pub(crate) fn solve_second(
    state: CubeState,
    sequence: &mut Vec<Move>,
) -> Result<CubeState, SolveError> {
    run_step(state, sequence, "second layer", layer_step, layer_solved)
}

fn band_solved(state: &CubeState) -> bool {
    Face::SIDES
        .iter()
        .all(|&face| [4, 6].iter().all(|&s| state[face.slot(s)] == state.center(face)))
}

/// Post-condition: the middle band and the bottom layer below it.
fn layer_solved(state: &CubeState) -> bool {
    Face::SIDES
        .iter()
        .all(|&face| {
            [4, 6, 7, 8, 9]
                .iter()
                .all(|&s| state[face.slot(s)] == state.center(face))
        })
        && [1, 2, 3, 4, 6, 8, 9]
            .iter()
            .all(|&slot| state[Face::Down.slot(slot)] == state.center(Face::Down))
}

fn layer_step(mut state: CubeState, sequence: &mut Vec<Move>) -> Option<CubeState> {
    for _ in 0..ROTATION_CAP {
        if band_solved(&state) {
            return Some(state);
        }
        if let Some(pair) = detect_top_piece(&state) {
            state = insert_top_piece(state, pair, sequence);
            continue;
        }
        let Some(stuck) = locate_stuck_piece(&state) else {
            return Some(state);
        };
        state = apply_recorded(state, sequence, extraction(stuck));
        if let Some(pair) = detect_top_piece(&state) {
            state = insert_top_piece(state, pair, sequence);
        }
    }
    Some(state)
}

/// The first top edge whose colors avoid both the up and down centers.
fn detect_top_piece(state: &CubeState) -> Option<[Facelet; 2]> {
    let up = state.center(Face::Up);
    let down = state.center(Face::Down);
    TOP_SLOTS.into_iter().find(|pair| {
        pair.iter()
            .all(|&p| state[p] != up && state[p] != down)
    })
}

/// Which middle slot holds a wrong or flipped piece, scanning the four
/// rotations of the front-left slot.
fn locate_stuck_piece(state: &CubeState) -> Option<MiddleSlot> {
    let mut scratch = state.clone();
    for slot in MiddleSlot::ALL {
        if scratch[Facelet::F4] != scratch.center(Face::Front)
            || scratch[Facelet::L6] != scratch.center(Face::Left)
        {
            return Some(slot);
        }
        scratch = Move::Rl.apply(&scratch);
    }
    None
}

/// Align the piece's side color with its face center (whole-cube rotation,
/// then up turns), and insert to the left or right of the front face.
fn insert_top_piece(
    mut state: CubeState,
    pair: [Facelet; 2],
    sequence: &mut Vec<Move>,
) -> CubeState {
    let side = if pair[0].face() == Face::Up { pair[1] } else { pair[0] };
    let color = state[side];
    let rotation: &[Move] = if state.center(Face::Right) == color {
        &[Move::Rl]
    } else if state.center(Face::Left) == color {
        &[Move::Rr]
    } else if state.center(Face::Back) == color {
        &[Move::Rl, Move::Rl]
    } else {
        &[]
    };
    state = apply_recorded(state, sequence, rotation);

    let mut turns = 0;
    for _ in 0..ROTATION_CAP {
        let aligned = state[Facelet::F2] == state.center(Face::Front)
            && (state[Facelet::U8] == state.center(Face::Left)
                || state[Facelet::U8] == state.center(Face::Right));
        if aligned {
            break;
        }
        state = Move::U.apply(&state);
        turns += 1;
    }
    sequence.extend_from_slice(crate::cases::u_alignment(turns));

    let insertion = if state[Facelet::U8] == state.center(Face::Right) {
        INSERT_RIGHT
    } else {
        INSERT_LEFT
    };
    apply_recorded(state, sequence, insertion)
}
