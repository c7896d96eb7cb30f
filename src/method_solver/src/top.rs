//! Top-layer stage: four ordered steps, each validated on its own. The
//! steps always run; each early-returns when its pattern is already
//! satisfied.

use cube_core::Move::{self, *};
use cube_core::{CubeState, Face, Facelet};

use crate::cases::top_corners::{
    NIKLAS_LEFT, all_corners_placed, find_placed_corner, finishing_sequence,
};
use crate::cases::top_cross::{DOT, ell_case, line_case};
use crate::cases::top_cross_orientation::{ADJACENT_SWAP, OPPOSITE_SWAP, conjugated};
use crate::cases::u_alignment;
use crate::stage::{apply_recorded, run_step};
use crate::{ROTATION_CAP, SolveError};

/// The four twist moves repeated until the corner under inspection matches
/// the top center.
const TWIST: &[Move] = &[R, D, Rp, Dp];

pub(crate) fn solve_top(
    state: CubeState,
    sequence: &mut Vec<Move>,
) -> Result<CubeState, SolveError> {
    let state = run_step(state, sequence, "top cross", cross_step, cross_done)?;
    let state = run_step(
        state,
        sequence,
        "top cross orientation",
        cross_orientation_step,
        cross_oriented,
    )?;
    let state = run_step(state, sequence, "top corners", corners_step, corners_done)?;
    run_step(
        state,
        sequence,
        "top corners orientation",
        corner_orientation_step,
        CubeState::is_solved,
    )
}

fn lower_layers_solved(state: &CubeState) -> bool {
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

fn up_edges_oriented(state: &CubeState) -> bool {
    [2, 4, 6, 8]
        .iter()
        .all(|&slot| state[Face::Up.slot(slot)] == state.center(Face::Up))
}

fn cross_done(state: &CubeState) -> bool {
    lower_layers_solved(state) && up_edges_oriented(state)
}

fn cross_oriented(state: &CubeState) -> bool {
    cross_done(state)
        && Face::SIDES
            .iter()
            .all(|&face| state[face.slot(2)] == state.center(face))
}

fn corners_done(state: &CubeState) -> bool {
    cross_oriented(state) && all_corners_placed(state)
}

/// Step 1: form the cross on the up face (dot, line or L-shape).
fn cross_step(state: CubeState, sequence: &mut Vec<Move>) -> Option<CubeState> {
    let up = state.center(Face::Up);
    let oriented = [2, 4, 6, 8]
        .iter()
        .filter(|&&slot| state[Face::Up.slot(slot)] == up)
        .count();
    let moves = match oriented {
        4 => return Some(state),
        2 => {
            let vertical = state[Facelet::U2] == up && state[Facelet::U8] == up;
            let horizontal = state[Facelet::U4] == up && state[Facelet::U6] == up;
            if vertical || horizontal {
                line_case(&state)
            } else {
                ell_case(&state)?
            }
        }
        _ => DOT.to_vec(),
    };
    Some(apply_recorded(state, sequence, &moves))
}

/// The side faces whose top-edge side sticker already matches their center,
/// in Front, Right, Back, Left order.
fn edges_matched(state: &CubeState) -> [bool; 4] {
    [Face::Front, Face::Right, Face::Back, Face::Left]
        .map(|face| state[face.slot(2)] == state.center(face))
}

/// The up-turn count whose alignment matches the most side centers.
fn best_alignment(state: &CubeState) -> usize {
    let mut best = (0, 0);
    let mut scratch = state.clone();
    for k in 0..ROTATION_CAP {
        let count = edges_matched(&scratch).iter().filter(|&&m| m).count();
        if count > best.1 {
            best = (k, count);
        }
        scratch = Move::U.apply(&scratch);
    }
    best.0
}

/// Step 2: permute the placed top edges so their side colors match the side
/// centers, handling the swapped-opposite and swapped-adjacent sub-cases.
fn cross_orientation_step(mut state: CubeState, sequence: &mut Vec<Move>) -> Option<CubeState> {
    for _ in 0..ROTATION_CAP {
        let alignment = u_alignment(best_alignment(&state));
        state = apply_recorded(state, sequence, alignment);
        let swap = match edges_matched(&state) {
            [true, true, true, true] => return Some(state),
            // two matched: the other two are each other's, swapped
            [false, true, false, true] => OPPOSITE_SWAP.to_vec(),
            [true, false, true, false] => conjugated(1, OPPOSITE_SWAP),
            [false, false, true, true] => ADJACENT_SWAP.to_vec(),
            [true, true, false, false] => conjugated(2, ADJACENT_SWAP),
            [true, false, false, true] => conjugated(1, ADJACENT_SWAP),
            [false, true, true, false] => conjugated(3, ADJACENT_SWAP),
            // one matched (a three-cycle): park it at the back and swap the
            // front pair to leave a plain transposition
            [false, false, true, false] => ADJACENT_SWAP.to_vec(),
            [false, false, false, true] => conjugated(1, ADJACENT_SWAP),
            [true, false, false, false] => conjugated(2, ADJACENT_SWAP),
            [false, true, false, false] => conjugated(3, ADJACENT_SWAP),
            // none matched under any alignment: perturb
            [false, false, false, false] => ADJACENT_SWAP.to_vec(),
            _ => return None,
        };
        state = apply_recorded(state, sequence, &swap);
    }
    Some(state)
}

/// Step 3: place the top corners structurally.
fn corners_step(mut state: CubeState, sequence: &mut Vec<Move>) -> Option<CubeState> {
    if all_corners_placed(&state) {
        return Some(state);
    }
    match find_placed_corner(&state) {
        Some(rotation) => {
            state = apply_recorded(state, sequence, rotation);
        }
        None => {
            // no corner is correct anywhere: this sequence always creates
            // one
            state = apply_recorded(state, sequence, NIKLAS_LEFT);
            let rotation = find_placed_corner(&state)?;
            state = apply_recorded(state, sequence, rotation);
        }
    }
    let finish = finishing_sequence(&state);
    Some(apply_recorded(state, sequence, finish))
}

/// Step 4: twist each top corner in place, then restore the global
/// alignment with a final up turn.
fn corner_orientation_step(mut state: CubeState, sequence: &mut Vec<Move>) -> Option<CubeState> {
    let up_corners_done = |s: &CubeState| {
        [1, 3, 7, 9]
            .iter()
            .all(|&slot| s[Face::Up.slot(slot)] == s.center(Face::Up))
    };
    for _ in 0..ROTATION_CAP {
        if up_corners_done(&state) {
            break;
        }
        for _ in 0..ROTATION_CAP {
            if state[Facelet::U3] == state.center(Face::Up) {
                break;
            }
            state = apply_recorded(state, sequence, TWIST);
        }
        if up_corners_done(&state) {
            break;
        }
        state = apply_recorded(state, sequence, &[U]);
    }

    let mut turns = 0;
    let mut scratch = state.clone();
    for _ in 0..ROTATION_CAP {
        if scratch[Facelet::F2] == scratch.center(Face::Front) {
            break;
        }
        scratch = Move::U.apply(&scratch);
        turns += 1;
    }
    Some(apply_recorded(state, sequence, u_alignment(turns)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bottom::solve_bottom;
    use crate::second::solve_second;
    use crate::test_util::{scramble, solved};
    use cube_core::replay;

    fn ready_for_top(rng: &mut fastrand::Rng) -> CubeState {
        let state = replay(&solved(), &scramble(rng, 30));
        let mut sequence = Vec::new();
        let state = solve_bottom(state, &mut sequence).expect("bottom must solve");
        solve_second(state, &mut sequence).expect("second must solve")
    }

    #[test]
    fn top_stage_finishes_the_cube() {
        let mut rng = fastrand::Rng::with_seed(71);
        for _ in 0..40 {
            let state = ready_for_top(&mut rng);
            let mut sequence = Vec::new();
            let done = solve_top(state.clone(), &mut sequence).expect("top must solve");
            assert!(done.is_solved());
            assert_eq!(replay(&state, &sequence), done);
        }
    }

    #[test]
    fn steps_early_return_on_a_solved_top() {
        let mut sequence = Vec::new();
        let done = solve_top(solved(), &mut sequence).expect("solved top stays solved");
        assert!(sequence.is_empty());
        assert!(done.is_solved());
    }

    #[test]
    fn post_conditions_hold_after_each_step() {
        let mut rng = fastrand::Rng::with_seed(73);
        let state = ready_for_top(&mut rng);
        let mut sequence = Vec::new();
        let state = cross_step(state, &mut sequence).expect("cross step");
        assert!(cross_done(&state));
        let state = cross_orientation_step(state, &mut sequence).expect("orientation step");
        assert!(cross_oriented(&state));
        let state = corners_step(state, &mut sequence).expect("corners step");
        assert!(corners_done(&state));
        let state = corner_orientation_step(state, &mut sequence).expect("twist step");
        assert!(state.is_solved());
    }
}
