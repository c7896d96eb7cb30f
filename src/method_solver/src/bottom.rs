//! Bottom-layer stage: the cross, then the corners. Each iteration solves
//! the piece belonging at the front of the bottom layer and rotates the
//! whole cube a quarter turn to the left.

use cube_core::{CubeState, Face, Move};

use crate::cases::bottom_corners::{self, CornerSlot};
use crate::cases::bottom_cross::{self, EdgeSlot};
use crate::stage::{apply_recorded, run_step};
use crate::{ROTATION_CAP, SolveError};

pub(crate) fn solve_bottom(
    state: CubeState,
    sequence: &mut Vec<Move>,
) -> Result<CubeState, SolveError> {
    let state = run_step(state, sequence, "bottom cross", cross_step, cross_formed)?;
    run_step(
        state,
        sequence,
        "bottom corners",
        corners_step,
        bottom_layer_solved,
    )
}

/// The cross is formed: the four bottom edges sit home with matching side
/// colors.
fn cross_formed(state: &CubeState) -> bool {
    Face::SIDES
        .iter()
        .all(|&face| state[face.slot(8)] == state.center(face))
        && [2, 4, 6, 8]
            .iter()
            .all(|&slot| state[Face::Down.slot(slot)] == state.center(Face::Down))
}

fn bottom_layer_solved(state: &CubeState) -> bool {
    Face::SIDES
        .iter()
        .all(|&face| [7, 8, 9].iter().all(|&s| state[face.slot(s)] == state.center(face)))
        && [1, 2, 3, 4, 6, 8, 9]
            .iter()
            .all(|&slot| state[Face::Down.slot(slot)] == state.center(Face::Down))
}

fn cross_step(mut state: CubeState, sequence: &mut Vec<Move>) -> Option<CubeState> {
    for _ in 0..ROTATION_CAP {
        if cross_formed(&state) {
            return Some(state);
        }
        let slot = locate_cross_edge(&state)?;
        let resolution = bottom_cross::resolve(slot, &state);
        state = apply_recorded(state, sequence, resolution);
        state = apply_recorded(state, sequence, &[Move::Rl]);
    }
    Some(state)
}

/// The edge piece carrying the bottom and front center colors.
fn locate_cross_edge(state: &CubeState) -> Option<EdgeSlot> {
    let bottom = state.center(Face::Down);
    let front = state.center(Face::Front);
    EdgeSlot::ALL.into_iter().find(|slot| {
        let colors = slot.positions().map(|p| state[p]);
        colors.contains(&bottom) && colors.contains(&front)
    })
}

fn corners_step(mut state: CubeState, sequence: &mut Vec<Move>) -> Option<CubeState> {
    for _ in 0..ROTATION_CAP {
        if bottom_layer_solved(&state) {
            return Some(state);
        }
        let slot = locate_front_left_corner(&state)?;
        let resolution = bottom_corners::resolve(slot, &state);
        state = apply_recorded(state, sequence, resolution);
        state = apply_recorded(state, sequence, &[Move::Rl]);
    }
    Some(state)
}

/// The corner piece carrying the bottom, front and left center colors.
fn locate_front_left_corner(state: &CubeState) -> Option<CornerSlot> {
    let want = [
        state.center(Face::Down),
        state.center(Face::Front),
        state.center(Face::Left),
    ];
    CornerSlot::ALL.into_iter().find(|slot| {
        let colors = slot.positions().map(|p| state[p]);
        want.iter().all(|c| colors.contains(c))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_util::{scramble, solved};
    use cube_core::replay;

    #[test]
    fn bottom_stage_reaches_its_post_conditions() {
        let mut rng = fastrand::Rng::with_seed(61);
        for _ in 0..40 {
            let state = replay(&solved(), &scramble(&mut rng, 30));
            let mut sequence = Vec::new();
            let done = solve_bottom(state.clone(), &mut sequence).expect("bottom must solve");
            assert!(bottom_layer_solved(&done));
            assert_eq!(replay(&state, &sequence), done);
        }
    }

    #[test]
    fn solved_bottom_contributes_no_moves() {
        let mut sequence = Vec::new();
        let done = solve_bottom(solved(), &mut sequence).expect("solved bottom stays solved");
        assert!(sequence.is_empty());
        assert_eq!(done, solved());
    }
}
