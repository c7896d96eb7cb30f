//! Layer-by-layer ("human method") cube solving engine.
//!
//! The orchestrator validates the input, runs the three stage solvers in
//! order (bottom, second, top) while threading the state and accumulating
//! the move sequence, cancels redundant runs, and finally replays the
//! optimized sequence against the original input to confirm it reaches the
//! solved state.

use cube_core::{CubeState, Move, ValidationError, replay, validate};
use log::debug;
use thiserror::Error;

mod bottom;
mod cases;
mod optimize;
mod second;
mod stage;
mod top;

pub use optimize::optimize;

/// Every bounded retry loop in the engine caps at the four possible
/// reorientations of the cube about its vertical axis.
pub(crate) const ROTATION_CAP: usize = 4;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SolveError {
    #[error("invalid cube state: {0}")]
    InvalidState(#[from] ValidationError),
    #[error("{step} validation failed")]
    StepValidation { step: &'static str },
    #[error("replaying the optimized sequence did not reach the solved state")]
    SequenceIntegrity,
}

/// A confirmed solve: the move sequence and the replayed solved state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Solution {
    pub sequence: Vec<Move>,
    pub solved_state: CubeState,
}

/// Solve a cube state, all-or-nothing.
///
/// Structural errors are reported before any solving step runs; a stage
/// whose post-condition fails aborts the solve with no partial sequence. A
/// [`SolveError::SequenceIntegrity`] error means a defect in the move
/// tables or the optimizer, not a problem with the input.
pub fn solve(state: &CubeState) -> Result<Solution, SolveError> {
    validate(state)?;

    let mut sequence = Vec::new();
    let mut current = state.clone();
    current = bottom::solve_bottom(current, &mut sequence)?;
    debug!("bottom layer done, {} moves", sequence.len());
    current = second::solve_second(current, &mut sequence)?;
    debug!("second layer done, {} moves", sequence.len());
    current = top::solve_top(current, &mut sequence)?;
    debug!("top layer done, {} moves", sequence.len());

    let sequence = optimize::optimize(sequence);
    let confirmed = replay(state, &sequence);
    if !confirmed.is_solved() {
        return Err(SolveError::SequenceIntegrity);
    }
    Ok(Solution {
        sequence,
        solved_state: confirmed,
    })
}


#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_util::{scramble, solved};
    use cube_core::{Color, Facelet};

    #[test]
    fn already_solved_cube_needs_no_moves() {
        let solution = solve(&solved()).expect("solved cube must solve");
        assert!(solution.sequence.is_empty());
        assert!(solution.solved_state.is_solved());
    }

    #[test_log::test]
    fn solves_random_scrambles() {
        let mut rng = fastrand::Rng::with_seed(0xC0FFEE);
        for _ in 0..60 {
            let state = replay(&solved(), &scramble(&mut rng, 30));
            let solution = solve(&state).expect("valid scramble must solve");
            assert!(solution.solved_state.is_solved());
            assert!(replay(&state, &solution.sequence).is_solved());
        }
    }

    #[test]
    fn single_move_scrambles_solve() {
        for m in Move::ALL {
            let state = m.apply(&solved());
            let solution = solve(&state).expect("one-move scramble must solve");
            assert!(replay(&state, &solution.sequence).is_solved());
        }
    }

    #[test]
    fn invalid_states_are_rejected_up_front() {
        let mut map = std::collections::HashMap::new();
        for facelet in Facelet::ALL {
            map.insert(facelet.label().to_owned(), 'F');
        }
        let state = CubeState::from_map(&map).expect("all entries present");
        assert_eq!(
            solve(&state),
            Err(SolveError::InvalidState(
                ValidationError::DuplicateCenters
            ))
        );
    }

    #[test]
    fn solving_does_not_mutate_the_input() {
        let mut rng = fastrand::Rng::with_seed(9);
        let state = replay(&solved(), &scramble(&mut rng, 25));
        let copy = state.clone();
        solve(&state).expect("valid scramble must solve");
        assert_eq!(state, copy);
    }

    #[test]
    fn unsolvable_but_structurally_legal_state_fails_a_stage() {
        // a single flipped edge passes the structural validator (the
        // unordered color pair is unchanged) but can never be solved; the
        // engine must fail a stage post-condition instead of spinning
        let mut colors = [Color(' '); Facelet::COUNT];
        let reference = solved();
        for facelet in Facelet::ALL {
            colors[facelet.index()] = reference[facelet];
        }
        colors.swap(Facelet::F2.index(), Facelet::U8.index());
        let state = CubeState::new(colors);
        assert!(matches!(
            solve(&state),
            Err(SolveError::StepValidation { .. })
        ));
    }
}
