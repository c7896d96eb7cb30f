//! The stage-controller contract shared by the three layer solvers.
//!
//! A step function takes the current state, appends the moves it performs to
//! the shared sequence, and returns the updated state, or `None` when a case
//! it depends on cannot be resolved. The runner turns both failure shapes
//! (step failure, post-condition failure) into a [`SolveError`] carrying the
//! step name.

use cube_core::{CubeState, Move};

use crate::SolveError;

pub(crate) fn run_step(
    state: CubeState,
    sequence: &mut Vec<Move>,
    step_name: &'static str,
    step: impl FnOnce(CubeState, &mut Vec<Move>) -> Option<CubeState>,
    post_condition: impl FnOnce(&CubeState) -> bool,
) -> Result<CubeState, SolveError> {
    let updated = step(state, sequence).ok_or(SolveError::StepValidation { step: step_name })?;
    if post_condition(&updated) {
        Ok(updated)
    } else {
        Err(SolveError::StepValidation { step: step_name })
    }
}

/// Apply a resolving sequence to the state and record it.
pub(crate) fn apply_recorded(
    state: CubeState,
    sequence: &mut Vec<Move>,
    moves: &[Move],
) -> CubeState {
    sequence.extend_from_slice(moves);
    cube_core::replay(&state, moves)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_util::solved;

    #[test]
    fn run_step_reports_the_failing_step_by_name() {
        let err = run_step(
            solved(),
            &mut Vec::new(),
            "doomed step",
            |state, _| Some(state),
            |_| false,
        )
        .unwrap_err();
        assert_eq!(err, SolveError::StepValidation { step: "doomed step" });

        let err = run_step(
            solved(),
            &mut Vec::new(),
            "case miss",
            |_, _| None,
            |_| true,
        )
        .unwrap_err();
        assert_eq!(err, SolveError::StepValidation { step: "case miss" });
    }

    #[test]
    fn apply_recorded_threads_state_and_extends_sequence() {
        let mut sequence = vec![Move::U];
        let state = apply_recorded(solved(), &mut sequence, &[Move::F, Move::Fp]);
        assert_eq!(state, solved());
        assert_eq!(sequence, vec![Move::U, Move::F, Move::Fp]);
    }
}
