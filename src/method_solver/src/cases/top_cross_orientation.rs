//! Top-cross orientation cases: once the four top edges are structurally
//! placed, their side colors are brought to the matching side centers with
//! two swap sequences conjugated by up turns.

use cube_core::Move::{self, *};

use super::u_alignment;

/// Fixes the front edge and cycles the other three top edges.
pub(crate) const SUNE: &[Move] = &[R, U, Rp, U, R, U, U, Rp];

/// Swaps the front and back top edges, keeping left and right.
pub(crate) const OPPOSITE_SWAP: &[Move] = &[
    R, U, Rp, U, R, U, U, Rp, Up, R, U, Rp, U, R, U, U, Rp,
];

/// Swaps the front and right top edges, keeping back and left.
pub(crate) const ADJACENT_SWAP: &[Move] = &[U, R, U, Rp, U, R, U, U, Rp];

/// Conjugate a swap by `k` up turns so it acts on a rotated pair of slots.
pub(crate) fn conjugated(k: usize, core: &[Move]) -> Vec<Move> {
    let mut moves = u_alignment(k).to_vec();
    moves.extend_from_slice(core);
    moves.extend_from_slice(u_alignment((4 - k) % 4));
    moves
}
