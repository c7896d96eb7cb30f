//! The case library: per-stage tables mapping a detected geometric pattern
//! to a fixed resolving move sequence.
//!
//! Case selection identifies a piece by the set of positions it occupies,
//! matched against the canonical slot lists in `cube_core::facelet`; the
//! matched slot plus the piece's orientation selects the sequence. The
//! sequences themselves are fixed tables.

pub(crate) mod bottom_corners;
pub(crate) mod bottom_cross;
pub(crate) mod second_layer;
pub(crate) mod top_corners;
pub(crate) mod top_cross;
pub(crate) mod top_cross_orientation;

use cube_core::Move;

/// The up-face alignment for `k` quarter turns, three turns collapsed into
/// the single reverse turn.
pub(crate) fn u_alignment(k: usize) -> &'static [Move] {
    match k % 4 {
        0 => &[],
        1 => &[Move::U],
        2 => &[Move::U, Move::U],
        _ => &[Move::Up],
    }
}
