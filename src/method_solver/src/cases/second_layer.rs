//! Second-layer cases: the two mirrored insertion sequences for an aligned
//! top-layer edge, and the four extraction sequences that return a stuck
//! middle-band piece to the top layer.

use cube_core::Facelet;
use cube_core::Move::{self, *};

/// Insert the aligned front-top edge into the front-right slot.
pub(crate) const INSERT_RIGHT: &[Move] = &[U, R, Up, Rp, Up, Fp, U, F];

/// Insert the aligned front-top edge into the front-left slot.
pub(crate) const INSERT_LEFT: &[Move] = &[Up, Lp, U, L, U, F, Up, Fp];

/// A middle-band edge slot, in `rl` scan order.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub(crate) enum MiddleSlot {
    FrontLeft,
    FrontRight,
    RightRight,
    LeftLeft,
}

impl MiddleSlot {
    pub(crate) const ALL: [MiddleSlot; 4] = [
        MiddleSlot::FrontLeft,
        MiddleSlot::FrontRight,
        MiddleSlot::RightRight,
        MiddleSlot::LeftLeft,
    ];

    pub(crate) fn positions(self) -> [Facelet; 2] {
        match self {
            MiddleSlot::FrontLeft => [Facelet::F4, Facelet::L6],
            MiddleSlot::FrontRight => [Facelet::F6, Facelet::R4],
            MiddleSlot::RightRight => [Facelet::B4, Facelet::R6],
            MiddleSlot::LeftLeft => [Facelet::B6, Facelet::L4],
        }
    }
}

/// Eject whatever occupies the slot back into the top layer, leaving the
/// bottom layer and the other middle slots untouched.
pub(crate) fn extraction(slot: MiddleSlot) -> &'static [Move] {
    match slot {
        MiddleSlot::FrontLeft => &[F, U, Fp, Up, Lp, Up, L],
        MiddleSlot::FrontRight => &[F, Rp, Fp, R, Fp, Up, F],
        MiddleSlot::RightRight => &[R, Bp, Rp, B, Rp, Up, R],
        MiddleSlot::LeftLeft => &[L, U, Lp, Up, Bp, Up, B],
    }
}
