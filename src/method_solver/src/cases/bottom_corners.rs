//! Bottom-corner cases: bring the Front/Left/Down corner piece from any of
//! the eight corner slots to the front-bottom-left slot (F7/L9/D1),
//! correctly oriented, preserving the finished cross and the bottom corners
//! that were already placed.

use cube_core::Move::{self, *};
use cube_core::{CORNER_SLOTS, CubeState, Face, Facelet};

/// The corner slot a piece was detected in, in canonical detection order.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
#[repr(u8)]
pub(crate) enum CornerSlot {
    FrontTopLeft,
    FrontTopRight,
    FrontBottomLeft,
    FrontBottomRight,
    LeftLeftTop,
    RightRightTop,
    LeftLeftBottom,
    RightRightBottom,
}

impl CornerSlot {
    pub(crate) const ALL: [CornerSlot; 8] = [
        CornerSlot::FrontTopLeft,
        CornerSlot::FrontTopRight,
        CornerSlot::FrontBottomLeft,
        CornerSlot::FrontBottomRight,
        CornerSlot::LeftLeftTop,
        CornerSlot::RightRightTop,
        CornerSlot::LeftLeftBottom,
        CornerSlot::RightRightBottom,
    ];

    pub(crate) fn positions(self) -> [Facelet; 3] {
        CORNER_SLOTS[self as usize]
    }
}

/// Select the resolving sequence for the slot the piece occupies.
pub(crate) fn resolve(slot: CornerSlot, cube: &CubeState) -> &'static [Move] {
    match slot {
        CornerSlot::FrontTopLeft => front_top_left(cube),
        CornerSlot::FrontTopRight => front_top_right(cube),
        CornerSlot::FrontBottomLeft => front_bottom_left(cube),
        CornerSlot::FrontBottomRight => front_bottom_right(cube),
        CornerSlot::LeftLeftTop => left_left_top(cube),
        CornerSlot::RightRightTop => right_right_top(cube),
        CornerSlot::LeftLeftBottom => left_left_bottom(cube),
        CornerSlot::RightRightBottom => right_right_bottom(cube),
    }
}

fn bottom_is_at(cube: &CubeState, facelet: Facelet) -> bool {
    cube[facelet] == cube.center(Face::Down)
}

fn front_top_left(cube: &CubeState) -> &'static [Move] {
    if bottom_is_at(cube, Facelet::F1) {
        &[F, U, Fp]
    } else if bottom_is_at(cube, Facelet::U7) {
        &[F, R, U, U, Rp, Fp]
    } else {
        &[Lp, Up, L]
    }
}

fn front_top_right(cube: &CubeState) -> &'static [Move] {
    if bottom_is_at(cube, Facelet::F3) {
        &[U, Lp, Up, L]
    } else if bottom_is_at(cube, Facelet::U9) {
        &[Lp, Fp, Lp, F, Up, L]
    } else {
        &[Lp, U, L]
    }
}

fn front_bottom_left(cube: &CubeState) -> &'static [Move] {
    if bottom_is_at(cube, Facelet::D1) {
        // already home
        &[]
    } else if bottom_is_at(cube, Facelet::F7) {
        &[Lp, U, L, F, U, Fp]
    } else {
        &[F, Up, Fp, Lp, Up, L]
    }
}

fn front_bottom_right(cube: &CubeState) -> &'static [Move] {
    if bottom_is_at(cube, Facelet::F9) {
        &[Fp, U, Fp, L, F, F, Lp]
    } else if bottom_is_at(cube, Facelet::R7) {
        &[R, Lp, U, Rp, L]
    } else {
        &[R, Lp, Up, Rp, U, L]
    }
}

fn left_left_top(cube: &CubeState) -> &'static [Move] {
    if bottom_is_at(cube, Facelet::U1) {
        &[F, R, U, Rp, U, Fp]
    } else if bottom_is_at(cube, Facelet::L1) {
        &[Up, F, U, Fp]
    } else {
        &[F, Up, Fp]
    }
}

fn right_right_top(cube: &CubeState) -> &'static [Move] {
    if bottom_is_at(cube, Facelet::U3) {
        &[F, Rp, F, R, F, F]
    } else if bottom_is_at(cube, Facelet::R3) {
        &[F, U, U, Fp]
    } else {
        &[Lp, U, U, L]
    }
}

fn left_left_bottom(cube: &CubeState) -> &'static [Move] {
    if bottom_is_at(cube, Facelet::L7) {
        &[F, L, Up, F, Lp, U, Fp]
    } else if bottom_is_at(cube, Facelet::D7) {
        &[F, Bp, U, B, Up, Fp]
    } else {
        &[F, Bp, Up, Fp, B]
    }
}

fn right_right_bottom(cube: &CubeState) -> &'static [Move] {
    if bottom_is_at(cube, Facelet::R9) {
        &[F, Rp, U, U, R, Fp]
    } else if bottom_is_at(cube, Facelet::D9) {
        &[F, B, U, U, Fp, Bp]
    } else {
        &[Lp, B, U, U, Bp, L]
    }
}
