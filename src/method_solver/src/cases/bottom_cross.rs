//! Bottom-cross cases: bring the Front/Down edge piece from any of the
//! twelve edge slots to the front-bottom slot (F8/D2), correctly oriented,
//! without disturbing cross edges that were already placed.

use cube_core::Move::{self, *};
use cube_core::{CubeState, EDGE_SLOTS, Face, Facelet};

/// The edge slot a piece was detected in, in canonical detection order.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
#[repr(u8)]
pub(crate) enum EdgeSlot {
    FrontTop,
    FrontLeft,
    FrontRight,
    FrontBottom,
    BackTop,
    LeftTop,
    RightTop,
    RightRight,
    LeftLeft,
    BackBottom,
    RightBottom,
    LeftBottom,
}

impl EdgeSlot {
    pub(crate) const ALL: [EdgeSlot; 12] = [
        EdgeSlot::FrontTop,
        EdgeSlot::FrontLeft,
        EdgeSlot::FrontRight,
        EdgeSlot::FrontBottom,
        EdgeSlot::BackTop,
        EdgeSlot::LeftTop,
        EdgeSlot::RightTop,
        EdgeSlot::RightRight,
        EdgeSlot::LeftLeft,
        EdgeSlot::BackBottom,
        EdgeSlot::RightBottom,
        EdgeSlot::LeftBottom,
    ];

    pub(crate) fn positions(self) -> [Facelet; 2] {
        EDGE_SLOTS[self as usize]
    }
}

/// Select the resolving sequence for the slot the piece occupies.
pub(crate) fn resolve(slot: EdgeSlot, cube: &CubeState) -> &'static [Move] {
    match slot {
        EdgeSlot::FrontTop => piece_on_front_top(cube),
        EdgeSlot::FrontLeft => piece_on_front_left(cube),
        EdgeSlot::FrontRight => piece_on_front_right(cube),
        EdgeSlot::FrontBottom => piece_on_front_bottom(cube),
        EdgeSlot::BackTop => piece_on_back_top(cube),
        EdgeSlot::LeftTop => piece_on_left_top(cube),
        EdgeSlot::RightTop => piece_on_right_top(cube),
        EdgeSlot::RightRight => piece_on_right_right(cube),
        EdgeSlot::LeftLeft => piece_on_left_left(cube),
        EdgeSlot::BackBottom => piece_on_back_bottom(cube),
        EdgeSlot::RightBottom => piece_on_right_bottom(cube),
        EdgeSlot::LeftBottom => piece_on_left_bottom(cube),
    }
}

fn bottom_is_at(cube: &CubeState, facelet: Facelet) -> bool {
    cube[facelet] == cube.center(Face::Down)
}

fn piece_on_front_top(cube: &CubeState) -> &'static [Move] {
    if bottom_is_at(cube, Facelet::U8) {
        &[F, F]
    } else {
        &[F, D, Rp, Dp]
    }
}

fn piece_on_front_left(cube: &CubeState) -> &'static [Move] {
    if bottom_is_at(cube, Facelet::L6) {
        &[Fp]
    } else {
        &[Dp, L, D]
    }
}

fn piece_on_front_right(cube: &CubeState) -> &'static [Move] {
    if bottom_is_at(cube, Facelet::R4) {
        &[F]
    } else {
        &[D, Rp, Dp]
    }
}

fn piece_on_front_bottom(cube: &CubeState) -> &'static [Move] {
    if bottom_is_at(cube, Facelet::D2) {
        // already home
        &[]
    } else {
        &[F, Dp, L, D]
    }
}

fn piece_on_back_top(cube: &CubeState) -> &'static [Move] {
    if bottom_is_at(cube, Facelet::U2) {
        &[U, U, F, F]
    } else {
        &[R, U, Rp, F]
    }
}

fn piece_on_left_top(cube: &CubeState) -> &'static [Move] {
    if bottom_is_at(cube, Facelet::U4) {
        &[Up, F, F]
    } else {
        &[L, Fp, Lp]
    }
}

fn piece_on_right_top(cube: &CubeState) -> &'static [Move] {
    if bottom_is_at(cube, Facelet::U6) {
        &[U, F, F]
    } else {
        &[Rp, F, R]
    }
}

fn piece_on_right_right(cube: &CubeState) -> &'static [Move] {
    if bottom_is_at(cube, Facelet::B4) {
        &[D, R, Dp]
    } else {
        &[R, Fp, R, F, Rp]
    }
}

fn piece_on_left_left(cube: &CubeState) -> &'static [Move] {
    if bottom_is_at(cube, Facelet::B6) {
        &[Dp, Lp, D]
    } else {
        &[L, L, Fp, L, L]
    }
}

fn piece_on_back_bottom(cube: &CubeState) -> &'static [Move] {
    if bottom_is_at(cube, Facelet::B8) {
        &[D, Lp, Dp, Fp]
    } else {
        &[R, R, B, R, R, F]
    }
}

fn piece_on_right_bottom(cube: &CubeState) -> &'static [Move] {
    if bottom_is_at(cube, Facelet::R8) {
        &[R, F]
    } else {
        &[R, D, Rp, Dp]
    }
}

fn piece_on_left_bottom(cube: &CubeState) -> &'static [Move] {
    if bottom_is_at(cube, Facelet::L8) {
        &[Lp, Fp]
    } else {
        &[L, Dp, Lp, D]
    }
}
