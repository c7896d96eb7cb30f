//! Structural validation of candidate cube states.
//!
//! Runs once, before any solving begins. A state that fails any invariant is
//! rejected with the specific violation; solving never proceeds on it.

use std::collections::{BTreeMap, BTreeSet};
use std::fmt;

use itertools::Itertools;
use thiserror::Error;

use crate::facelet::{CORNER_FACE_TRIPLES, CORNER_SLOTS, EDGE_FACE_PAIRS, EDGE_SLOTS, Face, Facelet};
use crate::state::{Color, CubeState};

/// Per-color occurrence counts that differ from the required nine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColorCounts(pub Vec<(Color, usize)>);

impl fmt::Display for ColorCounts {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for (color, count) in &self.0 {
            if !first {
                write!(f, ", ")?;
            }
            write!(f, "{color}: {count}")?;
            first = false;
        }
        Ok(())
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("missing facelet key: {0}")]
    MissingFacelet(Facelet),
    #[error("there must be 6 distinct center colors")]
    DuplicateCenters,
    #[error("each color must appear exactly 9 times; incorrect counts: {0}")]
    WrongColorCounts(ColorCounts),
    #[error("the side (edge) pieces are incorrect")]
    InvalidEdgePieces,
    #[error("the corner pieces are incorrect")]
    InvalidCornerPieces,
}

/// Check every structural invariant of a cube state.
pub fn validate(state: &CubeState) -> Result<(), ValidationError> {
    check_distinct_centers(state)?;
    check_color_counts(state)?;
    check_edge_pieces(state)?;
    check_corner_pieces(state)
}

fn check_distinct_centers(state: &CubeState) -> Result<(), ValidationError> {
    if Face::ALL.iter().map(|&f| state.center(f)).all_unique() {
        Ok(())
    } else {
        Err(ValidationError::DuplicateCenters)
    }
}

fn check_color_counts(state: &CubeState) -> Result<(), ValidationError> {
    let mut counts: BTreeMap<Color, usize> = BTreeMap::new();
    for facelet in Facelet::ALL {
        *counts.entry(state[facelet]).or_insert(0) += 1;
    }
    let wrong: Vec<(Color, usize)> = counts
        .into_iter()
        .filter(|&(_, count)| count != 9)
        .collect();
    if wrong.is_empty() {
        Ok(())
    } else {
        Err(ValidationError::WrongColorCounts(ColorCounts(wrong)))
    }
}

fn sorted_pair(a: Color, b: Color) -> [Color; 2] {
    if a <= b { [a, b] } else { [b, a] }
}

fn sorted_triple(mut triple: [Color; 3]) -> [Color; 3] {
    triple.sort();
    triple
}

fn check_edge_pieces(state: &CubeState) -> Result<(), ValidationError> {
    let needed: BTreeSet<[Color; 2]> = EDGE_FACE_PAIRS
        .iter()
        .map(|&[a, b]| sorted_pair(state.center(a), state.center(b)))
        .collect();
    let actual: BTreeSet<[Color; 2]> = EDGE_SLOTS
        .iter()
        .map(|&[a, b]| sorted_pair(state[a], state[b]))
        .collect();
    if actual == needed {
        Ok(())
    } else {
        Err(ValidationError::InvalidEdgePieces)
    }
}

fn check_corner_pieces(state: &CubeState) -> Result<(), ValidationError> {
    let needed: BTreeSet<[Color; 3]> = CORNER_FACE_TRIPLES
        .iter()
        .map(|&[a, b, c]| sorted_triple([state.center(a), state.center(b), state.center(c)]))
        .collect();
    let actual: BTreeSet<[Color; 3]> = CORNER_SLOTS
        .iter()
        .map(|&[a, b, c]| sorted_triple([state[a], state[b], state[c]]))
        .collect();
    if actual == needed {
        Ok(())
    } else {
        Err(ValidationError::InvalidCornerPieces)
    }
}
