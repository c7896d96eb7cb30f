//! The cube state: a total mapping from facelet position to color label.

use std::collections::HashMap;
use std::fmt;
use std::ops::Index;

use crate::facelet::{Face, Facelet};
use crate::validator::ValidationError;

/// A single-character color label. The six center colors of a given cube
/// define its color alphabet; the engine never assumes a particular scheme.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
pub struct Color(pub char);

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A complete cube state, one color per facelet.
///
/// States are value types: every move application and every solver step
/// produces a new state instead of mutating a shared one.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct CubeState([Color; Facelet::COUNT]);

impl CubeState {
    pub fn new(colors: [Color; Facelet::COUNT]) -> CubeState {
        CubeState(colors)
    }

    /// The canonical solved state for a color scheme, face blocks in
    /// [`Face::ALL`] order.
    pub fn solved(scheme: [Color; 6]) -> CubeState {
        let mut colors = [scheme[0]; Facelet::COUNT];
        for facelet in Facelet::ALL {
            colors[facelet.index()] = scheme[facelet.face() as usize];
        }
        CubeState(colors)
    }

    /// Build a state from the wire shape of the outer API: a facelet-label
    /// to color-character mapping. All 54 entries must be present; unknown
    /// keys are ignored.
    pub fn from_map(map: &HashMap<String, char>) -> Result<CubeState, ValidationError> {
        let mut colors = [Color(' '); Facelet::COUNT];
        for facelet in Facelet::ALL {
            match map.get(facelet.label()) {
                Some(&c) => colors[facelet.index()] = Color(c),
                None => return Err(ValidationError::MissingFacelet(facelet)),
            }
        }
        Ok(CubeState(colors))
    }

    pub fn center(&self, face: Face) -> Color {
        self[face.center()]
    }

    /// Whether every facelet of every face carries that face's center color.
    pub fn is_solved(&self) -> bool {
        Face::ALL
            .iter()
            .all(|&face| (1..=9).all(|slot| self[face.slot(slot)] == self.center(face)))
    }

    pub(crate) fn colors(&self) -> &[Color; Facelet::COUNT] {
        &self.0
    }
}

impl Index<Facelet> for CubeState {
    type Output = Color;

    fn index(&self, facelet: Facelet) -> &Color {
        &self.0[facelet.index()]
    }
}
