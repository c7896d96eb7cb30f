//! Core data model for a 3x3 cube: facelet positions, colored states, the
//! move permutation engine, and the structural state validator.
//!
//! Everything here is pure computation over value types; the solving
//! strategies live in separate crates on top of this one.

pub mod facelet;
pub mod moves;
pub mod state;
pub mod validator;

pub use facelet::{CORNER_SLOTS, EDGE_SLOTS, Face, Facelet};
pub use moves::{Move, ParseMoveError, parse_sequence, replay};
pub use state::{Color, CubeState};
pub use validator::{ValidationError, validate};
