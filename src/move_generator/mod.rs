//! Pseudo-legal chess move generation.

pub mod generator;
pub mod targets;

pub use generator::{
    count_destinations, count_positions, generate_moves, generate_moves_from, ChessMoveList,
};
pub use targets::generate_targets;
