//! Random puzzle generation on top of the solver

mod errors;
mod generator;

pub use errors::PuzzleError;
pub use generator::{
    DEFAULT_MAX, DEFAULT_MAX_ATTEMPTS, DEFAULT_MIN, FALLBACK_PUZZLE, Puzzle, PuzzleGenerator,
};

#[cfg(test)]
mod tests;
