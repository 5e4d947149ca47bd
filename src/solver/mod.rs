pub mod constants;
mod cache;
mod config;
mod core;
mod errors;
mod search;

pub use cache::SolutionCache;
pub use config::SolverConfig;
pub use self::core::{AnswerVerdict, Solver24};
pub use errors::SolverError;
pub use search::{Operand, search};
