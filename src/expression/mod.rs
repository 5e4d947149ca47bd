//! Expression module split into submodules for clarity

mod ast;
mod display;
mod errors;
mod eval;
mod operator;
mod parse;

pub use ast::Expression;
pub use errors::ExpressionError;
pub use operator::Operator;
