//! Turning the text of one side of an equation into a number.
//!
//! This happens in three stages: [`tokenize()`] the text, reorder the tokens
//! with [`to_postfix()`], then [`evaluate()`] the postfix sequence.

mod expr;
mod ops;
mod parse;
mod postfix;

pub use expr::BinaryOperation;
pub use ops::{
    evaluate, evaluate_expression, evaluate_with, EvaluationError,
    ExpressionError, DEFAULT_DIVISION_EPSILON,
};
pub use parse::{tokenize, ParseError, Token};
pub use postfix::{display_postfix, to_postfix};

pub(crate) use ops::evaluate_expression_with;
