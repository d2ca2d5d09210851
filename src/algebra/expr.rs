use std::fmt::{self, Display, Formatter};

/// An operation that can be applied to two arguments.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum BinaryOperation {
    Plus,
    Minus,
    Times,
    Divide,
}

impl BinaryOperation {
    /// How tightly this operator binds. Every operator is left-associative.
    pub fn precedence(self) -> u8 {
        match self {
            BinaryOperation::Plus | BinaryOperation::Minus => 1,
            BinaryOperation::Times | BinaryOperation::Divide => 2,
        }
    }

    /// Apply the operation to `left` and `right` without any checks.
    pub fn apply(self, left: f64, right: f64) -> f64 {
        match self {
            BinaryOperation::Plus => left + right,
            BinaryOperation::Minus => left - right,
            BinaryOperation::Times => left * right,
            BinaryOperation::Divide => left / right,
        }
    }

    pub fn symbol(self) -> char {
        match self {
            BinaryOperation::Plus => '+',
            BinaryOperation::Minus => '-',
            BinaryOperation::Times => '*',
            BinaryOperation::Divide => '/',
        }
    }

    /// Is this one of the characters an operator is written with?
    pub fn is_operator_char(c: char) -> bool {
        match c {
            '+' | '-' | '*' | '/' => true,
            _ => false,
        }
    }
}

impl Display for BinaryOperation {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}
