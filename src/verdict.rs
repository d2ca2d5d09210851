//! The outcome of checking an equation.

use crate::algebra::{EvaluationError, ExpressionError, ParseError};
use std::fmt::{self, Display, Formatter};

/// Why an equation was rejected.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum Rejection {
    #[error("the equation needs an '='")]
    MissingEquality,
    #[error("the equation may only contain one '=', found {sides} sides")]
    ChainedEquality { sides: usize },
    #[error("one side of the equation is empty")]
    EmptySide,
    #[error("illegal character {character:?}")]
    IllegalCharacter { character: char },
    #[error("operators must be separated by a number")]
    MalformedOperatorRun,
    #[error("unsupported operator \"{operator}\"")]
    UnsupportedOperator { operator: String },
    #[error("unbalanced parentheses")]
    UnbalancedParentheses,
    #[error("division by zero")]
    DivisionByZero,
    #[error("incomplete expression")]
    IncompleteExpression,
    #[error("{} ≠ {}", display_value(.expected), display_value(.found))]
    ValueMismatch { expected: f64, found: f64 },
}

impl From<ParseError> for Rejection {
    fn from(e: ParseError) -> Self {
        match e {
            ParseError::IllegalCharacter { character, .. } => {
                Rejection::IllegalCharacter { character }
            },
            ParseError::UnbalancedParentheses => {
                Rejection::UnbalancedParentheses
            },
        }
    }
}

impl From<EvaluationError> for Rejection {
    fn from(e: EvaluationError) -> Self {
        match e {
            EvaluationError::DivisionByZero => Rejection::DivisionByZero,
            EvaluationError::IncompleteExpression => {
                Rejection::IncompleteExpression
            },
        }
    }
}

impl From<ExpressionError> for Rejection {
    fn from(e: ExpressionError) -> Self {
        match e {
            ExpressionError::Parse(inner) => inner.into(),
            ExpressionError::Evaluation(inner) => inner.into(),
        }
    }
}

/// The verdict for a candidate equation.
#[derive(Debug, Clone, PartialEq)]
pub enum Verdict {
    Valid {
        /// The equation, after glyph substitution.
        equation: String,
        /// The value of each side, in order.
        values: Vec<f64>,
    },
    Invalid(Rejection),
}

impl Verdict {
    pub fn is_valid(&self) -> bool {
        match self {
            Verdict::Valid { .. } => true,
            Verdict::Invalid(_) => false,
        }
    }

    pub fn rejection(&self) -> Option<&Rejection> {
        match self {
            Verdict::Valid { .. } => None,
            Verdict::Invalid(rejection) => Some(rejection),
        }
    }

    /// The value of the left-hand side, if the equation was valid.
    pub fn left(&self) -> Option<f64> {
        match self {
            Verdict::Valid { values, .. } => values.first().copied(),
            Verdict::Invalid(_) => None,
        }
    }

    /// The value of the right-most side, if the equation was valid.
    pub fn right(&self) -> Option<f64> {
        match self {
            Verdict::Valid { values, .. } => values.last().copied(),
            Verdict::Invalid(_) => None,
        }
    }

    /// A message suitable for showing to the player.
    pub fn message(&self) -> String { self.to_string() }
}

impl From<Rejection> for Verdict {
    fn from(rejection: Rejection) -> Self { Verdict::Invalid(rejection) }
}

impl Display for Verdict {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Verdict::Valid { equation, values } => {
                let value = values.first().copied().unwrap_or_default();
                write!(f, "valid: {} → {}", equation, format_value(value))
            },
            Verdict::Invalid(e @ Rejection::ValueMismatch { .. }) => {
                write!(f, "unequal: {}", e)
            },
            Verdict::Invalid(e) => write!(f, "invalid: {}", e),
        }
    }
}

const SIGNIFICANT_DIGITS: usize = 6;

/// Format a value with up to 6 significant digits, dropping trailing zeroes.
///
/// Large and tiny values use Rust's exponent form (`1.23457e6`), which has no
/// `+` or zero padding in the exponent.
pub fn format_value(value: f64) -> String {
    if !value.is_finite() {
        return value.to_string();
    }
    if value == 0.0 {
        return String::from("0");
    }

    // round first so values like 999999.6 land in the next decade
    let scientific = format!("{:.*e}", SIGNIFICANT_DIGITS - 1, value);
    let (mantissa, exponent) = match scientific.find('e') {
        Some(index) => scientific.split_at(index),
        None => return scientific,
    };
    let magnitude: i32 = match exponent[1..].parse() {
        Ok(magnitude) => magnitude,
        Err(_) => return scientific,
    };

    if magnitude < -4 || magnitude >= SIGNIFICANT_DIGITS as i32 {
        return format!("{}{}", trim_fraction(mantissa), exponent);
    }

    let decimals = (SIGNIFICANT_DIGITS as i32 - 1 - magnitude).max(0) as usize;
    trim_fraction(&format!("{:.*}", decimals, value)).to_string()
}

fn display_value(value: &f64) -> String { format_value(*value) }

fn trim_fraction(number: &str) -> &str {
    if number.contains('.') {
        number.trim_end_matches('0').trim_end_matches('.')
    } else {
        number
    }
}
