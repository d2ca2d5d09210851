//! Evaluating postfix sequences.

use crate::algebra::{to_postfix, tokenize, BinaryOperation, ParseError, Token};

/// Divisors with a magnitude below this are treated as zero.
pub const DEFAULT_DIVISION_EPSILON: f64 = 1e-9;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum EvaluationError {
    #[error("attempted to divide by zero")]
    DivisionByZero,
    /// An operator was missing an operand, or operands were left over.
    #[error("incomplete expression")]
    IncompleteExpression,
}

/// Evaluate a postfix sequence, as produced by [`to_postfix()`].
pub fn evaluate(postfix: &[Token]) -> Result<f64, EvaluationError> {
    evaluate_with(postfix, DEFAULT_DIVISION_EPSILON)
}

/// Evaluate a postfix sequence, failing any division whose divisor is within
/// `division_epsilon` of zero.
pub fn evaluate_with(
    postfix: &[Token],
    division_epsilon: f64,
) -> Result<f64, EvaluationError> {
    let mut values: Vec<f64> = Vec::new();

    for token in postfix {
        match token {
            Token::Number(digits) => {
                let value = digits
                    .parse()
                    .map_err(|_| EvaluationError::IncompleteExpression)?;
                values.push(value);
            },
            Token::Operator(op) => {
                let right =
                    values.pop().ok_or(EvaluationError::IncompleteExpression)?;
                let left =
                    values.pop().ok_or(EvaluationError::IncompleteExpression)?;

                if *op == BinaryOperation::Divide
                    && right.abs() < division_epsilon
                {
                    return Err(EvaluationError::DivisionByZero);
                }

                values.push(op.apply(left, right));
            },
            // the shunting-yard pass never emits parentheses
            Token::OpenParen | Token::CloseParen => {
                return Err(EvaluationError::IncompleteExpression)
            },
        }
    }

    match values.as_slice() {
        [value] => Ok(*value),
        _ => Err(EvaluationError::IncompleteExpression),
    }
}

/// Either stage of turning text into a number can fail.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ExpressionError {
    #[error(transparent)]
    Parse(#[from] ParseError),
    #[error(transparent)]
    Evaluation(#[from] EvaluationError),
}

/// Tokenize, reorder, and evaluate a single expression in one go.
///
/// ```rust
/// use tile_equations::algebra::evaluate_expression;
///
/// assert_eq!(evaluate_expression("8 - 3 - 2").unwrap(), 3.0);
/// ```
pub fn evaluate_expression(src: &str) -> Result<f64, ExpressionError> {
    evaluate_expression_with(src, DEFAULT_DIVISION_EPSILON)
}

pub(crate) fn evaluate_expression_with(
    src: &str,
    division_epsilon: f64,
) -> Result<f64, ExpressionError> {
    let tokens = tokenize(src)?;
    let postfix = to_postfix(&tokens)?;
    log::trace!(
        "\"{}\" in postfix is [{}]",
        src,
        crate::algebra::display_postfix(&postfix)
    );

    Ok(evaluate_with(&postfix, division_epsilon)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn evaluate_simple_arithmetic() {
        let inputs = vec![
            ("1", 1.0),
            ("12", 12.0),
            ("1 + 2", 3.0),
            ("2 + 3*4", 14.0),
            ("(2 + 3)*4", 20.0),
            ("8 - 3 - 2", 3.0),
            ("8 / 4 / 2", 1.0),
            ("6/2", 3.0),
            ("1/3", 1.0 / 3.0),
            ("10 - 2*3 + 4/2", 6.0),
            ("((1 + 2)*(3 - 4))/5", -0.6),
            ("007", 7.0),
        ];

        for (src, should_be) in inputs {
            let got = evaluate_expression(src).unwrap();

            assert_eq!(got, should_be, "{} -> {} != {}", src, got, should_be);
        }
    }

    #[test]
    fn division_by_zero_is_an_error() {
        let inputs = vec!["5/0", "5/(3-3)", "1/(2-2)*7", "0/0"];

        for src in inputs {
            let got = evaluate_expression(src).unwrap_err();

            assert_eq!(
                got,
                ExpressionError::Evaluation(EvaluationError::DivisionByZero),
                "{}",
                src
            );
        }
    }

    #[test]
    fn dividing_zero_is_fine() {
        assert_eq!(evaluate_expression("0/5").unwrap(), 0.0);
    }

    #[test]
    fn the_division_epsilon_is_configurable() {
        let postfix = vec![
            Token::number("1"),
            Token::number("4"),
            Token::Operator(BinaryOperation::Divide),
        ];

        assert_eq!(evaluate_with(&postfix, 1e-9).unwrap(), 0.25);
        assert_eq!(
            evaluate_with(&postfix, 10.0).unwrap_err(),
            EvaluationError::DivisionByZero
        );
    }

    #[test]
    fn incomplete_expressions() {
        let inputs =
            vec!["", "+", "1 +", "* 2", "1 (2)", "2(3)", "()", "1 + ()"];

        for src in inputs {
            let got = evaluate_expression(src).unwrap_err();

            assert_eq!(
                got,
                ExpressionError::Evaluation(
                    EvaluationError::IncompleteExpression
                ),
                "{}",
                src
            );
        }
    }

    #[test]
    fn parentheses_in_postfix_are_rejected() {
        let postfix = vec![Token::number("1"), Token::OpenParen];

        let got = evaluate(&postfix).unwrap_err();

        assert_eq!(got, EvaluationError::IncompleteExpression);
    }

    #[test]
    fn parse_errors_are_passed_through() {
        assert_eq!(
            evaluate_expression("(1").unwrap_err(),
            ExpressionError::Parse(ParseError::UnbalancedParentheses)
        );
        assert_eq!(
            evaluate_expression("1 ^ 2").unwrap_err(),
            ExpressionError::Parse(ParseError::IllegalCharacter {
                character: '^',
                index: 2
            })
        );
    }
}
