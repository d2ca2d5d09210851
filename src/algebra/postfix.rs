//! Reordering infix tokens into postfix form.

use crate::algebra::{ParseError, Token};

/// Convert a sequence of infix [`Token`]s into postfix (reverse-polish) order
/// using the shunting-yard algorithm.
///
/// Operators are left-associative, so an incoming operator first flushes any
/// operator on the stack with the same or higher precedence.
///
/// ```rust
/// use tile_equations::algebra::{to_postfix, tokenize, display_postfix};
///
/// let tokens = tokenize("2 + 3*4").unwrap();
/// let postfix = to_postfix(&tokens).unwrap();
/// assert_eq!(display_postfix(&postfix), "2 3 4 * +");
/// ```
pub fn to_postfix(tokens: &[Token]) -> Result<Vec<Token>, ParseError> {
    let mut output = Vec::with_capacity(tokens.len());
    let mut stack: Vec<Token> = Vec::new();

    for token in tokens {
        match token {
            Token::Number(_) => output.push(token.clone()),
            Token::Operator(incoming) => {
                while let Some(Token::Operator(top)) = stack.last() {
                    if top.precedence() < incoming.precedence() {
                        break;
                    }

                    output.extend(stack.pop());
                }

                stack.push(token.clone());
            },
            Token::OpenParen => stack.push(Token::OpenParen),
            Token::CloseParen => loop {
                match stack.pop() {
                    Some(Token::OpenParen) => break,
                    Some(other) => output.push(other),
                    None => return Err(ParseError::UnbalancedParentheses),
                }
            },
        }
    }

    while let Some(token) = stack.pop() {
        if token.is_paren() {
            return Err(ParseError::UnbalancedParentheses);
        }

        output.push(token);
    }

    Ok(output)
}

/// Render a postfix sequence as space-separated tokens.
pub fn display_postfix(postfix: &[Token]) -> String {
    crate::algebra::parse::display_tokens(postfix)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::algebra::tokenize;

    macro_rules! postfix_test {
        ($name:ident, $src:expr, $should_be:expr) => {
            #[test]
            fn $name() {
                let tokens = tokenize($src).unwrap();

                let got = to_postfix(&tokens).unwrap();

                assert_eq!(display_postfix(&got), $should_be);
            }
        };
    }

    postfix_test!(single_number, "42", "42");
    postfix_test!(simple_addition, "1+2", "1 2 +");
    postfix_test!(precedence, "2+3*4", "2 3 4 * +");
    postfix_test!(multiplication_first, "2*3+4", "2 3 * 4 +");
    postfix_test!(left_associative_minus, "8-3-2", "8 3 - 2 -");
    postfix_test!(left_associative_divide, "8/4/2", "8 4 / 2 /");
    postfix_test!(mixed_same_precedence, "8-3+2", "8 3 - 2 +");
    postfix_test!(parens_override_precedence, "(2+3)*4", "2 3 + 4 *");
    postfix_test!(nested_parens, "((1+2)*(3-4))/5", "1 2 + 3 4 - * 5 /");
    postfix_test!(redundant_parens, "((7))", "7");
    postfix_test!(bimdas, "1*2+3*4/(5-2)*1-3", "1 2 * 3 4 * 5 2 - / 1 * + 3 -");

    #[test]
    fn unclosed_open_paren() {
        let tokens = tokenize("(1+2").unwrap();

        let got = to_postfix(&tokens).unwrap_err();

        assert_eq!(got, ParseError::UnbalancedParentheses);
    }

    #[test]
    fn close_paren_without_open() {
        let inputs = vec!["1+2)", ")(", "(1))"];

        for src in inputs {
            let tokens = tokenize(src).unwrap();

            let got = to_postfix(&tokens).unwrap_err();

            assert_eq!(got, ParseError::UnbalancedParentheses, "{}", src);
        }
    }

    #[test]
    fn malformed_but_balanced_input_still_converts() {
        // rejecting these is the evaluator's job
        let tokens = tokenize("1+").unwrap();

        let got = to_postfix(&tokens).unwrap();

        assert_eq!(display_postfix(&got), "1 +");
    }

    #[test]
    fn empty_input_gives_empty_output() {
        assert_eq!(to_postfix(&[]).unwrap(), Vec::new());
    }
}
