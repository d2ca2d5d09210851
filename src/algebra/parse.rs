use crate::algebra::BinaryOperation;
use smol_str::SmolStr;
use std::fmt::{self, Display, Formatter};

/// Break some text into [`Token`]s.
///
/// Whitespace is stripped before scanning, so a digit run interrupted by
/// whitespace (`"1 2"`) still reads as one numeral. Anything outside the
/// supported alphabet (digits, `+ - * /` and parentheses) fails the whole
/// tokenization.
pub fn tokenize(s: &str) -> Result<Vec<Token>, ParseError> {
    Tokens::new(s).collect()
}

/// Possible errors that may occur while parsing.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ParseError {
    #[error("illegal character {character:?} at index {index}")]
    IllegalCharacter { character: char, index: usize },
    #[error("unbalanced parentheses")]
    UnbalancedParentheses,
}

/// An atomic piece of an expression.
#[derive(Debug, Clone, PartialEq)]
pub enum Token {
    /// An unsigned integer literal, kept as the digits that were written.
    Number(SmolStr),
    Operator(BinaryOperation),
    OpenParen,
    CloseParen,
}

impl Token {
    pub fn number<S: AsRef<str>>(digits: S) -> Self {
        Token::Number(SmolStr::new(digits))
    }

    pub fn is_paren(&self) -> bool {
        match self {
            Token::OpenParen | Token::CloseParen => true,
            _ => false,
        }
    }
}

impl Display for Token {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Token::Number(digits) => write!(f, "{}", digits),
            Token::Operator(op) => write!(f, "{}", op),
            Token::OpenParen => write!(f, "("),
            Token::CloseParen => write!(f, ")"),
        }
    }
}

/// Render a sequence of tokens separated by spaces, mostly for logging.
pub(crate) fn display_tokens(tokens: &[Token]) -> String {
    tokens
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(" ")
}

#[derive(Debug, Clone, PartialEq)]
struct Tokens<'a> {
    src: &'a str,
    cursor: usize,
}

impl<'a> Tokens<'a> {
    fn new(src: &'a str) -> Self { Tokens { src, cursor: 0 } }

    fn rest(&self) -> &'a str { &self.src[self.cursor..] }

    fn peek(&self) -> Option<char> { self.rest().chars().next() }

    fn advance(&mut self) -> Option<char> {
        let c = self.peek()?;
        self.cursor += c.len_utf8();
        Some(c)
    }

    fn chomp(&mut self, token: Token) -> Option<Result<Token, ParseError>> {
        self.advance()?;
        Some(Ok(token))
    }

    /// Is the next non-whitespace character a digit?
    fn digits_continue(&self) -> bool {
        self.rest()
            .trim_start()
            .chars()
            .next()
            .map(|c| c.is_ascii_digit())
            .unwrap_or(false)
    }

    fn chomp_integer(&mut self) -> Token {
        let mut digits = String::new();

        while let Some(c) = self.peek() {
            if c.is_ascii_digit() {
                digits.push(c);
            } else if !(c.is_whitespace() && self.digits_continue()) {
                break;
            }

            self.advance();
        }

        Token::number(digits)
    }
}

impl<'a> Iterator for Tokens<'a> {
    type Item = Result<Token, ParseError>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            return match self.peek()? {
                space if space.is_whitespace() => {
                    self.advance();
                    continue;
                },
                '(' => self.chomp(Token::OpenParen),
                ')' => self.chomp(Token::CloseParen),
                '+' => self.chomp(Token::Operator(BinaryOperation::Plus)),
                '-' => self.chomp(Token::Operator(BinaryOperation::Minus)),
                '*' => self.chomp(Token::Operator(BinaryOperation::Times)),
                '/' => self.chomp(Token::Operator(BinaryOperation::Divide)),
                '0'..='9' => Some(Ok(self.chomp_integer())),
                other => {
                    let index = self.cursor;
                    // stop iterating so collect() reports this error
                    self.cursor = self.src.len();
                    Some(Err(ParseError::IllegalCharacter {
                        character: other,
                        index,
                    }))
                },
            };
        }
    }
}
