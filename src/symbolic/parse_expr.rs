//! a module turns a formula string into a symbolic expression
//!
//! Grammar (low to high precedence):
//! ```text
//! expr         := term (('+' | '-') term)*
//! term         := signedFactor ('*' signedFactor)*
//! signedFactor := '-'? factor
//! factor       := atom ('^' integer)?
//! atom         := integer | variable | '(' expr ')'
//! ```
//! Variables are the single letters x, y, z, s, t; numbers are unsigned
//! integer literals; unary minus binds tighter than `*` but looser than `^`,
//! so `-x^2` parses as `-(x^2)`. Adjacent atoms are not multiplied
//! implicitly: an explicit `*` is required.
//!
//! Malformed input fails with a typed [`ParseError`] carrying the kind of
//! fault and its character position. The host keeps the slot's previous valid
//! expression on failure; nothing retries automatically.

use crate::symbolic::symbolic_engine::{Expr, Var};
use thiserror::Error;

/// Parse failure taxonomy. Positions are character offsets into the input.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("unexpected character '{ch}' at position {pos}")]
    UnexpectedChar { ch: char, pos: usize },
    #[error("unknown variable '{ch}' at position {pos}, expected one of x, y, z, s, t")]
    UnknownVariable { ch: char, pos: usize },
    #[error("unmatched parenthesis at position {pos}")]
    UnmatchedParen { pos: usize },
    #[error("missing operand at position {pos}")]
    MissingOperand { pos: usize },
    #[error("exponent at position {pos} must be a non-negative integer")]
    InvalidExponent { pos: usize },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Token {
    Int(i64),
    Letter(Var),
    Plus,
    Minus,
    Star,
    Caret,
    LParen,
    RParen,
}

/// Splits the input into tokens, each tagged with the character position it
/// starts at. Whitespace separates tokens and is otherwise ignored.
fn tokenize(input: &str) -> Result<Vec<(Token, usize)>, ParseError> {
    let mut tokens = Vec::new();
    let chars: Vec<char> = input.chars().collect();
    let mut pos = 0;
    while pos < chars.len() {
        let c = chars[pos];
        match c {
            _ if c.is_whitespace() => pos += 1,
            '+' => {
                tokens.push((Token::Plus, pos));
                pos += 1;
            }
            '-' => {
                tokens.push((Token::Minus, pos));
                pos += 1;
            }
            '*' => {
                tokens.push((Token::Star, pos));
                pos += 1;
            }
            '^' => {
                tokens.push((Token::Caret, pos));
                pos += 1;
            }
            '(' => {
                tokens.push((Token::LParen, pos));
                pos += 1;
            }
            ')' => {
                tokens.push((Token::RParen, pos));
                pos += 1;
            }
            _ if c.is_ascii_digit() => {
                let start = pos;
                let mut value: i64 = 0;
                while pos < chars.len() && chars[pos].is_ascii_digit() {
                    value = value
                        .saturating_mul(10)
                        .saturating_add((chars[pos] as u8 - b'0') as i64);
                    pos += 1;
                }
                tokens.push((Token::Int(value), start));
            }
            _ if c.is_alphabetic() => match Var::from_letter(c) {
                Some(var) => {
                    tokens.push((Token::Letter(var), pos));
                    pos += 1;
                }
                None => return Err(ParseError::UnknownVariable { ch: c, pos }),
            },
            _ => return Err(ParseError::UnexpectedChar { ch: c, pos }),
        }
    }
    Ok(tokens)
}

struct Parser {
    tokens: Vec<(Token, usize)>,
    cursor: usize,
    input_len: usize,
}

impl Parser {
    fn peek(&self) -> Option<(Token, usize)> {
        self.tokens.get(self.cursor).copied()
    }

    fn advance(&mut self) -> Option<(Token, usize)> {
        let tok = self.peek();
        if tok.is_some() {
            self.cursor += 1;
        }
        tok
    }

    /// Position just past the last consumed token, for errors at end of input.
    fn end_pos(&self) -> usize {
        self.tokens
            .get(self.cursor)
            .map(|(_, p)| *p)
            .unwrap_or(self.input_len)
    }

    fn parse_expr(&mut self) -> Result<Expr, ParseError> {
        let mut terms = vec![self.parse_term()?];
        while let Some((tok, _)) = self.peek() {
            match tok {
                Token::Plus => {
                    self.advance();
                    terms.push(self.parse_term()?);
                }
                Token::Minus => {
                    self.advance();
                    terms.push(-self.parse_term()?);
                }
                _ => break,
            }
        }
        if terms.len() == 1 {
            Ok(terms.pop().expect("nonempty"))
        } else {
            Ok(Expr::Sum(terms))
        }
    }

    fn parse_term(&mut self) -> Result<Expr, ParseError> {
        let mut factors = vec![self.parse_signed_factor()?];
        while let Some((Token::Star, _)) = self.peek() {
            self.advance();
            factors.push(self.parse_signed_factor()?);
        }
        if factors.len() == 1 {
            Ok(factors.pop().expect("nonempty"))
        } else {
            Ok(Expr::Prod(factors))
        }
    }

    fn parse_signed_factor(&mut self) -> Result<Expr, ParseError> {
        if let Some((Token::Minus, _)) = self.peek() {
            self.advance();
            Ok(-self.parse_factor()?)
        } else {
            self.parse_factor()
        }
    }

    fn parse_factor(&mut self) -> Result<Expr, ParseError> {
        let atom = self.parse_atom()?;
        if let Some((Token::Caret, caret_pos)) = self.peek() {
            self.advance();
            match self.advance() {
                Some((Token::Int(n), pos)) => {
                    let exp =
                        u32::try_from(n).map_err(|_| ParseError::InvalidExponent { pos })?;
                    Ok(Expr::Pow(atom.boxed(), exp))
                }
                Some((_, pos)) => Err(ParseError::InvalidExponent { pos }),
                None => Err(ParseError::InvalidExponent { pos: caret_pos + 1 }),
            }
        } else {
            Ok(atom)
        }
    }

    fn parse_atom(&mut self) -> Result<Expr, ParseError> {
        match self.advance() {
            Some((Token::Int(value), _)) => Ok(Expr::Const(value)),
            Some((Token::Letter(var), _)) => Ok(Expr::Var(var)),
            Some((Token::LParen, open_pos)) => {
                let inner = self.parse_expr()?;
                match self.advance() {
                    Some((Token::RParen, _)) => Ok(inner),
                    _ => Err(ParseError::UnmatchedParen { pos: open_pos }),
                }
            }
            Some((_, pos)) => Err(ParseError::MissingOperand { pos }),
            None => Err(ParseError::MissingOperand { pos: self.end_pos() }),
        }
    }
}

/// Parses a formula string into an expression tree. The tree is unreduced;
/// run `simplify()` and `homogenize()` on it before storing it in a slot.
pub fn parse_expression(input: &str) -> Result<Expr, ParseError> {
    let tokens = tokenize(input)?;
    let mut parser = Parser {
        tokens,
        cursor: 0,
        input_len: input.chars().count(),
    };
    let expr = parser.parse_expr()?;
    match parser.peek() {
        None => Ok(expr),
        Some((Token::RParen, pos)) => Err(ParseError::UnmatchedParen { pos }),
        Some((_, pos)) => Err(ParseError::UnexpectedChar {
            ch: input.chars().nth(pos).unwrap_or(' '),
            pos,
        }),
    }
}

impl Expr {
    /// Associated-function form of [`parse_expression`].
    pub fn parse_expression(input: &str) -> Result<Expr, ParseError> {
        parse_expression(input)
    }
}
