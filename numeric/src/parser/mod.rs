//! Finite-state scanner turning raw text into tokens

pub mod charset;

use crate::error::CompilerError;
use crate::operators::{OperatorTable, JOIN};
use crate::token::{Token, TokenKind};
use crate::units::UnitTable;
use crate::NumericResult;
use tracing::{debug, trace};

/// Read position within one input. Owned by a single `scan` call.
#[derive(Debug, Clone, Copy)]
struct Cursor<'s> {
    input: &'s str,
    offset: usize,
}

impl<'s> Cursor<'s> {
    fn new(input: &'s str) -> Self {
        Self { input, offset: 0 }
    }

    fn peek(&self) -> Option<char> {
        self.input[self.offset..].chars().next()
    }

    fn advance(&mut self) {
        if let Some(c) = self.peek() {
            self.offset += c.len_utf8();
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
enum State {
    NewToken,
    NumericLiteral,
    PrefixedNumericLiteral,
    HexNumericLiteral,
    BinNumericLiteral,
    UnitOrSymbol,
    ParenOpen,
    ParenClose,
    Operator,
    CompleteToken(Token),
}

/// Text of the token being accumulated
#[derive(Debug, Default)]
struct Lexeme {
    start: usize,
    /// Matched substring, as written
    text: String,
    /// Numeric body with the decimal separator normalised to `.`
    /// (or the digits after a `0x`/`0b` prefix)
    digits: String,
    decimal_point_found: bool,
}

impl Lexeme {
    fn reset(&mut self, start: usize) {
        self.start = start;
        self.text.clear();
        self.digits.clear();
        self.decimal_point_found = false;
    }

    fn push(&mut self, c: char) {
        self.text.push(c);
        self.digits.push(c);
    }

    fn token(&self, kind: TokenKind) -> Token {
        Token::new(self.start, kind, self.text.clone())
    }
}

pub struct Scanner<'a> {
    units: &'a UnitTable,
    operators: &'a OperatorTable,
    decimal_point: char,
}

impl<'a> Scanner<'a> {
    pub fn new(units: &'a UnitTable, operators: &'a OperatorTable, decimal_point: char) -> Self {
        Self {
            units,
            operators,
            decimal_point,
        }
    }

    fn is_decimal_point(&self, c: char) -> bool {
        charset::is_decimal_delimiter(c) || c == self.decimal_point
    }

    /// Scan `input` into tokens.
    ///
    /// A numeric literal directly after a unit is joined to it with the
    /// implied-addition operator, so `3ft 6in` scans as `3 ft j+ 6 in` and
    /// stays one length under `*` and `/`.
    pub fn scan(&self, input: &str) -> NumericResult<Vec<Token>> {
        if input.is_empty() {
            return Err(CompilerError::parser("No input."));
        }

        let mut cursor = Cursor::new(input);
        let mut tokens: Vec<Token> = Vec::new();
        let mut lexeme = Lexeme::default();
        let mut paren_balance: usize = 0;
        let mut state = State::NewToken;

        loop {
            let next = cursor.peek();
            trace!(?state, ?next, offset = cursor.offset, "scanner step");

            state = match state {
                State::NewToken => {
                    lexeme.reset(cursor.offset);

                    match next {
                        None => {
                            if paren_balance != 0 {
                                return Err(CompilerError::parser(
                                    "Parenthesis '(' & ')' not balanced",
                                )
                                .at(cursor.offset));
                            }
                            debug!(
                                tokens = %tokens.iter().map(|t| t.text.as_str()).collect::<Vec<_>>().join(" "),
                                "scanned input"
                            );
                            return Ok(tokens);
                        }
                        Some(c) if charset::is_whitespace(c) => {
                            cursor.advance();
                            State::NewToken
                        }
                        Some(c) if charset::is_first_numeric(c) => {
                            lexeme.push(c);
                            cursor.advance();
                            if c == '0' {
                                State::PrefixedNumericLiteral
                            } else {
                                State::NumericLiteral
                            }
                        }
                        // operators are consumed by their own state
                        Some(c) if charset::is_operator(c) => State::Operator,
                        Some('(') => State::ParenOpen,
                        Some(')') => State::ParenClose,
                        Some(c) if charset::is_unit_or_symbol(c) => {
                            lexeme.text.push(c);
                            cursor.advance();
                            State::UnitOrSymbol
                        }
                        Some(c) => {
                            return Err(CompilerError::parser(format!(
                                "Unknown character '{}'",
                                c
                            ))
                            .at(cursor.offset));
                        }
                    }
                }

                State::NumericLiteral => match next {
                    Some(c) if charset::is_first_numeric(c) => {
                        lexeme.push(c);
                        cursor.advance();
                        State::NumericLiteral
                    }
                    Some(c) if self.is_decimal_point(c) => {
                        if lexeme.decimal_point_found {
                            return Err(CompilerError::parser("Bad numeric construction")
                                .at(cursor.offset));
                        }
                        lexeme.decimal_point_found = true;
                        lexeme.text.push(c);
                        lexeme.digits.push('.');
                        cursor.advance();
                        State::NumericLiteral
                    }
                    _ => {
                        let value = lexeme.digits.parse::<f64>().map_err(|_| {
                            CompilerError::parser("Bad numeric construction").at(lexeme.start)
                        })?;
                        State::CompleteToken(lexeme.token(TokenKind::Number(value)))
                    }
                },

                State::PrefixedNumericLiteral => match next {
                    Some(c @ ('x' | 'X')) => {
                        lexeme.text.push(c);
                        lexeme.digits.clear();
                        cursor.advance();
                        State::HexNumericLiteral
                    }
                    Some(c @ ('b' | 'B')) => {
                        lexeme.text.push(c);
                        lexeme.digits.clear();
                        cursor.advance();
                        State::BinNumericLiteral
                    }
                    // plain decimal after all
                    _ => State::NumericLiteral,
                },

                State::HexNumericLiteral => match next {
                    Some(c) if charset::is_hex_digit(c) => {
                        lexeme.push(c);
                        cursor.advance();
                        State::HexNumericLiteral
                    }
                    _ => State::CompleteToken(self.prefixed_literal(&lexeme, 16)?),
                },

                State::BinNumericLiteral => match next {
                    Some(c) if charset::is_binary_digit(c) => {
                        lexeme.push(c);
                        cursor.advance();
                        State::BinNumericLiteral
                    }
                    _ => State::CompleteToken(self.prefixed_literal(&lexeme, 2)?),
                },

                // Greedy: keep growing while a longer operator could still match
                State::Operator => match next {
                    Some(c) if charset::is_operator(c) => {
                        let mut candidate = lexeme.text.clone();
                        candidate.push(c);

                        if self.operators.could_extend(&candidate) {
                            lexeme.text = candidate;
                            cursor.advance();
                            State::Operator
                        } else {
                            State::CompleteToken(self.operator_token(&lexeme)?)
                        }
                    }
                    _ => State::CompleteToken(self.operator_token(&lexeme)?),
                },

                State::UnitOrSymbol => match next {
                    Some(c) if charset::is_unit_or_symbol(c) => {
                        lexeme.text.push(c);
                        cursor.advance();
                        State::UnitOrSymbol
                    }
                    _ => {
                        let kind = match self.units.lookup(&lexeme.text) {
                            Some(unit) => TokenKind::Unit(unit),
                            None => TokenKind::Symbol,
                        };
                        State::CompleteToken(lexeme.token(kind))
                    }
                },

                State::ParenOpen => {
                    lexeme.text.push('(');
                    cursor.advance();
                    paren_balance += 1;
                    State::CompleteToken(lexeme.token(TokenKind::ParenOpen))
                }

                State::ParenClose => {
                    if paren_balance == 0 {
                        return Err(
                            CompilerError::parser("Parenthesis '(' & ')' not balanced")
                                .at(cursor.offset),
                        );
                    }
                    lexeme.text.push(')');
                    cursor.advance();
                    paren_balance -= 1;
                    State::CompleteToken(lexeme.token(TokenKind::ParenClose))
                }

                State::CompleteToken(token) => {
                    let follows_unit =
                        matches!(tokens.last(), Some(Token { kind: TokenKind::Unit(_), .. }));
                    if follows_unit && matches!(token.kind, TokenKind::Number(_)) {
                        tokens.push(Token::operator(token.position, JOIN));
                    }
                    tokens.push(token);
                    State::NewToken
                }
            };
        }
    }

    fn prefixed_literal(&self, lexeme: &Lexeme, radix: u32) -> NumericResult<Token> {
        if lexeme.digits.is_empty() {
            return Err(
                CompilerError::parser("Invalid prefixed numeric literal").at(lexeme.start)
            );
        }
        let value = u64::from_str_radix(&lexeme.digits, radix).map_err(|_| {
            CompilerError::parser("Numeric literal out of range").at(lexeme.start)
        })?;
        Ok(lexeme.token(TokenKind::Number(value as f64)))
    }

    fn operator_token(&self, lexeme: &Lexeme) -> NumericResult<Token> {
        if self.operators.contains(&lexeme.text) {
            Ok(lexeme.token(TokenKind::Operator))
        } else {
            Err(
                CompilerError::parser(format!("Unknown operator: {}", lexeme.text))
                    .at(lexeme.start),
            )
        }
    }
}
