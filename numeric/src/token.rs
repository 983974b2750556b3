//! Tokens produced by the scanner and consumed by the postfix converter

use crate::units::Unit;
use serde::Serialize;
use std::fmt;

/// Kind of a token, with the payload meaningful for that kind
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub enum TokenKind {
    /// Numeric literal and its parsed value
    Number(f64),
    Operator,
    ParenOpen,
    ParenClose,
    /// Letters that did not match a registered unit
    Symbol,
    /// Registered unit name and the unit it denotes
    Unit(Unit),
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Token {
    /// Byte offset into the input
    pub position: usize,
    pub kind: TokenKind,
    /// The matched substring
    pub text: String,
}

impl Token {
    pub fn new(position: usize, kind: TokenKind, text: impl Into<String>) -> Self {
        Self {
            position,
            kind,
            text: text.into(),
        }
    }

    pub fn operator(position: usize, symbol: impl Into<String>) -> Self {
        Self::new(position, TokenKind::Operator, symbol)
    }

    /// Literal value for numbers, scale for units
    pub fn value(&self) -> Option<f64> {
        match self.kind {
            TokenKind::Number(value) => Some(value),
            TokenKind::Unit(unit) => Some(unit.scale),
            TokenKind::Operator
            | TokenKind::ParenOpen
            | TokenKind::ParenClose
            | TokenKind::Symbol => None,
        }
    }

    /// Whether this token ends an operand (so a following `+`/`-` is binary)
    pub fn ends_operand(&self) -> bool {
        matches!(
            self.kind,
            TokenKind::Number(_) | TokenKind::Unit(_) | TokenKind::ParenClose
        )
    }

    pub fn kind_name(&self) -> &'static str {
        match self.kind {
            TokenKind::Number(_) => "Literal, Numeric",
            TokenKind::Operator => "Operator",
            TokenKind::ParenOpen => "Parenthesis, Open",
            TokenKind::ParenClose => "Parenthesis, Close",
            TokenKind::Symbol => "Symbol",
            TokenKind::Unit(_) => "Unit",
        }
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{:<18}] @ ({}) : {}",
            self.kind_name(),
            self.position,
            self.text
        )?;
        match self.kind {
            TokenKind::Number(value) => write!(f, " [{}]", value),
            TokenKind::Unit(unit) => write!(f, " [x{}]", unit.scale),
            _ => Ok(()),
        }
    }
}
