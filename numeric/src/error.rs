use serde::Serialize;
use std::fmt;
use thiserror::Error;

/// Pipeline stage that raised a [`CompilerError`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Stage {
    /// Scanning raw text into tokens
    Parser,
    /// Postfix conversion and evaluation
    Solver,
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Stage::Parser => write!(f, "PARSE"),
            Stage::Solver => write!(f, "SOLVE"),
        }
    }
}

/// Error raised by any stage of the compiler.
///
/// Errors are fatal to the call that raised them: no partial result is
/// produced and the compiler configuration is left untouched.
#[derive(Debug, Clone, PartialEq, Error)]
#[error("[{stage}] {message}")]
pub struct CompilerError {
    pub stage: Stage,
    pub message: String,
    /// Byte offset into the input of the offending character or token
    pub position: Option<usize>,
}

impl CompilerError {
    /// Create a scanning error
    pub fn parser(message: impl Into<String>) -> Self {
        Self {
            stage: Stage::Parser,
            message: message.into(),
            position: None,
        }
    }

    /// Create an evaluation error
    pub fn solver(message: impl Into<String>) -> Self {
        Self {
            stage: Stage::Solver,
            message: message.into(),
            position: None,
        }
    }

    /// Attach the input offset the error refers to
    pub fn at(mut self, position: usize) -> Self {
        self.position = Some(position);
        self
    }

    pub fn is_parser(&self) -> bool {
        self.stage == Stage::Parser
    }

    pub fn is_solver(&self) -> bool {
        self.stage == Stage::Solver
    }
}
