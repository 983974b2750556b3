//! # Numeric
//!
//! **A smart numeric edit box, minus the edit box.**
//!
//! Compiles free-form text such as `3ft 6in + 2'` or `0x1F * 2` into a single
//! value tagged with a physical unit, and renders it back in the most readable
//! form for the selected unit system.
//!
//! ## Quick Start
//!
//! ```rust
//! use numeric::{Compiler, NumericResult, UnitSystem};
//!
//! fn main() -> NumericResult<()> {
//!     let mut compiler = Compiler::new();
//!     compiler.set_unit_out(UnitSystem::Imperial);
//!
//!     let solution = compiler.eval("3ft 6in", None)?;
//!     assert_eq!(compiler.format(&solution), "3'6\"");
//!
//!     // unitless input continues in the previous result's unit
//!     let next = compiler.eval("5", Some(&solution))?;
//!     assert_eq!(compiler.format(&next), "5ft");
//!     Ok(())
//! }
//! ```
//!
//! ## Pipeline
//!
//! ```text
//! text → Scanner → tokens → to_postfix → RPN → Evaluator → normalize → Formatter
//! ```
//!
//! ### Unit systems
//! Metric values are stored in metres, Imperial values in thou. Units of the
//! other system are still accepted on input (`12in` under Metric).

pub mod compiler;
pub mod config;
pub mod error;
pub mod evaluator;
pub mod formatter;
pub mod operators;
pub mod parser;
pub mod solution;
pub mod token;
pub mod units;

pub use compiler::Compiler;
pub use config::CompilerConfig;
pub use error::{CompilerError, Stage};
pub use formatter::Formatter;
pub use operators::{Operator, OperatorKind, OperatorTable};
pub use solution::{is_epsilon_integer, Solution};
pub use token::{Token, TokenKind};
pub use units::{Unit, UnitSystem, UnitTable};

/// Result type for compiler operations
pub type NumericResult<T> = Result<T, CompilerError>;

#[cfg(test)]
mod tests;
