//! Postfix evaluation
//!
//! - `postfix`: shunting-yard conversion of scanned tokens
//! - `operations`: unit-aware arithmetic on operand pairs
//! - `normalize`: display-unit rescaling of the final value

pub mod normalize;
pub mod operations;
pub mod postfix;

use crate::error::CompilerError;
use crate::operators::OperatorTable;
use crate::solution::Solution;
use crate::token::{Token, TokenKind};
use crate::units::{Unit, UnitTable};
use crate::NumericResult;
use tracing::debug;

pub use normalize::normalize;
pub use postfix::to_postfix;

/// Walks a postfix stream with an operand stack
pub struct Evaluator<'a> {
    units: &'a UnitTable,
    operators: &'a OperatorTable,
}

impl<'a> Evaluator<'a> {
    pub fn new(units: &'a UnitTable, operators: &'a OperatorTable) -> Self {
        Self { units, operators }
    }

    /// Evaluate a postfix stream into a single solution.
    ///
    /// When no unit token appears anywhere in the expression, the result is
    /// expressed in the unit of `previous` (if it has one) or else in the
    /// active system's default unit.
    pub fn evaluate(
        &self,
        postfix: &[Token],
        previous: Option<&Solution>,
    ) -> NumericResult<Solution> {
        let base = self.units.base_unit();
        let mut stack: Vec<Solution> = Vec::with_capacity(postfix.len());
        let mut explicit_units = false;

        for token in postfix {
            match token.kind {
                TokenKind::Number(value) => stack.push(Solution::new(value, Unit::GENERIC)),

                TokenKind::Unit(unit) => {
                    explicit_units = true;
                    let operand = pop_operand(&mut stack, token)?;
                    stack.push(Solution::new(operand.value * unit.scale, unit));
                }

                TokenKind::Operator => {
                    let operator = self.operators.lookup(&token.text).ok_or_else(|| {
                        CompilerError::solver(format!("Unknown operator: {}", token.text))
                            .at(token.position)
                    })?;

                    let result = if operator.is_unary() {
                        let operand = pop_operand(&mut stack, token)?;
                        operations::unary(operator.kind, operand)
                    } else {
                        let rhs = pop_operand(&mut stack, token)?;
                        let lhs = pop_operand(&mut stack, token)?;
                        operations::binary(operator.kind, lhs, rhs, base)
                    }
                    .map_err(|e| e.at(token.position))?;

                    stack.push(result);
                }

                TokenKind::ParenOpen | TokenKind::ParenClose | TokenKind::Symbol => {
                    return Err(CompilerError::solver(format!(
                        "Unexpected token '{}'",
                        token.text
                    ))
                    .at(token.position));
                }
            }
        }

        let mut result = match stack.as_slice() {
            [single] => *single,
            _ => return Err(CompilerError::solver("Indeterminate Expression")),
        };

        if !explicit_units {
            let units = match previous {
                Some(previous) if !previous.units.is_generic() => previous.units,
                _ => self.units.default_unit(),
            };
            result = Solution::new(result.value * units.scale, units);
        }

        // values from another system are not re-expressed in its named units
        if result.units.system != self.units.system() {
            result.units = base;
        }

        debug!(
            value = result.value,
            scale = result.units.scale,
            system = %result.units.system,
            "evaluated"
        );

        Ok(result)
    }
}

fn pop_operand(stack: &mut Vec<Solution>, token: &Token) -> NumericResult<Solution> {
    stack
        .pop()
        .ok_or_else(|| CompilerError::solver("Expression is malformed").at(token.position))
}
