//! Unit-aware arithmetic on operand pairs
//!
//! Operands whose unit is Generic adopt the unit of the other side:
//! ```text
//! 2ft + 6      = 8ft
//! 3ft + 6in    = 3.5ft  (coarser unit kept)
//! 1mi - 1in    = 63359in  (finer unit kept below one mile)
//! 2ft / 2      = 1ft
//! 2ft * 3      = 6ft    (via the base unit)
//! ```

use crate::error::CompilerError;
use crate::operators::OperatorKind;
use crate::solution::Solution;
use crate::units::Unit;
use crate::NumericResult;

/// Apply a binary operator. `base` is the scale-1 unit of the active system.
pub fn binary(
    kind: OperatorKind,
    lhs: Solution,
    rhs: Solution,
    base: Unit,
) -> NumericResult<Solution> {
    match kind {
        OperatorKind::Multiply => Ok(Solution::new(lhs.value * rhs.value, base)),
        OperatorKind::Divide => divide(lhs, rhs, base),
        OperatorKind::Add | OperatorKind::Join => Ok(additive(lhs, rhs, base, |l, r| l + r)),
        OperatorKind::Subtract => Ok(additive(lhs, rhs, base, |l, r| l - r)),
        OperatorKind::UnaryPlus | OperatorKind::UnaryMinus => Err(CompilerError::solver(
            format!("{:?} is not a binary operator", kind),
        )),
    }
}

/// Apply a unary operator
pub fn unary(kind: OperatorKind, operand: Solution) -> NumericResult<Solution> {
    match kind {
        OperatorKind::UnaryPlus => Ok(operand),
        OperatorKind::UnaryMinus => Ok(Solution::new(-operand.value, operand.units)),
        OperatorKind::Multiply
        | OperatorKind::Divide
        | OperatorKind::Add
        | OperatorKind::Subtract
        | OperatorKind::Join => Err(CompilerError::solver(format!(
            "{:?} is not a unary operator",
            kind
        ))),
    }
}

fn divide(lhs: Solution, rhs: Solution, base: Unit) -> NumericResult<Solution> {
    let divisor = rhs.magnitude();
    if divisor == 0.0 {
        return Err(CompilerError::solver("Division by zero"));
    }
    let quotient = lhs.magnitude() / divisor;

    let units = if !rhs.units.is_generic() {
        rhs.units
    } else if !lhs.units.is_generic() {
        lhs.units
    } else {
        return Ok(Solution::new(quotient, base));
    };

    Ok(Solution::new(quotient * units.scale, units))
}

fn additive(lhs: Solution, rhs: Solution, base: Unit, op: fn(f64, f64) -> f64) -> Solution {
    match (lhs.units.is_generic(), rhs.units.is_generic()) {
        (true, true) => Solution::new(op(lhs.value, rhs.value), base),
        (false, true) => {
            let magnitude = op(lhs.magnitude(), rhs.magnitude());
            Solution::new(magnitude * lhs.units.scale, lhs.units)
        }
        (true, false) => {
            let magnitude = op(lhs.magnitude(), rhs.magnitude());
            Solution::new(magnitude * rhs.units.scale, rhs.units)
        }
        // both already in the shared base
        (false, false) => {
            let value = op(lhs.value, rhs.value);
            let (coarser, finer) = if rhs.units.scale > lhs.units.scale {
                (rhs.units, lhs.units)
            } else {
                (lhs.units, rhs.units)
            };
            // normalization never demotes Imperial units, so a result below
            // one coarse unit stays in the finer one
            let units = if (value / coarser.scale).abs() >= 1.0 {
                coarser
            } else {
                finer
            };
            Solution::new(value, units)
        }
    }
}
