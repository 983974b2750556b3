//! Display strings for solutions: integers, decimals and Imperial fractions

use crate::solution::{is_epsilon_integer, Solution};
use crate::units::{scale, Unit, UnitSystem, UnitTable};
use rust_decimal::prelude::FromPrimitive;
use rust_decimal::Decimal;
use tracing::warn;

/// Denominators tried, in order, when rendering Imperial fractions
pub const DENOMINATORS: [u32; 14] = [2, 3, 4, 5, 6, 7, 8, 10, 12, 16, 32, 64, 128, 1000];

/// Fractional digits kept by the decimal fallback
pub const DECIMAL_PLACES: u32 = 6;

pub struct Formatter<'a> {
    units: &'a UnitTable,
    decimal_point: char,
    imperial_fractions: bool,
}

impl<'a> Formatter<'a> {
    pub fn new(units: &'a UnitTable, decimal_point: char, imperial_fractions: bool) -> Self {
        Self {
            units,
            decimal_point,
            imperial_fractions,
        }
    }

    /// Render a solution in its attached unit, e.g. `42in`, `1+1/8in`,
    /// `3'6"` or `304.8mm`
    pub fn format(&self, solution: &Solution) -> String {
        let magnitude = solution.magnitude();
        let suffix = self.unit_name(&solution.units);

        if is_epsilon_integer(magnitude) {
            return format!("{}{}", magnitude.round() as i64, suffix);
        }

        if self.imperial_fractions && solution.units.system == UnitSystem::Imperial {
            if let Some(fraction) = self.fraction(solution, suffix) {
                return fraction;
            }
        }

        format!("{}{}", self.decimal(magnitude), suffix)
    }

    fn unit_name(&self, unit: &Unit) -> &'static str {
        match self.units.name_of(unit) {
            Some(name) => name,
            None => {
                warn!(scale = unit.scale, "no short name registered for unit scale");
                ""
            }
        }
    }

    fn fraction(&self, solution: &Solution, suffix: &str) -> Option<String> {
        let magnitude = solution.magnitude();
        let whole = magnitude.trunc();
        let frac = (magnitude - whole).abs();
        let sign = if magnitude < 0.0 { "-" } else { "" };

        // feet with a whole number of inches left over render as 3'6";
        // inches are counted from the base value, which is exact in thou
        if solution.units.scale == scale::imperial::FOOT {
            let inches = solution.value.abs() / scale::imperial::INCH;
            if is_epsilon_integer(inches) {
                let inches = inches.round() as i64;
                let (feet, inches) = (inches / 12, inches % 12);
                return Some(if feet == 0 {
                    format!("{}{}\"", sign, inches)
                } else {
                    format!("{}{}'{}\"", sign, feet, inches)
                });
            }
        }

        DENOMINATORS.iter().find_map(|&denominator| {
            let numerator = frac * f64::from(denominator);
            if !is_epsilon_integer(numerator) {
                return None;
            }
            let numerator = numerator.round() as i64;

            Some(if whole == 0.0 {
                format!("{}{}/{}{}", sign, numerator, denominator, suffix)
            } else {
                let joiner = if magnitude < 0.0 { '-' } else { '+' };
                format!(
                    "{}{}{}/{}{}",
                    whole as i64, joiner, numerator, denominator, suffix
                )
            })
        })
    }

    fn decimal(&self, magnitude: f64) -> String {
        let text = match Decimal::from_f64(magnitude) {
            Some(decimal) => decimal.round_dp(DECIMAL_PLACES).normalize().to_string(),
            None => magnitude.to_string(),
        };

        if self.decimal_point == '.' {
            text
        } else {
            text.replace('.', &self.decimal_point.to_string())
        }
    }
}
