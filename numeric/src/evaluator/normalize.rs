//! Rescale a solution's display unit to the most readable equivalent
//!
//! Rules are applied repeatedly until none matches. Only the attached unit
//! changes; the stored base value is preserved.

use crate::solution::{is_epsilon_integer, Solution};
use crate::units::{scale, Unit, UnitSystem, UnitTable};

pub fn normalize(solution: Solution, table: &UnitTable) -> Solution {
    match table.system() {
        UnitSystem::Generic => solution,
        _ if solution.value == 0.0 => solution.with_units(table.default_unit()),
        UnitSystem::Imperial => fixed_point(solution, UnitSystem::Imperial, next_imperial),
        UnitSystem::Metric => fixed_point(solution, UnitSystem::Metric, next_metric),
    }
}

fn fixed_point(
    mut solution: Solution,
    system: UnitSystem,
    next: fn(&Solution) -> Option<f64>,
) -> Solution {
    while let Some(scale) = next(&solution) {
        solution.units = Unit::new(scale, system);
    }
    solution
}

/// Yards are never a display unit: they always fold back to feet.
fn next_imperial(solution: &Solution) -> Option<f64> {
    use scale::imperial::*;

    let magnitude = solution.magnitude().abs();
    let current = solution.units.scale;

    if current == THOU && magnitude >= INCH {
        Some(INCH)
    } else if current == INCH && magnitude > 72.0 {
        Some(FOOT)
    } else if current == INCH && magnitude >= 12.0 && is_epsilon_integer(solution.value / FOOT) {
        Some(FOOT)
    } else if current == YARD {
        Some(FOOT)
    } else if current == FOOT && magnitude >= 5280.0 && is_epsilon_integer(solution.value / MILE)
    {
        Some(MILE)
    } else {
        None
    }
}

/// Centimetres are never a display unit: they always fold to metres.
fn next_metric(solution: &Solution) -> Option<f64> {
    use scale::metric::*;

    let magnitude = solution.magnitude().abs();
    let current = solution.units.scale;

    if current == KILOMETRE && magnitude >= 1000.0 {
        Some(MEGAMETRE)
    } else if current == METRE && magnitude >= 1000.0 {
        Some(KILOMETRE)
    } else if current == MILLIMETRE && magnitude >= 1000.0 {
        Some(METRE)
    } else if current == CENTIMETRE {
        Some(METRE)
    } else if current == MEGAMETRE && magnitude < 1.0 {
        Some(KILOMETRE)
    } else if current == KILOMETRE && magnitude < 1.0 {
        Some(METRE)
    } else if current == METRE && magnitude < 1.0 {
        Some(MILLIMETRE)
    } else {
        None
    }
}
