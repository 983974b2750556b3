use crate::units::Unit;
use serde::Serialize;

/// Tolerance under which a float is treated as its nearest integer
pub const EPSILON: f64 = 1e-14;

/// Whether `d` is within [`EPSILON`] of its nearest integer
pub fn is_epsilon_integer(d: f64) -> bool {
    (d - d.round()).abs() <= EPSILON
}

/// A value tagged with the unit it is displayed in.
///
/// `value` is always expressed in the base unit of the active system, so
/// `value / units.scale` recovers the magnitude in the attached unit.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct Solution {
    pub value: f64,
    pub units: Unit,
}

impl Solution {
    pub fn new(value: f64, units: Unit) -> Self {
        Self { value, units }
    }

    /// Magnitude expressed in the attached display unit
    pub fn magnitude(&self) -> f64 {
        self.value / self.units.scale
    }

    /// The same value displayed in another unit
    pub fn with_units(self, units: Unit) -> Self {
        Self { units, ..self }
    }
}
