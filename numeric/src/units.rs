//! Unit tables for the Metric and Imperial systems
//!
//! Every system stores magnitudes in a single base unit:
//! - Metric (and Generic): the metre
//! - Imperial: the thou (thousandth of an inch)
//!
//! Units of the other system stay registered with scales relative to the
//! active base, so `12in` still parses while Metric output is selected.

use serde::Serialize;
use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

/// Scale factors of every supported unit, relative to each system's base
pub mod scale {
    /// Relative to the metre
    pub mod metric {
        pub const MILLIMETRE: f64 = 0.001;
        pub const CENTIMETRE: f64 = 0.01;
        pub const METRE: f64 = 1.0;
        pub const KILOMETRE: f64 = 1000.0;
        pub const MEGAMETRE: f64 = 1_000_000.0;

        pub const INCH: f64 = 0.0254;
        pub const FOOT: f64 = 0.3048;
        pub const YARD: f64 = 0.9144;
        pub const MILE: f64 = 1609.344;
    }

    /// Relative to the thou
    pub mod imperial {
        use super::metric;

        pub const THOU: f64 = 1.0;
        pub const INCH: f64 = 1000.0;
        pub const FOOT: f64 = 12.0 * INCH;
        pub const YARD: f64 = 3.0 * FOOT;
        pub const MILE: f64 = 5280.0 * FOOT;

        pub const MILLIMETRE: f64 = metric::MILLIMETRE * INCH / metric::INCH;
        pub const CENTIMETRE: f64 = metric::CENTIMETRE * INCH / metric::INCH;
        pub const METRE: f64 = metric::METRE * INCH / metric::INCH;
        pub const KILOMETRE: f64 = metric::KILOMETRE * INCH / metric::INCH;
        pub const MEGAMETRE: f64 = metric::MEGAMETRE * INCH / metric::INCH;
    }
}

/// Measurement system a unit belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
pub enum UnitSystem {
    /// No physical unit attached
    #[default]
    Generic,
    Metric,
    Imperial,
}

impl fmt::Display for UnitSystem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UnitSystem::Generic => write!(f, "Generic"),
            UnitSystem::Metric => write!(f, "Metric"),
            UnitSystem::Imperial => write!(f, "Imperial"),
        }
    }
}

impl FromStr for UnitSystem {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "generic" => Ok(UnitSystem::Generic),
            "metric" => Ok(UnitSystem::Metric),
            "imperial" => Ok(UnitSystem::Imperial),
            other => Err(format!(
                "Unknown unit system '{}' (expected generic, metric or imperial)",
                other
            )),
        }
    }
}

/// A multiplier converting a magnitude in this unit to the system's base unit
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Unit {
    pub scale: f64,
    pub system: UnitSystem,
}

impl Unit {
    /// "No explicit unit": the identity for unit propagation
    pub const GENERIC: Unit = Unit {
        scale: 1.0,
        system: UnitSystem::Generic,
    };

    pub const fn new(scale: f64, system: UnitSystem) -> Self {
        Self { scale, system }
    }

    /// The scale-1 unit of a system (metre or thou)
    pub const fn base(system: UnitSystem) -> Self {
        Self::new(1.0, system)
    }

    pub fn is_generic(&self) -> bool {
        self.system == UnitSystem::Generic
    }
}

impl Default for Unit {
    fn default() -> Self {
        Self::GENERIC
    }
}

/// Name→unit and scale→name mappings for one active system.
///
/// Tables are immutable once built; changing the system builds a new one.
#[derive(Debug, Clone)]
pub struct UnitTable {
    system: UnitSystem,
    units: HashMap<&'static str, Unit>,
    // keyed by the bit pattern of the scale
    names: HashMap<u64, &'static str>,
}

impl UnitTable {
    pub fn for_system(system: UnitSystem) -> Self {
        let mut table = Self {
            system,
            units: HashMap::new(),
            names: HashMap::new(),
        };

        match system {
            UnitSystem::Imperial => {
                use scale::imperial::*;

                table.register(&["mm"], MILLIMETRE, UnitSystem::Metric);
                table.register(&["cm"], CENTIMETRE, UnitSystem::Metric);
                table.register(&["m"], METRE, UnitSystem::Metric);
                table.register(&["km", "Km"], KILOMETRE, UnitSystem::Metric);
                table.register(&["Mm"], MEGAMETRE, UnitSystem::Metric);

                table.register(&["th", "thou", "mil"], THOU, UnitSystem::Imperial);
                table.register(&["in", "inch", "inches", "\""], INCH, UnitSystem::Imperial);
                table.register(&["ft", "foot", "feet", "'"], FOOT, UnitSystem::Imperial);
                table.register(&["yd", "yard", "yds", "yards"], YARD, UnitSystem::Imperial);
                table.register(&["mi", "mile", "miles"], MILE, UnitSystem::Imperial);
            }
            UnitSystem::Metric | UnitSystem::Generic => {
                use scale::metric::*;

                table.register(&["mm"], MILLIMETRE, UnitSystem::Metric);
                table.register(&["cm"], CENTIMETRE, UnitSystem::Metric);
                table.register(&["m"], METRE, UnitSystem::Metric);
                table.register(&["km", "Km"], KILOMETRE, UnitSystem::Metric);
                table.register(&["Mm"], MEGAMETRE, UnitSystem::Metric);

                table.register(&["in", "inch", "inches", "\""], INCH, UnitSystem::Imperial);
                table.register(&["ft", "foot", "feet", "'"], FOOT, UnitSystem::Imperial);
                table.register(&["yd", "yard", "yds", "yards"], YARD, UnitSystem::Imperial);
                table.register(&["mi", "mile", "miles"], MILE, UnitSystem::Imperial);
            }
        }

        table
    }

    /// The first alias is the canonical short name used for rendering
    fn register(&mut self, aliases: &[&'static str], scale: f64, system: UnitSystem) {
        let unit = Unit::new(scale, system);
        for &alias in aliases {
            self.units.insert(alias, unit);
        }
        if let Some(&canonical) = aliases.first() {
            self.names.insert(scale.to_bits(), canonical);
        }
    }

    pub fn system(&self) -> UnitSystem {
        self.system
    }

    pub fn lookup(&self, name: &str) -> Option<Unit> {
        self.units.get(name).copied()
    }

    /// Short display name of a unit; empty for generic units
    pub fn name_of(&self, unit: &Unit) -> Option<&'static str> {
        if unit.is_generic() {
            return Some("");
        }
        self.names.get(&unit.scale.to_bits()).copied()
    }

    /// Display unit used when an expression carries no units of its own
    pub fn default_unit(&self) -> Unit {
        match self.system {
            UnitSystem::Generic | UnitSystem::Metric => Unit::base(self.system),
            UnitSystem::Imperial => Unit::new(scale::imperial::FOOT, UnitSystem::Imperial),
        }
    }

    /// The scale-1 unit of the active system
    pub fn base_unit(&self) -> Unit {
        Unit::base(self.system)
    }
}
