use crate::parser::charset;
use crate::units::UnitSystem;

/// Whether `c` can separate decimals without being read as a digit,
/// operator, parenthesis or unit letter
pub fn is_valid_decimal_point(c: char) -> bool {
    !(c.is_alphanumeric()
        || c.is_whitespace()
        || c.is_control()
        || charset::is_operator(c)
        || charset::is_unit_or_symbol(c)
        || matches!(c, '(' | ')'))
}

/// Compiler configuration, changed only between evaluations
#[derive(Debug, Clone, PartialEq)]
pub struct CompilerConfig {
    /// System results are expressed in
    pub unit_system: UnitSystem,

    /// Character accepted (alongside `.` and `,`) as decimal separator on
    /// input and used as the separator on output.
    /// Host locale discovery is the caller's business.
    pub decimal_point: char,

    /// Render Imperial results as fractions (`1+1/8in`, `3'6"`)
    pub imperial_fractions: bool,

    /// Maximum input length in bytes
    /// Real usage: ~20 bytes, Limit: 4KB
    pub max_input_bytes: usize,
}

impl Default for CompilerConfig {
    fn default() -> Self {
        Self {
            unit_system: UnitSystem::Generic,
            decimal_point: '.',
            imperial_fractions: true,
            max_input_bytes: 4096,
        }
    }
}

impl CompilerConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_unit_system(mut self, unit_system: UnitSystem) -> Self {
        self.unit_system = unit_system;
        self
    }
}
