use crate::config::{self, CompilerConfig};
use crate::error::CompilerError;
use crate::evaluator::{self, Evaluator};
use crate::formatter::Formatter;
use crate::operators::OperatorTable;
use crate::parser::Scanner;
use crate::solution::Solution;
use crate::token::Token;
use crate::units::{Unit, UnitSystem, UnitTable};
use crate::NumericResult;
use tracing::debug;

/// The expression compiler.
///
/// Owns the configuration and the unit/operator tables, and runs
/// scan → postfix → evaluate → normalize for each input. Evaluation never
/// mutates the compiler; only the `set_*` methods do.
#[derive(Debug, Clone)]
pub struct Compiler {
    config: CompilerConfig,
    operators: OperatorTable,
    units: UnitTable,
}

impl Default for Compiler {
    fn default() -> Self {
        Self::with_config(CompilerConfig::default())
    }
}

impl Compiler {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: CompilerConfig) -> Self {
        Self {
            units: UnitTable::for_system(config.unit_system),
            operators: OperatorTable::default(),
            config,
        }
    }

    pub fn config(&self) -> &CompilerConfig {
        &self.config
    }

    pub fn units(&self) -> &UnitTable {
        &self.units
    }

    pub fn unit_system(&self) -> UnitSystem {
        self.config.unit_system
    }

    /// Select the output system and rebuild the unit table
    pub fn set_unit_out(&mut self, system: UnitSystem) {
        debug!(%system, "selecting unit system");
        self.config.unit_system = system;
        self.units = UnitTable::for_system(system);
    }

    pub fn set_imperial_fractions(&mut self, enabled: bool) {
        self.config.imperial_fractions = enabled;
    }

    /// Select the decimal separator. Digits, operators, parentheses and unit
    /// letters are rejected and leave the current separator in place.
    pub fn set_decimal_point(&mut self, decimal_point: char) -> NumericResult<()> {
        check_decimal_point(decimal_point)?;
        self.config.decimal_point = decimal_point;
        Ok(())
    }

    /// Display unit of the active system (the foot for Imperial)
    pub fn default_unit(&self) -> Unit {
        self.units.default_unit()
    }

    /// Compile and evaluate `input`.
    ///
    /// `previous` is the result of the prior evaluation, if any; a unitless
    /// expression continues in its unit.
    pub fn eval(&self, input: &str, previous: Option<&Solution>) -> NumericResult<Solution> {
        let tokens = self.parse(input)?;
        self.solve(&tokens, previous)
    }

    pub fn format(&self, solution: &Solution) -> String {
        Formatter::new(
            &self.units,
            self.config.decimal_point,
            self.config.imperial_fractions,
        )
        .format(solution)
    }

    /// Scan `input` into tokens
    pub fn parse(&self, input: &str) -> NumericResult<Vec<Token>> {
        if input.len() > self.config.max_input_bytes {
            return Err(CompilerError::parser(format!(
                "Input exceeds {} bytes",
                self.config.max_input_bytes
            )));
        }

        check_decimal_point(self.config.decimal_point)?;

        Scanner::new(&self.units, &self.operators, self.config.decimal_point).scan(input)
    }

    /// Reorder scanned tokens into postfix
    pub fn to_postfix(&self, tokens: &[Token]) -> NumericResult<Vec<Token>> {
        evaluator::to_postfix(tokens, &self.operators)
    }

    /// Evaluate scanned tokens and normalize the result
    pub fn solve(&self, tokens: &[Token], previous: Option<&Solution>) -> NumericResult<Solution> {
        let postfix = self.to_postfix(tokens)?;
        let solution = Evaluator::new(&self.units, &self.operators).evaluate(&postfix, previous)?;
        Ok(self.normalize(solution))
    }

    /// Rescale the display unit to the most readable equivalent
    pub fn normalize(&self, solution: Solution) -> Solution {
        evaluator::normalize(solution, &self.units)
    }
}

fn check_decimal_point(decimal_point: char) -> NumericResult<()> {
    if config::is_valid_decimal_point(decimal_point) {
        Ok(())
    } else {
        Err(CompilerError::parser(format!(
            "Invalid decimal point '{}'",
            decimal_point
        )))
    }
}
