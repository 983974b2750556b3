use anyhow::{Context, Result};
use numeric::{Compiler, Solution, UnitSystem};
use std::io::{BufRead, Write};
use tracing::debug;

const PROMPT: &str = "Input > ";

const BANNER: &str = "\
=== Numeric edit box ===

Type a value or a sum, in metric or imperial units (or both).
Enter \"metric\", \"imperial\" or \"generic\" to change the unit system.
Enter a blank line to quit.
";

/// Run the edit box loop until a blank line or end of input.
///
/// Each evaluation continues in the unit of the previous result; switching
/// systems resets the previous result to zero in the new default unit.
pub fn run_repl<R: BufRead, W: Write>(
    compiler: &mut Compiler,
    input: R,
    output: &mut W,
    verbose: bool,
) -> Result<()> {
    writeln!(output, "{}", BANNER)?;

    let mut previous = Solution::new(0.0, compiler.default_unit());
    let mut lines = input.lines();

    loop {
        write!(output, "\n{}", PROMPT)?;
        output.flush()?;

        let Some(line) = lines.next() else {
            break;
        };
        let line = line.context("Failed to read input line")?;
        let line = line.trim_end_matches(['\r', '\n']);

        if line.is_empty() {
            break;
        }

        if let Some(system) = system_keyword(line) {
            compiler.set_unit_out(system);
            previous = Solution::new(0.0, compiler.default_unit());
            writeln!(output, "System units were set to {}", system)?;
            continue;
        }

        match compiler.eval(line, Some(&previous)) {
            Ok(solution) => {
                previous = solution;
                writeln!(output, "\nThe edit box shows: {}", compiler.format(&solution))?;
            }
            Err(e) => {
                debug!(error = %e, input = line, "evaluation failed");
                if verbose {
                    writeln!(output, "*** ERROR *** {}", e)?;
                } else {
                    writeln!(output, " - Error.")?;
                }
            }
        }
    }

    Ok(())
}

fn system_keyword(line: &str) -> Option<UnitSystem> {
    match line {
        "metric" => Some(UnitSystem::Metric),
        "imperial" => Some(UnitSystem::Imperial),
        "generic" => Some(UnitSystem::Generic),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn session(system: UnitSystem, script: &str, verbose: bool) -> String {
        let mut compiler = Compiler::new();
        compiler.set_unit_out(system);

        let mut output = Vec::new();
        run_repl(&mut compiler, script.as_bytes(), &mut output, verbose).unwrap();
        String::from_utf8(output).unwrap()
    }

    #[test]
    fn test_values_carry_the_previous_unit() {
        let output = session(UnitSystem::Imperial, "6in\n2\n\n", false);
        assert!(output.contains("The edit box shows: 6in"));
        assert!(output.contains("The edit box shows: 2in"));
    }

    #[test]
    fn test_switching_systems_resets_the_unit() {
        let output = session(UnitSystem::Metric, "5mm\nimperial\n3\n", false);
        assert!(output.contains("The edit box shows: 5mm"));
        assert!(output.contains("System units were set to Imperial"));
        assert!(output.contains("The edit box shows: 3ft"));
    }

    #[test]
    fn test_errors_do_not_end_the_session() {
        let output = session(UnitSystem::Metric, "1 2\n4\n", false);
        assert!(output.contains(" - Error."));
        assert!(output.contains("The edit box shows: 4m"));

        let output = session(UnitSystem::Metric, "1 2\n", true);
        assert!(output.contains("*** ERROR *** [SOLVE] Indeterminate Expression"));
    }

    #[test]
    fn test_blank_line_quits() {
        let output = session(UnitSystem::Metric, "\n7\n", false);
        assert!(!output.contains("The edit box shows"));
    }
}
