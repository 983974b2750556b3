use ariadne::{Color, Label, Report, ReportKind, Source};
use numeric::{CompilerError, Stage};

const SOURCE_ID: &str = "input";

/// Format a CompilerError with fancy terminal output using Ariadne.
///
/// Errors without a position (or without source text) fall back to the
/// plain `[STAGE] message` form.
pub fn format_error(error: &CompilerError, source: &str) -> String {
    let Some(offset) = error.position.and_then(|p| char_offset(source, p)) else {
        return error.to_string();
    };

    let stage = match error.stage {
        Stage::Parser => "Parse error",
        Stage::Solver => "Solve error",
    };

    // ariadne spans count chars; errors at end of input point at the last one
    let length = source.chars().count();
    let offset = offset.min(length - 1);
    let end = offset + 1;

    let mut output = Vec::new();
    let report = Report::build(ReportKind::Error, SOURCE_ID, offset)
        .with_message(format!("{}: {}", stage, error.message))
        .with_label(
            Label::new((SOURCE_ID, offset..end))
                .with_message(&error.message)
                .with_color(Color::Red),
        )
        .finish();

    match report.write((SOURCE_ID, Source::from(source)), &mut output) {
        Ok(_) => String::from_utf8_lossy(&output).to_string(),
        Err(_) => error.to_string(),
    }
}

fn char_offset(source: &str, byte_offset: usize) -> Option<usize> {
    if source.is_empty() {
        return None;
    }
    source.get(..byte_offset).map(|prefix| prefix.chars().count())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_without_position_is_plain() {
        let error = CompilerError::solver("Indeterminate Expression");
        assert_eq!(
            format_error(&error, "1 2"),
            "[SOLVE] Indeterminate Expression"
        );
    }

    #[test]
    fn test_error_with_position_mentions_stage() {
        let error = CompilerError::parser("Unknown character '$'").at(2);
        let rendered = format_error(&error, "2 $ 3");
        assert!(rendered.contains("Parse error"));
        assert!(rendered.contains("Unknown character '$'"));
    }

    #[test]
    fn test_char_offset_counts_chars() {
        assert_eq!(char_offset("2·5", 3), Some(2));
        assert_eq!(char_offset("2·5", 2), None);
        assert_eq!(char_offset("", 0), None);
    }
}
