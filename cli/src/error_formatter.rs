use ariadne::{Color, Label, Report, ReportKind, Source};
use geotutor::{Field, TutorError};
use std::ops::Range;

/// Format a TutorError, pointing at the offending `name=value` argument when there is one
pub fn format_error(error: &TutorError, inputs: &[String]) -> String {
    let Some((source_text, span)) = locate(error, inputs) else {
        return format!("Error: {}", error);
    };
    let span = char_span(&source_text, span);

    let source_id = "arguments".to_string();
    let mut output = Vec::new();

    let mut report = Report::build(ReportKind::Error, &source_id, span.start)
        .with_message(error.to_string())
        .with_label(
            Label::new((&source_id, span))
                .with_message(label_message(error))
                .with_color(Color::Red),
        );

    if let Some(help) = help_message(error) {
        report = report.with_help(help);
    }

    match report
        .finish()
        .write((&source_id, Source::from(source_text.as_str())), &mut output)
    {
        Ok(_) => String::from_utf8_lossy(&output).to_string(),
        Err(_) => {
            // Fallback to simple format
            format!("Error: {}", error)
        }
    }
}

/// Join the arguments into one line and find the span the error refers to
fn locate(error: &TutorError, inputs: &[String]) -> Option<(String, Range<usize>)> {
    let source_text = inputs.join(" ");
    let mut offset = 0;

    for input in inputs {
        let (name, value_start) = match input.split_once('=') {
            Some((name, _)) => (name, name.len() + 1),
            None => (input.as_str(), input.len()),
        };

        let span = match error {
            TutorError::InvalidNumber { field, .. } | TutorError::MissingField { field }
                if Field::from_key(name) == Some(*field) =>
            {
                Some(offset + value_start..offset + input.len())
            }
            TutorError::UnknownField { name: unknown, .. } if name.trim() == unknown.as_str() => {
                Some(offset..offset + name.len())
            }
            _ => None,
        };

        if let Some(span) = span {
            return Some((source_text, span));
        }
        offset += input.len() + 1;
    }

    None
}

/// ariadne indexes sources by character, `locate` works in bytes
fn char_span(text: &str, span: Range<usize>) -> Range<usize> {
    let start = text[..span.start].chars().count();
    start..start + text[span].chars().count()
}

fn label_message(error: &TutorError) -> String {
    match error {
        TutorError::InvalidNumber { .. } => "not a number".to_string(),
        TutorError::MissingField { .. } => "no value given".to_string(),
        TutorError::UnknownField { shape, .. } => format!("not a {} field", shape),
        _ => String::new(),
    }
}

fn help_message(error: &TutorError) -> Option<String> {
    match error {
        TutorError::UnknownField { shape, .. } => Some(format!(
            "{} takes: {}",
            shape,
            shape
                .fields()
                .iter()
                .map(|f| format!("{}=<number>", f.key()))
                .collect::<Vec<_>>()
                .join(" ")
        )),
        TutorError::InvalidNumber { field, .. } | TutorError::MissingField { field } => {
            Some(format!("write it as {}=<number>, e.g. {}=5", field.key(), field.key()))
        }
        _ => None,
    }
}
