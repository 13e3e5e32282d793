use crate::formatter::Formatter;
use anyhow::{Context, Result};
use geotutor::{Field, Session, Shape, Tutor};
use inquire::{Select, Text};
use std::fmt;

enum NextStep {
    Recalculate,
    ChangeShape,
    Quit,
}

impl fmt::Display for NextStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            NextStep::Recalculate => "Change the measurements",
            NextStep::ChangeShape => "Pick another shape",
            NextStep::Quit => "Quit",
        };
        write!(f, "{}", label)
    }
}

pub fn run_interactive(tutor: &Tutor, trace: bool) -> Result<()> {
    let formatter = Formatter::new(tutor.config().decimals);
    let mut session = Session::new();

    loop {
        // Selecting a shape always starts from an empty form
        session.select_shape(select_shape()?);

        loop {
            prompt_fields(&mut session)?;

            match session.calculate(tutor) {
                Ok(calculation) => {
                    println!();
                    print!("{}", formatter.format_calculation(&calculation, trace));
                }
                Err(e) if e.is_input_error() => {
                    eprintln!("Error: {}", e);
                    continue;
                }
                Err(e) => {
                    tracing::warn!(error = %e, "calculation failed");
                    eprintln!("Error: {} Please check your inputs.", e);
                }
            }

            match select_next_step()? {
                NextStep::Recalculate => continue,
                NextStep::ChangeShape => break,
                NextStep::Quit => return Ok(()),
            }
        }
    }
}

fn select_shape() -> Result<Shape> {
    Select::new("Select a shape:", Shape::ALL.to_vec())
        .with_help_message("Use arrow keys to navigate, Enter to select")
        .prompt()
        .context("Failed to get shape selection")
}

fn prompt_fields(session: &mut Session) -> Result<()> {
    println!("\nEnter measurements:");

    for &field in session.required_fields() {
        let message = format!("{}:", field.label());
        let help = format!("Example: {}", example_value(field));

        let previous = session.entry(field).map(str::to_string);
        let mut prompt = Text::new(&message).with_help_message(&help);
        if let Some(previous) = &previous {
            prompt = prompt.with_default(previous);
        }

        let value = prompt
            .prompt()
            .context(format!("Failed to get value for {}", field.label()))?;
        session.enter(field, value)?;
    }

    Ok(())
}

fn select_next_step() -> Result<NextStep> {
    let choice = Select::new(
        "What next?",
        vec![NextStep::Recalculate, NextStep::ChangeShape, NextStep::Quit],
    )
    .prompt_skippable()
    .context("Failed to get next step")?;

    Ok(choice.unwrap_or(NextStep::Quit))
}

fn example_value(field: Field) -> &'static str {
    match field {
        Field::Side | Field::Length => "5",
        Field::Width | Field::Base => "3",
        Field::Height => "4",
        Field::Side1 => "3",
        Field::Side2 => "4",
        Field::Side3 => "5",
        Field::Radius => "2.5",
    }
}
