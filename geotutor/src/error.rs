use crate::{Field, Shape};

/// Error types for the tutor
///
/// Shape and field errors are input problems the presentation layer should
/// report and prompt again for. `Computation` means the formulas could not
/// produce a usable number and no result should be shown.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum TutorError {
    /// No shape was selected
    #[error("Please select a shape!")]
    MissingShape,

    /// The shape name is not one of the supported shapes
    #[error("Unknown shape '{0}' (expected one of: Square, Rectangle, Triangle, Circle)")]
    UnknownShape(String),

    /// A required field was absent or left blank
    #[error("Please enter a value for {}!", .field.label())]
    MissingField { field: Field },

    /// A field value did not parse as a finite number
    #[error("Invalid number for {}: '{}'", .field.label(), .input)]
    InvalidNumber { field: Field, input: String },

    /// A field name the selected shape does not use
    #[error("{} has no field named '{}' (expected: {})", .shape, .name, expected_keys(.shape))]
    UnknownField { shape: Shape, name: String },

    /// The formula engine could not produce a finite result
    #[error("Calculation failed: {0}")]
    Computation(String),

    /// The configuration could not be read
    #[error("Invalid configuration: {0}")]
    Config(String),
}

impl TutorError {
    /// The field this error is about, if any
    pub fn field(&self) -> Option<Field> {
        match self {
            TutorError::MissingField { field } | TutorError::InvalidNumber { field, .. } => {
                Some(*field)
            }
            _ => None,
        }
    }

    /// Whether the user can fix this by re-entering input
    pub fn is_input_error(&self) -> bool {
        !matches!(self, TutorError::Computation(_) | TutorError::Config(_))
    }
}

fn expected_keys(shape: &Shape) -> String {
    shape
        .fields()
        .iter()
        .map(|f| f.key())
        .collect::<Vec<_>>()
        .join(", ")
}
