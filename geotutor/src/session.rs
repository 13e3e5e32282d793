//! Form state for an interactive tutoring session
//!
//! Holds the selected shape and the raw text entered for each of its fields.
//! Selecting a shape always starts from an empty form.

use crate::{Calculation, Field, Shape, Tutor, TutorError, TutorResult};

#[derive(Debug, Clone, Default)]
pub struct Session {
    shape: Option<Shape>,
    entries: Vec<(Field, String)>,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    /// Select a shape, discarding every value entered so far
    pub fn select_shape(&mut self, shape: Shape) {
        self.shape = Some(shape);
        self.entries.clear();
    }

    pub fn shape(&self) -> Option<Shape> {
        self.shape
    }

    /// Fields the selected shape needs; empty when nothing is selected
    pub fn required_fields(&self) -> &'static [Field] {
        self.shape.map(|s| s.fields()).unwrap_or_default()
    }

    /// Record the raw text for a field of the selected shape
    pub fn enter(&mut self, field: Field, raw: impl Into<String>) -> TutorResult<()> {
        let shape = self.shape.ok_or(TutorError::MissingShape)?;
        if !shape.requires(field) {
            return Err(TutorError::UnknownField {
                shape,
                name: field.key().to_string(),
            });
        }

        let raw = raw.into();
        match self.entries.iter_mut().find(|(f, _)| *f == field) {
            Some(entry) => entry.1 = raw,
            None => self.entries.push((field, raw)),
        }
        Ok(())
    }

    pub fn entry(&self, field: Field) -> Option<&str> {
        self.entries
            .iter()
            .find(|(f, _)| *f == field)
            .map(|(_, raw)| raw.as_str())
    }

    /// Run a calculation on the current form
    pub fn calculate(&self, tutor: &Tutor) -> TutorResult<Calculation> {
        let shape = self.shape.ok_or(TutorError::MissingShape)?;
        tutor.calculate_fields(
            Some(shape.name()),
            self.entries
                .iter()
                .map(|(field, raw)| (field.key(), raw.as_str())),
        )
    }
}
