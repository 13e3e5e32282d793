//! Measurement parsing
//!
//! Turns raw `name=value` strings (or a map of name to raw string) into
//! typed [`Measurements`] for a shape. Parsing guarantees the result holds
//! exactly the fields the shape requires, each a finite number.

use crate::{Field, Shape, TutorError, TutorResult};
use serde::ser::{Serialize, SerializeMap, Serializer};
use std::collections::HashMap;

/// Numeric field values for one calculation, in field order
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Measurements {
    values: Vec<(Field, f64)>,
}

impl Measurements {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build measurements from typed pairs without checking them against a shape.
    ///
    /// A repeated field keeps its position and takes the later value.
    pub fn from_pairs(pairs: impl IntoIterator<Item = (Field, f64)>) -> Self {
        let mut measurements = Self::new();
        for (field, value) in pairs {
            measurements.insert(field, value);
        }
        measurements
    }

    pub fn insert(&mut self, field: Field, value: f64) {
        match self.values.iter_mut().find(|(f, _)| *f == field) {
            Some(entry) => entry.1 = value,
            None => self.values.push((field, value)),
        }
    }

    pub fn get(&self, field: Field) -> Option<f64> {
        self.values
            .iter()
            .find(|(f, _)| *f == field)
            .map(|(_, v)| *v)
    }

    pub fn contains(&self, field: Field) -> bool {
        self.get(field).is_some()
    }

    /// Get a field the formulas depend on, or a computation error if absent
    pub fn require(&self, field: Field) -> TutorResult<f64> {
        self.get(field).ok_or_else(|| {
            TutorError::Computation(format!("missing value for {}", field.label()))
        })
    }

    pub fn iter(&self) -> impl Iterator<Item = (Field, f64)> + '_ {
        self.values.iter().copied()
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl Serialize for Measurements {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.values.len()))?;
        for (field, value) in &self.values {
            map.serialize_entry(field.key(), value)?;
        }
        map.end()
    }
}

/// Parse `name=value` inputs for a shape
///
/// Example: `parse_measurements(Shape::Rectangle, &["length=4", "width=2.5"])`
pub fn parse_measurements(shape: Shape, inputs: &[&str]) -> TutorResult<Measurements> {
    let mut entries = Vec::with_capacity(inputs.len());
    for input in inputs {
        match input.split_once('=') {
            Some((name, value)) => entries.push((name.trim(), value)),
            None => {
                return Err(TutorError::UnknownField {
                    shape,
                    name: input.trim().to_string(),
                })
            }
        }
    }
    parse_field_map(shape, entries)
}

/// Parse a mapping of field name to raw string for a shape
///
/// Names outside the shape's field set are rejected. Required fields are then
/// checked in the shape's field order; the first blank or non-numeric one is
/// reported.
pub fn parse_field_map<K, V>(
    shape: Shape,
    entries: impl IntoIterator<Item = (K, V)>,
) -> TutorResult<Measurements>
where
    K: AsRef<str>,
    V: AsRef<str>,
{
    let mut raw: HashMap<Field, String> = HashMap::new();
    for (name, value) in entries {
        let name = name.as_ref();
        let field = Field::from_key(name)
            .filter(|f| shape.requires(*f))
            .ok_or_else(|| TutorError::UnknownField {
                shape,
                name: name.trim().to_string(),
            })?;
        raw.insert(field, value.as_ref().to_string());
    }

    let mut measurements = Measurements::new();
    for &field in shape.fields() {
        let input = raw.get(&field).map(|s| s.trim()).unwrap_or_default();
        measurements.insert(field, parse_value(field, input)?);
    }

    tracing::debug!(%shape, fields = measurements.len(), "parsed measurements");
    Ok(measurements)
}

/// Parse one raw field value
pub fn parse_value(field: Field, input: &str) -> TutorResult<f64> {
    let input = input.trim();
    if input.is_empty() {
        return Err(TutorError::MissingField { field });
    }
    match input.parse::<f64>() {
        Ok(value) if value.is_finite() => Ok(value),
        _ => Err(TutorError::InvalidNumber {
            field,
            input: input.to_string(),
        }),
    }
}
