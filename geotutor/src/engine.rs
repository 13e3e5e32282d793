use crate::formula::compute;
use crate::hints::evaluate_hints;
use crate::measurements::{parse_field_map, parse_measurements};
use crate::{Calculation, Measurements, Shape, TutorConfig, TutorError, TutorResult};

/// The geometry tutor.
///
/// Stateless apart from its configuration: every calculation is independent.
#[derive(Debug, Clone, Default)]
pub struct Tutor {
    config: TutorConfig,
}

impl Tutor {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: TutorConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &TutorConfig {
        &self.config
    }

    /// Calculate from a shape name and `name=value` inputs
    ///
    /// A `None` shape reports `MissingShape` before any input is looked at.
    pub fn calculate(&self, shape: Option<&str>, inputs: &[&str]) -> TutorResult<Calculation> {
        let shape = resolve_shape(shape)?;
        let measurements = parse_measurements(shape, inputs)?;
        self.evaluate(shape, &measurements)
    }

    /// Calculate from a shape name and a mapping of field name to raw string
    pub fn calculate_fields<K, V>(
        &self,
        shape: Option<&str>,
        entries: impl IntoIterator<Item = (K, V)>,
    ) -> TutorResult<Calculation>
    where
        K: AsRef<str>,
        V: AsRef<str>,
    {
        let shape = resolve_shape(shape)?;
        let measurements = parse_field_map(shape, entries)?;
        self.evaluate(shape, &measurements)
    }

    /// Run both engines on already-parsed measurements
    ///
    /// The hint is chosen first, then area and perimeter are computed. A
    /// computation failure discards the whole result.
    pub fn evaluate(&self, shape: Shape, measurements: &Measurements) -> TutorResult<Calculation> {
        let report = evaluate_hints(shape, measurements, &self.config.hints);
        let computation = compute(shape, measurements, self.config.pi)?;

        tracing::info!(
            %shape,
            area = computation.area,
            perimeter = computation.perimeter,
            hint = ?report.hint.as_ref().map(|h| h.rule),
            "calculation complete"
        );

        Ok(Calculation {
            shape,
            measurements: measurements.clone(),
            area: computation.area,
            perimeter: computation.perimeter,
            formulas: shape.formulas(),
            hint: report.hint,
            checks: report.checks,
        })
    }
}

fn resolve_shape(shape: Option<&str>) -> TutorResult<Shape> {
    match shape.map(str::trim) {
        None | Some("") => Err(TutorError::MissingShape),
        Some(name) => name.parse(),
    }
}
