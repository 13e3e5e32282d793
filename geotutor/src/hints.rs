//! Hint engine
//!
//! Each shape has an ordered list of diagnostic rules. Rules are evaluated in
//! that order and evaluation stops at the first match, so at most one hint is
//! produced per calculation. The non-positivity rule always comes first.
//!
//! Every evaluated rule is recorded in the report's `checks`, which lets a
//! caller show how the hint was reached.

use crate::{Field, HintThresholds, Measurements, Shape};
use serde::Serialize;

/// A diagnostic rule
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum HintRule {
    /// Some measurement is zero or negative
    NonPositive,
    /// A field that belongs to a different shape was supplied
    ShapeMismatch,
    /// A square side above the configured limit
    OversizedSquare,
    /// A radius large enough that it is probably a diameter
    DiameterConfusion,
    /// A rectangle whose length equals its width
    SquareRectangle,
    /// Three sides that cannot close a triangle
    TriangleInequality,
}

/// The hint surfaced to the learner
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Hint {
    pub rule: HintRule,
    pub message: String,
}

/// A record of one rule evaluation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RuleCheck {
    pub rule: HintRule,
    pub matched: bool,
}

/// Outcome of hint evaluation: the chosen hint plus the rules checked to find it
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct HintReport {
    pub hint: Option<Hint>,
    pub checks: Vec<RuleCheck>,
}

const SQUARE_RULES: &[HintRule] = &[
    HintRule::NonPositive,
    HintRule::ShapeMismatch,
    HintRule::OversizedSquare,
];
const RECTANGLE_RULES: &[HintRule] = &[HintRule::NonPositive, HintRule::SquareRectangle];
const TRIANGLE_RULES: &[HintRule] = &[
    HintRule::NonPositive,
    HintRule::ShapeMismatch,
    HintRule::TriangleInequality,
];
const CIRCLE_RULES: &[HintRule] = &[
    HintRule::NonPositive,
    HintRule::ShapeMismatch,
    HintRule::DiameterConfusion,
];

impl HintRule {
    /// Rules for a shape, in priority order
    pub fn for_shape(shape: Shape) -> &'static [HintRule] {
        match shape {
            Shape::Square => SQUARE_RULES,
            Shape::Rectangle => RECTANGLE_RULES,
            Shape::Triangle => TRIANGLE_RULES,
            Shape::Circle => CIRCLE_RULES,
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            HintRule::NonPositive => "every measurement is greater than zero",
            HintRule::ShapeMismatch => "only the shape's own fields are used",
            HintRule::OversizedSquare => "side length is within a sensible range",
            HintRule::DiameterConfusion => "radius is not a diameter",
            HintRule::SquareRectangle => "length differs from width",
            HintRule::TriangleInequality => "sides satisfy the triangle inequality",
        }
    }

    /// Check this rule, returning the hint message if it fires.
    ///
    /// A rule whose fields are absent does not fire; missing input is the
    /// formula engine's concern.
    pub fn check(
        &self,
        shape: Shape,
        measurements: &Measurements,
        thresholds: &HintThresholds,
    ) -> Option<String> {
        match self {
            HintRule::NonPositive => measurements
                .iter()
                .find(|(_, value)| *value <= 0.0)
                .map(|(field, _)| format!("{} must be greater than zero.", field.label())),
            HintRule::ShapeMismatch => {
                let foreign = foreign_fields(shape);
                if foreign.iter().any(|f| measurements.contains(*f)) {
                    mismatch_message(shape).map(str::to_string)
                } else {
                    None
                }
            }
            HintRule::OversizedSquare => measurements
                .get(Field::Side)
                .filter(|side| *side > thresholds.max_square_side)
                .map(|_| {
                    "That's a very large square! Double-check your side length.".to_string()
                }),
            HintRule::DiameterConfusion => measurements
                .get(Field::Radius)
                .filter(|radius| *radius > thresholds.max_circle_radius)
                .map(|_| {
                    "Large radius? Make sure you're not confusing it with diameter.".to_string()
                }),
            HintRule::SquareRectangle => {
                let length = measurements.get(Field::Length)?;
                let width = measurements.get(Field::Width)?;
                if length == width && length > 0.0 {
                    Some(
                        "Length equals width, so this is actually a square! \
                         Rectangles have different length and width."
                            .to_string(),
                    )
                } else {
                    None
                }
            }
            HintRule::TriangleInequality => {
                let a = measurements.get(Field::Side1)?;
                let b = measurements.get(Field::Side2)?;
                let c = measurements.get(Field::Side3)?;
                if a + b <= c || b + c <= a || a + c <= b {
                    Some(
                        "Invalid triangle! The sum of any two sides must be greater than the third side."
                            .to_string(),
                    )
                } else {
                    None
                }
            }
        }
    }
}

/// Fields a learner may confuse with this shape's own.
///
/// Measurements parsed for a shape can never contain these; the check only
/// matters for measurements assembled directly with `Measurements::from_pairs`.
fn foreign_fields(shape: Shape) -> &'static [Field] {
    match shape {
        Shape::Square | Shape::Triangle => &[Field::Radius],
        Shape::Circle => &[Field::Side, Field::Length, Field::Width],
        Shape::Rectangle => &[],
    }
}

fn mismatch_message(shape: Shape) -> Option<&'static str> {
    match shape {
        Shape::Square => Some("Squares don't use radius! Use side length instead."),
        Shape::Circle => Some("Circles use only radius, not side, length, or width."),
        Shape::Triangle => Some("Triangles don't use radius. Use base and height for area."),
        Shape::Rectangle => None,
    }
}

/// Evaluate a shape's rules in priority order, stopping at the first match
pub fn evaluate_hints(
    shape: Shape,
    measurements: &Measurements,
    thresholds: &HintThresholds,
) -> HintReport {
    let mut report = HintReport::default();

    for &rule in HintRule::for_shape(shape) {
        let message = rule.check(shape, measurements, thresholds);
        report.checks.push(RuleCheck {
            rule,
            matched: message.is_some(),
        });

        if let Some(message) = message {
            tracing::debug!(%shape, ?rule, "hint rule matched");
            report.hint = Some(Hint { rule, message });
            break;
        }
    }

    report
}

/// The single hint for a calculation, if any
pub fn generate_hint(
    shape: Shape,
    measurements: &Measurements,
    thresholds: &HintThresholds,
) -> Option<Hint> {
    evaluate_hints(shape, measurements, thresholds).hint
}
