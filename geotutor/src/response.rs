use crate::{FormulaText, Hint, Measurements, RuleCheck, Shape};
use serde::Serialize;

/// Result of one calculation
///
/// Carries everything the presentation layer needs: the computed values, the
/// formula descriptions for the shape, and at most one hint.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Calculation {
    pub shape: Shape,
    pub measurements: Measurements,
    pub area: f64,
    pub perimeter: f64,
    pub formulas: FormulaText,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hint: Option<Hint>,
    /// Hint rules evaluated, in order, up to and including the one that matched
    pub checks: Vec<RuleCheck>,
}

impl Calculation {
    pub fn hint_message(&self) -> Option<&str> {
        self.hint.as_ref().map(|h| h.message.as_str())
    }

    /// Area rounded to `decimals` places, as displayed
    pub fn area_display(&self, decimals: usize) -> String {
        format!("{:.*}", decimals, self.area)
    }

    pub fn perimeter_display(&self, decimals: usize) -> String {
        format!("{:.*}", decimals, self.perimeter)
    }
}
