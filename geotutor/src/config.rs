use crate::{TutorError, TutorResult};
use serde::{Deserialize, Serialize};

/// Which value of π the formulas use
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PiMode {
    /// Full double precision
    #[default]
    Exact,
    /// 3.14, as taught on classroom worksheets
    Classroom,
}

impl PiMode {
    #[allow(clippy::approx_constant)]
    pub fn value(&self) -> f64 {
        match self {
            PiMode::Exact => std::f64::consts::PI,
            PiMode::Classroom => 3.14,
        }
    }
}

/// Limits above which a value is flagged as suspicious
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HintThresholds {
    /// A square side above this draws an "oversized" warning
    pub max_square_side: f64,

    /// A radius above this suggests a diameter was entered
    pub max_circle_radius: f64,
}

impl Default for HintThresholds {
    fn default() -> Self {
        Self {
            max_square_side: 100.0,
            max_circle_radius: 50.0,
        }
    }
}

/// Tutor configuration
///
/// Every field has a default, so a config file only needs to name what it changes:
///
/// ```json
/// { "pi": "classroom", "hints": { "max_circle_radius": 20 } }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TutorConfig {
    pub pi: PiMode,
    pub hints: HintThresholds,
    /// Decimal places used when presenting results
    pub decimals: usize,
}

impl Default for TutorConfig {
    fn default() -> Self {
        Self {
            pi: PiMode::Exact,
            hints: HintThresholds::default(),
            decimals: 2,
        }
    }
}

impl TutorConfig {
    /// Read a configuration from JSON bytes
    pub fn from_json(json: &[u8]) -> TutorResult<Self> {
        serde_json::from_slice(json)
            .map_err(|e| TutorError::Config(format!("JSON parse error: {}", e)))
    }

    pub fn with_pi(mut self, pi: PiMode) -> Self {
        self.pi = pi;
        self
    }
}
