//! # Geotutor Engine
//!
//! **Geometry answers that explain themselves**
//!
//! Geotutor computes the area and perimeter of elementary shapes and,
//! when the measurements reveal a likely misconception, returns a single
//! hint to guide the learner.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use geotutor::{Tutor, TutorResult};
//!
//! fn main() -> TutorResult<()> {
//!     let tutor = Tutor::new();
//!
//!     let calculation = tutor.calculate(Some("rectangle"), &["length=4", "width=4"])?;
//!
//!     assert_eq!(calculation.area, 16.0);
//!     assert!(calculation.hint.is_some());
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Core Concepts
//!
//! ### Shapes and fields
//! Four shapes are supported. Each one requires a fixed set of named
//! measurements (fields); a square needs a `side`, a circle a `radius`.
//!
//! ### Formulas
//! The formula engine turns measurements into an area and a perimeter.
//! Both succeed together or the calculation fails as a whole.
//!
//! ### Hints
//! The hint engine walks an ordered list of rules and stops at the first
//! one that matches, so at most one hint is ever reported.

pub mod config;
pub mod engine;
pub mod error;
pub mod formula;
pub mod hints;
pub mod measurements;
pub mod response;
pub mod session;
pub mod shape;

pub use config::{HintThresholds, PiMode, TutorConfig};
pub use engine::Tutor;
pub use error::TutorError;
pub use formula::{compute, Computation};
pub use hints::{evaluate_hints, generate_hint, Hint, HintReport, HintRule, RuleCheck};
pub use measurements::{parse_field_map, parse_measurements, parse_value, Measurements};
pub use response::Calculation;
pub use session::Session;
pub use shape::{Field, FormulaText, Shape};

/// Result type for Geotutor operations
pub type TutorResult<T> = Result<T, TutorError>;

#[cfg(test)]
mod tests;
